//! Doctor card component

use dioxus::prelude::*;

use crate::types::Doctor;

/// Props for DoctorCard
#[derive(Props, Clone, PartialEq)]
pub struct DoctorCardProps {
    pub doctor: Doctor,
    pub on_view_details: EventHandler<Doctor>,
}

/// Card displaying a single doctor in the directory grid
#[component]
pub fn DoctorCard(props: DoctorCardProps) -> Element {
    let doctor = &props.doctor;

    rsx! {
        div {
            class: "bg-white p-6 rounded-xl shadow-md hover:-translate-y-2 transition-all duration-300 border border-gray-100",

            img {
                src: "{doctor.image_url}",
                alt: "{doctor.name}",
                class: "w-24 h-24 mx-auto rounded-full mb-4 object-cover border-4 border-green-300"
            }
            h3 {
                class: "text-xl font-semibold mb-1",
                "{doctor.name}"
            }
            p {
                class: "text-green-600 font-medium mb-1",
                "{doctor.specialization}"
            }
            p {
                class: "text-gray-500 mb-1",
                "{doctor.hospital_name}"
            }
            p {
                class: "text-gray-500 mb-4",
                "Experience: {doctor.experience} years"
            }
            button {
                class: "bg-green-600 text-white py-2 px-5 rounded-full text-sm hover:bg-green-700 active:scale-95 transition",
                onclick: {
                    let doctor = props.doctor.clone();
                    move |_| props.on_view_details.call(doctor.clone())
                },
                "View Details"
            }
        }
    }
}
