//! Detail overlay for a selected doctor

use dioxus::prelude::*;

use crate::types::{Doctor, Timings};

#[derive(Props, Clone, PartialEq)]
pub struct DoctorModalProps {
    pub doctor: Doctor,
    pub on_close: EventHandler<()>,
}

/// Full-screen overlay showing one doctor's complete profile.
///
/// Rendered by the parent only while a doctor is selected; the close
/// control is the single way out.
#[component]
pub fn DoctorModal(props: DoctorModalProps) -> Element {
    let doctor = &props.doctor;

    rsx! {
        div {
            class: "fixed inset-0 flex items-center justify-center bg-black/50 z-50",
            div {
                class: "bg-white p-8 rounded-2xl shadow-xl max-w-lg w-full relative",

                button {
                    class: "absolute top-3 right-4 text-gray-400 hover:text-red-500 text-2xl",
                    onclick: move |_| props.on_close.call(()),
                    "\u{00d7}"
                }

                div {
                    class: "text-center",
                    img {
                        src: "{doctor.image_url}",
                        alt: "{doctor.name}",
                        class: "w-28 h-28 mx-auto rounded-full border-4 border-green-400 mb-4 object-cover"
                    }
                    h2 { class: "text-2xl font-bold mb-1", "{doctor.name}" }
                    p { class: "text-green-600 mb-3", "{doctor.specialization}" }
                    p {
                        class: "text-gray-500 mb-2",
                        strong { "Qualification: " }
                        "{doctor.qualification}"
                    }
                    p {
                        class: "text-gray-500 mb-2",
                        strong { "Hospital: " }
                        "{doctor.hospital_name}"
                    }
                    p {
                        class: "text-gray-500 mb-2",
                        strong { "Address: " }
                        "{doctor.hospital_address}, {doctor.city}"
                    }
                    p {
                        class: "text-gray-500 mb-2",
                        strong { "Experience: " }
                        "{doctor.experience} years"
                    }
                    p {
                        class: "text-gray-500 mb-2",
                        strong { "Consultation Fee: " }
                        "{format_fee(doctor.consultation_fee)}"
                    }
                    p {
                        class: "text-gray-500 mb-2",
                        strong { "Available Days: " }
                        "{format_available_days(&doctor.available_days)}"
                    }
                    p {
                        class: "text-gray-500 mb-2",
                        strong { "Timings: " }
                        "{format_timings(&doctor.timings)}"
                    }
                    p {
                        class: "text-gray-600 mt-4 italic",
                        "\u{201c}{doctor.bio}\u{201d}"
                    }
                }
            }
        }
    }
}

fn format_fee(fee: f64) -> String {
    format!("Rs. {fee}")
}

fn format_available_days(days: &[String]) -> String {
    days.join(", ")
}

fn format_timings(timings: &Timings) -> String {
    format!("{} - {}", timings.start, timings.end)
}
