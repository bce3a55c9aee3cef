//! Doctor directory page component

use dioxus::prelude::*;

use crate::components::{DoctorCard, DoctorModal};
use crate::state::{DirectoryEvent, DoctorDirectory};
use crate::types::Doctor;

/// Doctor directory - searchable grid of all doctors with a detail overlay
#[component]
pub fn Doctors() -> Element {
    let mut directory = use_signal(DoctorDirectory::new);

    // Fetch the full doctor list once on mount. A failure only logs; the
    // grid stays empty and remains interactive.
    use_effect(move || {
        spawn(async move {
            match fetch_doctors().await {
                Ok(doctors) => {
                    directory
                        .write()
                        .apply(DirectoryEvent::DoctorsLoaded(doctors));
                }
                Err(err) => {
                    tracing::error!("Failed to load doctors: {err}");
                    directory
                        .write()
                        .apply(DirectoryEvent::LoadFailed(err.to_string()));
                }
            }
        });
    });

    let visible = directory.read().visible().to_vec();
    let query = directory.read().query().to_string();
    let selected = directory.read().selected().cloned();

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-br from-blue-50 via-green-50 to-white text-gray-800 py-16 px-6 pt-28",
            div {
                class: "max-w-7xl mx-auto text-center",

                h1 {
                    class: "text-4xl font-bold text-green-700 mb-4",
                    "Meet All Our Doctors"
                }
                p {
                    class: "text-gray-600 mb-10 max-w-2xl mx-auto",
                    "Our HealthMate medical team brings together expert doctors from multiple specializations, ready to help you understand your reports and stay healthy."
                }

                // Search Bar
                div {
                    class: "mb-10 flex justify-center",
                    input {
                        r#type: "text",
                        value: "{query}",
                        oninput: move |e| {
                            directory.write().apply(DirectoryEvent::QueryChanged(e.value()))
                        },
                        placeholder: "Search by name or specialization...",
                        class: "w-full sm:w-1/2 px-5 py-3 rounded-full border border-gray-300 focus:ring-2 focus:ring-green-400 focus:border-green-400 outline-none text-gray-700 shadow-sm transition-all duration-200"
                    }
                }

                // Doctor Grid
                div {
                    class: "grid sm:grid-cols-2 md:grid-cols-3 gap-10",
                    if visible.is_empty() {
                        p {
                            class: "text-gray-500 col-span-full",
                            "No doctors found for \u{201c}{query}\u{201d}"
                        }
                    } else {
                        for doctor in visible {
                            DoctorCard {
                                key: "{doctor.id}",
                                doctor: doctor.clone(),
                                on_view_details: move |doctor: Doctor| {
                                    directory.write().apply(DirectoryEvent::DoctorSelected(doctor))
                                }
                            }
                        }
                    }
                }
            }

            // Doctor Details Overlay
            if let Some(doctor) = selected {
                DoctorModal {
                    doctor: doctor.clone(),
                    on_close: move |_| {
                        directory.write().apply(DirectoryEvent::DetailDismissed)
                    }
                }
            }
        }
    }
}

/// Server function to fetch the full doctor list
#[server]
async fn fetch_doctors() -> Result<Vec<Doctor>, ServerFnError> {
    let client = crate::api::server_client();
    client
        .get_doctors()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
