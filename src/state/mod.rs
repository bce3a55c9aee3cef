//! View state for the doctor directory

use crate::types::Doctor;

/// Events feeding the directory view state.
#[derive(Debug, Clone)]
pub enum DirectoryEvent {
    /// The initial fetch resolved with the full record set.
    DoctorsLoaded(Vec<Doctor>),
    /// The initial fetch failed. The grid stays empty; the failure is
    /// logged where it is observed, never surfaced to the user.
    LoadFailed(String),
    /// The search input changed.
    QueryChanged(String),
    /// A card's "View Details" control was activated.
    DoctorSelected(Doctor),
    /// The detail overlay was dismissed.
    DetailDismissed,
}

/// All state for the directory page in one struct, mutated only through
/// [`DoctorDirectory::apply`].
///
/// `visible` is derived from `doctors` and `query` and recomputed whenever
/// either changes. `selected` holds a clone taken at selection time; it is
/// not revalidated if the record set changes afterwards.
#[derive(Debug, Clone, Default)]
pub struct DoctorDirectory {
    doctors: Vec<Doctor>,
    visible: Vec<Doctor>,
    query: String,
    selected: Option<Doctor>,
}

impl DoctorDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Doctors matching the active search, in load order.
    pub fn visible(&self) -> &[Doctor] {
        &self.visible
    }

    /// The active search string, as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The doctor shown in the detail overlay, if open.
    pub fn selected(&self) -> Option<&Doctor> {
        self.selected.as_ref()
    }

    /// Apply one event. Synchronous, no side effects.
    pub fn apply(&mut self, event: DirectoryEvent) {
        match event {
            DirectoryEvent::DoctorsLoaded(doctors) => {
                self.doctors = doctors;
                self.refilter();
            }
            DirectoryEvent::LoadFailed(_) => {}
            DirectoryEvent::QueryChanged(query) => {
                self.query = query;
                self.refilter();
            }
            DirectoryEvent::DoctorSelected(doctor) => {
                self.selected = Some(doctor);
            }
            DirectoryEvent::DetailDismissed => {
                self.selected = None;
            }
        }
    }

    fn refilter(&mut self) {
        if self.query.trim().is_empty() {
            self.visible = self.doctors.clone();
            return;
        }

        let query = self.query.to_lowercase();
        self.visible = self
            .doctors
            .iter()
            .filter(|doctor| {
                doctor.name.to_lowercase().contains(&query)
                    || doctor.specialization.to_lowercase().contains(&query)
            })
            .cloned()
            .collect();
    }
}
