//! Reusable UI components

mod doctor_card;
mod doctor_modal;

pub use doctor_card::*;
pub use doctor_modal::*;
