//! Page components

mod doctors;

pub use doctors::*;
