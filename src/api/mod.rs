//! REST client for communicating with the HealthMate API server

mod client;
mod endpoints;

pub use client::*;
pub use endpoints::*;
