//! REST endpoint definitions
//!
//! Paths are joined onto the base URL configured via the `API_URL`
//! environment variable.

/// Base URL used when `API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://hackathon-backend-flax.vercel.app";

/// Returns the full doctor list in a success envelope.
pub const GET_DOCTORS: &str = "/api/doctors/getDoctor";
