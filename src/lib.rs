//! Random passwords with bounded numeric and special character counts.
//!
//! [`password::PasswordRequest`] checks raw user bounds and turns them into a
//! [`password::GenerationRequest`]; [`password::compose`] does the drawing with
//! whatever generator the caller hands in.

pub mod errors;
pub mod generators;
pub mod logging;
pub mod password;
