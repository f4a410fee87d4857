//! Domain layer: data model and errors for a single authentication attempt.

pub mod errors;
pub mod models;
