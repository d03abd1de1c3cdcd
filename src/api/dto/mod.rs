//! Transport-only DTOs.
//!
//! Course payloads are the application-layer DTOs in
//! [`crate::application::dto`]; this module only holds what is specific to HTTP.

pub mod health;
pub mod pagination;
