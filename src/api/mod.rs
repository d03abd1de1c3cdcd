//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into [`crate::application::services::CourseService`]
//! calls and renders the results as JSON.
//!
//! # Modules
//!
//! - [`dto`] - Query parameters and health check payloads
//! - [`extract`] - Extractors rejecting with the JSON error body
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
