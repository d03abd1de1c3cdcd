//! Application layer: validated course operations.
//!
//! Services consume repository traits and expose transfer objects, never
//! entities, to the transport layer.
//!
//! - [`dto`] - Transfer shapes for courses, lessons, and pages
//! - [`mapper::CourseMapper`] - Entity <-> transfer shape conversion
//! - [`services::CourseService`] - List, load, create, update, delete

pub mod dto;
pub mod mapper;
pub mod services;
