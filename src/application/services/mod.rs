//! Business logic services for the application layer.

pub mod course_service;

pub use course_service::{CourseService, MAX_PAGE_SIZE};
