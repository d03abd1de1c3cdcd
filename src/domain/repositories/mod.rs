//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for service unit tests.
//!
//! # Available Repositories
//!
//! - [`CourseRepository`] - Paginated course storage with owned lessons
//!
//! # Testing
//!
//! See integration tests in `tests/repository_course.rs` for usage examples.

pub mod course_repository;

pub use course_repository::CourseRepository;

#[cfg(test)]
pub use course_repository::MockCourseRepository;
