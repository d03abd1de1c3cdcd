//! Course repository implementations.
//!
//! # Repositories
//!
//! - [`PgCourseRepository`] - PostgreSQL storage via SQLx
//! - [`InMemoryCourseRepository`] - Process-local storage used when no database
//!   is configured

pub mod in_memory_course_repository;
pub mod pg_course_repository;

pub use in_memory_course_repository::InMemoryCourseRepository;
pub use pg_course_repository::PgCourseRepository;
