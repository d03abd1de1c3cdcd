//! Data Transfer Objects exchanged with clients.
//!
//! All DTOs use Serde for JSON serialization and validator for structural
//! input validation.

pub mod course;
pub mod page;

pub use course::{CourseDto, LessonDto};
pub use page::PageDto;
