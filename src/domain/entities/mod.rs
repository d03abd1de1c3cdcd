//! Core domain entities.
//!
//! - [`Course`] - A course with its ordered lessons
//! - [`Lesson`] - A lesson owned by a course
//! - [`Category`] - Enumerated course category
//!
//! Entities carry `Option<i64>` identifiers: `None` until the store assigns one.

pub mod category;
pub mod course;
pub mod lesson;

pub use category::Category;
pub use course::Course;
pub use lesson::Lesson;
