//! Repository trait for course storage.

use crate::domain::entities::Course;
use crate::domain::pagination::{Page, PageRequest};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for courses and their lessons.
///
/// Deliberately narrow: paging, lookup, insert-or-update, and delete.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCourseRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryCourseRepository`] - Process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Returns one page of courses ordered by id, with the total course count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_page(&self, request: PageRequest) -> Result<Page<Course>, AppError>;

    /// Finds a course and its lessons by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError>;

    /// Inserts a course without an id, or updates the course with the given id.
    ///
    /// The stored lesson collection is replaced by `course.lessons`. The
    /// returned course carries the assigned course and lesson ids.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when updating an id that no longer exists.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn save(&self, course: Course) -> Result<Course, AppError>;

    /// Removes a course together with its lessons.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the course does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, course: Course) -> Result<(), AppError>;
}
