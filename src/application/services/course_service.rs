//! Course management service.

use crate::application::dto::{CourseDto, PageDto};
use crate::application::mapper::CourseMapper;
use crate::domain::pagination::PageRequest;
use crate::domain::repositories::CourseRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

/// Largest page a client may request.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Service for listing, loading, creating, updating, and deleting courses.
///
/// Every operation checks its inputs before touching the repository, so an
/// invalid request never reaches the store. The service keeps no state between
/// calls.
pub struct CourseService<R: CourseRepository + ?Sized> {
    repository: Arc<R>,
    mapper: CourseMapper,
}

impl<R: CourseRepository + ?Sized> CourseService<R> {
    /// Creates a new course service.
    pub fn new(repository: Arc<R>, mapper: CourseMapper) -> Self {
        Self { repository, mapper }
    }

    /// Returns one page of courses ordered by id.
    ///
    /// # Validation
    ///
    /// - `page_number` must be >= 0
    /// - `page_size` must be between 1 and [`MAX_PAGE_SIZE`]
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if validation fails.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list(
        &self,
        page_number: i64,
        page_size: i64,
    ) -> Result<PageDto<CourseDto>, AppError> {
        if page_number < 0 {
            return Err(AppError::bad_request(
                "Page number must not be negative",
                json!({ "page": page_number }),
            ));
        }

        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(AppError::bad_request(
                format!("Page size must be between 1 and {MAX_PAGE_SIZE}"),
                json!({ "page_size": page_size, "min": 1, "max": MAX_PAGE_SIZE }),
            ));
        }

        tracing::debug!(page_number, page_size, "Listing courses");

        let page = self
            .repository
            .find_page(PageRequest::new(page_number, page_size))
            .await?;
        let total_pages = page.total_pages();
        let page = page.map(|course| self.mapper.to_dto(course));

        Ok(PageDto::new(page.items, page.total_elements, total_pages))
    }

    /// Loads a single course.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `id` is not positive.
    /// Returns [`AppError::NotFound`] carrying `id` if no course exists.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn load_by_id(&self, id: i64) -> Result<CourseDto, AppError> {
        validate_id(id)?;

        self.repository
            .find_by_id(id)
            .await?
            .map(|course| self.mapper.to_dto(course))
            .ok_or_else(|| {
                tracing::debug!(id, "Course not found");
                AppError::record_not_found(id)
            })
    }

    /// Creates a course. Any ids in `dto` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `dto` is structurally invalid.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create(&self, dto: CourseDto) -> Result<CourseDto, AppError> {
        dto.validate()?;

        let course = self.mapper.to_entity(dto)?;
        let saved = self.repository.save(course).await?;

        tracing::info!(id = ?saved.id, name = %saved.name, "Course created");

        Ok(self.mapper.to_dto(saved))
    }

    /// Updates name and category of an existing course and replaces its whole
    /// lesson collection with the lessons in `dto`.
    ///
    /// Lessons not present in `dto` are gone afterwards; lessons in `dto` are
    /// stored as new rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `id` is not positive or `dto` is invalid.
    /// Returns [`AppError::NotFound`] carrying `id` if no course exists.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update(&self, id: i64, dto: CourseDto) -> Result<CourseDto, AppError> {
        validate_id(id)?;
        dto.validate()?;

        let mut existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::record_not_found(id))?;

        existing.name = dto.name.clone();
        existing.category = self.mapper.convert_category_value(&dto.category)?;

        let incoming = self.mapper.to_entity(dto)?;
        existing.replace_lessons(incoming.lessons);

        let saved = self.repository.save(existing).await?;

        tracing::info!(id, lessons = saved.lessons.len(), "Course updated");

        Ok(self.mapper.to_dto(saved))
    }

    /// Deletes a course and its lessons.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `id` is not positive.
    /// Returns [`AppError::NotFound`] carrying `id` if no course exists.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        validate_id(id)?;

        let course = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::record_not_found(id))?;

        self.repository.delete(course).await?;

        tracing::info!(id, "Course deleted");

        Ok(())
    }
}

fn validate_id(id: i64) -> Result<(), AppError> {
    if id <= 0 {
        return Err(AppError::bad_request(
            "Id must be positive",
            json!({ "id": id }),
        ));
    }
    Ok(())
}
