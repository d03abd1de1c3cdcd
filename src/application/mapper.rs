//! Conversion between course entities and transfer shapes.

use crate::application::dto::{CourseDto, LessonDto};
use crate::domain::entities::{Category, Course, Lesson};
use crate::error::AppError;
use serde_json::json;

/// Stateless entity <-> DTO converter.
///
/// Converting a DTO into an entity always yields an unsaved course: course and
/// lesson ids sent by the client are dropped, the store assigns fresh ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct CourseMapper;

impl CourseMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn to_dto(&self, course: Course) -> CourseDto {
        CourseDto {
            id: course.id,
            name: course.name,
            category: course.category.label().to_string(),
            lessons: course
                .lessons
                .into_iter()
                .map(|lesson| LessonDto {
                    id: lesson.id,
                    name: lesson.name,
                    youtube_url: lesson.youtube_url,
                })
                .collect(),
        }
    }

    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the category label is unknown.
    pub fn to_entity(&self, dto: CourseDto) -> Result<Course, AppError> {
        let category = self.convert_category_value(&dto.category)?;
        let lessons = dto
            .lessons
            .into_iter()
            .map(|lesson| Lesson::new(lesson.name, lesson.youtube_url))
            .collect();

        Ok(Course::new(dto.name, category, lessons))
    }

    /// Converts an external category label into [`Category`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the label is unknown.
    pub fn convert_category_value(&self, label: &str) -> Result<Category, AppError> {
        Category::from_label(label).ok_or_else(|| {
            AppError::bad_request(
                "Unknown category",
                json!({
                    "category": label,
                    "allowed": Category::ALL.map(Category::label),
                }),
            )
        })
    }
}
