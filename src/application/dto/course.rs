//! Transfer shapes for a course and its lessons.

use crate::domain::entities::Category;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Course as seen by API clients.
///
/// `id` is absent on creation and always present in responses.
///
/// # Example
///
/// ```json
/// {
///   "id": 1,
///   "name": "Angular with Spring",
///   "category": "Front-end",
///   "lessons": [{ "id": 1, "name": "Introduction", "youtube_url": "Nb4uxLxdvxo" }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CourseDto {
    #[serde(default)]
    pub id: Option<i64>,

    #[validate(length(min = 5, max = 100), custom(function = "validate_not_blank"))]
    pub name: String,

    /// External category label, e.g. `"Front-end"`.
    #[validate(custom(function = "validate_category"))]
    pub category: String,

    #[validate(length(min = 1, message = "A course needs at least one lesson"), nested)]
    pub lessons: Vec<LessonDto>,
}

/// Lesson as seen by API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LessonDto {
    #[serde(default)]
    pub id: Option<i64>,

    #[validate(length(min = 5, max = 100), custom(function = "validate_not_blank"))]
    pub name: String,

    /// YouTube video identifier.
    #[validate(length(min = 10, max = 11), custom(function = "validate_not_blank"))]
    pub youtube_url: String,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

fn validate_category(value: &str) -> Result<(), ValidationError> {
    match Category::from_label(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("category")
            .with_message("Unknown category, expected 'Front-end' or 'Back-end'".into())),
    }
}
