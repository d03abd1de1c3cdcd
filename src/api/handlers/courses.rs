//! Handlers for course management endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::pagination::PageParams;
use crate::api::extract::{AppJson, AppPath, AppQuery};
use crate::application::dto::{CourseDto, PageDto};
use crate::error::AppError;
use crate::state::AppState;

/// Lists courses one page at a time.
///
/// # Endpoint
///
/// `GET /api/courses`
///
/// # Query Parameters
///
/// - `page` (optional): Zero-based page number (default: 0)
/// - `page_size` (optional): Items per page (default: `DEFAULT_PAGE_SIZE`, max: 100)
///
/// # Errors
///
/// Returns 400 Bad Request if pagination parameters are malformed or out of range.
pub async fn list_courses_handler(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
) -> Result<Json<PageDto<CourseDto>>, AppError> {
    let (page, page_size) = params.resolve(state.default_page_size);
    let courses = state.course_service.list(page, page_size).await?;
    Ok(Json(courses))
}

/// Returns a single course with its lessons.
///
/// # Endpoint
///
/// `GET /api/courses/{id}`
///
/// # Errors
///
/// Returns 400 if `id` is not positive.
/// Returns 404 if the course does not exist.
pub async fn get_course_handler(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<CourseDto>, AppError> {
    let course = state.course_service.load_by_id(id).await?;
    Ok(Json(course))
}

/// Creates a course.
///
/// # Endpoint
///
/// `POST /api/courses`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Angular with Spring",
///   "category": "Front-end",
///   "lessons": [{ "name": "Introduction", "youtube_url": "Nb4uxLxdvxo" }]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if the body is malformed or fails validation.
pub async fn create_course_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CourseDto>,
) -> Result<(StatusCode, Json<CourseDto>), AppError> {
    let course = state.course_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

/// Replaces name, category and the whole lesson list of a course.
///
/// # Endpoint
///
/// `PUT /api/courses/{id}`
///
/// Lessons missing from the body are deleted; lessons in the body are stored
/// with new ids.
///
/// # Errors
///
/// Returns 400 if `id` is not positive or the body fails validation.
/// Returns 404 if the course does not exist.
pub async fn update_course_handler(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
    AppJson(payload): AppJson<CourseDto>,
) -> Result<Json<CourseDto>, AppError> {
    let course = state.course_service.update(id, payload).await?;
    Ok(Json(course))
}

/// Deletes a course and its lessons.
///
/// # Endpoint
///
/// `DELETE /api/courses/{id}`
///
/// # Errors
///
/// Returns 400 if `id` is not positive.
/// Returns 404 if the course does not exist.
pub async fn delete_course_handler(
    AppPath(id): AppPath<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.course_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
