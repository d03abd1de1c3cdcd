//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::mapper::CourseMapper;
use crate::application::services::CourseService;
use crate::domain::repositories::CourseRepository;

/// Course service over whichever store was selected at startup.
pub type DynCourseService = CourseService<dyn CourseRepository>;

#[derive(Clone)]
pub struct AppState {
    pub course_service: Arc<DynCourseService>,
    /// Page size used when a listing request omits `page_size`.
    pub default_page_size: i64,
}

impl AppState {
    /// Wires a [`CourseService`] around `repository`.
    pub fn new(repository: Arc<dyn CourseRepository>, default_page_size: i64) -> Self {
        Self {
            course_service: Arc::new(CourseService::new(repository, CourseMapper::new())),
            default_page_size,
        }
    }
}
