//! Process-local course repository.

use async_trait::async_trait;
use serde_json::json;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::Course;
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::repositories::CourseRepository;
use crate::error::AppError;

#[derive(Default)]
struct Store {
    courses: BTreeMap<i64, Course>,
    last_course_id: i64,
    last_lesson_id: i64,
}

/// A course repository that keeps everything in memory.
///
/// Mirrors [`super::PgCourseRepository`]: ids come from monotonically growing
/// sequences and every `save` gives the stored lessons fresh ids.
///
/// # Use Cases
///
/// - Development environments without PostgreSQL
/// - HTTP integration tests
pub struct InMemoryCourseRepository {
    store: RwLock<Store>,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        debug!("Using in-memory course storage");
        Self {
            store: RwLock::new(Store::default()),
        }
    }
}

impl Default for InMemoryCourseRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn find_page(&self, request: PageRequest) -> Result<Page<Course>, AppError> {
        let store = self.store.read().await;

        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(request.page_size).unwrap_or(0);

        let items = store
            .courses
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();

        Ok(Page::new(items, store.courses.len() as i64, request))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError> {
        Ok(self.store.read().await.courses.get(&id).cloned())
    }

    async fn save(&self, mut course: Course) -> Result<Course, AppError> {
        let mut store = self.store.write().await;

        let id = match course.id {
            Some(id) if !store.courses.contains_key(&id) => {
                return Err(AppError::record_not_found(id));
            }
            Some(id) => id,
            None => {
                store.last_course_id += 1;
                store.last_course_id
            }
        };

        course.id = Some(id);
        for lesson in &mut course.lessons {
            store.last_lesson_id += 1;
            lesson.id = Some(store.last_lesson_id);
        }

        store.courses.insert(id, course.clone());

        Ok(course)
    }

    async fn delete(&self, course: Course) -> Result<(), AppError> {
        let Some(id) = course.id else {
            return Err(AppError::bad_request(
                "Cannot delete a course that was never saved",
                json!({"name": course.name}),
            ));
        };

        self.store
            .write()
            .await
            .courses
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::record_not_found(id))
    }
}
