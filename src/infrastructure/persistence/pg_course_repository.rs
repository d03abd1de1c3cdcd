//! PostgreSQL implementation of course repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::entities::{Category, Course, Lesson};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::repositories::CourseRepository;
use crate::error::AppError;
use serde_json::json;

#[derive(Debug, FromRow)]
struct CourseRow {
    id: i64,
    name: String,
    category: String,
}

#[derive(Debug, FromRow)]
struct LessonRow {
    id: i64,
    course_id: i64,
    name: String,
    youtube_url: String,
}

impl CourseRow {
    fn into_course(self, lessons: Vec<Lesson>) -> Result<Course, AppError> {
        let category = Category::from_code(&self.category).ok_or_else(|| {
            AppError::internal(
                "Unknown category code in storage",
                json!({"id": self.id, "category": self.category}),
            )
        })?;

        Ok(Course {
            id: Some(self.id),
            name: self.name,
            category,
            lessons,
        })
    }
}

impl From<LessonRow> for Lesson {
    fn from(row: LessonRow) -> Self {
        Lesson {
            id: Some(row.id),
            name: row.name,
            youtube_url: row.youtube_url,
        }
    }
}

/// PostgreSQL repository for courses.
///
/// Lessons live in their own table with `ON DELETE CASCADE`, so deleting a
/// course removes its lessons. `save` rewrites the lesson rows of a course
/// inside one transaction.
pub struct PgCourseRepository {
    pool: Arc<PgPool>,
}

impl PgCourseRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Loads lessons of the given courses, grouped by course id, in insertion order.
    async fn lessons_for(&self, course_ids: &[i64]) -> Result<HashMap<i64, Vec<Lesson>>, AppError> {
        let rows = sqlx::query_as::<_, LessonRow>(
            r#"
            SELECT id, course_id, name, youtube_url
            FROM lessons
            WHERE course_id = ANY($1)
            ORDER BY course_id, id
            "#,
        )
        .bind(course_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut grouped: HashMap<i64, Vec<Lesson>> = HashMap::new();
        for row in rows {
            grouped.entry(row.course_id).or_default().push(row.into());
        }

        Ok(grouped)
    }
}

#[async_trait]
impl CourseRepository for PgCourseRepository {
    async fn find_page(&self, request: PageRequest) -> Result<Page<Course>, AppError> {
        let (rows, total_elements) = tokio::try_join!(
            sqlx::query_as::<_, CourseRow>(
                r#"
                SELECT id, name, category
                FROM courses
                ORDER BY id
                LIMIT $1 OFFSET $2
                "#,
            )
            .bind(request.page_size)
            .bind(request.offset())
            .fetch_all(self.pool.as_ref()),
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM courses")
                .fetch_one(self.pool.as_ref()),
        )?;

        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let mut lessons = self.lessons_for(&ids).await?;

        let items = rows
            .into_iter()
            .map(|row| {
                let course_lessons = lessons.remove(&row.id).unwrap_or_default();
                row.into_course(course_lessons)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(items, total_elements, request))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Course>, AppError> {
        let row = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT id, name, category
            FROM courses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let lessons = self
            .lessons_for(&[id])
            .await?
            .remove(&id)
            .unwrap_or_default();

        row.into_course(lessons).map(Some)
    }

    async fn save(&self, course: Course) -> Result<Course, AppError> {
        let mut tx = self.pool.begin().await?;

        let id = match course.id {
            None => {
                sqlx::query_scalar::<_, i64>(
                    r#"
                    INSERT INTO courses (name, category)
                    VALUES ($1, $2)
                    RETURNING id
                    "#,
                )
                .bind(&course.name)
                .bind(course.category.code())
                .fetch_one(&mut *tx)
                .await?
            }
            Some(id) => {
                let result = sqlx::query(
                    r#"
                    UPDATE courses SET
                        name     = $2,
                        category = $3
                    WHERE id = $1
                    "#,
                )
                .bind(id)
                .bind(&course.name)
                .bind(course.category.code())
                .execute(&mut *tx)
                .await?;

                if result.rows_affected() == 0 {
                    tx.rollback().await?;
                    return Err(AppError::record_not_found(id));
                }

                sqlx::query("DELETE FROM lessons WHERE course_id = $1")
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;

                id
            }
        };

        let mut lessons = Vec::with_capacity(course.lessons.len());
        for lesson in course.lessons {
            let lesson_id = sqlx::query_scalar::<_, i64>(
                r#"
                INSERT INTO lessons (course_id, name, youtube_url)
                VALUES ($1, $2, $3)
                RETURNING id
                "#,
            )
            .bind(id)
            .bind(&lesson.name)
            .bind(&lesson.youtube_url)
            .fetch_one(&mut *tx)
            .await?;

            lessons.push(Lesson {
                id: Some(lesson_id),
                ..lesson
            });
        }

        tx.commit().await?;

        Ok(Course {
            id: Some(id),
            name: course.name,
            category: course.category,
            lessons,
        })
    }

    async fn delete(&self, course: Course) -> Result<(), AppError> {
        let Some(id) = course.id else {
            return Err(AppError::bad_request(
                "Cannot delete a course that was never saved",
                json!({"name": course.name}),
            ));
        };

        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::record_not_found(id));
        }

        Ok(())
    }
}
