//! Course entity.

use super::{Category, Lesson};

/// A course as persisted by the store.
///
/// `id` is `None` for a course that has never been saved. Passing such a
/// course to [`crate::domain::repositories::CourseRepository::save`] inserts
/// it; passing one with an id updates the existing row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: Option<i64>,
    pub name: String,
    pub category: Category,
    pub lessons: Vec<Lesson>,
}

impl Course {
    /// Creates an unsaved course.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let course = Course::new(
    ///     "Angular",
    ///     Category::FrontEnd,
    ///     vec![Lesson::new("Introduction", "abcdefghij")],
    /// );
    /// assert!(course.id.is_none());
    /// ```
    pub fn new(name: impl Into<String>, category: Category, lessons: Vec<Lesson>) -> Self {
        Self {
            id: None,
            name: name.into(),
            category,
            lessons,
        }
    }

    /// Replaces the lesson collection wholesale: every existing lesson is
    /// dropped, then `lessons` are appended in order.
    pub fn replace_lessons(&mut self, lessons: impl IntoIterator<Item = Lesson>) {
        self.lessons.clear();
        self.lessons.extend(lessons);
    }
}
