//! Lesson entity owned by a course.

/// A single lesson of a course.
///
/// Lessons have no life of their own: they are inserted, replaced, and
/// removed together with the owning [`super::Course`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub id: Option<i64>,
    pub name: String,
    pub youtube_url: String,
}

impl Lesson {
    /// Creates a lesson that has not been persisted yet.
    pub fn new(name: impl Into<String>, youtube_url: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            youtube_url: youtube_url.into(),
        }
    }
}
