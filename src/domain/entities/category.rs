//! Course category.

/// Enumerated course category.
///
/// Has two representations:
/// - an external label exchanged with API clients (`"Front-end"`)
/// - a storage code persisted in the database (`"FRONT_END"`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    FrontEnd,
    BackEnd,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::FrontEnd, Category::BackEnd];

    /// Label shown to API clients.
    pub fn label(self) -> &'static str {
        match self {
            Category::FrontEnd => "Front-end",
            Category::BackEnd => "Back-end",
        }
    }

    /// Code stored in the `courses.category` column.
    pub fn code(self) -> &'static str {
        match self {
            Category::FrontEnd => "FRONT_END",
            Category::BackEnd => "BACK_END",
        }
    }

    /// Parses an external label. Matching is exact.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Parses a storage code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}
