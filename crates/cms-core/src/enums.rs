//! Enumerated course fields and user roles.
//!
//! Every enum exposes `as_str()` (the value stored in SQL) and a matching
//! `Display`. `Category` additionally owns the one slug ↔ display-name table
//! used by both validation and URL formatting.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Course category. Stored and serialized by its display name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum Category {
    #[serde(rename = "Programming")]
    Programming,
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "UI/UX Design")]
    UiUxDesign,
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[serde(rename = "Artificial Intelligence")]
    ArtificialIntelligence,
}

/// `(variant, slug, display name)`, indexed by discriminant.
const CATEGORY_TABLE: [(Category, &str, &str); 5] = [
    (Category::Programming, "programming", "Programming"),
    (Category::DataScience, "data-science", "Data Science"),
    (Category::UiUxDesign, "uiux-design", "UI/UX Design"),
    (Category::WebDevelopment, "web-development", "Web Development"),
    (
        Category::ArtificialIntelligence,
        "artificial-intelligence",
        "Artificial Intelligence",
    ),
];

impl Category {
    /// All categories in their fixed reporting order.
    pub const ALL: [Self; 5] = [
        Self::Programming,
        Self::DataScience,
        Self::UiUxDesign,
        Self::WebDevelopment,
        Self::ArtificialIntelligence,
    ];

    /// Canonical display name, also the SQL storage value.
    #[must_use]
    pub const fn name(self) -> &'static str {
        CATEGORY_TABLE[self as usize].2
    }

    /// URL-safe slug.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        CATEGORY_TABLE[self as usize].1
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        CATEGORY_TABLE
            .iter()
            .find(|(_, s, _)| *s == slug)
            .map(|(category, _, _)| *category)
    }

    /// Exact (case-sensitive) match on the display name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        CATEGORY_TABLE
            .iter()
            .find(|(_, _, n)| *n == name)
            .map(|(category, _, _)| *category)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.name()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a category slug to its display name.
///
/// Anything that is not a known slug is returned unchanged, so a display name
/// such as `"Web Development"` resolves to itself.
#[must_use]
pub fn to_canonical(slug: &str) -> String {
    Category::from_slug(slug).map_or_else(|| slug.to_string(), |c| c.name().to_string())
}

/// Resolve a display name to its slug, passing unknown names through.
#[must_use]
pub fn to_slug(name: &str) -> String {
    Category::from_name(name).map_or_else(|| name.to_string(), |c| c.slug().to_string())
}

// ---------------------------------------------------------------------------
// SkillLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Parse the exact storage value.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for anything else.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        match raw {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(CoreError::Validation(format!("Invalid skill level: {other}"))),
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CourseStatus
// ---------------------------------------------------------------------------

/// Publication status of a course.
///
/// ```text
/// draft ⇄ published
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
    #[default]
    Draft,
    Published,
}

impl CourseStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }

    /// The other status; used by the admin publish/unpublish switch.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Draft => Self::Published,
            Self::Published => Self::Draft,
        }
    }

    /// Parse the exact storage value.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for anything else.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        match raw {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            other => Err(CoreError::Validation(format!("Invalid status: {other}"))),
        }
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// UserRole
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Student,
    Instructor,
    Admin,
}

impl UserRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Instructor => "instructor",
            Self::Admin => "admin",
        }
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` for anything other than
    /// `student`, `instructor`, `admin`.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        match raw {
            "student" => Ok(Self::Student),
            "instructor" => Ok(Self::Instructor),
            "admin" => Ok(Self::Admin),
            other => Err(CoreError::Validation(format!("Invalid role: {other}"))),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected:expr) => {
            #[test]
            fn $name() {
                let val: $ty = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected));
                let back: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(back, val);
            }
        };
    }

    test_serde_roundtrip!(category_uiux, Category, Category::UiUxDesign, "UI/UX Design");
    test_serde_roundtrip!(
        category_ai,
        Category,
        Category::ArtificialIntelligence,
        "Artificial Intelligence"
    );
    test_serde_roundtrip!(skill_intermediate, SkillLevel, SkillLevel::Intermediate, "intermediate");
    test_serde_roundtrip!(status_published, CourseStatus, CourseStatus::Published, "published");
    test_serde_roundtrip!(role_student, UserRole, UserRole::Student, "student");

    #[rstest]
    #[case("data-science", "Data Science")]
    #[case("programming", "Programming")]
    #[case("uiux-design", "UI/UX Design")]
    #[case("web-development", "Web Development")]
    #[case("artificial-intelligence", "Artificial Intelligence")]
    fn slug_maps_to_canonical_name(#[case] slug: &str, #[case] name: &str) {
        assert_eq!(to_canonical(slug), name);
        assert_eq!(to_slug(name), slug);
    }

    #[rstest]
    #[case("unknown-slug")]
    #[case("Web Development")]
    #[case("")]
    fn unknown_slug_passes_through(#[case] slug: &str) {
        assert_eq!(to_canonical(slug), slug);
    }

    #[test]
    fn table_covers_every_variant() {
        for category in Category::ALL {
            assert_eq!(Category::from_slug(category.slug()), Some(category));
            assert_eq!(Category::from_name(category.name()), Some(category));
            assert_eq!(
                serde_json::to_value(category).unwrap(),
                serde_json::Value::String(category.name().to_string())
            );
        }
    }

    #[test]
    fn table_rows_follow_variant_order() {
        for (idx, (category, slug, name)) in CATEGORY_TABLE.iter().enumerate() {
            assert_eq!(*category as usize, idx);
            assert_eq!(category.slug(), *slug);
            assert_eq!(category.name(), *name);
        }
    }

    #[test]
    fn from_name_is_case_sensitive() {
        assert_eq!(Category::from_name("programming"), None);
    }

    #[test]
    fn status_toggle_flips() {
        assert_eq!(CourseStatus::Draft.toggled(), CourseStatus::Published);
        assert_eq!(CourseStatus::Published.toggled(), CourseStatus::Draft);
        assert_eq!(CourseStatus::default(), CourseStatus::Draft);
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert!(matches!(SkillLevel::parse("expert"), Err(CoreError::Validation(_))));
        assert!(matches!(CourseStatus::parse("Draft"), Err(CoreError::Validation(_))));
        assert_eq!(SkillLevel::parse("advanced").unwrap(), SkillLevel::Advanced);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", Category::WebDevelopment), "Web Development");
        assert_eq!(format!("{}", SkillLevel::Beginner), "beginner");
        assert_eq!(format!("{}", CourseStatus::Draft), "draft");
        assert_eq!(format!("{}", UserRole::Admin), "admin");
    }
}
