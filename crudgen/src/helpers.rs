//! Naming helpers for code generation
//!
//! Derived names used by the templates and output paths.

/// Template helpers for derived names
pub struct TemplateHelpers;

impl TemplateHelpers {
    /// Collection accessor name for an entity
    ///
    /// Appends a literal `s`. There is no real pluralization, so irregular
    /// nouns come out wrong (`Category` becomes `Categorys`); generated code
    /// relies on the name being predictable.
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::collection_name("Widget"), "Widgets");
    /// assert_eq!(TemplateHelpers::collection_name("Category"), "Categorys");
    /// ```
    #[must_use]
    pub fn collection_name(entity: &str) -> String {
        format!("{entity}s")
    }

    /// Route path for the API controller (lower-cased collection name)
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_route_path("Widget"), "widgets");
    /// assert_eq!(TemplateHelpers::to_route_path("UserProfile"), "userprofiles");
    /// ```
    #[must_use]
    pub fn to_route_path(entity: &str) -> String {
        Self::collection_name(entity).to_lowercase()
    }

    /// Make a name safe to embed in an output file path
    ///
    /// Path separators become `_`, so the result can never introduce a new
    /// directory level, a leading slash or a `..` segment.
    ///
    /// # Examples
    ///
    /// ```
    /// # use crudgen::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_path_segment("Widget"), "Widget");
    /// assert_eq!(TemplateHelpers::to_path_segment("../etc/passwd"), ".._etc_passwd");
    /// ```
    #[must_use]
    pub fn to_path_segment(name: &str) -> String {
        name.replace(['/', '\\'], "_")
    }
}
