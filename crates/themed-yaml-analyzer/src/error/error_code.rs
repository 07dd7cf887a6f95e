//! Error codes for the themed YAML diagnostic system.
//!
//! Error codes are organized by the part of the document they concern:
//! - `E0xx` - Theme declarations (`.themes`)
//! - `E1xx` - Item structure and theme keys
//! - `E2xx` - Platform scoping (`.platforms`)
//! - `E3xx` - Values, imports and opacity

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Theme Declarations (E0xx)
    // =========================================================================
    /// Bad theme type.
    ///
    /// A `.themes` entry is neither a string nor a single-entry object
    /// `{name: {import: otherTheme}}`.
    E001,

    /// Unknown theme to import.
    ///
    /// A theme alias refers to a theme that is not declared before it.
    E002,

    /// Duplicate theme.
    ///
    /// The same theme name is declared more than once.
    E003,

    // =========================================================================
    // Item Structure (E1xx)
    // =========================================================================
    /// Missing default theme.
    ///
    /// A themed item does not define a value for the first declared theme.
    E100,

    /// Unknown theme.
    ///
    /// A themed item defines a value for a theme missing from `.themes`.
    E101,

    /// Missing shared value.
    ///
    /// A shared item has no `.value` key.
    E102,

    /// Unknown item type.
    ///
    /// The `.type` marker is not one of the supported types.
    E103,

    // =========================================================================
    // Platforms (E2xx)
    // =========================================================================
    /// Unknown platform.
    ///
    /// A `.platforms` list names a platform missing from the root list.
    E200,

    /// Platform not accessible.
    ///
    /// A `.platforms` list names a platform a parent collection filtered out.
    E201,

    // =========================================================================
    // Values (E3xx)
    // =========================================================================
    /// Import does not exist.
    ///
    /// The imported path was never defined above the importing item.
    E300,

    /// Import type mismatch.
    ///
    /// The imported item has a different `.type`.
    E301,

    /// Opacity out of range.
    ///
    /// An opacity is not between 0 and 1.
    E302,

    /// Invalid literal.
    ///
    /// A literal cannot be read as a value of the item's type.
    E303,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Theme declarations
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            // Item structure
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            // Platforms
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            // Values
            ErrorCode::E300 => "E300",
            ErrorCode::E301 => "E301",
            ErrorCode::E302 => "E302",
            ErrorCode::E303 => "E303",
        }
    }

}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E101.to_string(), "E101");
        assert_eq!(ErrorCode::E201.to_string(), "E201");
        assert_eq!(ErrorCode::E303.to_string(), "E303");
    }
}
