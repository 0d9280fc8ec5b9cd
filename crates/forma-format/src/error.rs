//! Error types for project file encoding and decoding.

use thiserror::Error;

use crate::section::ValueKind;

/// Errors that can occur when reading or writing a project file.
///
/// Every decode failure is recoverable by the caller; a corrupt file
/// surfaces as an error value, never a partially decoded graph.
#[derive(Debug, Error)]
pub enum FormatError {
    /// File written by a newer format revision.
    #[error("project file version {found} is not supported (maximum: {max_supported})")]
    UnsupportedVersion { found: u32, max_supported: u32 },

    /// Integrity trailer does not match the payload.
    #[error("integrity check failed: payload digest mismatch")]
    ChecksumMismatch,

    /// A read ran past the end of its section or buffer.
    #[error("unexpected end of data at offset {offset}")]
    UnexpectedEnd { offset: usize },

    /// Stored value kind differs from the requested type.
    #[error("type mismatch at offset {offset}: expected {expected}, found marker {found:#04x}")]
    TypeMismatch {
        expected: ValueKind,
        found: u8,
        offset: usize,
    },

    /// Property tag not in the tag table.
    #[error("unknown property tag {tag} at offset {offset}")]
    UnknownTag { tag: u8, offset: usize },

    /// Byte where a value kind marker was expected is not one.
    #[error("invalid value kind marker {marker:#04x} at offset {offset}")]
    InvalidValueKind { marker: u8, offset: usize },

    /// Enum discriminant outside the defined range.
    #[error("invalid {what} value {value}")]
    InvalidEnum { what: &'static str, value: u8 },

    /// String payload is not valid UTF-8.
    #[error("invalid UTF-8 in string at offset {offset}")]
    InvalidUtf8 { offset: usize },

    /// Display and internal table column counts disagree for one control.
    #[error(
        "table column mismatch in control '{control}': {display} display columns, {internal} internal columns"
    )]
    ColumnCountMismatch {
        control: String,
        display: usize,
        internal: usize,
    },

    /// String longer than the length prefix can express.
    #[error("string length {len} exceeds encodable maximum")]
    StringTooLong { len: usize },

    /// A section was left open, or closed without being opened.
    #[error("unbalanced section nesting")]
    UnbalancedSection,
}

/// Result type alias for format operations.
pub type Result<T> = std::result::Result<T, FormatError>;

impl FormatError {
    /// Create an InvalidEnum error.
    pub fn invalid_enum(what: &'static str, value: u8) -> Self {
        Self::InvalidEnum { what, value }
    }

    /// Create a ColumnCountMismatch error.
    pub fn column_count_mismatch(control: impl Into<String>, display: usize, internal: usize) -> Self {
        Self::ColumnCountMismatch {
            control: control.into(),
            display,
            internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FormatError::invalid_enum("orientation", 9);
        assert_eq!(format!("{err}"), "invalid orientation value 9");

        let err = FormatError::column_count_mismatch("inventory_table", 3, 1);
        assert!(format!("{err}").contains("inventory_table"));
        assert!(format!("{err}").contains("3 display"));
    }
}
