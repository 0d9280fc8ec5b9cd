//! Table definitions and column metadata.
//!
//! A table column is described from two angles: how it lays out internally
//! (which member feeds it) and how it displays (label, width, alignment).
//! The two halves are correlated positionally and always travel as a pair.

use serde::{Deserialize, Serialize};

use crate::enums::{Alignment, MemberType};
use crate::primitives::{Color3, Color4};

/// Display half of a table column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDisplay {
    pub label: String,
    pub width: i16,
    pub align: Alignment,
}

impl ColumnDisplay {
    #[must_use]
    pub fn new(label: impl Into<String>, width: i16, align: Alignment) -> Self {
        Self {
            label: label.into(),
            width,
            align,
        }
    }
}

/// Internal half of a table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInternal {
    pub member: String,
    pub member_type: MemberType,
}

impl ColumnInternal {
    #[must_use]
    pub fn new(member: impl Into<String>, member_type: MemberType) -> Self {
        Self {
            member: member.into(),
            member_type,
        }
    }
}

/// One fully described table column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableColumn {
    pub display: ColumnDisplay,
    pub internal: ColumnInternal,
}

/// A reusable named table layout.
///
/// The row highlight carries alpha so selection can tint without hiding
/// the row; dividers are opaque lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDefinition {
    pub name: String,
    pub columns: Vec<TableColumn>,
    pub highlight_color: Color4,
    pub divider_color: Color3,
}

impl TableDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            highlight_color: Color4::WHITE,
            divider_color: Color3::BLACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_definition_defaults() {
        let table = TableDefinition::new("inventory");
        assert_eq!(table.name, "inventory");
        assert!(table.columns.is_empty());
        assert_eq!(table.highlight_color, Color4::WHITE);
    }
}
