//! Closed enumerations with stable wire discriminants.
//!
//! Each enum maps to a single byte in the project file. Discriminant
//! values are append-only: a value, once assigned, is never reused for a
//! different meaning.

use serde::{Deserialize, Serialize};

/// Anchor corner for window placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
    Center,
}

impl Orientation {
    /// Wire discriminant.
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::UpperLeft => 0,
            Self::UpperRight => 1,
            Self::LowerLeft => 2,
            Self::LowerRight => 3,
            Self::Center => 4,
        }
    }

    /// Decode a wire discriminant.
    #[must_use]
    pub const fn from_byte(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::UpperLeft),
            1 => Some(Self::UpperRight),
            2 => Some(Self::LowerLeft),
            3 => Some(Self::LowerRight),
            4 => Some(Self::Center),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UpperLeft => "upper_left",
            Self::UpperRight => "upper_right",
            Self::LowerLeft => "lower_left",
            Self::LowerRight => "lower_right",
            Self::Center => "center",
        }
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::Left => 0,
            Self::Center => 1,
            Self::Right => 2,
        }
    }

    #[must_use]
    pub const fn from_byte(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Left),
            1 => Some(Self::Center),
            2 => Some(Self::Right),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Rendering style for a text spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextStyle {
    #[default]
    Normal,
    Shadowed,
    Outlined,
}

impl TextStyle {
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::Shadowed => 1,
            Self::Outlined => 2,
        }
    }

    #[must_use]
    pub const fn from_byte(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Normal),
            1 => Some(Self::Shadowed),
            2 => Some(Self::Outlined),
            _ => None,
        }
    }
}

/// Type of a typed member on a window or control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MemberType {
    #[default]
    Int,
    Float,
    Bool,
    Text,
    Texture,
}

impl MemberType {
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::Int => 0,
            Self::Float => 1,
            Self::Bool => 2,
            Self::Text => 3,
            Self::Texture => 4,
        }
    }

    #[must_use]
    pub const fn from_byte(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Int),
            1 => Some(Self::Float),
            2 => Some(Self::Bool),
            3 => Some(Self::Text),
            4 => Some(Self::Texture),
            _ => None,
        }
    }

    /// Host-language type emitted by the generator for this member type.
    #[must_use]
    pub const fn host_type(self) -> &'static str {
        match self {
            Self::Int => "i32",
            Self::Float => "f32",
            Self::Bool => "bool",
            Self::Text => "String",
            Self::Texture => "TextureId",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_byte_roundtrip() {
        for orientation in [
            Orientation::UpperLeft,
            Orientation::UpperRight,
            Orientation::LowerLeft,
            Orientation::LowerRight,
            Orientation::Center,
        ] {
            assert_eq!(Orientation::from_byte(orientation.as_byte()), Some(orientation));
        }
        assert_eq!(Orientation::from_byte(9), None);
    }

    #[test]
    fn member_type_byte_roundtrip() {
        for member_type in [
            MemberType::Int,
            MemberType::Float,
            MemberType::Bool,
            MemberType::Text,
            MemberType::Texture,
        ] {
            assert_eq!(MemberType::from_byte(member_type.as_byte()), Some(member_type));
        }
        assert_eq!(MemberType::from_byte(255), None);
    }

    #[test]
    fn defaults() {
        assert_eq!(Orientation::default(), Orientation::UpperLeft);
        assert_eq!(Alignment::default(), Alignment::Left);
        assert_eq!(TextStyle::default(), TextStyle::Normal);
    }
}
