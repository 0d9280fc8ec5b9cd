//! Background specification for windows and controls.

use serde::{Deserialize, Serialize};

/// How a window or control paints its background.
///
/// Closed sum; every consumer matches exhaustively. `LegacyGfx` carries a
/// reference into the old fixed graphics table and exists only so projects
/// that predate named textures keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Background {
    #[default]
    None,
    Texture {
        texture: String,
        alternate: Option<String>,
    },
    BorderedTexture {
        texture: String,
        alternate: Option<String>,
        border: u8,
    },
    LegacyGfx {
        name: String,
    },
}

impl Background {
    /// Wire discriminant for the background kind.
    #[must_use]
    pub const fn kind_byte(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::Texture { .. } => 1,
            Self::BorderedTexture { .. } => 2,
            Self::LegacyGfx { .. } => 3,
        }
    }

    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Primary texture identifier, if the variant carries one.
    #[must_use]
    pub fn texture(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Texture { texture, .. } | Self::BorderedTexture { texture, .. } => {
                Some(texture.as_str())
            }
            Self::LegacyGfx { name } => Some(name.as_str()),
        }
    }
}
