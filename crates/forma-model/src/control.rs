//! Controls and their optional attribute specs.

use serde::{Deserialize, Serialize};

use crate::background::Background;
use crate::enums::{Alignment, TextStyle};
use crate::member::Member;
use crate::primitives::{Color4, Rect};
use crate::table::TableColumn;

/// Text attributes of a control.
///
/// `key` names a translation entry unless `dynamic` is set, in which case
/// the host fills the text at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSpec {
    pub key: String,
    pub dynamic: bool,
    pub scale: f32,
    pub color: Color4,
    pub align: Alignment,
    pub style: TextStyle,
}

impl Default for TextSpec {
    fn default() -> Self {
        Self {
            key: String::new(),
            dynamic: false,
            scale: 1.0,
            color: Color4::WHITE,
            align: Alignment::Left,
            style: TextStyle::Normal,
        }
    }
}

/// Tooltip attributes of a control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipSpec {
    pub key: String,
    pub scale: f32,
}

impl Default for TooltipSpec {
    fn default() -> Self {
        Self {
            key: String::new(),
            scale: 1.0,
        }
    }
}

/// Child-window reference carried by container variants.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContainerLink {
    pub child_window: String,
    pub element_type: String,
}

/// Container behavior of a control.
///
/// Closed sum; consumers match exhaustively so a new variant cannot be
/// silently ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Container {
    #[default]
    None,
    List(ContainerLink),
    Grid(ContainerLink),
    Table(ContainerLink),
}

impl Container {
    /// Wire discriminant for the container kind.
    #[must_use]
    pub const fn kind_byte(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::List(_) => 1,
            Self::Grid(_) => 2,
            Self::Table(_) => 3,
        }
    }

    /// Rebuild a container from its wire discriminant and link payload.
    #[must_use]
    pub fn from_kind(kind: u8, link: ContainerLink) -> Option<Self> {
        match kind {
            0 => Some(Self::None),
            1 => Some(Self::List(link)),
            2 => Some(Self::Grid(link)),
            3 => Some(Self::Table(link)),
            _ => None,
        }
    }

    #[must_use]
    pub fn link(&self) -> Option<&ContainerLink> {
        match self {
            Self::None => None,
            Self::List(link) | Self::Grid(link) | Self::Table(link) => Some(link),
        }
    }

    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self, Self::Table(_))
    }
}

/// A placed control inside a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Control {
    pub name: String,
    pub rect: Rect,
    pub background: Background,
    pub text: Option<TextSpec>,
    pub tooltip: Option<TooltipSpec>,
    pub container: Container,
    pub left_click: bool,
    pub right_click: bool,
    pub shift_click: bool,
    pub members: Vec<Member>,
    /// Only meaningful when `container` is a table.
    pub columns: Vec<TableColumn>,
    pub table_inserts: Vec<String>,
}

impl Control {
    #[must_use]
    pub fn new(name: impl Into<String>, rect: Rect) -> Self {
        Self {
            name: name.into(),
            rect,
            background: Background::None,
            text: None,
            tooltip: None,
            container: Container::None,
            left_click: false,
            right_click: false,
            shift_click: false,
            members: Vec::new(),
            columns: Vec::new(),
            table_inserts: Vec::new(),
        }
    }
}
