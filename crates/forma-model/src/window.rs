//! Windows: the top-level placeable units of a layout.

use serde::{Deserialize, Serialize};

use crate::background::Background;
use crate::control::Control;
use crate::enums::Orientation;
use crate::member::Member;
use crate::primitives::{Color4, Rect};

/// A designed window and the controls placed on it.
///
/// `parent` is a name reference, not an ownership link; it is resolved by
/// name lookup once per generation pass, which keeps the ownership graph
/// acyclic and lets reparenting work by plain rename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub name: String,
    pub rect: Rect,
    pub orientation: Orientation,
    pub parent: Option<String>,
    pub background: Background,
    pub color: Option<Color4>,
    pub ignore_rtl: bool,
    pub members: Vec<Member>,
    pub controls: Vec<Control>,
}

impl Window {
    #[must_use]
    pub fn new(name: impl Into<String>, rect: Rect) -> Self {
        Self {
            name: name.into(),
            rect,
            orientation: Orientation::UpperLeft,
            parent: None,
            background: Background::None,
            color: None,
            ignore_rtl: false,
            members: Vec::new(),
            controls: Vec::new(),
        }
    }

    /// Find a control by name.
    #[must_use]
    pub fn control(&self, name: &str) -> Option<&Control> {
        self.controls.iter().find(|c| c.name == name)
    }
}
