//! Root project type and the per-pass window name index.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::table::TableDefinition;
use crate::window::Window;

/// Default canvas grid size for new projects.
pub const DEFAULT_GRID_SIZE: u16 = 8;

/// Root of the design graph.
///
/// Window names are unique and control names are unique within a window;
/// both constraints are enforced at the editing boundary, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub directory: String,
    pub source_path: String,
    pub grid_size: u16,
    pub windows: Vec<Window>,
    pub tables: Vec<TableDefinition>,
}

impl Project {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            directory: String::new(),
            source_path: String::new(),
            grid_size: DEFAULT_GRID_SIZE,
            windows: Vec::new(),
            tables: Vec::new(),
        }
    }

    /// Find a window by name.
    #[must_use]
    pub fn window(&self, name: &str) -> Option<&Window> {
        self.windows.iter().find(|w| w.name == name)
    }

    /// Build the name-indexed window lookup for a generation pass.
    #[must_use]
    pub fn window_index(&self) -> WindowIndex<'_> {
        WindowIndex::new(self)
    }

    /// Total number of controls across all windows.
    #[must_use]
    pub fn control_count(&self) -> usize {
        self.windows.iter().map(|w| w.controls.len()).sum()
    }
}

/// Name-to-window lookup table, built once per generation pass.
///
/// Duplicate names keep the last occurrence, matching the serializer's
/// tolerance for graphs the editing boundary failed to deduplicate.
#[derive(Debug)]
pub struct WindowIndex<'a> {
    map: BTreeMap<&'a str, &'a Window>,
}

impl<'a> WindowIndex<'a> {
    #[must_use]
    pub fn new(project: &'a Project) -> Self {
        let mut map = BTreeMap::new();
        for window in &project.windows {
            map.insert(window.name.as_str(), window);
        }
        Self { map }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a Window> {
        self.map.get(name).copied()
    }

    /// Resolve a window's parent window, if any.
    #[must_use]
    pub fn parent_of(&self, window: &Window) -> Option<&'a Window> {
        window.parent.as_deref().and_then(|name| self.get(name))
    }
}
