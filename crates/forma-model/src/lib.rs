//! In-memory design graph for Forma layout projects.
//!
//! A [`Project`] owns an ordered list of [`Window`]s; each window owns its
//! [`Control`]s and typed [`Member`]s. Ownership is strictly tree-shaped;
//! the only back-reference is the window's `parent` *name*, resolved
//! through a [`WindowIndex`] built per generation pass.
//!
//! All types derive `serde` traits for JSON interchange with the editor
//! shell; the binary project-file encoding lives in `forma-format`.

pub mod background;
pub mod control;
pub mod enums;
pub mod member;
pub mod primitives;
pub mod project;
pub mod table;
pub mod window;

pub use background::Background;
pub use control::{Container, ContainerLink, Control, TextSpec, TooltipSpec};
pub use enums::{Alignment, MemberType, Orientation, TextStyle};
pub use member::Member;
pub use primitives::{Color3, Color4, Rect};
pub use project::{DEFAULT_GRID_SIZE, Project, WindowIndex};
pub use table::{ColumnDisplay, ColumnInternal, TableColumn, TableDefinition};
pub use window::Window;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_serializes_to_json() {
        let mut project = Project::new("hud");
        project
            .windows
            .push(Window::new("Main", Rect::new(0, 0, 320, 240)));

        let json = serde_json::to_string(&project).expect("serialize project");
        let round: Project = serde_json::from_str(&json).expect("deserialize project");
        assert_eq!(round, project);
    }
}
