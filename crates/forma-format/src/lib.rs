//! Tagged binary project-file format for Forma layouts.
//!
//! A project file is a stream of length-prefixed, self-describing
//! **sections**. Within a section, required fields are positional (fixed
//! order) and optional fields are **tagged**: a property byte followed by
//! a kind-marked value, repeated until the section is exhausted. Readers
//! that do not recognize a tag can skip its value; readers that do not
//! recognize a whole section can skip it by length.
//!
//! Current files carry an outer framing (magic, version, integrity
//! trailer); files written by the original tool have none and are
//! detected by the absence of the magic prefix.
//!
//! # Example
//!
//! ```
//! use forma_model::{Project, Rect, Window};
//! use forma_format::{read_project, write_project};
//!
//! let mut project = Project::new("hud");
//! project.windows.push(Window::new("Main", Rect::new(0, 0, 320, 240)));
//!
//! let bytes = write_project(&project).unwrap();
//! let round = read_project(&bytes).unwrap();
//! assert_eq!(round, project);
//! ```

mod error;
pub mod frame;
mod reader;
pub mod section;
pub mod tags;
mod writer;

pub use error::{FormatError, Result};
pub use frame::{CURRENT_FORMAT_VERSION, Framing, MAGIC_BYTES, TRAILER_LEN};
pub use reader::{ReaderOptions, UnknownTagPolicy, read_project, read_project_with_options};
pub use section::{SectionReader, SectionWriter, ValueKind};
pub use tags::Tag;
pub use writer::write_project;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
