//! Source generation with snippet preservation for Forma layouts.
//!
//! Regenerating boilerplate must never discard hand-written logic. The
//! contract: every user-editable region in generated source is delimited
//! by `// BEGIN <label>` / `// END` comment fences. Before regeneration,
//! [`SnippetMap::extract`] recovers every fenced region from the previous
//! output; during regeneration, [`FenceWriter`] splices each recovered
//! region back into its slot; afterwards, anything left unclaimed is
//! re-emitted under a `LOST-CODE` fence rather than dropped.
//!
//! # Example
//!
//! ```
//! use forma_codegen::SnippetMap;
//!
//! let prior = "// BEGIN Main::ok::lbutton_action\nclose();\n// END\n";
//! let map = SnippetMap::extract(prior);
//! assert_eq!(map.get("Main::ok::lbutton_action"), Some("close();\n"));
//! ```

mod fences;
mod generate;
mod snippets;

pub use fences::FenceWriter;
pub use generate::generate;
pub use snippets::{LOST_CODE_LABEL, Snippet, SnippetMap};
