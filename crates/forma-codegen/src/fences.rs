//! Fence-writing side of the snippet protocol.
//!
//! The generator emits every user-editable slot through [`FenceWriter`]:
//! a `// BEGIN <label>` marker, the previously captured text if the map
//! holds any, and a `// END` marker. Whatever the slot pass leaves
//! unclaimed is re-emitted under a trailing `LOST-CODE` fence, so user
//! text survives even when its window or control was renamed or deleted.

use crate::snippets::{LOST_CODE_LABEL, SnippetMap};

/// Accumulates generated source, splicing snippets into slots.
#[derive(Debug)]
pub struct FenceWriter {
    out: String,
    map: SnippetMap,
}

impl FenceWriter {
    #[must_use]
    pub fn new(map: SnippetMap) -> Self {
        Self {
            out: String::new(),
            map,
        }
    }

    /// Append one line of surrounding generated text.
    pub fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Emit a user-editable slot.
    ///
    /// The stored text is spliced verbatim between fresh markers and the
    /// map entry is marked used; an unknown label emits an empty fence.
    pub fn slot(&mut self, label: &str) {
        self.out.push_str("// BEGIN ");
        self.out.push_str(label);
        self.out.push('\n');
        if let Some(text) = self.map.claim(label) {
            self.out.push_str(text);
            if !text.is_empty() && !text.ends_with('\n') {
                self.out.push('\n');
            }
        }
        self.out.push_str("// END\n");
    }

    /// Finish the pass: re-emit everything the slots did not claim.
    ///
    /// The raw accumulator must stay adjacent to the opening marker; a
    /// nested labeled fence switches the scanner out of lost-code
    /// capture, so the orphan fences follow it.
    #[must_use]
    pub fn finish(mut self) -> String {
        let orphans: Vec<(String, String)> = self
            .map
            .unclaimed()
            .map(|(label, text)| (label.to_string(), text.to_string()))
            .collect();

        if !orphans.is_empty() || !self.map.lost_code.is_empty() {
            self.out.push_str("// BEGIN ");
            self.out.push_str(LOST_CODE_LABEL);
            self.out.push('\n');

            self.out.push_str(&self.map.lost_code);
            if !self.map.lost_code.is_empty() && !self.map.lost_code.ends_with('\n') {
                self.out.push('\n');
            }

            for (label, text) in &orphans {
                tracing::debug!(label = %label, "preserving orphaned snippet");
                self.out.push_str("// BEGIN ");
                self.out.push_str(label);
                self.out.push('\n');
                self.out.push_str(text);
                if !text.is_empty() && !text.ends_with('\n') {
                    self.out.push('\n');
                }
                self.out.push_str("// END\n");
            }
            self.out.push_str("// END\n");
        }
        self.out
    }
}
