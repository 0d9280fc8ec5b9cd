//! Comment-fence snippet extraction.
//!
//! Generated source marks every user-editable region with comment
//! fences: `// BEGIN <label>` opens a region, `// END` closes it. Before
//! regenerating, the previous output is scanned and every fenced region
//! is recovered into a [`SnippetMap`], keyed by label, so hand-written
//! code survives the rewrite. Extraction never fails; malformed input
//! degrades to "nothing recovered".

use std::collections::BTreeMap;

/// Fence label reserved for preserved-but-unclaimed code.
pub const LOST_CODE_LABEL: &str = "LOST-CODE";

/// One recovered snippet and whether a slot has claimed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub text: String,
    pub used: bool,
}

/// Label-to-snippet mapping recovered from previously generated source,
/// plus the unlabeled lost-code accumulator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetMap {
    entries: BTreeMap<String, Snippet>,
    pub lost_code: String,
}

/// How the scanner classifies one line.
enum LineClass<'a> {
    /// `// BEGIN <label>` comment.
    Begin(&'a str),
    /// `// END` comment.
    End,
    /// Any other comment line.
    Comment,
    /// Not a comment line.
    Code,
}

fn classify(line: &str) -> LineClass<'_> {
    let trimmed = line.trim_start_matches([' ', '\t']);
    let Some(rest) = trimmed.strip_prefix("//") else {
        return LineClass::Code;
    };
    let mut tokens = rest.split_whitespace();
    match tokens.next() {
        Some("BEGIN") => match tokens.next() {
            Some(label) => LineClass::Begin(label),
            None => LineClass::Comment,
        },
        Some("END") => LineClass::End,
        _ => LineClass::Comment,
    }
}

enum ScanState {
    Scanning,
    Labeled { label: String, text: String },
    LostCode,
}

impl SnippetMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recover every fenced region from previously generated source.
    ///
    /// A duplicate label keeps the later occurrence. A stray `END` is a
    /// no-op. A fence still open at end of input keeps its partial text.
    /// `LOST-CODE` fences accumulate ordinary comment lines into
    /// [`SnippetMap::lost_code`] and close implicitly at the first
    /// non-comment line; a nested `BEGIN` inside one re-opens labeled
    /// capture, which is how orphaned fences survive repeated passes.
    #[must_use]
    pub fn extract(source: &str) -> Self {
        let mut map = Self::default();
        let mut state = ScanState::Scanning;

        for line in source.split_inclusive('\n') {
            state = match state {
                ScanState::Scanning => match classify(line) {
                    LineClass::Begin(label) if label == LOST_CODE_LABEL => ScanState::LostCode,
                    LineClass::Begin(label) => ScanState::Labeled {
                        label: label.to_string(),
                        text: String::new(),
                    },
                    LineClass::End | LineClass::Comment | LineClass::Code => ScanState::Scanning,
                },
                ScanState::Labeled { label, mut text } => match classify(line) {
                    LineClass::End => {
                        map.insert(label, text);
                        ScanState::Scanning
                    }
                    LineClass::Begin(_) | LineClass::Comment | LineClass::Code => {
                        text.push_str(line);
                        ScanState::Labeled { label, text }
                    }
                },
                ScanState::LostCode => match classify(line) {
                    LineClass::Begin(label) if label == LOST_CODE_LABEL => ScanState::LostCode,
                    LineClass::Begin(label) => ScanState::Labeled {
                        label: label.to_string(),
                        text: String::new(),
                    },
                    LineClass::End => ScanState::Scanning,
                    LineClass::Comment => {
                        map.lost_code.push_str(line);
                        ScanState::LostCode
                    }
                    LineClass::Code => ScanState::Scanning,
                },
            };
        }

        if let ScanState::Labeled { label, text } = state {
            map.insert(label, text);
        }

        tracing::debug!(
            labels = map.entries.len(),
            lost_bytes = map.lost_code.len(),
            "extracted snippets"
        );
        map
    }

    /// Store a snippet under `label`, replacing any earlier occurrence.
    pub fn insert(&mut self, label: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(
            label.into(),
            Snippet {
                text: text.into(),
                used: false,
            },
        );
    }

    /// Look up a snippet without claiming it.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries.get(label).map(|s| s.text.as_str())
    }

    /// Look up a snippet and mark it used.
    pub fn claim(&mut self, label: &str) -> Option<&str> {
        let snippet = self.entries.get_mut(label)?;
        snippet.used = true;
        Some(snippet.text.as_str())
    }

    /// Entries no slot has claimed, in map order.
    pub fn unclaimed(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter(|(_, snippet)| !snippet.used)
            .map(|(label, snippet)| (label.as_str(), snippet.text.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.lost_code.is_empty()
    }
}
