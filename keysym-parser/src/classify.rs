//! Line Classification
//!
//! Decides whether a header line is a keysym definition carrying a Unicode
//! annotation. Two annotation dialects show up in `keysymdef.h`:
//!
//!     #define XK_Aacute 0x00c1  /* U+00C1 LATIN CAPITAL LETTER A WITH ACUTE */
//!     #define XK_Ooblique 0x00d8  /*(U+00D8 LATIN CAPITAL LETTER O WITH STROKE)*/
//!
//! The second (parenthesized) form marks a mapping the header authors consider
//! approximate; both end up in the table. Everything else (comments, guards,
//! blank lines, definitions without an annotation) is silently skipped.
//!
//! Near misses are not errors. A line with a decimal code, lowercase code-point
//! digits or a `//` comment is simply not a definition.

use crate::error::{ExtractError, ParseError};
use crate::extract::{extract_pair, ExtractedPair};
use once_cell::sync::Lazy;
use regex::Regex;

/// Macro prefix used by `keysymdef.h`
pub const DEFAULT_PREFIX: &str = "XK_";

static DEFAULT_CLASSIFIER: Lazy<Classifier> = Lazy::new(|| {
    Classifier::with_prefix(DEFAULT_PREFIX).expect("default prefix compiles")
});

/// The annotation dialect a definition line uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineForm {
    /// `/* U+XXXX description */`
    Spaced,
    /// `/*(U+XXXX description)*/`
    Parenthesized,
}

/// Compiled definition patterns for one macro prefix.
#[derive(Debug, Clone)]
pub struct Classifier {
    spaced: Regex,
    parenthesized: Regex,
}

impl Classifier {
    /// Build a classifier accepting macro names that start with `prefix`.
    ///
    /// An empty prefix accepts any C identifier.
    pub fn with_prefix(prefix: &str) -> Result<Self, ParseError> {
        let identifier_chars = prefix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !identifier_chars || prefix.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(ParseError::InvalidPrefix {
                prefix: prefix.to_string(),
            });
        }

        // The prefix already supplies the identifier's first character.
        let name = if prefix.is_empty() {
            "[A-Za-z_][A-Za-z0-9_]*"
        } else {
            "[A-Za-z0-9_]+"
        };
        let head = format!(
            r"^#define {}{name}\s+0x[0-9a-f]+\s*",
            regex::escape(prefix)
        );
        let spaced = Regex::new(&format!(r"{head}/\* U\+[0-9A-F]{{4,6}}.*\*/\s*$"))?;
        let parenthesized =
            Regex::new(&format!(r"{head}/\*\(U\+[0-9A-F]{{4,6}} .*\)\*/\s*$"))?;

        Ok(Self {
            spaced,
            parenthesized,
        })
    }

    /// Which dialect `line` uses, if it is a definition at all.
    pub fn classify(&self, line: &str) -> Option<LineForm> {
        if self.spaced.is_match(line) {
            Some(LineForm::Spaced)
        } else if self.parenthesized.is_match(line) {
            Some(LineForm::Parenthesized)
        } else {
            None
        }
    }

    pub fn matches(&self, line: &str) -> bool {
        self.classify(line).is_some()
    }

    /// Classify and extract in one step.
    ///
    /// `Ok(None)` means the line is not a definition. An error means the line
    /// was classified but the extractor found no value, which would otherwise
    /// produce a broken table entry.
    pub fn try_parse(&self, line: &str) -> Result<Option<(LineForm, ExtractedPair)>, ExtractError> {
        let Some(form) = self.classify(line) else {
            return Ok(None);
        };
        let pair = extract_pair(line)?;
        Ok(Some((form, pair)))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        DEFAULT_CLASSIFIER.clone()
    }
}

/// Classify `line` with the default `XK_` prefix.
pub fn classify_line(line: &str) -> Option<LineForm> {
    DEFAULT_CLASSIFIER.classify(line)
}

/// Whether `line` is an annotated `XK_` definition.
pub fn is_keysym_definition(line: &str) -> bool {
    DEFAULT_CLASSIFIER.matches(line)
}
