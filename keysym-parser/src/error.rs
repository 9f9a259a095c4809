//! Error types for header scanning

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A line was accepted by the classifier but the value sub-patterns found nothing.
///
/// The classifier and extractor use independent patterns, so this only fires if
/// the two drift apart. It is reported instead of emitting a half-filled pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("no `0x` key code found in `{line}`")]
    MissingCode { line: String },
    #[error("no `U+` code point found in `{line}`")]
    MissingCodePoint { line: String },
}

/// Errors raised while turning a header into a [`crate::ParsedTable`]
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read keysym header {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read keysym header stream")]
    Stream(#[source] io::Error),
    #[error("line {line_number}: classified as a keysym definition but could not be extracted")]
    Extract {
        line_number: usize,
        line: String,
        #[source]
        source: ExtractError,
    },
    #[error("macro prefix `{prefix}` may only contain ASCII letters, digits and underscores")]
    InvalidPrefix { prefix: String },
    #[error("failed to compile definition pattern")]
    Pattern(#[from] regex::Error),
}
