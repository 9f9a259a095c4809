//! # keysym-parser
//!
//! Reads a platform key-symbol header (`keysymdef.h` and friends) and pulls out
//! every keysym definition that carries a Unicode annotation.
//!
//! Pipeline
//!
//!     header text ──► classify ──► extract ──► ParsedTable
//!
//!     - classify: decides whether a line is a definition, recognizing the two
//!       annotation dialects found in the wild (see [`classify::LineForm`]).
//!     - extract: pulls the `0x` key code and the `U+` code point out of a
//!       classified line, rewriting the latter as a `0x` literal.
//!     - table: runs both over a whole header and keeps the pairs in order of
//!       appearance.
//!
//! Both values stay textual. They are embedded verbatim into generated source,
//! so we never round-trip them through an integer type.
//!
//! Use [`classify::Classifier::try_parse`] rather than calling the extractor
//! directly: it only extracts from lines the classifier accepted.

pub mod classify;
pub mod error;
pub mod extract;
pub mod table;

pub use classify::{Classifier, LineForm};
pub use error::{ExtractError, ParseError};
pub use extract::ExtractedPair;
pub use table::{ParsedTable, ScanStats};
