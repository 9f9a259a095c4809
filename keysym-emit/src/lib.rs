//! C++ emission for keysym tables
//!
//!     This crate turns a [`keysym_parser::ParsedTable`] into a header that a
//!     C++ project includes as its keysym → code point lookup table.
//!
//! Architecture
//!
//!     - naming: identifiers used in the generated source, with the two presets
//!       the generator has shipped with
//!     - guard: header-guard token derived from the output path
//!     - document: pure text rendering, no I/O
//!     - formatter: the external source formatter (clang-format by default)
//!     - publish: writes the document next to its destination, formats it there
//!       and moves it into place
//!
//!     Rendering and publishing are split so the raw document can be printed or
//!     tested without touching the filesystem.
//!
//! Formatter failures
//!
//!     The formatter is an outside tool that may be missing or broken. Its
//!     failure never replaces the output with its own (possibly empty) stdout:
//!     the unformatted document is valid C++ and is kept instead, and the caller
//!     gets [`PublishOutcome::Unformatted`] with the reason.

pub mod document;
pub mod error;
pub mod formatter;
pub mod guard;
pub mod naming;
pub mod publish;

pub use document::{render, DocumentLayout, GeneratedDocument};
pub use error::{EmitError, FormatError, GuardError};
pub use formatter::Formatter;
pub use guard::{GuardRule, HeaderGuard};
pub use naming::{NamingPreset, TableNaming};
pub use publish::{publish, PublishOutcome};
