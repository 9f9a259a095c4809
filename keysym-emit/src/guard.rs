//! Header guard derivation
//!
//! The guard token is a pure function of the output path: the project-root
//! part of the path is dropped, the rest is joined with underscores and
//! upper-cased, and a trailing underscore is appended.
//!
//!     libowl/libowl/detail/x11/keysym_to_code_point_table.hpp   (strip 1)
//!     → LIBOWL_DETAIL_X11_KEYSYM_TO_CODE_POINT_TABLE_HPP_
//!
//! Two generated files only collide if they share a path after stripping.
//! `..` components are rejected rather than guessed at, and so is a token
//! that would start with a digit.

use crate::error::GuardError;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// How much of the output path belongs to the project root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuardRule {
    /// Prefix removed first; the output must live under it.
    pub project_root: Option<PathBuf>,
    /// Leading components dropped after `project_root` is removed.
    pub strip_components: usize,
}

impl GuardRule {
    pub fn new(project_root: Option<PathBuf>, strip_components: usize) -> Self {
        Self {
            project_root,
            strip_components,
        }
    }

    pub fn derive(&self, output: &Path) -> Result<HeaderGuard, GuardError> {
        let relative = match &self.project_root {
            Some(root) => output
                .strip_prefix(root)
                .map_err(|_| GuardError::OutsideProjectRoot {
                    path: output.to_path_buf(),
                    root: root.clone(),
                })?,
            None => output,
        };

        let mut segments = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(segment) => {
                    segments.push(segment.to_string_lossy().into_owned());
                }
                Component::ParentDir => {
                    return Err(GuardError::ParentComponent {
                        path: output.to_path_buf(),
                    });
                }
                Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
            }
        }
        let segments: Vec<String> = segments.into_iter().skip(self.strip_components).collect();

        if segments.is_empty() {
            return Err(GuardError::Empty {
                path: output.to_path_buf(),
                strip: self.strip_components,
            });
        }

        let mut token: String = segments
            .join("_")
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect();
        token.push('_');
        if token.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(GuardError::LeadingDigit {
                path: output.to_path_buf(),
                guard: token,
            });
        }
        Ok(HeaderGuard(token))
    }
}

/// A header-guard macro name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeaderGuard(String);

impl HeaderGuard {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HeaderGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
