//! External source formatter
//!
//! The formatter is run as a blocking subprocess with the file path as its only
//! positional argument (after any configured flags). Its stdout is the
//! formatted file. There is no timeout: a hung formatter blocks the run.

use crate::error::FormatError;
use log::debug;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    program: PathBuf,
    args: Vec<String>,
}

impl Formatter {
    /// Use `program` as given, without looking it up.
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Resolve `program` through `PATH` (or use it directly if it is a path).
    pub fn locate(program: &str, args: Vec<String>) -> Result<Self, FormatError> {
        let resolved = which::which(program).map_err(|source| FormatError::NotFound {
            program: program.to_string(),
            source,
        })?;
        debug!("using formatter {}", resolved.display());
        Ok(Self::new(resolved, args))
    }

    /// Run the formatter on `path` and return what it printed.
    ///
    /// The file itself is left alone; callers decide what to do with the text.
    pub fn format_file(&self, path: &Path) -> Result<String, FormatError> {
        debug!(
            "running {} {} {}",
            self.program.display(),
            self.args.join(" "),
            path.display()
        );

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| FormatError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(FormatError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let text = String::from_utf8(output.stdout).map_err(|_| FormatError::NonUtf8 {
            program: self.program.clone(),
        })?;
        if text.trim().is_empty() {
            return Err(FormatError::EmptyOutput {
                program: self.program.clone(),
            });
        }
        Ok(text)
    }
}
