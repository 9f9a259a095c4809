//! Writing the generated header to disk
//!
//! The raw document goes into a temporary file in the destination directory,
//! with the destination's extension, so the formatter sees the same language
//! and the same `.clang-format` lookup path it would for the real file. Only
//! after the formatter has run is the temporary file moved over the output,
//! either with the formatted text or, if formatting failed, with the raw text.

use crate::document::GeneratedDocument;
use crate::error::{EmitError, FormatError};
use crate::formatter::Formatter;
use log::{info, warn};
use std::fs;
use std::io::{Seek, SeekFrom, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// What ended up on disk.
#[derive(Debug)]
pub enum PublishOutcome {
    Formatted,
    /// The formatter failed; the raw document was written instead.
    Unformatted { reason: FormatError },
    FormatterDisabled,
}

impl PublishOutcome {
    pub fn is_formatted(&self) -> bool {
        matches!(self, PublishOutcome::Formatted)
    }
}

pub fn publish(
    document: &GeneratedDocument,
    output: &Path,
    formatter: Option<&Formatter>,
) -> Result<PublishOutcome, EmitError> {
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|source| io_error(dir, source))?;

    let suffix = output
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();
    let mut staged = tempfile::Builder::new()
        .prefix(".keysym-gen-")
        .suffix(&suffix)
        .tempfile_in(dir)
        .map_err(|source| io_error(dir, source))?;

    write_staged(&mut staged, document.as_str())?;

    let outcome = match formatter {
        None => PublishOutcome::FormatterDisabled,
        Some(formatter) => match formatter.format_file(staged.path()) {
            Ok(formatted) => {
                write_staged(&mut staged, &formatted)?;
                PublishOutcome::Formatted
            }
            Err(reason) => {
                warn!("{reason}; keeping unformatted output");
                PublishOutcome::Unformatted { reason }
            }
        },
    };

    copy_permissions(&staged, output)?;
    staged.persist(output).map_err(|err| EmitError::Persist {
        path: output.to_path_buf(),
        source: err.error,
    })?;

    info!(
        "wrote {} entries to {} ({})",
        document.entries(),
        output.display(),
        match &outcome {
            PublishOutcome::Formatted => "formatted",
            PublishOutcome::Unformatted { .. } => "unformatted",
            PublishOutcome::FormatterDisabled => "formatter disabled",
        }
    );
    Ok(outcome)
}

/// Replace the staged file's contents with `text`.
fn write_staged(staged: &mut NamedTempFile, text: &str) -> Result<(), EmitError> {
    let path = staged.path().to_path_buf();
    let file = staged.as_file_mut();
    file.set_len(0)
        .and_then(|_| file.seek(SeekFrom::Start(0)))
        .and_then(|_| file.write_all(text.as_bytes()))
        .and_then(|_| file.flush())
        .map_err(|source| io_error(&path, source))
}

/// Temporary files are created private; give the output the permissions of the
/// file it replaces, or the usual 0644 for a fresh one.
#[cfg(unix)]
fn copy_permissions(staged: &NamedTempFile, output: &Path) -> Result<(), EmitError> {
    use std::os::unix::fs::PermissionsExt;

    let permissions = fs::metadata(output)
        .map(|meta| meta.permissions())
        .unwrap_or_else(|_| fs::Permissions::from_mode(0o644));
    staged
        .as_file()
        .set_permissions(permissions)
        .map_err(|source| io_error(staged.path(), source))
}

#[cfg(not(unix))]
fn copy_permissions(_staged: &NamedTempFile, _output: &Path) -> Result<(), EmitError> {
    Ok(())
}

fn io_error(path: &Path, source: std::io::Error) -> EmitError {
    EmitError::Io {
        path: path.to_path_buf(),
        source,
    }
}
