use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GuardError {
    #[error("{} is not inside project root {}", path.display(), root.display())]
    OutsideProjectRoot { path: PathBuf, root: PathBuf },
    #[error("no path components left in {} after stripping {strip} leading components", path.display())]
    Empty { path: PathBuf, strip: usize },
    #[error("{} contains a `..` component; give an absolute path or a project root", path.display())]
    ParentComponent { path: PathBuf },
    #[error("header guard `{guard}` derived from {} starts with a digit", path.display())]
    LeadingDigit { path: PathBuf, guard: String },
}

/// Ways the external formatter can let us down.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("formatter `{program}` not found")]
    NotFound {
        program: String,
        #[source]
        source: which::Error,
    },
    #[error("failed to run formatter {}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("formatter {} exited with {status}: {stderr}", program.display())]
    Failed {
        program: PathBuf,
        status: ExitStatus,
        stderr: String,
    },
    #[error("formatter {} produced output that is not UTF-8", program.display())]
    NonUtf8 { program: PathBuf },
    #[error("formatter {} produced no output", program.display())]
    EmptyOutput { program: PathBuf },
}

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to move generated file into place at {}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
