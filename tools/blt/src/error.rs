//! Fatal harness errors.
//!
//! Everything here aborts the run before (or instead of) reporting. Problems
//! local to a single test case are recorded in its `Verdict` instead.

use std::path::PathBuf;

/// Errors that stop the harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("invalid path, please provide a valid file or folder: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("compiler not found: {}", .0.display())]
    CompilerNotFound(PathBuf),

    #[error("compiler is not an executable file: {}", .0.display())]
    CompilerNotExecutable(PathBuf),

    #[error("failed to run {} on {}: {source}", compiler.display(), test.display())]
    Spawn {
        compiler: PathBuf,
        test: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HarnessError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HarnessError::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for a fatal error.
    ///
    /// Every fatal error maps to 1, the same code as a failing test run.
    pub fn exit_code(&self) -> u8 {
        match self {
            HarnessError::InvalidPath(_)
            | HarnessError::CompilerNotFound(_)
            | HarnessError::CompilerNotExecutable(_)
            | HarnessError::Spawn { .. }
            | HarnessError::Io { .. } => 1,
        }
    }
}
