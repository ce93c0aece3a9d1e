//! Harness configuration.
//!
//! Built once from the command line and threaded by reference through
//! discovery, execution and reporting.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::HarnessError;

/// Conventional install location of the compiler, relative to the project root.
pub const DEFAULT_COMPILER: &str = "build/install/blc/bin/blc";

/// Per-test wall-clock limit used when none is given.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for a harness run.
#[derive(Clone, Debug)]
pub struct HarnessConfig {
    /// File or directory to test.
    pub root: PathBuf,
    /// Compiler executable invoked once per test case.
    pub compiler: PathBuf,
    /// Per-test limit; `None` lets a hung compiler block forever.
    pub timeout: Option<Duration>,
    /// Run test cases on a worker pool.
    pub parallel: bool,
    /// Worker count for parallel runs (`None` = one per core).
    pub jobs: Option<usize>,
    /// List passing tests in the report.
    pub verbose: bool,
}

impl HarnessConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        HarnessConfig {
            root: root.into(),
            compiler: PathBuf::from(DEFAULT_COMPILER),
            timeout: Some(DEFAULT_TIMEOUT),
            parallel: true,
            jobs: None,
            verbose: false,
        }
    }

    #[must_use]
    pub fn with_compiler(mut self, compiler: impl Into<PathBuf>) -> Self {
        self.compiler = compiler.into();
        self
    }

    /// Set the per-test timeout. A zero duration disables it.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = (!timeout.is_zero()).then_some(timeout);
        self
    }

    #[must_use]
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Fail fast on configuration problems, before any test runs.
    pub fn validate(&self) -> Result<(), HarnessError> {
        if !self.root.is_file() && !self.root.is_dir() {
            return Err(HarnessError::InvalidPath(self.root.clone()));
        }
        check_executable(&self.compiler)
    }
}

fn check_executable(compiler: &Path) -> Result<(), HarnessError> {
    let Ok(metadata) = std::fs::metadata(compiler) else {
        return Err(HarnessError::CompilerNotFound(compiler.to_path_buf()));
    };
    if !metadata.is_file() {
        return Err(HarnessError::CompilerNotExecutable(compiler.to_path_buf()));
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if metadata.permissions().mode() & 0o111 == 0 {
            return Err(HarnessError::CompilerNotExecutable(compiler.to_path_buf()));
        }
    }

    Ok(())
}
