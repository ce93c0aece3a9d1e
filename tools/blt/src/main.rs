//! Base Language Tester CLI.
//!
//! Runs the compiler over every `.bl` program under a path and checks the
//! output against the matching `.bl.expected` file.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use blt::report;
use blt::tracing_setup::init_tracing;
use blt::{
    discover, HarnessConfig, HarnessError, TestHarness, DEFAULT_COMPILER, DEFAULT_TIMEOUT,
};

/// Base Language Tester.
#[derive(Parser, Debug)]
#[command(name = "blt")]
#[command(version, about, long_about = None)]
struct Cli {
    /// The file or folder to test
    path: PathBuf,

    /// The path to the compiler
    #[arg(short, long, default_value = DEFAULT_COMPILER)]
    compiler: PathBuf,

    /// Per-test timeout in seconds (0 disables it)
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,

    /// Number of worker threads (default: one per core)
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Run tests one at a time
    #[arg(long, default_value_t = false)]
    no_parallel: bool,

    /// List every test with its duration
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> HarnessConfig {
        let mut config = HarnessConfig::new(self.path)
            .with_compiler(self.compiler)
            .with_timeout(Duration::from_secs(self.timeout));
        config.parallel = !self.no_parallel;
        config.jobs = self.jobs;
        config.verbose = self.verbose;
        config
    }
}

fn main() -> ExitCode {
    init_tracing();
    let config = Cli::parse().into_config();

    match run(config) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(config: HarnessConfig) -> Result<u8, HarnessError> {
    config.validate()?;

    let discovery = discover(&config.root)?;
    println!("{}", report::discovery_line(&discovery));

    let harness = TestHarness::new(config);
    let summary = harness.run(&discovery)?;
    report::print(&summary, harness.config().verbose);

    Ok(summary.exit_code())
}
