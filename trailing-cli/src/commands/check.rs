//! Check command implementation

use crate::error::{CliError, CliResult};
use crate::input::FileReader;
use crate::output::TextReporter;
use clap::{CommandFactory, Parser};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use trailing_core::{FlagRule, Markers, Scanner};

const EXAMPLES: &str = "\
EXAMPLES:
  check trailing whitespace in main.go & main.py:

  \ttrailing main.go main.py

  check trailing characters 'abc' in main.go:

  \ttrailing --chars 'abc' main.go
";

/// Arguments for the check command
#[derive(Debug, Parser)]
#[command(
    name = "trailing",
    version,
    about = "trailing - highlight trailing characters in files",
    after_help = EXAMPLES
)]
pub struct CheckArgs {
    /// The trailing chars (in any combination) to detect at line ends
    /// (default: all whitespace)
    #[arg(
        long,
        value_name = "STRING",
        env = "TRAILING_CHARS",
        allow_hyphen_values = true
    )]
    pub chars: Option<String>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Files to check, in order
    #[arg(value_name = "FILENAMES")]
    pub files: Vec<PathBuf>,
}

/// Outcome of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files scanned to the end
    pub files_checked: usize,
    /// Files that could not be opened or read
    pub files_failed: usize,
    /// Flagged lines reported across all files
    pub flagged_lines: usize,
}

impl RunSummary {
    /// True when every file was scanned; flagged lines do not count as failure
    pub fn is_success(&self) -> bool {
        self.files_failed == 0
    }
}

impl CheckArgs {
    /// Execute the check command against stdout and stderr
    pub fn execute(&self) -> CliResult<RunSummary> {
        self.init_logging();

        log::debug!("Arguments: {:?}", self);

        let stdout = io::stdout();
        let stderr = io::stderr();
        self.run(BufWriter::new(stdout.lock()), stderr.lock())
    }

    /// Check every file, writing the report to `out` and usage text and
    /// per-file errors to `err`
    pub fn run<W: Write, E: Write>(&self, out: W, mut err: E) -> CliResult<RunSummary> {
        if self.wants_usage() {
            write!(err, "{}", Self::usage())?;
            return Ok(RunSummary::default());
        }

        let rule = self.flag_rule();
        log::info!(
            "Checking {} file(s) for trailing {}",
            self.files.len(),
            rule
        );

        let mut reporter = TextReporter::new(out, Markers::ansi());
        let mut summary = RunSummary::default();

        for path in &self.files {
            let before = reporter.reported();
            match check_file(path, &rule, &mut reporter)? {
                FileOutcome::Checked(lines) => {
                    summary.files_checked += 1;
                    log::debug!(
                        "{}: {} line(s), {} flagged",
                        path.display(),
                        lines,
                        reporter.reported() - before
                    );
                }
                FileOutcome::Skipped(e) => {
                    summary.files_failed += 1;
                    writeln!(err, "{e}")?;
                    log::info!("Skipped {}", e.path().display());
                }
            }
        }

        summary.flagged_lines = reporter.reported();
        reporter.finish()?;

        log::info!(
            "Checked {} file(s), {} failed, {} flagged line(s)",
            summary.files_checked,
            summary.files_failed,
            summary.flagged_lines
        );

        Ok(summary)
    }

    /// Full usage text, including the examples
    pub fn usage() -> String {
        Self::command().render_help().to_string()
    }

    /// No filenames, or `help` as the first one
    pub fn wants_usage(&self) -> bool {
        self.files
            .first()
            .map_or(true, |first| first.as_os_str() == "help")
    }

    /// Flag rule selected by `--chars`
    pub fn flag_rule(&self) -> FlagRule {
        FlagRule::from_chars(self.chars.as_deref().unwrap_or(""))
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when called more than once
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// How a single file ended up
#[derive(Debug)]
enum FileOutcome {
    /// Scanned to the end; holds the number of lines read
    Checked(usize),
    /// Could not be opened or read; the run goes on without it
    Skipped(CliError),
}

/// Scan one file into `reporter`.
///
/// Only report write failures are returned as errors, and they end the run.
fn check_file<W: Write>(
    path: &Path,
    rule: &FlagRule,
    reporter: &mut TextReporter<W>,
) -> CliResult<FileOutcome> {
    let reader = match FileReader::open(path) {
        Ok(reader) => reader,
        Err(e) => return Ok(FileOutcome::Skipped(e)),
    };

    let mut scanner = Scanner::new(reader, rule);
    for finding in scanner.by_ref() {
        match finding {
            Ok(finding) => reporter.report(path, &finding)?,
            Err(source) => {
                return Ok(FileOutcome::Skipped(CliError::FileRead {
                    path: path.to_path_buf(),
                    source,
                }))
            }
        }
    }

    Ok(FileOutcome::Checked(scanner.lines_read()))
}
