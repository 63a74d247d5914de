//! trailing: highlight trailing characters in files

use clap::Parser;
use std::process::ExitCode;
use trailing_cli::commands::CheckArgs;

fn main() -> ExitCode {
    let args = match CheckArgs::try_parse() {
        Ok(args) => args,
        // Argument errors get the full usage, examples included
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            eprint!("\n{}", CheckArgs::usage());
            return ExitCode::from(2);
        }
        Err(e) => e.exit(),
    };

    match args.execute() {
        Ok(summary) if summary.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
