//! hatch - a thin CLI front end for colcon workspaces
//!
//! Manages named configuration profiles persisted under a workspace's
//! `.hatch/profiles/` directory and shells out to colcon with arguments
//! derived from the effective profile configuration.
//!
//! ```text
//! argv -> args splitter -> clap -> commands/ -> exec/ (colcon)
//! ```

mod args;
mod cli;
mod commands;
mod config;
mod error;
mod exec;
mod version;
mod workspace;

use std::process::ExitCode;

use clap::Parser;
use console::style;

use cli::Cli;
use error::HatchError;

fn main() -> ExitCode {
    // The colcon pass-through runs are cut out of the raw argv before clap
    // parses it; their token shape does not fit a flag parser's model.
    let argv: Vec<String> = std::env::args().collect();
    let (mut processed, colcon_args) = args::preprocess(&argv[1..]);
    processed.insert(0, argv[0].clone());

    let cli = Cli::parse_from(&processed);

    match cli.execute(colcon_args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", style("Error:").red().bold());
            if let Some(hint) = err.downcast_ref::<HatchError>().and_then(HatchError::hint) {
                eprintln!("{} {hint}", style("HINT:").yellow().bold());
            }
            ExitCode::FAILURE
        }
    }
}
