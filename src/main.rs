//! CLI entry point for skillcheck.
//!
//! Exit status: 0 when the package passed (warnings allowed), 1 for a failed
//! package, an uninspectable package or a usage error.

mod cli;
mod cmd;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use std::io;

use cli::{Cli, Commands};

fn main() {
    init_tracing();

    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            1
        }
    };

    std::process::exit(code);
}

/// Diagnostics go to stderr so stdout stays a clean report.
/// Filter with `SKILLCHECK_LOG` (e.g. `SKILLCHECK_LOG=debug`).
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("SKILLCHECK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run() -> Result<i32> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not usage errors
            let code = if e.use_stderr() { 1 } else { 0 };
            e.print()?;
            return Ok(code);
        }
    };

    match cli.command {
        Some(Commands::Init {
            name,
            description,
            template,
            path,
            force,
        }) => {
            cmd::init::cmd_init(name, description, &template, &path, force)?;
            Ok(0)
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "skillcheck", &mut io::stdout());
            Ok(0)
        }
        None => match cli.path {
            Some(path) => {
                let options = cmd::validate::ValidateOptions {
                    format: cli.format.into(),
                    quiet: cli.quiet,
                    config: cli.config,
                };
                cmd::validate::cmd_validate(&path, &options)
            }
            None => {
                eprintln!("{} missing required argument <PATH>", "Error:".red());
                eprintln!();
                eprintln!("{}", Cli::command().render_usage());
                Ok(1)
            }
        },
    }
}
