//! CLI argument definitions for skillcheck.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use skillcheck::report::OutputFormat;
use skillcheck::scaffold::DEFAULT_TEMPLATE;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_SHA"),
    ", built ",
    env!("BUILD_DATE"),
    ")"
);

#[derive(Parser)]
#[command(name = "skillcheck")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Validate agent skill packages", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(
    after_help = "EXAMPLES:\n    skillcheck skills/pdf-forms                 Validate a package\n    skillcheck --format json skills/pdf-forms   Machine-readable report\n    skillcheck init pdf-forms -d \"Fills PDF forms. Use when ...\"\n\nExit status is 0 when the package has no errors (warnings allowed), 1 otherwise."
)]
pub struct Cli {
    /// Skill package directory (must contain SKILL.md)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// Suppress the per-check progress lines
    #[arg(short, long)]
    pub quiet: bool,

    /// Config file (markdown with YAML frontmatter)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new skill package from a template
    ///
    /// Prompts for the name and description when they are omitted and
    /// stdin is a terminal.
    Init {
        /// Skill name, also used as the directory name
        name: Option<String>,
        /// What the skill does and when to use it
        #[arg(short, long)]
        description: Option<String>,
        /// Built-in template (basic, with-reference) or a template directory
        #[arg(short, long, default_value = DEFAULT_TEMPLATE)]
        template: String,
        /// Directory in which the package directory is created
        #[arg(short, long, default_value = ".")]
        path: PathBuf,
        /// Write into an existing package directory
        #[arg(long)]
        force: bool,
    },
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// `--format` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}
