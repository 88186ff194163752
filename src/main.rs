//! CLI entry point for ctree

use std::io::{self, Write};
use std::process;

use clap::{ArgAction, Parser};
use ctree::logging::init_logging;
use ctree::{Config, TreeRenderer};
use tracing::debug;

// `-h` means "show hidden" here, so clap's own short help and version flags
// are disabled and only the long forms remain.
#[derive(Parser, Debug)]
#[command(name = "ctree")]
#[command(about = "Print a directory tree, one color per depth")]
#[command(version, disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Print help
    #[arg(long = "help", action = ArgAction::Help)]
    help: Option<bool>,

    /// Print version
    #[arg(long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    /// Directory to display plus flags in any order:
    /// -h shows hidden entries, -nc disables color
    #[arg(
        value_name = "ARGS",
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    tokens: Vec<String>,
}

fn main() {
    init_logging();
    let args = Args::parse();
    debug!(tokens = ?args.tokens, "parsed command line");

    let config = Config::from_args(&args.tokens).unwrap_or_else(|e| {
        eprintln!("ctree: {}", e);
        process::exit(1);
    });

    let mut renderer = TreeRenderer::new(config, io::stdout().lock());
    let result = renderer.render();

    // The reset code trails the final newline, so flush before exiting.
    let flushed = renderer.into_inner().flush();

    if let Err(e) = result {
        eprintln!("ctree: {}", e);
        process::exit(1);
    }
    if let Err(e) = flushed {
        eprintln!("ctree: error writing output: {}", e);
        process::exit(1);
    }
}
