//! create-express-api: scaffold a new Express + TypeScript API project.
//!
//! Copies the starter template into `./<name>`, patches `package.json` for the
//! new name and derives `.env` from `.env.example`. Exits with status 1 on an
//! invalid name, an existing target directory, or any failure while copying,
//! in which case the partially created directory is removed.

mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use express_starter_core::name::DEFAULT_PROJECT_NAME;

#[derive(Parser)]
#[command(
    name = "create-express-api",
    about = "Scaffold a new Express + TypeScript API project",
    version
)]
struct Cli {
    /// Project name (lowercase letters, numbers, and hyphens; creates a directory with this name)
    #[arg(default_value = DEFAULT_PROJECT_NAME)]
    name: String,

    /// Template directory to copy from (default: the bundled Express starter)
    #[arg(long, env = "EXPRESS_STARTER_TEMPLATE")]
    template: Option<PathBuf>,

    /// Directory in which the project directory is created
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match commands::init::run(&cli.name, cli.template.as_deref(), &cli.dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
