mod logger;

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand};
use headerpatch_core::{Operation, RunConfig, default_package_dir, execute};
use std::path::{Path, PathBuf};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    name = "headerpatch",
    about = "Replace or delete header keys across every JSON file of a serverless package",
    version
)]
struct Cli {
    /// Service root; the default package directory is <SERVICE_PATH>/.serverless
    #[arg(long, global = true, env = "SERVERLESS_SERVICE_PATH", default_value = ".")]
    service_path: PathBuf,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// JSON input of key value pairs to find and replace
    #[command(alias = "replaceHeaders", disable_help_flag = true)]
    ReplaceHeaders(ReplaceArgs),
    /// Comma separated headers to remove
    #[command(alias = "deleteHeaders", disable_help_flag = true)]
    DeleteHeaders(DeleteArgs),
}

#[derive(ClapArgs, Debug)]
struct ReplaceArgs {
    /// JSON object of key value pairs, e.g. '{"a":"b"}'
    #[arg(short = 'h', long)]
    headers: String,
    #[command(flatten)]
    package: PackageArg,
    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

#[derive(ClapArgs, Debug)]
struct DeleteArgs {
    /// Comma separated headers to remove, e.g. 'header1,header2'
    #[arg(short = 'h', long)]
    headers: String,
    #[command(flatten)]
    package: PackageArg,
    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

#[derive(ClapArgs, Debug)]
struct PackageArg {
    /// Package directory to scan for *.json files (defaults to <SERVICE_PATH>/.serverless)
    #[arg(short = 'p', long = "package")]
    dir: Option<PathBuf>,
}

impl PackageArg {
    fn resolve(self, service_path: &Path) -> PathBuf {
        self.dir.unwrap_or_else(|| default_package_dir(service_path))
    }
}

fn main() {
    let cli = Cli::parse();
    logger::setup_logger();
    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> headerpatch_core::Result<()> {
    let config = match cli.cmd {
        Cmd::ReplaceHeaders(a) => RunConfig {
            operation: Operation::replace_from_json(&a.headers)?,
            package_dir: a.package.resolve(&cli.service_path),
        },
        Cmd::DeleteHeaders(a) => RunConfig {
            operation: Operation::delete_from_list(&a.headers),
            package_dir: a.package.resolve(&cli.service_path),
        },
    };
    execute(&config, |line| info!("{line}"))?;
    Ok(())
}
