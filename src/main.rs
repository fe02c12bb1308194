use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod build;
mod commands;
mod config;
mod util;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// The command to execute
    #[command(subcommand)]
    command: PagefoldCommand,
}

#[derive(Parser)]
struct InitArgs {
    /// The path to initialize the project in
    path: PathBuf,

    /// Whether to create the directory if it doesn't exist
    #[arg(short, long, default_value = "false")]
    create: bool,
}

#[derive(Parser)]
struct BuildArgs {
    /// The path to the configuration file
    #[arg(short, long, default_value = "pagefold.yaml")]
    config_file: Option<PathBuf>,

    /// Fail the build when a layout, component or content file is missing
    #[arg(long, default_value = "false")]
    strict: bool,
}

#[derive(Parser)]
struct IndexArgs {
    /// The path to the configuration file
    #[arg(short, long, default_value = "pagefold.yaml")]
    config_file: Option<PathBuf>,

    /// Print the regenerated index content instead of writing it
    #[arg(long, default_value = "false")]
    dry_run: bool,
}

#[derive(Parser)]
struct ServeArgs {
    /// The address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// The port to bind to
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Open the site in the default browser
    #[arg(short, long, default_value = "false")]
    open: bool,

    /// The path to the configuration file
    #[arg(short, long, default_value = "pagefold.yaml")]
    config_file: Option<PathBuf>,
}

#[derive(Parser)]
struct CleanArgs {
    /// The path to the configuration file
    #[arg(short, long, default_value = "pagefold.yaml")]
    config_file: Option<PathBuf>,

    /// Print what would be deleted without deleting it
    #[arg(long, default_value = "false")]
    dry_run: bool,
}

#[derive(Subcommand)]
enum PagefoldCommand {
    /// Initialize a new site with default settings and an empty manifest
    Init(InitArgs),

    /// Build every page in the manifest
    Build(BuildArgs),

    /// Regenerate the namespace index listing in its content file
    Index(IndexArgs),

    /// Build the site and serve it on a local port
    Serve(ServeArgs),

    /// Remove the output directory
    Clean(CleanArgs),
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pagefold=info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();

    match args.command {
        PagefoldCommand::Init(args) => {
            commands::init::run(&args).await?;
        }
        PagefoldCommand::Build(args) => {
            commands::build::run(&args).await?;
        }
        PagefoldCommand::Index(args) => {
            commands::index::run(&args).await?;
        }
        PagefoldCommand::Serve(args) => {
            commands::serve::run(&args).await?;
        }
        PagefoldCommand::Clean(args) => {
            commands::clean::run(&args).await?;
        }
    }

    Ok(())
}
