use anyhow::Result;
use clap::Parser;
use hapigen::scaffold::{new_project, show_settings};
use std::path::PathBuf;

/// hapigen - hapi service generator
///
/// Interviews you about a new project, remembers your answers for the next
/// run, and writes out a ready-to-develop hapi composer service.
///
/// Examples:
///   hapigen new my-service     # Scaffold into ./my-service
#[derive(Parser, Debug)]
#[command(author, version = env!("HAPIGEN_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Settings file location (overrides the default; also via HAPIGEN_SETTINGS)
    #[arg(
        long = "settings",
        short = 's',
        env = "HAPIGEN_SETTINGS",
        value_name = "PATH",
        global = true
    )]
    pub settings: Option<PathBuf>,

    /// npm registry URL (defaults to https://registry.npmjs.org)
    #[arg(long = "registry-url", value_name = "URL", global = true)]
    pub registry_url: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Scaffold a new hapi project
    New(NewArgs),

    /// Show the stored answers and the plugin catalog
    Settings(SettingsArgs),
}

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Target directory (defaults to the current directory)
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Skip running npm install after scaffolding
    #[arg(long = "skip-install")]
    pub skip_install: bool,
}

#[derive(clap::Args, Debug)]
pub struct SettingsArgs {}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = hapigen::runtime::RealRuntime;

    match cli.command {
        Commands::New(args) => {
            new_project(
                runtime,
                args.dir,
                args.skip_install,
                cli.settings,
                cli.registry_url,
            )
            .await?
        }
        Commands::Settings(_args) => show_settings(&runtime, cli.settings)?,
    }
    Ok(())
}
