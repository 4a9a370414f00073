mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "obra")]
#[command(about = "Authorization gate for the obra management platform")]
#[command(version)]
struct Cli {
    /// Path to the obra config directory (default: ~/.obra)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize obra configuration
    Init,

    /// Start the gate server
    Serve,

    /// List the permission catalog
    Permissions {
        /// Free-text filter over module, subgroup, and label
        #[arg(long)]
        filter: Option<String>,
    },

    /// List the route permission map
    Routes,

    /// Evaluate one gate decision offline
    Check {
        /// Request path, e.g. /proyectos/42/inventario
        path: String,

        /// Granted permission ids, comma-separated
        #[arg(long, value_delimiter = ',')]
        ids: Vec<u32>,

        /// Evaluate without an access token cookie
        #[arg(long)]
        no_access_token: bool,

        /// Evaluate without a refresh token cookie
        #[arg(long)]
        no_refresh_token: bool,
    },

    /// Show current configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("obra=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let base_dir = match cli.config_dir {
        Some(ref dir) => dir.clone(),
        None => obra_core::config::ObraConfig::default_base_dir()?,
    };

    match cli.command {
        Commands::Init => commands::init::run(&base_dir),
        Commands::Serve => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(commands::serve::run(&base_dir))
        }
        Commands::Permissions { ref filter } => commands::permissions::run(filter.as_deref()),
        Commands::Routes => commands::routes::run(),
        Commands::Check {
            ref path,
            ref ids,
            no_access_token,
            no_refresh_token,
        } => commands::check::run(&base_dir, path, ids, no_access_token, no_refresh_token),
        Commands::Config => commands::config::run(&base_dir),
    }
}
