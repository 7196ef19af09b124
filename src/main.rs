//! CLI entry point for tilview

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tilview")]
#[command(version = "0.1.0")]
#[command(about = "A fetch-and-render page viewer for TIL-style markdown sites", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a page and print the rendered document
    #[command(alias = "v")]
    View {
        /// Page path as it would appear in the browser address bar
        #[arg(default_value = "/")]
        path: String,

        /// Write the document to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit only the content HTML, without the page shell
        #[arg(long)]
        fragment: bool,

        /// Override the configured site origin
        #[arg(short, long)]
        site: Option<String>,
    },

    /// Resolve page paths to markdown file locations
    Route {
        /// Page paths to resolve
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "tilview=debug,info"
    } else {
        "tilview=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::View {
            path,
            output,
            fragment,
            site,
        } => {
            let mut tilview = tilview::Tilview::new(&base_dir)?;
            if let Some(site) = site {
                tilview.config.url = site;
            }
            tilview::commands::view::run(&tilview, &path, output.as_deref(), fragment).await?;
        }

        Commands::Route { paths } => {
            let tilview = tilview::Tilview::new(&base_dir)?;
            tilview::commands::route::run(&tilview, &paths);
        }

        Commands::Version => {
            println!("tilview version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
