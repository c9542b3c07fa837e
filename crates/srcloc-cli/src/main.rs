mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "srcloc")]
#[command(about = "Inspect source classifications and location spans", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify every file under a directory, in classification order
    Classify {
        /// Directory to walk
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Check whether one span contains another (spans are written L:C-L:C)
    Contains {
        /// Outer span
        outer: String,

        /// Inner span
        inner: String,

        /// File both spans belong to
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable output with colors
    Human,
    /// JSON output for tooling
    Json,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never mix with command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { dir, format } => {
            commands::classify::run(cli.config, &dir, format)?;
        }
        Commands::Contains { outer, inner, file } => {
            commands::contains::run(cli.config, &outer, &inner, file)?;
        }
    }

    Ok(())
}
