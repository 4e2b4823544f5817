//! Tactic board CLI
//!
//! Lists matches, prints match overviews and renders dashboard JSON from a
//! local open-data checkout.

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "tactic")]
#[command(about = "Tactic boards from open-data match events", long_about = None, version = tactic_core::VERSION)]
struct Cli {
    /// YAML config file (overrides TACTIC_CONFIG_PATH)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// List matches grouped by competition stage
    Matches,

    /// Print score and manager overview for a match
    Overview {
        /// Match id (defaults to the configured match)
        #[arg(long)]
        match_id: Option<u64>,
    },

    /// Build tactic and formation diagrams for a match
    Render {
        /// Match id (defaults to the configured match)
        #[arg(long)]
        match_id: Option<u64>,

        /// Output file (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Write one figure per line instead of the dashboard document
        #[arg(long, default_value = "false")]
        figure_lines: bool,
    },

    /// Print the JSON schema of the rendered output
    Schema {
        /// Schema of the whole dashboard document instead of one figure
        #[arg(long, default_value = "false")]
        dashboard: bool,
    },
}

#[cfg(feature = "cli")]
fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // stdout carries the JSON output
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    use std::io::Write;
    use tactic_cli::RenderFormat;
    use tactic_core::{DashboardConfig, LocalOpenData};

    init_tracing();
    let cli = Cli::parse();

    let config = DashboardConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    let source = LocalOpenData::new(&config.data_root);
    tracing::debug!(data_root = %config.data_root.display(), "using open-data directory");

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    match cli.command {
        Commands::Matches => tactic_cli::list_matches(&source, &config, &mut stdout)?,

        Commands::Overview { match_id } => tactic_cli::print_overview(&source, &config, match_id, &mut stdout)?,

        Commands::Render {
            match_id,
            out,
            figure_lines,
        } => {
            let format = if figure_lines {
                RenderFormat::FigureLines
            } else {
                RenderFormat::Dashboard
            };
            match out {
                Some(path) => {
                    let file = std::fs::File::create(&path)
                        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                    let mut writer = std::io::BufWriter::new(file);
                    tactic_cli::render(&source, &config, match_id, format, &mut writer)?;
                    writer.flush()?;
                    tracing::info!(path = %path.display(), "dashboard written");
                }
                None => tactic_cli::render(&source, &config, match_id, format, &mut stdout)?,
            }
        }

        Commands::Schema { dashboard } => tactic_cli::write_schema(dashboard, &mut stdout)?,
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("tactic CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
