//! GenFrames binary.
//!
//! - `genframes serve` runs the HTTP API
//! - `genframes parse <script>` prints the parsed shots as JSON
//! - `genframes storyboard <script>` parses, renders every frame and writes an HTML storyboard

use chrono::Utc;
use clap::{Parser, Subcommand};
use genframes_core::{ParseRequest, StyleTag};
use genframes_error::{ServerError, ServerErrorKind};
use genframes_pipeline::{Storyboard, export_file_name, render_html};
use genframes_server::{AppState, GenFramesConfig, LoggingConfig, init_logging, serve};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// GenFrames - turn scene scripts into illustrated storyboards
#[derive(Parser, Debug)]
#[command(name = "genframes")]
#[command(about = "Turn scene scripts into illustrated storyboards", long_about = None)]
#[command(version)]
struct Cli {
    /// Command to execute
    #[command(subcommand)]
    command: Commands,

    /// Configuration file, layered over the bundled defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Interface to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Parse a script file and print its shots as JSON
    Parse {
        /// Path to the scene script
        script: PathBuf,

        /// Visual style
        #[arg(long, default_value = "realistic")]
        style: StyleTag,
    },

    /// Parse a script, render every frame and export an HTML storyboard
    Storyboard {
        /// Path to the scene script
        script: PathBuf,

        /// Visual style
        #[arg(long, default_value = "realistic")]
        style: StyleTag,

        /// Output file (defaults to storyboard-<style>-<millis>.html)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Milliseconds between frame requests (overrides config)
        #[arg(long)]
        delay_ms: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GenFramesConfig::from_file(path)?,
        None => GenFramesConfig::load()?,
    };

    let log_level = if cli.verbose {
        "debug".to_string()
    } else {
        config.server.log_level.clone()
    };
    init_logging(&LoggingConfig::new(log_level).with_json_logs(config.server.json_logs))?;

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            let state = AppState::from_config(&config)?;
            serve(&config.server.bind_addr(), state).await?;
        }

        Commands::Parse { script, style } => {
            let script = read_script(&script)?;
            let state = AppState::from_config(&config)?;
            let shots = state
                .parser()
                .parse(&ParseRequest::new(script, style))
                .await?;
            println!("{}", serde_json::to_string_pretty(&shots)?);
        }

        Commands::Storyboard {
            script,
            style,
            out,
            delay_ms,
        } => {
            let script = read_script(&script)?;
            let delay = delay_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.frame_delay());
            let state = AppState::from_config(&config)?;

            let shots = state
                .parser()
                .parse(&ParseRequest::new(script, style))
                .await?;
            info!("Rendering {} frames", shots.len());

            let mut storyboard = Storyboard::new(style, shots);
            let outcome = storyboard.render_all(state.renderer(), delay).await;

            if !storyboard.has_frames() {
                return Err(match outcome.error {
                    Some(e) => e.into(),
                    None => "No frames to export yet".into(),
                });
            }

            let now = Utc::now();
            let out = out.unwrap_or_else(|| PathBuf::from(export_file_name(&storyboard, now)));
            std::fs::write(&out, render_html(&storyboard, now)).map_err(|e| {
                ServerError::new(ServerErrorKind::Io(format!(
                    "Failed to write {}: {}",
                    out.display(),
                    e
                )))
            })?;
            println!("{}", out.display());

            if let Some(e) = outcome.error {
                warn!(
                    rendered = outcome.frames.len(),
                    "Storyboard exported with missing frames"
                );
                return Err(e.into());
            }
        }
    }

    Ok(())
}

fn read_script(path: &Path) -> Result<String, ServerError> {
    std::fs::read_to_string(path).map_err(|e| {
        ServerError::new(ServerErrorKind::Io(format!(
            "Failed to read {}: {}",
            path.display(),
            e
        )))
    })
}
