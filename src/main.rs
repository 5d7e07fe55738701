//! # bizcanvas CLI
//!
//! Command-line interface for building Business Model Canvases.
//!
//! ## Usage
//!
//! ```bash
//! # Show the suggestions a prompt produces
//! bizcanvas suggest "20-30대를 위한 구독형 모바일 앱"
//!
//! # Apply prompts in order and write business-canvas-<date>.json
//! bizcanvas export --prompt "모바일 앱" --prompt "광고 수익" --out ./exports
//!
//! # Run the browser editor and canvas API
//! bizcanvas serve --listen 0.0.0.0:8080
//!
//! # Talk to a canvas API
//! bizcanvas remote --base-url http://host/api/business list
//! ```

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use bizcanvas::{
    BusinessCanvas, CanvasError, Session, board,
    canvas::merge,
    mapper::map_prompt,
    remote::{CanvasClient, CanvasPatch, ClientConfig, DEFAULT_BASE_URL},
    server::{self, DEFAULT_LISTEN_ADDR, ServerConfig},
};

/// bizcanvas - Business Model Canvas utility
#[derive(Parser, Debug)]
#[command(name = "bizcanvas")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the canvas suggestions for a prompt
    Suggest {
        /// Business idea text
        prompt: String,

        /// Merge into this canvas JSON file and print the full canvas
        #[arg(long, value_name = "FILE")]
        merge_into: Option<PathBuf>,
    },

    /// Apply prompts to a fresh canvas and write the export file
    Export {
        /// Prompt to apply (repeatable, applied in order)
        #[arg(long = "prompt", value_name = "TEXT")]
        prompts: Vec<String>,

        /// Directory for business-canvas-<date>.json
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },

    /// Serve the browser editor and canvas API
    Serve {
        /// Address to listen on
        #[arg(long, default_value = DEFAULT_LISTEN_ADDR)]
        listen: String,
    },

    /// Call a remote canvas API
    Remote {
        /// API base URL
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,

        /// Request timeout in seconds
        #[arg(long, default_value = "30")]
        timeout: u64,

        #[command(subcommand)]
        action: RemoteAction,
    },
}

#[derive(Subcommand, Debug)]
enum RemoteAction {
    /// Generate and store a canvas from a prompt
    Generate {
        prompt: String,
        /// Canvas name
        #[arg(long)]
        name: Option<String>,
    },
    /// List stored canvases
    List,
    /// Fetch one canvas
    Get { id: String },
    /// Apply a JSON patch file (snake_case fields) to a canvas
    Update {
        id: String,
        #[arg(long, value_name = "FILE")]
        file: PathBuf,
    },
    /// Delete a canvas
    Delete { id: String },
    /// Copy a canvas under a new id
    Duplicate { id: String },
}

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = run(Cli::parse()).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bizcanvas=info,tower_http=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CanvasError> {
    match cli.command {
        Commands::Suggest { prompt, merge_into } => {
            let partial = map_prompt(&prompt);
            match merge_into {
                Some(path) => {
                    let base: BusinessCanvas = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
                    print_json(&merge(&base, &partial))?;
                }
                None => print_json(&partial)?,
            }
        }

        Commands::Export { prompts, out } => {
            let mut session = Session::new();
            for prompt in prompts {
                session.prompt_mut().set_input(prompt);
                session.submit_prompt();
            }
            std::fs::create_dir_all(&out)?;
            let date = chrono::Local::now().date_naive();
            let path = board::write_export(&out, session.canvas(), date)?;
            println!("Saved to {}", path.display());
        }

        Commands::Serve { listen } => {
            server::serve(ServerConfig { listen_addr: listen }).await?;
        }

        Commands::Remote {
            base_url,
            timeout,
            action,
        } => {
            let client = CanvasClient::new(ClientConfig {
                base_url,
                timeout: Duration::from_secs(timeout),
            })?;
            run_remote(&client, action).await?;
        }
    }

    Ok(())
}

async fn run_remote(client: &CanvasClient, action: RemoteAction) -> Result<(), CanvasError> {
    match action {
        RemoteAction::Generate { prompt, name } => {
            print_json(&client.generate(&prompt, name.as_deref()).await?)
        }
        RemoteAction::List => print_json(&client.list().await?),
        RemoteAction::Get { id } => print_json(&client.get(&id).await?),
        RemoteAction::Update { id, file } => {
            let patch: CanvasPatch = serde_json::from_str(&std::fs::read_to_string(&file)?)?;
            print_json(&client.update(&id, &patch).await?)
        }
        RemoteAction::Delete { id } => {
            client.delete(&id).await?;
            println!("Deleted {}", id);
            Ok(())
        }
        RemoteAction::Duplicate { id } => print_json(&client.duplicate(&id).await?),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CanvasError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
