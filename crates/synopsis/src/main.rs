use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use synopsis_common::{logger, SynopsisConfig};
use synopsis_llm::{OpenAiClient, Summarizer, SummarizerOptions};

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "synopsis")]
#[command(about = "Synopsis - chunked LLM summarization into a title and description", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,
    },

    /// Summarize a text file (or stdin) and print the result as JSON
    Summarize {
        /// Input file, `-` or absent for stdin
        file: Option<PathBuf>,

        /// Also print the joined chunk summaries to stderr
        #[arg(long)]
        show_summary: bool,
    },
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

async fn serve(mut config: SynopsisConfig, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server_host = host;
    }
    if let Some(port) = port {
        config.server_port = port;
    }

    logger::setup_logging(&config)?;

    tracing::info!("Synopsis starting...");
    tracing::info!("Configuration loaded:");
    tracing::info!("  Bind: {}", config.server_bind_address());
    tracing::info!("  Endpoint: {}", config.api_url);
    tracing::info!("  Model: {}", config.model);

    println!("Server listening on http://{}", config.server_bind_address());

    synopsis_server::start_server(config).await?;
    Ok(())
}

async fn summarize(config: SynopsisConfig, file: Option<PathBuf>, show_summary: bool) -> Result<()> {
    logger::setup_console_logging(&config.log_level)?;
    config.validate()?;

    let text = read_input(file.as_ref())?;
    let client = OpenAiClient::from_config(&config)?;
    let summarizer = Summarizer::new(
        Arc::new(client),
        config.model.clone(),
        SummarizerOptions::from(&config),
    );

    let digest = summarizer.summarize(&text).await?;
    if show_summary {
        eprintln!("{}", digest.joined_summary);
    }

    let result = digest.synthesis.into_result();
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv_from_project_root();
    let config = SynopsisConfig::from_env()?;

    match cli.command {
        Some(Commands::Serve { host, port }) => serve(config, host, port).await,
        Some(Commands::Summarize { file, show_summary }) => summarize(config, file, show_summary).await,
        None => serve(config, None, None).await,
    }
}
