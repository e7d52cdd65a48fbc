use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

use push_client::config::load_config;
use push_client::observability::logging::init_logging;
use push_client::{Document, PushClient};

#[derive(Parser)]
#[command(name = "push-cli")]
#[command(about = "Push JSON documents to a remote indexing API", long_about = None)]
struct Cli {
    /// TOML configuration file with [push] and [retry] sections.
    #[arg(short, long)]
    config: PathBuf,

    /// JSON files to push, one document object per file.
    #[arg(required = true)]
    documents: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    init_logging(&config.observability.log_level);

    let client = PushClient::new(config.push, config.retry)?;

    let mut failed = 0usize;
    for path in &cli.documents {
        match push_file(&client, path).await {
            Ok(message) => println!("{message}"),
            Err(e) => {
                eprintln!("Error pushing {}: {}", path.display(), e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(format!("{failed} document(s) failed to push").into());
    }
    Ok(())
}

async fn push_file(client: &PushClient, path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    let document = Document::from_value(value)?;
    let message = client.push_document(&document).await?;
    Ok(message)
}
