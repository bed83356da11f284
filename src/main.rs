use anyhow::Result;
use log::{debug, info};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use lsp_wire::{config::DEFAULT_LOG_FILTER, wire};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut count = 0usize;

    while let Some(line) = lines.next_line().await? {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        debug!("Inspecting {} bytes", trimmed.len());
        let canonical = wire::canonicalize(trimmed).to_json_string();
        stdout.write_all(canonical.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
        count += 1;
    }

    info!("Inspected {} messages", count);
    Ok(())
}
