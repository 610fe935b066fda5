//! futureshape headless client.
//!
//! - Connects to `ws(s)://<page host>/transport`
//! - Requests the profile badge once connected
//! - Reads UI actions from stdin, one command per line (see `intent`)
//! - Exits when the backend closes the connection

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::{fmt, EnvFilter};

use futureshape_client::{config, intent::Intent, page::Page, view::TerminalView};

#[tokio::main(flavor = "current_thread")]
async fn main() -> futureshape_core::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "futureshape.yaml".to_string());
    let cfg = config::load_from_file(&path)?;

    let (page, signals) = Page::connect(&cfg, TerminalView)?;

    let (intent_tx, intent_rx) = mpsc::channel::<Intent>(16);
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Intent>() {
                Ok(intent) => {
                    if intent_tx.send(intent).await.is_err() {
                        break;
                    }
                }
                Err(e) => tracing::warn!(error = %e, "unrecognized command"),
            }
        }
    });

    page.run(signals, intent_rx).await;
    Ok(())
}
