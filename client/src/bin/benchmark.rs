//! Benchmark observer.
//!
//! Watches the game server's outcome feed over a websocket, keeps a
//! running win/loss/tie tally for the client under test, persists a
//! plain-text summary after every finished game and restarts a fresh
//! client instance after a fixed delay.

use anyhow::{Context, Result};
use clap::Parser;
use futures::StreamExt;
use shared::{GameOutcome, GameResult};
use std::path::PathBuf;
use tokio::process::{Child, Command};
use tokio::time::{sleep, Duration};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "benchmark", about = "Win/loss tracker for the Reversi client")]
struct Args {
    /// Websocket feed publishing game-state events.
    #[arg(long, default_value = "ws://localhost:8080/api/game-state")]
    feed: String,

    /// File the running summary is written to.
    #[arg(long, default_value = "benchmark.o")]
    output: PathBuf,

    /// Seconds to wait before starting the next client.
    #[arg(long, default_value_t = 5)]
    restart_delay: u64,
}

#[derive(Debug, Default)]
struct Tally {
    wins: u32,
    losses: u32,
    ties: u32,
}

impl Tally {
    fn record(&mut self, result: Option<GameResult>) {
        match result {
            Some(GameResult::PlayerOneWon) => self.wins += 1,
            Some(GameResult::PlayerTwoWon) => self.losses += 1,
            Some(GameResult::Other) | None => self.ties += 1,
        }
    }

    fn summary(&self) -> String {
        format!(
            "Wins: {}\nLosses: {}\nTies: {}\n",
            self.wins, self.losses, self.ties
        )
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

/// Starts the `client` binary that lives next to this one.
fn spawn_client() -> Result<Child> {
    let exe = std::env::current_exe().context("locating benchmark executable")?;
    let client = exe.with_file_name("client");
    Command::new(&client)
        .spawn()
        .with_context(|| format!("spawning {}", client.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let (mut feed, _) = connect_async(&args.feed)
        .await
        .with_context(|| format!("connecting to {}", args.feed))?;
    info!(feed = %args.feed, "watching game outcomes");

    let mut child = spawn_client()?;
    let mut tally = Tally::default();

    while let Some(message) = feed.next().await {
        let message = message.context("reading outcome feed")?;
        let Message::Text(text) = message else {
            continue;
        };
        let outcome: GameOutcome = match serde_json::from_str(&text) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(error = %err, "skipping unparseable event");
                continue;
            }
        };
        if !outcome.is_game_over() {
            continue;
        }

        tally.record(outcome.game_result);
        let summary = tally.summary();
        match std::fs::write(&args.output, &summary) {
            Ok(()) => info!("{}", summary.trim_end()),
            Err(err) => error!(error = %err, path = %args.output.display(), "writing summary"),
        }

        // The finished client exits on its own when the server closes
        // the connection; reap it and start the next one.
        let _ = child.try_wait();
        sleep(Duration::from_secs(args.restart_delay)).await;
        child = spawn_client()?;
    }

    info!("outcome feed closed");
    Ok(())
}
