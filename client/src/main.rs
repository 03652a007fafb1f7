//! TCP client for a Reversi game server.
//!
//! The server sends one JSON message per turn carrying the player id
//! and the raw board grid; the client answers on the same connection
//! with the chosen move as a newline-terminated JSON pair. When the
//! server closes the connection the client exits cleanly.

use anyhow::{Context, Result};
use clap::Parser;
use reversi_core::engine::config::EngineConfig;
use reversi_core::engine::search::AlphaBetaEngine;
use reversi_core::engine::Choice;
use reversi_core::logic::board::{Board, Player};
use shared::{prepare_response, TurnMessage};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "client", about = "Reversi move-selection client")]
struct Args {
    /// Look-ahead depth; defaults to the engine config's max_depth.
    #[arg(long)]
    depth: Option<u8>,

    #[arg(long, default_value = "localhost")]
    host: String,

    #[arg(long, default_value_t = 1337)]
    port: u16,

    /// Optional JSON engine config file.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

/// Parses one turn message, validates the position at the boundary and
/// returns the encoded response. Any malformed input is an error for
/// the caller to surface; the engine itself never sees it.
fn handle_turn(engine: &mut AlphaBetaEngine, depth: u8, raw: &str) -> Result<String> {
    let msg: TurnMessage = serde_json::from_str(raw).context("malformed turn message")?;
    let board = Board::from_rows(&msg.board).context("rejected board")?;
    let player = Player::from_wire(msg.player).context("rejected player id")?;

    let choice = engine.choose_move(&board, player, depth);
    match choice {
        Choice::Move(mv) => {
            let stats = engine.stats();
            info!(
                row = mv.row,
                col = mv.col,
                nodes = stats.nodes,
                cache_hits = stats.cache_hits,
                time_ms = stats.time_ms,
                "playing move"
            );
        }
        Choice::Pass => info!("no legal move, passing"),
        Choice::GameOver => info!("no legal move for either side, game over"),
    }
    Ok(prepare_response(&choice))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            EngineConfig::load_from_json(&raw)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => EngineConfig::default(),
    };
    let depth = args.depth.unwrap_or(config.max_depth);

    // One engine per connection: the cache is scoped to this game.
    let mut engine = AlphaBetaEngine::new(config);
    engine.start_game();

    let addr = format!("{}:{}", args.host, args.port);
    let stream = TcpStream::connect(&addr)
        .await
        .with_context(|| format!("connecting to {addr}"))?;
    info!(%addr, depth, "connected");

    let (read_half, mut write_half) = stream.into_split();
    let mut lines = BufReader::new(read_half).lines();

    while let Some(line) = lines.next_line().await.context("reading from server")? {
        if line.trim().is_empty() {
            continue;
        }
        match handle_turn(&mut engine, depth, &line) {
            Ok(response) => {
                write_half
                    .write_all(response.as_bytes())
                    .await
                    .context("writing response")?;
            }
            Err(err) => {
                error!(error = %err, "dropping session on protocol error");
                break;
            }
        }
    }

    info!("connection closed");
    Ok(())
}
