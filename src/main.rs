use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use web_time::Instant;

use chess_rules::core::config::EngineConfig;
use chess_rules::display::render_board;
use chess_rules::game::ai::{AiDifficulty, GameMode};
use chess_rules::game::types::Color;
use chess_rules::GameSession;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Black replies through deferred computer moves
    Pvc,
    /// Both sides move on request
    Pvp,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl From<Difficulty> for AiDifficulty {
    fn from(value: Difficulty) -> Self {
        match value {
            Difficulty::Easy => AiDifficulty::Easy,
            Difficulty::Medium => AiDifficulty::Medium,
            Difficulty::Hard => AiDifficulty::Hard,
        }
    }
}

/// Play a game of computer self-play and print the final position
#[derive(Debug, Parser)]
#[command(name = "chess-rules", version, about)]
struct Args {
    #[arg(long, value_enum, default_value = "pvc")]
    mode: Mode,

    /// Overrides the configured difficulty
    #[arg(long, value_enum)]
    difficulty: Option<Difficulty>,

    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many half-moves
    #[arg(long, default_value_t = 200)]
    max_plies: u32,

    /// Config file to load instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the board after every move
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => EngineConfig::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => EngineConfig::load_or_default(),
    };
    if let Some(seed) = args.seed {
        config.rng_seed = Some(seed);
    }
    let difficulty = args.difficulty.map_or(config.difficulty, AiDifficulty::from);

    // Self-play: both sides are driven through the session
    let mode = match args.mode {
        Mode::Pvc => GameMode::PlayerVsComputer {
            ai_color: Color::Black,
        },
        Mode::Pvp => GameMode::PlayerVsPlayer,
    };

    let mut session = GameSession::new(config);
    session.new_game(mode, difficulty);

    let mut plies = 0;
    while !session.is_terminal() && plies < args.max_plies {
        let result = if session.is_ai_turn() {
            let ticket = session.schedule_ai_move(Instant::now())?;
            session.run_deferred(ticket, ticket.due_at)
        } else {
            session.request_ai_move()
        };

        match result {
            Ok(mv) => {
                plies += 1;
                if args.verbose {
                    println!("{}. {}\n{}", plies, mv, render_board(session.state().board()));
                }
            }
            Err(reason) if session.is_terminal() => {
                tracing::debug!("[GAME] Final request ended the game: {}", reason);
            }
            Err(reason) => bail!("move request failed: {reason}"),
        }
    }

    let state = session.state();
    println!("{}", render_board(state.board()));
    println!(
        "Plies: {}  Captured: White {} / Black {}  Material: {:+}",
        plies,
        state.captured().by(Color::White).len(),
        state.captured().by(Color::Black).len(),
        state.captured().material_advantage()
    );
    if state.is_terminal() {
        println!("{}", state.outcome().message());
    } else {
        println!("No result after {} plies", plies);
    }
    Ok(())
}
