//! Game session: the external interface of the engine
//!
//! A [`GameSession`] wraps the [`GameState`] together with the game mode, the
//! computer's difficulty, the engine configuration and the random source.
//!
//! # Deferred Computer Moves
//!
//! After a human move in player-vs-computer mode the caller schedules the
//! computer's reply with [`GameSession::schedule_ai_move`] and runs it once it
//! is due. Every new game or restart bumps the session epoch, so a ticket
//! scheduled for an earlier game is discarded:
//!
//! ```rust
//! use chess_rules::core::config::EngineConfig;
//! use chess_rules::game::ai::{AiDifficulty, GameMode};
//! use chess_rules::game::error::MoveRejection;
//! use chess_rules::game::session::GameSession;
//! use chess_rules::game::types::{Color, Square};
//! use web_time::Instant;
//!
//! let mut session = GameSession::new(EngineConfig::default());
//! session.new_game(GameMode::PlayerVsComputer { ai_color: Color::Black }, AiDifficulty::Medium);
//!
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//! session.select(e2);
//! assert!(session.submit_move(e2, e4).is_applied());
//!
//! let ticket = session.schedule_ai_move(Instant::now()).unwrap();
//! session.restart();
//! assert!(matches!(
//!     session.run_deferred(ticket, ticket.due_at),
//!     Err(MoveRejection::StaleEpoch { .. })
//! ));
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;
use web_time::Instant;

use crate::core::config::{EngineConfig, NoMoveRule};
use crate::game::ai::{select_move, AiDifficulty, DeferredAiMove, GameMode};
use crate::game::error::MoveRejection;
use crate::game::resources::MoveTarget;
use crate::game::rules::{all_legal_moves, Board};
use crate::game::state::{GamePhase, GameState, MoveOutcome};
use crate::game::types::{Color, Move, Square};

pub struct GameSession {
    state: GameState,
    mode: GameMode,
    difficulty: AiDifficulty,
    config: EngineConfig,
    /// Bumped on every new game; deferred moves carry the epoch they were
    /// scheduled in
    epoch: u64,
    pending: Option<DeferredAiMove>,
    rng: StdRng,
}

impl GameSession {
    /// Session in the setup phase; call [`GameSession::new_game`] to play
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        GameSession {
            state: GameState::setup(config.no_move_rule),
            mode: GameMode::default(),
            difficulty: config.difficulty,
            config,
            epoch: 0,
            pending: None,
            rng,
        }
    }

    /// Start a fresh game in the given mode
    pub fn new_game(&mut self, mode: GameMode, difficulty: AiDifficulty) {
        self.mode = mode;
        self.difficulty = difficulty;
        self.replace_state(GameState::new_game(self.config.no_move_rule));
        tracing::info!(
            "[GAME] New game: {:?}, difficulty {}",
            mode,
            difficulty.description()
        );
    }

    /// Start a game from an arbitrary position
    pub fn new_game_from_position(
        &mut self,
        mode: GameMode,
        difficulty: AiDifficulty,
        board: Board,
        to_move: Color,
    ) {
        self.mode = mode;
        self.difficulty = difficulty;
        self.replace_state(GameState::from_position(board, to_move, self.config.no_move_rule));
        tracing::info!("[GAME] Position loaded, {} to move", to_move);
    }

    /// Start over with the current mode and difficulty
    pub fn restart(&mut self) {
        self.new_game(self.mode, self.difficulty);
    }

    /// Back to the pre-game phase
    pub fn reset_to_setup(&mut self) {
        self.replace_state(GameState::setup(self.config.no_move_rule));
    }

    fn replace_state(&mut self, state: GameState) {
        self.state = state;
        self.epoch += 1;
        if self.pending.take().is_some() {
            tracing::debug!("[AI] Pending move dropped by epoch {}", self.epoch);
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> AiDifficulty {
        self.difficulty
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn pending(&self) -> Option<DeferredAiMove> {
        self.pending
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.state.is_terminal() && self.mode.is_ai_turn(self.state.to_move())
    }

    pub fn select(&mut self, square: Square) -> Vec<MoveTarget> {
        self.state.select(square)
    }

    pub fn clear_selection(&mut self) {
        self.state.clear_selection();
    }

    pub fn submit_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        self.state.submit_move(from, to)
    }

    /// Compute and apply a move for the side to move right away
    ///
    /// Works in either mode; [`GameSession::schedule_ai_move`] is the
    /// mode-aware entry point.
    pub fn request_ai_move(&mut self) -> Result<Move, MoveRejection> {
        if self.state.phase() != GamePhase::Active {
            return Err(MoveRejection::GameNotActive);
        }

        let chosen = select_move(
            &self.state,
            self.difficulty,
            self.config.random_move_attempts,
            &mut self.rng,
        )
        .or_else(|| self.fallback_move());

        let Some(mv) = chosen else {
            tracing::info!("[AI] {} has no move to play", self.state.to_move());
            self.state.resolve_no_moves();
            return Err(MoveRejection::NoLegalMoves);
        };

        // Same path as a human move: select, then submit
        self.state.select(mv.from);
        match self.state.submit_move(mv.from, mv.to) {
            MoveOutcome::Applied(_) => {
                tracing::info!("[AI] Played {}", mv);
                Ok(mv)
            }
            MoveOutcome::Rejected(reason) => Err(reason),
        }
    }

    /// Under the strict rule a sampling miss does not end the game
    fn fallback_move(&self) -> Option<Move> {
        if self.config.no_move_rule != NoMoveRule::Strict {
            return None;
        }
        let first = all_legal_moves(self.state.board(), self.state.to_move())
            .into_iter()
            .next();
        if let Some(mv) = first {
            tracing::debug!("[AI] Sampling missed, falling back to {}", mv);
        }
        first
    }

    /// Schedule the computer's reply after the configured delay
    ///
    /// Replaces any ticket already pending.
    pub fn schedule_ai_move(&mut self, now: Instant) -> Result<DeferredAiMove, MoveRejection> {
        if self.state.phase() != GamePhase::Active {
            return Err(MoveRejection::GameNotActive);
        }
        if !self.is_ai_turn() {
            return Err(MoveRejection::NotAiTurn);
        }
        let ticket = DeferredAiMove::new(self.epoch, now, self.config.ai_delay());
        self.pending = Some(ticket);
        Ok(ticket)
    }

    /// Run a deferred move if it is still current, pending and due
    ///
    /// A ticket that was cancelled or replaced by a later schedule is refused.
    pub fn run_deferred(
        &mut self,
        ticket: DeferredAiMove,
        now: Instant,
    ) -> Result<Move, MoveRejection> {
        if !ticket.belongs_to(self.epoch) {
            tracing::info!(
                "[AI] Discarding deferred move from epoch {} (current {})",
                ticket.epoch,
                self.epoch
            );
            return Err(MoveRejection::StaleEpoch {
                ticket: ticket.epoch,
                current: self.epoch,
            });
        }
        if self.pending != Some(ticket) {
            tracing::debug!("[AI] Deferred move is no longer pending");
            return Err(MoveRejection::Cancelled);
        }
        if !ticket.is_due(now) {
            return Err(MoveRejection::NotDue);
        }
        self.pending = None;
        if !self.is_ai_turn() {
            return Err(MoveRejection::NotAiTurn);
        }
        self.request_ai_move()
    }

    /// Run the pending ticket if it is due
    ///
    /// Returns `None` while nothing is pending or the ticket is not due.
    pub fn poll(&mut self, now: Instant) -> Option<Result<Move, MoveRejection>> {
        let ticket = self.pending?;
        if !ticket.is_due(now) {
            return None;
        }
        Some(self.run_deferred(ticket, now))
    }

    pub fn cancel_deferred(&mut self) -> Option<DeferredAiMove> {
        self.pending.take()
    }
}
