//! Game state orchestration
//!
//! [`GameState`] is the one mutable object of a game: it owns the board, the
//! side to move, check flags, the selection cache, captured pieces and the
//! game-over status. Everything else in the engine is a value type.
//!
//! # Phases
//!
//! ```text
//! Setup ──start──▶ Active ──checkmate / stalemate──▶ Terminal
//!   ▲                 │                                  │
//!   └──── restart / new game (whole state replaced) ◀────┘
//! ```
//!
//! `Terminal` is absorbing: no further move is accepted until the state is
//! replaced.
//!
//! # Move Application
//!
//! 1. The move must start from the selected square and land on a cached legal
//!    destination ([`GameState::select`] fills the cache).
//! 2. The board is updated and any capture is credited to the mover.
//! 3. Check flags are recomputed for both colors.
//! 4. If the opponent is in check and has no legal move, the mover wins.
//! 5. Otherwise the turn passes to the opponent.

use crate::core::config::NoMoveRule;
use crate::game::error::MoveRejection;
use crate::game::resources::{CapturedPieces, GameOverState, MoveTarget, Selection};
use crate::game::rules::{
    all_legal_moves, check_status, is_checkmate, legal_moves, Board, CheckStatus,
};
use crate::game::types::{Color, Move, Piece, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Before a game mode has been started
    #[default]
    Setup,
    /// Moves alternate
    Active,
    /// Checkmate or stalemate declared
    Terminal,
}

/// Status after an applied move, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub mv: Move,
    pub captured: Option<Piece>,
    /// Side to move after this one; unchanged when the game ended
    pub next_mover: Color,
    pub check: CheckStatus,
    pub terminal: bool,
    pub winner: Option<Color>,
    pub outcome: GameOverState,
}

/// Result of a move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied(MoveReport),
    /// Nothing changed
    Rejected(MoveRejection),
}

impl MoveOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied(_))
    }

    pub fn report(&self) -> Option<&MoveReport> {
        match self {
            MoveOutcome::Applied(report) => Some(report),
            MoveOutcome::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<MoveRejection> {
        match self {
            MoveOutcome::Applied(_) => None,
            MoveOutcome::Rejected(reason) => Some(*reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    phase: GamePhase,
    to_move: Color,
    check: CheckStatus,
    outcome: GameOverState,
    selection: Selection,
    captured: CapturedPieces,
    /// Increments after Black moves
    move_number: u32,
    no_move_rule: NoMoveRule,
}

impl Default for GameState {
    fn default() -> Self {
        Self::setup(NoMoveRule::default())
    }
}

impl GameState {
    /// Pre-game state: standard layout, no moves accepted
    pub fn setup(no_move_rule: NoMoveRule) -> Self {
        GameState {
            board: Board::initial(),
            phase: GamePhase::Setup,
            to_move: Color::White,
            check: CheckStatus::default(),
            outcome: GameOverState::Playing,
            selection: Selection::default(),
            captured: CapturedPieces::default(),
            move_number: 1,
            no_move_rule,
        }
    }

    /// Fresh active game from the standard layout, White to move
    pub fn new_game(no_move_rule: NoMoveRule) -> Self {
        GameState {
            phase: GamePhase::Active,
            ..Self::setup(no_move_rule)
        }
    }

    /// Game from an arbitrary position
    ///
    /// Check flags are computed from the board and the side to move is judged
    /// the same way as after a move, so a position with no legal move for it
    /// may start out `Terminal`.
    pub fn from_position(board: Board, to_move: Color, no_move_rule: NoMoveRule) -> Self {
        let mut state = GameState {
            board,
            to_move,
            check: check_status(&board),
            ..Self::new_game(no_move_rule)
        };
        state.settle_if_stuck(to_move);
        state
    }

    /// `Setup -> Active`: replaces the whole state with a fresh game
    pub fn start(&mut self) {
        *self = Self::new_game(self.no_move_rule);
        tracing::info!("[GAME] New game started, White to move");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn check(&self) -> CheckStatus {
        self.check
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        self.check.get(color)
    }

    pub fn outcome(&self) -> GameOverState {
        self.outcome
    }

    pub fn winner(&self) -> Option<Color> {
        self.outcome.winner()
    }

    pub fn is_terminal(&self) -> bool {
        self.phase == GamePhase::Terminal
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    pub fn no_move_rule(&self) -> NoMoveRule {
        self.no_move_rule
    }

    /// Every legal move for the side to move
    pub fn legal_moves(&self) -> Vec<Move> {
        all_legal_moves(&self.board, self.to_move)
    }

    /// Select a square and cache its legal destinations
    ///
    /// Only a piece of the side to move in an active game can be selected.
    /// Anything else returns an empty list and leaves the current selection
    /// as it was.
    pub fn select(&mut self, square: Square) -> Vec<MoveTarget> {
        if self.phase != GamePhase::Active || self.board.color_at(square) != Some(self.to_move) {
            return Vec::new();
        }

        let targets: Vec<MoveTarget> = legal_moves(&self.board, square)
            .into_iter()
            .map(|to| MoveTarget {
                to,
                is_capture: !self.board.is_empty(to),
            })
            .collect();

        self.selection.selected_position = Some(square);
        self.selection.possible_moves = targets.clone();
        targets
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Apply a move from the selected square
    ///
    /// Rejections leave the state untouched.
    pub fn submit_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        if self.phase != GamePhase::Active {
            return self.reject(MoveRejection::GameNotActive);
        }
        if self.selection.selected_position != Some(from) {
            return self.reject(MoveRejection::NoSelection);
        }
        if !self.selection.allows(from, to) {
            return self.reject(MoveRejection::NotInLegalSet);
        }
        self.apply_move(Move::new(from, to))
    }

    /// Apply a move without consulting the selection cache
    ///
    /// Still refuses to take a king.
    pub(crate) fn apply_move(&mut self, mv: Move) -> MoveOutcome {
        if self.phase != GamePhase::Active {
            return self.reject(MoveRejection::GameNotActive);
        }
        if self.board.get(mv.to).is_some_and(|target| target.is_king()) {
            tracing::warn!("[GAME] Refused king capture {}", mv);
            return MoveOutcome::Rejected(MoveRejection::KingCapture);
        }

        let mover = self.to_move;
        let captured = self.board.apply(mv);
        if let Some(piece) = captured {
            self.captured.add_capture(piece);
            tracing::debug!("[GAME] {} {} captures {:?}", mover, mv, piece.kind);
        } else {
            tracing::debug!("[GAME] {} {}", mover, mv);
        }
        self.selection.clear();

        self.check = check_status(&self.board);
        let opponent = mover.opposite();

        if !self.settle_if_stuck(opponent) {
            if self.check.get(opponent) {
                tracing::info!("[GAME] {} is in check", opponent);
            }
            if mover == Color::Black {
                self.move_number += 1;
            }
            self.to_move = opponent;
        }

        MoveOutcome::Applied(MoveReport {
            mv,
            captured,
            next_mover: self.to_move,
            check: self.check,
            terminal: self.is_terminal(),
            winner: self.winner(),
            outcome: self.outcome,
        })
    }

    /// Settle a position where the side to move has no move to play
    ///
    /// Under [`NoMoveRule::Legacy`] the stuck side always loses; under
    /// [`NoMoveRule::Strict`] it loses only when in check and the game is
    /// otherwise drawn.
    pub(crate) fn resolve_no_moves(&mut self) {
        if self.phase != GamePhase::Active {
            return;
        }
        let stuck = self.to_move;
        let outcome = match self.no_move_rule {
            NoMoveRule::Legacy => GameOverState::won_by(stuck.opposite()),
            NoMoveRule::Strict if self.check.get(stuck) => GameOverState::won_by(stuck.opposite()),
            NoMoveRule::Strict => GameOverState::Stalemate,
        };
        self.finish(outcome);
    }

    /// End the game if `side` has no legal move
    ///
    /// In check it is checkmate; otherwise stalemate under
    /// [`NoMoveRule::Strict`] and undeclared under [`NoMoveRule::Legacy`].
    /// Returns whether the game ended.
    fn settle_if_stuck(&mut self, side: Color) -> bool {
        if !is_checkmate(&self.board, side) {
            return false;
        }
        if self.check.get(side) {
            self.finish(GameOverState::won_by(side.opposite()));
        } else if self.no_move_rule == NoMoveRule::Strict {
            self.finish(GameOverState::Stalemate);
        } else {
            return false;
        }
        true
    }

    fn finish(&mut self, outcome: GameOverState) {
        self.phase = GamePhase::Terminal;
        self.outcome = outcome;
        self.selection.clear();
        tracing::info!("[GAME] {}", outcome.message());
    }

    fn reject(&self, reason: MoveRejection) -> MoveOutcome {
        tracing::debug!("[GAME] Move rejected: {}", reason);
        MoveOutcome::Rejected(reason)
    }
}
