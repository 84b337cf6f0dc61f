//! Heuristic move selection
//!
//! Picks a move for the side to move, in priority order:
//!
//! 1. **In check**: a uniformly random move among all legal moves. A single
//!    escape is returned without touching the random source.
//! 2. **Capture**: scanning own pieces row-major, the first legal move that
//!    lands on an opponent piece. [`AiDifficulty::Hard`] instead takes the
//!    most valuable capture, keeping the first one found on ties.
//! 3. **Random**: up to `attempts` random picks of an own piece; the first
//!    piece with a legal move plays a random one of them.
//!
//! `None` means the selector found nothing to play. Step 3 is a sampling
//! heuristic, so `None` does not prove the side is out of legal moves; under
//! [`NoMoveRule::Strict`] the session then plays the first legal move instead
//! of conceding.
//!
//! [`NoMoveRule::Strict`]: crate::core::config::NoMoveRule::Strict

use rand::seq::IndexedRandom;
use rand::Rng;

use super::resource::AiDifficulty;
use crate::game::rules::{all_legal_moves, legal_moves, Board};
use crate::game::state::GameState;
use crate::game::types::{Move, Square};

/// Choose a move for the side to move in `state`
pub fn select_move<R: Rng + ?Sized>(
    state: &GameState,
    difficulty: AiDifficulty,
    attempts: u32,
    rng: &mut R,
) -> Option<Move> {
    let board = state.board();
    let color = state.to_move();

    if state.is_in_check(color) {
        let escapes = all_legal_moves(board, color);
        tracing::debug!("[AI] {} in check, {} escapes", color, escapes.len());
        return match escapes.as_slice() {
            [only] => Some(*only),
            _ => escapes.choose(rng).copied(),
        };
    }

    let pieces = board.squares_of(color);

    if let Some(capture) = find_capture(board, &pieces, difficulty) {
        tracing::debug!("[AI] Capture {}", capture);
        return Some(capture);
    }

    random_move(board, &pieces, attempts, rng)
}

fn find_capture(board: &Board, pieces: &[Square], difficulty: AiDifficulty) -> Option<Move> {
    let mut captures = pieces.iter().flat_map(|&from| {
        legal_moves(board, from)
            .into_iter()
            .filter(|&to| !board.is_empty(to))
            .map(move |to| Move::new(from, to))
    });

    if !difficulty.prefers_valuable_captures() {
        return captures.next();
    }

    let mut best: Option<(i32, Move)> = None;
    for capture in captures {
        let value = board.get(capture.to).map_or(0, |piece| piece.kind.value());
        if best.is_none_or(|(best_value, _)| value > best_value) {
            best = Some((value, capture));
        }
    }
    best.map(|(_, capture)| capture)
}

fn random_move<R: Rng + ?Sized>(
    board: &Board,
    pieces: &[Square],
    attempts: u32,
    rng: &mut R,
) -> Option<Move> {
    for _ in 0..attempts {
        let from = *pieces.choose(rng)?;
        let moves = legal_moves(board, from);
        if let Some(&to) = moves.choose(rng) {
            return Some(Move::new(from, to));
        }
    }
    tracing::debug!("[AI] No move found after {} attempts", attempts);
    None
}
