//! Test suite for chess move generation and legality
//!
//! Exercises the pure rules functions on hand-built boards.
//!
//! # Test Organization
//!
//! - `test_pawn_*` - Pawn movement (forward, double-move, capture)
//! - `test_knight_*` / `test_king_*` - Fixed-offset pieces
//! - `test_bishop_*` / `test_rook_*` / `test_queen_*` - Ray casting and blocking
//! - `test_legal_*` - Self-check filtering and pins
//! - `test_check_*` / `test_checkmate_*` - Detectors

use super::*;
use crate::game::types::{Color, Move, Piece, PieceKind, Square};

fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

/// Build a board from (kind, color, square) triples
///
/// ```rust,ignore
/// let board = create_test_board(&[
///     (PieceKind::Pawn, Color::White, "e2"),
///     (PieceKind::Rook, Color::Black, "e7"),
/// ]);
/// ```
fn create_test_board(pieces: &[(PieceKind, Color, &str)]) -> Board {
    let mut board = Board::empty();
    for &(kind, color, name) in pieces {
        board.set(sq(name), Some(Piece::new(kind, color)));
    }
    board
}

fn names(squares: &[Square]) -> Vec<String> {
    squares.iter().map(|s| s.to_algebraic()).collect()
}

/// Squares strictly between two squares on a line
fn squares_between(from: Square, to: Square) -> Vec<Square> {
    let d_row = (to.row() as i8 - from.row() as i8).signum();
    let d_col = (to.col() as i8 - from.col() as i8).signum();
    let mut between = Vec::new();
    let mut current = from;
    while let Some(next) = current.offset(d_row, d_col) {
        if next == to {
            break;
        }
        between.push(next);
        current = next;
    }
    between
}

/// Deterministic playout used by property-style tests
fn playout_positions(plies: usize) -> Vec<(Board, Color)> {
    let mut board = Board::initial();
    let mut mover = Color::White;
    let mut positions = vec![(board, mover)];
    for ply in 0..plies {
        let moves = all_legal_moves(&board, mover);
        if moves.is_empty() {
            break;
        }
        let mv = moves[(ply * 7 + 3) % moves.len()];
        board.apply(mv);
        mover = mover.opposite();
        positions.push((board, mover));
    }
    positions
}

// ============================================================================
// Pawn Movement Tests
// ============================================================================

#[test]
fn test_pawn_single_and_double_from_start() {
    //! Pawns on their starting rank may advance one or two squares
    let board = create_test_board(&[
        (PieceKind::Pawn, Color::White, "e2"),
        (PieceKind::Pawn, Color::Black, "d7"),
    ]);

    assert_eq!(names(&get_possible_moves(&board, sq("e2"))), ["e3", "e4"]);
    assert_eq!(names(&get_possible_moves(&board, sq("d7"))), ["d6", "d5"]);
}

#[test]
fn test_pawn_no_double_after_leaving_start() {
    let board = create_test_board(&[(PieceKind::Pawn, Color::White, "e3")]);
    assert_eq!(names(&get_possible_moves(&board, sq("e3"))), ["e4"]);
}

#[test]
fn test_pawn_blocked() {
    //! A blocked pawn cannot advance, and a blocked first step also
    //! prevents the double step
    let board = create_test_board(&[
        (PieceKind::Pawn, Color::White, "e2"),
        (PieceKind::Knight, Color::Black, "e3"),
        (PieceKind::Pawn, Color::White, "b2"),
        (PieceKind::Knight, Color::Black, "b4"),
    ]);

    assert!(get_possible_moves(&board, sq("e2")).is_empty());
    assert_eq!(names(&get_possible_moves(&board, sq("b2"))), ["b3"]);
}

#[test]
fn test_pawn_captures_diagonally_only_enemies() {
    let board = create_test_board(&[
        (PieceKind::Pawn, Color::White, "e4"),
        (PieceKind::Pawn, Color::Black, "d5"),
        (PieceKind::Pawn, Color::White, "f5"),
    ]);

    assert_eq!(names(&get_possible_moves(&board, sq("e4"))), ["e5", "d5"]);
}

#[test]
fn test_pawn_on_last_rank_has_no_moves() {
    //! No promotion: a pawn on the far rank simply has nowhere to go
    let board = create_test_board(&[(PieceKind::Pawn, Color::White, "a8")]);
    assert!(get_possible_moves(&board, sq("a8")).is_empty());
}

// ============================================================================
// Knight and King Tests
// ============================================================================

#[test]
fn test_knight_moves_from_center_and_corner() {
    let board = create_test_board(&[
        (PieceKind::Knight, Color::White, "d4"),
        (PieceKind::Knight, Color::White, "a1"),
    ]);

    assert_eq!(get_possible_moves(&board, sq("d4")).len(), 8);
    assert_eq!(names(&get_possible_moves(&board, sq("a1"))), ["b3", "c2"]);
}

#[test]
fn test_knight_jumps_and_respects_own_pieces() {
    let board = Board::initial();
    assert_eq!(names(&get_possible_moves(&board, sq("b1"))), ["c3", "a3"]);
}

#[test]
fn test_king_single_square() {
    let board = create_test_board(&[
        (PieceKind::King, Color::White, "e1"),
        (PieceKind::Pawn, Color::White, "e2"),
        (PieceKind::Pawn, Color::Black, "d2"),
    ]);

    let moves = names(&get_possible_moves(&board, sq("e1")));
    assert_eq!(moves, ["f1", "d1", "f2", "d2"]);
}

// ============================================================================
// Sliding Piece Tests
// ============================================================================

#[test]
fn test_rook_ray_stops_at_blockers() {
    //! Empty squares continue the ray, an enemy is included and stops it,
    //! a friendly piece stops it without being included
    let board = create_test_board(&[
        (PieceKind::Rook, Color::White, "d4"),
        (PieceKind::Pawn, Color::Black, "d6"),
        (PieceKind::Pawn, Color::White, "f4"),
    ]);

    let moves = get_possible_moves(&board, sq("d4"));
    assert!(moves.contains(&sq("d5")));
    assert!(moves.contains(&sq("d6")));
    assert!(!moves.contains(&sq("d7")));
    assert!(moves.contains(&sq("e4")));
    assert!(!moves.contains(&sq("f4")));
    assert!(moves.contains(&sq("a4")));
    assert!(moves.contains(&sq("d1")));
    assert_eq!(moves.len(), 2 + 1 + 3 + 3);
}

#[test]
fn test_rook_generation_order() {
    //! Direction-list order first, then distance
    let board = create_test_board(&[
        (PieceKind::Rook, Color::White, "a1"),
        (PieceKind::Pawn, Color::White, "a4"),
        (PieceKind::Pawn, Color::White, "c1"),
    ]);

    assert_eq!(names(&get_possible_moves(&board, sq("a1"))), ["b1", "a2", "a3"]);
}

#[test]
fn test_bishop_diagonals() {
    let board = create_test_board(&[
        (PieceKind::Bishop, Color::Black, "c1"),
        (PieceKind::Pawn, Color::White, "e3"),
    ]);

    let moves = names(&get_possible_moves(&board, sq("c1")));
    assert_eq!(moves, ["d2", "e3", "b2", "a3"]);
}

#[test]
fn test_queen_combines_rook_and_bishop() {
    let board = create_test_board(&[(PieceKind::Queen, Color::White, "d4")]);
    assert_eq!(get_possible_moves(&board, sq("d4")).len(), 27);
}

#[test]
fn test_sliding_paths_never_cross_pieces() {
    //! For every sliding move in a set of positions, all squares strictly
    //! between origin and destination are empty
    for (board, _) in playout_positions(40) {
        for (from, piece) in board.pieces() {
            if !matches!(
                piece.kind,
                PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen
            ) {
                continue;
            }
            for to in get_possible_moves(&board, from) {
                for between in squares_between(from, to) {
                    assert!(
                        board.is_empty(between),
                        "{from}->{to} crosses occupied {between}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_empty_square_has_no_moves() {
    let board = Board::initial();
    assert!(get_possible_moves(&board, sq("e4")).is_empty());
    assert!(legal_moves(&board, sq("e4")).is_empty());
}

// ============================================================================
// Legality Tests
// ============================================================================

#[test]
fn test_legal_initial_position_has_twenty_moves() {
    let board = Board::initial();
    assert_eq!(all_legal_moves(&board, Color::White).len(), 20);
    assert_eq!(all_legal_moves(&board, Color::Black).len(), 20);
}

#[test]
fn test_legal_pinned_rook_keeps_pin_line() {
    //! A pinned rook may slide along the pin line (including capturing the
    //! pinner) but may not step off it
    let board = create_test_board(&[
        (PieceKind::King, Color::White, "e1"),
        (PieceKind::Rook, Color::White, "e2"),
        (PieceKind::Rook, Color::Black, "e8"),
        (PieceKind::King, Color::Black, "a8"),
    ]);

    let raw = get_possible_moves(&board, sq("e2"));
    assert!(raw.contains(&sq("a2")));

    let legal = names(&legal_moves(&board, sq("e2")));
    assert_eq!(legal, ["e3", "e4", "e5", "e6", "e7", "e8"]);
}

#[test]
fn test_legal_pinned_knight_has_no_moves() {
    let board = create_test_board(&[
        (PieceKind::King, Color::White, "e1"),
        (PieceKind::Knight, Color::White, "d2"),
        (PieceKind::Bishop, Color::Black, "b4"),
        (PieceKind::King, Color::Black, "h8"),
    ]);

    assert!(!get_possible_moves(&board, sq("d2")).is_empty());
    assert!(legal_moves(&board, sq("d2")).is_empty());
}

#[test]
fn test_legal_king_cannot_step_along_checking_ray() {
    //! Once the king leaves its square the ray extends past it; the
    //! simulation must catch that
    let board = create_test_board(&[
        (PieceKind::King, Color::White, "e1"),
        (PieceKind::Rook, Color::Black, "a1"),
        (PieceKind::King, Color::Black, "h8"),
    ]);

    let legal = legal_moves(&board, sq("e1"));
    assert!(!legal.contains(&sq("f1")));
    assert!(!legal.contains(&sq("d1")));
    assert!(legal.contains(&sq("e2")));
}

#[test]
fn test_legal_never_targets_a_king() {
    //! Kings are not capture targets even when the raw generator reaches them
    let board = create_test_board(&[
        (PieceKind::Rook, Color::White, "e1"),
        (PieceKind::King, Color::Black, "e8"),
        (PieceKind::King, Color::White, "a1"),
    ]);

    assert!(get_possible_moves(&board, sq("e1")).contains(&sq("e8")));
    assert!(!legal_moves(&board, sq("e1")).contains(&sq("e8")));
    assert!(!is_legal(&board, Move::new(sq("e1"), sq("e8"))));
}

#[test]
fn test_legal_moves_never_leave_own_king_attacked() {
    for (board, mover) in playout_positions(60) {
        for mv in all_legal_moves(&board, mover) {
            let mut after = board;
            after.apply(mv);
            assert!(
                !check_status(&after).get(mover),
                "{mv} leaves {mover} in check"
            );
        }
    }
}

#[test]
fn test_legal_filter_does_not_mutate_board() {
    let board = Board::initial();
    let before = board;
    let _ = all_legal_moves(&board, Color::White);
    assert_eq!(board, before);
}

// ============================================================================
// Check and Checkmate Tests
// ============================================================================

#[test]
fn test_check_status_initial() {
    assert_eq!(check_status(&Board::initial()), CheckStatus::default());
}

#[test]
fn test_check_detects_knight_check() {
    let board = create_test_board(&[
        (PieceKind::King, Color::White, "e1"),
        (PieceKind::Knight, Color::Black, "d3"),
        (PieceKind::King, Color::Black, "e8"),
    ]);

    let status = check_status(&board);
    assert!(status.white);
    assert!(!status.black);
    assert!(is_attacked(&board, sq("e1"), Color::Black));
    assert!(!is_attacked(&board, sq("e1"), Color::White));
}

#[test]
fn test_check_without_king_is_false() {
    let board = create_test_board(&[(PieceKind::Queen, Color::Black, "e2")]);
    assert_eq!(check_status(&board), CheckStatus::default());
}

#[test]
fn test_checkmate_fools_mate_for_black() {
    //! 1.e4 g5 2.d4 f6 3.Qh5# leaves Black attacked with no legal reply
    let mut board = Board::initial();
    for (from, to) in [("e2", "e4"), ("g7", "g5"), ("d2", "d4"), ("f7", "f6"), ("d1", "h5")] {
        let mv = Move::new(sq(from), sq(to));
        assert!(is_legal(&board, mv), "{mv} should be legal");
        board.apply(mv);
    }

    assert!(check_status(&board).black);
    assert!(is_checkmate(&board, Color::Black));
    assert!(!is_checkmate(&board, Color::White));
}

#[test]
fn test_checkmate_false_when_check_can_be_blocked() {
    let board = create_test_board(&[
        (PieceKind::King, Color::White, "e1"),
        (PieceKind::Rook, Color::Black, "e8"),
        (PieceKind::Bishop, Color::White, "c4"),
        (PieceKind::Pawn, Color::White, "d2"),
        (PieceKind::Pawn, Color::White, "f2"),
        (PieceKind::Queen, Color::Black, "d8"),
        (PieceKind::King, Color::Black, "a8"),
    ]);

    assert!(check_status(&board).white);
    assert!(!is_checkmate(&board, Color::White));
}

#[test]
fn test_no_legal_moves_without_check_is_stalemate_shape() {
    //! The no-legal-move test alone cannot tell stalemate from checkmate
    let board = create_test_board(&[
        (PieceKind::King, Color::Black, "a8"),
        (PieceKind::Queen, Color::White, "b6"),
        (PieceKind::King, Color::White, "h1"),
    ]);

    assert!(!check_status(&board).black);
    assert!(is_checkmate(&board, Color::Black));
}
