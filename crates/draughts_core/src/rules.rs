//! Move validation and execution.

use crate::{
    board::Board,
    error::MoveError,
    movegen::{any_capture, candidate_moves, capture_moves},
    types::*,
};

/// Validates a move request for `c` and returns the resulting board.
///
/// Checks run in a fixed order and the first failure is reported:
/// bounds, ownership, empty destination, forced capture, then membership
/// in the piece's candidate moves. `board` is never modified.
pub fn apply_move(board: &Board, from: Square, to: Square, c: Color) -> Result<Board, MoveError> {
    validate(board, from, to, c)
        .map(|()| execute(board, Move::new(from, to)))
        .inspect_err(|err| {
            tracing::debug!(%from, %to, color = ?c, %err, "move rejected");
        })
}

fn validate(board: &Board, from: Square, to: Square, c: Color) -> Result<(), MoveError> {
    if !from.in_bounds() || !to.in_bounds() {
        return Err(MoveError::OutOfBounds { from, to });
    }
    match board.piece_at(from) {
        Some(pc) if pc.color == c => {}
        _ => return Err(MoveError::NotYourPiece(from)),
    }
    if !board.is_empty(to) {
        return Err(MoveError::DestinationOccupied(to));
    }
    if any_capture(board, c) && capture_moves(board, from, c).is_empty() {
        return Err(MoveError::ForcedCaptureRequired(from));
    }
    if !candidate_moves(board, from, c).contains(&to) {
        return Err(MoveError::IllegalMove { from, to });
    }
    Ok(())
}

/// Plays a generated move on a copy of `board`.
///
/// The mover is relocated, a capture removes the first opponent piece on the
/// path (the midpoint for a man), and a man reaching its far row is crowned
/// at once. Callers are expected to pass moves produced by the generator;
/// use [`apply_move`] for untrusted input. A move with an off-board square
/// or a vacant origin returns the board unchanged.
pub fn execute(board: &Board, mv: Move) -> Board {
    let mut next = *board;
    if !mv.to.in_bounds() {
        return next;
    }
    let Some(moved) = board.piece_at(mv.from) else {
        return next;
    };

    next.set_piece(mv.from, None);
    next.set_piece(mv.to, Some(moved));

    // A quiet king slide finds no opponent on its path
    if mv.span() > 1 {
        let dr = (mv.to.row - mv.from.row).signum();
        let dc = (mv.to.col - mv.from.col).signum();
        let mut s = mv.from.offset(dr, dc);
        while s != mv.to && s.in_bounds() {
            if next.piece_at(s).is_some_and(|pc| pc.color != moved.color) {
                next.set_piece(s, None);
                break;
            }
            s = s.offset(dr, dc);
        }
    }

    if moved.kind == PieceKind::Man && mv.to.row == moved.color.promotion_row() {
        next.set_piece(mv.to, Some(Piece::king(moved.color)));
    }
    next
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
