use crate::{board::Board, types::*};

fn is_opponent(board: &Board, s: Square, c: Color) -> bool {
    board.piece_at(s).is_some_and(|pc| pc.color != c)
}

/// Forward diagonal steps onto empty squares.
pub fn man_quiet_moves(board: &Board, from: Square, c: Color) -> Vec<Square> {
    let mut out = Vec::with_capacity(2);
    for dc in [-1, 1] {
        let to = from.offset(c.forward(), dc);
        if board.is_empty(to) {
            out.push(to);
        }
    }
    out
}

/// Two-step jumps in any diagonal direction over an opponent piece.
pub fn man_capture_moves(board: &Board, from: Square, c: Color) -> Vec<Square> {
    let mut out = Vec::new();
    for (dr, dc) in DIAGONALS {
        let mid = from.offset(dr, dc);
        let to = from.offset(2 * dr, 2 * dc);
        if board.is_empty(to) && is_opponent(board, mid, c) {
            out.push(to);
        }
    }
    out
}

/// Every empty square along each diagonal up to the first obstruction.
pub fn king_quiet_moves(board: &Board, from: Square, _c: Color) -> Vec<Square> {
    let mut out = Vec::new();
    for (dr, dc) in DIAGONALS {
        let mut to = from.offset(dr, dc);
        while board.is_empty(to) {
            out.push(to);
            to = to.offset(dr, dc);
        }
    }
    out
}

/// Flying-king captures: slide to the first piece on a ray; if it belongs to
/// the opponent, every empty square behind it (up to the next obstruction)
/// is a landing square.
pub fn king_capture_moves(board: &Board, from: Square, c: Color) -> Vec<Square> {
    let mut out = Vec::new();
    for (dr, dc) in DIAGONALS {
        let mut s = from.offset(dr, dc);
        while board.is_empty(s) {
            s = s.offset(dr, dc);
        }
        if !is_opponent(board, s, c) {
            continue;
        }
        let mut to = s.offset(dr, dc);
        while board.is_empty(to) {
            out.push(to);
            to = to.offset(dr, dc);
        }
    }
    out
}

/// Capture landings for the piece on `from`. Empty when the square is
/// vacant or holds a piece of the other side.
pub fn capture_moves(board: &Board, from: Square, c: Color) -> Vec<Square> {
    match board.piece_at(from) {
        Some(pc) if pc.color == c => match pc.kind {
            PieceKind::Man => man_capture_moves(board, from, c),
            PieceKind::King => king_capture_moves(board, from, c),
        },
        _ => Vec::new(),
    }
}

/// Non-capturing moves for the piece on `from`.
pub fn quiet_moves(board: &Board, from: Square, c: Color) -> Vec<Square> {
    match board.piece_at(from) {
        Some(pc) if pc.color == c => match pc.kind {
            PieceKind::Man => man_quiet_moves(board, from, c),
            PieceKind::King => king_quiet_moves(board, from, c),
        },
        _ => Vec::new(),
    }
}

/// Captures if the piece has any, otherwise its quiet moves.
pub fn candidate_moves(board: &Board, from: Square, c: Color) -> Vec<Square> {
    let caps = capture_moves(board, from, c);
    if caps.is_empty() {
        quiet_moves(board, from, c)
    } else {
        caps
    }
}

/// Whether any piece of `c` can capture. Drives the forced-capture rule.
pub fn any_capture(board: &Board, c: Color) -> bool {
    board
        .pieces_of(c)
        .any(|(s, _)| !capture_moves(board, s, c).is_empty())
}

/// Destinations the piece on `from` may actually be moved to, for
/// highlighting a selected piece. Honors the forced-capture rule across the
/// whole side: while any capture exists only this piece's captures are
/// listed, so a piece that cannot capture gets none.
pub fn legal_moves(board: &Board, from: Square, c: Color) -> Vec<Square> {
    if any_capture(board, c) {
        capture_moves(board, from, c)
    } else {
        quiet_moves(board, from, c)
    }
}

/// Whether `mv` is a capture for `c` on `board`, i.e. its landing is one of
/// the moving piece's capture landings.
pub fn is_capture(board: &Board, mv: Move, c: Color) -> bool {
    capture_moves(board, mv.from, c).contains(&mv.to)
}

/// All moves `c` may play, returning a freshly allocated vector.
/// Internally delegates to `available_moves_into`.
pub fn available_moves(board: &Board, c: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    available_moves_into(board, c, &mut out);
    out
}

/// All moves `c` may play, written into the provided buffer.
///
/// When any capture exists only captures are listed, across every piece;
/// pieces that cannot capture contribute nothing. Order is row-major over
/// the pieces, then generation order for each piece.
pub fn available_moves_into(board: &Board, c: Color, out: &mut Vec<Move>) {
    out.clear();
    let forced = any_capture(board, c);
    for (from, _) in board.pieces_of(c) {
        let dests = if forced {
            capture_moves(board, from, c)
        } else {
            quiet_moves(board, from, c)
        };
        out.extend(dests.into_iter().map(|to| Move::new(from, to)));
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
