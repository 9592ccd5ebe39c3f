use crate::{board::Board, types::*};

pub const MAN_VALUE: i32 = 1;
pub const KING_VALUE: i32 = 3;

/// Material balance from `c`'s point of view: kings count 3, men 1,
/// own pieces positive and the opponent's negative.
pub fn evaluate(board: &Board, c: Color) -> i32 {
    board
        .pieces()
        .map(|(_, pc)| {
            let v = match pc.kind {
                PieceKind::Man => MAN_VALUE,
                PieceKind::King => KING_VALUE,
            };
            if pc.color == c { v } else { -v }
        })
        .sum()
}
