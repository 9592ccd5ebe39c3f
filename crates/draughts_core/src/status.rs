use serde::{Deserialize, Serialize};

use crate::{
    board::Board,
    movegen::{any_capture, candidate_moves},
    types::*,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Ongoing,
    WhiteWin,
    BlackWin,
    Draw,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::WhiteWin => Some(Color::White),
            GameStatus::BlackWin => Some(Color::Black),
            _ => None,
        }
    }
}

/// Classifies a position.
///
/// A side loses when it has no pieces or none of them can move; Black's
/// loss is checked first. The position is drawn only when every piece left
/// is a king and neither side has a capture. Repetition and move-count
/// draws are not detected.
pub fn game_status(board: &Board) -> GameStatus {
    let mut has_pieces = [false; 2];
    let mut can_move = [false; 2];
    let mut only_kings = true;

    for (s, pc) in board.pieces() {
        let i = pc.color.idx();
        has_pieces[i] = true;
        only_kings &= pc.is_king();
        if !can_move[i] && !candidate_moves(board, s, pc.color).is_empty() {
            can_move[i] = true;
        }
    }

    let (white, black) = (Color::White.idx(), Color::Black.idx());
    if !has_pieces[black] || !can_move[black] {
        return GameStatus::WhiteWin;
    }
    if !has_pieces[white] || !can_move[white] {
        return GameStatus::BlackWin;
    }
    if only_kings && !any_capture(board, Color::White) && !any_capture(board, Color::Black) {
        return GameStatus::Draw;
    }
    GameStatus::Ongoing
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod status_tests;
