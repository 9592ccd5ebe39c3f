use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ParseBoardError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// Row step a man of this color moves along.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
    /// The row on which a man of this color is crowned.
    pub fn promotion_row(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Man,
    King,
}

/// A piece on the board. Serialized as its storage letter:
/// `b`/`B` for a black man/king, `w`/`W` for a white man/king.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "char", try_from = "char")]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn man(color: Color) -> Self {
        Self {
            color,
            kind: PieceKind::Man,
        }
    }
    pub const fn king(color: Color) -> Self {
        Self {
            color,
            kind: PieceKind::King,
        }
    }
    pub fn is_king(self) -> bool {
        self.kind == PieceKind::King
    }
    pub fn letter(self) -> char {
        match (self.color, self.kind) {
            (Color::Black, PieceKind::Man) => 'b',
            (Color::Black, PieceKind::King) => 'B',
            (Color::White, PieceKind::Man) => 'w',
            (Color::White, PieceKind::King) => 'W',
        }
    }
}

impl From<Piece> for char {
    fn from(pc: Piece) -> char {
        pc.letter()
    }
}

impl TryFrom<char> for Piece {
    type Error = ParseBoardError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            'b' => Ok(Piece::man(Color::Black)),
            'B' => Ok(Piece::king(Color::Black)),
            'w' => Ok(Piece::man(Color::White)),
            'W' => Ok(Piece::king(Color::White)),
            _ => Err(ParseBoardError::InvalidPiece(ch)),
        }
    }
}

/// A (row, col) coordinate. Off-board values are representable so that
/// out-of-range requests can be reported rather than rejected at the type level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }
    pub fn in_bounds(self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.col)
    }
    /// Playable squares are the ones with an odd coordinate sum.
    pub fn is_dark(self) -> bool {
        (i16::from(self.row) + i16::from(self.col)).rem_euclid(2) == 1
    }
    pub fn offset(self, dr: i8, dc: i8) -> Square {
        Square::new(self.row.saturating_add(dr), self.col.saturating_add(dc))
    }
    /// Board index 0..64, row-major. Only meaningful when `in_bounds`.
    pub fn idx(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A single hop from one square to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Number of diagonal steps the hop covers. A span above one does not
    /// make it a capture: a flying king also slides quietly over empty squares.
    pub fn span(&self) -> i16 {
        let dr = (i16::from(self.to.row) - i16::from(self.from.row)).abs();
        let dc = (i16::from(self.to.col) - i16::from(self.from.col)).abs();
        dr.max(dc)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// The four diagonal directions, in generation order.
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
