use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseBoardError;
use crate::types::*;

/// Row-major 8x8 grid as stored by the session layer.
pub type Grid = [[Option<Piece>; 8]; 8];

/// An 8x8 board snapshot. Row 0 is Black's back rank, row 7 White's.
///
/// `Board` is a plain value: every rule operation takes `&Board` and hands
/// back a new one, so a caller's snapshot is never changed behind its back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Grid", into = "Grid")]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board { cells: [None; 64] }
    }

    /// Starting position: black men on the dark squares of rows 0-2,
    /// white men on the dark squares of rows 5-7.
    pub fn initial() -> Self {
        let mut b = Board::empty();
        for row in 0..8i8 {
            let color = match row {
                0..=2 => Color::Black,
                5..=7 => Color::White,
                _ => continue,
            };
            for col in 0..8i8 {
                let s = Square::new(row, col);
                if s.is_dark() {
                    b.set_piece(s, Some(Piece::man(color)));
                }
            }
        }
        b
    }

    /// Parses a diagram of 8 rows, row 0 first. Each row holds 8 cells:
    /// `.` for an empty square or a piece letter (`b`, `B`, `w`, `W`).
    /// Whitespace inside a row is ignored.
    pub fn from_diagram(text: &str) -> Result<Self, ParseBoardError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if rows.len() != 8 {
            return Err(ParseBoardError::RowCount(rows.len()));
        }

        let mut b = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != 8 {
                return Err(ParseBoardError::RowLength {
                    row,
                    cells: cells.len(),
                });
            }
            for (col, ch) in cells.into_iter().enumerate() {
                let pc = match ch {
                    '.' => None,
                    other => Some(Piece::try_from(other)?),
                };
                b.set_piece(Square::new(row as i8, col as i8), pc);
            }
        }
        Ok(b)
    }

    /// Piece on `s`, or `None` for empty and off-board squares.
    pub fn piece_at(&self, s: Square) -> Option<Piece> {
        if s.in_bounds() {
            self.cells[s.idx()]
        } else {
            None
        }
    }

    /// Off-board squares are never empty: they block rays like a piece would.
    pub fn is_empty(&self, s: Square) -> bool {
        s.in_bounds() && self.cells[s.idx()].is_none()
    }

    /// Writes `pc` on `s`. Off-board writes are ignored.
    pub fn set_piece(&mut self, s: Square, pc: Option<Piece>) {
        if s.in_bounds() {
            self.cells[s.idx()] = pc;
        }
    }

    /// Returns a copy with `pc` placed on `s`.
    pub fn with_piece(mut self, s: Square, pc: Piece) -> Self {
        self.set_piece(s, Some(pc));
        self
    }

    /// Occupied squares with their pieces, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, pc)| {
            pc.map(|p| (Square::new((i / 8) as i8, (i % 8) as i8), p))
        })
    }

    pub fn pieces_of(&self, c: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == c)
    }

    pub fn count(&self, c: Color, kind: PieceKind) -> usize {
        self.pieces_of(c).filter(|(_, p)| p.kind == kind).count()
    }

    pub fn to_grid(&self) -> Grid {
        let mut grid: Grid = [[None; 8]; 8];
        for (i, pc) in self.cells.iter().enumerate() {
            grid[i / 8][i % 8] = *pc;
        }
        grid
    }
}

impl From<Grid> for Board {
    fn from(grid: Grid) -> Self {
        let mut b = Board::empty();
        for (row, cells) in grid.iter().enumerate() {
            for (col, pc) in cells.iter().enumerate() {
                b.cells[row * 8 + col] = *pc;
            }
        }
        b
    }
}

impl From<Board> for Grid {
    fn from(b: Board) -> Self {
        b.to_grid()
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_diagram(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_grid() {
            let line: String = row
                .iter()
                .map(|pc| pc.map_or('.', Piece::letter))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
