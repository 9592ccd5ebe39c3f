//! Error types for the rules core.

use crate::types::Square;

/// Why a requested move was refused. The caller's board is left untouched
/// and the request may be retried.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("move {from} -> {to} leaves the board")]
    OutOfBounds { from: Square, to: Square },

    #[error("no piece of the moving side on {0}")]
    NotYourPiece(Square),

    #[error("destination {0} is occupied")]
    DestinationOccupied(Square),

    /// Another capture is available and the chosen piece has none.
    #[error("a capture is available; the piece on {0} cannot capture")]
    ForcedCaptureRequired(Square),

    #[error("{from} -> {to} is not a legal move for this piece")]
    IllegalMove { from: Square, to: Square },
}

/// Errors reading a board from its text or serialized form.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("invalid piece letter {0:?}")]
    InvalidPiece(char),

    #[error("expected 8 rows, got {0}")]
    RowCount(usize),

    #[error("row {row}: expected 8 cells, got {cells}")]
    RowLength { row: usize, cells: usize },
}
