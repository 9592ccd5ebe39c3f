pub mod board;
pub mod error;
pub mod eval;
pub mod movegen;
pub mod rules;
pub mod status;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use eval::evaluate;
pub use movegen::*;
pub use rules::*;
pub use status::*;
pub use types::*;

// =============================================================================
// Engine trait — implemented by the random, greedy and classical players
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The chosen move (None if there was nothing to choose from)
    pub best_move: Option<Move>,
    /// Material score of the chosen line from the mover's perspective
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
}

/// Trait that all draughts engines must implement.
///
/// Engines choose among an explicit list of candidate moves rather than
/// generating their own, so the same engine can pick a whole-board move or
/// the next hop of a capture chain.
pub trait Engine: Send {
    /// Picks one of `moves` for `color` to play on `board`.
    ///
    /// # Arguments
    /// * `board` - The position to move in
    /// * `color` - The side to move
    /// * `moves` - Candidate moves, in enumeration order
    /// * `depth` - Search depth in plies, counting the candidate move itself
    fn search(&mut self, board: &Board, color: Color, moves: &[Move], depth: u8) -> SearchResult;

    /// Returns the engine's name
    fn name(&self) -> &str;
}
