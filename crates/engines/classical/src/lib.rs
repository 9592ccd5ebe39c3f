//! Classical Draughts Engine
//!
//! Minimax search with alpha-beta pruning over material evaluation.
//! This is the strongest of the built-in opponents.

mod search;

use draughts_core::{Board, Color, Engine, Move, SearchResult};

/// Classical draughts engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Minimax search, maximizing for the side it plays
/// - Alpha-beta pruning
/// - Material evaluation at the horizon and at positions with no moves
#[derive(Debug, Clone, Default)]
pub struct ClassicalEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl ClassicalEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

impl Engine for ClassicalEngine {
    fn search(&mut self, board: &Board, color: Color, moves: &[Move], depth: u8) -> SearchResult {
        self.nodes = 0;
        let result = search::pick_best_move(board, color, moves, depth, &mut self.nodes);

        tracing::trace!(
            depth,
            nodes = self.nodes,
            score = ?result.map(|(_, s)| s),
            "minimax search finished"
        );

        SearchResult {
            best_move: result.map(|(mv, _)| mv),
            score: result.map(|(_, s)| s).unwrap_or(0),
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Classical v1.0"
    }
}

// Re-export for direct use if needed
pub use search::{minimax, pick_best_move};
