//! Greedy Draughts Engine
//!
//! Looks one ply ahead: plays each candidate and keeps the one with the
//! best material balance afterwards.

use draughts_core::{evaluate, execute, Board, Color, Engine, Move, SearchResult};


/// One-ply material maximizer.
///
/// Ties keep the first move in candidate order, so the choice is fully
/// determined by the board and the candidate list.
#[derive(Debug, Clone, Default)]
pub struct GreedyEngine {
    nodes: u64,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }
}

/// Picks the candidate with the strictly greatest score after it is played.
pub fn pick_greedy_move(board: &Board, color: Color, moves: &[Move], nodes: &mut u64) -> Option<(Move, i32)> {
    let mut best: Option<(Move, i32)> = None;
    for &mv in moves {
        let next = execute(board, mv);
        *nodes += 1;
        let score = evaluate(&next, color);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((mv, score));
        }
    }
    best
}

impl Engine for GreedyEngine {
    fn search(&mut self, board: &Board, color: Color, moves: &[Move], _depth: u8) -> SearchResult {
        self.nodes = 0;
        let result = pick_greedy_move(board, color, moves, &mut self.nodes);

        SearchResult {
            best_move: result.map(|(mv, _)| mv),
            score: result.map(|(_, s)| s).unwrap_or(0),
            depth: 1,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Greedy v1.0"
    }
}
