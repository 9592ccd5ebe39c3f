//! Minimax search with alpha-beta pruning

use draughts_core::{available_moves, evaluate, execute, Board, Color, Move};

/// Scores every candidate with a minimax search and returns the best one.
///
/// # Arguments
/// * `board` - The position to search
/// * `color` - The side to move, which is also the maximizing side
/// * `moves` - Candidate moves in enumeration order
/// * `depth` - Plies to search, counting the candidate move
/// * `nodes` - Counter for nodes searched (for statistics)
///
/// # Returns
/// The first candidate with the strictly highest score, or `None` when
/// `moves` is empty. Each candidate is searched with a full window.
pub fn pick_best_move(
    board: &Board,
    color: Color,
    moves: &[Move],
    depth: u8,
    nodes: &mut u64,
) -> Option<(Move, i32)> {
    let mut best: Option<(Move, i32)> = None;

    for &mv in moves {
        let next = execute(board, mv);
        *nodes += 1;

        let score = minimax(
            &next,
            color.other(),
            color,
            depth.saturating_sub(1),
            i32::MIN,
            i32::MAX,
            nodes,
        );

        if best.map_or(true, |(_, s)| score > s) {
            best = Some((mv, score));
        }
    }
    best
}

/// Recursive minimax with alpha-beta pruning.
///
/// `root` is the maximizing side; scores are always material from its point
/// of view. A node where `to_move` has no moves is scored like any other
/// leaf, with no win or loss bonus.
pub fn minimax(
    board: &Board,
    to_move: Color,
    root: Color,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> i32 {
    if depth == 0 {
        return evaluate(board, root);
    }

    let moves = available_moves(board, to_move);
    if moves.is_empty() {
        return evaluate(board, root);
    }

    if to_move == root {
        let mut value = i32::MIN;
        for mv in moves {
            let next = execute(board, mv);
            *nodes += 1;
            value = value.max(minimax(&next, to_move.other(), root, depth - 1, alpha, beta, nodes));
            alpha = alpha.max(value);
            if beta <= alpha {
                break; // Beta cutoff
            }
        }
        value
    } else {
        let mut value = i32::MAX;
        for mv in moves {
            let next = execute(board, mv);
            *nodes += 1;
            value = value.min(minimax(&next, to_move.other(), root, depth - 1, alpha, beta, nodes));
            beta = beta.min(value);
            if beta <= alpha {
                break; // Alpha cutoff
            }
        }
        value
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
