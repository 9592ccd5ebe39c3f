//! Draughts Bot
//!
//! Turns a difficulty level into a full turn: the first hop chosen by the
//! matching engine, followed by every capture-chain continuation.
//!
//! | Difficulty | Engine            | Choice                              |
//! |------------|-------------------|-------------------------------------|
//! | Easy       | `RandomEngine`    | uniform random                      |
//! | Medium     | `GreedyEngine`    | best material after one ply         |
//! | Hard       | `ClassicalEngine` | minimax with alpha-beta             |

mod config;

pub use config::*;

use std::fmt;
use std::str::FromStr;

use classical_engine::ClassicalEngine;
use draughts_core::{
    any_capture, available_moves, capture_moves, execute, Board, Color, Engine, Move, Square,
};
use greedy_engine::GreedyEngine;
use random_engine::RandomEngine;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown difficulty {0:?} (expected easy, medium or hard)")]
pub struct UnknownDifficulty(pub String);

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(UnknownDifficulty(s.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// One executed hop of a bot turn and the board it produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hop {
    pub from: Square,
    pub to: Square,
    pub board: Board,
}

impl Hop {
    pub fn as_move(&self) -> Move {
        Move::new(self.from, self.to)
    }
}

/// Builds a fresh engine for `difficulty`.
pub fn create_engine(difficulty: Difficulty, seed: Option<u64>) -> Box<dyn Engine> {
    match difficulty {
        Difficulty::Easy => match seed {
            Some(seed) => Box::new(RandomEngine::with_seed(seed)),
            None => Box::new(RandomEngine::new()),
        },
        Difficulty::Medium => Box::new(GreedyEngine::new()),
        Difficulty::Hard => Box::new(ClassicalEngine::new()),
    }
}

/// A computer opponent with fixed search settings.
#[derive(Debug, Clone, Default)]
pub struct Bot {
    config: BotConfig,
}

impl Bot {
    pub fn new(config: BotConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Plays a whole turn for `color`.
    ///
    /// Returns every hop in order with the board after it: one entry for a
    /// quiet move or single capture, one per jump for a capture chain. An
    /// empty result means `color` has no legal move.
    pub fn play(&self, board: &Board, color: Color, difficulty: Difficulty) -> Vec<Hop> {
        let mut engine = create_engine(difficulty, self.config.seed);

        // Under the forced-capture rule the first hop is a capture exactly
        // when one exists; only then may the turn continue
        let capturing = any_capture(board, color);
        let moves = available_moves(board, color);
        let first = engine
            .search(board, color, &moves, self.config.first_hop_depth())
            .best_move;
        let Some(mut last) = first else {
            tracing::debug!(?color, %difficulty, "bot has no legal move");
            return Vec::new();
        };

        let mut current = execute(board, last);
        let mut hops = vec![Hop {
            from: last.from,
            to: last.to,
            board: current,
        }];

        if capturing {
            let depth = self.config.continuation_depth();
            while let Some(mv) = engine
                .search(&current, color, &continuations(&current, last.to, color), depth)
                .best_move
            {
                current = execute(&current, mv);
                hops.push(Hop {
                    from: mv.from,
                    to: mv.to,
                    board: current,
                });
                last = mv;
            }
        }

        tracing::debug!(
            ?color,
            %difficulty,
            engine = engine.name(),
            hops = hops.len(),
            "bot turn chosen"
        );
        hops
    }
}

/// Further captures for the piece that just landed on `at`.
fn continuations(board: &Board, at: Square, color: Color) -> Vec<Move> {
    capture_moves(board, at, color)
        .into_iter()
        .map(|to| Move::new(at, to))
        .collect()
}

/// Plays a turn with default settings, optionally overriding the first-hop
/// search depth.
pub fn bot_move(board: &Board, color: Color, difficulty: Difficulty, depth: Option<u8>) -> Vec<Hop> {
    Bot::new(BotConfig::with_depth(depth)).play(board, color, difficulty)
}
