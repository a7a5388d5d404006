//! ## Game
//! Board state and rules for J*Man: a player piece chasing walkers and
//! pillars around a grid of obstacles, capturing by color.
//! ### Modules
//! - Board (grid of piece ids, queries, the move primitive, population)
//! - Behavior (what each kind of piece does on its turn)
//! - Turn (runs one full round)
//!
//! ### Example
//! ```
//! use jman_game::{Board, Direction, GameConfig};
//!
//! let mut board = Board::seeded(GameConfig::default(), 7).unwrap();
//! board.set_pending_direction(Direction::Right);
//! let summary = board.run_round();
//! assert_eq!(summary.round, 1);
//! ```
mod behavior;
mod board;
mod color;
mod config;
mod error;
mod piece;
#[cfg(test)]
mod test_util;
mod turn;

pub use behavior::{Outcome, PieceBehavior};
pub use board::*;
pub use color::Color;
pub use config::*;
pub use error::Error;
pub use piece::{Piece, PieceId, PieceKind};
pub use turn::RoundSummary;
