use log::{debug, trace};
use rand::Rng;

use crate::board::{Board, Direction, Position};
use crate::color::Color;
use crate::piece::{Piece, PieceId};

/// What a single call to `act` did.
#[derive(Debug, Clone)]
pub enum Outcome {
    Idle,
    Moved { from: Position, to: Position },
    Blocked { to: Position },
    Recolored { from: Color, to: Color },
    Captured { at: Position, piece: Piece },
}

/// Per-kind action, run at most once per round for every piece.
///
/// Precondition: `id` names a piece currently on `board`. Implementations
/// only ever move or recolor that piece; the player may additionally remove
/// the piece it captures.
pub trait PieceBehavior {
    fn act(&self, _id: PieceId, _board: &mut Board) -> Outcome {
        Outcome::Idle
    }
}

/// Odds of a walker stepping or a pillar recoloring on a given round.
const ACTIVE_ONE_IN: u32 = 3;

fn wants_to_act(board: &mut Board) -> bool {
    board.rng().gen_range(0..ACTIVE_ONE_IN) == 0
}

pub struct Obstacle;
impl PieceBehavior for Obstacle {}

pub struct Walker;
impl PieceBehavior for Walker {
    fn act(&self, id: PieceId, board: &mut Board) -> Outcome {
        if !wants_to_act(board) {
            return Outcome::Idle;
        }

        let direction = Direction::random(board.rng());
        let from = board.piece(id).position();
        let to = from.step(direction);

        if board.is_empty(to) {
            board.move_piece(from, to);
            Outcome::Moved { from, to }
        } else {
            Outcome::Blocked { to }
        }
    }
}

pub struct Pillar;
impl PieceBehavior for Pillar {
    fn act(&self, id: PieceId, board: &mut Board) -> Outcome {
        if !wants_to_act(board) {
            return Outcome::Idle;
        }

        // Picking the current color again still counts as a recolor
        let color = Color::random_elemental(board.rng());
        let piece = board.piece_mut(id);
        let from = piece.color();
        piece.set_color(color);
        Outcome::Recolored { from, to: color }
    }
}

pub struct Player;
impl PieceBehavior for Player {
    fn act(&self, id: PieceId, board: &mut Board) -> Outcome {
        let direction = match board.pending_direction() {
            Some(direction) => direction,
            None => return Outcome::Idle,
        };

        let me = board.piece(id);
        let (from, color) = (me.position(), me.color());
        let to = from.step(direction);

        if !board.is_on_board(to) {
            return Outcome::Blocked { to };
        }

        let target = board.piece_at(to).map(|p| (p.kind(), p.color()));
        match target {
            None => {
                board.move_piece(from, to);
                Outcome::Moved { from, to }
            }
            Some((kind, target_color)) if kind.capturable() && color.captures(target_color) => {
                let captured = board.move_piece(from, to);
                board.piece_mut(id).set_color(target_color);
                match captured {
                    Some(piece) => {
                        debug!("{} captured {}", board.piece(id), piece);
                        Outcome::Captured { at: to, piece }
                    }
                    None => Outcome::Moved { from, to },
                }
            }
            Some((kind, target_color)) => {
                trace!("{} J*Man cannot take {} {}", color, target_color, kind.name());
                Outcome::Blocked { to }
            }
        }
    }
}
