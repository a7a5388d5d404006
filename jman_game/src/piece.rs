use std::fmt;

use crate::behavior::{Obstacle, PieceBehavior, Pillar, Player, Walker};
use crate::board::Position;
use crate::color::Color;

/// Key of a piece inside the board's piece store.
pub type PieceId = usize;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum PieceKind {
    Obstacle = 0,
    Player = 1,
    Walker = 2,
    Pillar = 3,
}

impl PieceKind {
    pub fn get_behavior(&self) -> Box<dyn PieceBehavior> {
        match self {
            PieceKind::Obstacle => Box::new(Obstacle),
            PieceKind::Player => Box::new(Player),
            PieceKind::Walker => Box::new(Walker),
            PieceKind::Pillar => Box::new(Pillar),
        }
    }

    /// Walkers and pillars are the only pieces the player can capture.
    pub fn capturable(&self) -> bool {
        match self {
            PieceKind::Walker | PieceKind::Pillar => true,
            _ => false,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PieceKind::Obstacle => "Block",
            PieceKind::Player => "J*Man",
            PieceKind::Walker => "Walker",
            PieceKind::Pillar => "Pillar",
        }
    }

    pub fn print(&self) -> char {
        match self {
            PieceKind::Obstacle => '#',
            PieceKind::Player => 'J',
            PieceKind::Walker => 'W',
            PieceKind::Pillar => 'P',
        }
    }
}

/// A piece on the board. The board keeps `position` in sync with the cell
/// holding the piece; `acted` travels with the piece when it moves.
#[derive(Debug, Clone)]
pub struct Piece {
    kind: PieceKind,
    position: Position,
    color: Color,
    acted: bool,
}

impl Piece {
    pub(crate) fn new(kind: PieceKind, position: Position, color: Color) -> Self {
        debug_assert_eq!(kind == PieceKind::Obstacle, color == Color::White);
        Self {
            kind,
            position,
            color,
            acted: false,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn has_acted(&self) -> bool {
        self.acted
    }

    pub(crate) fn move_to(&mut self, position: Position) {
        self.position = position;
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        debug_assert!(color.is_elemental() && self.kind != PieceKind::Obstacle);
        self.color = color;
    }

    pub(crate) fn set_acted(&mut self, acted: bool) {
        self.acted = acted;
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} at ({}, {})",
            self.color,
            self.kind.name(),
            self.position.x,
            self.position.y
        )
    }
}
