use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use vec_map::VecMap;

use crate::color::Color;
use crate::config::GameConfig;
use crate::error::Error;
use crate::piece::{Piece, PieceId, PieceKind};
use crate::turn::{self, RoundSummary};

/// Cell coordinates. Signed so that a step off the edge is still a value
/// that `is_on_board` can reject.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(&self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::new(self.x, self.y - 1),
            Direction::Down => Self::new(self.x, self.y + 1),
            Direction::Left => Self::new(self.x - 1, self.y),
            Direction::Right => Self::new(self.x + 1, self.y),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Direction {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

pub const PLAYER_START: Position = Position { x: 0, y: 0 };

/// The game board. Owns every piece; cells only hold ids into the piece
/// store, and each piece's recorded position always names the cell that
/// holds its id.
pub struct Board {
    width: i32,
    height: i32,
    cells: Vec<Option<PieceId>>,
    pieces: VecMap<Piece>,
    next_id: PieceId,
    player: PieceId,
    pending_direction: Option<Direction>,
    rounds: u64,
    rng: Box<dyn RngCore + Send>,
}

impl Board {
    /// Builds and populates a board, drawing from system entropy.
    pub fn new(config: GameConfig) -> Result<Self, Error> {
        Self::with_rng(config, Box::new(StdRng::from_entropy()))
    }

    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self, Error> {
        Self::with_rng(config, Box::new(StdRng::seed_from_u64(seed)))
    }

    /// Builds a board whose population and every later random draw come
    /// from `rng`. The player starts at (0, 0).
    pub fn with_rng(config: GameConfig, rng: Box<dyn RngCore + Send>) -> Result<Self, Error> {
        config.validate()?;

        let width = config.width as i32;
        let height = config.height as i32;
        let mut board = Self {
            width,
            height,
            cells: vec![None; config.capacity() as usize],
            pieces: VecMap::new(),
            next_id: 0,
            player: 0,
            pending_direction: None,
            rounds: 0,
            rng,
        };

        let color = Color::random_elemental(&mut board.rng);
        board.player = board.insert(PieceKind::Player, PLAYER_START, color);

        board.populate(PieceKind::Obstacle, config.blocks);
        board.populate(PieceKind::Walker, config.walkers);
        board.populate(PieceKind::Pillar, config.pillars);

        Ok(board)
    }

    // Rejection sampling: terminates because validate() guarantees that
    // enough empty cells remain for every requested piece.
    fn populate(&mut self, kind: PieceKind, count: u32) {
        let mut placed = 0;
        let mut draws: u64 = 0;
        while placed < count {
            let x = self.rng.gen_range(0..self.width);
            let y = self.rng.gen_range(0..self.height);
            let pos = Position::new(x, y);
            draws += 1;
            if self.is_empty(pos) {
                self.place_piece(kind, pos);
                placed += 1;
            }
        }
        debug!("Placed {} {}(s) in {} draws", count, kind.name(), draws);
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn is_on_board(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.is_on_board(pos) && self.cells[self.index(pos)].is_none()
    }

    /// The piece at `pos`, or `None` when the cell is empty or off the board.
    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        let id = self.id_at(pos)?;
        self.pieces.get(id)
    }

    pub fn player(&self) -> &Piece {
        self.piece(self.player)
    }

    pub fn player_id(&self) -> PieceId {
        self.player
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    /// Direction the player takes on the next round. Stays set until changed.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        self.pending_direction = Some(direction);
    }

    /// Advances the game by exactly one round.
    pub fn run_round(&mut self) -> RoundSummary {
        turn::run_round(self)
    }

    /// Number of completed rounds.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    pub fn count_of(&self, kind: PieceKind) -> usize {
        self.pieces().filter(|p| p.kind() == kind).count()
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.values()
    }

    /// Moves the piece at `from` onto `to` and returns whatever piece was
    /// standing on `to`; that piece is gone from the board afterwards.
    ///
    /// No rule checking happens here. Callers decide whether the move is
    /// allowed; `to` must be on the board and `from` must hold a piece.
    pub fn move_piece(&mut self, from: Position, to: Position) -> Option<Piece> {
        assert!(self.is_on_board(to), "move to off-board cell {:?}", to);
        let id = match self.id_at(from) {
            Some(id) => id,
            None => panic!("no piece to move at {:?}", from),
        };
        if from == to {
            return None;
        }

        let from_index = self.index(from);
        let to_index = self.index(to);
        let captured = self.cells[to_index].take().and_then(|old| self.pieces.remove(old));
        self.cells[to_index] = self.cells[from_index].take();
        self.pieces[id].move_to(to);

        captured
    }

    /// Places a new piece on an empty cell. Obstacles are white; every other
    /// kind gets a random elemental color.
    pub fn place_piece(&mut self, kind: PieceKind, pos: Position) -> PieceId {
        let color = match kind {
            PieceKind::Obstacle => Color::White,
            _ => Color::random_elemental(&mut self.rng),
        };
        self.place_piece_with_color(kind, pos, color)
    }

    /// Panics on a second player, on an occupied or off-board cell, and on a
    /// color that does not suit the kind.
    pub fn place_piece_with_color(
        &mut self,
        kind: PieceKind,
        pos: Position,
        color: Color,
    ) -> PieceId {
        assert!(
            kind != PieceKind::Player,
            "board already holds a J*Man at {:?}",
            self.player().position()
        );
        assert!(
            (kind == PieceKind::Obstacle) == (color == Color::White),
            "a {} cannot be {}",
            kind.name(),
            color
        );
        self.insert(kind, pos, color)
    }

    fn insert(&mut self, kind: PieceKind, pos: Position, color: Color) -> PieceId {
        assert!(
            self.is_empty(pos),
            "cannot place {} at {:?}: cell is occupied or off the board",
            kind.name(),
            pos
        );

        let id = self.next_id;
        self.next_id += 1;
        self.pieces.insert(id, Piece::new(kind, pos, color));
        let index = self.index(pos);
        self.cells[index] = Some(id);
        id
    }

    fn index(&self, pos: Position) -> usize {
        (pos.x * self.height + pos.y) as usize
    }

    pub(crate) fn id_at(&self, pos: Position) -> Option<PieceId> {
        if !self.is_on_board(pos) {
            return None;
        }
        self.cells[self.index(pos)]
    }

    pub(crate) fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id]
    }

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id]
    }

    pub(crate) fn pieces_mut(&mut self) -> impl Iterator<Item = &mut Piece> + '_ {
        self.pieces.values_mut()
    }

    pub(crate) fn rng(&mut self) -> &mut Box<dyn RngCore + Send> {
        &mut self.rng
    }

    pub(crate) fn finish_round(&mut self) -> u64 {
        self.rounds += 1;
        self.rounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util;

    fn assert_consistent(board: &Board) {
        let mut occupied = 0;
        for x in 0..board.width() {
            for y in 0..board.height() {
                let pos = Position::new(x, y);
                if let Some(piece) = board.piece_at(pos) {
                    assert_eq!(piece.position(), pos);
                    occupied += 1;
                }
            }
        }
        assert_eq!(occupied, board.piece_count());
    }

    #[test]
    fn populates_requested_counts() {
        let board = Board::seeded(GameConfig::default(), 42).unwrap();
        test_util::print_board(&board);

        assert_eq!(board.count_of(PieceKind::Player), 1);
        assert_eq!(board.count_of(PieceKind::Obstacle), 20);
        assert_eq!(board.count_of(PieceKind::Walker), 10);
        assert_eq!(board.count_of(PieceKind::Pillar), 10);
        assert_eq!(board.player().position(), PLAYER_START);
        assert_consistent(&board);
    }

    #[test]
    fn colors_match_kinds() {
        let board = Board::seeded(GameConfig::default(), 9).unwrap();
        for piece in board.pieces() {
            if piece.kind() == PieceKind::Obstacle {
                assert_eq!(piece.color(), Color::White);
            } else {
                assert!(piece.color().is_elemental());
            }
        }
    }

    #[test]
    fn fills_board_exactly_to_capacity() {
        let board = Board::seeded(GameConfig::new(3, 3, 4, 2, 2), 1).unwrap();
        assert_eq!(board.piece_count(), 9);
        for x in 0..3 {
            for y in 0..3 {
                assert!(!board.is_empty(Position::new(x, y)));
            }
        }
    }

    #[test]
    fn rejects_bad_config() {
        assert!(Board::seeded(GameConfig::new(0, 4, 0, 0, 0), 1).is_err());
        assert!(Board::seeded(GameConfig::new(2, 2, 2, 1, 1), 1).is_err());
    }

    #[test]
    fn same_seed_same_layout() {
        let a = Board::seeded(GameConfig::default(), 1234).unwrap();
        let b = Board::seeded(GameConfig::default(), 1234).unwrap();
        for x in 0..a.width() {
            for y in 0..a.height() {
                let pos = Position::new(x, y);
                let left = a.piece_at(pos).map(|p| (p.kind(), p.color()));
                let right = b.piece_at(pos).map(|p| (p.kind(), p.color()));
                assert_eq!(left, right);
            }
        }
    }

    #[test]
    fn bounds_and_emptiness() {
        let board = test_util::blank_board(4, 3, 0);
        assert!(board.is_on_board(Position::new(0, 0)));
        assert!(board.is_on_board(Position::new(3, 2)));
        assert!(!board.is_on_board(Position::new(4, 0)));
        assert!(!board.is_on_board(Position::new(0, 3)));
        assert!(!board.is_on_board(Position::new(-1, 0)));

        assert!(!board.is_empty(PLAYER_START));
        assert!(board.is_empty(Position::new(1, 1)));
        assert!(!board.is_empty(Position::new(-1, 1)));
        assert!(board.piece_at(Position::new(7, 7)).is_none());
        assert!(board.piece_at(Position::new(2, 2)).is_none());
    }

    #[test]
    fn move_to_empty_cell() {
        let mut board = test_util::blank_board(4, 4, 0);
        let from = Position::new(1, 1);
        let to = Position::new(1, 2);
        let id = board.place_piece(PieceKind::Walker, from);

        assert!(board.move_piece(from, to).is_none());
        assert!(board.is_empty(from));
        assert_eq!(board.id_at(to), Some(id));
        assert_eq!(board.piece(id).position(), to);
        assert_consistent(&board);
    }

    #[test]
    fn move_onto_piece_discards_it() {
        let mut board = test_util::blank_board(4, 4, 0);
        let target = board.place_piece_with_color(
            PieceKind::Pillar,
            Position::new(0, 1),
            Color::Red,
        );

        let captured = board.move_piece(PLAYER_START, Position::new(0, 1)).unwrap();
        assert_eq!(captured.kind(), PieceKind::Pillar);
        assert_eq!(board.piece_count(), 1);
        assert!(board.pieces().all(|p| p.kind() != PieceKind::Pillar));
        assert_eq!(board.player().position(), Position::new(0, 1));
        assert_eq!(board.id_at(Position::new(0, 1)), Some(board.player_id()));
        assert_ne!(board.player_id(), target);
        assert_consistent(&board);
    }

    #[test]
    fn move_in_place_keeps_piece() {
        let mut board = test_util::blank_board(2, 2, 0);
        assert!(board.move_piece(PLAYER_START, PLAYER_START).is_none());
        assert_eq!(board.player().position(), PLAYER_START);
        assert_eq!(board.piece_count(), 1);
    }

    #[test]
    #[should_panic]
    fn second_player_is_fatal() {
        let mut board = test_util::blank_board(3, 3, 0);
        board.place_piece(PieceKind::Player, Position::new(2, 2));
    }

    #[test]
    #[should_panic]
    fn placing_on_occupied_cell_is_fatal() {
        let mut board = test_util::blank_board(3, 3, 0);
        board.place_piece(PieceKind::Walker, PLAYER_START);
    }

    #[test]
    #[should_panic]
    fn placing_off_board_is_fatal() {
        let mut board = test_util::blank_board(3, 3, 0);
        board.place_piece(PieceKind::Obstacle, Position::new(3, 0));
    }

    #[test]
    #[should_panic]
    fn moving_off_board_is_fatal() {
        let mut board = test_util::blank_board(3, 3, 0);
        board.move_piece(PLAYER_START, Position::new(-1, 0));
    }

    #[test]
    fn pending_direction_persists() {
        let mut board = test_util::blank_board(5, 1, 0);
        assert_eq!(board.pending_direction(), None);
        board.set_pending_direction(Direction::Right);
        board.run_round();
        board.run_round();
        assert_eq!(board.pending_direction(), Some(Direction::Right));
        assert_eq!(board.player().position(), Position::new(2, 0));
        assert_eq!(board.rounds(), 2);
    }
}
