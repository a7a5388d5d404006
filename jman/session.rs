use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use jman_game::{Board, Direction, GameConfig, RoundSummary};

/// One player's run of games. Each new game gets a fresh board with the
/// same parameters, seeded from the session's own generator.
pub struct Session {
    config: GameConfig,
    board: Board,
    seeds: StdRng,
    games: u32,
    total_rounds: u64,
}

impl Session {
    pub fn new(config: GameConfig, seed: Option<u64>) -> Result<Self, jman_game::Error> {
        let mut seeds = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let board = Board::seeded(config, seeds.gen())?;

        Ok(Self {
            config,
            board,
            seeds,
            games: 1,
            total_rounds: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn games(&self) -> u32 {
        self.games
    }

    pub fn total_rounds(&self) -> u64 {
        self.total_rounds + self.board.rounds()
    }

    /// Discards the current board for a fresh one of the same size.
    pub fn new_game(&mut self) -> Result<(), jman_game::Error> {
        let board = Board::seeded(self.config, self.seeds.gen())?;
        self.total_rounds += self.board.rounds();
        self.board = board;
        self.games += 1;
        info!(
            "Game {} started after {} round(s) in total",
            self.games, self.total_rounds
        );
        Ok(())
    }

    pub fn step(&mut self, direction: Direction) -> RoundSummary {
        self.board.set_pending_direction(direction);
        let summary = self.board.run_round();
        if let Some(captured) = &summary.captured {
            info!("Round {}: J*Man ate {}", summary.round, captured);
        }
        summary
    }
}
