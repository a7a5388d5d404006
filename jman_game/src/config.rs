use crate::error::Error;

pub const DEFAULT_WIDTH: u32 = 20;
pub const DEFAULT_HEIGHT: u32 = 20;
pub const DEFAULT_BLOCKS: u32 = 20;
pub const DEFAULT_WALKERS: u32 = 10;
pub const DEFAULT_PILLARS: u32 = 10;

/// Parameters for a new game. A "new game" reuses the same config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,
    pub blocks: u32,
    pub walkers: u32,
    pub pillars: u32,
}

impl GameConfig {
    pub fn new(width: u32, height: u32, blocks: u32, walkers: u32, pillars: u32) -> Self {
        Self {
            width,
            height,
            blocks,
            walkers,
            pillars,
        }
    }

    /// Every piece including the player.
    pub fn total_pieces(&self) -> u64 {
        1 + self.blocks as u64 + self.walkers as u64 + self.pillars as u64
    }

    pub fn capacity(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn validate(&self) -> Result<(), Error> {
        // Coordinates are signed so a step off the edge stays representable
        let max = i32::MAX as u32;
        if self.width == 0 || self.height == 0 || self.width > max || self.height > max {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.total_pieces() > self.capacity() {
            return Err(Error::TooManyPieces {
                requested: self.total_pieces(),
                capacity: self.capacity(),
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_WIDTH,
            DEFAULT_HEIGHT,
            DEFAULT_BLOCKS,
            DEFAULT_WALKERS,
            DEFAULT_PILLARS,
        )
    }
}
