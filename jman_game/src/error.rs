use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    InvalidDimensions { width: u32, height: u32 },
    TooManyPieces { requested: u64, capacity: u64 },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Error::InvalidDimensions { width, height } => {
                write!(fmt, "board must be at least 1x1, got {}x{}", width, height)
            }
            Error::TooManyPieces {
                requested,
                capacity,
            } => write!(
                fmt,
                "{} pieces (player included) do not fit on {} cells",
                requested, capacity
            ),
        }
    }
}

impl std::error::Error for Error {}
