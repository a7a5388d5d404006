use std::fmt;

#[derive(Debug)]
pub enum JmanError {
    Game(jman_game::Error),
    Io(std::io::Error),
    Logger(log::SetLoggerError),
    Signal(ctrlc::Error),
}

impl fmt::Display for JmanError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            JmanError::Game(err) => write!(fmt, "invalid game setup: {}", err),
            JmanError::Io(err) => write!(fmt, "terminal I/O failed: {}", err),
            JmanError::Logger(err) => write!(fmt, "could not start logger: {}", err),
            JmanError::Signal(err) => write!(fmt, "could not install Ctrl-C handler: {}", err),
        }
    }
}

impl From<jman_game::Error> for JmanError {
    fn from(err: jman_game::Error) -> JmanError {
        JmanError::Game(err)
    }
}

impl From<std::io::Error> for JmanError {
    fn from(err: std::io::Error) -> JmanError {
        JmanError::Io(err)
    }
}

impl From<log::SetLoggerError> for JmanError {
    fn from(err: log::SetLoggerError) -> JmanError {
        JmanError::Logger(err)
    }
}

impl From<ctrlc::Error> for JmanError {
    fn from(err: ctrlc::Error) -> JmanError {
        JmanError::Signal(err)
    }
}
