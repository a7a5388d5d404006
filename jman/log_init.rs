use log::{LevelFilter, SetLoggerError};
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    // Stderr keeps log lines out of the board drawn on stdout
    CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])
}
