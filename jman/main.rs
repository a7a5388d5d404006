use log::{info, warn};
use parking_lot::Mutex;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use jman_cli::CliConfig;
use jman_game::GameConfig;

mod error;
mod input;
mod log_init;
mod render;
mod session;
use error::JmanError;
use input::Command;
use session::Session;

fn game_config(config: &CliConfig) -> GameConfig {
    GameConfig::new(
        config.width,
        config.height,
        config.blocks,
        config.walkers,
        config.pillars,
    )
}

fn draw(session: &Session) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(render::render(session.board()).as_bytes())?;
    out.flush()
}

fn run(config: CliConfig) -> Result<(), JmanError> {
    log_init::init(config.log_level())?;
    info!("Starting J*Man...");
    config.log();

    let session = Arc::new(Mutex::new(Session::new(game_config(&config), config.seed)?));

    {
        let session = session.clone();
        ctrlc::set_handler(move || {
            // Waits for any round in progress to finish
            let session = session.lock();
            info!(
                "Interrupted after {} game(s), {} round(s)",
                session.games(),
                session.total_rounds()
            );
            std::process::exit(0);
        })?;
    }

    println!("{}", input::HELP);
    draw(&session.lock())?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        // Input, round and redraw happen under one lock
        let mut session = session.lock();
        match Command::parse(&line) {
            Some(Command::Move(direction)) => {
                session.step(direction);
            }
            Some(Command::NewGame) => session.new_game()?,
            Some(Command::Quit) => break,
            Some(Command::Help) => {
                println!("{}", input::HELP);
                continue;
            }
            None => {
                warn!("Unknown command '{}'", line.trim());
                println!("{}", input::HELP);
                continue;
            }
        }
        draw(&session)?;
    }

    let session = session.lock();
    info!(
        "Leaving after {} game(s), {} round(s)",
        session.games(),
        session.total_rounds()
    );
    Ok(())
}

fn main() {
    let config = CliConfig::new();
    run(config).unwrap_or_else(|e| {
        eprintln!("Error running game: {}", e);
        std::process::exit(2);
    });
}
