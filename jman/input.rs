use jman_game::Direction;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    Move(Direction),
    NewGame,
    Help,
    Quit,
}

pub const HELP: &str = "\
Move J*Man with w/a/s/d (or up/left/down/right), one step per round.
n starts a new game of the same size, h shows this help, q quits.
J*Man takes a piece of the color it can eat and becomes that color:
Green eats Red, Red eats Yellow, Yellow eats Green. Blocks (#) never move,
walkers (W) wander, pillars (P) change color.";

impl Command {
    /// Parses one line of input. `None` for anything unrecognised.
    pub fn parse(line: &str) -> Option<Command> {
        let command = match line.trim().to_lowercase().as_str() {
            "w" | "up" => Command::Move(Direction::Up),
            "s" | "down" => Command::Move(Direction::Down),
            "a" | "left" => Command::Move(Direction::Left),
            "d" | "right" => Command::Move(Direction::Right),
            "n" | "new" => Command::NewGame,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => return None,
        };
        Some(command)
    }
}
