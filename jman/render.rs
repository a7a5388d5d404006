use jman_game::{Board, Color, Position};

fn ansi(color: Color) -> u8 {
    match color {
        Color::Red => 31,
        Color::Green => 32,
        Color::Yellow => 33,
        Color::White => 37,
    }
}

/// Draws the board one character per cell, then a status line.
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    for y in 0..board.height() {
        for x in 0..board.width() {
            match board.piece_at(Position::new(x, y)) {
                Some(piece) => out.push_str(&format!(
                    "\x1b[{}m{}\x1b[0m ",
                    ansi(piece.color()),
                    piece.kind().print()
                )),
                None => out.push_str(". "),
            }
        }
        out.push('\n');
    }

    let player = board.player();
    out.push_str(&format!(
        "Round {} | {} | can eat {}\n",
        board.rounds(),
        player,
        prey(player.color()).map(|c| c.word()).unwrap_or("nothing")
    ));
    out
}

fn prey(color: Color) -> Option<Color> {
    Color::ELEMENTAL.iter().copied().find(|c| color.captures(*c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jman_game::GameConfig;

    #[test]
    fn draws_every_cell() {
        let board = Board::seeded(GameConfig::new(4, 3, 2, 1, 1), 5).unwrap();
        let text = render(&board);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains('J'));
        assert_eq!(text.matches('#').count(), 2);
        assert_eq!(text.matches('W').count(), 1);
        assert_eq!(text.matches('P').count(), 1);
        assert!(lines[3].starts_with("Round 0"));
    }

    #[test]
    fn names_prey() {
        assert_eq!(prey(Color::Green), Some(Color::Red));
        assert_eq!(prey(Color::Red), Some(Color::Yellow));
        assert_eq!(prey(Color::Yellow), Some(Color::Green));
        assert_eq!(prey(Color::White), None);
    }
}
