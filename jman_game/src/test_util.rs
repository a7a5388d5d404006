use crate::board::{Board, Position};
use crate::color::Color;
use crate::config::GameConfig;

/// A board holding only the player at (0, 0).
pub fn blank_board(width: u32, height: u32, seed: u64) -> Board {
    Board::seeded(GameConfig::new(width, height, 0, 0, 0), seed).unwrap()
}

pub fn paint_player(board: &mut Board, color: Color) {
    let id = board.player_id();
    board.piece_mut(id).set_color(color);
}

#[allow(dead_code)]
pub fn print_board(board: &Board) {
    println!("{}", "-".repeat(board.width() as usize * 2));
    for y in 0..board.height() {
        let mut row_str = String::new();
        for x in 0..board.width() {
            match board.piece_at(Position::new(x, y)) {
                Some(piece) => {
                    let code = match piece.color() {
                        Color::Red => 31,
                        Color::Green => 32,
                        Color::Yellow => 33,
                        Color::White => 37,
                    };
                    row_str.push_str(&format!("\x1b[{}m{} \x1b[0m", code, piece.kind().print()));
                }
                None => row_str.push_str(". "),
            }
        }
        println!("{}", row_str);
    }
}
