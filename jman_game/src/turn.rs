use log::{debug, trace};

use crate::behavior::Outcome;
use crate::board::{Board, Position};
use crate::piece::{Piece, PieceId};

#[derive(Debug, Clone)]
pub struct RoundSummary {
    /// 1-based number of the round that just finished.
    pub round: u64,
    /// Pieces that took their action, the player included.
    pub acted: usize,
    /// Piece the player captured this round, if any.
    pub captured: Option<Piece>,
}

/// Plays one round: the player acts first, then every other piece acts
/// once, scanning columns left to right and each column top to bottom.
/// The acted flag lives on the piece, so a piece that walked into a cell
/// further along the scan is skipped when the scan reaches it.
///
/// Panics if any piece is still marked as acted when the round starts.
pub fn run_round(board: &mut Board) -> RoundSummary {
    if let Some(stale) = board.pieces().find(|p| p.has_acted()) {
        panic!("round started while {} is still marked as acted", stale);
    }

    let mut acted = 0;
    let mut captured = None;

    let player = board.player_id();
    if let Outcome::Captured { piece, .. } = act(board, player) {
        captured = Some(piece);
    }
    acted += 1;

    for x in 0..board.width() {
        for y in 0..board.height() {
            let id = match board.id_at(Position::new(x, y)) {
                Some(id) => id,
                None => continue,
            };
            if board.piece(id).has_acted() {
                continue;
            }
            act(board, id);
            acted += 1;
        }
    }

    for piece in board.pieces_mut() {
        piece.set_acted(false);
    }

    let round = board.finish_round();
    debug!(
        "Round {} done: {} piece(s) acted, player is {}",
        round,
        acted,
        board.player()
    );

    RoundSummary {
        round,
        acted,
        captured,
    }
}

fn act(board: &mut Board, id: PieceId) -> Outcome {
    let kind = board.piece(id).kind();
    let outcome = kind.get_behavior().act(id, board);
    trace!("{} -> {:?}", board.piece(id), outcome);
    board.piece_mut(id).set_acted(true);
    outcome
}
