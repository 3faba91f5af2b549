use tracing::warn;

use crate::board::Board;
use crate::error::{CheckersError, CheckersResult, SelectionFault};
use crate::movegen;
use crate::types::{Move, Outcome, Piece, Side};

/// Moves a piece, removes the jumped piece and crowns on the far row.
///
/// No legality check beyond the source square being occupied; callers
/// validate against `movegen` first. Returns the piece as it now stands on
/// `mv.to`. Promotion is immediate, even in the middle of a jump chain.
pub fn apply_move(board: &mut Board, mv: Move) -> CheckersResult<Piece> {
    let Some(mut piece) = board.take(mv.from) else {
        return Err(CheckersError::InvalidSelection {
            square: mv.from,
            fault: SelectionFault::EmptySquare,
        });
    };

    if let Some(captured) = mv.captured() {
        board.set(captured, None);
    }
    if mv.to.row == piece.side.promotion_row() {
        piece.king = true;
    }
    board.set(mv.to, Some(piece));

    Ok(piece)
}

/// Decides whether the game is over with `to_move` about to play.
///
/// A side loses when it has no pieces, or has pieces none of which can move.
/// `to_move` is checked first; if both sides are stuck at once it loses.
pub fn evaluate_outcome(board: &Board, to_move: Side) -> Outcome {
    let waiting = to_move.opponent();
    let to_move_lost = has_lost(board, to_move);
    let waiting_lost = has_lost(board, waiting);

    if to_move_lost && waiting_lost {
        warn!(%to_move, "both sides are immobile; side to move loses");
    }

    if to_move_lost {
        Outcome::Winner(waiting)
    } else if waiting_lost {
        Outcome::Winner(to_move)
    } else {
        Outcome::Ongoing
    }
}

fn has_lost(board: &Board, side: Side) -> bool {
    board.count_of(side) == 0 || !movegen::has_any_move(board, side)
}
