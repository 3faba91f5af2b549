//! Move selection policies for the automated side.

mod random;

pub use random::RandomMoveSelector;

use crate::board::Board;
use crate::movegen;
use crate::types::{Move, Position, Side};

/// Chooses the next move for an automated side.
///
/// `continuing_from` is set while a piece is in the middle of a jump chain;
/// the proposal must then be one of that piece's jumps. Returning `None`
/// signals that `side` has no legal move. The game validates every proposal
/// before playing it.
pub trait MoveSelector: Send {
    fn select_move(
        &mut self,
        board: &Board,
        side: Side,
        continuing_from: Option<Position>,
    ) -> Option<Move>;
}

/// Always plays the first legal move in row-major generation order.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstLegalMoveSelector;

impl MoveSelector for FirstLegalMoveSelector {
    fn select_move(
        &mut self,
        board: &Board,
        side: Side,
        continuing_from: Option<Position>,
    ) -> Option<Move> {
        movegen::legal_moves(board, side, continuing_from)
            .first()
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Piece;

    #[test]
    fn first_legal_prefers_mandatory_jump() {
        let board = Board::with_pieces(&[
            (5, 0, Piece::man(Side::Light)),
            (6, 5, Piece::man(Side::Light)),
            (5, 4, Piece::man(Side::Dark)),
        ]);

        let mv = FirstLegalMoveSelector.select_move(&board, Side::Light, None);

        assert_eq!(
            mv,
            Some(Move::new(Position::new(6, 5), Position::new(4, 3)))
        );
    }

    #[test]
    fn first_legal_reports_no_move_for_blocked_side() {
        let board = Board::with_pieces(&[(7, 0, Piece::man(Side::Dark))]);

        assert_eq!(FirstLegalMoveSelector.select_move(&board, Side::Dark, None), None);
        assert_eq!(FirstLegalMoveSelector.select_move(&board, Side::Light, None), None);
    }
}
