//! Default automated policy: uniform choice among legal moves.

use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

use crate::ai::MoveSelector;
use crate::board::Board;
use crate::movegen;
use crate::types::{Move, Position, Side};

/// Picks uniformly among mandatory jumps, or among all simple moves when the
/// side has no jump.
#[derive(Debug, Clone)]
pub struct RandomMoveSelector {
    rng: StdRng,
}

impl RandomMoveSelector {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Reproducible selector for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomMoveSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for RandomMoveSelector {
    fn select_move(
        &mut self,
        board: &Board,
        side: Side,
        continuing_from: Option<Position>,
    ) -> Option<Move> {
        let candidates = movegen::legal_moves(board, side, continuing_from);
        candidates.as_slice().choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Piece;

    #[test]
    fn random_choice_is_always_a_mandatory_jump_when_one_exists() {
        let board = Board::with_pieces(&[
            (5, 0, Piece::man(Side::Light)),
            (6, 5, Piece::man(Side::Light)),
            (5, 4, Piece::man(Side::Dark)),
        ]);
        let mut selector = RandomMoveSelector::seeded(7);

        for _ in 0..32 {
            let mv = selector.select_move(&board, Side::Light, None).unwrap();
            assert!(mv.is_jump());
        }
    }

    #[test]
    fn random_choice_covers_every_simple_move() {
        let board = Board::new();
        let legal = movegen::simple_moves(&board, Side::Light);
        let mut selector = RandomMoveSelector::seeded(42);
        let mut seen = Vec::new();

        for _ in 0..500 {
            let mv = selector.select_move(&board, Side::Light, None).unwrap();
            assert!(legal.contains(&mv));
            if !seen.contains(&mv) {
                seen.push(mv);
            }
        }

        assert_eq!(seen.len(), legal.len());
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let board = Board::new();
        let mut left = RandomMoveSelector::seeded(3);
        let mut right = RandomMoveSelector::seeded(3);

        for _ in 0..10 {
            assert_eq!(
                left.select_move(&board, Side::Dark, None),
                right.select_move(&board, Side::Dark, None)
            );
        }
    }

    #[test]
    fn no_candidates_yields_none() {
        let mut selector = RandomMoveSelector::seeded(1);

        assert_eq!(selector.select_move(&Board::empty(), Side::Light, None), None);
    }
}
