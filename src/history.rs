use tracing::debug;

use crate::board::Board;
use crate::error::{CheckersError, CheckersResult};
use crate::types::Side;

/// A full copy of the position plus the side that was to move.
///
/// Each snapshot owns its board; later play on the live board never reaches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub active_side: Side,
}

impl Snapshot {
    pub fn capture(board: &Board, active_side: Side) -> Self {
        Self {
            board: board.clone(),
            active_side,
        }
    }
}

/// Undo/redo stacks of snapshots. Restoring replaces state, nothing is replayed.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes the pre-move state. A new move discards every redo entry.
    pub fn record(&mut self, before: Snapshot) {
        self.undo_stack.push(before);
        self.redo_stack.clear();
    }

    /// Swaps `current` for the most recent undo entry.
    pub fn undo(&mut self, current: Snapshot) -> CheckersResult<Snapshot> {
        let previous = self
            .undo_stack
            .pop()
            .ok_or(CheckersError::EmptyHistory { action: "undo" })?;
        self.redo_stack.push(current);
        debug!(undo = self.undo_stack.len(), redo = self.redo_stack.len(), "undo");
        Ok(previous)
    }

    /// Swaps `current` for the most recent redo entry.
    pub fn redo(&mut self, current: Snapshot) -> CheckersResult<Snapshot> {
        let next = self
            .redo_stack
            .pop()
            .ok_or(CheckersError::EmptyHistory { action: "redo" })?;
        self.undo_stack.push(current);
        debug!(undo = self.undo_stack.len(), redo = self.redo_stack.len(), "redo");
        Ok(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Piece, Position};

    fn moved_board() -> Board {
        let mut board = Board::new();
        board.take(Position::new(5, 0));
        board.set(Position::new(4, 1), Some(Piece::man(Side::Light)));
        board
    }

    #[test]
    fn empty_history_refuses_undo_and_redo() {
        let mut history = History::new();
        let current = Snapshot::capture(&Board::new(), Side::Light);

        assert_eq!(
            history.undo(current.clone()),
            Err(CheckersError::EmptyHistory { action: "undo" })
        );
        assert_eq!(
            history.redo(current),
            Err(CheckersError::EmptyHistory { action: "redo" })
        );
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_then_redo_swaps_snapshots() {
        let mut history = History::new();
        let before = Snapshot::capture(&Board::new(), Side::Light);
        let after = Snapshot::capture(&moved_board(), Side::Dark);
        history.record(before.clone());

        let restored = history.undo(after.clone()).unwrap();
        assert_eq!(restored, before);
        assert!(history.can_redo());

        let replayed = history.redo(restored).unwrap();
        assert_eq!(replayed, after);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn recording_after_undo_clears_redo() {
        let mut history = History::new();
        history.record(Snapshot::capture(&Board::new(), Side::Light));
        history
            .undo(Snapshot::capture(&moved_board(), Side::Dark))
            .unwrap();
        assert!(history.can_redo());

        history.record(Snapshot::capture(&Board::new(), Side::Light));

        assert!(!history.can_redo());
    }

    #[test]
    fn snapshot_is_unaffected_by_later_mutation() {
        let mut board = Board::new();
        let snapshot = Snapshot::capture(&board, Side::Light);

        board.take(Position::new(5, 0));

        assert_eq!(snapshot.board, Board::new());
    }
}
