use crate::types::{BOARD_SIZE, NUM_SQUARES, Piece, Position, Side};

/// Rows each side fills at the start, counted from its own edge.
const HOME_ROWS: usize = 3;

/// Checkers board: one optional piece per square, row-major.
///
/// Passive container; rules live in `movegen` and `rules`. `Clone` produces a
/// fully independent copy, which history snapshots rely on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; NUM_SQUARES],
}

impl Board {
    /// Creates the initial layout: dark men on the playable squares of rows
    /// 0..=2, light men on rows 5..=7.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for index in 0..NUM_SQUARES {
            let pos = Position::from_index(index);
            if !pos.is_playable() {
                continue;
            }
            let row = pos.row as usize;
            if row < HOME_ROWS {
                board.squares[index] = Some(Piece::man(Side::Dark));
            } else if row >= BOARD_SIZE - HOME_ROWS {
                board.squares[index] = Some(Piece::man(Side::Light));
            }
        }
        board
    }

    pub fn empty() -> Self {
        Self {
            squares: [None; NUM_SQUARES],
        }
    }

    /// Returns the piece on `pos`; `None` for empty or off-board squares.
    pub fn get(&self, pos: Position) -> Option<Piece> {
        if pos.in_bounds() {
            self.squares[pos.index()]
        } else {
            None
        }
    }

    /// Writes `piece` to `pos`. Off-board writes are ignored.
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        if pos.in_bounds() {
            self.squares[pos.index()] = piece;
        }
    }

    pub fn take(&mut self, pos: Position) -> Option<Piece> {
        if pos.in_bounds() {
            self.squares[pos.index()].take()
        } else {
            None
        }
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        pos.in_bounds() && self.squares[pos.index()].is_none()
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(index, square)| square.map(|piece| (Position::from_index(index), piece)))
    }

    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.side == side)
    }

    /// Returns `(light_count, dark_count)`.
    pub fn count(&self) -> (u8, u8) {
        self.pieces()
            .fold((0, 0), |(light, dark), (_, piece)| match piece.side {
                Side::Light => (light + 1, dark),
                Side::Dark => (light, dark + 1),
            })
    }

    pub fn count_of(&self, side: Side) -> u8 {
        let (light, dark) = self.count();
        match side {
            Side::Light => light,
            Side::Dark => dark,
        }
    }

    /// Converts the board to the cell encoding of `GameView::board`.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut cells = [0u8; NUM_SQUARES];
        for (cell, square) in cells.iter_mut().zip(self.squares.iter()) {
            *cell = match square {
                None => 0,
                Some(Piece { side: Side::Light, king: false }) => 1,
                Some(Piece { side: Side::Dark, king: false }) => 2,
                Some(Piece { side: Side::Light, king: true }) => 3,
                Some(Piece { side: Side::Dark, king: true }) => 4,
            };
        }
        cells
    }

    #[cfg(test)]
    pub(crate) fn with_pieces(pieces: &[(u8, u8, Piece)]) -> Self {
        let mut board = Self::empty();
        for &(row, col, piece) in pieces {
            board.set(Position::new(row, col), Some(piece));
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
