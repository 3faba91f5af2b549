use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// A board coordinate, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Builds a position from signed coordinates, `None` when off the board.
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        let size = BOARD_SIZE as i32;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn in_bounds(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// Dark squares, the only ones pieces ever stand on.
    pub fn is_playable(self) -> bool {
        (self.row as u16 + self.col as u16) % 2 == 1
    }

    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        Self::try_new(self.row as i32 + d_row, self.col as i32 + d_col)
    }

    pub(crate) fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    pub(crate) fn from_index(index: usize) -> Self {
        Self::new((index / BOARD_SIZE) as u8, (index % BOARD_SIZE) as u8)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the two players.
///
/// `Light` starts on rows 5..=7 and moves towards row 0; `Dark` starts on
/// rows 0..=2 and moves towards the last row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Light,
    Dark,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Row delta of a forward step.
    pub fn forward(self) -> i32 {
        match self {
            Self::Light => -1,
            Self::Dark => 1,
        }
    }

    /// The farthest row, where men of this side are crowned.
    pub fn promotion_row(self) -> u8 {
        match self {
            Self::Light => 0,
            Self::Dark => (BOARD_SIZE - 1) as u8,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub side: Side,
    pub king: bool,
}

impl Piece {
    pub const fn man(side: Side) -> Self {
        Self { side, king: false }
    }

    pub const fn king(side: Side) -> Self {
        Self { side, king: true }
    }
}

/// A single step: one diagonal square, or a two-square jump over an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    pub fn is_jump(self) -> bool {
        self.to.row.abs_diff(self.from.row) == 2
    }

    /// The square of the piece removed by this move, if it is a jump.
    pub fn captured(self) -> Option<Position> {
        self.is_jump().then(|| {
            Position::new(
                midpoint(self.from.row, self.to.row),
                midpoint(self.from.col, self.to.col),
            )
        })
    }
}

fn midpoint(a: u8, b: u8) -> u8 {
    ((a as u16 + b as u16) / 2) as u8
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Moves available to one piece, split by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MoveSet {
    pub jumps: Vec<Move>,
    pub simples: Vec<Move>,
}

impl MoveSet {
    pub fn is_empty(&self) -> bool {
        self.jumps.is_empty() && self.simples.is_empty()
    }

    /// Jumps when the piece has any, otherwise its simple moves.
    pub fn playable(&self) -> &[Move] {
        if self.jumps.is_empty() {
            &self.simples
        } else {
            &self.jumps
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Ongoing,
    Winner(Side),
}

/// Where the interactive two-step protocol currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "at", rename_all = "snake_case")]
pub enum Phase {
    AwaitingSelection,
    PieceSelected(Position),
    /// The piece at this square just jumped and must jump again.
    MustContinueJump(Position),
    GameOver(Side),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionResult {
    pub square: Position,
    /// Destinations the caller may offer: jumps when any exist, else simples.
    pub moves: Vec<Move>,
}

/// Result of one executed turn segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveResult {
    /// The same piece must keep jumping; only `jumps` are legal.
    ContinueJump {
        mv: Move,
        at: Position,
        jumps: Vec<Move>,
    },
    TurnEnded {
        mv: Move,
        next: Side,
    },
    GameOver {
        mv: Move,
        winner: Side,
    },
}

impl MoveResult {
    pub fn applied(&self) -> Move {
        match self {
            Self::ContinueJump { mv, .. }
            | Self::TurnEnded { mv, .. }
            | Self::GameOver { mv, .. } => *mv,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "result", rename_all = "snake_case")]
pub enum ClickResult {
    Selected(SelectionResult),
    Moved(MoveResult),
}

/// Public game state handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Contract: row-major, 0=empty, 1=light man, 2=dark man,
    /// 3=light king, 4=dark king.
    pub board: Vec<u8>,
    pub active_side: Side,
    pub phase: Phase,
    pub outcome: Outcome,
    pub light_count: u8,
    pub dark_count: u8,
    pub can_undo: bool,
    pub can_redo: bool,
}
