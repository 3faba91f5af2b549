use tracing::{debug, info, warn};

use crate::ai::{MoveSelector, RandomMoveSelector};
use crate::board::Board;
use crate::config::GameConfig;
use crate::error::{CheckersError, CheckersResult, SelectionFault};
use crate::history::{History, Snapshot};
use crate::movegen;
use crate::rules;
use crate::types::{
    ClickResult, GameView, Move, MoveResult, MoveSet, Outcome, Phase, Position, SelectionResult,
    Side,
};

/// Owns one game: board, side to move, protocol phase, history and the
/// selector driving the automated side.
pub struct Game {
    board: Board,
    active_side: Side,
    phase: Phase,
    history: History,
    config: GameConfig,
    selector: Box<dyn MoveSelector>,
}

impl Game {
    pub fn new(config: GameConfig, selector: Box<dyn MoveSelector>) -> Self {
        info!(first = %config.first_side, automated = ?config.automated_side, "new game");
        Self {
            board: Board::new(),
            active_side: config.first_side,
            phase: Phase::AwaitingSelection,
            history: History::new(),
            config,
            selector,
        }
    }

    pub fn new_with_default_selector(config: GameConfig) -> Self {
        let selector = match config.seed {
            Some(seed) => RandomMoveSelector::seeded(seed),
            None => RandomMoveSelector::new(),
        };
        Self::new(config, Box::new(selector))
    }

    /// Back to the initial layout with empty history; config and selector stay.
    pub fn new_game(&mut self) {
        self.board = Board::new();
        self.active_side = self.config.first_side;
        self.phase = Phase::AwaitingSelection;
        self.history.clear();
        info!(first = %self.active_side, "game reset");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_side(&self) -> Side {
        self.active_side
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn outcome(&self) -> Outcome {
        rules::evaluate_outcome(&self.board, self.active_side)
    }

    pub fn set_automated_side(&mut self, side: Option<Side>) {
        self.config.automated_side = side;
    }

    /// True when the caller should drive the next segment with
    /// [`Game::play_automated_step`].
    pub fn is_automated_turn(&self) -> bool {
        !matches!(self.phase, Phase::GameOver(_))
            && self.config.automated_side == Some(self.active_side)
    }

    /// Jumps and simple moves of the piece on `square`, empty unless it
    /// belongs to the side to move. While a capture chain is pending only
    /// the jumping piece has moves, and only its jumps.
    pub fn legal_moves(&self, square: Position) -> MoveSet {
        match self.phase {
            Phase::MustContinueJump(from) if square != from => MoveSet::default(),
            Phase::MustContinueJump(_) => MoveSet {
                jumps: movegen::moves_for(&self.board, square, self.active_side).jumps,
                simples: Vec::new(),
            },
            _ => movegen::moves_for(&self.board, square, self.active_side),
        }
    }

    pub fn mandatory_jumps(&self, side: Side) -> Vec<Move> {
        movegen::mandatory_jumps(&self.board, side)
    }

    /// First half of the interactive protocol: pick the piece to move.
    pub fn select(&mut self, square: Position) -> CheckersResult<SelectionResult> {
        self.ensure_human_turn()?;

        if let Phase::MustContinueJump(from) = self.phase {
            if square != from {
                return Err(self.reject(square, SelectionFault::MustContinueJump));
            }
            let jumps = movegen::moves_for(&self.board, from, self.active_side).jumps;
            return Ok(SelectionResult {
                square,
                moves: jumps,
            });
        }

        match self.selectable_moves(square) {
            Ok(moves) => {
                self.phase = Phase::PieceSelected(square);
                debug!(%square, options = moves.len(), "piece selected");
                Ok(SelectionResult { square, moves })
            }
            Err(fault) => Err(self.reject(square, fault)),
        }
    }

    /// Second half of the interactive protocol: move the selected piece.
    pub fn choose_destination(&mut self, to: Position) -> CheckersResult<MoveResult> {
        self.ensure_human_turn()?;

        let from = match self.phase {
            Phase::PieceSelected(from) | Phase::MustContinueJump(from) => from,
            _ => return Err(self.reject(to, SelectionFault::NothingSelected)),
        };
        self.play_step(Move::new(from, to))
    }

    /// One-click input: selects when nothing is selected, otherwise treats
    /// `square` as the destination.
    pub fn click(&mut self, square: Position) -> CheckersResult<ClickResult> {
        match self.phase {
            Phase::PieceSelected(_) | Phase::MustContinueJump(_) => {
                self.choose_destination(square).map(ClickResult::Moved)
            }
            _ => self.select(square).map(ClickResult::Selected),
        }
    }

    /// Plays a whole `(from, to)` step for the human side in one call.
    pub fn submit_move(&mut self, mv: Move) -> CheckersResult<MoveResult> {
        self.ensure_human_turn()?;
        self.play_step(mv)
    }

    /// Asks the selector for `side`'s next move without playing it.
    pub fn select_automated_move(&mut self, side: Side) -> CheckersResult<Move> {
        let continuing_from = match self.phase {
            Phase::MustContinueJump(from) if side == self.active_side => Some(from),
            _ => None,
        };
        self.selector
            .select_move(&self.board, side, continuing_from)
            .ok_or(CheckersError::NoLegalMove { side })
    }

    /// Plays one turn segment for the automated side. A capture chain takes
    /// one call per jump; the caller paces them.
    pub fn play_automated_step(&mut self) -> CheckersResult<MoveResult> {
        if let Phase::GameOver(winner) = self.phase {
            return Err(CheckersError::GameOver { winner });
        }
        let side = self.active_side;
        if self.config.automated_side != Some(side) {
            return Err(CheckersError::NotAutomatedTurn { side });
        }
        if let Phase::PieceSelected(_) = self.phase {
            self.phase = Phase::AwaitingSelection;
        }

        let mv = self.select_automated_move(side)?;
        if let Err(fault) = self.check_step(mv) {
            warn!(%mv, %fault, "selector proposed an illegal move");
            return Err(CheckersError::IllegalSelectorMove { mv });
        }
        self.execute(mv)
    }

    /// Runs automated segments until the turn passes or the game ends.
    pub fn play_automated_turn(&mut self) -> CheckersResult<Vec<MoveResult>> {
        let mut segments = Vec::new();
        loop {
            let result = self.play_automated_step()?;
            let done = !matches!(result, MoveResult::ContinueJump { .. });
            segments.push(result);
            if done {
                return Ok(segments);
            }
        }
    }

    pub fn undo(&mut self) -> CheckersResult<()> {
        let current = Snapshot::capture(&self.board, self.active_side);
        let previous = self.history.undo(current)?;
        self.restore(previous);
        Ok(())
    }

    pub fn redo(&mut self) -> CheckersResult<()> {
        let current = Snapshot::capture(&self.board, self.active_side);
        let next = self.history.redo(current)?;
        self.restore(next);
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn view(&self) -> GameView {
        let (light_count, dark_count) = self.board.count();
        GameView {
            board: self.board.to_array().to_vec(),
            active_side: self.active_side,
            phase: self.phase,
            outcome: self.outcome(),
            light_count,
            dark_count,
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        }
    }

    fn ensure_human_turn(&self) -> CheckersResult<()> {
        if let Phase::GameOver(winner) = self.phase {
            return Err(CheckersError::GameOver { winner });
        }
        if self.config.automated_side == Some(self.active_side) {
            return Err(CheckersError::AutomatedTurn {
                side: self.active_side,
            });
        }
        Ok(())
    }

    fn selectable_moves(&self, square: Position) -> Result<Vec<Move>, SelectionFault> {
        if !square.in_bounds() {
            return Err(SelectionFault::OutOfBounds);
        }
        let piece = self.board.get(square).ok_or(SelectionFault::EmptySquare)?;
        if piece.side != self.active_side {
            return Err(SelectionFault::WrongSide);
        }

        let moves = movegen::moves_for(&self.board, square, self.active_side);
        if moves.jumps.is_empty()
            && !movegen::mandatory_jumps(&self.board, self.active_side).is_empty()
        {
            return Err(SelectionFault::JumpRequired);
        }
        Ok(moves.playable().to_vec())
    }

    fn check_step(&self, mv: Move) -> Result<(), SelectionFault> {
        if !mv.from.in_bounds() || !mv.to.in_bounds() {
            return Err(SelectionFault::OutOfBounds);
        }
        let continuing_from = match self.phase {
            Phase::MustContinueJump(from) => Some(from),
            _ => None,
        };
        let legal = movegen::legal_moves(&self.board, self.active_side, continuing_from);
        if legal.contains(&mv) {
            return Ok(());
        }

        if continuing_from.is_some_and(|from| from != mv.from) {
            Err(SelectionFault::MustContinueJump)
        } else if !mv.is_jump() && legal.iter().any(|m| m.is_jump()) {
            Err(SelectionFault::JumpRequired)
        } else {
            Err(SelectionFault::NotALegalDestination)
        }
    }

    fn play_step(&mut self, mv: Move) -> CheckersResult<MoveResult> {
        if let Err(fault) = self.check_step(mv) {
            return Err(self.reject(mv.to, fault));
        }
        self.execute(mv)
    }

    /// Invalid input clears the selection, except that a pending jump
    /// continuation survives it.
    fn reject(&mut self, square: Position, fault: SelectionFault) -> CheckersError {
        if !matches!(self.phase, Phase::MustContinueJump(_)) {
            self.phase = Phase::AwaitingSelection;
        }
        debug!(%square, %fault, "input rejected");
        CheckersError::InvalidSelection { square, fault }
    }

    fn execute(&mut self, mv: Move) -> CheckersResult<MoveResult> {
        let before = Snapshot::capture(&self.board, self.active_side);
        let piece = rules::apply_move(&mut self.board, mv)?;
        self.history.record(before);
        debug!(side = %self.active_side, %mv, king = piece.king, "move applied");

        if mv.is_jump() {
            let jumps = movegen::moves_for(&self.board, mv.to, self.active_side).jumps;
            if !jumps.is_empty() {
                self.phase = Phase::MustContinueJump(mv.to);
                return Ok(MoveResult::ContinueJump {
                    mv,
                    at: mv.to,
                    jumps,
                });
            }
        }
        Ok(self.end_turn(mv))
    }

    fn end_turn(&mut self, mv: Move) -> MoveResult {
        self.active_side = self.active_side.opponent();
        match rules::evaluate_outcome(&self.board, self.active_side) {
            Outcome::Winner(winner) => {
                self.phase = Phase::GameOver(winner);
                info!(%winner, "game over");
                MoveResult::GameOver { mv, winner }
            }
            Outcome::Ongoing => {
                self.phase = Phase::AwaitingSelection;
                MoveResult::TurnEnded {
                    mv,
                    next: self.active_side,
                }
            }
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.board = snapshot.board;
        self.active_side = snapshot.active_side;
        self.phase = match self.outcome() {
            Outcome::Winner(winner) => Phase::GameOver(winner),
            Outcome::Ongoing => Phase::AwaitingSelection,
        };
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, active_side: Side) {
        self.board = board;
        self.active_side = active_side;
        self.phase = Phase::AwaitingSelection;
        self.history.clear();
    }
}
