use crate::board::Board;
use crate::types::{Move, MoveSet, Piece, Position, Side};

const LIGHT_MAN_DIRECTIONS: [(i32, i32); 2] = [(-1, -1), (-1, 1)];
const DARK_MAN_DIRECTIONS: [(i32, i32); 2] = [(1, -1), (1, 1)];
const KING_DIRECTIONS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Diagonal directions available to `piece`: forward only for men.
pub fn directions(piece: Piece) -> &'static [(i32, i32)] {
    match (piece.king, piece.side) {
        (true, _) => &KING_DIRECTIONS,
        (false, Side::Light) => &LIGHT_MAN_DIRECTIONS,
        (false, Side::Dark) => &DARK_MAN_DIRECTIONS,
    }
}

/// Moves of the piece on `from`, whatever its side.
pub fn piece_moves(board: &Board, from: Position) -> MoveSet {
    let Some(piece) = board.get(from) else {
        return MoveSet::default();
    };

    let mut set = MoveSet::default();
    for &(d_row, d_col) in directions(piece) {
        let Some(step) = from.offset(d_row, d_col) else {
            continue;
        };
        if board.is_empty_at(step) {
            set.simples.push(Move::new(from, step));
            continue;
        }

        let Some(landing) = from.offset(2 * d_row, 2 * d_col) else {
            continue;
        };
        let over_opponent = board
            .get(step)
            .is_some_and(|jumped| jumped.side != piece.side);
        if over_opponent && board.is_empty_at(landing) {
            set.jumps.push(Move::new(from, landing));
        }
    }
    set
}

/// Moves of the piece on `from` if it belongs to `side`, else nothing.
pub fn moves_for(board: &Board, from: Position, side: Side) -> MoveSet {
    match board.get(from) {
        Some(piece) if piece.side == side => piece_moves(board, from),
        _ => MoveSet::default(),
    }
}

/// Every jump available to `side`, scanning squares in row-major order.
///
/// When non-empty, these are the only legal moves for `side` this turn.
pub fn mandatory_jumps(board: &Board, side: Side) -> Vec<Move> {
    board
        .pieces_of(side)
        .flat_map(|(pos, _)| piece_moves(board, pos).jumps)
        .collect()
}

/// Every non-capturing move available to `side`, row-major.
pub fn simple_moves(board: &Board, side: Side) -> Vec<Move> {
    board
        .pieces_of(side)
        .flat_map(|(pos, _)| piece_moves(board, pos).simples)
        .collect()
}

pub fn has_any_move(board: &Board, side: Side) -> bool {
    board
        .pieces_of(side)
        .any(|(pos, _)| !piece_moves(board, pos).is_empty())
}

/// Moves `side` may legally play: the pending continuation jumps when
/// `continuing_from` is set, otherwise the mandatory jumps or, failing
/// those, every simple move.
pub fn legal_moves(board: &Board, side: Side, continuing_from: Option<Position>) -> Vec<Move> {
    if let Some(from) = continuing_from {
        return moves_for(board, from, side).jumps;
    }
    let jumps = mandatory_jumps(board, side);
    if jumps.is_empty() {
        simple_moves(board, side)
    } else {
        jumps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn t01_initial_light_front_row_has_seven_simple_moves() {
        let board = Board::new();

        let simples = simple_moves(&board, Side::Light);

        assert_eq!(simples.len(), 7);
        assert!(simples.iter().all(|mv| mv.from.row == 5 && mv.to.row == 4));
        assert!(mandatory_jumps(&board, Side::Light).is_empty());
        assert!(simples.contains(&Move::new(pos(5, 0), pos(4, 1))));
    }

    #[test]
    fn t02_single_jump_over_adjacent_enemy() {
        let board = Board::with_pieces(&[
            (3, 3, Piece::man(Side::Light)),
            (2, 4, Piece::man(Side::Dark)),
        ]);

        let set = moves_for(&board, pos(3, 3), Side::Light);

        assert_eq!(set.jumps, vec![Move::new(pos(3, 3), pos(1, 5))]);
        assert_eq!(set.simples, vec![Move::new(pos(3, 3), pos(2, 2))]);
    }

    #[test]
    fn men_never_generate_backward_moves() {
        let board = Board::with_pieces(&[
            (4, 3, Piece::man(Side::Light)),
            (5, 4, Piece::man(Side::Dark)),
            (1, 2, Piece::man(Side::Dark)),
        ]);

        let light = piece_moves(&board, pos(4, 3));
        assert!(light.jumps.is_empty());
        assert!(light.simples.iter().all(|mv| mv.to.row < mv.from.row));

        let dark = piece_moves(&board, pos(1, 2));
        assert!(dark.simples.iter().all(|mv| mv.to.row > mv.from.row));
    }

    #[test]
    fn kings_move_and_jump_in_all_four_directions() {
        let board = Board::with_pieces(&[
            (4, 3, Piece::king(Side::Light)),
            (5, 4, Piece::man(Side::Dark)),
        ]);

        let set = piece_moves(&board, pos(4, 3));

        assert_eq!(set.jumps, vec![Move::new(pos(4, 3), pos(6, 5))]);
        assert_eq!(set.simples.len(), 3);
        assert!(set.simples.contains(&Move::new(pos(4, 3), pos(5, 2))));
    }

    #[test]
    fn jump_requires_empty_landing_and_enemy_in_between() {
        let blocked = Board::with_pieces(&[
            (3, 3, Piece::man(Side::Light)),
            (2, 4, Piece::man(Side::Dark)),
            (1, 5, Piece::man(Side::Dark)),
        ]);
        assert!(piece_moves(&blocked, pos(3, 3)).jumps.is_empty());

        let friendly = Board::with_pieces(&[
            (3, 3, Piece::man(Side::Light)),
            (2, 4, Piece::man(Side::Light)),
        ]);
        assert!(piece_moves(&friendly, pos(3, 3)).jumps.is_empty());

        let edge = Board::with_pieces(&[
            (1, 1, Piece::man(Side::Light)),
            (0, 0, Piece::man(Side::Dark)),
        ]);
        assert!(piece_moves(&edge, pos(1, 1)).jumps.is_empty());
    }

    #[test]
    fn moves_for_is_empty_for_wrong_side_or_empty_square() {
        let board = Board::new();

        assert!(moves_for(&board, pos(2, 1), Side::Light).is_empty());
        assert!(moves_for(&board, pos(3, 0), Side::Light).is_empty());
        assert!(!moves_for(&board, pos(2, 1), Side::Dark).is_empty());
    }

    #[test]
    fn mandatory_jumps_scan_row_major_and_exclude_simples() {
        let board = Board::with_pieces(&[
            (6, 1, Piece::man(Side::Light)),
            (5, 2, Piece::man(Side::Dark)),
            (3, 5, Piece::man(Side::Light)),
            (2, 4, Piece::man(Side::Dark)),
            (7, 6, Piece::man(Side::Light)),
        ]);

        let jumps = mandatory_jumps(&board, Side::Light);

        assert_eq!(
            jumps,
            vec![
                Move::new(pos(3, 5), pos(1, 3)),
                Move::new(pos(6, 1), pos(4, 3)),
            ]
        );
        assert_eq!(legal_moves(&board, Side::Light, None), jumps);
    }

    #[test]
    fn continuation_restricts_legal_moves_to_one_piece() {
        let board = Board::with_pieces(&[
            (6, 1, Piece::man(Side::Light)),
            (5, 2, Piece::man(Side::Dark)),
            (3, 5, Piece::man(Side::Light)),
            (2, 4, Piece::man(Side::Dark)),
        ]);

        let legal = legal_moves(&board, Side::Light, Some(pos(6, 1)));

        assert_eq!(legal, vec![Move::new(pos(6, 1), pos(4, 3))]);
    }

    #[test]
    fn has_any_move_detects_fully_blocked_side() {
        let board = Board::with_pieces(&[
            (0, 1, Piece::man(Side::Dark)),
            (1, 0, Piece::man(Side::Light)),
            (1, 2, Piece::man(Side::Light)),
            (2, 3, Piece::man(Side::Light)),
        ]);

        assert!(!has_any_move(&board, Side::Dark));
        assert!(has_any_move(&board, Side::Light));
        assert!(!has_any_move(&Board::empty(), Side::Light));
    }
}
