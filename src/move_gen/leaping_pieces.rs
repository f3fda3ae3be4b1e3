use std::collections::HashSet;

use crate::board::{Board, Piece};

use super::{can_land, in_check, MoveGenError};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (1, -2),
    (2, 1),
    (2, -1),
    (-1, 2),
    (-1, -2),
    (-2, 1),
    (-2, -1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
];

pub(crate) fn gen_knight_moves(
    piece: &Piece,
    board: &Board,
) -> Result<HashSet<Board>, MoveGenError> {
    let mut moves = HashSet::new();
    for (d_row, d_col) in KNIGHT_OFFSETS {
        let Some(dest) = piece.location.offset(d_row, d_col) else {
            continue;
        };
        if can_land(piece, board, dest) {
            moves.insert(board.make_move(piece.location, dest)?);
        }
    }
    Ok(moves)
}

/// Single steps that do not leave the king in check. Castling is never generated.
pub(crate) fn gen_king_moves(piece: &Piece, board: &Board) -> Result<HashSet<Board>, MoveGenError> {
    let mut moves = HashSet::new();
    for (d_row, d_col) in KING_OFFSETS {
        let Some(dest) = piece.location.offset(d_row, d_col) else {
            continue;
        };
        if !can_land(piece, board, dest) {
            continue;
        }

        let new_board = board.make_move(piece.location, dest)?;
        let moved_king = new_board.at_location(dest).cloned();
        if let Some(king) = moved_king {
            if !in_check(&king, &new_board)? {
                moves.insert(new_board);
            }
        }
    }
    Ok(moves)
}
