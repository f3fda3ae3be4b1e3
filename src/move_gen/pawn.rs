use std::collections::HashSet;

use crate::board::{Board, Piece, PieceKind};
use crate::location::Location;

use super::MoveGenError;

/// What a pawn reaching its final row may become. Staying a pawn is one of the choices.
pub const PROMOTIONS: [PieceKind; 5] = [
    PieceKind::Pawn,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Queen,
];

/// Pawn moves, written in rows relative to the pawn's own side via [`Piece::row`].
///
/// En passant reads the square beside the pawn without checking it first: an empty square
/// yields [`MoveGenError::EnPassantNoPiece`] and an off-board one [`MoveGenError::Location`].
pub(crate) fn gen_pawn_moves(piece: &Piece, board: &Board) -> Result<HashSet<Board>, MoveGenError> {
    let mut moves = HashSet::new();
    let from = piece.location;
    let col = from.col();

    // Double step from the starting row
    if from.row() == piece.row(1)
        && board.is_empty_at(Location::new(piece.row(2), col)?)
        && board.is_empty_at(Location::new(piece.row(3), col)?)
    {
        moves.insert(board.make_move(from, Location::new(piece.row(3), col)?)?);
    }

    let row = from.row() + piece.color.direction();

    if let Ok(dest) = Location::new(row, col) {
        if board.is_empty_at(dest) {
            moves.extend(advance(piece, board, dest)?);
        }
    }

    for d_col in [-1, 1] {
        let col = from.col() + d_col;

        if let Ok(dest) = Location::new(row, col) {
            let capturable = board
                .at_location(dest)
                .is_some_and(|other| other.color != piece.color);
            if capturable {
                moves.extend(advance(piece, board, dest)?);
            }
        }

        if from.row() == piece.row(4) {
            if let Some(taken) = en_passant(piece, board, row, col)? {
                moves.insert(taken);
            }
        }
    }

    Ok(moves)
}

/// A plain move, or the promotion fan-out when `dest` is on the pawn's final row.
fn advance(piece: &Piece, board: &Board, dest: Location) -> Result<Vec<Board>, MoveGenError> {
    if dest.row() == piece.row(7) {
        pawn_upgrade(piece, board, dest)
    } else {
        Ok(vec![board.make_move(piece.location, dest)?])
    }
}

/// One board per [`PROMOTIONS`] entry, each with a fresh piece of that kind on `dest`.
pub(crate) fn pawn_upgrade(
    piece: &Piece,
    board: &Board,
    dest: Location,
) -> Result<Vec<Board>, MoveGenError> {
    PROMOTIONS
        .iter()
        .map(|&kind| -> Result<Board, MoveGenError> {
            let mut new_board = board.make_move(piece.location, dest)?;
            new_board.remove_at(dest);
            new_board.pieces.push(Piece::new(kind, piece.color, dest));
            Ok(new_board)
        })
        .collect()
}

fn en_passant(
    piece: &Piece,
    board: &Board,
    row: i8,
    col: i8,
) -> Result<Option<Board>, MoveGenError> {
    let beside = Location::new(piece.location.row(), col)?;
    let passed = board
        .at_location(beside)
        .ok_or(MoveGenError::EnPassantNoPiece(beside))?;

    if passed.kind != PieceKind::Pawn || passed.color == piece.color || passed.move_count != 1 {
        return Ok(None);
    }

    let mut new_board = board.make_move(piece.location, Location::new(row, col)?)?;
    new_board.remove_at(beside);
    Ok(Some(new_board))
}
