use std::collections::HashSet;

use tracing::trace;

use crate::board::{Board, BoardError, Piece, PieceKind};
use crate::location::{Location, LocationError};

pub mod check;
pub mod leaping_pieces;
pub mod pawn;
pub mod sliding_pieces;

pub use check::{in_check, side_in_check};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MoveGenError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Location(#[from] LocationError),

    #[error("en passant: expected a piece beside the pawn at {0}")]
    EnPassantNoPiece(Location),
}

/// Every board reachable by moving `piece` one ply on `board`.
pub fn legal_moves(piece: &Piece, board: &Board) -> Result<HashSet<Board>, MoveGenError> {
    let moves = match piece.kind {
        PieceKind::Pawn => pawn::gen_pawn_moves(piece, board)?,
        PieceKind::Knight => leaping_pieces::gen_knight_moves(piece, board)?,
        PieceKind::King => leaping_pieces::gen_king_moves(piece, board)?,
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            sliding_pieces::gen_sliding_moves(piece, board)?
        }
    };

    trace!(%piece, count = moves.len(), "generated legal moves");
    Ok(moves)
}

/// Every board reachable by the side to move in one ply.
pub fn successors(board: &Board) -> Result<HashSet<Board>, MoveGenError> {
    let mut boards = HashSet::new();
    for piece in board.pieces().iter().filter(|p| p.color == board.turn()) {
        boards.extend(legal_moves(piece, board)?);
    }
    Ok(boards)
}

impl Piece {
    pub fn legal_moves(&self, board: &Board) -> Result<HashSet<Board>, MoveGenError> {
        legal_moves(self, board)
    }
}

/// A destination is open to `piece` if it is empty or holds an opposing piece.
pub(crate) fn can_land(piece: &Piece, board: &Board, dest: Location) -> bool {
    board
        .at_location(dest)
        .map_or(true, |other| other.color != piece.color)
}
