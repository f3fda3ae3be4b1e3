pub mod board;
pub mod location;
pub mod move_gen;
pub mod perft;

pub use board::{Board, BoardError, Color, History, Piece, PieceKind};
pub use location::{Location, LocationError};
pub use move_gen::{in_check, legal_moves, side_in_check, successors, MoveGenError};
pub use perft::{perft, PerftDepthResult, PerftResult};
