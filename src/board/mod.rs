use std::fmt;
use std::hash::{Hash, Hasher};

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::location::Location;

mod history;

pub use history::History;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("no piece at {0}")]
    NoPieceAt(Location),

    #[error("not implemented: {0}")]
    Unimplemented(&'static str),
}

#[derive(Debug, PartialEq, Eq, EnumIter, Clone, Copy, Display, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        if self == Color::White {
            Color::Black
        } else {
            Color::White
        }
    }

    /// White starts on row 0 and advances toward row 7, Black the reverse.
    pub fn direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// The absolute row `x` rows in from this side's back rank.
    pub fn row(self, x: i8) -> i8 {
        match self {
            Color::White => x,
            Color::Black => 7 - x,
        }
    }
}

#[derive(Debug, PartialEq, Eq, EnumIter, Clone, Copy, Display, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    pub fn glyph(self, color: Color) -> char {
        let ch: char = self.into();
        match color {
            Color::White => ch.to_ascii_uppercase(),
            Color::Black => ch,
        }
    }
}

impl From<PieceKind> for char {
    fn from(kind: PieceKind) -> char {
        match kind {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub location: Location,
    pub move_count: u32,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, location: Location) -> Self {
        Self {
            kind,
            color,
            location,
            move_count: 0,
        }
    }

    pub fn glyph(&self) -> char {
        self.kind.glyph(self.color)
    }

    /// Maps `x` rows advanced from this piece's own back rank to an absolute board row,
    /// e.g. `row(1)` is 1 for White and 6 for Black.
    pub fn row(&self, x: i8) -> i8 {
        self.color.row(x)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} at {}", self.color, self.kind, self.location)
    }
}

/// A position: the pieces on the board, whose turn it is and the piece collections that came
/// before it.
///
/// Boards are never mutated once built. [`Board::make_move`] hands back a new board.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) turn: Color,
    pub(crate) pieces: Vec<Piece>,
    pub(crate) history: History,
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// The standard 32 piece opening layout with White to move.
    pub fn start() -> Self {
        let mut pieces = Vec::with_capacity(32);
        for color in Color::iter() {
            for (col, kind) in (0..8).zip(BACK_RANK) {
                pieces.push(Piece::new(kind, color, Location { row: color.row(0), col }));
                let pawn_row = color.row(1);
                pieces.push(Piece::new(PieceKind::Pawn, color, Location { row: pawn_row, col }));
            }
        }

        Self::from_pieces(Color::White, pieces)
    }

    pub fn empty(turn: Color) -> Self {
        Self::from_pieces(turn, Vec::new())
    }

    /// Builds a board from an arbitrary set of pieces. The position is not validated.
    pub fn from_pieces(turn: Color, pieces: Vec<Piece>) -> Self {
        Self {
            turn,
            pieces,
            history: History::new(),
        }
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn at_location(&self, location: Location) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.location == location)
    }

    pub fn is_empty_at(&self, location: Location) -> bool {
        self.at_location(location).is_none()
    }

    /// Relocates the piece at `start` to `end` on a copy of this board, capturing whatever
    /// stood on `end`. Geometry is not checked, that is up to each piece's move generator.
    pub fn make_move(&self, start: Location, end: Location) -> Result<Board, BoardError> {
        let mut pieces = self.pieces.clone();

        pieces.retain(|piece| piece.location != end);

        let moving = pieces
            .iter_mut()
            .find(|piece| piece.location == start)
            .ok_or(BoardError::NoPieceAt(start))?;
        moving.move_count += 1;
        moving.location = end;

        Ok(Board {
            turn: self.turn.opposite(),
            pieces,
            history: self.history.push(self.pieces.clone()),
        })
    }

    /// Independent copy of every piece. The history log is shared, not duplicated.
    pub fn copy(&self) -> Board {
        self.clone()
    }

    /// Whole-position legality checking.
    pub fn check_legal(&self) -> Result<(), BoardError> {
        Err(BoardError::Unimplemented("board legality check"))
    }

    pub(crate) fn remove_at(&mut self, location: Location) -> Option<Piece> {
        let idx = self.pieces.iter().position(|piece| piece.location == location)?;
        Some(self.pieces.swap_remove(idx))
    }

    /// One glyph per square, indexed by `Location::index`. Stacked pieces keep the greatest glyph
    /// so the result does not depend on piece order.
    fn grid(&self) -> [Option<char>; 64] {
        let mut grid: [Option<char>; 64] = [None; 64];
        for piece in &self.pieces {
            let glyph = piece.glyph();
            let square = &mut grid[piece.location.index()];
            *square = Some(square.map_or(glyph, |other| other.max(glyph)));
        }
        grid
    }

    fn count(&self, piece: &Piece) -> usize {
        self.pieces.iter().filter(|&p| p == piece).count()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.turn == other.turn
            && self.pieces.len() == other.pieces.len()
            && self
                .pieces
                .iter()
                .all(|piece| self.count(piece) == other.count(piece))
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.grid().hash(state);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.grid();
        for row in (0..8).rev() {
            let rank: String = grid[row * 8..row * 8 + 8]
                .iter()
                .map(|square| square.unwrap_or(' '))
                .collect();
            writeln!(f, "{} {}", row + 1, rank)?;
        }
        write!(f, "\n  abcdefgh")
    }
}
