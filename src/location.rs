use std::fmt;

const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum LocationError {
    #[error("illegal location {0}, {1}")]
    InvalidLocation(i8, i8),
}

/// A square on the board. Row 0 is White's back rank, column 0 is the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    pub(crate) row: i8,
    pub(crate) col: i8,
}

impl Location {
    pub fn new(row: i8, col: i8) -> Result<Self, LocationError> {
        if Self::in_range(row, col) {
            Ok(Self { row, col })
        } else {
            Err(LocationError::InvalidLocation(row, col))
        }
    }

    pub fn in_range(row: i8, col: i8) -> bool {
        (0..8).contains(&row) && (0..8).contains(&col)
    }

    pub fn row(self) -> i8 {
        self.row
    }

    pub fn col(self) -> i8 {
        self.col
    }

    /// The location `d_row` rows and `d_col` columns away, if it is still on the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Location> {
        Location::new(self.row.checked_add(d_row)?, self.col.checked_add(d_col)?).ok()
    }

    pub(crate) fn chebyshev_distance(self, other: Location) -> i8 {
        (self.row - other.row).abs().max((self.col - other.col).abs())
    }

    pub(crate) fn index(self) -> usize {
        (self.row * 8 + self.col) as usize
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", FILES[self.col as usize], self.row + 1)
    }
}
