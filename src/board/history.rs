use std::sync::Arc;

use super::Piece;

#[derive(Debug)]
struct Entry {
    pieces: Vec<Piece>,
    prev: Option<Arc<Entry>>,
}

/// Append-only log of the piece collections a board has passed through.
///
/// Entries are shared between every board descended from the same position, so copying a
/// board or extending its history never copies earlier entries.
#[derive(Clone, Debug, Default)]
pub struct History {
    head: Option<Arc<Entry>>,
    len: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new history with `pieces` appended, leaving `self` untouched.
    pub fn push(&self, pieces: Vec<Piece>) -> History {
        History {
            head: Some(Arc::new(Entry {
                pieces,
                prev: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The most recently appended piece collection.
    pub fn last(&self) -> Option<&[Piece]> {
        self.head.as_deref().map(|entry| entry.pieces.as_slice())
    }

    /// Iterates from the most recent entry back to the oldest.
    pub fn iter(&self) -> impl Iterator<Item = &[Piece]> {
        std::iter::successors(self.head.as_deref(), |entry| entry.prev.as_deref())
            .map(|entry| entry.pieces.as_slice())
    }

    #[cfg(test)]
    pub(crate) fn shares_head_with(&self, other: &History) -> bool {
        match (&self.head, &other.head) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}
