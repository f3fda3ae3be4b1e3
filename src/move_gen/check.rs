use tracing::trace;

use crate::board::{Board, Color, Piece, PieceKind};

use super::{legal_moves, MoveGenError};

/// Whether `king` is attacked on `board`.
///
/// Every opposing piece other than a king has its moves generated, and the king counts as
/// attacked if any of the resulting boards no longer holds a piece of its color and kind.
/// Opposing kings are never asked for their moves, since those run this very check; instead
/// any opposing king touching `king` counts as an attack. Boards with zero or several kings
/// per side are fine.
pub fn in_check(king: &Piece, board: &Board) -> Result<bool, MoveGenError> {
    let opponents = board
        .pieces()
        .iter()
        .filter(|p| p.color != king.color && p.kind != PieceKind::King);

    let mut replies = Vec::new();
    for opponent in opponents {
        replies.extend(legal_moves(opponent, board)?);
    }

    let captured = replies.iter().any(|reply| {
        !reply
            .pieces()
            .iter()
            .any(|p| p.color == king.color && p.kind == king.kind)
    });
    if captured {
        trace!(%king, "capturable");
        return Ok(true);
    }

    let adjacent = board.pieces().iter().any(|p| {
        p.color != king.color
            && p.kind == PieceKind::King
            && p.location.chebyshev_distance(king.location) < 2
    });
    if adjacent {
        trace!(%king, "next to opposing king");
    }
    Ok(adjacent)
}

/// Whether any king of `color` is in check.
pub fn side_in_check(board: &Board, color: Color) -> Result<bool, MoveGenError> {
    for king in board
        .pieces()
        .iter()
        .filter(|p| p.color == color && p.kind == PieceKind::King)
    {
        if in_check(king, board)? {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;
    use test_case::test_case;
    use testresult::TestResult;

    fn loc(row: i8, col: i8) -> Location {
        Location::new(row, col).unwrap()
    }

    fn king(color: Color, row: i8, col: i8) -> Piece {
        Piece::new(PieceKind::King, color, loc(row, col))
    }

    #[test_case(loc(1, 1), true ; "diagonal")]
    #[test_case(loc(0, 1), true ; "beside")]
    #[test_case(loc(2, 2), false ; "two away")]
    #[test_case(loc(0, 2), false ; "knight jump away")]
    fn test_adjacent_kings(other: Location, want: bool) -> TestResult {
        let white = king(Color::White, 0, 0);
        let black = Piece::new(PieceKind::King, Color::Black, other);
        let board = Board::from_pieces(Color::White, vec![white.clone(), black]);

        assert_eq!(in_check(&white, &board)?, want);
        Ok(())
    }

    #[test_case(PieceKind::Rook, loc(7, 4), true ; "rook on file")]
    #[test_case(PieceKind::Bishop, loc(3, 7), true ; "bishop on diagonal")]
    #[test_case(PieceKind::Queen, loc(0, 0), true ; "queen on rank")]
    #[test_case(PieceKind::Knight, loc(2, 3), true ; "knight")]
    #[test_case(PieceKind::Pawn, loc(1, 3), true ; "pawn diagonal")]
    #[test_case(PieceKind::Pawn, loc(1, 4), false ; "pawn straight ahead")]
    #[test_case(PieceKind::Knight, loc(2, 4), false ; "knight elsewhere")]
    #[test_case(PieceKind::Bishop, loc(1, 4), false ; "bishop on file")]
    fn test_attacked_by(kind: PieceKind, from: Location, want: bool) -> TestResult {
        let white = king(Color::White, 0, 4);
        let board = Board::from_pieces(
            Color::White,
            vec![white.clone(), Piece::new(kind, Color::Black, from)],
        );

        assert_eq!(in_check(&white, &board)?, want);
        Ok(())
    }

    #[test]
    fn test_blocked_attack() -> TestResult {
        let white = king(Color::White, 0, 4);
        let board = Board::from_pieces(
            Color::White,
            vec![
                white.clone(),
                Piece::new(PieceKind::Rook, Color::Black, loc(7, 4)),
                Piece::new(PieceKind::Knight, Color::White, loc(3, 4)),
            ],
        );

        assert!(!in_check(&white, &board)?);
        Ok(())
    }

    #[test]
    fn test_own_pieces_do_not_attack() -> TestResult {
        let white = king(Color::White, 0, 4);
        let board = Board::from_pieces(
            Color::White,
            vec![white.clone(), Piece::new(PieceKind::Queen, Color::White, loc(5, 4))],
        );

        assert!(!in_check(&white, &board)?);
        Ok(())
    }

    #[test]
    fn test_no_kings_tolerated() -> TestResult {
        let board = Board::from_pieces(
            Color::White,
            vec![Piece::new(PieceKind::Rook, Color::Black, loc(7, 7))],
        );

        assert!(!side_in_check(&board, Color::White)?);
        Ok(())
    }

    #[test]
    fn test_two_kings_one_attacked() -> TestResult {
        let board = Board::from_pieces(
            Color::White,
            vec![
                king(Color::White, 0, 0),
                king(Color::White, 0, 7),
                Piece::new(PieceKind::Rook, Color::Black, loc(7, 7)),
            ],
        );

        // Capturing one king still leaves the other on the board.
        assert!(!side_in_check(&board, Color::White)?);
        Ok(())
    }

    #[test]
    fn test_start_position() -> TestResult {
        let board = Board::start();

        assert!(!side_in_check(&board, Color::White)?);
        assert!(!side_in_check(&board, Color::Black)?);
        Ok(())
    }
}
