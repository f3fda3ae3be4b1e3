use std::collections::HashSet;

use crate::board::{Board, Piece, PieceKind};

use super::MoveGenError;

const ORTHOGONALS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

fn directions(kind: PieceKind) -> &'static [(i8, i8)] {
    const QUEEN: [(i8, i8); 8] = [
        ORTHOGONALS[0],
        ORTHOGONALS[1],
        ORTHOGONALS[2],
        ORTHOGONALS[3],
        DIAGONALS[0],
        DIAGONALS[1],
        DIAGONALS[2],
        DIAGONALS[3],
    ];

    match kind {
        PieceKind::Rook => &ORTHOGONALS,
        PieceKind::Bishop => &DIAGONALS,
        PieceKind::Queen => &QUEEN,
        PieceKind::Pawn | PieceKind::Knight | PieceKind::King => &[],
    }
}

/// Casts a ray from the piece along each of its directions. Empty squares are destinations,
/// the first occupied square ends the ray and is a destination only if it can be captured.
pub(crate) fn gen_sliding_moves(
    piece: &Piece,
    board: &Board,
) -> Result<HashSet<Board>, MoveGenError> {
    let mut moves = HashSet::new();
    for &(d_row, d_col) in directions(piece.kind) {
        let mut next = piece.location.offset(d_row, d_col);
        while let Some(dest) = next {
            match board.at_location(dest) {
                None => {
                    moves.insert(board.make_move(piece.location, dest)?);
                    next = dest.offset(d_row, d_col);
                }
                Some(blocker) => {
                    if blocker.color != piece.color {
                        moves.insert(board.make_move(piece.location, dest)?);
                    }
                    break;
                }
            }
        }
    }
    Ok(moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;
    use crate::location::Location;
    use test_case::test_case;
    use testresult::TestResult;

    fn loc(row: i8, col: i8) -> Location {
        Location::new(row, col).unwrap()
    }

    fn destinations(moves: &HashSet<Board>, kind: PieceKind, color: Color) -> HashSet<Location> {
        moves
            .iter()
            .flat_map(|b| {
                b.pieces()
                    .iter()
                    .filter(|p| p.kind == kind && p.color == color)
                    .map(|p| p.location)
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    #[test_case(PieceKind::Rook, loc(3, 3), 14 ; "rook center")]
    #[test_case(PieceKind::Bishop, loc(3, 3), 13 ; "bishop center")]
    #[test_case(PieceKind::Queen, loc(3, 3), 27 ; "queen center")]
    #[test_case(PieceKind::Rook, loc(0, 0), 14 ; "rook corner")]
    #[test_case(PieceKind::Bishop, loc(0, 0), 7 ; "bishop corner")]
    #[test_case(PieceKind::Queen, loc(0, 0), 21 ; "queen corner")]
    fn test_empty_board(kind: PieceKind, from: Location, want: usize) -> TestResult {
        let piece = Piece::new(kind, Color::White, from);
        let board = Board::from_pieces(Color::White, vec![piece.clone()]);

        assert_eq!(gen_sliding_moves(&piece, &board)?.len(), want);
        Ok(())
    }

    #[test]
    fn test_rook_covers_rank_and_file() -> TestResult {
        let rook = Piece::new(PieceKind::Rook, Color::Black, loc(3, 3));
        let board = Board::from_pieces(Color::Black, vec![rook.clone()]);

        let got = destinations(&gen_sliding_moves(&rook, &board)?, PieceKind::Rook, Color::Black);

        let want: HashSet<Location> = (0..8)
            .filter(|&i| i != 3)
            .flat_map(|i| [loc(3, i), loc(i, 3)])
            .collect();
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn test_ray_stops_at_first_piece() -> TestResult {
        let rook = Piece::new(PieceKind::Rook, Color::White, loc(0, 0));
        let own = Piece::new(PieceKind::Pawn, Color::White, loc(0, 3));
        let enemy = Piece::new(PieceKind::Knight, Color::Black, loc(4, 0));
        let beyond = Piece::new(PieceKind::Knight, Color::Black, loc(6, 0));
        let board = Board::from_pieces(Color::White, vec![rook.clone(), own, enemy, beyond]);

        let moves = gen_sliding_moves(&rook, &board)?;
        let got = destinations(&moves, PieceKind::Rook, Color::White);

        let want = HashSet::from([
            loc(0, 1),
            loc(0, 2),
            loc(1, 0),
            loc(2, 0),
            loc(3, 0),
            loc(4, 0),
        ]);
        assert_eq!(got, want);

        let capture = moves
            .iter()
            .find(|b| b.at_location(loc(4, 0)).map(|p| p.kind) == Some(PieceKind::Rook))
            .expect("capture on (4, 0)");
        assert_eq!(capture.pieces().len(), 3);
        Ok(())
    }

    #[test]
    fn test_bishop_blocked_diagonals() -> TestResult {
        let bishop = Piece::new(PieceKind::Bishop, Color::Black, loc(3, 3));
        let board = Board::from_pieces(
            Color::Black,
            vec![
                bishop.clone(),
                Piece::new(PieceKind::Pawn, Color::Black, loc(4, 4)),
                Piece::new(PieceKind::Pawn, Color::White, loc(2, 2)),
                Piece::new(PieceKind::Pawn, Color::Black, loc(4, 2)),
                Piece::new(PieceKind::Pawn, Color::White, loc(1, 5)),
            ],
        );

        let got = destinations(
            &gen_sliding_moves(&bishop, &board)?,
            PieceKind::Bishop,
            Color::Black,
        );

        assert_eq!(got, HashSet::from([loc(2, 2), loc(2, 4), loc(1, 5)]));
        Ok(())
    }

    #[test]
    fn test_start_position_sliders_have_no_moves() -> TestResult {
        let board = Board::start();
        for piece in board.pieces().iter().filter(|p| {
            matches!(p.kind, PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen)
        }) {
            assert!(gen_sliding_moves(piece, &board)?.is_empty(), "{}", piece);
        }
        Ok(())
    }
}
