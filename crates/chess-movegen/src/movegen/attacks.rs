//! Attack sets, derived from the generator run in attack mode.

use super::{generate, GenMode};
use crate::{Position, SquareSet};
use chess_core::{Color, Square};

/// Returns every square a piece of `by` could move onto if it were `by`'s
/// turn, counting pawn diagonals whether or not anything stands there.
///
/// Squares held by `by`'s own pieces are not included.
pub fn attacked_squares(position: &Position, by: Color) -> SquareSet {
    generate(position, by, GenMode::Attacks)
        .iter()
        .map(|m| m.to())
        .collect()
}

/// Returns the squares attacked by the opponent of the side to move.
pub fn attack_set(position: &Position) -> SquareSet {
    attacked_squares(position, position.side_to_move.opposite())
}

/// Returns true if the given square is attacked by the given color.
pub fn is_square_attacked(position: &Position, sq: Square, by: Color) -> bool {
    attacked_squares(position, by).contains(sq)
}

/// Returns true if the king of the given color is attacked.
///
/// A side without a king is never in check.
pub fn is_king_attacked(position: &Position, king_color: Color) -> bool {
    match position.king_square(king_color) {
        Some(king) => is_square_attacked(position, king, king_color.opposite()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn startpos_attack_set_is_black_third_rank() {
        let position = Position::startpos();
        let attacked = attack_set(&position);
        // Black attacks all of rank 6 and nothing beyond it.
        for file in "abcdefgh".chars() {
            assert!(attacked.contains(sq(&format!("{}6", file))));
            assert!(!attacked.contains(sq(&format!("{}5", file))));
        }
        assert_eq!(attacked.len(), 8);
    }

    #[test]
    fn attacks_exclude_own_pieces() {
        let position = Position::startpos();
        let white = attacked_squares(&position, Color::White);
        assert!(white.contains(sq("e3")));
        assert!(!white.contains(sq("e4")));
        assert!(!white.contains(sq("d1")));
    }

    #[test]
    fn sliders_attack_up_to_first_blocker() {
        let position = Position::from_fen("4k3/8/8/8/P7/8/8/R3K3 b - - 0 1").unwrap();
        let white = attacked_squares(&position, Color::White);
        assert!(white.contains(sq("a2")));
        assert!(white.contains(sq("a3")));
        assert!(!white.contains(sq("a4")));
        assert!(!white.contains(sq("a5")));
        assert!(!white.contains(sq("a6")));
        assert!(white.contains(sq("d1")));
        assert!(white.contains(sq("b5")));
    }

    #[test]
    fn king_attack_detection() {
        let position = Position::from_fen("4k3/8/8/8/8/8/8/4KR2 b - - 0 1").unwrap();
        assert!(!is_king_attacked(&position, Color::Black));
        let checked = Position::from_fen("4k3/8/8/8/8/8/8/4RK2 b - - 0 1").unwrap();
        assert!(is_king_attacked(&checked, Color::Black));
        assert!(!is_king_attacked(&Position::empty(), Color::White));
    }
}
