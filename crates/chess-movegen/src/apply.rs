//! Applying moves to positions.

use crate::castling::CastleWing;
use crate::Position;
use chess_core::{Color, Move, MoveFlag, Piece, Square};

/// Makes a move and returns the new position. `position` is left untouched.
///
/// The move is trusted: nothing checks that it is legal, or even that a
/// piece stands on its source square. Feed it moves from the generator.
pub fn make_move(position: &Position, m: Move) -> Position {
    let mut next = position.clone();
    next.apply_in_place(m);
    next
}

impl Position {
    /// Applies a move to this position in place.
    ///
    /// Same semantics as [`make_move`]; use it only when no one else needs
    /// the position as it was.
    pub fn apply_in_place(&mut self, m: Move) {
        let us = self.side_to_move;
        let from = m.from();
        let to = m.to();
        let moving = self.piece_at(from);

        let is_capture = match moving {
            Some(piece) => self.move_piece(m, piece),
            None => false,
        };

        if m.flag() == MoveFlag::Castle {
            self.castling.remove_color(us);
        }
        self.castling.clear_for_square(from);
        self.castling.clear_for_square(to);

        let is_pawn = matches!(moving, Some((Piece::Pawn, _)));
        self.en_passant = if is_pawn && from.rank().index().abs_diff(to.rank().index()) == 2 {
            Square::from_index((from.index() + to.index()) / 2)
        } else {
            None
        };

        if is_pawn || is_capture {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        self.side_to_move = us.opposite();
        if self.side_to_move == Color::White {
            self.fullmove_number += 1;
        }
    }

    /// Moves the piece and applies the board side of the move flag.
    /// Returns true if something was captured.
    fn move_piece(&mut self, m: Move, (piece, color): (Piece, Color)) -> bool {
        let from = m.from();
        let to = m.to();
        let mut is_capture = self.piece_at(to).is_some();

        self.set_piece(from, None);
        self.set_piece(to, Some((piece, color)));

        match m.flag() {
            MoveFlag::Normal => {}
            MoveFlag::Promotion => {
                self.set_piece(to, Some((m.promotion().piece(), color)));
            }
            MoveFlag::EnPassant => {
                // The passed pawn sits one rank behind the landing square.
                if let Some(victim) = to.offset(-color.pawn_push()) {
                    self.set_piece(victim, None);
                }
                is_capture = true;
            }
            MoveFlag::Castle => {
                if let Some(wing) = CastleWing::from_king_destination(to) {
                    let rook_from = wing.rook_from(to.rank());
                    let rook = self.piece_at(rook_from);
                    self.set_piece(rook_from, None);
                    self.set_piece(wing.rook_to(to.rank()), rook);
                }
            }
        }

        is_capture
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CastlingRights;
    use chess_core::Promotion;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn make_move_pawn_double_push() {
        let position = Position::startpos();
        let new_pos = make_move(&position, Move::normal(sq("e2"), sq("e4")));
        assert_eq!(new_pos.side_to_move, Color::Black);
        assert_eq!(new_pos.piece_at(sq("e4")), Some((Piece::Pawn, Color::White)));
        assert!(new_pos.is_empty(sq("e2")));
        assert_eq!(new_pos.en_passant, Some(sq("e3")));
        assert_eq!(new_pos.fullmove_number, 1);
        assert_eq!(
            new_pos.to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
    }

    #[test]
    fn make_move_leaves_parent_alone() {
        let position = Position::startpos();
        let before = position.clone();
        let _ = make_move(&position, Move::normal(sq("g1"), sq("f3")));
        assert_eq!(position, before);
    }

    #[test]
    fn single_push_clears_en_passant() {
        let position =
            Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
                .unwrap();
        let new_pos = make_move(&position, Move::normal(sq("d7"), sq("d6")));
        assert_eq!(new_pos.en_passant, None);
        assert_eq!(new_pos.fullmove_number, 2);
    }

    #[test]
    fn black_double_push_sets_target_behind() {
        let position =
            Position::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
                .unwrap();
        let new_pos = make_move(&position, Move::normal(sq("c7"), sq("c5")));
        assert_eq!(new_pos.en_passant, Some(sq("c6")));
    }

    #[test]
    fn halfmove_clock_resets_on_pawn_moves_and_captures() {
        let position = Position::from_fen("4k3/8/8/3p4/8/8/4P3/4K1N1 w - - 7 20").unwrap();

        let knight = make_move(&position, Move::normal(sq("g1"), sq("f3")));
        assert_eq!(knight.halfmove_clock, 8);

        let pawn = make_move(&position, Move::normal(sq("e2"), sq("e3")));
        assert_eq!(pawn.halfmove_clock, 0);

        let capture_setup = Position::from_fen("4k3/8/8/3p4/8/4N3/8/4K3 w - - 7 20").unwrap();
        let capture = make_move(&capture_setup, Move::normal(sq("e3"), sq("d5")));
        assert_eq!(capture.halfmove_clock, 0);
    }

    #[test]
    fn promotion_keeps_color() {
        let position = Position::from_fen("7k/8/8/8/8/8/p7/4K3 b - - 0 1").unwrap();
        let new_pos = make_move(&position, Move::promotion_to(sq("a2"), sq("a1"), Promotion::Knight));
        assert_eq!(new_pos.piece_at(sq("a1")), Some((Piece::Knight, Color::Black)));
        assert!(new_pos.is_empty(sq("a2")));
        assert_eq!(new_pos.fullmove_number, 2);
    }

    #[test]
    fn castle_moves_rook_and_clears_rights() {
        let position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 3 10").unwrap();
        let new_pos = make_move(&position, Move::castle(Square::E8, Square::C8));
        assert_eq!(new_pos.piece_at(Square::C8), Some((Piece::King, Color::Black)));
        assert_eq!(new_pos.piece_at(Square::D8), Some((Piece::Rook, Color::Black)));
        assert!(new_pos.is_empty(Square::A8));
        assert!(new_pos.is_empty(Square::E8));
        assert_eq!(new_pos.castling.bits(Color::Black), 0);
        assert_eq!(new_pos.castling.bits(Color::White), 0b11);
        assert_eq!(new_pos.halfmove_clock, 4);
    }

    #[test]
    fn king_move_clears_own_rights_only() {
        let position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").unwrap();
        let new_pos = make_move(&position, Move::normal(Square::E8, sq("e7")));
        assert_eq!(new_pos.castling, CastlingRights::new(0b11, 0));

        let white = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let new_pos = make_move(&white, Move::normal(Square::E1, sq("d2")));
        assert_eq!(new_pos.castling, CastlingRights::new(0, 0b11));
    }

    #[test]
    fn rook_move_and_rook_capture_clear_one_wing() {
        let position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let rook_move = make_move(&position, Move::normal(Square::H1, sq("h5")));
        assert_eq!(rook_move.castling.to_fen(), "Qkq");

        let capture = make_move(&position, Move::normal(Square::A1, Square::A8));
        assert_eq!(capture.castling.to_fen(), "Kk");
    }

    #[test]
    fn empty_source_only_updates_bookkeeping() {
        let position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 4 9").unwrap();
        let new_pos = make_move(&position, Move::normal(sq("d4"), Square::H8));
        assert_eq!(new_pos.piece_at(Square::H8), Some((Piece::Rook, Color::Black)));
        assert_eq!(new_pos.castling.to_fen(), "KQq");
        assert_eq!(new_pos.side_to_move, Color::Black);
        assert_eq!(new_pos.halfmove_clock, 5);
    }

    #[test]
    fn apply_in_place_matches_make_move() {
        let position = Position::startpos();
        let m = Move::normal(sq("b1"), sq("c3"));
        let mut in_place = position.clone();
        in_place.apply_in_place(m);
        assert_eq!(in_place, make_move(&position, m));
    }
}
