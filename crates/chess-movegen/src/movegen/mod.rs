//! Move generation.
//!
//! Pieces are walked along 0x88 direction deltas one step at a time. A step
//! that fails the `& 0x88` test has left the board and ends the ray, so no
//! edge tables are needed.
//!
//! The generator is pseudo-legal: it never checks whether a move leaves the
//! mover's own king attacked. [`legal_moves`] layers that test on top for
//! callers that need it.

mod attacks;
pub mod perft;

use crate::castling::CastleWing;
use crate::{make_move, Position, SquareSet};
use chess_core::{Color, Move, Piece, Promotion, Square};
use thiserror::Error;

pub use attacks::{attack_set, attacked_squares, is_king_attacked, is_square_attacked};

const KNIGHT_DIRECTIONS: [i8; 8] = [33, 31, 18, 14, -14, -18, -31, -33];
const BISHOP_DIRECTIONS: [i8; 4] = [15, 17, -15, -17];
const ROOK_DIRECTIONS: [i8; 4] = [1, 16, -1, -16];
const KING_DIRECTIONS: [i8; 8] = [1, 16, -1, -16, 15, 17, -15, -17];

/// Errors from resolving move text against a position.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("invalid UCI move: '{0}'")]
    InvalidUci(String),

    #[error("no generated move matches '{0}'")]
    NoMatchingMove(String),
}

/// What the generator is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenMode {
    /// Pseudo-legal moves, castling included.
    Moves,
    /// Squares attacked: pawn pushes and castling are left out and pawn
    /// diagonals are reported even when empty.
    Attacks,
}

/// A list of generated moves.
///
/// Backed by a `Vec`: pseudo-legal and attack lists of arbitrary decoded
/// positions have no useful upper bound.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Creates an empty move list.
    #[inline]
    pub fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(64),
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        self.moves.push(m);
    }

    /// Returns the number of moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Iterates over the moves.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Returns true if the list holds `m`.
    pub fn contains(&self, m: Move) -> bool {
        self.moves.contains(&m)
    }

    /// Clears the move list.
    #[inline]
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Retains only moves for which the predicate returns true.
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        self.moves.retain(f);
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Generates all pseudo-legal moves for the side to move.
///
/// Moves that leave the mover's king attacked are included; see
/// [`legal_moves`] for the filtered list.
pub fn generate_moves(position: &Position) -> MoveList {
    generate(position, position.side_to_move, GenMode::Moves)
}

/// Generates moves (or attacks) for `side`, whoever is to move.
///
/// The en passant target belongs to the side to move, so en passant
/// captures are only produced for that side.
///
/// Never fails: any position, however unreasonable, yields some list.
pub fn generate(position: &Position, side: Color, mode: GenMode) -> MoveList {
    let mut moves = MoveList::new();

    for (from, piece) in position.pieces_of(side) {
        if piece == Piece::Pawn {
            generate_pawn_moves(position, from, side, mode, &mut moves);
            continue;
        }

        let directions = directions(piece);
        if piece.is_slider() {
            generate_slides(position, from, side, directions, &mut moves);
        } else {
            generate_steps(position, from, side, directions, &mut moves);
        }

        if piece == Piece::King && mode == GenMode::Moves {
            generate_castling_moves(position, from, side, &mut moves);
        }
    }

    moves
}

/// Direction deltas for every piece except the pawn, whose moves depend on
/// its color.
const fn directions(piece: Piece) -> &'static [i8] {
    match piece {
        Piece::Knight => &KNIGHT_DIRECTIONS,
        Piece::Bishop => &BISHOP_DIRECTIONS,
        Piece::Rook => &ROOK_DIRECTIONS,
        Piece::Queen | Piece::King => &KING_DIRECTIONS,
        Piece::Pawn => &[],
    }
}

/// Generates moves filtered down to those that keep the mover's king safe.
pub fn legal_moves(position: &Position) -> MoveList {
    let us = position.side_to_move;
    let mut moves = generate_moves(position);
    moves.retain(|m| !is_king_attacked(&make_move(position, *m), us));
    moves
}

/// Resolves UCI text to the generated move carrying the right flag.
pub fn find_move(position: &Position, uci: &str) -> Result<Move, MoveError> {
    let wanted = Move::from_uci(uci).ok_or_else(|| MoveError::InvalidUci(uci.to_string()))?;
    generate_moves(position)
        .iter()
        .copied()
        .find(|m| {
            m.from() == wanted.from()
                && m.to() == wanted.to()
                && m.promotion_piece() == wanted.promotion_piece()
        })
        .ok_or_else(|| MoveError::NoMatchingMove(uci.to_string()))
}

/// Returns true if `sq` holds a piece of `side`.
#[inline]
fn is_own(position: &Position, sq: Square, side: Color) -> bool {
    matches!(position.piece_at(sq), Some((_, color)) if color == side)
}

/// Knight and king: one step per direction.
fn generate_steps(
    position: &Position,
    from: Square,
    side: Color,
    directions: &[i8],
    moves: &mut MoveList,
) {
    for &delta in directions {
        if let Some(to) = from.offset(delta) {
            if !is_own(position, to, side) {
                moves.push(Move::normal(from, to));
            }
        }
    }
}

/// Bishop, rook and queen: walk until the edge or the first piece, which is
/// included only when it belongs to the other side.
fn generate_slides(
    position: &Position,
    from: Square,
    side: Color,
    directions: &[i8],
    moves: &mut MoveList,
) {
    for &delta in directions {
        let mut current = from;
        while let Some(to) = current.offset(delta) {
            match position.piece_at(to) {
                Some((_, color)) if color == side => break,
                Some(_) => {
                    moves.push(Move::normal(from, to));
                    break;
                }
                None => {
                    moves.push(Move::normal(from, to));
                    current = to;
                }
            }
        }
    }
}

fn generate_pawn_moves(
    position: &Position,
    from: Square,
    side: Color,
    mode: GenMode,
    moves: &mut MoveList,
) {
    let push = side.pawn_push();

    if mode == GenMode::Moves {
        if let Some(one) = from.offset(push).filter(|&sq| position.is_empty(sq)) {
            push_pawn_move(from, one, side, moves);

            if from.rank() == side.pawn_home_rank() {
                if let Some(two) = one.offset(push).filter(|&sq| position.is_empty(sq)) {
                    moves.push(Move::normal(from, two));
                }
            }
        }
    }

    for delta in [push - 1, push + 1] {
        let Some(to) = from.offset(delta) else {
            continue;
        };
        match position.piece_at(to) {
            Some((_, color)) if color == side => {}
            Some(_) => push_pawn_move(from, to, side, moves),
            None if position.en_passant == Some(to) && side == position.side_to_move => {
                moves.push(Move::en_passant(from, to))
            }
            None if mode == GenMode::Attacks => push_pawn_move(from, to, side, moves),
            None => {}
        }
    }
}

/// Pushes a pawn move, expanded into one move per promotion piece when it
/// reaches the last rank.
fn push_pawn_move(from: Square, to: Square, side: Color, moves: &mut MoveList) {
    if to.rank() == side.promotion_rank() {
        for promotion in Promotion::ALL {
            moves.push(Move::promotion_to(from, to, promotion));
        }
    } else {
        moves.push(Move::normal(from, to));
    }
}

/// Generates castling moves for a king standing on `from`.
///
/// Uses the mover's own rights. The opponent's attack set is only computed
/// once a wing has passed the cheaper rights and emptiness checks.
fn generate_castling_moves(position: &Position, from: Square, side: Color, moves: &mut MoveList) {
    let rank = side.back_rank();
    if from != CastleWing::king_from(rank) {
        return;
    }

    let mut enemy_attacks: Option<SquareSet> = None;

    for wing in CastleWing::BOTH {
        if !position.castling.has(side, wing) {
            continue;
        }
        if position.piece_at(wing.rook_from(rank)) != Some((Piece::Rook, side)) {
            continue;
        }
        let path_clear = wing
            .between_files()
            .iter()
            .all(|&file| position.is_empty(Square::new(file, rank)));
        if !path_clear {
            continue;
        }

        let attacked =
            *enemy_attacks.get_or_insert_with(|| attacked_squares(position, side.opposite()));
        let king_path = wing.king_path_files().map(|file| Square::new(file, rank));
        if attacked.contains_any(&king_path) {
            tracing::trace!(?wing, "castling vetoed, king path attacked");
            continue;
        }

        moves.push(Move::castle(from, wing.king_to(rank)));
    }
}
