//! Packed move representation.

use crate::{Piece, Square};
use std::fmt;

/// Special-move flag stored in the low two bits of a [`Move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveFlag {
    /// Quiet move or ordinary capture.
    Normal = 0,
    /// Pawn reaching the last rank; the piece is given by [`Move::promotion`].
    Promotion = 1,
    /// Pawn capture onto the en passant target square.
    EnPassant = 2,
    /// King move of two files that also relocates the rook.
    Castle = 3,
}

impl MoveFlag {
    const ALL: [MoveFlag; 4] = [
        MoveFlag::Normal,
        MoveFlag::Promotion,
        MoveFlag::EnPassant,
        MoveFlag::Castle,
    ];
}

/// Piece selected by a promotion, stored in bits 2-3 of a [`Move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Promotion {
    Knight = 0,
    Bishop = 1,
    Rook = 2,
    Queen = 3,
}

impl Promotion {
    /// All promotion choices, in encoding order.
    pub const ALL: [Promotion; 4] = [
        Promotion::Knight,
        Promotion::Bishop,
        Promotion::Rook,
        Promotion::Queen,
    ];

    /// Returns the piece this promotion produces.
    #[inline]
    pub const fn piece(self) -> Piece {
        match self {
            Promotion::Knight => Piece::Knight,
            Promotion::Bishop => Piece::Bishop,
            Promotion::Rook => Piece::Rook,
            Promotion::Queen => Piece::Queen,
        }
    }

    /// Returns the UCI suffix letter.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Promotion::Knight => 'n',
            Promotion::Bishop => 'b',
            Promotion::Rook => 'r',
            Promotion::Queen => 'q',
        }
    }

    /// Parses a UCI suffix letter (either case).
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'n' => Some(Promotion::Knight),
            'b' => Some(Promotion::Bishop),
            'r' => Some(Promotion::Rook),
            'q' => Some(Promotion::Queen),
            _ => None,
        }
    }
}

/// A chess move packed into one integer.
///
/// Bit layout, high to low:
///
/// | bits  | field                         |
/// |-------|-------------------------------|
/// | 11-17 | from-square (0x88 index)      |
/// | 4-10  | to-square (0x88 index)        |
/// | 2-3   | [`Promotion`]                 |
/// | 0-1   | [`MoveFlag`]                  |
///
/// The promotion bits are only meaningful when the flag is
/// [`MoveFlag::Promotion`]. The codec does no chess validation: any
/// combination of on-board squares, promotion and flag is a valid `Move`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u32);

impl Move {
    const FROM_SHIFT: u32 = 11;
    const TO_SHIFT: u32 = 4;
    const PROMOTION_SHIFT: u32 = 2;
    const SQUARE_MASK: u32 = 0x7F;
    const FIELD_MASK: u32 = 0b11;
    const USED_BITS: u32 = (1 << 18) - 1;

    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square, promotion: Promotion, flag: MoveFlag) -> Self {
        Move(
            ((from.index() as u32) << Self::FROM_SHIFT)
                | ((to.index() as u32) << Self::TO_SHIFT)
                | ((promotion as u32) << Self::PROMOTION_SHIFT)
                | flag as u32,
        )
    }

    /// Creates a normal move (no special flags).
    #[inline]
    pub const fn normal(from: Square, to: Square) -> Self {
        Self::new(from, to, Promotion::Knight, MoveFlag::Normal)
    }

    /// Creates a promotion to the given piece.
    #[inline]
    pub const fn promotion_to(from: Square, to: Square, promotion: Promotion) -> Self {
        Self::new(from, to, promotion, MoveFlag::Promotion)
    }

    /// Creates an en passant capture landing on the target square `to`.
    #[inline]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Self::new(from, to, Promotion::Knight, MoveFlag::EnPassant)
    }

    /// Creates a castling move, expressed as the king's two-file step.
    #[inline]
    pub const fn castle(from: Square, to: Square) -> Self {
        Self::new(from, to, Promotion::Knight, MoveFlag::Castle)
    }

    /// Decodes a raw integer.
    ///
    /// Returns `None` if bits above the layout are set or either square field
    /// does not address a playable square.
    pub const fn from_raw(raw: u32) -> Option<Self> {
        if raw & !Self::USED_BITS != 0 {
            return None;
        }
        let from = ((raw >> Self::FROM_SHIFT) & Self::SQUARE_MASK) as i16;
        let to = ((raw >> Self::TO_SHIFT) & Self::SQUARE_MASK) as i16;
        if Square::is_valid_index(from) && Square::is_valid_index(to) {
            Some(Move(raw))
        } else {
            None
        }
    }

    /// Returns the packed integer.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        Square::from_index_unchecked(((self.0 >> Self::FROM_SHIFT) & Self::SQUARE_MASK) as u8)
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        Square::from_index_unchecked(((self.0 >> Self::TO_SHIFT) & Self::SQUARE_MASK) as u8)
    }

    /// Returns the promotion selector bits.
    #[inline]
    pub const fn promotion(self) -> Promotion {
        Promotion::ALL[((self.0 >> Self::PROMOTION_SHIFT) & Self::FIELD_MASK) as usize]
    }

    /// Returns the move flag.
    #[inline]
    pub const fn flag(self) -> MoveFlag {
        MoveFlag::ALL[(self.0 & Self::FIELD_MASK) as usize]
    }

    /// Returns the promoted-to piece if this is a promotion move.
    #[inline]
    pub const fn promotion_piece(self) -> Option<Piece> {
        match self.flag() {
            MoveFlag::Promotion => Some(self.promotion().piece()),
            _ => None,
        }
    }

    /// Returns the UCI notation for this move (e.g., "e2e4", "e7e8q").
    pub fn to_uci(self) -> String {
        match self.flag() {
            MoveFlag::Promotion => {
                format!("{}{}{}", self.from(), self.to(), self.promotion().to_char())
            }
            _ => format!("{}{}", self.from(), self.to()),
        }
    }

    /// Parses a move from UCI notation.
    ///
    /// Only promotions can be recognised from the text alone; en passant and
    /// castling flags have to be resolved against a position.
    pub fn from_uci(s: &str) -> Option<Self> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return None;
        }
        let from = Square::from_algebraic(&s[0..2])?;
        let to = Square::from_algebraic(&s[2..4])?;
        match s[4..].chars().next() {
            Some(c) => Some(Move::promotion_to(from, to, Promotion::from_char(c)?)),
            None => Some(Move::normal(from, to)),
        }
    }

    /// A null move (used as placeholder, not a legal move).
    pub const NULL: Move = Move(0);
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}, {:?})", self.to_uci(), self.flag())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}
