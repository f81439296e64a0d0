//! Board square representation on a 0x88 grid.
//!
//! A square index packs the rank into bits 4-6 and the file into bits 0-2.
//! Bit 3 and bit 7 are never set for a playable square, so an index that
//! walked off the board is detected with a single `index & 0x88` test.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors that can occur when converting algebraic coordinates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SquareError {
    #[error("invalid coordinate: '{0}'")]
    InvalidCoordinate(String),
}

/// Defines one board axis: an enum of eight coordinates written with the
/// characters `$first..` in order.
macro_rules! board_axis {
    ($(#[$doc:meta])* $name:ident, $first:literal, [$($variant:ident),+]) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every coordinate on this axis, lowest first.
            pub const ALL: [$name; 8] = [$($name::$variant),+];

            /// Coordinate at `index` (0-7).
            #[inline]
            pub const fn from_index(index: u8) -> Option<Self> {
                if index < 8 {
                    Some(Self::ALL[index as usize])
                } else {
                    None
                }
            }

            /// Reads the coordinate from its character.
            #[inline]
            pub const fn from_char(c: char) -> Option<Self> {
                let c = c.to_ascii_lowercase() as u32;
                let first = $first as u32;
                if c >= first && c < first + 8 {
                    Self::from_index((c - first) as u8)
                } else {
                    None
                }
            }

            #[inline]
            pub const fn index(self) -> u8 {
                self as u8
            }

            #[inline]
            pub const fn to_char(self) -> char {
                ($first as u8 + self as u8) as char
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.to_char())
            }
        }
    };
}

board_axis!(
    /// A file (column), `a` to `h`.
    File,
    'a',
    [A, B, C, D, E, F, G, H]
);

board_axis!(
    /// A rank (row), `1` to `8`.
    Rank,
    '1',
    [R1, R2, R3, R4, R5, R6, R7, R8]
);

/// A playable square, stored as its 0x88 index.
///
/// - a1 = 0x00, b1 = 0x01, ..., h1 = 0x07
/// - a2 = 0x10, ..., h8 = 0x77
///
/// Every `Square` value refers to one of the 64 playable squares. Raw indices
/// only become squares through [`Square::from_index`] or [`Square::offset`],
/// both of which apply [`Square::is_valid_index`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Size of the index space, including the off-board half.
    pub const INDEX_SPACE: usize = 128;

    /// Returns true if `index` addresses a playable square.
    #[inline]
    pub const fn is_valid_index(index: i16) -> bool {
        index >= 0 && index < 128 && (index & 0x88) == 0
    }

    /// Creates a square from file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Square((rank.index() << 4) | file.index())
    }

    /// Creates a square from a 0x88 index, rejecting off-board indices.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if Self::is_valid_index(index as i16) {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Creates a square from an index already known to be on the board.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Self {
        debug_assert!(Self::is_valid_index(index as i16));
        Square(index)
    }

    /// Returns the square `delta` steps away on the 0x88 grid, if on the board.
    #[inline]
    pub const fn offset(self, delta: i8) -> Option<Self> {
        let target = self.0 as i16 + delta as i16;
        if Self::is_valid_index(target) {
            Some(Square(target as u8))
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = match File::from_char(bytes[0] as char) {
            Some(f) => f,
            None => return None,
        };
        let rank = match Rank::from_char(bytes[1] as char) {
            Some(r) => r,
            None => return None,
        };
        Some(Square::new(file, rank))
    }

    /// Returns the 0x88 index.
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the file of this square.
    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 & 7) as usize]
    }

    /// Returns the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 >> 4) as usize]
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file(), self.rank())
    }

    /// Iterates over all 64 squares, a1 first and h8 last.
    pub fn all() -> impl Iterator<Item = Square> {
        Rank::ALL
            .into_iter()
            .flat_map(|rank| File::ALL.into_iter().map(move |file| Square::new(file, rank)))
    }

    // Squares touched by castling
    pub const A1: Square = Square(0x00);
    pub const C1: Square = Square(0x02);
    pub const D1: Square = Square(0x03);
    pub const E1: Square = Square(0x04);
    pub const F1: Square = Square(0x05);
    pub const G1: Square = Square(0x06);
    pub const H1: Square = Square(0x07);
    pub const A8: Square = Square(0x70);
    pub const C8: Square = Square(0x72);
    pub const D8: Square = Square(0x73);
    pub const E8: Square = Square(0x74);
    pub const F8: Square = Square(0x75);
    pub const G8: Square = Square(0x76);
    pub const H8: Square = Square(0x77);
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s).ok_or_else(|| SquareError::InvalidCoordinate(s.to_string()))
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
