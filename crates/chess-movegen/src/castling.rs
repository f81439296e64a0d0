//! Castling rights and castling geometry.

use chess_core::{Color, File, Rank, Square};

/// Castling rights, one two-bit field per color.
///
/// Bit 0 of a field is the kingside right, bit 1 the queenside right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct CastlingRights([u8; 2]);

impl CastlingRights {
    pub const KINGSIDE: u8 = 0b01;
    pub const QUEENSIDE: u8 = 0b10;
    pub const NONE: CastlingRights = CastlingRights([0, 0]);
    pub const ALL: CastlingRights = CastlingRights([0b11, 0b11]);

    /// Creates rights from the white and black fields.
    #[inline]
    pub const fn new(white: u8, black: u8) -> Self {
        CastlingRights([white & 0b11, black & 0b11])
    }

    /// Returns the raw two-bit field of a color.
    #[inline]
    pub const fn bits(self, color: Color) -> u8 {
        self.0[color.index()]
    }

    /// Returns true if no side may castle.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0[0] == 0 && self.0[1] == 0
    }

    /// Returns true if `color` still holds the right for `wing`.
    #[inline]
    pub const fn has(self, color: Color, wing: CastleWing) -> bool {
        self.0[color.index()] & wing.bit() != 0
    }

    /// Returns true if the given side can castle kingside.
    #[inline]
    pub const fn can_castle_kingside(self, color: Color) -> bool {
        self.has(color, CastleWing::Kingside)
    }

    /// Returns true if the given side can castle queenside.
    #[inline]
    pub const fn can_castle_queenside(self, color: Color) -> bool {
        self.has(color, CastleWing::Queenside)
    }

    /// Grants `color` the right for `wing`.
    #[inline]
    pub fn grant(&mut self, color: Color, wing: CastleWing) {
        self.0[color.index()] |= wing.bit();
    }

    /// Removes the right of `color` for `wing`.
    #[inline]
    pub fn remove(&mut self, color: Color, wing: CastleWing) {
        self.0[color.index()] &= !wing.bit();
    }

    /// Removes castling rights for a color.
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.0[color.index()] = 0;
    }

    /// Clears whatever rights depend on a piece standing on `sq`.
    ///
    /// A king home square forfeits both rights of that color, a rook corner
    /// the right of that wing. Called for both ends of every move, so a king
    /// or rook moving away and a rook being captured are all covered.
    pub fn clear_for_square(&mut self, sq: Square) {
        for color in [Color::White, Color::Black] {
            if sq.rank() != color.back_rank() {
                continue;
            }
            match sq.file() {
                File::E => self.remove_color(color),
                File::H => self.remove(color, CastleWing::Kingside),
                File::A => self.remove(color, CastleWing::Queenside),
                _ => {}
            }
        }
    }

    /// Writes the FEN castling field: `KQkq` order, `-` when empty.
    pub fn to_fen(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }
        let mut field = String::with_capacity(4);
        for color in [Color::White, Color::Black] {
            for wing in CastleWing::BOTH {
                if self.has(color, wing) {
                    field.push(wing.fen_char(color));
                }
            }
        }
        field
    }

    /// Reads the FEN castling field. Unknown letters are ignored.
    pub fn from_fen(field: &str) -> Self {
        let mut rights = CastlingRights::NONE;
        for c in field.chars() {
            match c {
                'K' => rights.grant(Color::White, CastleWing::Kingside),
                'Q' => rights.grant(Color::White, CastleWing::Queenside),
                'k' => rights.grant(Color::Black, CastleWing::Kingside),
                'q' => rights.grant(Color::Black, CastleWing::Queenside),
                _ => {}
            }
        }
        rights
    }
}

/// One side of the board a king can castle towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleWing {
    Kingside,
    Queenside,
}

impl CastleWing {
    pub const BOTH: [CastleWing; 2] = [CastleWing::Kingside, CastleWing::Queenside];

    #[inline]
    const fn bit(self) -> u8 {
        match self {
            CastleWing::Kingside => CastlingRights::KINGSIDE,
            CastleWing::Queenside => CastlingRights::QUEENSIDE,
        }
    }

    const fn fen_char(self, color: Color) -> char {
        match (color, self) {
            (Color::White, CastleWing::Kingside) => 'K',
            (Color::White, CastleWing::Queenside) => 'Q',
            (Color::Black, CastleWing::Kingside) => 'k',
            (Color::Black, CastleWing::Queenside) => 'q',
        }
    }

    /// Identifies the wing from the king's destination square.
    pub const fn from_king_destination(to: Square) -> Option<Self> {
        match to.file() {
            File::G => Some(CastleWing::Kingside),
            File::C => Some(CastleWing::Queenside),
            _ => None,
        }
    }

    /// The king's home square on `rank`.
    #[inline]
    pub const fn king_from(rank: Rank) -> Square {
        Square::new(File::E, rank)
    }

    /// Where the king lands.
    #[inline]
    pub const fn king_to(self, rank: Rank) -> Square {
        match self {
            CastleWing::Kingside => Square::new(File::G, rank),
            CastleWing::Queenside => Square::new(File::C, rank),
        }
    }

    /// The rook's corner square.
    #[inline]
    pub const fn rook_from(self, rank: Rank) -> Square {
        match self {
            CastleWing::Kingside => Square::new(File::H, rank),
            CastleWing::Queenside => Square::new(File::A, rank),
        }
    }

    /// Where the rook lands, next to the king on the inner side.
    #[inline]
    pub const fn rook_to(self, rank: Rank) -> Square {
        match self {
            CastleWing::Kingside => Square::new(File::F, rank),
            CastleWing::Queenside => Square::new(File::D, rank),
        }
    }

    /// Files that must be empty between king and rook.
    pub const fn between_files(self) -> &'static [File] {
        match self {
            CastleWing::Kingside => &[File::F, File::G],
            CastleWing::Queenside => &[File::B, File::C, File::D],
        }
    }

    /// Files the king starts on, crosses, and lands on; none may be attacked.
    pub const fn king_path_files(self) -> [File; 3] {
        match self {
            CastleWing::Kingside => [File::E, File::F, File::G],
            CastleWing::Queenside => [File::E, File::D, File::C],
        }
    }
}
