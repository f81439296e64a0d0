//! Piece kinds and their text forms.

use crate::Color;

/// The six kinds of chess piece. Color is carried separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Piece {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

/// Glyph drawn for an empty square.
pub const EMPTY_SYMBOL: char = '·';

// Tables indexed by `Piece::index`.
const FEN_CHARS: [char; 6] = ['p', 'n', 'b', 'r', 'q', 'k'];
const NAMES: [&str; 6] = ["pawn", "knight", "bishop", "rook", "queen", "king"];
// Solid glyphs for white, outlined for black: reads right on a dark terminal.
const SYMBOLS: [[char; 6]; 2] = [
    ['♟', '♞', '♝', '♜', '♛', '♚'],
    ['♙', '♘', '♗', '♖', '♕', '♔'],
];

impl Piece {
    /// Every piece kind, pawn first.
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// FEN letter: uppercase for white, lowercase for black.
    pub const fn to_fen_char(self, color: Color) -> char {
        let c = FEN_CHARS[self.index()];
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Reads a FEN letter back into a piece and its color.
    pub fn from_fen_char(c: char) -> Option<(Piece, Color)> {
        let lower = c.to_ascii_lowercase();
        let piece = Self::ALL
            .into_iter()
            .find(|p| FEN_CHARS[p.index()] == lower)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some((piece, color))
    }

    /// Unicode glyph used when drawing the board.
    pub const fn symbol(self, color: Color) -> char {
        SYMBOLS[color.index()][self.index()]
    }

    /// Bishops, rooks and queens keep moving along a ray until blocked.
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, Piece::Bishop | Piece::Rook | Piece::Queen)
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(NAMES[self.index()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fen_letters_carry_color_in_case() {
        assert_eq!(Piece::Pawn.to_fen_char(Color::White), 'P');
        assert_eq!(Piece::Pawn.to_fen_char(Color::Black), 'p');
        assert_eq!(Piece::Knight.to_fen_char(Color::White), 'N');
        assert_eq!(Piece::King.to_fen_char(Color::Black), 'k');
    }

    #[test]
    fn fen_letters_read_back() {
        for piece in Piece::ALL {
            for color in [Color::White, Color::Black] {
                let c = piece.to_fen_char(color);
                assert_eq!(Piece::from_fen_char(c), Some((piece, color)));
            }
        }
        assert_eq!(Piece::from_fen_char('x'), None);
        assert_eq!(Piece::from_fen_char('3'), None);
        assert_eq!(Piece::from_fen_char('/'), None);
    }

    #[test]
    fn white_draws_solid_black_draws_outlined() {
        assert_eq!(Piece::Rook.symbol(Color::White), '♜');
        assert_eq!(Piece::Rook.symbol(Color::Black), '♖');
        assert_eq!(Piece::Pawn.symbol(Color::White), '♟');
        assert_eq!(Piece::King.symbol(Color::Black), '♔');
        assert_ne!(Piece::Pawn.symbol(Color::Black), EMPTY_SYMBOL);
    }

    #[test]
    fn only_line_pieces_slide() {
        let sliders: Vec<Piece> = Piece::ALL.into_iter().filter(|p| p.is_slider()).collect();
        assert_eq!(sliders, vec![Piece::Bishop, Piece::Rook, Piece::Queen]);
    }

    #[test]
    fn display_names() {
        assert_eq!(Piece::Queen.to_string(), "queen");
        assert_eq!(Piece::Knight.to_string(), "knight");
    }
}
