//! Chess position representation and the FEN codec.

use chess_core::{Color, FenError, FenFields, Piece, Square, EMPTY_SYMBOL};
use std::fmt;

use crate::CastlingRights;

/// Contents of one board slot.
pub type Slot = Option<(Piece, Color)>;

/// Complete chess position state on a 0x88 board.
///
/// The board has 128 slots indexed by [`Square::index`]. Only the 64 slots of
/// playable squares are ever read or written; the other half is padding that
/// keeps off-board detection to a single mask test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Piece on each 0x88 slot.
    board: [Slot; Square::INDEX_SPACE],

    /// The side to move.
    pub side_to_move: Color,

    /// Castling rights.
    pub castling: CastlingRights,

    /// En passant target square, set only right after a double pawn push.
    pub en_passant: Option<Square>,

    /// Plies since the last capture or pawn move.
    pub halfmove_clock: u32,

    /// Fullmove number (starts at 1, increments after Black's move).
    pub fullmove_number: u32,
}

impl Position {
    /// Creates an empty position.
    pub fn empty() -> Self {
        Position {
            board: [None; Square::INDEX_SPACE],
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        Self::from_fen(FenFields::STARTPOS).expect("STARTPOS is valid")
    }

    /// Decodes `fen` if given, otherwise returns the starting position.
    pub fn from_fen_or_startpos(fen: Option<&str>) -> Result<Self, FenError> {
        match fen {
            Some(fen) => Self::from_fen(fen),
            None => Ok(Self::startpos()),
        }
    }

    /// Creates a position from a FEN string.
    ///
    /// The one-king-per-side invariant is not checked; such positions decode
    /// fine and simply produce meaningless move lists.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let fields = FenFields::parse(fen)?;
        let mut position = Position::empty();

        // Row 0 of the placement is rank 8.
        for (row, pieces) in fields.placement.split('/').enumerate() {
            let rank_base = ((7 - row) as u8) << 4;
            let mut file = 0u8;

            for c in pieces.chars() {
                if let Some(run) = c.to_digit(10) {
                    file += run as u8;
                } else if let Some(colored) = Piece::from_fen_char(c) {
                    if let Some(sq) = Square::from_index(rank_base | file) {
                        position.set_piece(sq, Some(colored));
                    }
                    file += 1;
                }
            }
        }

        position.side_to_move = fields.side_to_move;
        position.castling = CastlingRights::from_fen(&fields.castling);
        position.en_passant = fields.en_passant;
        position.halfmove_clock = fields.halfmove_clock;
        position.fullmove_number = fields.fullmove_number;

        tracing::debug!(fen, "decoded position");
        Ok(position)
    }

    /// Converts the position to a FEN string.
    pub fn to_fen(&self) -> String {
        let rows: Vec<String> = (0..8u8)
            .rev()
            .map(|rank| {
                let mut row = String::new();
                let mut empty_run = 0;
                for file in 0..8u8 {
                    match Square::from_index((rank << 4) | file).and_then(|sq| self.piece_at(sq)) {
                        Some((piece, color)) => {
                            if empty_run > 0 {
                                row.push_str(&empty_run.to_string());
                                empty_run = 0;
                            }
                            row.push(piece.to_fen_char(color));
                        }
                        None => empty_run += 1,
                    }
                }
                if empty_run > 0 {
                    row.push_str(&empty_run.to_string());
                }
                row
            })
            .collect();

        let en_passant = self
            .en_passant
            .map_or_else(|| "-".to_string(), Square::to_algebraic);

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            self.side_to_move.to_fen_char(),
            self.castling.to_fen(),
            en_passant,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Returns the piece and color at the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Slot {
        self.board[sq.index() as usize]
    }

    /// Returns true if no piece stands on `sq`.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Places a piece on, or clears, the given square.
    #[inline]
    pub fn set_piece(&mut self, sq: Square, slot: Slot) {
        self.board[sq.index() as usize] = slot;
    }

    /// Iterates over the occupied squares of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some((piece, c)) if c == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Returns the square of the given color's king, if it has one.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|&(_, piece)| piece == Piece::King)
            .map(|(sq, _)| sq)
    }

    /// Draws the board as eight lines of Unicode glyphs, rank 8 first.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(8 * 16 * 3);
        for rank in (0..8u8).rev() {
            let glyphs: Vec<String> = (0..8u8)
                .map(|file| {
                    Square::from_index((rank << 4) | file)
                        .and_then(|sq| self.piece_at(sq))
                        .map_or(EMPTY_SYMBOL, |(piece, color)| piece.symbol(color))
                        .to_string()
                })
                .collect();
            out.push_str(&glyphs.join(" "));
            out.push('\n');
        }
        out
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
