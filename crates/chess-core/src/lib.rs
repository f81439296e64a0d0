//! Core value types for a 0x88 chess board.
//!
//! This crate provides the fundamental types shared by the move generator:
//! - [`Piece`] and [`Color`] for piece representation
//! - [`Square`], [`File`], and [`Rank`] for board coordinates on a 0x88 grid
//! - [`Move`] for the packed move integer
//! - FEN field splitting and validation

mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{FenError, FenFields};
pub use mov::{Move, MoveFlag, Promotion};
pub use piece::{Piece, EMPTY_SYMBOL};
pub use square::{File, Rank, Square, SquareError};
