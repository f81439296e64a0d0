//! Position representation and move generation on a 0x88 board.
//!
//! This crate provides:
//! - [`Position`] - board, side to move, castling rights, en passant target
//!   and move counters, with the FEN codec
//! - [`make_move`] - copy-producing move application
//! - [`generate_moves`] - pseudo-legal move generation, and [`generate`] in
//!   attack mode
//! - [`attack_set`] - squares attacked by the side not to move
//! - [`legal_moves`] and [`perft`](movegen::perft) for callers that want
//!   fully legal moves
//!
//! # Architecture
//!
//! The board is a 128-slot array indexed by 0x88 squares (rank in the high
//! nibble, file in the low one). Pieces move by adding direction deltas to the
//! index, and an index with bit 3 or bit 7 set has left the board. Moves are
//! the packed integers of [`chess_core::Move`].
//!
//! Nothing here rejects chess-illegal moves when applying them: the generator
//! is the only source of moves this crate vouches for.
//!
//! # Example
//!
//! ```
//! use chess_movegen::{generate_moves, make_move, Position};
//!
//! let position = Position::startpos();
//! let moves = generate_moves(&position);
//! assert_eq!(moves.len(), 20);
//!
//! let next = make_move(&position, moves[0]);
//! assert_ne!(next.to_fen(), position.to_fen());
//! ```

mod apply;
mod castling;
pub mod movegen;
mod position;
mod square_set;

pub use apply::make_move;
pub use castling::{CastleWing, CastlingRights};
pub use movegen::{
    attack_set, attacked_squares, find_move, generate, generate_moves, is_king_attacked,
    is_square_attacked, legal_moves, GenMode, MoveError, MoveList,
};
pub use position::{Position, Slot};
pub use square_set::{SquareSet, SquareSetIter};
