//! Position provider and move source for perft.
//!
//! A bitboard board with full chess rules: castling, en passant,
//! promotions. Positions come from FEN; candidate moves carry a
//! [`Legality`] tag rather than being pre-filtered.
//!
//! # Example
//! ```
//! use chess_perft::board::Board;
//!
//! let board = Board::new();
//! let moves = board.candidate_moves();
//! println!("Starting position has {} legal moves", moves.legal_count());
//! ```

mod attack_tables;
mod error;
mod fen;
mod make_move;
mod movegen;
mod state;
mod types;
mod zobrist;

#[cfg(test)]
mod tests;

pub use attack_tables::init_attack_tables;
pub use error::{FenError, MoveParseError, SquareError};
pub use fen::START_FEN;
pub use state::Board;
pub use types::{
    Bitboard, BitboardIter, CastlingRights, Classified, ClassifiedMove, Color, Legality, Move,
    MoveList, MoveListIntoIter, Piece, Square,
};

pub(crate) use types::PROMOTION_PIECES;
