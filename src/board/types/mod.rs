//! Core chess types.
//!
//! - `Piece` and `Color`
//! - `Square` - compact index square (a1=0 .. h8=63)
//! - `Bitboard` - 64-bit square set
//! - `Move`, `Legality`, `Classified` and `MoveList`
//! - `CastlingRights`

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::CastlingRights;
pub use moves::{Classified, ClassifiedMove, Legality, Move, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
