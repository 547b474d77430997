//! Castling rights.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Rights kept when a piece leaves or lands on each square. Touching a king
/// or rook home square clears the matching rights.
const KEEP_MASK: [u8; 64] = {
    let mut mask = [ALL_CASTLING_RIGHTS; 64];
    mask[0] = ALL_CASTLING_RIGHTS & !CASTLE_WHITE_Q; // a1
    mask[4] = ALL_CASTLING_RIGHTS & !(CASTLE_WHITE_K | CASTLE_WHITE_Q); // e1
    mask[7] = ALL_CASTLING_RIGHTS & !CASTLE_WHITE_K; // h1
    mask[56] = ALL_CASTLING_RIGHTS & !CASTLE_BLACK_Q; // a8
    mask[60] = ALL_CASTLING_RIGHTS & !(CASTLE_BLACK_K | CASTLE_BLACK_Q); // e8
    mask[63] = ALL_CASTLING_RIGHTS & !CASTLE_BLACK_K; // h8
    mask
};

/// Castling rights represented as a bitmask
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        self.0 & Self::bit_for(color, kingside) != 0
    }

    #[inline]
    pub fn set(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::bit_for(color, kingside);
    }

    #[inline]
    pub fn remove(&mut self, color: Color, kingside: bool) {
        self.0 &= !Self::bit_for(color, kingside);
    }

    /// Drop every right tied to `from` or `to` (king or rook home squares).
    #[inline]
    pub(crate) fn touch(&mut self, from: usize, to: usize) {
        self.0 &= KEEP_MASK[from] & KEEP_MASK[to];
    }

    /// Raw bitmask (Zobrist indexing)
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Parse the FEN castling field; the error carries the first unknown letter.
    pub(crate) fn from_fen_field(field: &str) -> Result<Self, char> {
        let mut rights = CastlingRights::none();
        for c in field.chars() {
            match c {
                'K' => rights.0 |= CASTLE_WHITE_K,
                'Q' => rights.0 |= CASTLE_WHITE_Q,
                'k' => rights.0 |= CASTLE_BLACK_K,
                'q' => rights.0 |= CASTLE_BLACK_Q,
                '-' => {}
                other => return Err(other),
            }
        }
        Ok(rights)
    }

    /// FEN castling field, `-` when empty
    #[must_use]
    pub fn to_fen_field(self) -> String {
        let mut field = String::new();
        for (bit, c) in [
            (CASTLE_WHITE_K, 'K'),
            (CASTLE_WHITE_Q, 'Q'),
            (CASTLE_BLACK_K, 'k'),
            (CASTLE_BLACK_Q, 'q'),
        ] {
            if self.0 & bit != 0 {
                field.push(c);
            }
        }
        if field.is_empty() {
            field.push('-');
        }
        field
    }

    #[inline]
    const fn bit_for(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => CASTLE_WHITE_K,
            (Color::White, false) => CASTLE_WHITE_Q,
            (Color::Black, true) => CASTLE_BLACK_K,
            (Color::Black, false) => CASTLE_BLACK_Q,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fen_field_round_trip() {
        for field in ["KQkq", "K", "Qk", "-", "kq"] {
            let rights = CastlingRights::from_fen_field(field).unwrap();
            assert_eq!(rights.to_fen_field(), field);
        }
        assert_eq!(CastlingRights::from_fen_field("KX"), Err('X'));
    }

    #[test]
    fn touching_home_squares_clears_rights() {
        let mut rights = CastlingRights::all();
        rights.touch(7, 15); // h1 rook moves
        assert!(!rights.has(Color::White, true));
        assert!(rights.has(Color::White, false));
        rights.touch(52, 60); // something lands on e8
        assert!(!rights.has(Color::Black, true));
        assert!(!rights.has(Color::Black, false));
        assert!(rights.has(Color::White, false));
    }

    #[test]
    fn set_and_remove() {
        let mut rights = CastlingRights::none();
        rights.set(Color::Black, false);
        assert!(rights.has(Color::Black, false));
        rights.remove(Color::Black, false);
        assert_eq!(rights, CastlingRights::none());
    }
}
