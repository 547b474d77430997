//! Zobrist keys for the position hash.
//!
//! Keys come from a fixed-seed generator so hashes are stable across runs.

use once_cell::sync::Lazy;
use rand::prelude::*;

use super::{CastlingRights, Color, Piece, Square};

pub(crate) struct ZobristKeys {
    /// `pieces[color][piece][square]`
    pieces: [[[u64; 64]; 6]; 2],
    black_to_move: u64,
    /// One key per castling bitmask value
    castling: [u64; 16],
    /// Indexed by the en passant file
    en_passant: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(0x5EED_0F_9E2F7);
        let mut pieces = [[[0u64; 64]; 6]; 2];
        for color in &mut pieces {
            for piece in color.iter_mut() {
                for key in piece.iter_mut() {
                    *key = rng.gen();
                }
            }
        }
        let black_to_move = rng.gen();
        let mut castling = [0u64; 16];
        // The empty rights set hashes to zero.
        for key in castling.iter_mut().skip(1) {
            *key = rng.gen();
        }
        let mut en_passant = [0u64; 8];
        for key in &mut en_passant {
            *key = rng.gen();
        }
        ZobristKeys {
            pieces,
            black_to_move,
            castling,
            en_passant,
        }
    }

    #[inline]
    pub(crate) fn piece(&self, color: Color, piece: Piece, sq: Square) -> u64 {
        self.pieces[color.index()][piece.index()][sq.index()]
    }

    #[inline]
    pub(crate) fn black_to_move(&self) -> u64 {
        self.black_to_move
    }

    #[inline]
    pub(crate) fn castling(&self, rights: CastlingRights) -> u64 {
        self.castling[rights.as_u8() as usize]
    }

    #[inline]
    pub(crate) fn en_passant(&self, sq: Square) -> u64 {
        self.en_passant[sq.file()]
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);
