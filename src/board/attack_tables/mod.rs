//! Attack tables for move generation.
//!
//! Leapers (knight, king, pawn) use plain lookup tables. Sliders use
//! Hyperbola Quintessence on files and diagonals, and a rank lookup table
//! for horizontal rays, where byte swapping does not reverse the line.

#![allow(clippy::needless_range_loop)]

mod tables;

pub(crate) use tables::{KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS};

use once_cell::sync::Lazy;

/// Line masks through each square, excluding the square itself.
struct LineMasks {
    file: [u64; 64],
    diagonal: [u64; 64],
    anti_diagonal: [u64; 64],
}

fn ray_mask(sq: usize, dr: isize, df: isize) -> u64 {
    let mut mask = 0u64;
    let mut r = (sq / 8) as isize + dr;
    let mut f = (sq % 8) as isize + df;
    while (0..8).contains(&r) && (0..8).contains(&f) {
        mask |= 1u64 << (r * 8 + f);
        r += dr;
        f += df;
    }
    mask
}

static LINE_MASKS: Lazy<LineMasks> = Lazy::new(|| {
    let mut masks = LineMasks {
        file: [0; 64],
        diagonal: [0; 64],
        anti_diagonal: [0; 64],
    };
    for sq in 0..64 {
        masks.file[sq] = ray_mask(sq, 1, 0) | ray_mask(sq, -1, 0);
        masks.diagonal[sq] = ray_mask(sq, 1, 1) | ray_mask(sq, -1, -1);
        masks.anti_diagonal[sq] = ray_mask(sq, 1, -1) | ray_mask(sq, -1, 1);
    }
    masks
});

/// `RANK_ATTACKS[8 * inner_occupancy + file]`: attacks along rank 1 for a
/// slider on `file`, where `inner_occupancy` holds files b-g as six bits.
static RANK_ATTACKS: Lazy<[u64; 512]> = Lazy::new(|| {
    let mut attacks = [0u64; 512];
    for occ in 0..64usize {
        for file in 0..8usize {
            let blocked = |f: usize| (1..=6).contains(&f) && occ & (1 << (f - 1)) != 0;
            let mut attack = 0u64;
            for f in (file + 1)..8 {
                attack |= 1u64 << f;
                if blocked(f) {
                    break;
                }
            }
            for f in (0..file).rev() {
                attack |= 1u64 << f;
                if blocked(f) {
                    break;
                }
            }
            attacks[8 * occ + file] = attack;
        }
    }
    attacks
});

/// Build every lazily initialized table up front.
///
/// Safe to call any number of times; only the first call does work.
pub fn init_attack_tables() {
    Lazy::force(&KNIGHT_ATTACKS);
    Lazy::force(&KING_ATTACKS);
    Lazy::force(&PAWN_ATTACKS);
    Lazy::force(&LINE_MASKS);
    Lazy::force(&RANK_ATTACKS);
    Lazy::force(&super::zobrist::ZOBRIST);
}

/// Attacks along one line with at most one square per rank.
#[inline(always)]
fn hyperbola(occupied: u64, mask: u64, square: usize) -> u64 {
    let bit = 1u64 << square;
    let mut forward = occupied & mask;
    let mut reverse = forward.swap_bytes();
    forward = forward.wrapping_sub(bit);
    reverse = reverse.wrapping_sub(bit.swap_bytes());
    (forward ^ reverse.swap_bytes()) & mask
}

#[inline(always)]
fn rank_attacks(occupied: u64, square: usize) -> u64 {
    let rank = square / 8;
    let file = square % 8;
    let inner = ((occupied >> (rank * 8 + 1)) & 63) as usize;
    RANK_ATTACKS[8 * inner + file] << (rank * 8)
}

#[inline]
pub(crate) fn bishop_attacks(square: usize, occupied: u64) -> u64 {
    let masks = &*LINE_MASKS;
    hyperbola(occupied, masks.diagonal[square], square)
        | hyperbola(occupied, masks.anti_diagonal[square], square)
}

#[inline]
pub(crate) fn rook_attacks(square: usize, occupied: u64) -> u64 {
    hyperbola(occupied, LINE_MASKS.file[square], square) | rank_attacks(occupied, square)
}

#[inline]
pub(crate) fn queen_attacks(square: usize, occupied: u64) -> u64 {
    bishop_attacks(square, occupied) | rook_attacks(square, occupied)
}
