//! Candidate move enumeration with legality classification.
//!
//! The piece generators produce pseudo-legal moves. Each one is classified
//! on the spot by playing it on a copy of the board and testing the mover's
//! king, and pushed with its [`Legality`] tag. Nothing is dropped here;
//! consumers filter on the tag.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{
    bishop_attacks, rook_attacks, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS,
};
use super::{Board, Classified, Color, Legality, Move, MoveList, Piece, Square};

impl Board {
    /// Every pseudo-legal move for the side to move, each tagged with its
    /// legality classification.
    #[must_use]
    pub fn candidate_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        self.generate_pawn_moves(&mut moves);
        self.generate_knight_moves(&mut moves);
        self.generate_slider_moves(&mut moves);
        self.generate_king_moves(&mut moves);
        moves
    }

    /// Only the moves tagged [`Legality::Legal`].
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = self.candidate_moves();
        moves.retain(|entry| entry.legality.is_legal());
        moves
    }

    /// True when the side to move is in check.
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        let us = self.side_to_move;
        self.king_square(us)
            .is_some_and(|king| self.is_square_attacked(king, us.opponent()))
    }

    /// True when any piece of `by` attacks `sq`.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        let idx = sq.index();
        let occupied = self.all_occupied.0;
        let queens = self.bitboard(by, Piece::Queen).0;

        // A pawn of `by` hits `sq` exactly when a pawn of the other color
        // standing on `sq` would hit it back.
        PAWN_ATTACKS[by.opponent().index()][idx] & self.bitboard(by, Piece::Pawn).0 != 0
            || KNIGHT_ATTACKS[idx] & self.bitboard(by, Piece::Knight).0 != 0
            || KING_ATTACKS[idx] & self.bitboard(by, Piece::King).0 != 0
            || bishop_attacks(idx, occupied) & (self.bitboard(by, Piece::Bishop).0 | queens) != 0
            || rook_attacks(idx, occupied) & (self.bitboard(by, Piece::Rook).0 | queens) != 0
    }

    pub(crate) fn classify(&self, mv: Move) -> Legality {
        let us = self.side_to_move;
        let them = us.opponent();

        if mv.is_castling() {
            let step = if mv.is_castle_kingside() { 1 } else { -1 };
            let crossed = [Some(mv.from()), mv.from().offset(0, step), Some(mv.to())];
            if crossed
                .into_iter()
                .flatten()
                .any(|sq| self.is_square_attacked(sq, them))
            {
                return Legality::CastlesThroughCheck;
            }
        }

        let mut next = *self;
        next.play(mv);
        match next.king_square(us) {
            Some(king) if next.is_square_attacked(king, them) => Legality::LeavesKingInCheck,
            _ => Legality::Legal,
        }
    }

    #[inline]
    fn push_candidate(&self, moves: &mut MoveList, mv: Move) {
        moves.push(Classified::new(mv, self.classify(mv)));
    }
}
