use super::super::attack_tables::PAWN_ATTACKS;
use super::super::{Bitboard, Board, Move, MoveList, Piece, PROMOTION_PIECES};

impl Board {
    pub(super) fn generate_pawn_moves(&self, moves: &mut MoveList) {
        let us = self.side_to_move;
        let theirs = self.occupied[us.opponent().index()];
        let dir = us.pawn_direction();
        let promotion_rank = us.pawn_promotion_rank();

        for from in self.bitboard(us, Piece::Pawn).iter() {
            if let Some(one) = from.offset(dir, 0) {
                if self.is_empty(one) {
                    if one.rank() == promotion_rank {
                        for promo in PROMOTION_PIECES {
                            self.push_candidate(moves, Move::promotion_to(from, one, promo, false));
                        }
                    } else {
                        self.push_candidate(moves, Move::quiet(from, one));
                        if from.rank() == us.pawn_start_rank() {
                            if let Some(two) = one.offset(dir, 0) {
                                if self.is_empty(two) {
                                    self.push_candidate(moves, Move::double_pawn_push(from, two));
                                }
                            }
                        }
                    }
                }
            }

            let attacks = Bitboard(PAWN_ATTACKS[us.index()][from.index()]);
            for to in (attacks & theirs).iter() {
                if to.rank() == promotion_rank {
                    for promo in PROMOTION_PIECES {
                        self.push_candidate(moves, Move::promotion_to(from, to, promo, true));
                    }
                } else {
                    self.push_candidate(moves, Move::capture(from, to));
                }
            }

            if let Some(ep) = self.en_passant_target {
                if attacks.contains(ep) && self.is_empty(ep) {
                    self.push_candidate(moves, Move::en_passant(from, ep));
                }
            }
        }
    }
}
