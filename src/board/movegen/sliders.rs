use super::super::attack_tables::{bishop_attacks, queen_attacks, rook_attacks};
use super::super::{Bitboard, Board, Move, MoveList, Piece, Square};

impl Board {
    pub(super) fn generate_slider_moves(&self, moves: &mut MoveList) {
        let attacks: [(Piece, fn(usize, u64) -> u64); 3] = [
            (Piece::Bishop, bishop_attacks),
            (Piece::Rook, rook_attacks),
            (Piece::Queen, queen_attacks),
        ];
        for (piece, attacks_from) in attacks {
            for from in self.bitboard(self.side_to_move, piece).iter() {
                let targets = Bitboard(attacks_from(from.index(), self.all_occupied.0));
                self.push_targets(moves, from, targets);
            }
        }
    }

    fn push_targets(&self, moves: &mut MoveList, from: Square, targets: Bitboard) {
        let us = self.side_to_move;
        let theirs = self.occupied[us.opponent().index()];
        for to in (targets & !self.occupied[us.index()]).iter() {
            let mv = if theirs.contains(to) {
                Move::capture(from, to)
            } else {
                Move::quiet(from, to)
            };
            self.push_candidate(moves, mv);
        }
    }
}
