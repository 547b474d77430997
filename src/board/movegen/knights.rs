use super::super::attack_tables::KNIGHT_ATTACKS;
use super::super::{Bitboard, Board, Move, MoveList, Piece};

impl Board {
    pub(super) fn generate_knight_moves(&self, moves: &mut MoveList) {
        let us = self.side_to_move;
        let own = self.occupied[us.index()];
        let theirs = self.occupied[us.opponent().index()];

        for from in self.bitboard(us, Piece::Knight).iter() {
            let targets = Bitboard(KNIGHT_ATTACKS[from.index()]) & !own;
            for to in targets.iter() {
                let mv = if theirs.contains(to) {
                    Move::capture(from, to)
                } else {
                    Move::quiet(from, to)
                };
                self.push_candidate(moves, mv);
            }
        }
    }
}
