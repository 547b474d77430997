use super::super::attack_tables::KING_ATTACKS;
use super::super::{Bitboard, Board, Move, MoveList, Piece, Square};

impl Board {
    pub(super) fn generate_king_moves(&self, moves: &mut MoveList) {
        let us = self.side_to_move;
        let own = self.occupied[us.index()];
        let theirs = self.occupied[us.opponent().index()];

        let Some(from) = self.king_square(us) else {
            return;
        };

        for to in (Bitboard(KING_ATTACKS[from.index()]) & !own).iter() {
            let mv = if theirs.contains(to) {
                Move::capture(from, to)
            } else {
                Move::quiet(from, to)
            };
            self.push_candidate(moves, mv);
        }

        self.generate_castling(moves, from);
    }

    /// Castling candidates: the right is held, the king and rook stand on
    /// their home squares, and every square between them is empty. Attacked
    /// squares are left to classification.
    fn generate_castling(&self, moves: &mut MoveList, from: Square) {
        let us = self.side_to_move;
        let rank = us.back_rank();
        let home = |file: usize| Square::new(rank, file);
        if Some(from) != home(4) {
            return;
        }
        let rooks = self.bitboard(us, Piece::Rook);
        let all_empty = |files: &[usize]| {
            files
                .iter()
                .all(|&f| home(f).is_some_and(|sq| self.is_empty(sq)))
        };

        if self.castling_rights.has(us, true)
            && home(7).is_some_and(|sq| rooks.contains(sq))
            && all_empty(&[5, 6])
        {
            if let Some(to) = home(6) {
                self.push_candidate(moves, Move::castle_kingside(from, to));
            }
        }

        if self.castling_rights.has(us, false)
            && home(0).is_some_and(|sq| rooks.contains(sq))
            && all_empty(&[1, 2, 3])
        {
            if let Some(to) = home(2) {
                self.push_candidate(moves, Move::castle_queenside(from, to));
            }
        }
    }
}
