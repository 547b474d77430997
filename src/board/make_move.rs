use super::zobrist::ZOBRIST;
use super::{Board, Color, Move, Piece, Square};

impl Board {
    /// Play `mv` on this board.
    ///
    /// The move must come from this position's candidate list; legality is
    /// not checked here. Callers that need the position before the move
    /// play on a copy.
    pub fn play(&mut self, mv: Move) {
        let us = self.side_to_move;
        let them = us.opponent();
        let from = mv.from();
        let to = mv.to();

        let Some((_, moving)) = self.piece_at(from) else {
            debug_assert!(false, "play: no piece on {from}");
            return;
        };

        if let Some(ep) = self.en_passant_target.take() {
            self.hash ^= ZOBRIST.en_passant(ep);
        }
        self.hash ^= ZOBRIST.castling(self.castling_rights);

        let mut captured = false;
        if mv.is_en_passant() {
            if let Some(victim) = Square::new(from.rank(), to.file()) {
                if self.bitboard(them, Piece::Pawn).contains(victim) {
                    self.toggle_piece(victim, them, Piece::Pawn);
                    captured = true;
                }
            }
        } else if let Some((color, piece)) = self.piece_at(to) {
            if color == them {
                self.toggle_piece(to, them, piece);
                captured = true;
            }
        }

        self.toggle_piece(from, us, moving);
        self.toggle_piece(to, us, mv.promotion().unwrap_or(moving));

        if mv.is_castling() {
            let rank = us.back_rank();
            let (rook_from, rook_to) = if mv.is_castle_kingside() {
                (7, 5)
            } else {
                (0, 3)
            };
            if let (Some(rook_from), Some(rook_to)) =
                (Square::new(rank, rook_from), Square::new(rank, rook_to))
            {
                self.toggle_piece(rook_from, us, Piece::Rook);
                self.toggle_piece(rook_to, us, Piece::Rook);
            }
        }

        if mv.is_double_pawn_push() {
            let skipped = Square::new((from.rank() + to.rank()) / 2, from.file());
            if let Some(ep) = skipped {
                self.en_passant_target = Some(ep);
                self.hash ^= ZOBRIST.en_passant(ep);
            }
        }

        self.castling_rights.touch(from.index(), to.index());
        self.hash ^= ZOBRIST.castling(self.castling_rights);

        if moving == Piece::Pawn || captured {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if us == Color::Black {
            self.fullmove_number += 1;
        }

        self.side_to_move = them;
        self.hash ^= ZOBRIST.black_to_move();
    }
}
