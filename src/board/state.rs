use super::zobrist::ZOBRIST;
use super::{Bitboard, CastlingRights, Color, Piece, Square};

/// A full game position: placement, side to move, castling rights,
/// en passant target and move counters.
///
/// `Board` is `Copy`. Copying it yields a structurally independent snapshot,
/// so a move played on the copy never shows through in the original.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) all_occupied: Bitboard,
    pub(crate) side_to_move: Color,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) hash: u64,
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.into_iter().enumerate() {
            board.toggle_piece(Square::from_index(file), Color::White, piece);
            board.toggle_piece(Square::from_index(56 + file), Color::Black, piece);
            board.toggle_piece(Square::from_index(8 + file), Color::White, Piece::Pawn);
            board.toggle_piece(Square::from_index(48 + file), Color::Black, Piece::Pawn);
        }
        board.castling_rights = CastlingRights::all();
        board.hash = board.compute_hash();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied: [Bitboard::EMPTY; 2],
            all_occupied: Bitboard::EMPTY,
            side_to_move: Color::White,
            en_passant_target: None,
            castling_rights: CastlingRights::none(),
            halfmove_clock: 0,
            fullmove_number: 1,
            hash: 0,
        }
    }

    /// Incrementally maintained Zobrist hash
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Place or lift a piece. XOR semantics keep the bitboards and the
    /// hash in step; calling it twice with the same arguments is a no-op.
    #[inline]
    pub(crate) fn toggle_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = Bitboard::from_square(sq).0;
        let c_idx = color.index();
        self.pieces[c_idx][piece.index()].0 ^= bit;
        self.occupied[c_idx].0 ^= bit;
        self.all_occupied.0 ^= bit;
        self.hash ^= ZOBRIST.piece(color, piece, sq);
    }

    /// The colored piece on `sq`, if any.
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        if !self.all_occupied.contains(sq) {
            return None;
        }
        let color = if self.occupied[0].contains(sq) {
            Color::White
        } else {
            Color::Black
        };
        Piece::ALL
            .into_iter()
            .find(|piece| self.pieces[color.index()][piece.index()].contains(sq))
            .map(|piece| (color, piece))
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        !self.all_occupied.contains(sq)
    }

    #[inline]
    pub(crate) fn bitboard(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    pub(crate) fn king_square(&self, color: Color) -> Option<Square> {
        self.bitboard(color, Piece::King).lsb()
    }

    /// Hash recomputed from scratch; always equals [`Board::hash`].
    #[must_use]
    pub fn compute_hash(&self) -> u64 {
        let mut hash = 0u64;
        for color in Color::BOTH {
            for piece in Piece::ALL {
                for sq in self.bitboard(color, piece).iter() {
                    hash ^= ZOBRIST.piece(color, piece, sq);
                }
            }
        }
        if self.side_to_move == Color::Black {
            hash ^= ZOBRIST.black_to_move();
        }
        hash ^= ZOBRIST.castling(self.castling_rights);
        if let Some(ep) = self.en_passant_target {
            hash ^= ZOBRIST.en_passant(ep);
        }
        hash
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
