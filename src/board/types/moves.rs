//! Moves, their legality classification, and the move list.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;

// Move flags (4 bits)
const FLAG_QUIET: u16 = 0;
const FLAG_DOUBLE_PAWN: u16 = 1;
const FLAG_CASTLE_KINGSIDE: u16 = 2;
const FLAG_CASTLE_QUEENSIDE: u16 = 3;
const FLAG_CAPTURE: u16 = 4;
const FLAG_EN_PASSANT: u16 = 5;
const FLAG_PROMO_KNIGHT: u16 = 8;
const FLAG_PROMO_BISHOP: u16 = 9;
const FLAG_PROMO_ROOK: u16 = 10;
const FLAG_PROMO_QUEEN: u16 = 11;
const FLAG_PROMO_CAPTURE_KNIGHT: u16 = 12;
const FLAG_PROMO_CAPTURE_BISHOP: u16 = 13;
const FLAG_PROMO_CAPTURE_ROOK: u16 = 14;
const FLAG_PROMO_CAPTURE_QUEEN: u16 = 15;

/// Compact 16-bit move.
///
/// Encoding:
/// - bits 0-5:   from square
/// - bits 6-11:  to square
/// - bits 12-15: move kind
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    #[inline]
    #[must_use]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_QUIET)
    }

    #[inline]
    #[must_use]
    pub const fn capture(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_CAPTURE)
    }

    #[inline]
    #[must_use]
    pub const fn double_pawn_push(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_DOUBLE_PAWN)
    }

    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_EN_PASSANT)
    }

    #[inline]
    #[must_use]
    pub const fn castle_kingside(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_CASTLE_KINGSIDE)
    }

    #[inline]
    #[must_use]
    pub const fn castle_queenside(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_CASTLE_QUEENSIDE)
    }

    /// A promotion, capturing or not. Pawn and king fall back to queen.
    #[inline]
    #[must_use]
    pub const fn promotion_to(from: Square, to: Square, piece: Piece, capture: bool) -> Self {
        let base = match piece {
            Piece::Knight => FLAG_PROMO_KNIGHT,
            Piece::Bishop => FLAG_PROMO_BISHOP,
            Piece::Rook => FLAG_PROMO_ROOK,
            _ => FLAG_PROMO_QUEEN,
        };
        let flag = if capture { base + 4 } else { base };
        Move::with_flag(from, to, flag)
    }

    #[inline]
    const fn with_flag(from: Square, to: Square, flag: u16) -> Self {
        Move(from.index() as u16 | ((to.index() as u16) << 6) | (flag << 12))
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        Square::from_index((self.0 & 0x3F) as usize)
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        Square::from_index(((self.0 >> 6) & 0x3F) as usize)
    }

    #[inline]
    const fn flag(self) -> u16 {
        self.0 >> 12
    }

    /// True for captures, including en passant and capturing promotions
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        let f = self.flag();
        f == FLAG_CAPTURE || f == FLAG_EN_PASSANT || f >= FLAG_PROMO_CAPTURE_KNIGHT
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        self.flag() == FLAG_EN_PASSANT
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        let f = self.flag();
        f == FLAG_CASTLE_KINGSIDE || f == FLAG_CASTLE_QUEENSIDE
    }

    #[inline]
    #[must_use]
    pub const fn is_castle_kingside(self) -> bool {
        self.flag() == FLAG_CASTLE_KINGSIDE
    }

    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(self) -> bool {
        self.flag() == FLAG_DOUBLE_PAWN
    }

    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        match self.flag() {
            FLAG_PROMO_KNIGHT | FLAG_PROMO_CAPTURE_KNIGHT => Some(Piece::Knight),
            FLAG_PROMO_BISHOP | FLAG_PROMO_CAPTURE_BISHOP => Some(Piece::Bishop),
            FLAG_PROMO_ROOK | FLAG_PROMO_CAPTURE_ROOK => Some(Piece::Rook),
            FLAG_PROMO_QUEEN | FLAG_PROMO_CAPTURE_QUEEN => Some(Piece::Queen),
            _ => None,
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self}")?;
        if self.is_capture() {
            write!(f, " cap")?;
        }
        if self.is_castling() {
            write!(f, " castle")?;
        }
        if self.is_en_passant() {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}

/// Coordinate notation: `e2e4`, `e7e8q`. Never longer than five characters.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// How the generator classified a candidate move.
///
/// Only [`Legality::Legal`] moves take part in perft counting; the other
/// variants record why a pseudo-legal move was excluded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Legality {
    Legal,
    /// The mover's own king is attacked after the move.
    LeavesKingInCheck,
    /// The king castles out of, through, or into an attacked square.
    CastlesThroughCheck,
}

impl Legality {
    #[inline]
    #[must_use]
    pub const fn is_legal(self) -> bool {
        matches!(self, Legality::Legal)
    }
}

/// A move paired with its legality classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classified<M> {
    pub mv: M,
    pub legality: Legality,
}

impl<M> Classified<M> {
    #[inline]
    pub const fn new(mv: M, legality: Legality) -> Self {
        Classified { mv, legality }
    }
}

pub type ClassifiedMove = Classified<Move>;

pub(crate) const MAX_MOVES: usize = 256;

const EMPTY_ENTRY: ClassifiedMove = Classified::new(Move(0), Legality::LeavesKingInCheck);

/// Classified moves in a fixed-size backing array.
#[derive(Clone)]
pub struct MoveList {
    moves: [ClassifiedMove; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [EMPTY_ENTRY; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, entry: ClassifiedMove) {
        self.moves[self.len] = entry;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ClassifiedMove] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClassifiedMove> {
        self.as_slice().iter()
    }

    /// Moves tagged [`Legality::Legal`], in generation order.
    pub fn legal(&self) -> impl Iterator<Item = Move> + '_ {
        self.iter()
            .filter(|entry| entry.legality.is_legal())
            .map(|entry| entry.mv)
    }

    /// Number of moves tagged [`Legality::Legal`]
    #[must_use]
    pub fn legal_count(&self) -> usize {
        self.iter().filter(|entry| entry.legality.is_legal()).count()
    }

    /// Keep only the entries matching `keep`.
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&ClassifiedMove) -> bool) {
        let mut write = 0;
        for read in 0..self.len {
            if keep(&self.moves[read]) {
                self.moves[write] = self.moves[read];
                write += 1;
            }
        }
        self.len = write;
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a ClassifiedMove;
    type IntoIter = std::slice::Iter<'a, ClassifiedMove>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over a [`MoveList`].
pub struct MoveListIntoIter {
    list: MoveList,
    pos: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = ClassifiedMove;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos < self.list.len {
            let entry = self.list.moves[self.pos];
            self.pos += 1;
            Some(entry)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = ClassifiedMove;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, pos: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn encodes_squares_and_kind() {
        let mv = Move::double_pawn_push(sq("e2"), sq("e4"));
        assert_eq!(mv.from(), sq("e2"));
        assert_eq!(mv.to(), sq("e4"));
        assert!(mv.is_double_pawn_push());
        assert!(!mv.is_capture());
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn promotion_notation_is_lowercase_suffix() {
        let quiet = Move::promotion_to(sq("e7"), sq("e8"), Piece::Knight, false);
        assert_eq!(quiet.to_string(), "e7e8n");
        assert!(!quiet.is_capture());

        let capture = Move::promotion_to(sq("b7"), sq("a8"), Piece::Queen, true);
        assert_eq!(capture.to_string(), "b7a8q");
        assert!(capture.is_capture());
        assert_eq!(capture.promotion(), Some(Piece::Queen));
    }

    #[test]
    fn special_kinds() {
        assert!(Move::en_passant(sq("e5"), sq("d6")).is_capture());
        assert!(Move::castle_kingside(sq("e1"), sq("g1")).is_castle_kingside());
        let long = Move::castle_queenside(sq("e8"), sq("c8"));
        assert!(long.is_castling());
        assert!(!long.is_castle_kingside());
        assert_eq!(long.to_string(), "e8c8");
    }

    #[test]
    fn list_filters_legal_entries() {
        let mut list = MoveList::new();
        list.push(Classified::new(
            Move::quiet(sq("a1"), sq("a2")),
            Legality::Legal,
        ));
        list.push(Classified::new(
            Move::quiet(sq("a1"), sq("b1")),
            Legality::LeavesKingInCheck,
        ));
        list.push(Classified::new(
            Move::castle_kingside(sq("e1"), sq("g1")),
            Legality::CastlesThroughCheck,
        ));
        list.push(Classified::new(
            Move::quiet(sq("a1"), sq("a3")),
            Legality::Legal,
        ));

        assert_eq!(list.len(), 4);
        assert_eq!(list.legal_count(), 2);
        let legal: Vec<String> = list.legal().map(|m| m.to_string()).collect();
        assert_eq!(legal, vec!["a1a2", "a1a3"]);

        list.retain(|entry| entry.legality.is_legal());
        assert_eq!(list.len(), 2);
        assert_eq!(list.into_iter().len(), 2);
    }
}
