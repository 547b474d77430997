use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{Board, CastlingRights, Color, Move, Piece, Square};

/// FEN of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Parse a position from FEN.
    ///
    /// The halfmove and fullmove fields may be omitted; they default to 0 and 1.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if !(4..=6).contains(&fields.len()) {
            return Err(FenError::FieldCount {
                found: fields.len(),
            });
        }

        let mut board = Board::empty();

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let sq = Square::new(rank, file).ok_or(FenError::RankLength {
                    rank: rank + 1,
                    files: file + 1,
                })?;
                board.toggle_piece(sq, color, piece);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::RankLength {
                    rank: rank + 1,
                    files: file,
                });
            }
        }

        board.side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        board.castling_rights = CastlingRights::from_fen_field(fields[2])
            .map_err(|char| FenError::InvalidCastling { char })?;

        board.en_passant_target = match fields[3] {
            "-" => None,
            square => Some(
                square
                    .parse::<Square>()
                    .map_err(|_| FenError::InvalidEnPassant {
                        found: square.to_string(),
                    })?,
            ),
        };

        let counter = |field: Option<&&str>, default: u32| -> Result<u32, FenError> {
            field.map_or(Ok(default), |s| {
                s.parse().map_err(|_| FenError::InvalidCounter {
                    found: (*s).to_string(),
                })
            })
        };
        board.halfmove_clock = counter(fields.get(4), 0)?;
        board.fullmove_number = counter(fields.get(5), 1)?;

        for color in Color::BOTH {
            let kings = board.bitboard(color, Piece::King).popcount();
            if kings != 1 {
                return Err(FenError::KingCount {
                    color,
                    found: kings,
                });
            }
        }

        board.hash = board.compute_hash();
        Ok(board)
    }

    /// Render the position as a six-field FEN string.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match Square::new(rank, file).and_then(|sq| self.piece_at(sq)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            self.castling_rights.to_fen_field(),
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in coordinate notation (e.g. "e2e4", "e7e8q") and
    /// return the matching legal move.
    ///
    /// # Example
    /// ```
    /// use chess_perft::board::Board;
    ///
    /// let board = Board::new();
    /// let mv = board.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&self, notation: &str) -> Result<Move, MoveParseError> {
        if !(4..=5).contains(&notation.len()) || !notation.is_ascii() {
            return Err(MoveParseError::InvalidLength {
                len: notation.len(),
            });
        }
        let invalid_square = || MoveParseError::InvalidSquare {
            notation: notation.to_string(),
        };
        let from: Square = notation[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = notation[2..4].parse().map_err(|_| invalid_square())?;
        let promotion = match notation[4..].chars().next() {
            None => None,
            Some(c) => match Piece::from_char(c) {
                Some(p @ (Piece::Knight | Piece::Bishop | Piece::Rook | Piece::Queen)) => Some(p),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        self.legal_moves()
            .legal()
            .find(|mv| mv.from() == from && mv.to() == to && mv.promotion() == promotion)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
