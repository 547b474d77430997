pub mod board;
pub mod corpus;
pub mod harness;
pub mod perft;

pub use board::{init_attack_tables, Board, Color, Legality, Move, Piece, Square};
pub use corpus::{fixtures, Fixture};
pub use harness::{RunConfig, RunSummary};
pub use perft::{divide, perft, perft_with, MoveSource};
