//! Perft: exhaustive leaf counting of the game tree to a fixed depth.
//!
//! Counting follows copy-make. Every legal move at an interior node is
//! played on a private copy of the position, so sibling subtrees never see
//! each other's changes and no undo step exists to get wrong.
//!
//! At depth 1 only the number of legal moves is needed, so the last ply is
//! counted without playing anything.
//!
//! # Example
//! ```
//! use chess_perft::board::Board;
//! use chess_perft::perft::perft;
//!
//! let board = Board::new();
//! assert_eq!(perft(&board, 2, false), 400);
//! ```

use std::fmt;

use crate::board::{Board, Classified, MoveList};

/// What the perft engine needs from a position.
///
/// Candidates come with their legality classification; the engine filters
/// on [`crate::board::Legality::Legal`] itself at every enumeration.
pub trait MoveSource: Clone {
    type Move: Copy + fmt::Display;
    type Moves: IntoIterator<Item = Classified<Self::Move>>;

    /// All candidate moves, legal or not, each with its classification.
    fn candidate_moves(&self) -> Self::Moves;

    /// Play `mv` on this position in place.
    fn apply_move(&mut self, mv: Self::Move);
}

impl MoveSource for Board {
    type Move = crate::board::Move;
    type Moves = MoveList;

    #[inline]
    fn candidate_moves(&self) -> MoveList {
        Board::candidate_moves(self)
    }

    #[inline]
    fn apply_move(&mut self, mv: Self::Move) {
        self.play(mv);
    }
}

/// Count the leaf nodes `depth` plies below `position`.
///
/// With `divide` set, each top-level legal move is printed to stdout as
/// `<move>: <count>` once its subtree is counted. The printed counts sum to
/// the return value. At depth 1 nothing is printed.
///
/// Depth 0 counts the position itself and returns 1.
pub fn perft<P: MoveSource>(position: &P, depth: usize, divide: bool) -> u64 {
    if divide {
        perft_with(position, depth, |mv, nodes| println!("{mv}: {nodes}"))
    } else {
        count(position, depth)
    }
}

/// Like [`perft`], but hands each top-level move and its subtree count to
/// `on_root_move` instead of printing.
///
/// The callback fires in candidate order and only when `depth > 1`.
pub fn perft_with<P, F>(position: &P, depth: usize, mut on_root_move: F) -> u64
where
    P: MoveSource,
    F: FnMut(P::Move, u64),
{
    if depth <= 1 {
        return count(position, depth);
    }

    let mut nodes = 0;
    for candidate in position.candidate_moves() {
        if !candidate.legality.is_legal() {
            continue;
        }
        let mut child = position.clone();
        child.apply_move(candidate.mv);
        let subtree = count(&child, depth - 1);
        on_root_move(candidate.mv, subtree);
        nodes += subtree;
    }
    nodes
}

/// The per-move breakdown at the root, in candidate order.
///
/// Empty when `depth <= 1`, matching the printed divide output.
pub fn divide<P: MoveSource>(position: &P, depth: usize) -> Vec<(P::Move, u64)> {
    let mut breakdown = Vec::new();
    perft_with(position, depth, |mv, nodes| breakdown.push((mv, nodes)));
    breakdown
}

fn count<P: MoveSource>(position: &P, depth: usize) -> u64 {
    match depth {
        0 => 1,
        1 => position
            .candidate_moves()
            .into_iter()
            .filter(|candidate| candidate.legality.is_legal())
            .count() as u64,
        _ => {
            let mut nodes = 0;
            for candidate in position.candidate_moves() {
                if !candidate.legality.is_legal() {
                    continue;
                }
                let mut child = position.clone();
                child.apply_move(candidate.mv);
                nodes += count(&child, depth - 1);
            }
            nodes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Legality;
    use std::cell::Cell;

    /// A synthetic tree: a node at `level` has `level + 2` candidates, of
    /// which every third is illegal.
    #[derive(Clone, Debug)]
    struct Synthetic {
        level: u32,
        path: Vec<u32>,
    }

    thread_local! {
        static APPLIED: Cell<u64> = const { Cell::new(0) };
    }

    impl MoveSource for Synthetic {
        type Move = u32;
        type Moves = Vec<Classified<u32>>;

        fn candidate_moves(&self) -> Self::Moves {
            (0..self.level + 2)
                .map(|i| {
                    let legality = if i % 3 == 2 {
                        Legality::LeavesKingInCheck
                    } else {
                        Legality::Legal
                    };
                    Classified::new(i, legality)
                })
                .collect()
        }

        fn apply_move(&mut self, mv: u32) {
            APPLIED.with(|n| n.set(n.get() + 1));
            self.path.push(mv);
            self.level += 1;
        }
    }

    fn root() -> Synthetic {
        Synthetic {
            level: 0,
            path: Vec::new(),
        }
    }

    fn legal_count(level: u32) -> u64 {
        (0..level + 2).filter(|i| i % 3 != 2).count() as u64
    }

    #[test]
    fn depth_one_counts_legal_candidates_without_playing() {
        APPLIED.with(|n| n.set(0));
        assert_eq!(count(&root(), 1), legal_count(0));
        assert_eq!(perft(&root(), 1, false), 2);
        APPLIED.with(|n| assert_eq!(n.get(), 0));
    }

    #[test]
    fn illegal_candidates_are_never_recursed() {
        // level 0: 2 legal of 2; level 1: 2 legal of 3; level 2: 3 legal of 4
        assert_eq!(perft(&root(), 2, false), 2 * 2);
        assert_eq!(perft(&root(), 3, false), 2 * 2 * 3);
    }

    #[test]
    fn depth_zero_is_one_leaf() {
        assert_eq!(perft(&root(), 0, false), 1);
        assert!(divide(&root(), 0).is_empty());
    }

    #[test]
    fn divide_sums_to_total() {
        for depth in 2..=4 {
            let breakdown = divide(&root(), depth);
            let total: u64 = breakdown.iter().map(|(_, n)| n).sum();
            assert_eq!(total, perft(&root(), depth, false));
            assert_eq!(breakdown.len() as u64, legal_count(0));
        }
    }

    #[test]
    fn printing_divide_counts_the_same() {
        for depth in 0..=3 {
            assert_eq!(perft(&root(), depth, true), perft(&root(), depth, false));
        }
        let board = Board::new();
        assert_eq!(perft(&board, 2, true), 400);
    }

    #[test]
    fn divide_is_silent_at_depth_one() {
        let mut calls = 0;
        let nodes = perft_with(&root(), 1, |_, _| calls += 1);
        assert_eq!(nodes, 2);
        assert_eq!(calls, 0);
    }

    #[test]
    fn root_position_is_untouched() {
        let start = root();
        perft(&start, 3, false);
        assert_eq!(start.level, 0);
        assert!(start.path.is_empty());
    }

    #[test]
    fn board_start_position_counts() {
        let board = Board::new();
        assert_eq!(perft(&board, 1, false), 20);
        assert_eq!(perft(&board, 2, false), 400);
        assert_eq!(perft(&board, 3, false), 8902);
    }

    #[test]
    fn board_depth_one_matches_move_source() {
        let board = Board::try_from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .unwrap();
        let legal = board.candidate_moves().legal_count() as u64;
        assert_eq!(perft(&board, 1, false), legal);
        assert_eq!(legal, 48);
    }

    #[test]
    fn repeated_calls_agree() {
        let board = Board::new();
        assert_eq!(perft(&board, 3, false), perft(&board, 3, false));
    }
}
