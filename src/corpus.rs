//! The regression corpus: 126 positions with known perft counts for depths 1-5.
//!
//! The positions exercise castling-rights combinations, en passant,
//! promotions, pins and checks, and pieces on the board edge. Fixture order
//! is fixed: the harness reports fixtures by their index here.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Deepest depth the corpus has expected counts for.
pub const MAX_DEPTH: usize = 5;

/// Number of fixtures in the corpus.
pub const FIXTURE_COUNT: usize = 126;

/// One regression case: a FEN and its perft counts at depths 1 to 5.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Fixture {
    pub fen: &'static str,
    pub expected: [u64; MAX_DEPTH],
}

impl Fixture {
    /// Expected node count at `depth`, or `None` outside `1..=MAX_DEPTH`.
    #[must_use]
    pub fn expected_at(&self, depth: usize) -> Option<u64> {
        depth
            .checked_sub(1)
            .and_then(|idx| self.expected.get(idx))
            .copied()
    }
}

/// All fixtures, in their declared order.
#[must_use]
pub fn fixtures() -> &'static [Fixture] {
    &FIXTURES
}

const fn fixture(fen: &'static str, expected: [u64; MAX_DEPTH]) -> Fixture {
    Fixture { fen, expected }
}

#[rustfmt::skip]
static FIXTURES: [Fixture; FIXTURE_COUNT] = [
    fixture("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", [20, 400, 8902, 197_281, 4_865_609]),
    fixture("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1", [48, 2039, 97_862, 4_085_603, 193_690_690]),
    fixture("4k3/8/8/8/8/8/8/4K2R w K - 0 1", [15, 66, 1197, 7059, 133_987]),
    fixture("4k3/8/8/8/8/8/8/R3K3 w Q - 0 1", [16, 71, 1287, 7626, 145_232]),
    fixture("4k2r/8/8/8/8/8/8/4K3 w k - 0 1", [5, 75, 459, 8290, 47_635]),
    fixture("r3k3/8/8/8/8/8/8/4K3 w q - 0 1", [5, 80, 493, 8897, 52_710]),
    fixture("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1", [26, 112, 3189, 17_945, 532_933]),
    fixture("r3k2r/8/8/8/8/8/8/4K3 w kq - 0 1", [5, 130, 782, 22_180, 118_882]),
    fixture("8/8/8/8/8/8/6k1/4K2R w K - 0 1", [12, 38, 564, 2219, 37_735]),
    fixture("8/8/8/8/8/8/1k6/R3K3 w Q - 0 1", [15, 65, 1018, 4573, 80_619]),
    fixture("4k2r/6K1/8/8/8/8/8/8 w k - 0 1", [3, 32, 134, 2073, 10_485]),
    fixture("r3k3/1K6/8/8/8/8/8/8 w q - 0 1", [4, 49, 243, 3991, 20_780]),
    fixture("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", [26, 568, 13_744, 314_346, 7_594_526]),
    fixture("r3k2r/8/8/8/8/8/8/1R2K2R w Kkq - 0 1", [25, 567, 14_095, 328_965, 8_153_719]),
    fixture("r3k2r/8/8/8/8/8/8/2R1K2R w Kkq - 0 1", [25, 548, 13_502, 312_835, 7_736_373]),
    fixture("r3k2r/8/8/8/8/8/8/R3K1R1 w Qkq - 0 1", [25, 547, 13_579, 316_214, 7_878_456]),
    fixture("1r2k2r/8/8/8/8/8/8/R3K2R w KQk - 0 1", [26, 583, 14_252, 334_705, 8_198_901]),
    fixture("2r1k2r/8/8/8/8/8/8/R3K2R w KQk - 0 1", [25, 560, 13_592, 317_324, 7_710_115]),
    fixture("r3k1r1/8/8/8/8/8/8/R3K2R w KQq - 0 1", [25, 560, 13_607, 320_792, 7_848_606]),
    fixture("4k3/8/8/8/8/8/8/4K2R b K - 0 1", [5, 75, 459, 8290, 47_635]),
    fixture("4k3/8/8/8/8/8/8/R3K3 b Q - 0 1", [5, 80, 493, 8897, 52_710]),
    fixture("4k2r/8/8/8/8/8/8/4K3 b k - 0 1", [15, 66, 1197, 7059, 133_987]),
    fixture("r3k3/8/8/8/8/8/8/4K3 b q - 0 1", [16, 71, 1287, 7626, 145_232]),
    fixture("4k3/8/8/8/8/8/8/R3K2R b KQ - 0 1", [5, 130, 782, 22_180, 118_882]),
    fixture("r3k2r/8/8/8/8/8/8/4K3 b kq - 0 1", [26, 112, 3189, 17_945, 532_933]),
    fixture("8/8/8/8/8/8/6k1/4K2R b K - 0 1", [3, 32, 134, 2073, 10_485]),
    fixture("8/8/8/8/8/8/1k6/R3K3 b Q - 0 1", [4, 49, 243, 3991, 20_780]),
    fixture("4k2r/6K1/8/8/8/8/8/8 b k - 0 1", [12, 38, 564, 2219, 37_735]),
    fixture("r3k3/1K6/8/8/8/8/8/8 b q - 0 1", [15, 65, 1018, 4573, 80_619]),
    fixture("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", [26, 568, 13_744, 314_346, 7_594_526]),
    fixture("r3k2r/8/8/8/8/8/8/1R2K2R b Kkq - 0 1", [26, 583, 14_252, 334_705, 8_198_901]),
    fixture("r3k2r/8/8/8/8/8/8/2R1K2R b Kkq - 0 1", [25, 560, 13_592, 317_324, 7_710_115]),
    fixture("r3k2r/8/8/8/8/8/8/R3K1R1 b Qkq - 0 1", [25, 560, 13_607, 320_792, 7_848_606]),
    fixture("1r2k2r/8/8/8/8/8/8/R3K2R b KQk - 0 1", [25, 567, 14_095, 328_965, 8_153_719]),
    fixture("2r1k2r/8/8/8/8/8/8/R3K2R b KQk - 0 1", [25, 548, 13_502, 312_835, 7_736_373]),
    fixture("r3k1r1/8/8/8/8/8/8/R3K2R b KQq - 0 1", [25, 547, 13_579, 316_214, 7_878_456]),
    fixture("8/1n4N1/2k5/8/8/5K2/1N4n1/8 w - - 0 1", [14, 195, 2760, 38_675, 570_726]),
    fixture("8/1k6/8/5N2/8/4n3/8/2K5 w - - 0 1", [11, 156, 1636, 20_534, 223_507]),
    fixture("8/8/4k3/3Nn3/3nN3/4K3/8/8 w - - 0 1", [19, 289, 4442, 73_584, 1_198_299]),
    fixture("K7/8/2n5/1n6/8/8/8/k6N w - - 0 1", [3, 51, 345, 5301, 38_348]),
    fixture("k7/8/2N5/1N6/8/8/8/K6n w - - 0 1", [17, 54, 835, 5910, 92_250]),
    fixture("8/1n4N1/2k5/8/8/5K2/1N4n1/8 b - - 0 1", [15, 193, 2816, 40_039, 582_642]),
    fixture("8/1k6/8/5N2/8/4n3/8/2K5 b - - 0 1", [16, 180, 2290, 24_640, 288_141]),
    fixture("8/8/3K4/3Nn3/3nN3/4k3/8/8 b - - 0 1", [4, 68, 1118, 16_199, 281_190]),
    fixture("K7/8/2n5/1n6/8/8/8/k6N b - - 0 1", [17, 54, 835, 5910, 92_250]),
    fixture("k7/8/2N5/1N6/8/8/8/K6n b - - 0 1", [3, 51, 345, 5301, 38_348]),
    fixture("B6b/8/8/8/2K5/4k3/8/b6B w - - 0 1", [17, 278, 4607, 76_778, 1_320_507]),
    fixture("8/8/1B6/7b/7k/8/2B1b3/7K w - - 0 1", [21, 316, 5744, 93_338, 1_713_368]),
    fixture("k7/B7/1B6/1B6/8/8/8/K6b w - - 0 1", [21, 144, 3242, 32_955, 787_524]),
    fixture("K7/b7/1b6/1b6/8/8/8/k6B w - - 0 1", [7, 143, 1416, 31_787, 310_862]),
    fixture("B6b/8/8/8/2K5/5k2/8/b6B b - - 0 1", [6, 106, 1829, 31_151, 530_585]),
    fixture("8/8/1B6/7b/7k/8/2B1b3/7K b - - 0 1", [17, 309, 5133, 93_603, 1_591_064]),
    fixture("k7/B7/1B6/1B6/8/8/8/K6b b - - 0 1", [7, 143, 1416, 31_787, 310_862]),
    fixture("K7/b7/1b6/1b6/8/8/8/k6B b - - 0 1", [21, 144, 3242, 32_955, 787_524]),
    fixture("7k/RR6/8/8/8/8/rr6/7K w - - 0 1", [19, 275, 5300, 104_342, 2_161_211]),
    fixture("R6r/8/8/2K5/5k2/8/8/r6R w - - 0 1", [36, 1027, 29_215, 771_461, 20_506_480]),
    fixture("7k/RR6/8/8/8/8/rr6/7K b - - 0 1", [19, 275, 5300, 104_342, 2_161_211]),
    fixture("R6r/8/8/2K5/5k2/8/8/r6R b - - 0 1", [36, 1027, 29_227, 771_368, 20_521_342]),
    fixture("6kq/8/8/8/8/8/8/7K w - - 0 1", [2, 36, 143, 3637, 14_893]),
    fixture("6KQ/8/8/8/8/8/8/7k b - - 0 1", [2, 36, 143, 3637, 14_893]),
    fixture("K7/8/8/3Q4/4q3/8/8/7k w - - 0 1", [6, 35, 495, 8349, 166_741]),
    fixture("6qk/8/8/8/8/8/8/7K b - - 0 1", [22, 43, 1015, 4167, 105_749]),
    fixture("6KQ/8/8/8/8/8/8/7k b - - 0 1", [2, 36, 143, 3637, 14_893]),
    fixture("K7/8/8/3Q4/4q3/8/8/7k b - - 0 1", [6, 35, 495, 8349, 166_741]),
    fixture("8/8/8/8/8/K7/P7/k7 w - - 0 1", [3, 7, 43, 199, 1347]),
    fixture("8/8/8/8/8/7K/7P/7k w - - 0 1", [3, 7, 43, 199, 1347]),
    fixture("K7/p7/k7/8/8/8/8/8 w - - 0 1", [1, 3, 12, 80, 342]),
    fixture("7K/7p/7k/8/8/8/8/8 w - - 0 1", [1, 3, 12, 80, 342]),
    fixture("8/2k1p3/3pP3/3P2K1/8/8/8/8 w - - 0 1", [7, 35, 210, 1091, 7028]),
    fixture("8/8/8/8/8/K7/P7/k7 b - - 0 1", [1, 3, 12, 80, 342]),
    fixture("8/8/8/8/8/7K/7P/7k b - - 0 1", [1, 3, 12, 80, 342]),
    fixture("K7/p7/k7/8/8/8/8/8 b - - 0 1", [3, 7, 43, 199, 1347]),
    fixture("7K/7p/7k/8/8/8/8/8 b - - 0 1", [3, 7, 43, 199, 1347]),
    fixture("8/2k1p3/3pP3/3P2K1/8/8/8/8 b - - 0 1", [5, 35, 182, 1091, 5408]),
    fixture("8/8/8/8/8/4k3/4P3/4K3 w - - 0 1", [2, 8, 44, 282, 1814]),
    fixture("4k3/4p3/4K3/8/8/8/8/8 b - - 0 1", [2, 8, 44, 282, 1814]),
    fixture("8/8/7k/7p/7P/7K/8/8 w - - 0 1", [3, 9, 57, 360, 1969]),
    fixture("8/8/k7/p7/P7/K7/8/8 w - - 0 1", [3, 9, 57, 360, 1969]),
    fixture("8/8/3k4/3p4/3P4/3K4/8/8 w - - 0 1", [5, 25, 180, 1294, 8296]),
    fixture("8/3k4/3p4/8/3P4/3K4/8/8 w - - 0 1", [8, 61, 483, 3213, 23_599]),
    fixture("8/8/3k4/3p4/8/3P4/3K4/8 w - - 0 1", [8, 61, 411, 3213, 21_637]),
    fixture("k7/8/3p4/8/3P4/8/8/7K w - - 0 1", [4, 15, 90, 534, 3450]),
    fixture("8/8/7k/7p/7P/7K/8/8 b - - 0 1", [3, 9, 57, 360, 1969]),
    fixture("8/8/k7/p7/P7/K7/8/8 b - - 0 1", [3, 9, 57, 360, 1969]),
    fixture("8/8/3k4/3p4/3P4/3K4/8/8 b - - 0 1", [5, 25, 180, 1294, 8296]),
    fixture("8/3k4/3p4/8/3P4/3K4/8/8 b - - 0 1", [8, 61, 411, 3213, 21_637]),
    fixture("8/8/3k4/3p4/8/3P4/3K4/8 b - - 0 1", [8, 61, 483, 3213, 23_599]),
    fixture("k7/8/3p4/8/3P4/8/8/7K b - - 0 1", [4, 15, 89, 537, 3309]),
    fixture("7k/3p4/8/8/3P4/8/8/K7 w - - 0 1", [4, 19, 117, 720, 4661]),
    fixture("7k/8/8/3p4/8/8/3P4/K7 w - - 0 1", [5, 19, 116, 716, 4786]),
    fixture("k7/8/8/7p/6P1/8/8/K7 w - - 0 1", [5, 22, 139, 877, 6112]),
    fixture("k7/8/7p/8/8/6P1/8/K7 w - - 0 1", [4, 16, 101, 637, 4354]),
    fixture("k7/8/8/6p1/7P/8/8/K7 w - - 0 1", [5, 22, 139, 877, 6112]),
    fixture("k7/8/6p1/8/8/7P/8/K7 w - - 0 1", [4, 16, 101, 637, 4354]),
    fixture("k7/8/8/3p4/4p3/8/8/7K w - - 0 1", [3, 15, 84, 573, 3013]),
    fixture("k7/8/3p4/8/8/4P3/8/7K w - - 0 1", [4, 16, 101, 637, 4271]),
    fixture("7k/3p4/8/8/3P4/8/8/K7 b - - 0 1", [5, 19, 117, 720, 5014]),
    fixture("7k/8/8/3p4/8/8/3P4/K7 b - - 0 1", [4, 19, 117, 712, 4658]),
    fixture("k7/8/8/7p/6P1/8/8/K7 b - - 0 1", [5, 22, 139, 877, 6112]),
    fixture("k7/8/7p/8/8/6P1/8/K7 b - - 0 1", [4, 16, 101, 637, 4354]),
    fixture("k7/8/8/6p1/7P/8/8/K7 b - - 0 1", [5, 22, 139, 877, 6112]),
    fixture("k7/8/6p1/8/8/7P/8/K7 b - - 0 1", [4, 16, 101, 637, 4354]),
    fixture("k7/8/8/3p4/4p3/8/8/7K b - - 0 1", [5, 15, 102, 569, 4337]),
    fixture("k7/8/3p4/8/8/4P3/8/7K b - - 0 1", [4, 16, 101, 637, 4271]),
    fixture("7k/8/8/p7/1P6/8/8/7K w - - 0 1", [5, 22, 139, 877, 6112]),
    fixture("7k/8/p7/8/8/1P6/8/7K w - - 0 1", [4, 16, 101, 637, 4354]),
    fixture("7k/8/8/1p6/P7/8/8/7K w - - 0 1", [5, 22, 139, 877, 6112]),
    fixture("7k/8/1p6/8/8/P7/8/7K w - - 0 1", [4, 16, 101, 637, 4354]),
    fixture("k7/7p/8/8/8/8/6P1/K7 w - - 0 1", [5, 25, 161, 1035, 7574]),
    fixture("k7/6p1/8/8/8/8/7P/K7 w - - 0 1", [5, 25, 161, 1035, 7574]),
    fixture("3k4/3pp3/8/8/8/8/3PP3/3K4 w - - 0 1", [7, 49, 378, 2902, 24_122]),
    fixture("7k/8/8/p7/1P6/8/8/7K b - - 0 1", [5, 22, 139, 877, 6112]),
    fixture("7k/8/p7/8/8/1P6/8/7K b - - 0 1", [4, 16, 101, 637, 4354]),
    fixture("7k/8/8/1p6/P7/8/8/7K b - - 0 1", [5, 22, 139, 877, 6112]),
    fixture("7k/8/1p6/8/8/P7/8/7K b - - 0 1", [4, 16, 101, 637, 4354]),
    fixture("k7/7p/8/8/8/8/6P1/K7 b - - 0 1", [5, 25, 161, 1035, 7574]),
    fixture("k7/6p1/8/8/8/8/7P/K7 b - - 0 1", [5, 25, 161, 1035, 7574]),
    fixture("3k4/3pp3/8/8/8/8/3PP3/3K4 b - - 0 1", [7, 49, 378, 2902, 24_122]),
    fixture("8/Pk6/8/8/8/8/6Kp/8 w - - 0 1", [11, 97, 887, 8048, 90_606]),
    fixture("n1n5/1Pk5/8/8/8/8/5Kp1/5N1N w - - 0 1", [24, 421, 7421, 124_608, 2_193_768]),
    fixture("8/PPPk4/8/8/8/8/4Kppp/8 w - - 0 1", [18, 270, 4699, 79_355, 1_533_145]),
    fixture("n1n5/PPPk4/8/8/8/8/4Kppp/5N1N w - - 0 1", [24, 496, 9483, 182_838, 3_605_103]),
    fixture("8/Pk6/8/8/8/8/6Kp/8 b - - 0 1", [11, 97, 887, 8048, 90_606]),
    fixture("n1n5/1Pk5/8/8/8/8/5Kp1/5N1N b - - 0 1", [24, 421, 7421, 124_608, 2_193_768]),
    fixture("8/PPPk4/8/8/8/8/4Kppp/8 b - - 0 1", [18, 270, 4699, 79_355, 1_533_145]),
    fixture("n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1", [24, 496, 9483, 182_838, 3_605_103]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn corpus_size_and_order() {
        let all = fixtures();
        assert_eq!(all.len(), FIXTURE_COUNT);
        assert_eq!(
            all[0].fen,
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
        );
        assert_eq!(all[1].expected_at(3), Some(97_862));
        assert_eq!(
            all[FIXTURE_COUNT - 1].fen,
            "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1"
        );
    }

    #[test]
    fn expected_at_bounds() {
        let first = fixtures()[0];
        assert_eq!(first.expected_at(0), None);
        assert_eq!(first.expected_at(1), Some(20));
        assert_eq!(first.expected_at(5), Some(4_865_609));
        assert_eq!(first.expected_at(6), None);
    }

    #[test]
    fn every_fixture_parses() {
        for (idx, f) in fixtures().iter().enumerate() {
            assert!(Board::try_from_fen(f.fen).is_ok(), "fixture {idx}: {}", f.fen);
        }
    }

    #[test]
    fn counts_grow_with_depth() {
        for f in fixtures() {
            assert!(f.expected.windows(2).all(|w| w[0] <= w[1]), "{}", f.fen);
        }
    }

    #[test]
    fn per_depth_totals() {
        let total = |depth: usize| -> u64 {
            fixtures()
                .iter()
                .filter_map(|f| f.expected_at(depth))
                .sum()
        };
        assert_eq!(total(1), 1408);
        assert_eq!(total(2), 21_134);
        assert_eq!(total(3), 486_175);
    }
}
