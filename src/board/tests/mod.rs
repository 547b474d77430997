//! Board module tests.
//!
//! - `perft.rs` - Known leaf counts for standard positions
//! - `play.rs` - Copy-make correctness and hash maintenance
//! - `edge_cases.rs` - Special moves and unusual positions
//! - `proptest.rs` - Property-based tests over random games
