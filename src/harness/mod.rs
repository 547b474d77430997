//! Verification harness: runs perft over corpus fixtures and compares the
//! counts against the recorded ones.

mod config;
mod error;
mod report;

pub use config::{RunConfig, USAGE};
pub use error::{ConfigError, HarnessError};
pub use report::{group_thousands, RunSummary};

use std::io::{self, Write};
use std::time::Instant;

use log::{debug, info, warn};

use crate::board::Board;
use crate::corpus::Fixture;
use crate::perft::{perft, perft_with};

/// Verify the first `config.fixture_count` fixtures at `config.depth`.
///
/// Writes `FAIL <i>: <fen>` for every mismatch, and `SUCCESS <i>: <fen>`
/// for every match when progress is on. With divide on, each fixture's
/// `<move>: <count>` lines come before its verdict line. Mismatches are
/// counted, never fatal; the run stops early only on an unparsable fixture
/// or a write error.
pub fn run<W: Write>(
    config: &RunConfig,
    fixtures: &[Fixture],
    out: &mut W,
) -> Result<RunSummary, HarnessError> {
    let count = config.fixture_count.min(fixtures.len());
    let mut summary = RunSummary::new(config.depth, count);
    info!("verifying {count} fixtures at depth {}", config.depth);

    let start = Instant::now();
    for (index, fixture) in fixtures.iter().take(count).enumerate() {
        let board = Board::try_from_fen(fixture.fen)
            .map_err(|source| HarnessError::Fen { index, source })?;

        let nodes = if config.divide {
            divide_into(out, &board, config.depth)?
        } else {
            perft(&board, config.depth, false)
        };

        let expected = fixture.expected_at(config.depth);
        let matched = expected == Some(nodes);
        summary.record(index, nodes, matched);
        debug!("fixture {index}: {nodes} nodes");

        if matched {
            if config.show_progress {
                writeln!(out, "SUCCESS {index}: {}", fixture.fen)?;
            }
        } else {
            warn!(
                "fixture {index} mismatch: expected {expected:?}, counted {nodes} ({})",
                fixture.fen
            );
            writeln!(out, "FAIL {index}: {}", fixture.fen)?;
        }
    }
    summary.elapsed = start.elapsed();

    info!(
        "{} of {} correct, {} nodes",
        summary.correct, summary.fixture_count, summary.total_nodes
    );
    Ok(summary)
}

fn divide_into<W: Write>(out: &mut W, board: &Board, depth: usize) -> io::Result<u64> {
    let mut result = Ok(());
    let nodes = perft_with(board, depth, |mv, nodes| {
        if result.is_ok() {
            result = writeln!(out, "{mv}: {nodes}");
        }
    });
    result.map(|()| nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::fixtures;

    fn output(config: &RunConfig, fixtures: &[Fixture]) -> (RunSummary, String) {
        let mut out = Vec::new();
        let summary = run(config, fixtures, &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn quiet_when_everything_matches() {
        let config = RunConfig {
            fixture_count: 5,
            ..RunConfig::new(2).unwrap()
        };
        let (summary, text) = output(&config, fixtures());
        assert!(summary.all_correct());
        assert_eq!(summary.fixture_count, 5);
        assert!(text.is_empty());
    }

    #[test]
    fn progress_lines_for_matches() {
        let config = RunConfig {
            fixture_count: 3,
            show_progress: true,
            ..RunConfig::new(1).unwrap()
        };
        let (_, text) = output(&config, fixtures());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], format!("SUCCESS 0: {}", fixtures()[0].fen));
        assert!(lines[2].starts_with("SUCCESS 2: "));
    }

    #[test]
    fn mismatch_is_reported_and_run_continues() {
        let mut bad = fixtures()[..3].to_vec();
        bad[1].expected[0] += 1;
        let config = RunConfig {
            fixture_count: 3,
            ..RunConfig::new(1).unwrap()
        };
        let (summary, text) = output(&config, &bad);
        assert_eq!(summary.correct, 2);
        assert_eq!(summary.failed, vec![1]);
        assert_eq!(text, format!("FAIL 1: {}\n", bad[1].fen));
    }

    #[test]
    fn divide_lines_precede_verdict() {
        let config = RunConfig {
            fixture_count: 1,
            show_progress: true,
            divide: true,
            ..RunConfig::new(2).unwrap()
        };
        let (summary, text) = output(&config, fixtures());
        let lines: Vec<&str> = text.lines().collect();
        let (verdict, breakdown) = lines.split_last().unwrap();
        assert!(verdict.starts_with("SUCCESS 0: "));
        let sum: u64 = breakdown
            .iter()
            .map(|line| line.rsplit(": ").next().unwrap().parse::<u64>().unwrap())
            .sum();
        assert_eq!(sum, summary.total_nodes);
    }

    #[test]
    fn zero_fixtures_is_an_empty_run() {
        let config = RunConfig {
            fixture_count: 0,
            ..RunConfig::new(3).unwrap()
        };
        let (summary, text) = output(&config, fixtures());
        assert_eq!(summary.correct, 0);
        assert_eq!(summary.total_nodes, 0);
        assert!(text.is_empty());
    }

    #[test]
    fn bad_fixture_stops_the_run() {
        let broken = [Fixture {
            fen: "not a position",
            expected: [1, 1, 1, 1, 1],
        }];
        let config = RunConfig::new(1).unwrap();
        let err = run(&config, &broken, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, HarnessError::Fen { index: 0, .. }));
    }
}
