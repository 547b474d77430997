//! End-of-run summary and number formatting.

use std::fmt;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Outcome of one verification run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RunSummary {
    pub depth: usize,
    /// Fixtures actually verified
    pub fixture_count: usize,
    /// Fixtures whose count matched
    pub correct: usize,
    /// Leaf nodes summed over every verified fixture
    pub total_nodes: u64,
    /// Wall-clock time of the verification loop
    pub elapsed: Duration,
    /// Indices of mismatching fixtures, ascending
    pub failed: Vec<usize>,
}

impl RunSummary {
    pub fn new(depth: usize, fixture_count: usize) -> Self {
        RunSummary {
            depth,
            fixture_count,
            correct: 0,
            total_nodes: 0,
            elapsed: Duration::ZERO,
            failed: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, index: usize, nodes: u64, matched: bool) {
        self.total_nodes += nodes;
        if matched {
            self.correct += 1;
        } else {
            self.failed.push(index);
        }
    }

    pub fn all_correct(&self) -> bool {
        self.correct == self.fixture_count
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Nodes per second, truncated. Zero when no measurable time passed.
    pub fn nodes_per_second(&self) -> u64 {
        let seconds = self.elapsed_seconds();
        if seconds > 0.0 {
            (self.total_nodes as f64 / seconds) as u64
        } else {
            0
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{:<16}{}", "Depth:", self.depth)?;
        writeln!(f, "{:<16}{} of {}", "Correct:", self.correct, self.fixture_count)?;
        writeln!(f, "{:<16}{:.2}s", "Time elapsed:", self.elapsed_seconds())?;
        writeln!(f, "{:<16}{}", "Nps:", group_thousands(self.nodes_per_second()))?;
        writeln!(f, "{:<16}{}", "Total nodes:", group_thousands(self.total_nodes))
    }
}

/// Render `n` with a comma between each group of three digits.
///
/// ```
/// use chess_perft::harness::group_thousands;
///
/// assert_eq!(group_thousands(4865609), "4,865,609");
/// ```
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
