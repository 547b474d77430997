//! Run configuration from command-line arguments.
//!
//! Flags may come in any order. Unrecognized arguments are ignored, and a
//! flag given twice keeps its last value. Numeric values are read the way
//! C's `atoi` reads them: leading digits count, anything else is zero.

use crate::corpus::{FIXTURE_COUNT, MAX_DEPTH};

use super::error::ConfigError;

/// One-line usage hint printed on configuration errors.
pub const USAGE: &str = "usage: chess_perft -d <1-5> [-fens <count>] [--show-progress] [--divide]";

/// Parameters of one verification run. Built once, never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Perft depth, 1 to 5
    pub depth: usize,
    /// How many leading fixtures to verify
    pub fixture_count: usize,
    /// Print a line for each matching fixture too
    pub show_progress: bool,
    /// Print the per-move breakdown for every fixture
    pub divide: bool,
}

impl RunConfig {
    /// A config for `depth` over the whole corpus with no extra output.
    pub fn new(depth: usize) -> Result<Self, ConfigError> {
        check_depth(depth as i64)?;
        Ok(RunConfig {
            depth,
            fixture_count: FIXTURE_COUNT,
            show_progress: false,
            divide: false,
        })
    }

    /// Parse the arguments that follow the program name.
    ///
    /// # Example
    /// ```
    /// use chess_perft::harness::RunConfig;
    ///
    /// let config = RunConfig::from_args(["-d", "3", "-fens", "10"]).unwrap();
    /// assert_eq!(config.depth, 3);
    /// assert_eq!(config.fixture_count, 10);
    /// ```
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        if args.len() < 2 {
            return Err(ConfigError::MissingDepth);
        }

        let mut depth = 0i64;
        let mut fixture_count = FIXTURE_COUNT as i64;
        let mut show_progress = false;
        let mut divide = false;

        // A flag's value is also looked at as a flag in its own right.
        for (i, arg) in args.iter().enumerate() {
            let value = || args.get(i + 1).map_or(0, |v| atoi(v.as_ref()));
            match arg.as_ref() {
                "-d" => depth = value(),
                "-fens" => fixture_count = value(),
                "--show-progress" => show_progress = true,
                "--divide" => divide = true,
                _ => {}
            }
        }

        check_depth(depth)?;
        Ok(RunConfig {
            depth: depth as usize,
            fixture_count: fixture_count.clamp(0, FIXTURE_COUNT as i64) as usize,
            show_progress,
            divide,
        })
    }
}

fn check_depth(depth: i64) -> Result<(), ConfigError> {
    if (1..=MAX_DEPTH as i64).contains(&depth) {
        Ok(())
    } else {
        Err(ConfigError::DepthOutOfRange { found: depth })
    }
}

/// Leading whitespace, an optional sign, then decimal digits; 0 if none.
fn atoi(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut value = 0i64;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }
    if negative {
        -value
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_whole_corpus() {
        let config = RunConfig::from_args(["-d", "2"]).unwrap();
        assert_eq!(config, RunConfig::new(2).unwrap());
        assert_eq!(config.fixture_count, FIXTURE_COUNT);
        assert!(!config.show_progress);
        assert!(!config.divide);
    }

    #[test]
    fn flags_in_any_order() {
        let config =
            RunConfig::from_args(["--divide", "-fens", "4", "--show-progress", "-d", "5"]).unwrap();
        assert_eq!(config.depth, 5);
        assert_eq!(config.fixture_count, 4);
        assert!(config.show_progress);
        assert!(config.divide);
    }

    #[test]
    fn too_few_arguments() {
        assert_eq!(
            RunConfig::from_args(Vec::<String>::new()),
            Err(ConfigError::MissingDepth)
        );
        assert_eq!(RunConfig::from_args(["-d"]), Err(ConfigError::MissingDepth));
    }

    #[test]
    fn missing_or_zero_depth() {
        assert_eq!(
            RunConfig::from_args(["-fens", "3"]),
            Err(ConfigError::DepthOutOfRange { found: 0 })
        );
        assert_eq!(
            RunConfig::from_args(["-d", "0"]),
            Err(ConfigError::DepthOutOfRange { found: 0 })
        );
        assert_eq!(
            RunConfig::from_args(["-d", "abc"]),
            Err(ConfigError::DepthOutOfRange { found: 0 })
        );
        assert_eq!(
            RunConfig::from_args(["--divide", "-d"]),
            Err(ConfigError::DepthOutOfRange { found: 0 })
        );
    }

    #[test]
    fn depth_beyond_corpus_is_rejected() {
        assert_eq!(
            RunConfig::from_args(["-d", "6"]),
            Err(ConfigError::DepthOutOfRange { found: 6 })
        );
        assert_eq!(
            RunConfig::from_args(["-d", "-1"]),
            Err(ConfigError::DepthOutOfRange { found: -1 })
        );
        assert!(RunConfig::new(0).is_err());
    }

    #[test]
    fn unknown_flags_are_ignored() {
        let config = RunConfig::from_args(["--verbose", "-d", "1", "-x"]).unwrap();
        assert_eq!(config.depth, 1);
    }

    #[test]
    fn fixture_count_is_clamped() {
        let config = RunConfig::from_args(["-d", "1", "-fens", "1000"]).unwrap();
        assert_eq!(config.fixture_count, FIXTURE_COUNT);
        let config = RunConfig::from_args(["-d", "1", "-fens", "-4"]).unwrap();
        assert_eq!(config.fixture_count, 0);
    }

    #[test]
    fn last_repeat_wins() {
        let config = RunConfig::from_args(["-d", "1", "-d", "3"]).unwrap();
        assert_eq!(config.depth, 3);
    }

    #[test]
    fn atoi_reads_leading_digits() {
        assert_eq!(atoi("42"), 42);
        assert_eq!(atoi("  7x"), 7);
        assert_eq!(atoi("-12"), -12);
        assert_eq!(atoi("+3"), 3);
        assert_eq!(atoi("x7"), 0);
        assert_eq!(atoi(""), 0);
        assert_eq!(atoi("-"), 0);
    }
}
