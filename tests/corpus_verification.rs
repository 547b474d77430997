use chess_perft::corpus::{fixtures, FIXTURE_COUNT};
use chess_perft::harness::{self, RunConfig};
use chess_perft::{init_attack_tables, perft, Board};

fn run(config: &RunConfig) -> (harness::RunSummary, String) {
    init_attack_tables();
    let mut out = Vec::new();
    let summary = harness::run(config, fixtures(), &mut out).expect("corpus run failed");
    (summary, String::from_utf8(out).expect("output is utf-8"))
}

#[test]
fn whole_corpus_matches_at_depth_two() {
    let (summary, output) = run(&RunConfig::new(2).unwrap());
    assert_eq!(summary.correct, FIXTURE_COUNT);
    assert_eq!(summary.fixture_count, FIXTURE_COUNT);
    assert_eq!(summary.total_nodes, 21_134);
    assert!(summary.failed.is_empty());
    assert!(output.is_empty(), "unexpected output:\n{output}");
}

#[test]
fn whole_corpus_matches_at_depth_three() {
    let (summary, _) = run(&RunConfig::new(3).unwrap());
    assert!(summary.all_correct(), "failed fixtures: {:?}", summary.failed);
    assert_eq!(summary.total_nodes, 486_175);
}

#[test]
#[ignore = "slow without optimizations"]
fn whole_corpus_matches_at_depth_four() {
    let (summary, _) = run(&RunConfig::new(4).unwrap());
    assert!(summary.all_correct(), "failed fixtures: {:?}", summary.failed);
}

#[test]
fn fixture_prefix_with_progress() {
    let config = RunConfig::from_args(["-d", "1", "-fens", "10", "--show-progress"]).unwrap();
    let (summary, output) = run(&config);
    assert_eq!(summary.fixture_count, 10);
    assert_eq!(summary.correct, 10);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 10);
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(*line, format!("SUCCESS {i}: {}", fixtures()[i].fen));
    }
}

#[test]
fn divide_output_per_fixture() {
    let config = RunConfig::from_args(["-d", "2", "-fens", "2", "--divide"]).unwrap();
    let (summary, output) = run(&config);
    assert!(summary.all_correct());

    // No progress flag, so every line is a divide line.
    let sum: u64 = output
        .lines()
        .map(|line| {
            let (mv, nodes) = line.split_once(": ").expect("divide line");
            assert!((4..=5).contains(&mv.len()), "bad move text {mv}");
            nodes.parse::<u64>().expect("node count")
        })
        .sum();
    assert_eq!(sum, summary.total_nodes);
    assert_eq!(output.lines().count(), 20 + 48);
}

#[test]
fn corpus_counts_agree_with_direct_perft() {
    init_attack_tables();
    for fixture in fixtures().iter().step_by(9) {
        let board = Board::try_from_fen(fixture.fen).unwrap();
        for depth in 1..=2 {
            assert_eq!(
                Some(perft(&board, depth, false)),
                fixture.expected_at(depth),
                "{} at depth {depth}",
                fixture.fen
            );
        }
    }
}
