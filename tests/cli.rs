use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_chess_perft"))
        .args(args)
        .output()
        .expect("failed to spawn chess_perft")
}

#[test]
fn missing_depth_prints_usage() {
    let output = run_cli(&[]);
    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Depth must be provided using the -d flag"));
    assert!(stdout.contains("usage:"));
}

#[test]
fn out_of_range_depth_is_rejected() {
    for depth in ["0", "6"] {
        let output = run_cli(&["-d", depth]);
        assert_eq!(output.status.code(), Some(2));
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Depth should be within 1-5"));
    }
}

#[test]
fn summary_block_after_run() {
    let output = run_cli(&["-d", "1", "-fens", "5", "--show-progress"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    assert!(lines[0].starts_with("SUCCESS 0: rnbqkbnr/"));
    assert!(lines[4].starts_with("SUCCESS 4: "));
    assert_eq!(lines[5], "");
    assert_eq!(lines[6], "Depth:          1");
    assert_eq!(lines[7], "Correct:        5 of 5");
    assert!(lines[8].starts_with("Time elapsed:   ") && lines[8].ends_with('s'));
    assert!(lines[9].starts_with("Nps:            "));
    // 20 + 48 + 15 + 16 + 5
    assert_eq!(lines[10], "Total nodes:    104");
}

#[test]
fn quiet_run_prints_only_summary() {
    let output = run_cli(&["-fens", "3", "-d", "2"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("\nDepth:          2\n"));
    assert!(stdout.contains("Correct:        3 of 3\n"));
    // 400 + 2039 + 66
    assert!(stdout.contains("Total nodes:    2,505\n"));
}
