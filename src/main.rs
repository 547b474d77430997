use std::io::{self, Write};
use std::process::ExitCode;

use chess_perft::harness::{self, RunConfig, USAGE};
use chess_perft::{corpus, init_attack_tables};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    init_attack_tables();

    let config = match RunConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            println!("{err}");
            println!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = harness::run(&config, corpus::fixtures(), &mut out)
        .and_then(|summary| write!(out, "{summary}").map_err(Into::into));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
