use clap::Parser;
use extfind::{run, Args};
use std::io::{self, BufWriter};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    // RUST_LOG, when set, overrides -v/-q
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match run(&args, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
