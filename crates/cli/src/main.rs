use bookbot_cli::args::Args;
use bookbot_cli::config::Config;
use bookbot_cli::error::Result;
use bookbot_cli::presentation;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    // Convert args to engine::Config
    let config = Config::from(args);
    let report = bookbot_engine::run(&config)?;
    presentation::print_report(&report, &config)
}

/// Trim warnings from the engine stay visible without configuration;
/// `RUST_LOG` still overrides the filter.
fn init_logging() {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();
}
