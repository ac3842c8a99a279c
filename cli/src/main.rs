//! wordup - Correct Horse Battery Staple-style passphrase generator

use std::io::Write;
use std::process::ExitCode;

use tracing::debug;
use wordup::{args, commands, trace, CliError, Config};

fn main() -> ExitCode {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    trace::init_tracing();

    let config = Config::from_env();
    log_startup_info(&config);

    let argv: Vec<String> = std::env::args().skip(1).collect();
    match execute(&argv, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("wordup: {}", e);
            if matches!(e, CliError::Usage(_)) {
                eprintln!();
                eprint!("{}", args::USAGE);
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn execute(argv: &[String], config: &Config) -> Result<(), CliError> {
    let invocation = args::parse_args(argv)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&invocation, config, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Log configuration (never the passphrase).
fn log_startup_info(config: &Config) {
    debug!(
        wordlist = ?config.wordlist,
        bits = config.bits,
        separator = %config.separator,
        "Loaded configuration"
    );
}
