//! loxi - Lox lexical front end.
//!
//! Scans a script (or lines typed at the prompt) and prints the resulting
//! token stream.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use loxi_drv::{run_file, run_repl, EmitFormat};

/// Lox lexical front end
#[derive(Parser, Debug)]
#[command(name = "loxi")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scans Lox source and prints the token stream", long_about = None)]
struct Cli {
    /// Script to scan; starts the interactive prompt when omitted
    script: Option<PathBuf>,

    /// Output format for the token stream
    #[arg(long, value_enum, default_value_t = EmitFormat::Text)]
    emit: EmitFormat,

    /// Enable verbose output
    #[arg(short, long, env = "LOXI_VERBOSE")]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match &cli.script {
        Some(path) => run_file(path, cli.emit),
        None => run_repl(cli.emit).map(|_| false),
    };

    match result {
        // Lexical errors in the scanned source are a data error, not a
        // driver failure.
        Ok(true) => ExitCode::from(65),
        Ok(false) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        },
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .ok();
}
