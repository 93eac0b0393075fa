use std::{
    fs::File,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use tokenizer::{
    errors::errors::{Error, ErrorTip},
    lexer::lexer::Lexer,
};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tokenize")]
#[command(about = "Print the tokens of a source file", version)]
struct Cli {
    /// Source file to tokenize, stdin when omitted
    path: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: Level,

    /// Print only token values, one per line
    #[arg(long)]
    values_only: bool,
}

fn init_logging(level: Level) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tokenizer={},warn", level)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let (source, name): (Box<dyn Read>, String) = match &cli.path {
        Some(path) => match File::open(path) {
            Ok(file) => (Box::new(file), path.to_string_lossy().into_owned()),
            Err(err) => {
                eprintln!("Error: failed to open {}: {}", path.display(), err);
                return ExitCode::FAILURE;
            }
        },
        None => (Box::new(io::stdin().lock()), String::from("<stdin>")),
    };

    info!(source = %name, "tokenizing");

    let mut count = 0usize;
    for token in Lexer::new(source) {
        if let Some(error) = &token.error {
            display_error(error, &name);
            return ExitCode::FAILURE;
        }

        if cli.values_only {
            println!("{}", token.value);
        } else {
            println!("{}:{} {} {:?}", token.line, token.column, token.kind, token.value);
        }
        count += 1;
    }

    info!(source = %name, tokens = count, "done");
    ExitCode::SUCCESS
}

fn display_error(error: &Error, name: &str) {
    /*
        Error: SourceRead (Reading the source failed: ...)
        -> main.src:4:12
    */

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}:{}", name, error.get_position());
}
