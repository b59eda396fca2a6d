use std::{
    fs::read_to_string,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use clap::Parser;
use sql_lexer::{render_diagnostic, Tokenizer};

#[derive(Parser)]
#[command(author, version, about = "Tokenize SQL statements")]
struct Cli {
    /// SQL file to tokenize. Reads standard input when omitted
    file: Option<PathBuf>,

    /// Tokenize this statement instead of reading a file
    #[arg(short, long, conflicts_with = "file")]
    query: Option<String>,

    /// Print the line and column each token starts at
    #[arg(long)]
    spans: bool,

    /// Show each diagnostic with the offending source line
    #[arg(long)]
    explain: bool,

    /// Exit with a failure status if anything could not be tokenized
    #[arg(long)]
    strict: bool,
}

fn read_input(cli: &Cli) -> io::Result<(String, String)> {
    if let Some(query) = &cli.query {
        return Ok((query.clone(), String::from("<query>")));
    }

    match &cli.file {
        Some(path) => Ok((read_to_string(path)?, path.display().to_string())),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok((source, String::from("<stdin>")))
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let (source, name) = match read_input(&cli) {
        Ok(input) => input,
        Err(err) => {
            log::error!("Failed to read input: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let stream = Tokenizer::new().tokenize(&source);
    log::info!("Tokenized {} in {:?}", name, start.elapsed());

    for token in &stream.tokens {
        if cli.spans {
            println!("{}:{} {}", token.span.start.line, token.span.start.column, token);
        } else {
            println!("{}", token);
        }
    }

    if cli.explain {
        for diagnostic in &stream.diagnostics {
            eprint!("{}", render_diagnostic(diagnostic, &source, &name));
        }
    }

    if cli.strict && !stream.is_clean() {
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
