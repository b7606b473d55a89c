use clap::{ArgAction, Parser as ClapParser};
use fetchpath::cli::{self, CheckOptions, CliError};
use fetchpath::output::DEFAULT_INDENT;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(ClapParser)]
#[command(name = "fetch")]
#[command(about = "Fetch - Query JSON with javascript-style accessors like .foo[0][\"bar\"]")]
#[command(version)]
struct Cli {
    /// The accessor expression, e.g. '.users[0].name'
    expression: String,

    /// JSON input (reads from stdin if neither this nor --file is given)
    #[arg(short, long, conflicts_with = "file")]
    input: Option<String>,

    /// Read JSON input from a file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print the result on a single line
    #[arg(short, long)]
    compact: bool,

    /// Spaces per indentation level
    #[arg(long, default_value_t = DEFAULT_INDENT)]
    indent: usize,

    /// Only validate syntax, don't execute
    #[arg(long)]
    syntax_only: bool,

    /// Print the compiled access steps, one per line
    #[arg(long)]
    steps: bool,

    /// Increase log verbosity (-v debug, -vv trace); FETCH_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_env("FETCH_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let needs_input = !(cli.syntax_only || cli.steps);
    let input = if needs_input {
        read_input(cli.input, cli.file.as_ref())?
    } else {
        None
    };

    let options = CheckOptions {
        query: cli.expression,
        input,
        compact: cli.compact,
        indent: cli.indent,
        syntax_only: cli.syntax_only,
        show_steps: cli.steps,
    };

    let result = cli::execute_check(&options)?;
    println!("{}", cli::render(&result, &options)?);
    Ok(())
}

fn read_input(input: Option<String>, file: Option<&PathBuf>) -> Result<Option<String>, CliError> {
    let input = match (input, file) {
        (Some(s), _) => Some(s),
        (None, Some(path)) => Some(std::fs::read_to_string(path)?),
        (None, None) if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        (None, None) => None,
    };
    Ok(input)
}
