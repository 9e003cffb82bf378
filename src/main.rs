use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use memo_match::cli::{self, report, Cli, Commands};
use memo_match::Lexicon;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // Human-readable message on stderr, structured payload for callers on stdout
            let _ = e.print();
            println!("{}", report::error_payload(report::USAGE));
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("memo_match=debug,info")
    } else {
        EnvFilter::new("memo_match=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let lexicon = Lexicon::builtin();

    match run(cli, &lexicon) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", report::fault_payload(&e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, lexicon: &Lexicon) -> anyhow::Result<()> {
    match cli.command {
        Commands::Match(args) => cli::match_query::run(args, cli.format, lexicon),
        Commands::Compare(args) => cli::compare::run(args, cli.format, lexicon),
        Commands::List(args) => cli::list::run(args, cli.format),
        Commands::Synonyms(args) => cli::synonyms::run(args, cli.format, lexicon),
    }
}
