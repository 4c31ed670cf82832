//! Wordle Assist - CLI
//!
//! Interactive TUI plus one-shot commands for ranking Wordle guesses.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use wordle_assist::{
    commands::{SuggestConfig, check_word, run_suggest},
    output::{print_check_result, print_suggest_result},
    solver::EngineConfig,
    wordlists::{WordCorpus, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_assist",
    about = "Narrow down Wordle answers from tile colors and rank the next guess",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer list file, one word per line (default: embedded list)
    #[arg(long, global = true, value_name = "PATH")]
    answers: Option<PathBuf>,

    /// Extra guess-only words file, one word per line (default: embedded list)
    #[arg(long, global = true, value_name = "PATH")]
    allowed: Option<PathBuf>,

    /// Delay before the engine starts work on a new board
    #[arg(long, global = true, value_name = "MS", default_value_t = 100)]
    debounce_ms: u64,

    /// Log more (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Rank guesses for a board given on the command line
    Suggest {
        /// A guess with its colors, e.g. crane=GY-G- (repeat in guess order)
        #[arg(short = 'g', long = "guess", value_name = "WORD=FEEDBACK")]
        guesses: Vec<String>,
    },

    /// Check whether a word is accepted as a guess
    Check {
        /// Word to check
        word: String,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp_millis()
        .init();
}

/// Build the corpus from the embedded lists, replacing any list given by flag
fn load_corpus(cli: &Cli) -> Result<WordCorpus> {
    use wordle_assist::wordlists::{ALLOWED, ANSWERS, COMMON, loader::words_from_slice};

    let answers = match &cli.answers {
        Some(path) => load_from_file(path)?,
        None => words_from_slice(ANSWERS),
    };
    let allowed = match &cli.allowed {
        Some(path) => load_from_file(path)?,
        None => words_from_slice(ALLOWED),
    };

    WordCorpus::new(answers, &allowed, COMMON).context("failed to build word corpus")
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let corpus = Arc::new(load_corpus(&cli)?);
    let engine = EngineConfig {
        debounce: Duration::from_millis(cli.debounce_ms),
    };

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(corpus, engine),
        Commands::Suggest { guesses } => run_suggest_command(corpus, engine, guesses),
        Commands::Check { word } => run_check_command(&corpus, &word),
    }
}

fn run_play_command(corpus: Arc<WordCorpus>, engine: EngineConfig) -> Result<ExitCode> {
    use wordle_assist::interactive::{App, run_tui};

    run_tui(App::new(corpus, engine))?;
    Ok(ExitCode::SUCCESS)
}

fn run_suggest_command(
    corpus: Arc<WordCorpus>,
    engine: EngineConfig,
    guesses: Vec<String>,
) -> Result<ExitCode> {
    let config = SuggestConfig {
        guesses,
        engine,
        show_progress: true,
    };
    let result = run_suggest(corpus, config)?;
    print_suggest_result(&result);
    Ok(ExitCode::SUCCESS)
}

fn run_check_command(corpus: &WordCorpus, word: &str) -> Result<ExitCode> {
    let result = check_word(corpus, word).with_context(|| format!("cannot check '{word}'"))?;
    print_check_result(&result);
    Ok(if result.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
