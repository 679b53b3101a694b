//! Wordle Grid - CLI
//!
//! Daily word-guessing game with TUI and line-based modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use std::io;
use std::path::PathBuf;
use wordle_grid::{
    commands::{GameSetup, check_guess, prepare, reset, run_simple, summarize},
    config::Config,
    logging,
    output::{print_check_result, print_summary},
    session::{FileStore, SaveStore, Session},
};

#[derive(Parser)]
#[command(
    name = "wordle_grid",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory for the saved game, word history and log file
    #[arg(long, global = true, env = "WORDLE_GRID_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Play this secret word instead of today's word
    #[arg(short = 'w', long, global = true)]
    word: Option<String>,

    /// File of accepted guesses, one word per line (default: built-in list)
    #[arg(long, global = true)]
    wordlist: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based mode without TUI
    Simple,

    /// Show the feedback for one guess against a secret word
    Check {
        /// The secret word
        secret: String,

        /// The guessed word
        guess: String,
    },

    /// Show today's saved progress
    Status,

    /// Delete the saved game
    Reset {
        /// Also forget which words have already been played
        #[arg(long)]
        history: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::new(cli.data_dir, cli.word, cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal
    let log_file = matches!(command, Commands::Play).then(|| config.log_path());
    logging::init(cli.verbose, log_file.as_deref())?;

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Check { secret, guess } => {
            let result = check_guess(&secret, &guess)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Status => run_status_command(&config),
        Commands::Reset { history } => {
            reset(&config, history)?;
            println!("Saved game cleared.");
            Ok(())
        }
    }
}

fn setup(config: &Config) -> Result<(GameSetup, FileStore)> {
    let today = chrono::Local::now().date_naive();
    let setup = prepare(config, today, &mut rand::rng())?;
    let store = FileStore::new(config.save_path());
    info!("Data directory: {}", config.data_dir().display());
    Ok((setup, store))
}

fn resume<'a>(setup: &'a GameSetup, store: &FileStore) -> Result<Session<'a>> {
    let saved = store.load()?;
    Ok(Session::resume(
        &setup.dictionary,
        setup.secret.clone(),
        saved.as_ref(),
    ))
}

fn run_play_command(config: &Config) -> Result<()> {
    use wordle_grid::interactive::{App, run_tui};

    let (setup, mut store) = setup(config)?;
    let session = resume(&setup, &store)?;

    let app = App::new(session, &mut store);
    run_tui(app)
}

fn run_simple_command(config: &Config) -> Result<()> {
    let (setup, mut store) = setup(config)?;
    let mut session = resume(&setup, &store)?;

    let stdin = io::stdin();
    run_simple(&mut session, &mut store, stdin.lock(), io::stdout())
}

fn run_status_command(config: &Config) -> Result<()> {
    let (setup, store) = setup(config)?;
    let session = resume(&setup, &store)?;

    print_summary(&summarize(&session));
    Ok(())
}
