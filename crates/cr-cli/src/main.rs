//! CLI frontend for the Chain Reaction word game.

mod commands;
mod logging;
mod tui;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "chain-reaction",
    about = "Chain Reaction: build the longest word chain before the clock runs out",
    version,
    propagate_version = true,
    after_help = "Word validation needs a word list: pass --words path/to/words_alpha.txt"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a round in the terminal (default)
    Play {
        /// Newline-delimited word list such as words_alpha.txt. Without it,
        /// any word of 3+ letters is accepted
        #[arg(short, long)]
        words: Option<PathBuf>,

        /// RNG seed for reproducible seed words
        #[arg(short, long)]
        seed: Option<u64>,

        /// Round length in seconds
        #[arg(long, default_value = "60")]
        seconds: u32,

        /// Write log records to this file
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Check words against the dictionary without playing
    Check {
        /// Words to check
        #[arg(required = true)]
        words: Vec<String>,

        /// Newline-delimited word list such as words_alpha.txt. Without it,
        /// any word of 3+ letters is accepted
        #[arg(short = 'w', long = "words")]
        word_list: Option<PathBuf>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the seed words and their hints
    Seeds {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play {
        words: None,
        seed: None,
        seconds: cr_core::config::DEFAULT_ROUND_SECONDS,
        log_file: None,
    });

    let result = match command {
        Commands::Play {
            words,
            seed,
            seconds,
            log_file,
        } => logging::init_to_file(log_file.as_deref())
            .and_then(|()| commands::play::run(words, seed, seconds)),
        Commands::Check {
            words,
            word_list,
            json,
        } => {
            logging::init_stderr();
            commands::check::run(word_list.as_deref(), &words, json)
        }
        Commands::Seeds { json } => {
            logging::init_stderr();
            commands::seeds::run(json)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
