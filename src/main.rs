//! Wordle Partition Solver - CLI
//!
//! Interactive solver that recommends the guess minimizing the expected
//! number of remaining candidates.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io;
use wordle_partition::{
    commands::{SolveConfig, analyze_word, run_benchmark, run_simple, solve_word},
    core::Word,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{Session, SessionConfig},
    wordlists::{
        DICTIONARY,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_partition",
    about = "Wordle solver that picks the guess splitting the candidates most evenly",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a whitespace-separated word file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Number of letters per word
    #[arg(
        short = 'l',
        long,
        global = true,
        default_value_t = 5,
        value_parser = clap::value_parser!(u8).range(1..=15)
    )]
    length: u8,

    /// Evaluate guesses on a single thread
    #[arg(long, global = true)]
    sequential: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive solver (default)
    Simple,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,

        /// Give up after this many guesses
        #[arg(short = 'm', long, default_value = "6")]
        max_guesses: usize,
    },

    /// Analyze how a word partitions the dictionary as an opening guess
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of dictionary words to solve
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Give up after this many guesses
        #[arg(short = 'm', long, default_value = "6")]
        max_guesses: usize,
    },
}

/// Load the dictionary selected by the -w flag
fn load_dictionary(wordlist: &str, length: usize) -> Result<Vec<Word>> {
    let words = match wordlist {
        "embedded" => words_from_slice(DICTIONARY, length),
        path => load_from_file(path, length)
            .with_context(|| format!("failed to read dictionary '{path}'"))?,
    };

    if words.is_empty() {
        bail!("dictionary '{wordlist}' has no {length}-letter words");
    }
    log::info!("dictionary ready: {} words", words.len());
    Ok(words)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let length = usize::from(cli.length);
    let config = SessionConfig::new()
        .with_word_length(length)
        .with_parallel(!cli.sequential);

    let dictionary = load_dictionary(&cli.wordlist, length)?;

    // Default to the interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => {
            let mut session = Session::new(&dictionary, config);
            run_simple(&mut session, io::stdin().lock())
        }
        Commands::Solve {
            word,
            verbose,
            max_guesses,
        } => {
            let mut solve_config = SolveConfig::new(word);
            solve_config.max_guesses = max_guesses;
            solve_config.session = config;

            let result = solve_word(&solve_config, &dictionary)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &dictionary, length)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count, max_guesses } => {
            println!("Running benchmark on {count} dictionary words...");
            let targets: Vec<Word> = dictionary.iter().take(count).cloned().collect();
            let result = run_benchmark(&dictionary, &targets, config, max_guesses, true);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
