//! Word-guessing game solver - CLI
//!
//! Solves Wordle-style games of any word length over a plain-text dictionary.

use anyhow::{Context, Result, bail, ensure};
use clap::{Parser, Subcommand};
use log::info;
use wordle_csp::{
    commands::{
        analyze_word, find_opening, run_benchmark, run_simple, sample_answers, solve_word,
    },
    core::Word,
    game::{Game, best_opening},
    output::{
        print_analysis_result, print_benchmark_result, print_opening_result, print_outcome,
        print_solve_result,
    },
    solver::{GuessSelector, SelectorConfig, StrategyType},
    trie::Trie,
    wordlists::{DEFAULT_WORDLIST, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_csp",
    about = "Word-guessing game solver using trie-pruned constraint search and entropy",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary file, one word per line
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDLIST)]
    wordlist: String,

    /// Word length to play with
    #[arg(short = 'l', long, global = true, default_value = "5")]
    length: usize,

    /// Early-game strategy: entropy (default) or sampled
    #[arg(short, long, global = true, default_value = "entropy")]
    strategy: String,

    /// Fixed opening guess (default: highest entropy word of the dictionary)
    #[arg(short, long, global = true)]
    opening: Option<String>,

    /// Guesses allowed per game
    #[arg(short = 'm', long, global = true, default_value = "6")]
    max_attempts: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a game against a known answer
    Solve {
        /// The answer to find
        answer: String,

        /// Show candidate counts for every guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Play along with a live game, typing in each pattern
    Simple,

    /// Simulate games for a random sample of dictionary words
    Benchmark {
        /// Number of answers to sample
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Seed for the answer sample
        #[arg(long, default_value = "24301")]
        seed: u64,
    },

    /// Entropy of a word against the whole dictionary
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Compute the best opening guess
    Opening {
        /// How many runners-up to list
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let strategy = StrategyType::from_name(&cli.strategy)
        .with_context(|| format!("unknown strategy '{}'", cli.strategy))?;

    let words = load_from_file(&cli.wordlist, Some(cli.length))
        .with_context(|| format!("failed to read word list {}", cli.wordlist))?;
    ensure!(
        !words.is_empty(),
        "{} has no {}-letter words",
        cli.wordlist,
        cli.length
    );
    info!(
        "loaded {} words of length {} from {}",
        words.len(),
        cli.length,
        cli.wordlist
    );
    let trie = Trie::build(&words);

    match &cli.command {
        Commands::Analyze { word } => {
            let word = parse_word(word, cli.length)?;
            let result = analyze_word(&word, &words)?;
            print_analysis_result(&result);
        }
        Commands::Opening { top } => {
            let result = find_opening(&trie, cli.length, &strategy, *top)?;
            print_opening_result(&result);
        }
        Commands::Solve { answer, verbose } => {
            let answer = parse_word(answer, cli.length)?;
            let game = build_game(&cli, &trie, strategy)?;
            let result = solve_word(&game, &answer);
            print_solve_result(&result, *verbose);
        }
        Commands::Simple => {
            let game = build_game(&cli, &trie, strategy)?;
            let outcome = run_simple(&game);
            println!();
            print_outcome(&outcome);
        }
        Commands::Benchmark { count, seed } => {
            let answers = sample_answers(&words, *count, *seed);
            let game = build_game(&cli, &trie, strategy)?;
            println!("Running benchmark on {} sampled words...", answers.len());
            let result = run_benchmark(&game, &answers);
            print_benchmark_result(&result, cli.max_attempts);
        }
    }

    Ok(())
}

fn parse_word(text: &str, length: usize) -> Result<Word> {
    let word = Word::new(text).with_context(|| format!("invalid word '{text}'"))?;
    if word.len() != length {
        bail!("'{word}' has {} letters, expected {length}", word.len());
    }
    Ok(word)
}

fn build_game<'t>(
    cli: &Cli,
    trie: &'t Trie,
    strategy: StrategyType,
) -> Result<Game<'t, StrategyType>> {
    ensure!(cli.max_attempts > 0, "--max-attempts must be at least 1");

    let opening = match &cli.opening {
        Some(text) => parse_word(text, cli.length)?,
        None => {
            println!("Computing the best opening guess...");
            best_opening(trie, cli.length, &strategy)?
        }
    };

    let config = SelectorConfig {
        max_attempts: cli.max_attempts,
        ..SelectorConfig::default()
    };
    Ok(Game::new(GuessSelector::new(trie, strategy, config, opening)))
}
