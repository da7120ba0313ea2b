//! Word Soup Generator
//!
//! Hides random words from a word list along the rows and columns of a letter
//! grid, fills the remaining cells with random letters, and prints the
//! result. Passing `--seed` replays a previous puzzle exactly.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use wordsoup::generator::ADD_RETRIES;
use wordsoup::grid::POSITION_RETRIES;
use wordsoup::{
    logging, GenerationError, Generator, GeneratorConfig, WordList, WordProvider, WordSourceError,
};

/// Generates word soup puzzles.
#[derive(Parser, Debug)]
#[command(name = "wordsoup")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for the random generator. A fresh seed is drawn and logged when absent.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Path to a newline-delimited word list. The built-in list is used when absent.
    #[arg(short = 'i', long = "input", global = true)]
    input: Option<PathBuf>,

    /// Print debug logs.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a puzzle and print it.
    Generate(GenerateArgs),
    /// Print random words from the word list.
    Words {
        /// How many words to print.
        #[arg(default_value_t = 10)]
        count: usize,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
struct GenerateArgs {
    /// Number of rows.
    #[arg(long, default_value_t = 15)]
    height: usize,

    /// Number of columns.
    #[arg(long, default_value_t = 15)]
    width: usize,

    /// Number of words to hide.
    #[arg(short = 'n', long = "words", default_value_t = 10)]
    words: usize,

    /// Random positions tried per word.
    #[arg(long, default_value_t = POSITION_RETRIES)]
    position_retries: usize,

    /// Words tried per slot before giving up.
    #[arg(long, default_value_t = ADD_RETRIES)]
    add_retries: usize,

    /// List the hidden words with their positions after the grid.
    #[arg(long)]
    show_words: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            height: 15,
            width: 15,
            words: 10,
            position_retries: POSITION_RETRIES,
            add_retries: ADD_RETRIES,
            show_words: false,
        }
    }
}

impl GenerateArgs {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            position_retries: self.position_retries,
            add_retries: self.add_retries,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, Box<dyn std::error::Error>> {
    let words = load_words(cli.input.as_deref())?;
    let seed = cli.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    // default: generate with default settings
    let command = cli
        .command
        .unwrap_or_else(|| Command::Generate(GenerateArgs::default()));

    let output = match command {
        Command::Generate(args) => run_generate(&args, &words, &mut rng)?,
        Command::Words { count } => run_words(count, &words, &mut rng)?,
    };
    Ok(output)
}

fn load_words(path: Option<&Path>) -> Result<WordList, WordSourceError> {
    let words = match path {
        Some(path) => WordList::from_file(path)?,
        None => WordList::embedded(),
    };
    info!("loaded {} words", words.len());
    Ok(words)
}

/// Generates and renders one puzzle.
fn run_generate(
    args: &GenerateArgs,
    words: &WordList,
    rng: &mut StdRng,
) -> Result<String, GenerationError> {
    let grid = Generator::new(args.config()).generate(
        args.height,
        args.width,
        args.words,
        words,
        rng,
    )?;

    let mut output = grid.render(rng).to_string();
    if args.show_words {
        output.push_str("\n\n");
        for placement in grid.placements() {
            let _ = writeln!(
                output,
                "{:<12} {:<10} {} -> {}",
                placement.text(),
                placement.orientation(),
                placement.anchor(),
                placement.end()
            );
        }
        output.truncate(output.trim_end().len());
    }
    Ok(output)
}

/// Prints `count` random words, one per line.
fn run_words(count: usize, words: &WordList, rng: &mut StdRng) -> Result<String, WordSourceError> {
    Ok(words.random_words(count, rng)?.join("\n"))
}
