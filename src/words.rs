//! Word sources for puzzle generation.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use rand::seq::SliceRandom;
use rand::RngCore;

use crate::error::WordSourceError;

/// Newline-delimited list compiled into the binary.
pub const EMBEDDED_WORDS: &str = include_str!("resources/words.txt");

/// Entries shorter than this are dropped when loading a list.
pub const MIN_WORD_LEN: usize = 5;

/// Supplies candidate words to the generator.
///
/// The generator upper-cases words itself, so implementations only need to
/// return non-empty text.
pub trait WordProvider {
    fn random_word(&self, rng: &mut dyn RngCore) -> Result<String, WordSourceError>;

    fn random_words(
        &self,
        n: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<String>, WordSourceError> {
        (0..n).map(|_| self.random_word(rng)).collect()
    }
}

/// An in-memory word list.
#[derive(Clone, Debug, Default)]
pub struct WordList {
    words: Vec<String>,
}

fn normalize(line: &str) -> Option<String> {
    let word = line.trim().to_uppercase();
    let long_enough = word.chars().count() >= MIN_WORD_LEN;
    (long_enough && word.chars().all(char::is_alphabetic)).then_some(word)
}

impl WordList {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// The built-in list.
    pub fn embedded() -> Self {
        Self::from_lines(EMBEDDED_WORDS)
    }

    /// Parses one word per line, trimming and upper-casing each entry.
    pub fn from_lines(data: &str) -> Self {
        Self::new(data.lines().filter_map(normalize).collect())
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordSourceError> {
        let path = path.as_ref();
        let io_error = |source| WordSourceError::Io {
            path: path.to_path_buf(),
            source,
        };

        let reader = BufReader::new(File::open(path).map_err(io_error)?);
        let mut words = Vec::new();
        for line in reader.lines() {
            if let Some(word) = normalize(&line.map_err(io_error)?) {
                words.push(word);
            }
        }

        debug!("loaded {} words from {}", words.len(), path.display());
        Ok(Self::new(words))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordProvider for WordList {
    fn random_word(&self, rng: &mut dyn RngCore) -> Result<String, WordSourceError> {
        self.words
            .choose(rng)
            .cloned()
            .ok_or(WordSourceError::Empty)
    }
}
