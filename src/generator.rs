//! Puzzle generation from a word source.
//!
//! Every word slot is given a bounded number of fresh words. A word that
//! cannot be placed is discarded and another one is pulled; a slot that uses
//! up its budget fails the whole generation. Partial grids are never
//! returned.

use log::{debug, info};
use rand::Rng;

use crate::error::GenerationError;
use crate::grid::{Grid, POSITION_RETRIES};
use crate::words::WordProvider;

/// Default number of words tried per slot.
pub const ADD_RETRIES: usize = 10;

/// Search budgets for puzzle generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Random anchor/orientation draws per word.
    pub position_retries: usize,
    /// Words pulled per slot before the generation is abandoned.
    pub add_retries: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            position_retries: POSITION_RETRIES,
            add_retries: ADD_RETRIES,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Builds a `width` x `height` grid holding `n_words` words from `source`.
    pub fn generate<S, R>(
        &self,
        height: usize,
        width: usize,
        n_words: usize,
        source: &S,
        rng: &mut R,
    ) -> Result<Grid, GenerationError>
    where
        S: WordProvider + ?Sized,
        R: Rng,
    {
        let mut grid =
            Grid::new(width, height)?.with_position_retries(self.config.position_retries);

        for slot in 0..n_words {
            self.fill_slot(&mut grid, slot, source, rng)?;
        }

        info!(
            "generated {width}x{height} word soup with {} words",
            grid.placements().len()
        );
        Ok(grid)
    }

    fn fill_slot<S, R>(
        &self,
        grid: &mut Grid,
        slot: usize,
        source: &S,
        rng: &mut R,
    ) -> Result<(), GenerationError>
    where
        S: WordProvider + ?Sized,
        R: Rng,
    {
        for attempt in 0..self.config.add_retries {
            let word = source.random_word(&mut *rng)?;
            match grid.try_add_word(&word, rng) {
                Ok(placement) => {
                    debug!(
                        "slot {slot}: {} {} at {}",
                        placement.text(),
                        placement.orientation(),
                        placement.anchor()
                    );
                    return Ok(());
                }
                Err(err) => debug!("slot {slot}, attempt {attempt}: {err}"),
            }
        }

        Err(GenerationError::RetriesExhausted {
            slot,
            attempts: self.config.add_retries,
        })
    }
}

/// Generates a puzzle with the default search budgets.
pub fn generate_random_word_soup<S, R>(
    height: usize,
    width: usize,
    n_words: usize,
    source: &S,
    rng: &mut R,
) -> Result<Grid, GenerationError>
where
    S: WordProvider + ?Sized,
    R: Rng,
{
    Generator::default().generate(height, width, n_words, source, rng)
}
