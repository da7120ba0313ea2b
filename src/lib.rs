//! Word Soup Generator Library
//!
//! Builds letter grids with words hidden along rows and columns. Placement is
//! a bounded random search; every source of randomness is passed in by the
//! caller, so a seeded generator replays the same puzzle.

pub mod error;
pub mod generator;
pub mod geometry;
pub mod grid;
pub mod logging;
pub mod placement;
pub mod words;

pub use error::{GenerationError, PlacementError, WordSourceError};
pub use generator::{generate_random_word_soup, Generator, GeneratorConfig};
pub use geometry::{Cell, Orientation, Position};
pub use grid::{Grid, RenderedGrid};
pub use placement::Placement;
pub use words::{WordList, WordProvider};
