//! Grid coordinates and the placement axes.
//!
//! A word can run along two axes only: left-to-right (x grows) or
//! top-to-bottom (y grows). There is no diagonal or reversed placement.

use std::fmt;

use rand::Rng;

/// A cell coordinate: `x` is the column, `y` is the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the position `steps` cells further along `orientation`.
    #[inline]
    pub const fn step(self, orientation: Orientation, steps: usize) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(self.x + steps, self.y),
            Orientation::Vertical => Self::new(self.x, self.y + steps),
        }
    }

    /// Draws a position uniformly from `[0, width) x [0, height)`.
    ///
    /// Both dimensions must be non-zero.
    pub fn random<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Self {
        Self::new(rng.gen_range(0..width), rng.gen_range(0..height))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The axis a word runs along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Both placement axes, in a fixed order.
pub const ORIENTATIONS: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];

impl Orientation {
    /// Picks either axis with equal probability.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.pad("horizontal"),
            Orientation::Vertical => f.pad("vertical"),
        }
    }
}

/// One letter at one coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub position: Position,
    pub letter: char,
}
