//! Word placements and the cells they occupy.

use crate::geometry::{Cell, Orientation, Position};

/// A word fixed at an anchor position and running along one axis.
///
/// The text is stored upper-cased. Cells are derived on demand rather than
/// stored, so a placement is a small immutable value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    text: String,
    orientation: Orientation,
    anchor: Position,
}

impl Placement {
    /// Creates a placement, upper-casing `word`.
    pub fn new(word: &str, orientation: Orientation, anchor: Position) -> Self {
        Self {
            text: word.to_uppercase(),
            orientation,
            anchor,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn anchor(&self) -> Position {
        self.anchor
    }

    /// Number of letters (not bytes).
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Position of the last letter. Equal to the anchor for empty text.
    pub fn end(&self) -> Position {
        self.anchor.step(self.orientation, self.len().saturating_sub(1))
    }

    /// Returns the cells this placement covers, in reading order.
    pub fn cells(&self) -> Vec<Cell> {
        self.text
            .chars()
            .enumerate()
            .map(|(offset, letter)| Cell {
                position: self.anchor.step(self.orientation, offset),
                letter,
            })
            .collect()
    }

    /// Returns true if the two placements claim a shared cell with different
    /// letters. Crossing on an identical letter is allowed.
    pub fn conflicts(&self, other: &Placement) -> bool {
        let mine = self.cells();
        other.cells().iter().any(|theirs| {
            mine.iter()
                .any(|cell| cell.position == theirs.position && cell.letter != theirs.letter)
        })
    }
}
