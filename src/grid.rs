//! Grid representation and the word placement search.
//!
//! A grid has fixed dimensions and an ordered list of accepted placements.
//! Cells are addressed row-major: `idx = y * width + x`. Rendering writes
//! every accepted letter into a flat array and backfills the rest with
//! random filler letters.

use std::fmt;

use log::{debug, trace};
use rand::Rng;
use rustc_hash::FxHashMap;

use crate::error::{GenerationError, PlacementError};
use crate::geometry::{Orientation, Position};
use crate::placement::Placement;

/// Default number of random anchor/orientation draws per word.
pub const POSITION_RETRIES: usize = 1000;

/// Filler alphabet for unoccupied cells.
const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Converts a position to a linear row-major cell index.
#[inline(always)]
pub const fn coord_to_idx(width: usize, position: Position) -> usize {
    position.y * width + position.x
}

/// Converts a linear row-major cell index back to a position.
#[inline(always)]
pub const fn idx_to_coord(width: usize, cell_index: usize) -> Position {
    Position::new(cell_index % width, cell_index / width)
}

#[inline]
fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())])
}

/// A word soup under construction.
///
/// Placements are kept in acceptance order. The occupancy index mirrors the
/// cells of every accepted placement, so conflict checks are linear in the
/// candidate's length rather than in the number of placed words.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    placements: Vec<Placement>,
    occupied: FxHashMap<Position, char>,
    position_retries: usize,
}

impl Grid {
    /// Creates an empty grid. Both dimensions must be at least 1.
    pub fn new(width: usize, height: usize) -> Result<Self, GenerationError> {
        if width == 0 || height == 0 {
            return Err(GenerationError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            placements: Vec::new(),
            occupied: FxHashMap::default(),
            position_retries: POSITION_RETRIES,
        })
    }

    /// Overrides the per-word search budget used by [`Grid::try_add_word`].
    pub fn with_position_retries(mut self, position_retries: usize) -> Self {
        self.position_retries = position_retries;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn position_retries(&self) -> usize {
        self.position_retries
    }

    /// Accepted placements, oldest first.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Returns true if the placement's extent along its own axis stays inside
    /// the grid.
    ///
    /// Only the axis the word runs along is checked. The anchor's other
    /// coordinate is assumed to be in bounds; [`Grid::insert`] checks it for
    /// hand-built placements.
    pub fn fits(&self, placement: &Placement) -> bool {
        let anchor = placement.anchor();
        match placement.orientation() {
            Orientation::Vertical => anchor.y + placement.len() <= self.height,
            Orientation::Horizontal => anchor.x + placement.len() <= self.width,
        }
    }

    /// Returns true if the placement disagrees with any accepted placement on
    /// the letter of a shared cell.
    pub fn conflicts_with_any(&self, placement: &Placement) -> bool {
        placement.cells().iter().any(|cell| {
            matches!(self.occupied.get(&cell.position), Some(&letter) if letter != cell.letter)
        })
    }

    /// Searches random anchors and orientations for a spot for `word`.
    ///
    /// The first candidate that fits and does not conflict is accepted. Words
    /// longer than both dimensions are rejected before any draw is made.
    pub fn try_add_word<R: Rng + ?Sized>(
        &mut self,
        word: &str,
        rng: &mut R,
    ) -> Result<&Placement, PlacementError> {
        let text = word.to_uppercase();
        let len = text.chars().count();
        if len == 0 {
            return Err(PlacementError::EmptyWord);
        }
        if len > self.width && len > self.height {
            return Err(PlacementError::WordTooLong {
                word: text,
                len,
                width: self.width,
                height: self.height,
            });
        }

        for attempt in 0..self.position_retries {
            let anchor = Position::random(self.width, self.height, rng);
            let orientation = Orientation::random(rng);
            let candidate = Placement::new(&text, orientation, anchor);

            if self.fits(&candidate) && !self.conflicts_with_any(&candidate) {
                trace!("placed {text} {orientation} at {anchor} on attempt {attempt}");
                return Ok(self.accept(candidate));
            }
        }

        debug!(
            "gave up on {text} after {} attempts ({} words placed)",
            self.position_retries,
            self.placements.len()
        );
        Err(PlacementError::PlacementFailed {
            word: text,
            attempts: self.position_retries,
        })
    }

    /// Adds a hand-built placement after checking bounds and conflicts.
    pub fn insert(&mut self, placement: Placement) -> Result<&Placement, PlacementError> {
        if placement.is_empty() {
            return Err(PlacementError::EmptyWord);
        }
        let anchor = placement.anchor();
        if anchor.x >= self.width || anchor.y >= self.height || !self.fits(&placement) {
            return Err(PlacementError::OutOfBounds { position: anchor });
        }
        if self.conflicts_with_any(&placement) {
            return Err(PlacementError::Conflict {
                word: placement.text().to_string(),
            });
        }
        Ok(self.accept(placement))
    }

    fn accept(&mut self, placement: Placement) -> &Placement {
        for cell in placement.cells() {
            self.occupied.entry(cell.position).or_insert(cell.letter);
        }
        let index = self.placements.len();
        self.placements.push(placement);
        &self.placements[index]
    }

    /// Renders the grid into a dense letter matrix.
    ///
    /// Letters of accepted placements are written first; every remaining
    /// cell gets a uniformly random filler letter. The grid is not modified,
    /// so each call draws fresh filler.
    pub fn render<R: Rng + ?Sized>(&self, rng: &mut R) -> RenderedGrid {
        let mut cells: Vec<Option<char>> = vec![None; self.width * self.height];

        for placement in &self.placements {
            for cell in placement.cells() {
                // identical letters are the only possible overlap
                cells[coord_to_idx(self.width, cell.position)].get_or_insert(cell.letter);
            }
        }

        let letters = cells
            .into_iter()
            .map(|cell| cell.unwrap_or_else(|| random_letter(rng)))
            .collect();

        RenderedGrid {
            width: self.width,
            height: self.height,
            letters,
        }
    }
}

/// A fully populated letter matrix, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedGrid {
    width: usize,
    height: usize,
    letters: Vec<char>,
}

impl RenderedGrid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Always `width * height`.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Letter at a linear row-major index.
    pub fn get(&self, cell_index: usize) -> Option<char> {
        self.letters.get(cell_index).copied()
    }

    pub fn letter_at(&self, position: Position) -> Option<char> {
        if position.x >= self.width || position.y >= self.height {
            return None;
        }
        self.get(coord_to_idx(self.width, position))
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Iterates rows from top (y = 0) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.letters.chunks(self.width)
    }
}

/// One row per line, letters separated by a single space.
impl fmt::Display for RenderedGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for (x, letter) in row.iter().enumerate() {
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    use super::*;

    /// Wraps a seeded generator and counts how many draws were made.
    struct CountingRng {
        inner: StdRng,
        draws: usize,
    }

    impl CountingRng {
        fn new(seed: u64) -> Self {
            Self {
                inner: StdRng::seed_from_u64(seed),
                draws: 0,
            }
        }
    }

    impl RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            self.draws += 1;
            self.inner.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.draws += 1;
            self.inner.next_u64()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.draws += 1;
            self.inner.fill_bytes(dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.draws += 1;
            self.inner.try_fill_bytes(dest)
        }
    }

    fn assert_grid_invariants(grid: &Grid) {
        let placements = grid.placements();
        for (i, p) in placements.iter().enumerate() {
            for cell in p.cells() {
                assert!(
                    cell.position.x < grid.width() && cell.position.y < grid.height(),
                    "{} has a cell outside the grid at {}",
                    p.text(),
                    cell.position
                );
            }
            for q in &placements[i + 1..] {
                assert!(!p.conflicts(q), "{} conflicts with {}", p.text(), q.text());
            }
        }
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert!(matches!(
            Grid::new(0, 20),
            Err(GenerationError::InvalidDimensions { width: 0, height: 20 })
        ));
        assert!(Grid::new(20, 0).is_err());
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn test_coordinate_conversion_roundtrip() {
        let width = 7;
        for idx in 0..7 * 4 {
            let position = idx_to_coord(width, idx);
            assert!(position.x < width && position.y < 4);
            assert_eq!(coord_to_idx(width, position), idx, "roundtrip failed for {idx}");
        }
    }

    #[test]
    fn test_fits_checks_only_the_word_axis() {
        let grid = Grid::new(5, 3).unwrap();
        let h = |x, y, word| Placement::new(word, Orientation::Horizontal, Position::new(x, y));
        let v = |x, y, word| Placement::new(word, Orientation::Vertical, Position::new(x, y));

        assert!(grid.fits(&h(2, 0, "CAT")));
        assert!(!grid.fits(&h(3, 0, "CAT")));
        assert!(grid.fits(&v(4, 0, "CAT")));
        assert!(!grid.fits(&v(0, 1, "CAT")));
        assert!(!grid.fits(&v(0, 0, "HORSE")));
        assert!(grid.fits(&h(0, 2, "HORSE")));
    }

    #[test]
    fn test_too_long_word_fails_without_searching() {
        let mut grid = Grid::new(10, 10).unwrap();
        let mut rng = CountingRng::new(1);
        let result = grid.try_add_word("Supercalifragilisticexpialidocious", &mut rng);

        assert!(matches!(
            result,
            Err(PlacementError::WordTooLong { len: 34, .. })
        ));
        assert_eq!(rng.draws, 0);
        assert!(grid.placements().is_empty());
    }

    #[test]
    fn test_word_longer_than_one_dimension_still_places() {
        let mut grid = Grid::new(3, 8).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let placement = grid.try_add_word("kitchen", &mut rng).unwrap();
        assert_eq!(placement.orientation(), Orientation::Vertical);
        assert_eq!(placement.text(), "KITCHEN");
    }

    #[test]
    fn test_empty_word_is_rejected() {
        let mut grid = Grid::new(4, 4).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            grid.try_add_word("", &mut rng),
            Err(PlacementError::EmptyWord)
        ));
    }

    #[test]
    fn test_places_names_on_large_grid() {
        let mut grid = Grid::new(40, 40).unwrap();
        let mut rng = StdRng::seed_from_u64(2024);

        grid.try_add_word("Victor", &mut rng).unwrap();
        grid.try_add_word("Olivia", &mut rng).unwrap();
        for _ in 0..100 {
            // later words may run out of room; the invariants must hold either way
            let _ = grid.try_add_word("fer", &mut rng);
            let _ = grid.try_add_word("Victor", &mut rng);
            let _ = grid.try_add_word("Olivia", &mut rng);
        }

        assert_eq!(grid.placements()[0].text(), "VICTOR");
        assert_eq!(grid.placements()[1].text(), "OLIVIA");
        assert_grid_invariants(&grid);

        let rendered = grid.render(&mut rng);
        assert_eq!(rendered.len(), 40 * 40);
        assert!(rendered.letters().iter().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_search_budget_exhaustion() {
        let mut grid = Grid::new(1, 1).unwrap().with_position_retries(25);
        let mut rng = StdRng::seed_from_u64(5);
        grid.try_add_word("a", &mut rng).unwrap();
        // the same letter may overlap, a different one never can
        grid.try_add_word("a", &mut rng).unwrap();

        match grid.try_add_word("b", &mut rng) {
            Err(PlacementError::PlacementFailed { word, attempts }) => {
                assert_eq!(word, "B");
                assert_eq!(attempts, 25);
            }
            other => panic!("expected PlacementFailed, got {other:?}"),
        }
        assert_eq!(grid.placements().len(), 2);
    }

    #[test]
    fn test_insert_allows_crossing_on_same_letter() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.insert(Placement::new("CAT", Orientation::Horizontal, Position::new(0, 0)))
            .unwrap();
        let car = Placement::new("CAR", Orientation::Vertical, Position::new(0, 0));
        assert!(!grid.conflicts_with_any(&car));
        grid.insert(car).unwrap();

        let dog = Placement::new("DOG", Orientation::Vertical, Position::new(1, 0));
        assert!(grid.conflicts_with_any(&dog));
        assert!(matches!(
            grid.insert(dog),
            Err(PlacementError::Conflict { .. })
        ));
        assert_eq!(grid.placements().len(), 2);
        assert_grid_invariants(&grid);
    }

    #[test]
    fn test_insert_checks_both_coordinates() {
        let mut grid = Grid::new(5, 5).unwrap();
        let below = Placement::new("CAT", Orientation::Horizontal, Position::new(0, 5));
        let overhang = Placement::new("CAT", Orientation::Horizontal, Position::new(3, 0));
        assert!(matches!(
            grid.insert(below),
            Err(PlacementError::OutOfBounds { .. })
        ));
        assert!(matches!(
            grid.insert(overhang),
            Err(PlacementError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_render_is_total_for_empty_grid() {
        let grid = Grid::new(3, 2).unwrap();
        let rendered = grid.render(&mut StdRng::seed_from_u64(9));
        assert_eq!(rendered.len(), 6);
        assert_eq!(rendered.rows().count(), 2);
        assert!(rendered.letters().iter().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_render_keeps_placed_letters() {
        let mut grid = Grid::new(6, 6).unwrap();
        grid.insert(Placement::new("OLIVIA", Orientation::Vertical, Position::new(2, 0)))
            .unwrap();
        let rendered = grid.render(&mut StdRng::seed_from_u64(4));

        let column: String = (0..6)
            .map(|y| rendered.letter_at(Position::new(2, y)).unwrap())
            .collect();
        assert_eq!(column, "OLIVIA");
        assert_eq!(rendered.letter_at(Position::new(6, 0)), None);
    }

    #[test]
    fn test_render_does_not_mutate_grid() {
        let mut grid = Grid::new(8, 8).unwrap();
        let mut rng = StdRng::seed_from_u64(12);
        grid.try_add_word("lemon", &mut rng).unwrap();
        let before = grid.placements().to_vec();
        let _ = grid.render(&mut rng);
        let _ = grid.render(&mut rng);
        assert_eq!(grid.placements(), before.as_slice());
    }

    #[test]
    fn test_same_seed_replays_same_puzzle() {
        let build = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut grid = Grid::new(12, 9).unwrap();
            for word in ["apple", "grape", "melon", "peach"] {
                grid.try_add_word(word, &mut rng).unwrap();
            }
            let rendered = grid.render(&mut rng);
            (grid.placements().to_vec(), rendered)
        };
        assert_eq!(build(77), build(77));
    }

    #[test]
    fn test_format_fully_covered_grid() {
        let mut grid = Grid::new(3, 3).unwrap();
        for (row, word) in ["cat", "ode", "war"].into_iter().enumerate() {
            grid.insert(Placement::new(word, Orientation::Horizontal, Position::new(0, row)))
                .unwrap();
        }
        grid.insert(Placement::new("COW", Orientation::Vertical, Position::new(0, 0)))
            .unwrap();

        // no filler is drawn when every cell is covered
        let rendered = grid.render(&mut StdRng::seed_from_u64(0));
        insta::assert_snapshot!(rendered.to_string(), @r"
        C A T
        O D E
        W A R
        ");
    }
}
