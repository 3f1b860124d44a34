use strum::IntoEnumIterator;

use crate::{Direction, Grid, Pos};

/// Returns the directions from `anchor` whose adjacent cell holds `expected`.
///
/// Neighbors outside the grid are skipped.
pub fn candidate_directions(
    grid: &Grid,
    anchor: Pos,
    expected: char,
) -> impl Iterator<Item = Direction> + '_ {
    Direction::iter().filter(move |&dir| grid.is(anchor.step(dir), expected))
}

/// Returns whether `letters` appear in order when stepping from `anchor` in
/// `direction`.
///
/// The first letter is compared against the cell one step away from `anchor`.
/// Returns `false` as soon as a step leaves the grid or a letter differs.
pub fn verify_direction(
    grid: &Grid,
    anchor: Pos,
    direction: Direction,
    letters: impl IntoIterator<Item = char>,
) -> bool {
    let mut pos = anchor;
    letters.into_iter().all(|expected| {
        pos = pos.step(direction);
        grid.is(pos, expected)
    })
}

/// Search for a word written in a straight line in any of the 8 directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSearch {
    word: Vec<char>,
}

impl WordSearch {
    /// Constructs a search for `word`.
    pub fn new(word: &str) -> Self {
        Self {
            word: word.chars().collect(),
        }
    }

    /// Returns the character that starts the word, if any.
    pub fn trigger(&self) -> Option<char> {
        self.word.first().copied()
    }

    /// Returns the number of directions in which the word reads starting at
    /// `anchor`.
    ///
    /// Returns 0 if `anchor` does not hold the first letter of the word. A
    /// single-letter word is found once at each matching anchor.
    pub fn count_at(&self, grid: &Grid, anchor: Pos) -> usize {
        let Some((&first, rest)) = self.word.split_first() else {
            return 0;
        };
        if !grid.is(anchor, first) {
            return 0;
        }
        let Some(&second) = rest.first() else {
            return 1;
        };
        candidate_directions(grid, anchor, second)
            .filter(|&dir| verify_direction(grid, anchor, dir, rest.iter().copied()))
            .count()
    }

    /// Returns the total number of occurrences of the word in the grid.
    pub fn count(&self, grid: &Grid) -> usize {
        let Some(trigger) = self.trigger() else {
            return 0;
        };
        let total = grid
            .anchors(trigger)
            .map(|anchor| self.count_at(grid, anchor))
            .sum();
        log::debug!("found {total} occurrences of {:?}", self.word());
        total
    }

    /// Returns the word being searched for.
    pub fn word(&self) -> String {
        self.word.iter().collect()
    }
}
