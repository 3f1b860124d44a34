//! Character grids and the scans used by word-search puzzles.
//!
//! A [`Grid`] is built once from rows of text and then queried read-only:
//!
//! - [`WordSearch`] counts every occurrence of a word in any of the 8
//!   [`Direction`]s.
//! - [`CrossPattern`] counts cells that sit at the centre of an X made of two
//!   diagonal words.
//!
//! # Example
//!
//! ```rust
//! use aoc_grid::{CrossPattern, Grid, WordSearch};
//!
//! let grid = Grid::parse("M.S\n.A.\nM.S");
//! assert_eq!(1, CrossPattern::X_MAS.count(&grid));
//! assert_eq!(0, WordSearch::new("XMAS").count(&grid));
//! ```

mod cross;
mod direction;
mod grid;
mod search;

pub use cross::{CrossPattern, CrossVariant};
pub use direction::{Corner, Direction};
pub use grid::{Grid, Pos};
pub use search::{WordSearch, candidate_directions, verify_direction};
