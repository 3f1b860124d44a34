//! Day 04: Ceres Search.
//!
//! Word search on a grid of letters. Part 1 counts every `XMAS` in any of the
//! 8 directions; part 2 counts every `A` at the center of two crossing `MAS`.

use aoc_grid::{CrossPattern, Grid, WordSearch};

use crate::{Day, Part, PuzzleResult};

/// Registry entry.
pub const DAY: Day = Day {
    number: 4,
    title: "Ceres Search",
    parts: [
        Part {
            solve: part_01,
            sample: TEST_DATA,
            expected: 18,
        },
        Part {
            solve: part_02,
            sample: TEST_DATA,
            expected: 9,
        },
    ],
};

const TEST_DATA: &str = "\
MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX";

const WORD: &str = "XMAS";

fn build_grid(lines: &[&str]) -> Grid {
    let grid = Grid::from_lines(lines);
    if !grid.is_rectangular() {
        log::warn!(
            "grid rows have differing lengths; treating missing cells as empty \
             ({}x{})",
            grid.width(),
            grid.height(),
        );
    }
    grid
}

/// Returns the number of times `XMAS` appears in the grid.
///
/// We look at every `X`, find the neighboring `M`s worth following, and walk
/// each of those directions. Mismatches and walks off the grid are skipped.
pub fn part_01(lines: &[&str]) -> PuzzleResult<u64> {
    let grid = build_grid(lines);
    Ok(WordSearch::new(WORD).count(&grid) as u64)
}

/// Returns the number of `X`-shaped `MAS` crosses in the grid.
///
/// This time we look at every `A` and check all 4 arrangements of the crossing
/// arms around it.
pub fn part_02(lines: &[&str]) -> PuzzleResult<u64> {
    let grid = build_grid(lines);
    Ok(CrossPattern::X_MAS.count(&grid) as u64)
}
