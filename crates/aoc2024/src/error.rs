//! Error types.

use std::num::ParseIntError;

use thiserror::Error;

/// Result of parsing or solving a puzzle.
pub type PuzzleResult<T> = Result<T, PuzzleError>;

/// Error produced while parsing puzzle input or checking a fixture.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// Line has fewer columns than the puzzle requires
    #[error("line {line}: expected {expected} columns")]
    MissingColumn {
        /// Line number, starting from 1.
        line: usize,
        /// Number of columns required.
        expected: usize,
    },
    /// Integer parse error
    #[error("line {line}: {source}")]
    ParseInt {
        /// Line number, starting from 1.
        line: usize,
        /// Underlying error.
        source: ParseIntError,
    },
    /// Integer overflow while computing an answer
    #[error("line {line}: integer overflow")]
    Overflow {
        /// Line number, starting from 1.
        line: usize,
    },
    /// Sample input did not produce the expected answer
    #[error("day {day:02} part {part}: expected {expected}, got {actual}")]
    FixtureMismatch {
        /// Day number.
        day: u8,
        /// Part number (1 or 2).
        part: usize,
        /// Expected answer.
        expected: u64,
        /// Answer produced by the solver.
        actual: u64,
    },
}
