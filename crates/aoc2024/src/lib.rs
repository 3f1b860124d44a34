//! Solutions to Advent of Code 2024.
//!
//! Each day lives in its own module and exposes a [`Day`] constant holding
//! both part functions and the sample fixture they are checked against.
//!
//! # Example
//!
//! ```rust
//! let day = aoc2024::day(1).unwrap();
//! day.check().unwrap();
//!
//! let input = aoc2024::lines("1   2\n5   3");
//! assert_eq!([3, 0], day.solve(&input).unwrap());
//! ```
//!
//! New days are scaffolded with the `aoc_new` generator and then registered in
//! [`DAYS`].

mod error;
mod puzzle;

pub mod day01;
pub mod day03;
pub mod day04;

pub use error::{PuzzleError, PuzzleResult};
pub use puzzle::{Day, Part, Solver, lines};

/// Every implemented day, in order.
pub const DAYS: &[Day] = &[day01::DAY, day03::DAY, day04::DAY];

/// Returns the day with the given number, if it is implemented.
pub fn day(number: u8) -> Option<&'static Day> {
    DAYS.iter().find(|day| day.number == number)
}
