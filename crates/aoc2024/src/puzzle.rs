use crate::{PuzzleError, PuzzleResult};

/// Function that computes the answer to one part of a puzzle from its input
/// lines.
pub type Solver = fn(&[&str]) -> PuzzleResult<u64>;

/// One part of a puzzle along with its sample fixture.
#[derive(Debug, Copy, Clone)]
pub struct Part {
    /// Computes the answer.
    pub solve: Solver,
    /// Sample input from the puzzle text.
    pub sample: &'static str,
    /// Answer for the sample input.
    pub expected: u64,
}

/// Puzzle for a single day.
#[derive(Debug, Copy, Clone)]
pub struct Day {
    /// Day of the month, from 1 to 25.
    pub number: u8,
    /// Puzzle title.
    pub title: &'static str,
    /// Parts 1 and 2.
    pub parts: [Part; 2],
}

impl Day {
    /// Solves both parts against the sample fixtures and returns an error if
    /// any answer differs from the expected one.
    pub fn check(&self) -> PuzzleResult<()> {
        for (i, part) in self.parts.iter().enumerate() {
            let actual = (part.solve)(&lines(part.sample))?;
            if actual != part.expected {
                return Err(PuzzleError::FixtureMismatch {
                    day: self.number,
                    part: i + 1,
                    expected: part.expected,
                    actual,
                });
            }
            log::debug!("day {:02} part {} fixture ok", self.number, i + 1);
        }
        Ok(())
    }

    /// Solves both parts.
    pub fn solve(&self, lines: &[&str]) -> PuzzleResult<[u64; 2]> {
        let [part_01, part_02] = &self.parts;
        Ok([(part_01.solve)(lines)?, (part_02.solve)(lines)?])
    }
}

/// Splits text into lines, stripping line terminators.
pub fn lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}
