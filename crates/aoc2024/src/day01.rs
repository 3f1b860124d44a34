//! Day 01: Historian Hysteria.
//!
//! The input is two columns of location IDs. Part 1 pairs up the smallest IDs
//! of each column, then the second smallest, and so on, and sums the distances
//! within each pair. Part 2 weights each ID in the left column by the number of
//! times it appears in the right column.

use itertools::Itertools;

use crate::{Day, Part, PuzzleError, PuzzleResult};

/// Registry entry.
pub const DAY: Day = Day {
    number: 1,
    title: "Historian Hysteria",
    parts: [
        Part {
            solve: part_01,
            sample: TEST_DATA,
            expected: 11,
        },
        Part {
            solve: part_02,
            sample: TEST_DATA,
            expected: 31,
        },
    ],
};

const TEST_DATA: &str = "\
3   4
4   3
2   5
1   3
3   9
3   3";

/// Parses the input into the left and right columns. Each ID in the left
/// column is paired with its line number.
///
/// Blank lines are skipped and columns past the second are ignored.
fn build_input(lines: &[&str]) -> PuzzleResult<(Vec<(u64, usize)>, Vec<u64>)> {
    let mut first = vec![];
    let mut second = vec![];
    for (i, line) in lines.iter().enumerate() {
        let line_number = i + 1;
        let mut columns = line.split_whitespace();
        let (a, b) = match (columns.next(), columns.next()) {
            (None, _) => continue,
            (Some(a), Some(b)) => (a, b),
            (Some(_), None) => {
                return Err(PuzzleError::MissingColumn {
                    line: line_number,
                    expected: 2,
                });
            }
        };
        let parse = |s: &str| {
            s.parse::<u64>().map_err(|source| PuzzleError::ParseInt {
                line: line_number,
                source,
            })
        };
        first.push((parse(a)?, line_number));
        second.push(parse(b)?);
    }
    Ok((first, second))
}

/// Returns the total distance between the sorted columns.
pub fn part_01(lines: &[&str]) -> PuzzleResult<u64> {
    let (first, second) = build_input(lines)?;
    first
        .into_iter()
        .sorted_unstable()
        .zip(second.into_iter().sorted_unstable())
        .try_fold(0_u64, |total, ((a, line), b)| {
            total
                .checked_add(a.abs_diff(b))
                .ok_or(PuzzleError::Overflow { line })
        })
}

/// Returns the similarity score of the two columns.
pub fn part_02(lines: &[&str]) -> PuzzleResult<u64> {
    let (first, second) = build_input(lines)?;
    let counts = second.into_iter().counts();
    first.into_iter().try_fold(0_u64, |total, (x, line)| {
        let count = counts.get(&x).copied().unwrap_or(0) as u64;
        x.checked_mul(count)
            .and_then(|score| total.checked_add(score))
            .ok_or(PuzzleError::Overflow { line })
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::lines;

    #[test]
    fn test_part_01() {
        assert_eq!(11, part_01(&lines(TEST_DATA)).unwrap());
    }

    #[test]
    fn test_part_02() {
        assert_eq!(31, part_02(&lines(TEST_DATA)).unwrap());
    }

    #[test]
    fn test_build_input() {
        let (first, second) = build_input(&["3   4", "", "  10\t2  99"]).unwrap();
        assert_eq!(vec![(3, 1), (10, 3)], first);
        assert_eq!(vec![4, 2], second);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Err(PuzzleError::MissingColumn {
                line: 2,
                expected: 2,
            }),
            part_01(&["1 2", "3"]),
        );
        assert!(matches!(
            part_02(&["1 2", "3 x"]),
            Err(PuzzleError::ParseInt { line: 2, .. }),
        ));
        part_01(&["-1 2"]).expect_err("negative IDs");
    }

    #[test]
    fn test_overflow() {
        let max_max = format!("{max} {max}", max = u64::MAX);
        let max_0 = format!("{} 0", u64::MAX);
        let two_max = format!("2 {}", u64::MAX);

        assert_eq!(
            Err(PuzzleError::Overflow { line: 2 }),
            part_01(&["1 0", max_0.as_str()]),
        );
        // The largest pair alone fits.
        assert_eq!(u64::MAX, part_01(&[max_0.as_str()]).unwrap());

        assert_eq!(
            Err(PuzzleError::Overflow { line: 1 }),
            part_02(&[max_max.as_str(), "1 1", two_max.as_str()]),
        );
        assert_eq!(
            Err(PuzzleError::Overflow { line: 2 }),
            part_02(&[max_max.as_str(), "1 1", "1 2"]),
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(0, part_01(&[]).unwrap());
        assert_eq!(0, part_02(&[]).unwrap());
    }
}
