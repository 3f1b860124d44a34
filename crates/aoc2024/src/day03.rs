//! Day 03: Mull It Over.
//!
//! The input is corrupted memory containing `mul(a,b)` instructions among
//! noise. Part 2 also honors `do()` and `don't()`, which enable and disable
//! subsequent multiplications.

use regex::{Captures, Regex};

use crate::{Day, Part, PuzzleError, PuzzleResult};

lazy_static::lazy_static! {
    static ref INSTRUCTION_REGEX: Regex =
        Regex::new(r"mul\((\d+),(\d+)\)|do\(\)|don't\(\)").expect("bad regex");
}

/// Registry entry.
pub const DAY: Day = Day {
    number: 3,
    title: "Mull It Over",
    parts: [
        Part {
            solve: part_01,
            sample: TEST_DATA,
            expected: 161,
        },
        Part {
            solve: part_02,
            sample: TEST_DATA_2,
            expected: 48,
        },
    ],
};

const TEST_DATA: &str =
    "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";

const TEST_DATA_2: &str =
    "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Instruction {
    Mul { product: u64, line: usize },
    Do,
    Dont,
}

/// Parses every instruction in the text, in order.
fn instructions(text: &str) -> impl Iterator<Item = PuzzleResult<Instruction>> + '_ {
    INSTRUCTION_REGEX.captures_iter(text).map(|captures| {
        let whole = &captures[0];
        if whole == "do()" {
            Ok(Instruction::Do)
        } else if whole == "don't()" {
            Ok(Instruction::Dont)
        } else {
            multiply(text, &captures)
        }
    })
}

fn multiply(text: &str, captures: &Captures<'_>) -> PuzzleResult<Instruction> {
    let start = captures.get(0).map_or(0, |m| m.start());
    let line = text[..start].matches('\n').count() + 1;
    let operand = |i: usize| {
        captures[i]
            .parse::<u64>()
            .map_err(|source| PuzzleError::ParseInt { line, source })
    };
    let product = operand(1)?
        .checked_mul(operand(2)?)
        .ok_or(PuzzleError::Overflow { line })?;
    Ok(Instruction::Mul { product, line })
}

fn add(total: u64, product: u64, line: usize) -> PuzzleResult<u64> {
    total
        .checked_add(product)
        .ok_or(PuzzleError::Overflow { line })
}

/// Returns the sum of all multiplications.
pub fn part_01(lines: &[&str]) -> PuzzleResult<u64> {
    let text = lines.join("\n");
    instructions(&text).try_fold(0, |total, instruction| match instruction? {
        Instruction::Mul { product, line } => add(total, product, line),
        Instruction::Do | Instruction::Dont => Ok(total),
    })
}

/// Returns the sum of all multiplications that are enabled.
pub fn part_02(lines: &[&str]) -> PuzzleResult<u64> {
    let text = lines.join("\n");
    let mut enabled = true;
    let mut total = 0;
    for instruction in instructions(&text) {
        match instruction? {
            Instruction::Mul { product, line } if enabled => total = add(total, product, line)?,
            Instruction::Mul { .. } => (),
            Instruction::Do => enabled = true,
            Instruction::Dont => enabled = false,
        }
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::lines;

    #[test]
    fn test_part_01() {
        assert_eq!(161, part_01(&lines(TEST_DATA)).unwrap());
        // `don't()` has no effect in part 1.
        assert_eq!(161, part_01(&lines(TEST_DATA_2)).unwrap());
    }

    #[test]
    fn test_part_02() {
        assert_eq!(48, part_02(&lines(TEST_DATA_2)).unwrap());
        assert_eq!(161, part_02(&lines(TEST_DATA)).unwrap());
    }

    #[test]
    fn test_instructions() {
        let parsed: PuzzleResult<Vec<_>> =
            instructions("mul(1,2)don't()mul ( 3,4)do()mul(12,100)").collect();
        assert_eq!(
            vec![
                Instruction::Mul {
                    product: 2,
                    line: 1,
                },
                Instruction::Dont,
                Instruction::Do,
                Instruction::Mul {
                    product: 1200,
                    line: 1,
                },
            ],
            parsed.unwrap(),
        );
    }

    #[test]
    fn test_state_spans_lines() {
        assert_eq!(6, part_02(&["mul(2,3)don't()", "mul(4,5)", "do()x"]).unwrap());
        assert_eq!(26, part_02(&["mul(2,3)don't()", "do()mul(4,5)"]).unwrap());
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            Err(PuzzleError::Overflow { line: 2 }),
            part_01(&["mul(1,1)", "mul(99999999999,99999999999)"]),
        );
    }

    #[test]
    fn test_sum_overflow() {
        let input = ["mul(4294967295,4294967295)", "mul(4294967295,4294967295)"];
        assert_eq!(Err(PuzzleError::Overflow { line: 2 }), part_01(&input));
        assert_eq!(Err(PuzzleError::Overflow { line: 2 }), part_02(&input));

        // Disabled products are never added.
        let input = ["mul(4294967295,4294967295)don't()", "mul(4294967295,4294967295)"];
        assert_eq!(18446744065119617025, part_02(&input).unwrap());
    }
}
