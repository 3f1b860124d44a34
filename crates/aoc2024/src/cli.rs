use std::io::{Read, Write};
use std::path::Path;

use aoc2024::{DAYS, Day};
use eyre::{Context, Result, eyre};

/// Advent of Code 2024 puzzle runner
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Check a day's fixtures, then print the answers to both parts.
    Run {
        /// Day of the puzzle.
        #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
        day: u8,

        /// Puzzle input, use '-' for stdin. Defaults to the day's input in
        /// the data directory.
        #[arg(short, long, value_parser)]
        input: Option<clio::Input>,

        /// Don't check the sample fixtures first.
        #[arg(long)]
        skip_check: bool,
    },
    /// Check the sample fixtures of one day, or of every implemented day.
    Check {
        /// Day of the puzzle.
        #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
        day: Option<u8>,
    },
    /// Print all implemented days.
    List,
}

pub(crate) fn exec(subcommand: Subcommand) -> Result<()> {
    exec_with_output(subcommand, &mut std::io::stdout().lock())
}

fn exec_with_output(subcommand: Subcommand, out: &mut impl Write) -> Result<()> {
    match subcommand {
        Subcommand::Run {
            day,
            input,
            skip_check,
        } => {
            let day = find_day(day)?;
            if !skip_check {
                check(day)?;
            }

            let text = match input {
                Some(mut input) => {
                    let mut buffer = String::new();
                    input
                        .read_to_string(&mut buffer)
                        .context("error reading puzzle input")?;
                    buffer
                }
                None => read_input_file(&aoc_paths::input_file(day.number)?)?,
            };

            let [part_01, part_02] = day
                .solve(&aoc2024::lines(&text))
                .wrap_err_with(|| format!("error solving day {:02}", day.number))?;
            writeln!(out, "{part_01}")?;
            writeln!(out, "{part_02}")?;
            Ok(())
        }

        Subcommand::Check { day } => {
            let days = match day {
                Some(day) => vec![find_day(day)?],
                None => DAYS.iter().collect(),
            };
            check_all(&days, out)
        }

        Subcommand::List => {
            for day in DAYS {
                writeln!(out, "{:02} {}", day.number, day.title)?;
            }
            Ok(())
        }
    }
}

fn find_day(number: u8) -> Result<&'static Day> {
    aoc2024::day(number).ok_or_else(|| eyre!("day {number:02} is not implemented"))
}

fn read_input_file(path: &Path) -> Result<String> {
    log::info!("reading input from {}", path.display());
    std::fs::read_to_string(path).wrap_err_with(|| format!("error reading {}", path.display()))
}

fn check(day: &Day) -> Result<()> {
    day.check()
        .wrap_err_with(|| format!("sample fixture failed for day {:02}", day.number))
}

fn check_all(days: &[&Day], out: &mut impl Write) -> Result<()> {
    for day in days {
        check(day)?;
        writeln!(out, "day {:02}: ok", day.number)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;

    fn exec_args(argv: &[&str]) -> Result<String> {
        let args = Args::try_parse_from(std::iter::once("aoc2024").chain(argv.iter().copied()))?;
        let mut out = vec![];
        exec_with_output(args.subcommand, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_run_prints_both_parts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input");
        std::fs::write(&path, "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n").unwrap();

        let output = exec_args(&["run", "1", "--input", path.to_str().unwrap()]).unwrap();
        assert_eq!("11\n31\n", output);
    }

    #[test]
    fn test_run_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing");

        exec_args(&["run", "1", "--input", path.to_str().unwrap()]).expect_err("missing input");

        let err = read_input_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains(&path.display().to_string()));
    }

    #[test]
    fn test_run_unimplemented_day() {
        let err = exec_args(&["run", "2", "--skip-check"]).unwrap_err();
        assert_eq!("day 02 is not implemented", err.to_string());
        exec_args(&["run", "26"]).expect_err("day out of range");
    }

    #[test]
    fn test_check() {
        assert_eq!("day 04: ok\n", exec_args(&["check", "4"]).unwrap());

        let lines = DAYS
            .iter()
            .map(|day| format!("day {:02}: ok\n", day.number))
            .collect::<String>();
        assert_eq!(lines, exec_args(&["check"]).unwrap());
    }

    #[test]
    fn test_check_fixture_mismatch() {
        let mut broken = aoc2024::day01::DAY;
        broken.parts[1].expected = 30;

        let mut out = vec![];
        let err = check_all(&[&aoc2024::day03::DAY, &broken], &mut out).unwrap_err();
        assert_eq!("day 03: ok\n", String::from_utf8(out).unwrap());
        assert_eq!("sample fixture failed for day 01", err.to_string());
        assert_eq!(
            Some(&aoc2024::PuzzleError::FixtureMismatch {
                day: 1,
                part: 2,
                expected: 30,
                actual: 31,
            }),
            err.downcast_ref::<aoc2024::PuzzleError>(),
        );
    }

    #[test]
    fn test_list() {
        let output = exec_args(&["list"]).unwrap();
        assert_eq!(
            "01 Historian Hysteria\n03 Mull It Over\n04 Ceres Search\n",
            output,
        );
    }
}
