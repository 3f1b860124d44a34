//! Scaffolds a new solution module for a day of Advent of Code 2024.

#[macro_use]
extern crate lazy_static;

use std::collections::BTreeMap;
use std::path::PathBuf;

use eyre::{Context, Result};

mod defaults;
mod scaffold;
mod template;

use defaults::Defaults;
use template::Template;

const DAY_TEMPLATE: &str = include_str!("day.rs.template");

/// Create a new solution module from the day template
#[derive(Debug, clap::Parser)]
#[command(version)]
struct Args {
    /// Day of the puzzle.
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    day: u8,

    /// Author name for the module docs. Defaults to `name` from the defaults
    /// file, then `$USER`.
    #[arg(short, long)]
    name: Option<String>,

    /// Author email for the module docs. Defaults to `email` from the defaults
    /// file, then `$USER@$HOSTNAME`. Pass an empty string to omit it.
    #[arg(short, long)]
    email: Option<String>,

    /// Puzzle title.
    #[arg(short, long)]
    title: Option<String>,

    /// Overwrite an existing module without asking.
    #[arg(short, long)]
    force: bool,

    /// Directory to write the module to. Defaults to the source directory of
    /// the solutions crate.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Defaults file to read instead of the one in the config directory.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    use clap::Parser;

    color_eyre::install().expect("error initializing panic handler");

    // Initialize logging.
    env_logger::builder().init();

    let args = Args::parse();

    let defaults = match &args.config {
        Some(path) => Defaults::load(path),
        None => match aoc_paths::defaults_file() {
            Ok(path) => Defaults::load(path),
            Err(e) => {
                log::warn!("Error locating defaults file: {e}");
                Defaults::default()
            }
        },
    };

    let user = defaults::env_var("USER");
    let host = defaults::env_var("HOSTNAME");
    let name = args
        .name
        .clone()
        .unwrap_or_else(|| defaults.name(user.as_deref()));
    let email = args
        .email
        .clone()
        .unwrap_or_else(|| defaults.email(user.as_deref(), host.as_deref()));

    let contents = render_day(&args, &defaults::author(&name, &email), today())?;

    let out_dir = match &args.out_dir {
        Some(dir) => dir.clone(),
        None => aoc_paths::solutions_dir()?.to_path_buf(),
    };
    let path = aoc_paths::solution_file(&out_dir, args.day);

    let backup = scaffold::write_file(&path, &contents, args.force, |path| {
        let answer = dialoguer::Confirm::new()
            .with_prompt(format!("\"{}\" exists. Overwrite?", path.display()))
            .default(false)
            .interact()?;
        Ok(answer)
    })?;
    if let Some(backup) = backup {
        println!("Previous version moved to \"{}\".", backup.display());
    }

    let input_dir = aoc_paths::day_dir(args.day)?;
    std::fs::create_dir_all(&input_dir)
        .wrap_err_with(|| format!("error creating {}", input_dir.display()))?;
    log::info!("puzzle input goes in {}", input_dir.display());

    println!("Done, see new module \"{}\".", path.display());
    println!(
        "Register it in lib.rs with `pub mod day{0:02};` and add `day{0:02}::DAY` to `DAYS`.",
        args.day,
    );

    Ok(())
}

fn today() -> time::Date {
    time::OffsetDateTime::now_local()
        .unwrap_or_else(|_| time::OffsetDateTime::now_utc())
        .date()
}

fn render_day(args: &Args, author: &str, date: time::Date) -> Result<String> {
    let title = match &args.title {
        Some(title) => title.clone(),
        None => format!("Day {:02}", args.day),
    };

    let values = BTreeMap::from([
        ("day", format!("{:02}", args.day)),
        ("day_number", args.day.to_string()),
        ("date", date.to_string()),
        ("author", author.to_owned()),
        ("title_literal", format!("{title:?}")),
        ("title", title),
    ]);

    Template::parse(DAY_TEMPLATE)
        .and_then(|template| template.render(&values))
        .context("error rendering day template")
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("aoc_new").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_day_range() {
        assert_eq!(1, args(&["1"]).day);
        assert_eq!(25, args(&["25"]).day);
        Args::try_parse_from(["aoc_new", "0"]).expect_err("day 0");
        Args::try_parse_from(["aoc_new", "26"]).expect_err("day 26");
    }

    #[test]
    fn test_render_day() {
        let date = time::Date::from_calendar_date(2024, time::Month::December, 5).unwrap();
        let contents = render_day(
            &args(&["5", "-t", "Print \"Queue\""]),
            "Jane Doe <jane@example.com>",
            date,
        )
        .unwrap();

        assert!(!contents.contains("{{"));
        assert!(contents.starts_with("//! Day 05: Print \"Queue\".\n"));
        assert!(contents.contains("//! Scaffolded on 2024-12-05 by Jane Doe <jane@example.com>.\n"));
        assert!(contents.contains("    number: 5,\n"));
        assert!(contents.contains("    title: \"Print \\\"Queue\\\"\",\n"));
    }

    #[test]
    fn test_template_params() {
        let template = Template::parse(DAY_TEMPLATE).unwrap();
        assert_eq!(
            std::collections::BTreeSet::from([
                "author",
                "date",
                "day",
                "day_number",
                "title",
                "title_literal",
            ]),
            template.params(),
        );
    }
}
