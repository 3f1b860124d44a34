//! Paths to files read and written by the puzzle runner and the generator.
//!
//! Puzzle inputs live in the data directory, one subdirectory per day:
//!
//! ```text
//! inputs/
//!     01/input
//!     04/input
//! ```
//!
//! The data directory is `$AOC2024_DATA_DIR` if it is set, and otherwise the
//! `inputs` directory at the root of the workspace.

use std::borrow::Cow;
use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use directories::ProjectDirs;
use eyre::{OptionExt, Result, WrapErr};

#[macro_use]
extern crate lazy_static;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV_VAR: &str = "AOC2024_DATA_DIR";

const DATA_DIR_NAME: &str = "inputs";
const INPUT_FILE_NAME: &str = "input";

const SOLUTIONS_CRATE_NAME: &str = "aoc2024";

const DEFAULTS_FILE_NAME: &str = "new";
const DEFAULTS_FILE_EXTENSION: &str = "ini";

lazy_static! {
    static ref PATHS: Option<AppPaths> = app_paths();
}

fn get() -> Result<&'static AppPaths> {
    PATHS.as_ref().ok_or_eyre("no paths")
}

/// Returns the directory containing puzzle inputs.
pub fn data_dir() -> Result<&'static Path> {
    Ok(&get()?.data_dir)
}
/// Returns the directory containing the input for a day.
pub fn day_dir(day: u8) -> Result<PathBuf> {
    Ok(data_dir()?.join(format!("{day:02}")))
}
/// Returns the input file for a day.
pub fn input_file(day: u8) -> Result<PathBuf> {
    Ok(day_dir(day)?.join(INPUT_FILE_NAME))
}
/// Returns the source directory where solution modules are generated.
pub fn solutions_dir() -> Result<&'static Path> {
    Ok(&get()?.solutions_dir)
}
/// Returns the source file for a day's solution module.
pub fn solution_file(dir: &Path, day: u8) -> PathBuf {
    dir.join(format!("day{day:02}.rs"))
}
/// Returns the file holding default values for the generator.
pub fn defaults_file() -> Result<&'static Path> {
    get()?
        .defaults_file
        .as_deref()
        .ok_or_eyre("no config directory")
}

/// Renames a file to create a backup and returns the path of the backup.
pub fn move_to_backup_file(original: &Path) -> Result<PathBuf> {
    let now = time::OffsetDateTime::now_local().unwrap_or_else(|_| time::OffsetDateTime::now_utc());
    let backup_path = backup_path(original, now);

    std::fs::rename(original, &backup_path)
        .wrap_err_with(|| format!("error backing up {}", original.display()))?;
    log::info!(
        "backup of {} stored at {}",
        original.display(),
        backup_path.display(),
    );
    Ok(backup_path)
}
/// Returns `<stem>_<date>_<hh-mm-ss>_bak.<ext>` next to `original`.
fn backup_path(original: &Path, now: time::OffsetDateTime) -> PathBuf {
    let stem = original
        .file_stem()
        .map_or(Cow::Borrowed("unknown"), OsStr::to_string_lossy);
    let extension = original
        .extension()
        .map_or(Cow::Borrowed("txt"), OsStr::to_string_lossy);
    let (hour, minute, second) = now.time().as_hms();

    original.with_file_name(format!(
        "{stem}_{}_{hour:02}-{minute:02}-{second:02}_bak.{extension}",
        now.date(),
    ))
}

/// Paths to external files.
struct AppPaths {
    /// Directory of puzzle inputs.
    data_dir: PathBuf,
    /// Source directory of the solutions crate.
    solutions_dir: PathBuf,
    /// Generator defaults, if the platform has a config directory.
    defaults_file: Option<PathBuf>,
}

fn app_paths() -> Option<AppPaths> {
    let workspace = workspace_dir()?;

    let data_dir = match env::var_os(DATA_DIR_ENV_VAR) {
        Some(dir) => {
            log::info!("Using data directory from ${DATA_DIR_ENV_VAR}");
            PathBuf::from(dir)
        }
        None => workspace.join(DATA_DIR_NAME),
    };

    let defaults_file = match ProjectDirs::from("", "", SOLUTIONS_CRATE_NAME) {
        Some(dirs) => Some(
            dirs.config_dir()
                .join(format!("{DEFAULTS_FILE_NAME}.{DEFAULTS_FILE_EXTENSION}")),
        ),
        None => {
            log::warn!("Error getting config directory");
            None
        }
    };

    Some(AppPaths {
        data_dir,
        solutions_dir: workspace
            .join("crates")
            .join(SOLUTIONS_CRATE_NAME)
            .join("src"),
        defaults_file,
    })
}

fn workspace_dir() -> Option<PathBuf> {
    // `/crates/aoc_paths/`
    let dir = PathBuf::from_str(env!("CARGO_MANIFEST_DIR")).ok()?;
    Some(dir.parent()?.parent()?.to_path_buf())
}
