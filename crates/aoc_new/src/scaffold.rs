//! Writing generated files to disk.

use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr, bail};

/// Mode of generated source files on Unix.
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Writes `contents` to `path`, creating parent directories as needed.
///
/// If `path` already exists, `confirm` is asked whether to overwrite it unless
/// `force` is set. The existing file is moved to a backup before being
/// replaced, and the backup path is returned.
pub fn write_file(
    path: &Path,
    contents: &str,
    force: bool,
    confirm: impl FnOnce(&Path) -> Result<bool>,
) -> Result<Option<PathBuf>> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("error creating directory {}", dir.display()))?;
    }

    let backup = if path.exists() {
        if !force && !confirm(path)? {
            bail!("Will not overwrite {}. Bye!", path.display());
        }
        Some(aoc_paths::move_to_backup_file(path)?)
    } else {
        None
    };

    fs::write(path, contents).wrap_err_with(|| format!("error writing {}", path.display()))?;
    set_mode(path)?;

    Ok(backup)
}

#[cfg(unix)]
fn set_mode(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(FILE_MODE))
        .wrap_err_with(|| format!("error setting permissions on {}", path.display()))
}
#[cfg(not(unix))]
fn set_mode(_path: &Path) -> Result<()> {
    Ok(())
}
