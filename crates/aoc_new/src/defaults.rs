//! Default author information for generated modules.
//!
//! Defaults are read from an INI file of `key = value` lines:
//!
//! ```ini
//! name = Jane Doe
//! email = jane@example.com
//! ```

use std::env;
use std::path::Path;

const DEFAULTS_FILE_FORMAT: config::FileFormat = config::FileFormat::Ini;

const FALLBACK_USER: &str = "Anonymous";
const FALLBACK_HOST: &str = "localhost";

/// Values loaded from the defaults file. Missing or empty keys are `None`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Defaults {
    /// Loads defaults from `path`. A missing file yields empty defaults; a
    /// malformed file is logged and ignored.
    pub fn load(path: &Path) -> Self {
        let config = config::Config::builder()
            .add_source(
                config::File::from(path)
                    .format(DEFAULTS_FILE_FORMAT)
                    .required(false),
            )
            .build();

        match config {
            Ok(config) => {
                let get = |key: &str| {
                    config
                        .get_string(key)
                        .ok()
                        .map(|s| s.trim().to_owned())
                        .filter(|s| !s.is_empty())
                };
                Self {
                    name: get("name"),
                    email: get("email"),
                }
            }
            Err(e) => {
                log::warn!("Error loading defaults from {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Returns the author name, falling back to the current user.
    pub fn name(&self, user: Option<&str>) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => user.unwrap_or(FALLBACK_USER).to_owned(),
        }
    }

    /// Returns the author email, falling back to `user@host`.
    pub fn email(&self, user: Option<&str>, host: Option<&str>) -> String {
        match &self.email {
            Some(email) => email.clone(),
            None => format!(
                "{}@{}",
                user.unwrap_or(FALLBACK_USER),
                host.unwrap_or(FALLBACK_HOST),
            ),
        }
    }
}

/// Returns a non-empty environment variable.
pub fn env_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Formats the author line, omitting the email if it is empty.
pub fn author(name: &str, email: &str) -> String {
    match email.is_empty() {
        true => name.to_owned(),
        false => format!("{name} <{email}>"),
    }
}
