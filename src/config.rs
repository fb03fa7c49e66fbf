//! Application-level configuration loading, including the roulette theme wheel.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "TRIVIA_NIGHT_BACK_CONFIG_PATH";
/// Default quiz questions file relative to the working directory.
const DEFAULT_QUESTIONS_PATH: &str = "config/questions.json";
/// Built-in admin secret used when the config file provides none.
const DEFAULT_ADMIN_SECRET: &str = "123456";

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    admin_secret: String,
    themes: Vec<String>,
    questions_path: PathBuf,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to built-in defaults.
    pub fn load() -> Self {
        let path = resolve_config_path();
        let config = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let config: Self = raw.into();
                    info!(
                        path = %path.display(),
                        themes = config.themes.len(),
                        "loaded configuration"
                    );
                    config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        };

        if config.admin_secret == DEFAULT_ADMIN_SECRET {
            warn!("running with the built-in admin secret; set `admin_secret` in the config file");
        }

        config
    }

    /// Shared secret required by the admin command surface.
    pub fn admin_secret(&self) -> &str {
        &self.admin_secret
    }

    /// Theme wheel the roulette draws from.
    pub fn themes(&self) -> &[String] {
        &self.themes
    }

    /// Location of the quiz questions file.
    pub fn questions_path(&self) -> &PathBuf {
        &self.questions_path
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            admin_secret: DEFAULT_ADMIN_SECRET.to_string(),
            themes: default_themes(),
            questions_path: PathBuf::from(DEFAULT_QUESTIONS_PATH),
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the configuration file located at [`DEFAULT_CONFIG_PATH`].
struct RawConfig {
    admin_secret: Option<String>,
    themes: Option<Vec<String>>,
    questions_path: Option<PathBuf>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        let defaults = AppConfig::default();
        Self {
            admin_secret: value.admin_secret.unwrap_or(defaults.admin_secret),
            themes: value
                .themes
                .filter(|themes| !themes.is_empty())
                .unwrap_or(defaults.themes),
            questions_path: value.questions_path.unwrap_or(defaults.questions_path),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Built-in theme wheel shipped with the binary.
fn default_themes() -> Vec<String> {
    [
        "Culture Générale",
        "Cinéma",
        "Sport",
        "Musique",
        "Histoire",
        "Géographie",
        "Sciences",
        "Informatique",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}
