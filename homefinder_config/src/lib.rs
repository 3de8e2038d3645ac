use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{File, FileFormat};
use homefinder_models::email_address::EmailAddressWithName;
use serde::Deserialize;

pub use duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Colon separated list of additional config files. Later files override
/// earlier ones.
pub const CONFIG_PATH_ENV: &str = "HOMEFINDER_CONFIG";

/// Loads the default config followed by every file listed in
/// [`CONFIG_PATH_ENV`].
pub fn load() -> anyhow::Result<Config> {
    let extra = std::env::var(CONFIG_PATH_ENV).unwrap_or_default();
    let paths = std::iter::once(DEFAULT_CONFIG_PATH)
        .chain(extra.split(':').filter(|path| !path.is_empty()))
        .collect::<Vec<_>>();
    load_from(&paths)
}

pub fn load_from(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub contact: ContactConfig,
    pub email: EmailConfig,
    pub preferences: PreferencesConfig,
    pub property: PropertyConfig,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub transport: ContactTransportKind,
    pub recipient: EmailAddressWithName,
    pub submit_label: String,
    pub busy_label: String,
    pub failure_message: String,
    pub simulated_delay: Duration,
    pub success_display: Duration,
    pub message_max_chars: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactTransportKind {
    Simulated,
    Email,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub smtp_url: String,
    pub from: EmailAddressWithName,
}

#[derive(Debug, Deserialize)]
pub struct PreferencesConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct PropertyConfig {
    pub search_label: String,
    pub busy_label: String,
    pub search_delay: Duration,
}
