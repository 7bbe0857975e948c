use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::CollisionPolicy;

pub const CONFIG_FILE_NAME: &str = ".flowlaterc.json";

/// Path of the generated internationalization file, relative to the
/// project root. This is where FlutterFlow writes `kTranslationsMap`.
pub const INTL_FILE_PATH: &str = "lib/flutter_flow/internationalization.dart";

/// Name and path fragments that mark a JSON file as translation-related.
pub const TRANSLATION_FILE_INDICATORS: &[&str] = &[
    "translation",
    "lang",
    "locale",
    "i18n",
    "l10n",
    "strings",
    "messages",
    "text",
    "labels",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default)]
    pub collision_policy: CollisionPolicy,
    #[serde(default = "default_intl_path")]
    pub intl_path: String,
}

fn default_ignores() -> Vec<String> {
    [
        "**/build/**",
        "**/.dart_tool/**",
        "**/.git/**",
        "**/ios/Pods/**",
        "**/node_modules/**",
    ]
    .map(String::from)
    .to_vec()
}

fn default_separator() -> String {
    ".".to_string()
}

fn default_intl_path() -> String {
    INTL_FILE_PATH.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: default_ignores(),
            separator: default_separator(),
            collision_policy: CollisionPolicy::default(),
            intl_path: default_intl_path(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores` are invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
