use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::utils::is_valid_identifier;

pub const CONFIG_FILE_NAME: &str = ".sheetliftrc.json";

/// Where a newly created registry is placed in the file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum InsertionPolicy {
    #[serde(alias = "Top")]
    Top,
    #[default]
    #[serde(alias = "Bottom")]
    Bottom,
    #[serde(alias = "After imports", alias = "AfterImports")]
    AfterImports,
}

/// Settings for one extraction run.
///
/// Built once per operation and passed by reference to every stage.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_name_prefix", alias = "defaultStyleName")]
    pub default_name_prefix: String,
    #[serde(default = "default_registry_name", alias = "preferredStyleSheetName")]
    pub preferred_registry_name: String,
    #[serde(default = "default_auto_import", alias = "autoImportStyleSheet")]
    pub auto_import: bool,
    #[serde(default, alias = "sortStyleProperties")]
    pub sort_static_properties: bool,
    #[serde(default = "default_preserve_comments")]
    pub preserve_comments: bool,
    #[serde(default, alias = "extractionLocation")]
    pub insertion_policy: InsertionPolicy,
}

fn default_name_prefix() -> String {
    "myStyle".to_string()
}

fn default_registry_name() -> String {
    "styles".to_string()
}

fn default_auto_import() -> bool {
    true
}

fn default_preserve_comments() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_name_prefix: default_name_prefix(),
            preferred_registry_name: default_registry_name(),
            auto_import: default_auto_import(),
            sort_static_properties: false,
            preserve_comments: default_preserve_comments(),
            insertion_policy: InsertionPolicy::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the name prefix or registry name could not be used
    /// as an identifier in generated code.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_identifier(&self.default_name_prefix) {
            bail!(
                "Invalid 'defaultNamePrefix': \"{}\" is not a valid identifier",
                self.default_name_prefix
            );
        }
        if !is_valid_identifier(&self.preferred_registry_name) {
            bail!(
                "Invalid 'preferredRegistryName': \"{}\" is not a valid identifier",
                self.preferred_registry_name
            );
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
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
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
