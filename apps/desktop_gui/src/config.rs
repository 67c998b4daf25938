use std::{
    fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Context;
use clap::Parser;
use serde::{Deserialize, Serialize};
use shared::domain::{is_known_country_code, DEFAULT_COUNTRY_CODE};

const CONFIG_DIR_NAME: &str = "invitebuddy";
const CONFIG_FILE_NAME: &str = "invitebuddy.toml";
const ENV_PREFIX: &str = "APP__";

#[derive(Parser, Debug, Default)]
#[command(name = "invitebuddy", about = "Guest list and RSVP tracker")]
pub struct CliArgs {
    /// Path to a TOML config file.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// light, dark or system
    #[arg(long)]
    pub theme: Option<ThemeChoice>,
    #[arg(long)]
    pub event_name: Option<String>,
    /// Event date as dd-MM-yyyy.
    #[arg(long)]
    pub event_date: Option<String>,
    #[arg(long)]
    pub country_code: Option<String>,
    #[arg(long)]
    pub log_filter: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    Light,
    Dark,
    #[default]
    System,
}

impl fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        })
    }
}

impl FromStr for ThemeChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(format!("unknown theme '{other}' (expected light, dark or system)")),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    theme: Option<String>,
    event_name: Option<String>,
    event_date: Option<String>,
    default_country_code: Option<String>,
    log_filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    pub theme: ThemeChoice,
    /// Set when the theme came from the command line; beats the remembered toggle.
    pub theme_forced: bool,
    pub event_name: String,
    pub event_date: String,
    pub default_country_code: String,
    pub log_filter: Option<String>,
    /// Problems found while loading, logged once tracing is up.
    pub warnings: Vec<String>,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::System,
            theme_forced: false,
            event_name: String::new(),
            event_date: String::new(),
            default_country_code: DEFAULT_COUNTRY_CODE.to_string(),
            log_filter: None,
            warnings: Vec::new(),
        }
    }
}

impl StartupConfig {
    /// Defaults, then the config file, then `APP__*` variables, then flags.
    pub fn load(args: &CliArgs) -> anyhow::Result<Self> {
        let mut config = Self::default();

        match &args.config {
            Some(path) => {
                let raw = fs::read_to_string(path).with_context(|| {
                    format!("failed to read config file '{}'", path.display())
                })?;
                config.apply_file(&raw, path)?;
            }
            None => {
                if let Some(path) = default_config_path() {
                    if let Ok(raw) = fs::read_to_string(&path) {
                        config.apply_file(&raw, &path)?;
                    }
                }
            }
        }

        config.apply_env(|key| std::env::var(key).ok());
        config.apply_args(args);
        Ok(config)
    }

    pub fn apply_file(&mut self, raw: &str, path: &Path) -> anyhow::Result<()> {
        let file: FileConfig = toml::from_str(raw)
            .with_context(|| format!("invalid config file '{}'", path.display()))?;
        if let Some(theme) = file.theme {
            self.set_theme_text(&theme);
        }
        if let Some(name) = file.event_name {
            self.event_name = name;
        }
        if let Some(date) = file.event_date {
            self.event_date = date;
        }
        if let Some(code) = file.default_country_code {
            self.set_country_code(&code);
        }
        if let Some(filter) = file.log_filter {
            self.log_filter = Some(filter);
        }
        Ok(())
    }

    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let var = |name: &str| {
            lookup(&format!("{ENV_PREFIX}{name}")).filter(|value| !value.trim().is_empty())
        };
        if let Some(theme) = var("THEME") {
            self.set_theme_text(&theme);
        }
        if let Some(name) = var("EVENT_NAME") {
            self.event_name = name;
        }
        if let Some(date) = var("EVENT_DATE") {
            self.event_date = date;
        }
        if let Some(code) = var("DEFAULT_COUNTRY_CODE") {
            self.set_country_code(&code);
        }
        if let Some(filter) = var("LOG_FILTER") {
            self.log_filter = Some(filter);
        }
    }

    pub fn apply_args(&mut self, args: &CliArgs) {
        if let Some(theme) = args.theme {
            self.theme = theme;
            self.theme_forced = true;
        }
        if let Some(name) = &args.event_name {
            self.event_name = name.clone();
        }
        if let Some(date) = &args.event_date {
            self.event_date = date.clone();
        }
        if let Some(code) = &args.country_code {
            self.set_country_code(code);
        }
        if let Some(filter) = &args.log_filter {
            self.log_filter = Some(filter.clone());
        }
    }

    fn set_theme_text(&mut self, text: &str) {
        match text.parse() {
            Ok(theme) => self.theme = theme,
            Err(err) => self.warnings.push(err),
        }
    }

    fn set_country_code(&mut self, code: &str) {
        let code = code.trim();
        if is_known_country_code(code) {
            self.default_country_code = code.to_string();
        } else {
            self.warnings.push(format!(
                "ignoring unknown country code '{code}'; keeping {}",
                self.default_country_code
            ));
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
