use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{collections::HashMap, fs, path::PathBuf, time::Duration};

use crate::moods::Moods;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the mood log.
    pub data_dir: PathBuf,
    /// File name of the CSV log inside `data_dir`.
    pub file_name: String,
    /// Preferred editor name/binary. Optional; the CLI falls back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
    pub date_format: String,
    /// Tracing filter directive (e.g. "info", "moodlog_core=debug").
    pub log_level: Option<String>,
    pub classifier: ClassifierConfig,
}

#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    file_name: Option<String>,
    editor: Option<String>,
    date_format: Option<String>,
    log_level: Option<String>,
    classifier: Option<FileClassifierConfig>,
    /// Optional table:
    /// [moods]
    /// Ecstatic = 5
    /// Meh = 3
    moods: Option<HashMap<String, i64>>,
}

#[derive(Debug, Default, Deserialize)]
struct FileClassifierConfig {
    endpoint: Option<String>,
    model: Option<String>,
    api_key: Option<String>,
    timeout_secs: Option<u64>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load config from disk (first XDG path, then native), apply defaults,
    /// and extend the global mood registry with the `[moods]` table if present.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|error| {
            tracing::warn!(%error, "ignoring unreadable config file");
            FileConfig::default()
        });
        let api_key_env = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        Ok(Self::from_file_config(file_config, api_key_env))
    }

    /// Path of the CSV log.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }

    fn from_file_config(file_config: FileConfig, api_key_env: Option<String>) -> Self {
        let classifier_file = file_config.classifier.unwrap_or_default();
        let defaults = ClassifierConfig::default();
        let classifier = ClassifierConfig {
            endpoint: classifier_file.endpoint.unwrap_or(defaults.endpoint),
            model: classifier_file.model.unwrap_or(defaults.model),
            api_key: api_key_env.or(classifier_file.api_key),
            timeout: classifier_file
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        };

        Self::load_moods(&file_config.moods);

        Self {
            data_dir: file_config
                .data_dir
                .unwrap_or_else(Self::default_data_dir),
            file_name: file_config
                .file_name
                .unwrap_or_else(|| "mood_log.csv".to_string()),
            editor: file_config.editor,
            date_format: file_config
                .date_format
                .unwrap_or_else(|| "%a, %d %b %Y".to_string()),
            log_level: file_config.log_level,
            classifier,
        }
    }

    /// Default data root: `{data_dir}/moodlog`
    /// - macOS:   `~/Library/Application Support/moodlog`
    /// - Linux:   `$XDG_DATA_HOME/moodlog` or `~/.local/share/moodlog`
    /// - Windows: `%APPDATA%\moodlog`
    fn default_data_dir() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            base.data_dir().join("moodlog")
        } else {
            PathBuf::from("./moodlog")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            v.push(b.home_dir().join(".config").join("moodlog").join("config.toml"));
            v.push(b.config_dir().join("moodlog").join("config.toml"));
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config file");
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }

    fn load_moods(moods: &Option<HashMap<String, i64>>) {
        if let Some(map) = moods.as_ref().filter(|m| !m.is_empty()) {
            let pairs: Vec<(String, i64)> = map.iter().map(|(l, s)| (l.clone(), *s)).collect();
            Moods::extend(&pairs);
        }
    }
}
