use crate::error::Result;
use crate::form::FormDefaults;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "questions.csv";
const DEFAULT_TRACK: &str = "General";

/// Configuration for quizbank, stored as config.json in the config dir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizConfig {
    /// Path to the backing question CSV. Relative paths resolve against
    /// the working directory.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Track assigned to new questions when the table has none to offer.
    #[serde(default = "default_track")]
    pub default_track: String,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_track() -> String {
    DEFAULT_TRACK.to_string()
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            default_track: default_track(),
        }
    }
}

impl QuizConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&config_path)?;
        let config: QuizConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn form_defaults(&self) -> FormDefaults {
        FormDefaults {
            track: self.default_track.clone(),
            ..FormDefaults::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = QuizConfig::default();
        assert_eq!(config.data_file, PathBuf::from("questions.csv"));
        assert_eq!(config.default_track, "General");
    }

    #[test]
    fn load_missing_config_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = QuizConfig::load(dir.path().join("nowhere")).unwrap();
        assert_eq!(config, QuizConfig::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = QuizConfig::default();
        config.default_track = "Quality Assurance".to_string();
        config.data_file = PathBuf::from("qa/questions.csv");
        config.save(dir.path()).unwrap();

        let loaded = QuizConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn form_defaults_carry_the_configured_track() {
        let mut config = QuizConfig::default();
        config.default_track = "Mobile Development".to_string();
        let defaults = config.form_defaults();
        assert_eq!(defaults.track, "Mobile Development");
        assert_eq!(defaults.mark, 1.0);
        assert_eq!(defaults.time_seconds, 30);
    }
}
