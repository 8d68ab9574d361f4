//! # Configuration
//!
//! TOML configuration for the terminal shell and logging. The game world
//! itself is fixed and not configurable.
//!
//! ```toml
//! [game]
//! prompt = "Mitä haluat tehdä?"
//! show_snapshot_json = false
//! log_messages = true
//!
//! [logging]
//! level = "info"
//! file = "kaivoseikkailu.log"
//! ```
//!
//! Both sections are optional; missing values fall back to [`Config::default`].
//! A verbosity flag on the command line overrides `logging.level`.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Prompt printed before each command is read.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Print the world snapshot as JSON after every command.
    #[serde(default)]
    pub show_snapshot_json: bool,
    /// Echo every player-facing message to the log at info level.
    #[serde(default = "default_log_messages")]
    pub log_messages: bool,
}

fn default_prompt() -> String {
    "Mitä haluat tehdä?".to_string()
}

fn default_log_messages() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            show_snapshot_json: false,
            log_messages: default_log_messages(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    /// Append log lines to this file in addition to the console.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed `level`. Unknown names fall back to `warn`.
    pub fn level_filter(&self) -> log::LevelFilter {
        match self.level.to_ascii_lowercase().as_str() {
            "off" => log::LevelFilter::Off,
            "error" => log::LevelFilter::Error,
            "warn" | "warning" => log::LevelFilter::Warn,
            "info" => log::LevelFilter::Info,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            _ => {
                eprintln!("Invalid log level '{}', defaulting to warn", self.level);
                log::LevelFilter::Warn
            }
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Load configuration if the file exists. A missing file is `Ok(None)`;
    /// an unreadable or malformed one is still an error.
    pub async fn load_optional(path: &str) -> Result<Option<Self>> {
        match fs::try_exists(path).await {
            Ok(true) => Self::load(path).await.map(Some),
            Ok(false) => Ok(None),
            Err(e) => Err(anyhow!("Failed to check config file {}: {}", path, e)),
        }
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.game.prompt, "Mitä haluat tehdä?");
        assert!(!config.game.show_snapshot_json);
        assert!(config.game.log_messages);
        assert_eq!(config.logging.level, "warn");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_level_filter() {
        let test_cases = vec![
            ("off", log::LevelFilter::Off),
            ("ERROR", log::LevelFilter::Error),
            ("warning", log::LevelFilter::Warn),
            ("info", log::LevelFilter::Info),
            ("Debug", log::LevelFilter::Debug),
            ("trace", log::LevelFilter::Trace),
            ("loud", log::LevelFilter::Warn),
        ];

        for (level, expected) in test_cases {
            let config = LoggingConfig {
                level: level.to_string(),
                file: None,
            };
            assert_eq!(config.level_filter(), expected, "level '{}'", level);
        }
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[game]\nshow_snapshot_json = true\n").unwrap();
        assert!(config.game.show_snapshot_json);
        assert_eq!(config.game.prompt, "Mitä haluat tehdä?");
        assert_eq!(config.logging.level, "warn");

        let empty: Config = toml::from_str("").unwrap();
        assert!(empty.game.log_messages);
    }

    #[tokio::test]
    async fn test_create_default_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let path = path.to_str().unwrap();

        Config::create_default(path).await.unwrap();
        let loaded = Config::load(path).await.unwrap();
        assert_eq!(loaded.game.prompt, Config::default().game.prompt);
        assert_eq!(loaded.logging.level, "warn");
    }

    #[tokio::test]
    async fn test_load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = Config::load(path.to_str().unwrap()).await.unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[tokio::test]
    async fn test_load_optional_missing_vs_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let loaded = Config::load_optional(missing.to_str().unwrap()).await.unwrap();
        assert!(loaded.is_none());

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[game\nprompt = ").unwrap();
        let err = Config::load_optional(broken.to_str().unwrap())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));

        let good = dir.path().join("good.toml");
        std::fs::write(&good, "[game]\nprompt = \">\"\n").unwrap();
        let loaded = Config::load_optional(good.to_str().unwrap()).await.unwrap();
        assert_eq!(loaded.unwrap().game.prompt, ">");
    }
}
