//! Application configuration
//!
//! Loaded from `config.toml` in the platform config directory. Every
//! field is optional; a missing or unparseable file falls back to
//! defaults so the driver always starts.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Ticket artifact settings
    #[serde(default)]
    pub tickets: TicketConfig,
    /// Events to register at startup
    #[serde(default)]
    pub seed_events: Vec<SeedEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TicketConfig {
    /// Override for the ticket artifact directory
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

/// An event registered automatically at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedEvent {
    pub id: String,
    pub name: String,
    pub category: String,
    pub venue: String,
    pub total_seats: u32,
}

impl AppConfig {
    /// Load from the default location, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "Loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring invalid config");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    fn default_path() -> Option<PathBuf> {
        let dirs = ProjectDirs::from("dev", "seathub", "seathub")?;
        Some(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let raw = r#"
[tickets]
output_dir = "/tmp/tickets"

[[seed_events]]
id = "E001"
name = "Inception"
category = "Movies"
venue = "IMAX Theater"
total_seats = 150
"#;
        let config: AppConfig = toml::from_str(raw).unwrap();
        assert_eq!(
            config.tickets.output_dir,
            Some(PathBuf::from("/tmp/tickets"))
        );
        assert_eq!(config.seed_events.len(), 1);
        assert_eq!(config.seed_events[0].total_seats, 150);
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.tickets.output_dir.is_none());
        assert!(config.seed_events.is_empty());
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load_from(&dir.path().join("nope.toml")).is_err());
    }
}
