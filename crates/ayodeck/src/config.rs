use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "ayodeck";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_intro: Option<bool>,

    /// Overrides every slide's auto-advance delay. 0 disables auto-advance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_advance_ms: Option<u64>,

    /// 1-indexed slide number or slide id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_slide: Option<String>,
}

/// Where the auto-advance delay comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoAdvancePolicy {
    /// Use each slide's own delay.
    PerSlide,
    Fixed(Duration),
    Disabled,
}

impl AutoAdvancePolicy {
    /// The delay to arm for a slide that declares `slide_delay`.
    pub fn delay_for(self, slide_delay: Option<Duration>) -> Option<Duration> {
        match self {
            Self::PerSlide => slide_delay,
            Self::Fixed(delay) => slide_delay.map(|_| delay),
            Self::Disabled => None,
        }
    }
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `ayodeck config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!("using default config: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# AYO deck presenter configuration\n{yaml}");
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn defaults(&self) -> DefaultsConfig {
        self.defaults.clone().unwrap_or_default()
    }

    pub fn theme(&self) -> String {
        self.defaults().theme.unwrap_or_else(|| "dark".to_string())
    }

    pub fn transition(&self) -> String {
        self.defaults()
            .transition
            .unwrap_or_else(|| "slide".to_string())
    }

    pub fn skip_intro(&self) -> bool {
        self.defaults().skip_intro.unwrap_or(false)
    }

    pub fn auto_advance(&self) -> AutoAdvancePolicy {
        match self.defaults().auto_advance_ms {
            None => AutoAdvancePolicy::PerSlide,
            Some(0) => AutoAdvancePolicy::Disabled,
            Some(ms) => AutoAdvancePolicy::Fixed(Duration::from_millis(ms)),
        }
    }

    pub fn start_slide(&self) -> Option<String> {
        self.defaults().start_slide
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.theme" => {
                match value {
                    "light" | "dark" => {}
                    _ => anyhow::bail!("Invalid theme: {value}. Must be 'light' or 'dark'."),
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .theme = Some(value.to_string());
            }
            "defaults.transition" => {
                match value {
                    "fade" | "slide" | "none" => {}
                    _ => anyhow::bail!(
                        "Invalid transition: {value}. Must be 'fade', 'slide', or 'none'."
                    ),
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .transition = Some(value.to_string());
            }
            "defaults.skip_intro" => {
                let skip = match value {
                    "true" | "yes" | "on" => true,
                    "false" | "no" | "off" => false,
                    _ => anyhow::bail!("Invalid skip_intro: {value}. Must be 'true' or 'false'."),
                };
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .skip_intro = Some(skip);
            }
            "defaults.auto_advance_ms" => {
                let Ok(ms) = value.parse::<u64>() else {
                    anyhow::bail!(
                        "Invalid auto_advance_ms: {value}. Must be a number of milliseconds (0 disables)."
                    );
                };
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .auto_advance_ms = Some(ms);
            }
            "defaults.start_slide" => {
                if value.is_empty() || value == "0" {
                    anyhow::bail!(
                        "Invalid start_slide: {value}. Must be a slide number (from 1) or a slide id."
                    );
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .start_slide = Some(value.to_string());
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: defaults.theme, defaults.transition, defaults.skip_intro, defaults.auto_advance_ms, defaults.start_slide"
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.theme(), "dark");
        assert_eq!(config.transition(), "slide");
        assert!(!config.skip_intro());
        assert_eq!(config.auto_advance(), AutoAdvancePolicy::PerSlide);
        assert_eq!(config.start_slide(), None);
    }

    #[test]
    fn test_set_valid_values() {
        let mut config = Config::default();
        config.set("defaults.theme", "light").unwrap();
        config.set("defaults.transition", "fade").unwrap();
        config.set("defaults.skip_intro", "yes").unwrap();
        config.set("defaults.auto_advance_ms", "0").unwrap();
        config.set("defaults.start_slide", "architecture").unwrap();
        assert_eq!(config.theme(), "light");
        assert_eq!(config.transition(), "fade");
        assert!(config.skip_intro());
        assert_eq!(config.auto_advance(), AutoAdvancePolicy::Disabled);
        assert_eq!(config.start_slide().as_deref(), Some("architecture"));
    }

    #[test]
    fn test_set_rejects_invalid_values() {
        let mut config = Config::default();
        assert!(config.set("defaults.theme", "neon").is_err());
        assert!(config.set("defaults.transition", "spatial").is_err());
        assert!(config.set("defaults.skip_intro", "maybe").is_err());
        assert!(config.set("defaults.auto_advance_ms", "-5").is_err());
        assert!(config.set("defaults.start_slide", "0").is_err());
        assert!(config.set("ai.provider", "claude").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_auto_advance_policy() {
        let five = Some(Duration::from_secs(5));
        assert_eq!(AutoAdvancePolicy::PerSlide.delay_for(five), five);
        assert_eq!(AutoAdvancePolicy::PerSlide.delay_for(None), None);
        let fixed = AutoAdvancePolicy::Fixed(Duration::from_secs(2));
        assert_eq!(fixed.delay_for(five), Some(Duration::from_secs(2)));
        assert_eq!(fixed.delay_for(None), None);
        assert_eq!(AutoAdvancePolicy::Disabled.delay_for(five), None);
    }

    #[test]
    fn test_yaml_round_trip_through_file() {
        let dir = std::env::temp_dir().join(format!("ayodeck-config-{}", std::process::id()));
        let path = dir.join(FILENAME);
        let mut config = Config::default();
        config.set("defaults.auto_advance_ms", "7500").unwrap();
        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.auto_advance(),
            AutoAdvancePolicy::Fixed(Duration::from_millis(7500))
        );
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_partial_yaml() {
        let config: Config = serde_yaml::from_str("defaults:\n  theme: light\n").unwrap();
        assert_eq!(config.theme(), "light");
        assert!(!config.skip_intro());
    }
}
