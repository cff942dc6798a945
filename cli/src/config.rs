//! CLI Configuration

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// premium or basic
    pub profile: Option<String>,
    pub precedence: Option<String>,
    pub default_format: Option<String>,
    /// Recorded as created_by / updated_by
    pub editor: Option<String>,
}

impl Config {
    pub const KEYS: [&'static str; 4] = ["profile", "precedence", "default_format", "editor"];

    pub fn load(name: Option<&str>) -> Result<Self, String> {
        let path = Self::config_path(name)?;
        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| e.to_string())?;
            toml::from_str(&content).map_err(|e| e.to_string())
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, name: Option<&str>) -> Result<PathBuf, String> {
        let path = Self::config_path(name)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(&path, content).map_err(|e| e.to_string())?;
        Ok(path)
    }

    pub fn get(&self, key: &str) -> Result<Option<&str>, String> {
        let value = match key {
            "profile" => &self.profile,
            "precedence" => &self.precedence,
            "default_format" => &self.default_format,
            "editor" => &self.editor,
            _ => return Err(format!("Unknown config key: {}", key)),
        };
        Ok(value.as_deref())
    }

    pub fn set(&mut self, key: &str, value: String) -> Result<(), String> {
        let slot = match key {
            "profile" => &mut self.profile,
            "precedence" => &mut self.precedence,
            "default_format" => &mut self.default_format,
            "editor" => &mut self.editor,
            _ => return Err(format!("Unknown config key: {}", key)),
        };
        *slot = Some(value);
        Ok(())
    }

    fn config_path(name: Option<&str>) -> Result<PathBuf, String> {
        let home = dirs::home_dir().ok_or("Cannot find home directory")?;
        let filename = match name {
            Some(n) => format!("config.{}.toml", n),
            None => "config.toml".to_string(),
        };
        Ok(home.join(".campaign").join(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set_known_keys() {
        let mut config = Config::default();
        config.set("profile", "basic".into()).unwrap();

        assert_eq!(config.get("profile").unwrap(), Some("basic"));
        assert_eq!(config.get("editor").unwrap(), None);
        assert!(config.set("api_key", "x".into()).is_err());
    }

    #[test]
    fn test_toml_round_trip_skips_missing_keys() {
        let config: Config = toml::from_str("precedence = \"all_conditions_first\"").unwrap();
        assert_eq!(config.precedence.as_deref(), Some("all_conditions_first"));
        assert!(config.profile.is_none());
    }
}
