//! Config commands

use campaign_config::{ConditionPrecedence, Profile};

use crate::config::Config;
use crate::output::OutputFormat;
use crate::ConfigCommands;

pub async fn handle(action: ConfigCommands, name: Option<&str>) -> Result<(), String> {
    match action {
        ConfigCommands::Init => {
            let config = Config {
                profile: Some(Profile::default().to_string()),
                precedence: Some("min_purchase_first".to_string()),
                default_format: Some("table".to_string()),
                editor: None,
            };
            let path = config.save(name)?;
            println!("Configuration initialized at {}", path.display());
        }
        ConfigCommands::Set { key, value } => {
            validate(&key, &value)?;
            let mut config = Config::load(name).unwrap_or_default();
            config.set(&key, value)?;
            config.save(name)?;
            println!("Set {} successfully", key);
        }
        ConfigCommands::Get { key } => {
            let config = Config::load(name).unwrap_or_default();
            let value = config.get(&key)?;
            println!("{}: {}", key, value.unwrap_or("(not set)"));
        }
        ConfigCommands::List => {
            let config = Config::load(name).unwrap_or_default();
            for key in Config::KEYS {
                println!("{}: {}", key, config.get(key)?.unwrap_or("(not set)"));
            }
        }
    }
    Ok(())
}

/// Refuse values the other commands would fail to parse later
fn validate(key: &str, value: &str) -> Result<(), String> {
    match key {
        "profile" => value.parse::<Profile>().map(|_| ()).map_err(|e| e.to_string()),
        "precedence" => value.parse::<ConditionPrecedence>().map(|_| ()).map_err(|e| e.to_string()),
        "default_format" => OutputFormat::parse(value).map(|_| ()),
        _ => Ok(()),
    }
}
