//! CLI Commands

pub mod campaign;
pub mod catalog;
pub mod config;
pub mod pin;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use campaign_config::infrastructure::{TracingEventPublisher, TracingPinHandler, TracingSubmissionHandler};
use campaign_config::{
    ActionType, Campaign, CampaignEditorService, ConditionPrecedence, GiftDraft, GiftType, Profile,
    StockLimit,
};

use crate::config::Config;
use crate::output::OutputFormat;
use crate::Cli;

/// Flags merged over the config file
pub struct Settings {
    pub format: OutputFormat,
    pub profile: Profile,
    pub precedence: ConditionPrecedence,
    pub editor: String,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self, String> {
        let format = match (cli.format, config.default_format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(raw)) => OutputFormat::parse(raw)?,
            (None, None) => OutputFormat::Table,
        };

        let profile = match cli.profile.as_deref().or(config.profile.as_deref()) {
            Some(raw) => raw.parse::<Profile>().map_err(|e| e.to_string())?,
            None => Profile::default(),
        };

        let precedence = match cli.precedence.as_deref().or(config.precedence.as_deref()) {
            Some(raw) => raw.parse::<ConditionPrecedence>().map_err(|e| e.to_string())?,
            None => ConditionPrecedence::default(),
        };

        Ok(Self {
            format,
            profile,
            precedence,
            editor: config.editor.clone().unwrap_or_else(|| "user".to_string()),
        })
    }
}

/// Editor service over `campaign`, wired to the logging adapters
pub fn editor_service(campaign: Campaign, settings: &Settings) -> CampaignEditorService {
    CampaignEditorService::new(
        campaign,
        Arc::new(TracingSubmissionHandler),
        Arc::new(TracingPinHandler),
        Arc::new(TracingEventPublisher),
    )
    .with_editor(settings.editor.clone())
}

/// Read a JSON or YAML document, picked by file extension
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    if is_yaml {
        serde_yaml::from_str(&content).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    }
}

/// `unlimited`, `illimité` or `-1` for unlimited stock, otherwise a count
pub fn parse_limit(raw: &str) -> Result<StockLimit, String> {
    match raw.trim().to_lowercase().as_str() {
        "unlimited" | "illimité" | "illimite" | "-1" => Ok(StockLimit::Unlimited),
        n => n
            .parse::<u32>()
            .map(StockLimit::Finite)
            .map_err(|_| format!("Invalid limit: {}", raw)),
    }
}

/// `NAME[:TYPE[:LIMIT]]`, type defaults to EAT and limit to 1
pub fn parse_gift(raw: &str) -> Result<GiftDraft, String> {
    let mut parts = raw.splitn(3, ':');
    let name = parts.next().unwrap_or_default().trim();

    let gift_type = match parts.next().map(str::trim).filter(|s| !s.is_empty()) {
        Some(code) => code.parse::<GiftType>().map_err(|e| e.to_string())?,
        None => GiftType::Eat,
    };
    let limit = match parts.next().map(str::trim).filter(|s| !s.is_empty()) {
        Some(limit) => parse_limit(limit)?,
        None => StockLimit::Finite(1),
    };

    Ok(GiftDraft::named(name, gift_type, limit))
}

/// `TYPE=URL`
pub fn parse_action(raw: &str) -> Result<(ActionType, String), String> {
    let (code, target) = raw
        .split_once('=')
        .ok_or_else(|| format!("Expected TYPE=URL, got {}", raw))?;
    let action_type = code.parse::<ActionType>().map_err(|e| e.to_string())?;
    Ok((action_type, target.trim().to_string()))
}

/// `PRIMARY,SECONDARY`
pub fn parse_colors(raw: &str) -> Result<(String, String), String> {
    let (primary, secondary) = raw
        .split_once(',')
        .ok_or_else(|| format!("Expected PRIMARY,SECONDARY, got {}", raw))?;
    Ok((primary.trim().to_string(), secondary.trim().to_string()))
}
