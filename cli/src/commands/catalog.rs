//! Catalog and target validation commands

use campaign_config::{ActionType, GameType, GiftType};

use super::Settings;
use crate::output::{CatalogEntry, TargetCheck};

pub fn validate_target(action_type: &str, target: &str, settings: &Settings) -> Result<(), String> {
    let action_type = action_type.parse::<ActionType>().map_err(|e| e.to_string())?;
    let valid = action_type.validate_target(target);

    settings.format.print(&TargetCheck {
        action_type: action_type.to_string(),
        target: target.to_string(),
        valid,
        message: (!valid).then(|| action_type.target_error()),
    });

    if valid {
        Ok(())
    } else {
        Err(format!("invalid {} target", action_type))
    }
}

pub fn list(settings: &Settings) -> Result<(), String> {
    let mut entries = Vec::new();

    for game in GameType::ALL {
        let notes = if settings.profile.allows_game(game) {
            game.accent_color().to_string()
        } else {
            format!("{} (Premium)", game.accent_color())
        };
        entries.push(CatalogEntry {
            kind: "game",
            code: game.code(),
            icon: game.icon(),
            label: game.label(),
            notes,
        });
    }

    for action in ActionType::ALL {
        entries.push(CatalogEntry {
            kind: "action",
            code: action.code(),
            icon: action.icon(),
            label: action.label(),
            notes: action.target_placeholder().to_string(),
        });
    }

    for gift in GiftType::ALL.into_iter().filter(|g| !g.is_loss()) {
        entries.push(CatalogEntry {
            kind: "gift",
            code: gift.code(),
            icon: "",
            label: gift.label(),
            notes: String::new(),
        });
    }

    settings.format.print(&entries);
    Ok(())
}
