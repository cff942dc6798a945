//! Customer action platforms and their target URL policies

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::catalog::{normalize_code, ParseCodeError};

static GOOGLE_REVIEW_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^https://(www\.)?(google\.(com|fr|de|es|it|nl|be|ch|ca|au)|maps\.google\.(com|fr|de|es|it|nl|be|ch|ca|au))/.*$",
    )
    .expect("google review pattern is valid")
});

static INSTAGRAM_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://(www\.)?instagram\.com/[a-zA-Z0-9._]+/?$")
        .expect("instagram pattern is valid")
});

static FACEBOOK_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://(www\.)?(facebook\.com|fb\.com)/[a-zA-Z0-9._-]+/?$")
        .expect("facebook pattern is valid")
});

static TIKTOK_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://(www\.)?tiktok\.com/@[a-zA-Z0-9._]+/?$")
        .expect("tiktok pattern is valid")
});

/// Engagement step a customer completes before playing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    #[default]
    GoogleReview,
    Instagram,
    Facebook,
    Tiktok,
}

impl ActionType {
    pub const ALL: [ActionType; 4] = [Self::GoogleReview, Self::Instagram, Self::Facebook, Self::Tiktok];

    pub fn code(&self) -> &'static str {
        match self {
            Self::GoogleReview => "GOOGLE_REVIEW",
            Self::Instagram => "INSTAGRAM",
            Self::Facebook => "FACEBOOK",
            Self::Tiktok => "TIKTOK",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::GoogleReview => "Avis Google",
            Self::Instagram => "Instagram",
            Self::Facebook => "Facebook",
            Self::Tiktok => "TikTok",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::GoogleReview => "⭐",
            Self::Instagram => "📷",
            Self::Facebook => "📘",
            Self::Tiktok => "🎵",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::GoogleReview => "Demander un avis Google",
            Self::Instagram => "Action Instagram (like, follow, story)",
            Self::Facebook => "Action Facebook (like, partage)",
            Self::Tiktok => "Action TikTok (follow, like)",
        }
    }

    /// Every current platform needs a target URL
    pub fn requires_target(&self) -> bool {
        true
    }

    pub fn target_placeholder(&self) -> &'static str {
        match self {
            Self::GoogleReview => "https://google.com/business/...",
            Self::Instagram => "https://instagram.com/votre_compte",
            Self::Facebook => "https://facebook.com/votre_page",
            Self::Tiktok => "https://tiktok.com/@votre_compte",
        }
    }

    /// Field-level message naming the expected URL shape
    pub fn target_error(&self) -> &'static str {
        match self {
            Self::GoogleReview => {
                "Veuillez saisir une URL Google valide (google.com ou maps.google.com)"
            }
            Self::Instagram => {
                "Veuillez saisir une URL Instagram valide (instagram.com/nom_utilisateur)"
            }
            Self::Facebook => "Veuillez saisir une URL Facebook valide (facebook.com/nom_page)",
            Self::Tiktok => "Veuillez saisir une URL TikTok valide (tiktok.com/@nom_utilisateur)",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            Self::GoogleReview => &*GOOGLE_REVIEW_URL,
            Self::Instagram => &*INSTAGRAM_URL,
            Self::Facebook => &*FACEBOOK_URL,
            Self::Tiktok => &*TIKTOK_URL,
        }
    }

    pub fn validate_target(&self, target: &str) -> bool {
        if target.trim().is_empty() {
            return !self.requires_target();
        }
        self.pattern().is_match(target)
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ActionType {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_code(s).as_str() {
            "GOOGLE_REVIEW" | "GOOGLE" => Ok(Self::GoogleReview),
            "INSTAGRAM" => Ok(Self::Instagram),
            "FACEBOOK" => Ok(Self::Facebook),
            "TIKTOK" => Ok(Self::Tiktok),
            _ => Err(ParseCodeError::new("action type", s)),
        }
    }
}

/// `validate(target, type) -> bool`, usable without an action list
pub fn validate_target(target: &str, action_type: ActionType) -> bool {
    action_type.validate_target(target)
}
