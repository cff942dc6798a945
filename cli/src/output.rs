//! Output formatting

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use campaign_config::{Action, ActionList, Advisory, CampaignSnapshot, Condition, Gift};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

/// Human-readable rendering used by the table format
pub trait TableView {
    fn render(&self) -> String;
}

impl OutputFormat {
    pub fn parse(raw: &str) -> Result<Self, String> {
        <Self as ValueEnum>::from_str(raw, true).map_err(|_| format!("Unknown output format: {}", raw))
    }

    pub fn print<T: Serialize + TableView>(&self, data: &T) {
        match self {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(data).unwrap_or_default());
            }
            OutputFormat::Yaml => {
                println!("{}", serde_yaml::to_string(data).unwrap_or_default());
            }
            OutputFormat::Table => {
                println!("{}", data.render());
            }
        }
    }
}

// =============================================================================
// Campaign report
// =============================================================================

#[derive(Serialize)]
pub struct AdvisoryView {
    pub code: Advisory,
    pub message: &'static str,
}

impl From<Advisory> for AdvisoryView {
    fn from(code: Advisory) -> Self {
        Self { code, message: code.message() }
    }
}

/// Edit refused while simulating with --keep-going
#[derive(Serialize)]
pub struct RejectionView {
    pub command: String,
    pub error: String,
    pub advisory: Option<&'static str>,
}

#[derive(Serialize)]
pub struct CampaignReport {
    pub campaign: CampaignSnapshot,
    pub consistent: bool,
    pub advisories: Vec<AdvisoryView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rejections: Vec<RejectionView>,
}

#[derive(Tabled)]
struct ActionRow {
    #[tabled(rename = "#")]
    priority: u8,
    #[tabled(rename = "Order")]
    order: &'static str,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Valid")]
    valid: &'static str,
}

impl ActionRow {
    fn new(index: usize, action: &Action) -> Self {
        Self {
            priority: action.priority,
            order: ActionList::order_label(index),
            kind: format!("{} {}", action.action_type.icon(), action.action_type.label()),
            target: action.target.clone(),
            valid: if action.is_target_valid() { "yes" } else { "no" },
        }
    }
}

#[derive(Tabled)]
struct GiftRow {
    #[tabled(rename = "")]
    icon: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: &'static str,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Initial")]
    initial_limit: String,
}

impl From<&Gift> for GiftRow {
    fn from(gift: &Gift) -> Self {
        Self {
            icon: gift.icon.clone(),
            name: gift.display_name().to_string(),
            kind: gift.gift_type.label(),
            limit: gift.limit.to_string(),
            initial_limit: gift.initial_limit.to_string(),
        }
    }
}

#[derive(Tabled)]
struct ConditionRow {
    #[tabled(rename = "Gift")]
    name: String,
    #[tabled(rename = "Condition")]
    value: String,
}

impl From<&Condition> for ConditionRow {
    fn from(condition: &Condition) -> Self {
        Self { name: condition.name.clone(), value: condition.value.clone() }
    }
}

fn table<R: Tabled>(rows: Vec<R>) -> String {
    if rows.is_empty() {
        return "  (none)".dimmed().to_string();
    }
    Table::new(rows).with(Style::rounded()).to_string()
}

fn on_off(value: bool) -> colored::ColoredString {
    if value { "on".green() } else { "off".dimmed() }
}

impl TableView for CampaignReport {
    fn render(&self) -> String {
        let c = &self.campaign;
        let config = &c.configuration;
        let policy = &config.policy;
        let mut out = Vec::new();

        out.push(format!("{} {}", c.label.bold(), format!("({})", c.id).dimmed()));
        out.push(format!(
            "Profile: {}   Place: {}   Game: {} {}   Colors: {} / {}",
            c.profile,
            c.place_id,
            config.game_type.icon(),
            config.game_type.label(),
            config.colors.primary,
            config.colors.secondary,
        ));
        out.push(format!(
            "100% gagnant: {}   Pour tous les gains: {}   Achat minimum: {} ({}€)   Precedence: {:?}",
            on_off(policy.win_rate),
            on_off(policy.all_conditions),
            on_off(policy.min_purchase),
            policy.amount_label(),
            policy.precedence,
        ));

        out.push(String::new());
        out.push("Actions".bold().to_string());
        out.push(table(config.actions.iter().enumerate().map(|(i, a)| ActionRow::new(i, a)).collect()));

        out.push(String::new());
        out.push("Gains".bold().to_string());
        out.push(table(config.gifts.iter().map(GiftRow::from).collect()));

        out.push(String::new());
        out.push("Conditions de récupération".bold().to_string());
        out.push(table(config.retrieval_conditions.iter().map(ConditionRow::from).collect()));

        if !self.consistent {
            out.push(String::new());
            out.push("Configuration is not consistent".red().bold().to_string());
        }

        for rejection in &self.rejections {
            let reason = match rejection.advisory {
                Some(advisory) => advisory,
                None => rejection.error.as_str(),
            };
            out.push(format!("{} {}: {}", "✗".red(), rejection.command, reason));
        }

        for advisory in &self.advisories {
            out.push(format!("{} {}", "⚠".yellow(), advisory.message.yellow()));
        }

        out.join("\n")
    }
}

// =============================================================================
// Catalog and checks
// =============================================================================

#[derive(Serialize, Tabled)]
pub struct CatalogEntry {
    #[tabled(rename = "Kind")]
    pub kind: &'static str,
    #[tabled(rename = "Code")]
    pub code: &'static str,
    #[tabled(rename = "")]
    pub icon: &'static str,
    #[tabled(rename = "Label")]
    pub label: &'static str,
    #[tabled(rename = "Notes")]
    pub notes: String,
}

impl TableView for Vec<CatalogEntry> {
    fn render(&self) -> String {
        Table::new(self).with(Style::rounded()).to_string()
    }
}

#[derive(Serialize)]
pub struct TargetCheck {
    pub action_type: String,
    pub target: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl TableView for TargetCheck {
    fn render(&self) -> String {
        match self.message {
            None => format!("{} {} target is valid", "✓".green(), self.action_type),
            Some(message) => format!("{} {}", "✗".red(), message),
        }
    }
}

#[derive(Serialize)]
pub struct PinReport {
    pub configured: bool,
    pub campaign_id: String,
}

impl TableView for PinReport {
    fn render(&self) -> String {
        format!("{} PIN configured for campaign {}", "✓".green(), self.campaign_id)
    }
}
