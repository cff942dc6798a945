//! Campaign commands

use std::path::Path;

use campaign_config::{
    Advisory, Campaign, CampaignEditorService, CampaignEditorUseCases, CampaignSnapshot,
    EditCommand, GameType, Profile,
};

use super::{editor_service, load_document, parse_action, parse_colors, parse_gift, Settings};
use crate::output::{AdvisoryView, CampaignReport, RejectionView};
use crate::SimulateArgs;

pub fn new(
    label: Option<String>,
    place: Option<String>,
    created_by: Option<String>,
    settings: &Settings,
) -> Result<(), String> {
    let mut campaign = Campaign::create(
        settings.profile,
        label.unwrap_or_else(|| Campaign::DEFAULT_LABEL.to_string()),
        place.unwrap_or_else(|| Campaign::DEFAULT_PLACE.to_string()),
        created_by.unwrap_or_else(|| settings.editor.clone()),
    );
    campaign.set_precedence(settings.precedence);

    let service = editor_service(campaign, settings);
    settings.format.print(&report(&service, vec![]));
    Ok(())
}

pub fn show(file: &Path, settings: &Settings) -> Result<(), String> {
    let snapshot: CampaignSnapshot = load_document(file)?;
    let consistent = snapshot.configuration.is_consistent();

    let mut advisories: Vec<AdvisoryView> = Vec::new();
    if snapshot.configuration.policy.win_rate {
        advisories.push(Advisory::WinRateActive.into());
    }
    if snapshot.profile == Profile::Basic {
        advisories.push(Advisory::BasicProfileRestrictions.into());
    }

    settings.format.print(&CampaignReport {
        campaign: snapshot,
        consistent,
        advisories,
        rejections: vec![],
    });

    if consistent {
        Ok(())
    } else {
        Err(format!("{} is not consistent", file.display()))
    }
}

pub async fn simulate(args: SimulateArgs, settings: &Settings) -> Result<(), String> {
    let commands = build_commands(&args)?;
    tracing::debug!(edits = commands.len(), "Simulating campaign edits");

    let mut campaign = Campaign::create(
        settings.profile,
        Campaign::DEFAULT_LABEL,
        Campaign::DEFAULT_PLACE,
        settings.editor.clone(),
    );
    campaign.set_precedence(settings.precedence);
    let service = editor_service(campaign, settings);

    let mut rejections = Vec::new();
    for command in commands {
        let Err(e) = service.apply(command.clone()).await else {
            continue;
        };

        let described = serde_json::to_string(&command).unwrap_or_else(|_| format!("{:?}", command));
        if !args.keep_going {
            return Err(match e.advisory() {
                Some(advisory) => format!("{}: {}", described, advisory),
                None => format!("{}: {}", described, e),
            });
        }
        rejections.push(RejectionView {
            command: described,
            error: e.to_string(),
            advisory: e.advisory(),
        });
    }

    if args.save {
        service.save().await.map_err(|e| e.to_string())?;
    }

    settings.format.print(&report(&service, rejections));
    Ok(())
}

fn build_commands(args: &SimulateArgs) -> Result<Vec<EditCommand>, String> {
    let mut commands = Vec::new();

    for raw in &args.gifts {
        commands.push(EditCommand::AddGift { gift: parse_gift(raw)? });
    }
    for &index in &args.remove_gifts {
        commands.push(EditCommand::RemoveGift { index });
    }
    if args.all_conditions {
        commands.push(EditCommand::SetAllConditions { enabled: true });
    }
    if let Some(amount) = &args.min_purchase {
        commands.push(EditCommand::SetMinPurchaseAmount { amount: amount.clone() });
        commands.push(EditCommand::SetMinPurchase { enabled: true });
    }
    if args.win_rate {
        commands.push(EditCommand::SetWinRate { enabled: true });
    }
    for raw in &args.actions {
        let (action_type, target) = parse_action(raw)?;
        commands.push(EditCommand::AddAction { action_type, target });
    }
    if let Some(raw) = &args.game {
        let game = raw.parse::<GameType>().map_err(|e| e.to_string())?;
        commands.push(EditCommand::SelectGame { game });
    }
    if let Some(raw) = &args.colors {
        let (primary, secondary) = parse_colors(raw)?;
        commands.push(EditCommand::SetColors { primary, secondary });
    }
    if let Some(path) = &args.script {
        let script: Vec<EditCommand> = load_document(path)?;
        commands.extend(script);
    }

    Ok(commands)
}

fn report(service: &CampaignEditorService, rejections: Vec<RejectionView>) -> CampaignReport {
    let campaign = service.snapshot();
    CampaignReport {
        consistent: campaign.configuration.is_consistent(),
        campaign,
        advisories: service.current_advisories().into_iter().map(Into::into).collect(),
        rejections,
    }
}
