//! PIN command

use campaign_config::{Campaign, CampaignEditorUseCases, ConfigurePinCommand};

use super::{editor_service, Settings};
use crate::output::PinReport;

pub async fn handle(pin: String, confirmation: String, settings: &Settings) -> Result<(), String> {
    let service = editor_service(Campaign::default_for(settings.profile), settings);

    service
        .configure_pin(ConfigurePinCommand { pin, confirmation })
        .await
        .map_err(|e| e.advisory().map(str::to_string).unwrap_or_else(|| e.to_string()))?;

    settings.format.print(&PinReport {
        configured: true,
        campaign_id: service.snapshot().id,
    });
    Ok(())
}
