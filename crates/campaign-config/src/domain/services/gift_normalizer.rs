//! Gift-Set Normalizer
//!
//! Keeps the gift list consistent with the "100% winning" flag:
//!
//! - not all winning: exactly one LOSS slot, appended when missing
//! - all winning: no LOSS slot, and at least one unlimited gift. When none is
//!   left after removing the loss slot, the first gift becomes unlimited.
//!
//! Both steps run in one pass over an owned list, so the unlimited check
//! always sees the list after the LOSS removal.

use crate::domain::entities::Gift;
use crate::domain::value_objects::{EntityId, StockLimit};
use crate::error::CampaignError;

/// Outcome of a normalization pass
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NormalizedGifts {
    pub gifts: Vec<Gift>,
    /// Id of the loss slot appended by this pass
    pub loss_inserted: Option<EntityId>,
    /// Number of LOSS entries dropped
    pub loss_removed: usize,
    /// Gift made unlimited to keep a 100%-winning game playable
    pub coerced_unlimited: Option<EntityId>,
    /// The loss slot's fixed fields had drifted and were restored
    pub loss_repinned: bool,
}

impl NormalizedGifts {
    pub fn is_unchanged(&self) -> bool {
        self.loss_inserted.is_none()
            && self.loss_removed == 0
            && self.coerced_unlimited.is_none()
            && !self.loss_repinned
    }
}

/// Gift list rules
pub struct GiftSetNormalizer;

impl GiftSetNormalizer {
    /// Re-derive the gift list for the given win-rate flag
    pub fn normalize(gifts: &[Gift], win_rate: bool) -> NormalizedGifts {
        let mut out = NormalizedGifts { gifts: gifts.to_vec(), ..Default::default() };

        if win_rate {
            let before = out.gifts.len();
            out.gifts.retain(|g| !g.is_loss());
            out.loss_removed = before - out.gifts.len();

            if !out.gifts.iter().any(Gift::is_unlimited) {
                if let Some(first) = out.gifts.first_mut() {
                    first.set_limit(StockLimit::Unlimited);
                    out.coerced_unlimited = Some(first.id.clone());
                }
            }
        } else {
            let mut seen_loss = false;
            let before = out.gifts.len();
            out.gifts.retain(|g| {
                if !g.is_loss() {
                    return true;
                }
                let keep = !seen_loss;
                seen_loss = true;
                keep
            });
            out.loss_removed = before - out.gifts.len();

            match out.gifts.iter_mut().find(|g| g.is_loss()) {
                Some(loss) => out.loss_repinned = loss.pin_loss_fields(),
                None => {
                    let loss = Gift::loss_slot();
                    out.loss_inserted = Some(loss.id.clone());
                    out.gifts.push(loss);
                }
            }
        }

        out
    }

    /// Number of regular gifts with unlimited stock
    pub fn unlimited_count(gifts: &[Gift]) -> usize {
        gifts.iter().filter(|g| !g.is_loss() && g.is_unlimited()).count()
    }

    /// Whether the gift at `index` may be removed
    pub fn check_removal(gifts: &[Gift], index: usize, win_rate: bool) -> Result<(), CampaignError> {
        let gift = gifts.get(index).ok_or(CampaignError::GiftNotFound(index))?;

        if gift.is_loss() {
            return Err(CampaignError::LossGiftLocked);
        }

        if win_rate && gift.is_unlimited() && Self::unlimited_count(gifts) <= 1 {
            return Err(CampaignError::UnlimitedGiftRequired);
        }

        Ok(())
    }

    /// Whether the gift at `index` may take `limit`
    pub fn check_limit_change(
        gifts: &[Gift],
        index: usize,
        limit: StockLimit,
        win_rate: bool,
    ) -> Result<(), CampaignError> {
        let gift = gifts.get(index).ok_or(CampaignError::GiftNotFound(index))?;

        if gift.is_loss() {
            return Err(CampaignError::LossGiftLocked);
        }

        if win_rate && gift.is_unlimited() && !limit.is_unlimited() && Self::unlimited_count(gifts) <= 1 {
            return Err(CampaignError::UnlimitedGiftRequired);
        }

        Ok(())
    }
}
