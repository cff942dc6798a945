//! Condition Synchronizer
//!
//! Derives one retrieval condition per gift from the gift list and the
//! global condition policy.

use crate::domain::entities::{Condition, Gift};
use crate::domain::value_objects::{ConditionPolicy, ConditionPrecedence, EntityId};

/// Retrieval condition rules
pub struct ConditionSynchronizer;

impl ConditionSynchronizer {
    /// Condition value every gift receives under `policy`
    pub fn condition_value(policy: &ConditionPolicy) -> String {
        let min_purchase = || Condition::min_purchase(policy.amount_label());

        match policy.precedence {
            ConditionPrecedence::MinPurchaseFirst => {
                if policy.min_purchase {
                    min_purchase()
                } else if policy.all_conditions {
                    Condition::ALL_GAINS.to_string()
                } else {
                    Condition::NONE.to_string()
                }
            }
            ConditionPrecedence::AllConditionsFirst => {
                if policy.all_conditions {
                    Condition::ALL_GAINS.to_string()
                } else if policy.min_purchase {
                    min_purchase()
                } else {
                    Condition::NONE.to_string()
                }
            }
        }
    }

    /// Fresh condition list, in gift order.
    ///
    /// Ids are taken over from existing conditions with the same name. Each
    /// existing condition lends its id once so duplicate gift names still
    /// end up with distinct ids.
    pub fn derive(gifts: &[Gift], existing: &[Condition], policy: &ConditionPolicy) -> Vec<Condition> {
        let value = Self::condition_value(policy);
        let mut taken = vec![false; existing.len()];

        gifts
            .iter()
            .map(|gift| {
                let name = gift.display_name();
                let reused = existing
                    .iter()
                    .enumerate()
                    .find(|(i, c)| !taken[*i] && c.name == name)
                    .map(|(i, c)| {
                        taken[i] = true;
                        c.id.clone()
                    });

                Condition {
                    id: reused.unwrap_or_else(EntityId::new),
                    name: name.to_string(),
                    value: value.clone(),
                }
            })
            .collect()
    }

    /// Whether `derived` differs from `existing` by length or any
    /// positional name/value pair. Ids are not compared.
    pub fn has_changed(derived: &[Condition], existing: &[Condition]) -> bool {
        derived.len() != existing.len()
            || derived
                .iter()
                .zip(existing)
                .any(|(d, e)| d.name != e.name || d.value != e.value)
    }

    /// New condition list, or `None` when the current one already matches
    pub fn synchronize(
        gifts: &[Gift],
        existing: &[Condition],
        policy: &ConditionPolicy,
    ) -> Option<Vec<Condition>> {
        let derived = Self::derive(gifts, existing, policy);
        Self::has_changed(&derived, existing).then_some(derived)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::GiftDraft;
    use crate::domain::value_objects::{GiftType, StockLimit};

    fn gift(name: &str) -> Gift {
        GiftDraft::named(name, GiftType::Eat, StockLimit::Finite(5)).into_gift()
    }

    #[test]
    fn test_value_precedence() {
        let mut policy = ConditionPolicy::default();
        assert_eq!(ConditionSynchronizer::condition_value(&policy), "Aucune");

        policy.all_conditions = true;
        assert_eq!(ConditionSynchronizer::condition_value(&policy), "Pour tous les gains");

        policy.min_purchase = true;
        policy.min_purchase_amount = "10".into();
        assert_eq!(ConditionSynchronizer::condition_value(&policy), "Achat minimum de 10€");

        policy.precedence = ConditionPrecedence::AllConditionsFirst;
        assert_eq!(ConditionSynchronizer::condition_value(&policy), "Pour tous les gains");

        policy.all_conditions = false;
        assert_eq!(ConditionSynchronizer::condition_value(&policy), "Achat minimum de 10€");
    }

    #[test]
    fn test_empty_amount_renders_zero() {
        let policy = ConditionPolicy { min_purchase: true, ..Default::default() };
        assert_eq!(ConditionSynchronizer::condition_value(&policy), "Achat minimum de 0€");
    }

    #[test]
    fn test_min_purchase_applies_to_every_gift() {
        let gifts = vec![gift("Frite"), gift("Boisson"), Gift::loss_slot()];
        let policy = ConditionPolicy {
            min_purchase: true,
            min_purchase_amount: "10".into(),
            ..Default::default()
        };

        let conditions = ConditionSynchronizer::derive(&gifts, &[], &policy);

        let names: Vec<_> = conditions.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Frite", "Boisson", "Perte"]);
        assert!(conditions.iter().all(|c| c.value == "Achat minimum de 10€"));
    }

    #[test]
    fn test_existing_ids_are_preserved_by_name() {
        let gifts = vec![gift("Frite"), gift("Boisson")];
        let existing = vec![Condition::new("Boisson", "Aucune"), Condition::new("Frite", "Aucune")];

        let derived = ConditionSynchronizer::derive(&gifts, &existing, &ConditionPolicy::default());

        assert_eq!(derived[0].id, existing[1].id);
        assert_eq!(derived[1].id, existing[0].id);
    }

    #[test]
    fn test_duplicate_names_get_distinct_ids() {
        let gifts = vec![gift("Frite"), gift("Frite")];
        let existing = vec![Condition::new("Frite", "Aucune")];

        let derived = ConditionSynchronizer::derive(&gifts, &existing, &ConditionPolicy::default());

        assert_eq!(derived[0].id, existing[0].id);
        assert_ne!(derived[1].id, derived[0].id);
    }

    #[test]
    fn test_orphans_dropped_and_new_gifts_covered() {
        let gifts = vec![gift("Boisson")];
        let existing = vec![Condition::new("Frite", "Aucune")];

        let synced =
            ConditionSynchronizer::synchronize(&gifts, &existing, &ConditionPolicy::default())
                .unwrap();

        assert_eq!(synced.len(), 1);
        assert_eq!(synced[0].name, "Boisson");
        assert_ne!(synced[0].id, existing[0].id);
    }

    #[test]
    fn test_unnamed_gift_uses_type_code() {
        let gifts = vec![GiftDraft::default().into_gift()];
        let derived = ConditionSynchronizer::derive(&gifts, &[], &ConditionPolicy::default());
        assert_eq!(derived[0].name, "EAT");
    }

    #[test]
    fn test_identical_output_is_not_replaced() {
        let gifts = vec![gift("Frite")];
        let policy = ConditionPolicy::default();
        let current = ConditionSynchronizer::derive(&gifts, &[], &policy);

        assert_eq!(ConditionSynchronizer::synchronize(&gifts, &current, &policy), None);
    }

    #[test]
    fn test_value_change_triggers_replacement() {
        let gifts = vec![gift("Frite")];
        let current = ConditionSynchronizer::derive(&gifts, &[], &ConditionPolicy::default());
        let policy = ConditionPolicy { all_conditions: true, ..Default::default() };

        let synced = ConditionSynchronizer::synchronize(&gifts, &current, &policy).unwrap();

        assert_eq!(synced[0].value, "Pour tous les gains");
        assert_eq!(synced[0].id, current[0].id);
    }
}
