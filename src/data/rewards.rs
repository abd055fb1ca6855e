//! The fixed reward catalog and the unlock-selection rule.

use bevy::prelude::*;

/// How many unlocked rewards the result screen offers at once.
pub const VISIBLE_REWARDS: usize = 3;

/// One redeemable reward, gated by a heart threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct RewardEntry {
    pub min_hearts: u32,
    pub label: String,
}

/// The static reward list, ascending by threshold. The minimum threshold is
/// 0, so any hearts count unlocks at least one entry.
#[derive(Resource, Debug, Clone, Default)]
pub struct RewardCatalog {
    pub entries: Vec<RewardEntry>,
}

impl RewardCatalog {
    /// Labels whose threshold has been reached, in catalog order, truncated
    /// to the final [`VISIBLE_REWARDS`] — i.e. the most advanced rewards the
    /// player currently qualifies for.
    pub fn unlocked(&self, hearts: u32) -> Vec<String> {
        let qualifying: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| entry.min_hearts <= hearts)
            .map(|entry| entry.label.clone())
            .collect();
        let skip = qualifying.len().saturating_sub(VISIBLE_REWARDS);
        qualifying.into_iter().skip(skip).collect()
    }
}

pub fn populate_rewards(catalog: &mut RewardCatalog) {
    let defs: [(u32, &str); 6] = [
        (0, "1 cumplido premium escrito solo para ti"),
        (14, "Mírate al espejo y sonríe"),
        (24, "Pregúntame algo que siempre hayas querido saber"),
        (34, "Algo que quieras hacer, yo te ayudo"),
        (46, "Tú eliges plan y yo me apunto"),
        (60, "Detalle sorpresa"),
    ];

    catalog.entries = defs
        .into_iter()
        .map(|(min_hearts, label)| RewardEntry {
            min_hearts,
            label: label.to_string(),
        })
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> RewardCatalog {
        let mut catalog = RewardCatalog::default();
        populate_rewards(&mut catalog);
        catalog
    }

    #[test]
    fn test_zero_hearts_unlocks_exactly_the_free_entry() {
        assert_eq!(
            catalog().unlocked(0),
            vec!["1 cumplido premium escrito solo para ti".to_string()]
        );
    }

    #[test]
    fn test_thirty_hearts_excludes_threshold_34() {
        let unlocked = catalog().unlocked(30);
        assert_eq!(
            unlocked,
            vec![
                "1 cumplido premium escrito solo para ti".to_string(),
                "Mírate al espejo y sonríe".to_string(),
                "Pregúntame algo que siempre hayas querido saber".to_string(),
            ]
        );
    }

    #[test]
    fn test_sixty_hearts_keeps_only_the_top_three() {
        let unlocked = catalog().unlocked(60);
        assert_eq!(
            unlocked,
            vec![
                "Algo que quieras hacer, yo te ayudo".to_string(),
                "Tú eliges plan y yo me apunto".to_string(),
                "Detalle sorpresa".to_string(),
            ]
        );
    }

    #[test]
    fn test_never_empty_for_any_hearts() {
        for hearts in [0, 1, 13, 14, 45, 46, 59, 60, 1000] {
            let unlocked = catalog().unlocked(hearts);
            assert!(!unlocked.is_empty(), "hearts={} gave no rewards", hearts);
            assert!(unlocked.len() <= VISIBLE_REWARDS);
        }
    }

    #[test]
    fn test_empty_catalog_gives_empty_sequence() {
        assert!(RewardCatalog::default().unlocked(100).is_empty());
    }
}
