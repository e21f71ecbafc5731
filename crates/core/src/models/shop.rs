//! Shop catalog entries and the reward ledger

use crate::types::ItemCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One purchasable entry in the shop catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopItem {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: u32,
    pub category: ItemCategory,
    /// Emoji shown next to the item in listings
    pub icon: String,
    /// Present only for theme-granting cosmetics
    #[serde(default)]
    pub theme_id: Option<String>,
}

/// Spendable currency balance and ownership record backing the shop
///
/// Balance is unsigned and only debited through validated purchases, so
/// it cannot go negative. Ownership is monotonic: items are never
/// revoked in normal operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardLedger {
    pub balance: u32,
    pub owned_items: BTreeSet<u32>,
    pub unlocked_themes: BTreeSet<String>,
}

impl RewardLedger {
    pub fn with_balance(balance: u32) -> Self {
        Self {
            balance,
            ..Default::default()
        }
    }

    pub fn owns(&self, item_id: u32) -> bool {
        self.owned_items.contains(&item_id)
    }

    pub fn is_theme_unlocked(&self, theme_id: &str) -> bool {
        self.unlocked_themes.contains(theme_id)
    }
}
