//! Shop purchases against the reward ledger

use fitquest_core::{Error, Result, RewardLedger, ShopItem};
use serde::{Deserialize, Serialize};

/// Outcome of a successful purchase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseReceipt {
    pub item: ShopItem,
    pub new_balance: u32,
    /// Set when the item unlocked a cosmetic theme
    pub unlocked_theme: Option<String>,
}

/// Validate and apply a purchase.
///
/// All checks run before any mutation, so a failed purchase leaves the
/// ledger exactly as it was: the debit and the ownership grant happen
/// together or not at all.
pub fn purchase(
    catalog: &[ShopItem],
    ledger: &mut RewardLedger,
    item_id: u32,
) -> Result<PurchaseReceipt> {
    let item = catalog
        .iter()
        .find(|i| i.id == item_id)
        .ok_or(Error::ItemNotFound(item_id))?;

    if ledger.owns(item_id) {
        return Err(Error::ItemAlreadyOwned(item_id));
    }

    if ledger.balance < item.price {
        return Err(Error::InsufficientFunds {
            required: item.price,
            available: ledger.balance,
        });
    }

    ledger.balance -= item.price;
    ledger.owned_items.insert(item_id);
    if let Some(theme_id) = &item.theme_id {
        ledger.unlocked_themes.insert(theme_id.clone());
    }

    Ok(PurchaseReceipt {
        item: item.clone(),
        new_balance: ledger.balance,
        unlocked_theme: item.theme_id.clone(),
    })
}

/// Credit earned currency to the ledger
pub fn grant_currency(ledger: &mut RewardLedger, amount: u32) {
    ledger.balance += amount;
}
