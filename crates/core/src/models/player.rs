//! Player profile, stat block, and the flat persistence snapshot

use crate::models::{LevelProgress, RewardLedger, BASE_XP_TO_NEXT_LEVEL};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Starting value for each of the three stats
pub const BASE_STAT: u32 = 10;

/// The three trainable stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatBlock {
    pub strength: u32,
    pub agility: u32,
    pub stamina: u32,
}

impl Default for StatBlock {
    fn default() -> Self {
        Self {
            strength: BASE_STAT,
            agility: BASE_STAT,
            stamina: BASE_STAT,
        }
    }
}

impl StatBlock {
    pub fn add(&mut self, kind: crate::types::StatKind, points: u32) {
        match kind {
            crate::types::StatKind::Strength => self.strength += points,
            crate::types::StatKind::Agility => self.agility += points,
            crate::types::StatKind::Stamina => self.stamina += points,
        }
    }
}

/// In-memory player profile (internal representation)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub name: String,
    pub email: String,
    pub progress: LevelProgress,
    pub stats: StatBlock,
}

/// Flat persisted record for one actor: everything the local store keeps
///
/// This is the unit the persistence collaborator loads and saves, and the
/// shape remote refreshes are merged into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub actor_id: String,
    pub name: String,
    pub email: String,
    pub level: u32,
    pub current_xp: u32,
    pub xp_to_next_level: u32,
    pub strength: u32,
    pub agility: u32,
    pub stamina: u32,
    pub streak_days: u32,
    pub balance: u32,
    pub owned_items: BTreeSet<u32>,
    pub unlocked_themes: BTreeSet<String>,
    pub active_theme: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PlayerSnapshot {
    /// Fresh snapshot for a new actor with default progression and stats
    pub fn new(actor_id: impl Into<String>, name: impl Into<String>) -> Self {
        let profile = PlayerProfile::default();
        Self {
            actor_id: actor_id.into(),
            name: name.into(),
            email: String::new(),
            level: profile.progress.level,
            current_xp: profile.progress.current_xp,
            xp_to_next_level: profile.progress.xp_to_next_level,
            strength: profile.stats.strength,
            agility: profile.stats.agility,
            stamina: profile.stats.stamina,
            streak_days: 0,
            balance: 0,
            owned_items: BTreeSet::new(),
            unlocked_themes: BTreeSet::new(),
            active_theme: "default".to_string(),
            updated_at: None,
        }
    }

    pub fn profile(&self) -> PlayerProfile {
        PlayerProfile {
            name: self.name.clone(),
            email: self.email.clone(),
            progress: LevelProgress {
                level: self.level,
                current_xp: self.current_xp,
                xp_to_next_level: self.xp_to_next_level,
            },
            stats: StatBlock {
                strength: self.strength,
                agility: self.agility,
                stamina: self.stamina,
            },
        }
    }

    pub fn ledger(&self) -> RewardLedger {
        RewardLedger {
            balance: self.balance,
            owned_items: self.owned_items.clone(),
            unlocked_themes: self.unlocked_themes.clone(),
        }
    }

    pub fn apply_profile(&mut self, profile: &PlayerProfile) {
        self.name = profile.name.clone();
        self.email = profile.email.clone();
        self.level = profile.progress.level;
        self.current_xp = profile.progress.current_xp;
        self.xp_to_next_level = profile.progress.xp_to_next_level;
        self.strength = profile.stats.strength;
        self.agility = profile.stats.agility;
        self.stamina = profile.stats.stamina;
    }

    pub fn apply_ledger(&mut self, ledger: &RewardLedger) {
        self.balance = ledger.balance;
        self.owned_items = ledger.owned_items.clone();
        self.unlocked_themes = ledger.unlocked_themes.clone();
    }
}

/// Profile document held by the remote store
///
/// Carries only the fields the remote tracks; everything else in the
/// snapshot (streak, balance, ownership, theme) stays local-only and is
/// preserved across a refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteProfile {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub xp: u32,
    #[serde(default = "default_stat")]
    pub strength: u32,
    #[serde(default = "default_stat")]
    pub agility: u32,
    #[serde(default = "default_stat")]
    pub stamina: u32,
}

fn default_level() -> u32 {
    1
}

fn default_stat() -> u32 {
    BASE_STAT
}

impl RemoteProfile {
    pub fn from_snapshot(snapshot: &PlayerSnapshot) -> Self {
        Self {
            name: snapshot.name.clone(),
            email: snapshot.email.clone(),
            level: snapshot.level,
            xp: snapshot.current_xp,
            strength: snapshot.strength,
            agility: snapshot.agility,
            stamina: snapshot.stamina,
        }
    }

    /// Merge the remote fields into a local snapshot, recomputing the
    /// level threshold from the remote level
    pub fn apply_to(&self, snapshot: &mut PlayerSnapshot) {
        snapshot.name = self.name.clone();
        snapshot.email = self.email.clone();
        snapshot.level = self.level;
        snapshot.current_xp = self.xp;
        snapshot.xp_to_next_level = xp_threshold_for_level(self.level);
        snapshot.strength = self.strength;
        snapshot.agility = self.agility;
        snapshot.stamina = self.stamina;
    }
}

/// XP threshold in effect at a given level (100 at level 1, ×1.5 floored
/// per level after that)
pub fn xp_threshold_for_level(level: u32) -> u32 {
    let mut threshold = BASE_XP_TO_NEXT_LEVEL;
    for _ in 1..level.max(1) {
        threshold = (threshold as f64 * 1.5) as u32;
    }
    threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_curve() {
        assert_eq!(xp_threshold_for_level(1), 100);
        assert_eq!(xp_threshold_for_level(2), 150);
        assert_eq!(xp_threshold_for_level(3), 225);
        assert_eq!(xp_threshold_for_level(4), 337);
    }

    #[test]
    fn test_remote_refresh_preserves_local_fields() {
        let mut snapshot = PlayerSnapshot::new("actor-1", "Alex");
        snapshot.balance = 2500;
        snapshot.owned_items.insert(3);
        snapshot.streak_days = 12;
        snapshot.active_theme = "neon".to_string();

        let remote = RemoteProfile {
            name: "Alex".to_string(),
            email: "alex@example.com".to_string(),
            level: 3,
            xp: 40,
            strength: 15,
            agility: 11,
            stamina: 12,
        };
        remote.apply_to(&mut snapshot);

        assert_eq!(snapshot.level, 3);
        assert_eq!(snapshot.xp_to_next_level, 225);
        assert_eq!(snapshot.strength, 15);
        // local-only fields untouched
        assert_eq!(snapshot.balance, 2500);
        assert!(snapshot.owned_items.contains(&3));
        assert_eq!(snapshot.streak_days, 12);
        assert_eq!(snapshot.active_theme, "neon");
    }
}
