//! Session orchestration: wiring the rules to the collaborators
//!
//! A `PlayerSession` owns the local store and the optional remote
//! client, constructed explicitly at startup instead of reached through
//! globals. The remote store is never required: a failed fetch degrades
//! to the last locally persisted snapshot, and a failed push is logged
//! and forgotten (last write wins at the persistence boundary).

use crate::progression::{self, XpGrant};
use crate::quests::QuestCompletion;
use crate::shop;
use crate::themes::ThemeState;
use fitquest_core::{Pet, PlayerSnapshot, Result};
use fitquest_persistence::{sqlite, Database};
use fitquest_sync::ProfileStoreClient;
use tracing::{debug, instrument, warn};

/// Name used until a profile provides one
const DEFAULT_PLAYER_NAME: &str = "User";

/// One player's live session over the local store and optional remote
pub struct PlayerSession {
    db: Database,
    remote: Option<ProfileStoreClient>,
}

impl PlayerSession {
    /// Offline session: local snapshots only
    pub fn new(db: Database) -> Self {
        Self { db, remote: None }
    }

    /// Session with remote refresh/push enabled
    pub fn with_remote(db: Database, remote: ProfileStoreClient) -> Self {
        Self {
            db,
            remote: Some(remote),
        }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Load the player's snapshot: remote-refreshed when possible,
    /// otherwise the last local one, otherwise fresh defaults.
    #[instrument(skip(self))]
    pub async fn load_profile(&self, actor_id: &str) -> Result<PlayerSnapshot> {
        let local = sqlite::load_snapshot(self.db.pool(), actor_id).await?;
        let mut snapshot =
            local.unwrap_or_else(|| PlayerSnapshot::new(actor_id, DEFAULT_PLAYER_NAME));

        if let Some(remote) = &self.remote {
            match remote.fetch_profile(actor_id).await {
                Ok(profile) => {
                    debug!("Remote profile refreshed for {}", actor_id);
                    profile.apply_to(&mut snapshot);
                    sqlite::save_snapshot(self.db.pool(), &snapshot).await?;
                }
                Err(err) => {
                    // Offline or store trouble: the cached snapshot is
                    // the source of truth until the next refresh.
                    warn!("Remote fetch failed for {}: {}; using local snapshot", actor_id, err);
                }
            }
        }

        Ok(snapshot)
    }

    /// Persist the snapshot locally, then push the remote-visible slice
    /// best-effort.
    #[instrument(skip(self, snapshot))]
    pub async fn save_profile(&self, snapshot: &PlayerSnapshot) -> Result<()> {
        sqlite::save_snapshot(self.db.pool(), snapshot).await?;

        if let Some(remote) = &self.remote {
            if let Err(err) = fitquest_sync::api::push_snapshot(remote, snapshot).await {
                warn!("Remote push failed for {}: {}", snapshot.actor_id, err);
            }
        }

        Ok(())
    }

    pub async fn load_pet(&self, actor_id: &str) -> Result<Pet> {
        Ok(sqlite::load_pet(self.db.pool(), actor_id)
            .await?
            .unwrap_or_default())
    }

    pub async fn save_pet(&self, actor_id: &str, pet: &Pet) -> Result<()> {
        sqlite::save_pet(self.db.pool(), actor_id, pet).await
    }

    /// Restore the active theme from settings (default if never set)
    pub async fn load_theme(&self) -> Result<ThemeState> {
        let saved = sqlite::get_setting(self.db.pool(), sqlite::SETTING_ACTIVE_THEME).await?;
        Ok(match saved {
            Some(theme_id) => ThemeState::with_active(theme_id),
            None => ThemeState::new(),
        })
    }

    /// Persist the active theme id
    pub async fn save_theme(&self, state: &ThemeState) -> Result<()> {
        sqlite::set_setting(self.db.pool(), sqlite::SETTING_ACTIVE_THEME, state.active()).await
    }
}

/// Apply a quest completion to the player: XP to the level track, stat
/// points to the stat block, and the XP amount credited as spendable
/// balance.
pub fn apply_completion(
    snapshot: &mut PlayerSnapshot,
    completion: &QuestCompletion,
) -> Result<XpGrant> {
    let mut profile = snapshot.profile();
    let grant = progression::grant_xp(&mut profile.progress, completion.xp_reward)?;
    profile.stats.add(completion.stat_bonus, completion.stat_points);

    let mut ledger = snapshot.ledger();
    shop::grant_currency(&mut ledger, completion.xp_reward);

    snapshot.apply_profile(&profile);
    snapshot.apply_ledger(&ledger);
    Ok(grant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_quest_catalog;
    use crate::quests::{complete_quest, generate_daily_batch};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn init_logging() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("fitquest_engine=debug")
            .with_test_writer()
            .try_init();
    }

    #[tokio::test]
    async fn test_first_load_yields_defaults() {
        init_logging();
        let session = PlayerSession::new(Database::connect_in_memory().await.unwrap());

        let snapshot = session.load_profile("actor-1").await.unwrap();
        assert_eq!(snapshot.actor_id, "actor-1");
        assert_eq!(snapshot.level, 1);
        assert_eq!(snapshot.balance, 0);
        assert_eq!(snapshot.active_theme, "default");
    }

    #[tokio::test]
    async fn test_save_then_load_roundtrip() {
        let session = PlayerSession::new(Database::connect_in_memory().await.unwrap());

        let mut snapshot = session.load_profile("actor-1").await.unwrap();
        snapshot.balance = 900;
        snapshot.name = "Alex".to_string();
        session.save_profile(&snapshot).await.unwrap();

        let loaded = session.load_profile("actor-1").await.unwrap();
        assert_eq!(loaded.balance, 900);
        assert_eq!(loaded.name, "Alex");
    }

    #[tokio::test]
    async fn test_unreachable_remote_falls_back_to_local() {
        init_logging();
        let db = Database::connect_in_memory().await.unwrap();

        let mut snapshot = PlayerSnapshot::new("actor-1", "Alex");
        snapshot.balance = 450;
        sqlite::save_snapshot(db.pool(), &snapshot).await.unwrap();

        // Nothing listens here; every call fails fast
        let remote = ProfileStoreClient::new("http://127.0.0.1:9").unwrap();
        let session = PlayerSession::with_remote(db, remote);

        let loaded = session.load_profile("actor-1").await.unwrap();
        assert_eq!(loaded.name, "Alex");
        assert_eq!(loaded.balance, 450);

        // Saving still succeeds; the failed push is only logged
        session.save_profile(&loaded).await.unwrap();
    }

    #[tokio::test]
    async fn test_theme_setting_roundtrip() {
        let session = PlayerSession::new(Database::connect_in_memory().await.unwrap());

        let state = session.load_theme().await.unwrap();
        assert_eq!(state.active(), "default");

        let state = ThemeState::with_active("purple");
        session.save_theme(&state).await.unwrap();
        assert_eq!(session.load_theme().await.unwrap().active(), "purple");
    }

    #[tokio::test]
    async fn test_pet_defaults_then_roundtrip() {
        let session = PlayerSession::new(Database::connect_in_memory().await.unwrap());

        let mut pet = session.load_pet("actor-1").await.unwrap();
        assert_eq!(pet.name, "Buddy");

        pet.rename("Scales");
        pet.streak_days = 4;
        session.save_pet("actor-1", &pet).await.unwrap();

        let loaded = session.load_pet("actor-1").await.unwrap();
        assert_eq!(loaded.name, "Scales");
        assert_eq!(loaded.streak_days, 4);
    }

    #[test]
    fn test_apply_completion_feeds_all_three_submodels() {
        let mut snapshot = PlayerSnapshot::new("actor-1", "Alex");
        let mut rng = StdRng::seed_from_u64(9);
        let mut book =
            generate_daily_batch(&default_quest_catalog(), 5, &mut rng).unwrap();
        let quest = book.quests[0].clone();

        let completion = complete_quest(&mut book, quest.id).unwrap();
        let grant = apply_completion(&mut snapshot, &completion).unwrap();

        let profile = snapshot.profile();
        assert_eq!(profile.progress.level, grant.level);
        assert_eq!(snapshot.balance, quest.xp_reward);
        let expected_stat = 10 + quest.stat_points;
        let actual = match quest.stat_bonus {
            fitquest_core::StatKind::Strength => profile.stats.strength,
            fitquest_core::StatKind::Agility => profile.stats.agility,
            fitquest_core::StatKind::Stamina => profile.stats.stamina,
        };
        assert_eq!(actual, expected_stat);
    }
}
