//! Daily quest batches: generation, progress, and completion rewards

use fitquest_core::{Error, Quest, QuestBook, QuestTemplate, Result, StatKind};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Quests dealt per day
pub const DAILY_QUEST_COUNT: usize = 5;

/// Reward returned when a quest completes, to be applied by the caller
/// to the player's LevelProgress and stat storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestCompletion {
    pub quest_id: u32,
    pub xp_reward: u32,
    pub stat_bonus: StatKind,
    pub stat_points: u32,
    /// True when this completion finished the whole batch. Presentation
    /// signal only; no extra reward attached.
    pub batch_complete: bool,
}

/// Deal a fresh batch of `count` distinct quests from the catalog.
///
/// Sampling is uniform and without replacement; the RNG is supplied by
/// the caller so tests can seed it. Replacing an existing batch abandons
/// its progress; that loss is intentional (daily reset semantics).
pub fn generate_daily_batch<R: Rng + ?Sized>(
    catalog: &[QuestTemplate],
    count: usize,
    rng: &mut R,
) -> Result<QuestBook> {
    if count > catalog.len() {
        return Err(Error::InsufficientCatalog {
            requested: count,
            available: catalog.len(),
        });
    }

    let quests: Vec<Quest> = catalog
        .choose_multiple(rng, count)
        .map(Quest::from_template)
        .collect();

    Ok(QuestBook { quests })
}

/// Mark a quest finished and hand back its reward.
///
/// Completion forces `progress == goal` so the completed/progress
/// invariant cannot drift.
pub fn complete_quest(book: &mut QuestBook, quest_id: u32) -> Result<QuestCompletion> {
    let quest = book
        .quests
        .iter_mut()
        .find(|q| q.id == quest_id)
        .ok_or(Error::QuestNotFound(quest_id))?;

    if quest.is_completed {
        return Err(Error::QuestAlreadyCompleted(quest_id));
    }

    quest.progress = quest.goal;
    quest.is_completed = true;

    let (xp_reward, stat_bonus, stat_points) = (quest.xp_reward, quest.stat_bonus, quest.stat_points);

    Ok(QuestCompletion {
        quest_id,
        xp_reward,
        stat_bonus,
        stat_points,
        batch_complete: book.is_batch_complete(),
    })
}

/// Advance a quest's progress counter, completing it when the goal is
/// reached. Returns the completion reward if this event finished it.
pub fn record_progress(
    book: &mut QuestBook,
    quest_id: u32,
    amount: u32,
) -> Result<Option<QuestCompletion>> {
    let quest = book
        .quests
        .iter_mut()
        .find(|q| q.id == quest_id)
        .ok_or(Error::QuestNotFound(quest_id))?;

    if quest.is_completed {
        return Err(Error::QuestAlreadyCompleted(quest_id));
    }

    quest.progress = (quest.progress + amount).min(quest.goal);
    if quest.progress < quest.goal {
        return Ok(None);
    }

    complete_quest(book, quest_id).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_quest_catalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeSet;

    fn batch(seed: u64) -> QuestBook {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_daily_batch(&default_quest_catalog(), DAILY_QUEST_COUNT, &mut rng).unwrap()
    }

    #[test]
    fn test_batch_has_distinct_fresh_quests() {
        for seed in 0..20 {
            let book = batch(seed);
            assert_eq!(book.quests.len(), 5);

            let ids: BTreeSet<u32> = book.quests.iter().map(|q| q.id).collect();
            assert_eq!(ids.len(), 5, "ids must be distinct (seed {})", seed);

            for quest in &book.quests {
                assert_eq!(quest.progress, 0);
                assert!(!quest.is_completed);
                assert!((1..=10).contains(&quest.id));
            }
        }
    }

    #[test]
    fn test_batch_generation_is_deterministic_per_seed() {
        assert_eq!(batch(42), batch(42));
    }

    #[test]
    fn test_undersized_catalog_is_rejected() {
        let catalog = &default_quest_catalog()[..3];
        let mut rng = StdRng::seed_from_u64(0);
        let err = generate_daily_batch(catalog, 5, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientCatalog {
                requested: 5,
                available: 3
            }
        ));
    }

    #[test]
    fn test_regeneration_abandons_progress() {
        let mut book = batch(1);
        let id = book.quests[0].id;
        complete_quest(&mut book, id).unwrap();
        assert_eq!(book.completed_count(), 1);

        // The daily reset: a new batch starts from zero.
        book = batch(2);
        assert_eq!(book.completed_count(), 0);
    }

    #[test]
    fn test_completion_reward_and_invariant() {
        let mut book = batch(7);
        let quest = book.quests[2].clone();

        let completion = complete_quest(&mut book, quest.id).unwrap();
        assert_eq!(completion.xp_reward, quest.xp_reward);
        assert_eq!(completion.stat_bonus, quest.stat_bonus);
        assert_eq!(completion.stat_points, quest.stat_points);
        assert!(!completion.batch_complete);

        let done = book.quests.iter().find(|q| q.id == quest.id).unwrap();
        assert!(done.is_completed);
        assert_eq!(done.progress, done.goal);
    }

    #[test]
    fn test_double_completion_is_reported_once() {
        let mut book = batch(3);
        let id = book.quests[0].id;

        complete_quest(&mut book, id).unwrap();
        let before = book.clone();

        let err = complete_quest(&mut book, id).unwrap_err();
        assert!(matches!(err, Error::QuestAlreadyCompleted(i) if i == id));
        assert_eq!(book, before, "second call must not change state");
    }

    #[test]
    fn test_unknown_quest_id() {
        let mut book = batch(3);
        assert!(matches!(
            complete_quest(&mut book, 999),
            Err(Error::QuestNotFound(999))
        ));
    }

    #[test]
    fn test_batch_complete_signal_fires_on_last_quest() {
        let mut book = batch(5);
        let ids: Vec<u32> = book.quests.iter().map(|q| q.id).collect();

        for (i, id) in ids.iter().enumerate() {
            let completion = complete_quest(&mut book, *id).unwrap();
            assert_eq!(completion.batch_complete, i == ids.len() - 1);
        }
        assert!(book.is_batch_complete());
    }

    #[test]
    fn test_record_progress_accumulates_and_completes() {
        let mut book = batch(11);
        // Pick a quest with goal > 1 (the catalog has several)
        let quest = book
            .quests
            .iter()
            .find(|q| q.goal >= 3)
            .expect("catalog has multi-step quests")
            .clone();

        assert!(record_progress(&mut book, quest.id, 1).unwrap().is_none());
        let completion = record_progress(&mut book, quest.id, quest.goal).unwrap();
        let completion = completion.expect("reaching the goal completes the quest");
        assert_eq!(completion.xp_reward, quest.xp_reward);

        let done = book.quests.iter().find(|q| q.id == quest.id).unwrap();
        assert_eq!(done.progress, done.goal, "progress clamps at goal");
    }
}
