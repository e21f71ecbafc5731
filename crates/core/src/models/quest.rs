//! Quest templates, daily quest instances, and the daily batch

use crate::types::StatKind;
use serde::{Deserialize, Serialize};

/// Immutable quest definition in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestTemplate {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub xp_reward: u32,
    pub stat_bonus: StatKind,
    pub stat_points: u32,
    pub goal: u32,
}

/// One quest instance in today's batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub xp_reward: u32,
    pub stat_bonus: StatKind,
    pub stat_points: u32,
    pub progress: u32,
    pub goal: u32,
    pub is_completed: bool,
}

impl Quest {
    /// Instantiate a fresh quest from a catalog template
    pub fn from_template(template: &QuestTemplate) -> Self {
        Self {
            id: template.id,
            title: template.title.clone(),
            description: template.description.clone(),
            xp_reward: template.xp_reward,
            stat_bonus: template.stat_bonus,
            stat_points: template.stat_points,
            progress: 0,
            goal: template.goal,
            is_completed: false,
        }
    }
}

/// The set of quests active for the current day
///
/// Regenerating a batch replaces the whole set and abandons any
/// uncommitted progress. That loss is intentional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestBook {
    pub quests: Vec<Quest>,
}

impl QuestBook {
    pub fn completed_count(&self) -> usize {
        self.quests.iter().filter(|q| q.is_completed).count()
    }

    pub fn is_batch_complete(&self) -> bool {
        !self.quests.is_empty() && self.quests.iter().all(|q| q.is_completed)
    }

    /// Total XP earned from completed quests in this batch
    pub fn xp_earned(&self) -> u32 {
        self.quests
            .iter()
            .filter(|q| q.is_completed)
            .map(|q| q.xp_reward)
            .sum()
    }
}
