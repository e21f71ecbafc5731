//! Built-in quest and shop catalogs
//!
//! Callers can hand the engine any catalog; these are the stock ones.

use fitquest_core::{ItemCategory, QuestTemplate, ShopItem, StatKind};

fn quest(
    id: u32,
    title: &str,
    description: &str,
    xp_reward: u32,
    stat_bonus: StatKind,
    stat_points: u32,
    goal: u32,
) -> QuestTemplate {
    QuestTemplate {
        id,
        title: title.to_string(),
        description: description.to_string(),
        xp_reward,
        stat_bonus,
        stat_points,
        goal,
    }
}

/// The stock pool daily quests are drawn from
pub fn default_quest_catalog() -> Vec<QuestTemplate> {
    use StatKind::*;
    vec![
        quest(1, "Morning Walk", "Walk 1 mile", 50, Agility, 5, 1),
        quest(2, "Push-Up Challenge", "Complete 50 push-ups", 75, Strength, 8, 50),
        quest(3, "Sit-Up Master", "Complete 50 sit-ups", 75, Stamina, 8, 50),
        quest(4, "Cardio Warrior", "Run for 20 minutes", 100, Stamina, 10, 20),
        quest(5, "Weight Lifter", "Complete 3 strength exercises", 100, Strength, 12, 3),
        quest(6, "Hydration Hero", "Drink 8 glasses of water", 50, Stamina, 5, 8),
        quest(7, "Step Counter", "Walk 10,000 steps", 150, Agility, 15, 10000),
        quest(8, "Plank Master", "Hold plank for 2 minutes", 100, Stamina, 10, 120),
        quest(9, "Sprint Session", "Run 3 miles", 125, Agility, 12, 3),
        quest(10, "Gym Rat", "Complete a full workout session", 200, Strength, 20, 1),
    ]
}

fn item(
    id: u32,
    name: &str,
    description: &str,
    price: u32,
    category: ItemCategory,
    icon: &str,
    theme_id: Option<&str>,
) -> ShopItem {
    ShopItem {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price,
        category,
        icon: icon.to_string(),
        theme_id: theme_id.map(str::to_string),
    }
}

/// The stock shop catalog
pub fn default_shop_catalog() -> Vec<ShopItem> {
    use ItemCategory::*;
    vec![
        // Cosmetics - themes
        item(1, "Golden Theme", "Unlock golden UI theme", 500, Cosmetic, "✨", Some("golden")),
        item(2, "Dark Purple Theme", "Sleek purple color scheme", 400, Cosmetic, "💜", Some("purple")),
        item(3, "Neon Theme", "Cyberpunk neon aesthetics", 600, Cosmetic, "🌃", Some("neon")),
        // Other cosmetics
        item(4, "Profile Frame: Fire", "Legendary fire border", 800, Cosmetic, "🔥", None),
        item(5, "Profile Frame: Ice", "Cool ice border", 800, Cosmetic, "❄️", None),
        item(6, "Title: Warrior", "Display 'Fitness Warrior' title", 300, Cosmetic, "⚔️", None),
        item(7, "Title: Legend", "Display 'Living Legend' title", 1000, Cosmetic, "👑", None),
        // Power-ups
        item(8, "2x XP Boost", "Double XP for 24 hours", 750, Powerup, "⚡", None),
        item(9, "Stat Multiplier", "+50% all stats for 1 week", 1200, Powerup, "📈", None),
        item(10, "Quest Refresh", "Get 5 new quests instantly", 300, Powerup, "🔄", None),
        item(11, "Instant Level Up", "Gain 1 level immediately", 1500, Powerup, "🆙", None),
        item(12, "Streak Saver", "Protect your streak for 3 days", 500, Powerup, "🛡️", None),
        // Pet items
        item(13, "Pet Costume: Ninja", "Dress your pet as ninja", 600, Pet, "🥷", None),
        item(14, "Pet Costume: Knight", "Dress your pet as knight", 600, Pet, "🛡️", None),
        item(15, "Pet Accessory: Crown", "Royal crown for your pet", 400, Pet, "👑", None),
        item(16, "Pet Accessory: Wings", "Give your pet wings", 800, Pet, "🪽", None),
        item(17, "Pet Food Bundle", "5x premium pet food", 350, Pet, "🍖", None),
        item(18, "Pet XP Boost", "2x pet XP for 3 days", 700, Pet, "🌟", None),
        item(19, "Evolution Potion", "Instant pet evolution", 2000, Pet, "🧪", None),
    ]
}
