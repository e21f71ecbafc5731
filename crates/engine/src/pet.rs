//! Pet care actions: feeding, play, training, and activity credit

use crate::evolution::{self, Evolution, EvolutionThresholds};
use crate::progression::{self, XpGrant};
use chrono::Utc;
use fitquest_core::{Error, Pet, Result, PET_METER_MAX};
use serde::{Deserialize, Serialize};

/// Energy needed before the pet will play
const PLAY_ENERGY_COST: u32 = 15;
const PLAY_ENERGY_REQUIRED: u32 = 20;
const PLAY_HAPPINESS_GAIN: u32 = 20;
const PLAY_XP: u32 = 10;

/// Energy needed before the pet will train
const TRAIN_ENERGY_COST: u32 = 25;
const TRAIN_ENERGY_REQUIRED: u32 = 30;
const TRAIN_HAPPINESS_COST: u32 = 5;
const TRAIN_XP: u32 = 25;

const FEED_ENERGY_GAIN: u32 = 25;
const FEED_HAPPINESS_GAIN: u32 = 10;

const ACTIVITY_HAPPINESS_GAIN: u32 = 5;

/// What an XP-earning care action changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetUpdate {
    pub grant: XpGrant,
    pub evolution: Evolution,
}

/// Feed the pet: restores energy and a little happiness
pub fn feed(pet: &mut Pet) -> Result<()> {
    if pet.energy >= PET_METER_MAX {
        return Err(Error::PetAlreadyFull);
    }

    pet.energy = (pet.energy + FEED_ENERGY_GAIN).min(PET_METER_MAX);
    pet.happiness = (pet.happiness + FEED_HAPPINESS_GAIN).min(PET_METER_MAX);
    pet.last_fed = Utc::now();
    Ok(())
}

/// Play with the pet: costs energy, raises happiness, grants a little XP
pub fn play(pet: &mut Pet, thresholds: &EvolutionThresholds) -> Result<PetUpdate> {
    if pet.energy < PLAY_ENERGY_REQUIRED {
        return Err(Error::PetTooTired {
            required: PLAY_ENERGY_REQUIRED,
            energy: pet.energy,
        });
    }

    pet.energy = pet.energy.saturating_sub(PLAY_ENERGY_COST);
    pet.happiness = (pet.happiness + PLAY_HAPPINESS_GAIN).min(PET_METER_MAX);
    grant_and_evolve(pet, PLAY_XP, thresholds)
}

/// Train the pet: more XP than play, but drains energy and mood
pub fn train(pet: &mut Pet, thresholds: &EvolutionThresholds) -> Result<PetUpdate> {
    if pet.energy < TRAIN_ENERGY_REQUIRED {
        return Err(Error::PetTooTired {
            required: TRAIN_ENERGY_REQUIRED,
            energy: pet.energy,
        });
    }

    pet.energy = pet.energy.saturating_sub(TRAIN_ENERGY_COST);
    pet.happiness = pet.happiness.saturating_sub(TRAIN_HAPPINESS_COST);
    grant_and_evolve(pet, TRAIN_XP, thresholds)
}

/// Credit the pet for the player's real-world activity (a finished
/// workout or quest): extends the streak and grants the given XP
pub fn record_activity(
    pet: &mut Pet,
    xp: u32,
    thresholds: &EvolutionThresholds,
) -> Result<PetUpdate> {
    pet.streak_days += 1;
    pet.happiness = (pet.happiness + ACTIVITY_HAPPINESS_GAIN).min(PET_METER_MAX);
    grant_and_evolve(pet, xp, thresholds)
}

/// XP grants always re-run the evolution check: a level-up may cross a
/// stage threshold, and the ratchet keeps everything monotonic.
fn grant_and_evolve(pet: &mut Pet, xp: u32, thresholds: &EvolutionThresholds) -> Result<PetUpdate> {
    let grant = progression::grant_xp(&mut pet.progress, xp)?;
    let evolution = evolution::evaluate(
        thresholds,
        pet.progress.level,
        pet.streak_days,
        pet.stage,
    );
    pet.stage = evolution.stage;
    Ok(PetUpdate { grant, evolution })
}
