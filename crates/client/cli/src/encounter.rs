//! One fight between the player and a (possibly decorated) enemy.

use game_core::{Combatant, PlayableCharacter};
use runtime::{ProfileRepository, RepositoryError};

/// Points awarded on top of the damage dealt when the enemy falls.
pub const VICTORY_BONUS: u32 = 100;

/// How an encounter ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncounterOutcome {
    pub rounds: u32,
    /// Health the enemy lost to the player's attacks.
    pub damage_dealt: u32,
    pub victory: bool,
    pub player_health: u32,
}

impl EncounterOutcome {
    pub fn score(&self) -> u32 {
        let bonus = if self.victory { VICTORY_BONUS } else { 0 };
        self.damage_dealt.saturating_add(bonus)
    }
}

/// Alternates player and enemy attacks, player first.
///
/// Stops when either side falls or after `max_rounds` rounds.
pub fn run(
    player: &mut PlayableCharacter,
    enemy: &mut dyn Combatant,
    max_rounds: u32,
) -> EncounterOutcome {
    let mut damage_dealt = 0u32;
    let mut rounds = 0;

    while rounds < max_rounds && player.is_alive() && enemy.is_alive() {
        rounds += 1;
        tracing::info!("Round {}: {} attacks {}", rounds, player.name(), enemy.name());

        let before = enemy.health();
        player.attack(enemy);
        damage_dealt = damage_dealt.saturating_add(before.saturating_sub(enemy.health()));

        if !enemy.is_alive() {
            tracing::info!("{} is defeated", enemy.name());
            break;
        }

        enemy.attack(player);
        tracing::info!(
            "{} has {} health, {} has {} health",
            player.name(),
            player.health(),
            enemy.name(),
            enemy.health()
        );
    }

    EncounterOutcome {
        rounds,
        damage_dealt,
        victory: !enemy.is_alive(),
        player_health: player.health(),
    }
}

/// Stores `score` for `name` if it beats the stored high score.
///
/// Returns whether the stored score changed.
pub fn record_high_score(
    profiles: &impl ProfileRepository,
    name: &str,
    score: u32,
) -> Result<bool, RepositoryError> {
    let profile = profiles.get_profile(name)?;
    if score <= profile.score {
        tracing::info!("Score {} does not beat {}'s best of {}", score, name, profile.score);
        return Ok(false);
    }

    profiles.update_high_score(name, score)?;
    tracing::info!("New high score for {}: {} (was {})", name, score, profile.score);
    Ok(true)
}
