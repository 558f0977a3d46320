//! Arena client entry point: one scripted encounter per run.
mod config;
mod encounter;

use anyhow::{Context, Result};
use config::{CliConfig, EnemyKind};
use game_core::{
    Combatant, Enemy, EquipmentFacade, PcgRng, PlayableCharacter, RandomSource, WeaponEnemy,
    decorate, equipment::Sword,
};
use runtime::{CachedProfileRepository, FileProfileStore, StdRandom, TracingCombatLog};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::from_env().context("invalid configuration")?;

    let equipment = EquipmentFacade::from_name(&config.player_class)?;
    let mut player = PlayableCharacter::with_starter_set(config.player_name.as_str(), &equipment);
    tracing::info!(
        "{} the {} enters the arena ({})",
        player.name(),
        equipment.class(),
        equipment.equipment_description()
    );

    let log = TracingCombatLog::shared();
    let rng: Box<dyn RandomSource> = match config.seed {
        Some(seed) => Box::new(PcgRng::new(seed)),
        None => Box::new(StdRandom::new()),
    };

    // Lent to the animated-weapon enemy; outlives the fight.
    let mut cursed_blade = Sword::new();
    let base: Box<dyn Combatant + '_> = match config.enemy {
        EnemyKind::Goblin => Box::new(Enemy::goblin()),
        EnemyKind::Weapon => Box::new(WeaponEnemy::new(&mut cursed_blade, rng, log.clone())),
    };
    let mut enemy = decorate(base, &config.modifiers, &log, config.armor_reduction);
    tracing::info!("{} appears!", enemy.name());

    let outcome = encounter::run(&mut player, enemy.as_mut(), config.max_rounds);
    tracing::info!(
        "Encounter over after {} rounds: {} with {} health left (score {})",
        outcome.rounds,
        if outcome.victory { "victory" } else { "no victory" },
        outcome.player_health,
        outcome.score()
    );

    let score_path = config.score_path();
    let profiles = CachedProfileRepository::new(
        FileProfileStore::open(&score_path, config.score_format)
            .with_context(|| format!("failed to open score table {}", score_path.display()))?,
    );
    encounter::record_high_score(&profiles, &config.player_name, outcome.score())?;

    Ok(())
}
