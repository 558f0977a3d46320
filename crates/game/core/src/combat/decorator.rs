//! Enemy decorators.
//!
//! A decorator wraps exactly one inner [`Combatant`] and changes selected
//! parts of its behavior without changing what it is: a decorated goblin is
//! still something the combat loop can hit and be hit by. Decorators nest to
//! any depth; the outermost one is what the loop holds.
//!
//! # Structure
//!
//! [`EnemyDecorator`] is the single wrapper type. It owns the inner
//! combatant and forwards every read to it. What differs between decorators
//! is an [`EnemyModifier`]: a set of hooks with pass-through defaults, so a
//! concrete modifier overrides only what it changes.
//!
//! The wrapper, not the modifier, calls the inner `attack`/`take_damage`.
//! A modifier can repeat the inner attack or change the damage that reaches
//! the inner combatant, but it cannot skip delegation.
//!
//! # Order
//!
//! Composition order is observable. `Windfury(Legendary(goblin))` attacks
//! twice and each attack carries the legendary bonus; `Legendary(Windfury(goblin))`
//! attacks twice and adds the bonus once.

use strum::{Display, EnumString};

use super::combatant::Combatant;
use super::damage::reduce_damage;
use crate::env::{CombatLog, SharedLog};

/// Behavior hooks applied by an [`EnemyDecorator`].
pub trait EnemyModifier: Send {
    /// Display name given the inner combatant's name.
    fn rename(&self, inner: String) -> String {
        inner
    }

    /// How many times the inner attack runs per attack call.
    ///
    /// Values below 1 are treated as 1.
    fn strikes(&self) -> usize {
        1
    }

    /// Runs between two consecutive inner attacks.
    fn between_strikes(&self, _log: &dyn CombatLog) {}

    /// Runs once after all inner attacks resolved.
    fn after_attack(&self, _target: &mut dyn Combatant, _log: &dyn CombatLog) {}

    /// Damage forwarded to the inner combatant for `amount` incoming damage.
    fn mitigate(&self, amount: u32, _log: &dyn CombatLog) -> u32 {
        amount
    }
}

/// Wraps a combatant and applies one modifier to it.
pub struct EnemyDecorator<'a, M> {
    inner: Box<dyn Combatant + 'a>,
    modifier: M,
    log: SharedLog,
}

impl<'a, M: EnemyModifier> EnemyDecorator<'a, M> {
    pub fn new(inner: impl Combatant + 'a, modifier: M, log: SharedLog) -> Self {
        Self {
            inner: Box::new(inner),
            modifier,
            log,
        }
    }

    /// The directly wrapped combatant.
    pub fn inner(&self) -> &dyn Combatant {
        self.inner.as_ref()
    }
}

impl<M: EnemyModifier> Combatant for EnemyDecorator<'_, M> {
    fn name(&self) -> String {
        self.modifier.rename(self.inner.name())
    }

    fn health(&self) -> u32 {
        self.inner.health()
    }

    fn damage(&self) -> u32 {
        self.inner.damage()
    }

    fn is_alive(&self) -> bool {
        self.inner.is_alive()
    }

    fn take_damage(&mut self, amount: u32) {
        let amount = self.modifier.mitigate(amount, self.log.as_ref());
        self.inner.take_damage(amount);
    }

    fn attack(&mut self, target: &mut dyn Combatant) {
        let strikes = self.modifier.strikes().max(1);
        for strike in 0..strikes {
            if strike > 0 {
                self.modifier.between_strikes(self.log.as_ref());
            }
            self.inner.attack(target);
        }
        self.modifier.after_attack(target, self.log.as_ref());
    }
}

/// Adds a fixed bonus hit after every attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Legendary {
    bonus_damage: u32,
}

impl Legendary {
    pub const BONUS_DAMAGE: u32 = 20;
}

impl Default for Legendary {
    fn default() -> Self {
        Self {
            bonus_damage: Self::BONUS_DAMAGE,
        }
    }
}

impl EnemyModifier for Legendary {
    fn rename(&self, inner: String) -> String {
        format!("Legendary {inner}")
    }

    fn after_attack(&self, target: &mut dyn Combatant, log: &dyn CombatLog) {
        log.log(&format!(
            "The enemy is legendary and deals {} extra damage!",
            self.bonus_damage
        ));
        target.take_damage(self.bonus_damage);
    }
}

/// Attacks twice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Windfury;

impl EnemyModifier for Windfury {
    fn rename(&self, inner: String) -> String {
        format!("Windfury {inner}")
    }

    fn strikes(&self) -> usize {
        2
    }

    fn between_strikes(&self, log: &dyn CombatLog) {
        log.log("Windfury lets the enemy strike a second time!");
    }
}

/// Absorbs a fraction of all incoming damage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Armored {
    reduction: f64,
}

impl Armored {
    pub const DEFAULT_REDUCTION: f64 = 0.3;

    /// `reduction` is clamped to `[0, 1]`.
    pub fn new(reduction: f64) -> Self {
        Self {
            reduction: reduction.clamp(0.0, 1.0),
        }
    }

    pub fn reduction(&self) -> f64 {
        self.reduction
    }

    /// Absorbed share as a percentage, rounded to two decimals.
    pub fn absorbed_percent(&self) -> f64 {
        (self.reduction * 10_000.0).round() / 100.0
    }
}

impl Default for Armored {
    fn default() -> Self {
        Self::new(Self::DEFAULT_REDUCTION)
    }
}

impl EnemyModifier for Armored {
    fn rename(&self, inner: String) -> String {
        format!("Armored {inner}")
    }

    fn mitigate(&self, amount: u32, log: &dyn CombatLog) -> u32 {
        log.log(&format!(
            "Armor absorbs {}% of the damage!",
            self.absorbed_percent()
        ));
        reduce_damage(amount, self.reduction)
    }
}

pub type LegendaryEnemy<'a> = EnemyDecorator<'a, Legendary>;
pub type WindfuryEnemy<'a> = EnemyDecorator<'a, Windfury>;
pub type ArmoredEnemy<'a> = EnemyDecorator<'a, Armored>;

/// Fluent construction of decorator chains, innermost first.
///
/// ```
/// use game_core::{Combatant, Enemy, EnemyExt, NullLog};
///
/// let log = NullLog::shared();
/// let boss = Enemy::goblin().legendary(log.clone()).windfury(log);
/// assert_eq!(boss.name(), "Windfury Legendary Goblin");
/// ```
pub trait EnemyExt<'a>: Combatant + Sized + 'a {
    fn legendary(self, log: SharedLog) -> LegendaryEnemy<'a> {
        EnemyDecorator::new(self, Legendary::default(), log)
    }

    fn windfury(self, log: SharedLog) -> WindfuryEnemy<'a> {
        EnemyDecorator::new(self, Windfury, log)
    }

    fn armored(self, log: SharedLog, reduction: f64) -> ArmoredEnemy<'a> {
        EnemyDecorator::new(self, Armored::new(reduction), log)
    }
}

impl<'a, T: Combatant + 'a> EnemyExt<'a> for T {}

/// Named modifier, for chains assembled from configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ModifierKind {
    Legendary,
    Windfury,
    Armored,
}

impl ModifierKind {
    /// Wraps `inner` in this modifier.
    ///
    /// `armor_reduction` is only read by [`ModifierKind::Armored`].
    pub fn apply<'a>(
        self,
        inner: Box<dyn Combatant + 'a>,
        log: SharedLog,
        armor_reduction: f64,
    ) -> Box<dyn Combatant + 'a> {
        match self {
            Self::Legendary => Box::new(inner.legendary(log)),
            Self::Windfury => Box::new(inner.windfury(log)),
            Self::Armored => Box::new(inner.armored(log, armor_reduction)),
        }
    }
}

/// Applies `kinds` in order, the first one ending up innermost.
pub fn decorate<'a>(
    base: Box<dyn Combatant + 'a>,
    kinds: &[ModifierKind],
    log: &SharedLog,
    armor_reduction: f64,
) -> Box<dyn Combatant + 'a> {
    kinds.iter().fold(base, |inner, kind| {
        kind.apply(inner, log.clone(), armor_reduction)
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::combat::Enemy;
    use crate::env::NullLog;
    use crate::testing::{Dummy, RecordingLog};

    struct Passthrough;
    impl EnemyModifier for Passthrough {}

    fn goblin() -> Enemy {
        Enemy::new("Goblin", 60, 8)
    }

    fn recording() -> (RecordingLog, SharedLog) {
        let log = RecordingLog::default();
        let shared: SharedLog = Arc::new(log.clone());
        (log, shared)
    }

    #[test]
    fn default_hooks_forward_everything() {
        let mut wrapped = EnemyDecorator::new(goblin(), Passthrough, NullLog::shared());
        let mut dummy = Dummy::new(100);

        assert_eq!(wrapped.name(), "Goblin");
        assert_eq!(wrapped.health(), 60);
        assert_eq!(wrapped.damage(), 8);
        assert!(wrapped.is_alive());

        wrapped.attack(&mut dummy);
        wrapped.take_damage(15);

        assert_eq!(dummy.hits(), &[8]);
        assert_eq!(wrapped.health(), 45);
        assert_eq!(wrapped.inner().health(), 45);
    }

    #[test]
    fn legendary_adds_bonus_after_base_attack() {
        let (log, shared) = recording();
        let mut boss = goblin().legendary(shared);
        let mut dummy = Dummy::new(100);

        boss.attack(&mut dummy);

        assert_eq!(boss.name(), "Legendary Goblin");
        assert_eq!(dummy.hits(), &[8, Legendary::BONUS_DAMAGE]);
        assert_eq!(log.lines().len(), 1);
    }

    #[test]
    fn legendary_bonus_ignores_own_damage_stat() {
        let mut harmless = Enemy::new("Slime", 10, 0).legendary(NullLog::shared());
        let mut dummy = Dummy::new(100);

        harmless.attack(&mut dummy);

        assert_eq!(dummy.total_damage(), 20);
        assert_eq!(harmless.damage(), 0);
    }

    #[test]
    fn windfury_attacks_twice_with_log_between() {
        let (log, shared) = recording();
        let mut fast = goblin().windfury(shared);
        let mut dummy = Dummy::new(100);

        fast.attack(&mut dummy);

        assert_eq!(fast.name(), "Windfury Goblin");
        assert_eq!(dummy.hits(), &[8, 8]);
        assert_eq!(
            log.lines(),
            vec!["Windfury lets the enemy strike a second time!".to_string()]
        );
    }

    #[test]
    fn windfury_over_legendary_doubles_the_bonus() {
        let (log, shared) = recording();
        let mut boss = goblin().legendary(shared.clone()).windfury(shared);
        let mut dummy = Dummy::new(200);

        boss.attack(&mut dummy);

        assert_eq!(dummy.hits(), &[8, 20, 8, 20]);
        assert_eq!(dummy.total_damage(), 56);
        // legendary, windfury, legendary
        let lines = log.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("legendary"));
        assert!(lines[1].contains("Windfury"));
        assert!(lines[2].contains("legendary"));
    }

    #[test]
    fn legendary_over_windfury_adds_bonus_once() {
        let log = NullLog::shared();
        let mut boss = goblin().windfury(log.clone()).legendary(log);
        let mut dummy = Dummy::new(200);

        boss.attack(&mut dummy);

        assert_eq!(dummy.hits(), &[8, 8, 20]);
        assert_eq!(dummy.total_damage(), 36);
    }

    #[test]
    fn nested_windfury_multiplies_strikes() {
        let log = NullLog::shared();
        let mut storm = goblin().windfury(log.clone()).windfury(log);
        let mut dummy = Dummy::new(200);

        storm.attack(&mut dummy);

        assert_eq!(dummy.hits(), &[8, 8, 8, 8]);
    }

    #[test]
    fn armored_reduces_incoming_damage() {
        let (log, shared) = recording();
        let mut tank = goblin().armored(shared, Armored::DEFAULT_REDUCTION);

        tank.take_damage(50);

        // 50 * 0.7 = 35
        assert_eq!(tank.health(), 25);
        assert_eq!(tank.name(), "Armored Goblin");
        assert_eq!(log.lines(), vec!["Armor absorbs 30% of the damage!".to_string()]);
    }

    #[test]
    fn armored_delivers_seventy_of_a_hundred() {
        let mut tank = Dummy::new(500).armored(NullLog::shared(), 0.3);

        tank.take_damage(100);

        assert_eq!(tank.inner().health(), 430);
    }

    #[test]
    fn armored_passes_on_whole_reduced_hits() {
        let mut tank = Dummy::new(500).armored(NullLog::shared(), 0.3);

        tank.take_damage(90);

        // 90 * 0.7 = 63 exactly
        assert_eq!(tank.inner().health(), 500 - 63);
    }

    #[test]
    fn armored_logs_fractional_percentages() {
        let (log, shared) = recording();
        let mut tank = goblin().armored(shared, 0.125);

        tank.take_damage(8);

        assert_eq!(tank.health(), 53);
        assert_eq!(log.lines(), vec!["Armor absorbs 12.5% of the damage!".to_string()]);
    }

    #[test]
    fn armored_clamps_reduction() {
        assert_eq!(Armored::new(1.5).reduction(), 1.0);
        assert_eq!(Armored::new(-0.2).reduction(), 0.0);
        assert_eq!(Armored::default().reduction(), Armored::DEFAULT_REDUCTION);
    }

    #[test]
    fn armored_zero_damage_stays_zero() {
        let mut tank = goblin().armored(NullLog::shared(), 0.3);

        tank.take_damage(0);

        assert_eq!(tank.health(), 60);
    }

    #[test]
    fn full_reduction_absorbs_any_hit() {
        let mut wall = goblin().armored(NullLog::shared(), 1.0);

        wall.take_damage(1_000);
        wall.take_damage(u32::MAX);

        assert_eq!(wall.health(), 60);
        assert!(wall.is_alive());
    }

    #[test]
    fn armored_leaves_attack_untouched() {
        let mut tank = goblin().armored(NullLog::shared(), 0.5);
        let mut dummy = Dummy::new(100);

        tank.attack(&mut dummy);

        assert_eq!(dummy.hits(), &[8]);
    }

    #[test]
    fn stacked_armor_compounds() {
        let log = NullLog::shared();
        let mut fortress = goblin().armored(log.clone(), 0.5).armored(log, 0.5);

        fortress.take_damage(40);

        // 40 -> 20 -> 10
        assert_eq!(fortress.health(), 50);
    }

    #[test]
    fn reads_pass_through_the_whole_chain() {
        let log = NullLog::shared();
        let mut chain = goblin()
            .legendary(log.clone())
            .windfury(log.clone())
            .armored(log, 0.3);

        assert_eq!(chain.name(), "Armored Windfury Legendary Goblin");
        assert_eq!(chain.damage(), 8);

        chain.take_damage(1_000);
        assert_eq!(chain.health(), 0);
        assert!(!chain.is_alive());
    }

    #[test]
    fn modifier_kinds_parse_case_insensitively() {
        assert_eq!("legendary".parse::<ModifierKind>(), Ok(ModifierKind::Legendary));
        assert_eq!("WindFury".parse::<ModifierKind>(), Ok(ModifierKind::Windfury));
        assert_eq!("ARMORED".parse::<ModifierKind>(), Ok(ModifierKind::Armored));
        assert!("vampiric".parse::<ModifierKind>().is_err());
    }

    #[test]
    fn decorate_applies_kinds_innermost_first() {
        let log = NullLog::shared();
        let mut boss = decorate(
            Box::new(goblin()),
            &[ModifierKind::Legendary, ModifierKind::Windfury],
            &log,
            0.3,
        );
        let mut dummy = Dummy::new(200);

        boss.attack(&mut dummy);

        assert_eq!(boss.name(), "Windfury Legendary Goblin");
        assert_eq!(dummy.hits(), &[8, 20, 8, 20]);
    }
}
