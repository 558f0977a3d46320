//! Deterministic doubles shared by the unit tests of this crate.

use std::sync::{Arc, Mutex};

use crate::combat::{Combatant, apply_damage};
use crate::env::{CombatLog, RandomSource};

/// Target that records every hit it receives.
pub struct Dummy {
    health: u32,
    hits: Vec<u32>,
}

impl Dummy {
    pub fn new(health: u32) -> Self {
        Self {
            health,
            hits: Vec::new(),
        }
    }

    pub fn hits(&self) -> &[u32] {
        &self.hits
    }

    pub fn total_damage(&self) -> u32 {
        self.hits.iter().sum()
    }
}

impl Combatant for Dummy {
    fn name(&self) -> String {
        "Dummy".to_string()
    }

    fn health(&self) -> u32 {
        self.health
    }

    fn damage(&self) -> u32 {
        0
    }

    fn take_damage(&mut self, amount: u32) {
        self.hits.push(amount);
        self.health = apply_damage(self.health, amount);
    }

    fn attack(&mut self, _target: &mut dyn Combatant) {}
}

/// Log sink that keeps every line for later assertions.
#[derive(Clone, Default)]
pub struct RecordingLog {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingLog {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl CombatLog for RecordingLog {
    fn log(&self, message: &str) {
        self.lines.lock().unwrap().push(message.to_string());
    }
}

/// Random source that always returns the same value.
pub struct FixedRandom(pub f32);

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f32 {
        self.0
    }
}
