//! The assignment trail: one entry per live decision level, recording the
//! branching literal and the propagations it caused.
//!
//! One [`Level`] per live decision level ≥ 1, indexed `1..=current_level` via
//! `levels[level - 1]`.

use crate::literal::Literal;

#[derive(Debug, Default)]
pub struct Level {
    pub branching_var: Option<Literal>,
    pub propagated: Vec<Literal>,
}

#[derive(Debug, Default)]
pub struct Trail {
    levels: Vec<Level>,
}

impl Trail {
    pub fn new() -> Self {
        Trail { levels: Vec::new() }
    }

    /// Pushes a new (initially empty) decision level and records its
    /// branching literal.
    pub fn begin_level(&mut self, branching_literal: Literal) {
        self.levels.push(Level {
            branching_var: Some(branching_literal),
            propagated: Vec::new(),
        });
    }

    /// Decision level 0 has no branching literal but may still record
    /// top-level unit propagations from the original formula.
    pub fn ensure_level_zero(&mut self) {
        if self.levels.is_empty() {
            self.levels.push(Level::default());
        }
    }

    pub fn current_level(&self) -> u32 {
        self.levels.len().saturating_sub(1) as u32
    }

    pub fn record_propagation(&mut self, level: u32, literal: Literal) {
        self.levels[level as usize].propagated.push(literal);
    }

    pub fn level(&self, level: u32) -> &Level {
        &self.levels[level as usize]
    }

    /// The branching literal of this level followed by every literal it
    /// propagated, in the order each was assigned.
    pub fn history_at(&self, level: u32) -> Vec<Literal> {
        let lvl = self.level(level);
        let mut history = Vec::with_capacity(1 + lvl.propagated.len());
        if let Some(branching) = lvl.branching_var {
            history.push(branching);
        }
        history.extend(lvl.propagated.iter().copied());
        history
    }

    /// Deletes every level above `target_level`.
    pub fn truncate(&mut self, target_level: u32) {
        self.levels.truncate(target_level as usize + 1);
    }
}
