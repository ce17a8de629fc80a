//! Mutable state of a single game session.

use serde::Serialize;

use crate::dice::{Die, DieStats};

/// Everything a session tracks between commands.
///
/// The engine hands out only shared references to its state; rolls and
/// reshuffles go through [`ChameleonGame`](crate::ChameleonGame). Nothing is
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    /// Name of the active topic. Empty until the first selection.
    pub current_topic: String,
    /// The sixteen grid items, row-major.
    pub current_items: Vec<String>,
    /// Last d6 face, 1 before any roll.
    pub d6_value: u32,
    /// Last d8 face, 1 before any roll.
    pub d8_value: u32,
    /// Cumulative d6 roll counts.
    pub d6_stats: DieStats,
    /// Cumulative d8 roll counts.
    pub d8_stats: DieStats,
    /// How many times the topic was reshuffled.
    pub reshuffles: u32,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            current_topic: String::new(),
            current_items: Vec::new(),
            d6_value: 1,
            d8_value: 1,
            d6_stats: DieStats::new(),
            d8_stats: DieStats::new(),
            reshuffles: 0,
        }
    }
}

impl SessionState {
    /// Last rolled face of `die`.
    pub fn value(&self, die: Die) -> u32 {
        match die {
            Die::D6 => self.d6_value,
            Die::D8 => self.d8_value,
        }
    }

    /// Roll statistics of `die`.
    pub fn stats(&self, die: Die) -> &DieStats {
        match die {
            Die::D6 => &self.d6_stats,
            Die::D8 => &self.d8_stats,
        }
    }

    /// Store a roll of `die`: remember the face and count it.
    pub(crate) fn record_roll(&mut self, die: Die, face: u32) {
        match die {
            Die::D6 => {
                self.d6_value = face;
                self.d6_stats.record(face);
            }
            Die::D8 => {
                self.d8_value = face;
                self.d8_stats.record(face);
            }
        }
    }

    /// Returns true if neither die has been rolled.
    pub fn has_no_rolls(&self) -> bool {
        self.d6_stats.is_empty() && self.d8_stats.is_empty()
    }
}
