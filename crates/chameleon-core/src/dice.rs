//! Coordinate dice and per-face roll statistics.
//!
//! The game uses a six-sided and an eight-sided die; together they pick the
//! secret word's cell on the grid.

use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;

/// A die used by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Die {
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D6 => 6,
            Self::D8 => 8,
        }
    }

    /// Roll the die, returning a face in `1..=sides`.
    pub fn roll<R: Rng + ?Sized>(self, rng: &mut R) -> u32 {
        rng.random_range(1..=self.sides())
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::D6 => write!(f, "d6"),
            Self::D8 => write!(f, "d8"),
        }
    }
}

/// Cumulative roll counts per face.
///
/// Sparse: a face only has an entry once it has been rolled, and missing
/// faces read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DieStats {
    counts: BTreeMap<u32, u32>,
}

impl DieStats {
    /// Create empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one roll of `face`.
    pub fn record(&mut self, face: u32) {
        *self.counts.entry(face).or_insert(0) += 1;
    }

    /// How many times `face` was rolled.
    pub fn count(&self, face: u32) -> u32 {
        self.counts.get(&face).copied().unwrap_or(0)
    }

    /// Total number of rolls recorded.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Returns true if no roll has been recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Rolled faces with their counts, lowest face first.
    pub fn faces(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.counts.iter().map(|(face, count)| (*face, *count))
    }

    /// The face rolled most often. Ties go to the lowest face.
    pub fn most_common(&self) -> Option<(u32, u32)> {
        self.faces()
            .fold(None, |best: Option<(u32, u32)>, (face, count)| match best {
                Some((_, c)) if c >= count => best,
                _ => Some((face, count)),
            })
    }

    /// The rolled face seen least often. Ties go to the lowest face.
    pub fn least_common(&self) -> Option<(u32, u32)> {
        self.faces()
            .fold(None, |best: Option<(u32, u32)>, (face, count)| match best {
                Some((_, c)) if c <= count => best,
                _ => Some((face, count)),
            })
    }

    /// Share of all rolls that landed on `face`, in percent.
    pub fn percentage(&self, face: u32) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            f64::from(self.count(face)) * 100.0 / f64::from(total)
        }
    }
}
