//! The session engine.
//!
//! `ChameleonGame` owns the session state and the random source. It deals a
//! topic and its grid, reshuffles on request and rolls the coordinate dice,
//! keeping per-face statistics as it goes.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use tracing::{debug, info};

use crate::catalog::{Catalog, GRID_CELLS};
use crate::config::GameConfig;
use crate::dice::Die;
use crate::error::{GameError, GameResult};
use crate::state::SessionState;

/// A single game session.
pub struct ChameleonGame {
    catalog: Catalog,
    state: SessionState,
    rng: StdRng,
}

impl ChameleonGame {
    /// Start a session over the built-in catalog.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        Self::with_catalog(Catalog::builtin(), config)
    }

    /// Start a session over a custom catalog.
    ///
    /// The first topic and grid are dealt immediately; dice and statistics
    /// start at their defaults.
    pub fn with_catalog(catalog: Catalog, config: GameConfig) -> GameResult<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut game = Self {
            catalog,
            state: SessionState::default(),
            rng,
        };

        let (topic, items) = game.select_random_topic_and_items()?;
        game.state.current_topic = topic;
        game.state.current_items = items;

        info!(
            topic = %game.state.current_topic,
            seed = ?config.seed,
            "session started"
        );
        Ok(game)
    }

    /// The catalog this session deals from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Pick a topic uniformly and sixteen distinct items from it.
    ///
    /// The items come back in random order; that order is the grid layout.
    /// Does not touch the session state.
    pub fn select_random_topic_and_items(&mut self) -> GameResult<(String, Vec<String>)> {
        let topic = self
            .catalog
            .all_topics()
            .choose(&mut self.rng)
            .ok_or(GameError::EmptyCatalog)?;

        if topic.items.len() < GRID_CELLS {
            return Err(GameError::TopicTooSmall {
                topic: topic.name.to_string(),
                len: topic.items.len(),
                needed: GRID_CELLS,
            });
        }

        let mut items: Vec<String> = topic
            .items
            .choose_multiple(&mut self.rng, GRID_CELLS)
            .map(|item| item.to_string())
            .collect();
        items.shuffle(&mut self.rng);

        debug!(topic = topic.name, "selected topic");
        Ok((topic.name.to_string(), items))
    }

    /// Deal a fresh topic and grid. May land on the same topic again.
    pub fn reshuffle_topic(&mut self) -> GameResult<()> {
        let (topic, items) = self.select_random_topic_and_items()?;
        self.state.current_topic = topic;
        self.state.current_items = items;
        self.state.reshuffles += 1;
        debug!(
            topic = %self.state.current_topic,
            reshuffles = self.state.reshuffles,
            "reshuffled topic"
        );
        Ok(())
    }

    /// Roll `die`, store the face and count it.
    pub fn roll(&mut self, die: Die) -> u32 {
        let face = die.roll(&mut self.rng);
        self.state.record_roll(die, face);
        debug!(%die, face, "rolled");
        face
    }

    /// Roll the six-sided die.
    pub fn roll_d6(&mut self) -> u32 {
        self.roll(Die::D6)
    }

    /// Roll the eight-sided die.
    pub fn roll_d8(&mut self) -> u32 {
        self.roll(Die::D8)
    }

    /// Roll both dice, d6 first, and return `(d6, d8)`.
    pub fn roll_both_dice(&mut self) -> (u32, u32) {
        let d6 = self.roll_d6();
        let d8 = self.roll_d8();
        (d6, d8)
    }
}
