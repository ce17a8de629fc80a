//! The built-in topic catalog.
//!
//! Each topic maps a category name to the words that can appear on the grid
//! for it. Every list must hold at least [`GRID_CELLS`] distinct items so a
//! full grid can be dealt without repeats.

use std::collections::HashSet;

use crate::error::{GameError, GameResult};

/// Number of rows (and columns) in the grid.
pub const GRID_SIDE: usize = 4;

/// Number of cells in the grid.
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;

/// A named category with its candidate items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    /// Display name of the topic.
    pub name: &'static str,
    /// Candidate items, in catalog order.
    pub items: &'static [&'static str],
}

/// An immutable, ordered collection of topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    topics: &'static [Topic],
}

impl Catalog {
    /// The catalog shipped with the game.
    pub fn builtin() -> Self {
        Self { topics: BUILTIN }
    }

    /// Build a catalog from a custom topic table.
    pub fn from_topics(topics: &'static [Topic]) -> Self {
        Self { topics }
    }

    /// All topics in catalog order.
    pub fn all_topics(&self) -> &'static [Topic] {
        self.topics
    }

    /// Look up a topic by its exact name.
    pub fn get(&self, name: &str) -> Option<&'static Topic> {
        self.topics.iter().find(|t| t.name == name)
    }

    /// Number of topics.
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Returns true if the catalog has no topics.
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Check that every topic can fill a grid with distinct items.
    pub fn validate(&self) -> GameResult<()> {
        if self.topics.is_empty() {
            return Err(GameError::EmptyCatalog);
        }

        for topic in self.topics {
            let mut seen = HashSet::with_capacity(topic.items.len());
            for item in topic.items {
                if !seen.insert(*item) {
                    return Err(GameError::DuplicateItem {
                        topic: topic.name.to_string(),
                        item: item.to_string(),
                    });
                }
            }
            if topic.items.len() < GRID_CELLS {
                return Err(GameError::TopicTooSmall {
                    topic: topic.name.to_string(),
                    len: topic.items.len(),
                    needed: GRID_CELLS,
                });
            }
        }

        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

static BUILTIN: &[Topic] = &[
    Topic {
        name: "Games",
        items: &[
            "Chess",
            "Checkers",
            "Monopoly",
            "Scrabble",
            "Poker",
            "Bridge",
            "Backgammon",
            "Go",
            "Risk",
            "Cluedo",
            "Jenga",
            "Twister",
            "Battleship",
            "Mahjong",
            "Dominoes",
            "Pictionary",
            "Catan",
            "Uno",
            "Charades",
            "Solitaire",
        ],
    },
    Topic {
        name: "Video Games",
        items: &[
            "Tetris",
            "Pac-Man",
            "Minecraft",
            "Fortnite",
            "Zelda",
            "Mario Kart",
            "Pokemon",
            "Sonic",
            "Halo",
            "The Sims",
            "Doom",
            "Street Fighter",
            "Portal",
            "Skyrim",
            "Among Us",
            "Space Invaders",
            "Overwatch",
            "Animal Crossing",
            "Half-Life",
            "Donkey Kong",
        ],
    },
    Topic {
        name: "Food",
        items: &[
            "Pizza",
            "Sushi",
            "Burger",
            "Pasta",
            "Tacos",
            "Curry",
            "Salad",
            "Steak",
            "Pancakes",
            "Soup",
            "Sandwich",
            "Dumplings",
            "Lasagne",
            "Paella",
            "Omelette",
            "Risotto",
            "Kebab",
            "Burrito",
            "Ramen",
            "Fish and Chips",
        ],
    },
    Topic {
        name: "Movies",
        items: &[
            "Titanic",
            "Jaws",
            "Casablanca",
            "Star Wars",
            "The Matrix",
            "Jurassic Park",
            "Frozen",
            "Psycho",
            "Rocky",
            "Inception",
            "Shrek",
            "Alien",
            "Grease",
            "Gladiator",
            "Ghostbusters",
            "Toy Story",
            "Avatar",
            "Vertigo",
        ],
    },
    Topic {
        name: "Animals",
        items: &[
            "Lion",
            "Elephant",
            "Giraffe",
            "Penguin",
            "Dolphin",
            "Kangaroo",
            "Owl",
            "Snake",
            "Shark",
            "Zebra",
            "Koala",
            "Tiger",
            "Octopus",
            "Camel",
            "Gorilla",
            "Flamingo",
            "Wolf",
            "Tortoise",
        ],
    },
    Topic {
        name: "Sports",
        items: &[
            "Football",
            "Tennis",
            "Golf",
            "Basketball",
            "Cricket",
            "Rugby",
            "Baseball",
            "Boxing",
            "Swimming",
            "Cycling",
            "Skiing",
            "Surfing",
            "Fencing",
            "Archery",
            "Volleyball",
            "Ice Hockey",
            "Rowing",
            "Judo",
        ],
    },
    Topic {
        name: "Music Genres",
        items: &[
            "Rock",
            "Jazz",
            "Blues",
            "Reggae",
            "Hip Hop",
            "Classical",
            "Country",
            "Punk",
            "Metal",
            "Disco",
            "Techno",
            "Opera",
            "Soul",
            "Funk",
            "Folk",
            "Gospel",
            "Salsa",
            "K-Pop",
        ],
    },
    Topic {
        name: "Jobs",
        items: &[
            "Doctor",
            "Teacher",
            "Pilot",
            "Chef",
            "Farmer",
            "Lawyer",
            "Plumber",
            "Nurse",
            "Firefighter",
            "Astronaut",
            "Architect",
            "Dentist",
            "Journalist",
            "Electrician",
            "Librarian",
            "Detective",
            "Baker",
            "Mechanic",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    static TINY: &[Topic] = &[Topic {
        name: "Tiny",
        items: &["a", "b", "c"],
    }];

    static REPEATS: &[Topic] = &[Topic {
        name: "Repeats",
        items: &[
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "a",
        ],
    }];

    #[test]
    fn builtin_is_valid() {
        assert_eq!(Catalog::builtin().validate(), Ok(()));
    }

    #[test]
    fn every_topic_fills_a_grid() {
        for topic in Catalog::builtin().all_topics() {
            assert!(
                topic.items.len() >= GRID_CELLS,
                "topic {} has only {} items",
                topic.name,
                topic.items.len()
            );
        }
    }

    #[test]
    fn items_are_unique_within_topic() {
        for topic in Catalog::builtin().all_topics() {
            let unique: HashSet<_> = topic.items.iter().collect();
            assert_eq!(unique.len(), topic.items.len(), "duplicates in {}", topic.name);
        }
    }

    #[test]
    fn has_core_topics() {
        let catalog = Catalog::builtin();
        assert!(catalog.len() >= 3);
        for name in ["Games", "Video Games", "Food"] {
            assert!(catalog.get(name).is_some(), "missing topic {name}");
        }
    }

    #[test]
    fn get_unknown_topic() {
        assert!(Catalog::builtin().get("Planets").is_none());
    }

    #[test]
    fn empty_catalog_is_invalid() {
        let catalog = Catalog::from_topics(&[]);
        assert!(catalog.is_empty());
        assert_eq!(catalog.validate(), Err(GameError::EmptyCatalog));
    }

    #[test]
    fn small_topic_is_invalid() {
        let err = Catalog::from_topics(TINY).validate().unwrap_err();
        assert_eq!(
            err,
            GameError::TopicTooSmall {
                topic: "Tiny".to_string(),
                len: 3,
                needed: GRID_CELLS,
            }
        );
    }

    #[test]
    fn duplicate_item_is_invalid() {
        let err = Catalog::from_topics(REPEATS).validate().unwrap_err();
        assert_eq!(
            err,
            GameError::DuplicateItem {
                topic: "Repeats".to_string(),
                item: "a".to_string(),
            }
        );
    }
}
