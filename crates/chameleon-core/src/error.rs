//! Error types for the Chameleon engine.

use thiserror::Error;

/// Result type for engine operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while building or using a game session.
///
/// With the built-in catalog none of these are reachable at runtime; they
/// guard custom catalogs and the start-up validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// The catalog has no topics to pick from.
    #[error("catalog contains no topics")]
    EmptyCatalog,

    /// A topic cannot fill the grid without repeating items.
    #[error("topic '{topic}' has only {len} items, need at least {needed}")]
    TopicTooSmall {
        /// Name of the offending topic.
        topic: String,
        /// Number of items the topic has.
        len: usize,
        /// Number of items a grid needs.
        needed: usize,
    },

    /// A topic lists the same item twice.
    #[error("topic '{topic}' lists '{item}' more than once")]
    DuplicateItem {
        /// Name of the offending topic.
        topic: String,
        /// The repeated item.
        item: String,
    },
}
