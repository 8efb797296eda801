//! Error types for enemy and level data loading.

use thiserror::Error;

/// Errors that can occur when loading enemy or level data.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// Enemy stats the state machine cannot run with.
    #[error("Invalid stats for '{name}': {details}")]
    InvalidStats { name: String, details: String },

    /// Level references an enemy type with no definition.
    #[error("Unknown enemy type '{enemy_type}' in level '{level}'")]
    UnknownEnemyType { enemy_type: String, level: String },
}
