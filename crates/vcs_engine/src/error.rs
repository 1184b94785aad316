//! Unified error types for vcs_engine

use thiserror::Error;

use crate::PlayfieldId;

/// Main error type for playfield and editor operations
#[derive(Debug, Error)]
pub enum EngineError {
    // === Validation Errors ===
    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("Invalid register {register}, expected 0..=2")]
    InvalidRegister { register: usize },

    #[error("Expected exactly 3 register modes, got {len}")]
    RegisterCountMismatch { len: usize },

    #[error("Playfield height must be positive")]
    InvalidHeight,

    #[error("Data size mismatch: expected {expected} rows, got {actual}")]
    DataSizeMismatch { expected: usize, actual: usize },

    #[error("Row {row} has {actual} columns, expected {expected}")]
    RowWidthMismatch { row: usize, expected: usize, actual: usize },

    #[error("Invalid pixel value {value} at ({x}, {y}), expected 0 or 1")]
    InvalidPixelValue { x: usize, y: usize, value: u8 },

    #[error("Unknown playfield mode: {value}")]
    UnknownPlayfieldMode { value: String },

    #[error("Unknown register mode: {value}")]
    UnknownRegisterMode { value: String },

    #[error("Unknown draw mode: {value}")]
    UnknownDrawMode { value: String },

    // === Editor Errors ===
    #[error("Operation not allowed while a stroke is in progress")]
    StrokeInProgress,

    #[error("Playfield {id} not found")]
    UnknownPlayfield { id: PlayfieldId },

    #[error("Map index {idx} out of range (0..{len})")]
    MapIndexOutOfRange { idx: usize, len: usize },

    #[error("No playfield ids left after {last}")]
    IdSpaceExhausted { last: PlayfieldId },

    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Result type alias for vcs_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

// === Convenience constructors ===
impl EngineError {
    /// Create a validation error with a free-form message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation { message: msg.into() }
    }

    /// Create a serialization error from any displayable type
    pub fn serialization(msg: impl std::fmt::Display) -> Self {
        Self::Serialization { message: msg.to_string() }
    }

    /// True for every error raised by argument validation.
    ///
    /// Callers use this to tell malformed input apart from editor state
    /// conflicts and I/O failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::InvalidRegister { .. }
                | Self::RegisterCountMismatch { .. }
                | Self::InvalidHeight
                | Self::DataSizeMismatch { .. }
                | Self::RowWidthMismatch { .. }
                | Self::InvalidPixelValue { .. }
                | Self::UnknownPlayfieldMode { .. }
                | Self::UnknownRegisterMode { .. }
                | Self::UnknownDrawMode { .. }
        )
    }
}
