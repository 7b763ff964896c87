//! Structured error types for stickygrid.
//!
//! The engine itself is pure and never fails at runtime; errors exist only
//! at the configuration boundary, where host-supplied counts and sizes are
//! vetted before any geometry is built.

/// All errors that can occur when validating grid inputs.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// An item size was zero, negative, or non-finite.
    #[error("item size at index {index} must be positive and finite, got {size}")]
    Size {
        /// Index the offending size was reported for.
        index: usize,
        /// The offending size value.
        size: f32,
    },

    /// A grid configuration field was out of contract.
    #[error("invalid grid config: {0}")]
    Config(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;
