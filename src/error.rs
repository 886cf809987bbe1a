//! Error types for rewriting, interpretation and configuration.

use thiserror::Error;

/// Errors produced by the grammar engine, the turtle interpreter, or config loading.
#[derive(Debug, Error)]
pub enum LSystemError {
    /// The string being built would grow past the configured maximum length.
    #[error("grammar expansion exceeded limit of {limit} characters at generation {generation}")]
    ExpansionLimit { generation: usize, limit: usize },

    /// A `Pop` was encountered with nothing on the stack (only raised under [`UnmatchedPop::Error`]).
    ///
    /// [`UnmatchedPop::Error`]: crate::interpreter::UnmatchedPop::Error
    #[error("unmatched pop at character index {index}")]
    UnmatchedPop { index: usize },

    /// A `Push` would grow the turtle stack past its configured depth.
    #[error("turtle stack overflow at character index {index}: maximum depth is {max_depth}")]
    StackOverflow { index: usize, max_depth: usize },

    /// A character was declared as both a variable and a constant.
    #[error("character '{0}' is declared as both a variable and a constant")]
    OverlappingClasses(char),

    /// The axiom was empty.
    #[error("axiom must not be empty")]
    EmptyAxiom,

    /// A turn command carried a NaN or infinite angle.
    #[error("symbol '{key}' has a non-finite turn angle")]
    InvalidAngle { key: char },

    /// The turtle step length was zero, negative, or non-finite.
    #[error("step length must be positive and finite, got {0}")]
    InvalidStepLength(f32),

    /// The config document could not be parsed.
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    /// The config document could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used by every fallible API in this crate.
pub type Result<T> = std::result::Result<T, LSystemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion_limit_names_limit_and_generation() {
        let err = LSystemError::ExpansionLimit {
            generation: 7,
            limit: 4096,
        };
        let msg = format!("{err}");
        assert!(msg.contains("exceeded limit"), "missing phrase in: {msg}");
        assert!(msg.contains("4096"), "missing limit in: {msg}");
        assert!(msg.contains('7'), "missing generation in: {msg}");
    }

    #[test]
    fn unmatched_pop_includes_index() {
        let msg = format!("{}", LSystemError::UnmatchedPop { index: 12 });
        assert!(msg.contains("12"), "missing index in: {msg}");
    }

    #[test]
    fn overlapping_classes_includes_character() {
        let msg = format!("{}", LSystemError::OverlappingClasses('F'));
        assert!(msg.contains("'F'"), "missing character in: {msg}");
    }

    #[test]
    fn config_error_wraps_serde_json() {
        let parse = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: LSystemError = parse.into();
        assert!(matches!(err, LSystemError::Config(_)));
    }

    #[test]
    fn lsystem_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LSystemError>();
    }
}
