//! Error types for trace generation
//!
//! [`TraceError`] covers everything that can go wrong between picking an
//! algorithm and holding a finished trace: a descriptor handed input of the
//! wrong shape, input outside the range an algorithm supports, or a registry
//! built from malformed descriptors.
//!
//! Stepping past either end of a trace is not an error; playback clamps instead.

/// Errors raised while registering algorithms or recording a trace
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraceError {
    /// The input variant does not match what the algorithm's category expects
    #[error("{algorithm} expects {expected} input, got {got}")]
    InputMismatch {
        algorithm: String,
        expected: &'static str,
        got: &'static str,
    },

    /// The input has the right shape but an unusable value
    #[error("invalid input for {algorithm}: {message}")]
    InvalidInput { algorithm: String, message: String },

    /// A counting-based sort would need an unreasonably large count array
    #[error("{algorithm}: key range {range} exceeds limit {limit}")]
    RangeTooLarge {
        algorithm: String,
        range: u64,
        limit: u64,
    },

    /// Registry construction found a malformed descriptor
    #[error("invalid descriptor '{name}': {message}")]
    InvalidDescriptor { name: String, message: String },

    /// No registered algorithm has this name
    #[error("unknown algorithm '{0}'")]
    UnknownAlgorithm(String),
}

/// Errors raised while loading a configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A range whose lower bound exceeds its upper bound, or an empty coin set
    #[error("invalid config value for {field}: {message}")]
    Invalid { field: &'static str, message: String },
}
