use thiserror::Error;

/// Result type alias for edit script operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while linearizing, comparing or serializing trees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A tree with no nodes was given where at least one is required.
    #[error("tree has no nodes")]
    EmptyTree,

    /// The requested comparison mode is not supported.
    #[error("unsupported comparison mode `{0}`")]
    InvalidMode(String),

    /// A node lacks a field the active comparison mode relies on.
    #[error("malformed node at position {position}: {reason}")]
    MalformedNode {
        /// Pre-order position of the offending node.
        position: usize,
        /// What is missing.
        reason: String,
    },

    /// The document could not be linearized.
    #[error("XML parse error: {0}")]
    Parse(String),

    /// The node sequence could not be rebuilt into a document.
    #[error("serialize error: {0}")]
    Serialize(String),
}
