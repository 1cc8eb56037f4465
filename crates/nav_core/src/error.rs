use thiserror::Error;

/// Errors reported by graph construction and route queries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("location index {index} out of range (graph has {len} locations)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("location name `{0}` already exists")]
    DuplicateName(String),

    #[error("unknown location name `{0}`")]
    UnknownName(String),

    #[error("edge weight must be a positive number of meters")]
    NonPositiveWeight,

    /// Two consecutive locations on a reconstructed route have no
    /// connecting edge. Indicates a corrupted graph, not bad input.
    #[error("no edge between locations {from} and {to} on reconstructed route")]
    MissingStepEdge { from: usize, to: usize },
}
