//! Error type for chain construction and invocation.

use thiserror::Error;

/// Errors surfaced by a [`Chain`](crate::Chain) or raised by its callables.
///
/// The chain itself only produces [`EmptyChain`](ChainError::EmptyChain),
/// [`TooDeep`](ChainError::TooDeep) and [`Config`](ChainError::Config).
/// Anything a callable returns passes through `invoke` untouched.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ChainError {
    /// `wrap_bottom` needs at least one unit to append after.
    #[error("cannot append to an empty chain")]
    EmptyChain,

    /// The depth guard stopped a follow-on from running.
    #[error("chain too deep: depth limit of {limit} units reached")]
    TooDeep {
        /// The configured `max_depth`.
        limit: usize,
    },

    /// A chain configuration could not be parsed.
    #[error("invalid chain config: {0}")]
    Config(String),

    /// A callable failed.
    #[error("unit failed: {0}")]
    Failed(String),

    /// Catch-all for callable errors.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}
