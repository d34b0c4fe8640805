//! Traversal error types

use thiserror::Error;

use crate::model::NodeKey;
use crate::store::StoreError;

/// Result type for traversal operations.
pub type TraversalResult<T> = Result<T, TraversalError>;

/// Errors raised while walking a fault tree.
#[derive(Debug, Error)]
pub enum TraversalError {
    /// A node's event or father reference did not resolve mid-walk. This is
    /// corrupt model data, never a normal end of chain.
    #[error("dangling reference at node ({node}): {source}")]
    DanglingReference {
        node: NodeKey,
        #[source]
        source: StoreError,
    },
}

impl TraversalError {
    pub fn dangling(node: NodeKey, source: StoreError) -> Self {
        TraversalError::DanglingReference { node, source }
    }
}
