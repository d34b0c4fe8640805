//! Read access to a loaded project model
//!
//! The store holds one consistent snapshot of the model graph; the caller
//! is responsible for fixing that snapshot (one read transaction, one
//! export) before handing it over. All access is read-only and lookups
//! never repair missing references.
//!
//! # Design Principles
//!
//! - Lookups by persisted key, misses are `RISK_RECORD_NOT_FOUND`
//! - Fault-tree nodes live in a flat per-tree arena; father links are
//!   resolved through the gate index, never through owned pointers
//! - Integrity is validated once at load time, not on every read

mod errors;
mod loader;
mod memory;
mod snapshot;
mod validator;

pub use errors::{StoreError, StoreErrorCode, StoreResult};
pub use loader::SnapshotLoader;
pub use memory::ProjectStore;
pub use snapshot::ProjectSnapshot;
pub use validator::{IntegrityViolation, ModelValidator, ViolationKind};

use crate::model::{Event, FaultTreeNode, NodeKey, Param};

/// The read interface the traversal and resolution utilities consume.
pub trait ModelReader {
    /// Looks up an event by `(kind code, num)`.
    fn event(&self, kind: i16, num: i32) -> StoreResult<&Event>;

    /// Looks up a node placement by its composite key.
    fn node(&self, key: &NodeKey) -> StoreResult<&FaultTreeNode>;

    /// Resolves a node's father placement.
    ///
    /// Returns `Ok(None)` only for the tree's top node. A father gate that
    /// cannot be resolved is an error, never a silent end of chain.
    fn father<'a>(&'a self, node: &FaultTreeNode) -> StoreResult<Option<&'a FaultTreeNode>>;

    /// Looks up a parameter by `(kind code, num)`.
    fn param(&self, kind: i16, num: i32) -> StoreResult<&Param>;
}
