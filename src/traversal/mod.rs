//! Fault-tree traversal utilities
//!
//! Pure read walks over an already loaded store. Traversal assumes the
//! integrity pass has run: the father graph is acyclic and every chain
//! reaches a top node.

mod errors;
mod or_chain;

pub use errors::{TraversalError, TraversalResult};
pub use or_chain::find_or_chain_top;
