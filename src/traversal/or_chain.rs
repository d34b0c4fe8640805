//! Upward walk through pure OR-gate chains
//!
//! Quantification setups treat a run of OR gates as one logical scope: a
//! failure anywhere below propagates unchanged until an AND (or other)
//! gate combines it with something else. This walk finds the top of that
//! scope for a given node.

use crate::model::FaultTreeNode;
use crate::store::ModelReader;

use super::errors::{TraversalError, TraversalResult};

/// Finds the highest ancestor reachable from `node` through OR gates only.
///
/// Returns `Ok(None)` when the starting node is not an OR gate at all,
/// which is different from "chain found at the start node". For an OR
/// node, the walk ascends until one of the stop rules hits and returns
/// that node:
///
/// - the node is a transfer boundary (the subtree continues in another
///   tree, so the chain must not leave it),
/// - the node is the tree's top,
/// - the father is not an OR gate.
///
/// The walk is an explicit loop, so chain depth is bounded by tree size,
/// not stack size. An event or father reference that fails to resolve is a
/// [`TraversalError::DanglingReference`]; data corruption never reads as a
/// chain boundary.
pub fn find_or_chain_top<'a, R: ModelReader>(
    reader: &'a R,
    node: &'a FaultTreeNode,
) -> TraversalResult<Option<&'a FaultTreeNode>> {
    let event = reader
        .event(node.rec_type, node.rec_num)
        .map_err(|e| TraversalError::dangling(node.key(), e))?;
    if !event.is_or_gate() {
        return Ok(None);
    }

    let mut current = node;
    loop {
        if current.is_transfer() || current.is_top() {
            return Ok(Some(current));
        }

        let father = match reader
            .father(current)
            .map_err(|e| TraversalError::dangling(current.key(), e))?
        {
            Some(father) => father,
            None => return Ok(Some(current)),
        };

        let father_event = reader
            .event(father.rec_type, father.rec_num)
            .map_err(|e| TraversalError::dangling(father.key(), e))?;
        if !father_event.is_or_gate() {
            // chain ends one level below the non-OR gate
            return Ok(Some(current));
        }

        current = father;
    }
}
