//! Referential-integrity validation
//!
//! Run once over a freshly built store, before anything traverses it.
//! The traversal code assumes a consistent snapshot (resolvable event
//! references, a single top node, an acyclic father graph); this pass is
//! where those assumptions are enforced. Violations are reported, never
//! patched.

use std::fmt;

use super::errors::{StoreError, StoreResult};
use super::memory::ProjectStore;
use crate::catalog::RecordCatalog;
use crate::model::FaultTree;

/// What a violation is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// A node references an event that is not in the store
    MissingEvent,
    /// A node's record type is not a registered event kind
    UnknownRecordKind,
    /// A tree has no node without a father gate
    NoTopNode,
    /// A tree has more than one node without a father gate
    MultipleTopNodes,
    /// A father gate number has no placement in its tree
    MissingFatherGate,
    /// Following father links loops instead of reaching the top
    FatherCycle,
    /// A CCF membership record points at a missing event
    MissingCcfMemberEvent,
    /// A system link points at a missing record
    MissingSystemTarget,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::MissingEvent => "missing_event",
            ViolationKind::UnknownRecordKind => "unknown_record_kind",
            ViolationKind::NoTopNode => "no_top_node",
            ViolationKind::MultipleTopNodes => "multiple_top_nodes",
            ViolationKind::MissingFatherGate => "missing_father_gate",
            ViolationKind::FatherCycle => "father_cycle",
            ViolationKind::MissingCcfMemberEvent => "missing_ccf_member_event",
            ViolationKind::MissingSystemTarget => "missing_system_target",
        }
    }
}

/// One integrity violation with its offending key.
#[derive(Debug, Clone)]
pub struct IntegrityViolation {
    pub kind: ViolationKind,
    pub message: String,
}

impl fmt::Display for IntegrityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.as_str(), self.message)
    }
}

/// Integrity pass over one store.
pub struct ModelValidator<'a> {
    store: &'a ProjectStore,
    catalog: &'a RecordCatalog,
}

impl<'a> ModelValidator<'a> {
    pub fn new(store: &'a ProjectStore, catalog: &'a RecordCatalog) -> Self {
        Self { store, catalog }
    }

    /// Collects every violation in the store.
    pub fn violations(&self) -> Vec<IntegrityViolation> {
        let mut violations = Vec::new();

        for tree in self.store.fault_trees() {
            self.check_tree(tree, &mut violations);
        }
        self.check_ccf_members(&mut violations);
        self.check_system_links(&mut violations);

        violations
    }

    /// Fails with `RISK_MODEL_INTEGRITY` if any violation exists.
    pub fn validate(&self) -> StoreResult<()> {
        let violations = self.violations();
        match violations.first() {
            None => Ok(()),
            Some(first) => Err(StoreError::integrity(violations.len(), first)),
        }
    }

    fn check_tree(&self, tree: &FaultTree, violations: &mut Vec<IntegrityViolation>) {
        let mut top_count = 0usize;

        for node in &tree.nodes {
            if !self.catalog.is_event_kind(node.rec_type) {
                violations.push(IntegrityViolation {
                    kind: ViolationKind::UnknownRecordKind,
                    message: format!("node {} has record type {}", node.key(), node.rec_type),
                });
            } else if !self.store.has_event(node.rec_type, node.rec_num) {
                violations.push(IntegrityViolation {
                    kind: ViolationKind::MissingEvent,
                    message: format!("node {} references a missing event", node.key()),
                });
            }

            if node.is_top() {
                top_count += 1;
            } else if self.store.gate_node(tree.num, node.father_gate).is_err() {
                violations.push(IntegrityViolation {
                    kind: ViolationKind::MissingFatherGate,
                    message: format!(
                        "node {} has father gate {} with no placement",
                        node.key(),
                        node.father_gate
                    ),
                });
            }
        }

        match top_count {
            0 if !tree.nodes.is_empty() => violations.push(IntegrityViolation {
                kind: ViolationKind::NoTopNode,
                message: format!("tree {} has no top node", tree.num),
            }),
            0 | 1 => {}
            n => violations.push(IntegrityViolation {
                kind: ViolationKind::MultipleTopNodes,
                message: format!("tree {} has {} top nodes", tree.num, n),
            }),
        }

        self.check_acyclic(tree, violations);
    }

    /// Every father chain must reach the top within the node count; a
    /// longer walk can only mean a loop among the gate placements.
    fn check_acyclic(&self, tree: &FaultTree, violations: &mut Vec<IntegrityViolation>) {
        let budget = tree.nodes.len();

        for node in &tree.nodes {
            let mut current = node;
            let mut hops = 0usize;

            while !current.is_top() {
                match self.store.gate_node(tree.num, current.father_gate) {
                    Ok(father) => current = father,
                    // reported as MissingFatherGate above
                    Err(_) => break,
                }
                hops += 1;
                if hops > budget {
                    violations.push(IntegrityViolation {
                        kind: ViolationKind::FatherCycle,
                        message: format!(
                            "father chain from node {} does not reach a top node",
                            node.key()
                        ),
                    });
                    return;
                }
            }
        }
    }

    fn check_ccf_members(&self, violations: &mut Vec<IntegrityViolation>) {
        for member in self.store.ccf_members() {
            if !self.store.has_event(member.event_type, member.event_num) {
                violations.push(IntegrityViolation {
                    kind: ViolationKind::MissingCcfMemberEvent,
                    message: format!(
                        "ccf group {} member ({}, {}) is missing",
                        member.group_num, member.event_type, member.event_num
                    ),
                });
            }
        }
    }

    fn check_system_links(&self, violations: &mut Vec<IntegrityViolation>) {
        for link in self.store.sys_components() {
            if self.store.system(link.system).is_err() {
                violations.push(missing_target("system", link.system));
            }
            if self.store.component(link.component).is_err() {
                violations.push(missing_target("component", link.component));
            }
        }
        for link in self.store.sys_fault_trees() {
            if self.store.system(link.system).is_err() {
                violations.push(missing_target("system", link.system));
            }
            if self.store.fault_tree(link.tree).is_err() {
                violations.push(missing_target("fault tree", link.tree));
            }
        }
        for link in self.store.sys_top_gates() {
            if self.store.system(link.system).is_err() {
                violations.push(missing_target("system", link.system));
            }
            if !self
                .store
                .has_event(crate::model::EventKind::Gate.code(), link.gate)
            {
                violations.push(missing_target("top gate", link.gate));
            }
        }
    }
}

fn missing_target(target: &str, num: i32) -> IntegrityViolation {
    IntegrityViolation {
        kind: ViolationKind::MissingSystemTarget,
        message: format!("system link points at missing {} {}", target, num),
    }
}
