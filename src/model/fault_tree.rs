//! Fault trees and their node placements
//!
//! A fault tree owns a set of nodes; each node places one event inside the
//! tree's hierarchy. Father links are stored as the gate number of the node
//! above, not as owned pointers: node graphs are resolved through the store's
//! gate index.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::audit::AuditTrail;
use super::event::EventKey;

/// Discriminator for the fault-tree hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub enum FaultTreeKind {
    /// Ordinary, hand-built fault tree
    Common,
    /// Fault tree generated when a CCF group is expanded
    Ccf,
}

impl FaultTreeKind {
    pub const ALL: [FaultTreeKind; 2] = [FaultTreeKind::Common, FaultTreeKind::Ccf];

    /// The persisted discriminator code.
    pub const fn code(self) -> i16 {
        match self {
            FaultTreeKind::Common => 3,
            FaultTreeKind::Ccf => 4,
        }
    }

    pub fn from_code(code: i16) -> Option<FaultTreeKind> {
        FaultTreeKind::ALL.into_iter().find(|kind| kind.code() == code)
    }

    pub const fn class_name(self) -> &'static str {
        match self {
            FaultTreeKind::Common => "CommonFaultTrees",
            FaultTreeKind::Ccf => "CcfFaultTrees",
        }
    }
}

impl TryFrom<i16> for FaultTreeKind {
    type Error = String;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        FaultTreeKind::from_code(code)
            .ok_or_else(|| format!("unknown fault tree kind code {}", code))
    }
}

impl From<FaultTreeKind> for i16 {
    fn from(kind: FaultTreeKind) -> i16 {
        kind.code()
    }
}

/// Transfer marker on a node. Yes means the subtree continues in another
/// fault tree and upward traversal must stop here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub enum Transfer {
    Yes,
    Not,
}

impl Transfer {
    /// The persisted transfer code.
    pub const fn code(self) -> i16 {
        match self {
            Transfer::Yes => -1,
            Transfer::Not => 0,
        }
    }

    pub fn from_code(code: i16) -> Option<Transfer> {
        match code {
            -1 => Some(Transfer::Yes),
            0 => Some(Transfer::Not),
            _ => None,
        }
    }
}

impl TryFrom<i16> for Transfer {
    type Error = String;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        Transfer::from_code(code).ok_or_else(|| format!("unknown transfer code {}", code))
    }
}

impl From<Transfer> for i16 {
    fn from(transfer: Transfer) -> i16 {
        transfer.code()
    }
}

/// Composite key of a node placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeKey {
    pub tree: i32,
    pub father_gate: i32,
    pub rec_type: i16,
    pub rec_num: i32,
    pub pos: i16,
    pub level: i16,
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tree {} father {} rec {}/{} pos {} level {}",
            self.tree, self.father_gate, self.rec_type, self.rec_num, self.pos, self.level
        )
    }
}

/// One placement of an event inside one fault tree.
///
/// `father_gate` holds the gate number of the node above; 0 marks the top
/// of the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaultTreeNode {
    pub tree: i32,
    pub father_gate: i32,
    pub rec_type: i16,
    pub rec_num: i32,
    pub pos: i16,
    pub level: i16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer: Option<Transfer>,
    #[serde(default)]
    pub negated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<bool>,
}

impl FaultTreeNode {
    pub fn key(&self) -> NodeKey {
        NodeKey {
            tree: self.tree,
            father_gate: self.father_gate,
            rec_type: self.rec_type,
            rec_num: self.rec_num,
            pos: self.pos,
            level: self.level,
        }
    }

    /// Key of the event this node places.
    pub fn event_key(&self) -> EventKey {
        (self.rec_type, self.rec_num)
    }

    /// The tree's top node carries no father gate.
    pub fn is_top(&self) -> bool {
        self.father_gate == 0
    }

    /// True only for an explicit transfer marker; an unset flag is not a
    /// boundary.
    pub fn is_transfer(&self) -> bool {
        self.transfer == Some(Transfer::Yes)
    }
}

/// A named fault tree and its nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaultTree {
    pub kind: FaultTreeKind,
    pub num: i32,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<i16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<i16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_positioned: Option<i16>,
    #[serde(default)]
    pub audit: AuditTrail,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<bool>,
    #[serde(default)]
    pub nodes: Vec<FaultTreeNode>,
}
