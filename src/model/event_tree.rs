//! Event trees, their node graph, and accident sequences
//!
//! Event-tree nodes form a father-linked graph between the functional
//! events of a tree; sequences are the end states it enumerates. Only the
//! data model is carried here; sequence propagation belongs to the
//! quantification tooling outside this crate.

use serde::{Deserialize, Serialize};

use super::audit::AuditTrail;

/// A node in an event tree's branch graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EtNode {
    pub tree: i32,
    pub num: i16,
    /// Father node number; unset for the root column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub father: Option<i16>,
    pub h_pos: i16,
    pub v_pos: i16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<i16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<bool>,
}

/// A named event tree and its nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTree {
    /// Persisted record-type code; kept raw, the event-tree family is not
    /// polymorphic in this crate.
    pub kind: i16,
    pub num: i32,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<i16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<i16>,
    #[serde(default)]
    pub audit: AuditTrail,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<bool>,
    #[serde(default)]
    pub nodes: Vec<EtNode>,
}

/// An accident sequence produced by an event tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    pub kind: i16,
    pub num: i32,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<i16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calc_type: Option<i16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
    #[serde(default)]
    pub audit: AuditTrail,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<bool>,
}
