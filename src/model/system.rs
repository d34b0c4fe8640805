//! Systems, components, and their cross-reference records
//!
//! Systems group the components of one plant system and point at the fault
//! trees and top gates that model it. The links are plain records, as in
//! the database's association tables.

use serde::{Deserialize, Serialize};

use super::audit::AuditTrail;

/// A plant system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct System {
    pub kind: i16,
    pub num: i32,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<i16>,
    #[serde(default)]
    pub audit: AuditTrail,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<bool>,
}

/// A piece of equipment grouping several basic events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub kind: i16,
    pub num: i32,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<i16>,
    #[serde(default)]
    pub audit: AuditTrail,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<bool>,
}

/// System ↔ component link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SysComponent {
    pub system: i32,
    pub component: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<bool>,
}

/// System ↔ fault-tree link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SysFaultTree {
    pub system: i32,
    pub tree: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<bool>,
}

/// System ↔ top-gate link (gate event number).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SysTopGate {
    pub system: i32,
    pub gate: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<bool>,
}
