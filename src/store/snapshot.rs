//! Project snapshot: the serialized form of a whole model
//!
//! A snapshot is the flat record lists of one project export. Every list
//! defaults to empty so partial snapshots (a single fault tree, a
//! parameter library) parse without ceremony.

use serde::{Deserialize, Serialize};

use crate::model::{
    CcfGroup, CcfMember, Component, Event, EventTree, FaultTree, Param, Sequence, SysComponent,
    SysFaultTree, SysTopGate, System, User,
};

/// The serialized project model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<Event>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Param>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fault_trees: Vec<FaultTree>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub event_trees: Vec<EventTree>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sequences: Vec<Sequence>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ccf_groups: Vec<CcfGroup>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ccf_members: Vec<CcfMember>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub systems: Vec<System>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sys_components: Vec<SysComponent>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sys_fault_trees: Vec<SysFaultTree>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sys_top_gates: Vec<SysTopGate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<User>,
}

impl ProjectSnapshot {
    /// Total record count across all lists, for load-time logging.
    pub fn record_count(&self) -> usize {
        self.events.len()
            + self.params.len()
            + self.fault_trees.len()
            + self.fault_trees.iter().map(|t| t.nodes.len()).sum::<usize>()
            + self.event_trees.len()
            + self.event_trees.iter().map(|t| t.nodes.len()).sum::<usize>()
            + self.sequences.len()
            + self.ccf_groups.len()
            + self.ccf_members.len()
            + self.systems.len()
            + self.components.len()
            + self.sys_components.len()
            + self.sys_fault_trees.len()
            + self.sys_top_gates.len()
            + self.users.len()
    }
}
