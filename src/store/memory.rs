//! In-memory project store
//!
//! Records are indexed by their persisted keys. Each fault tree keeps its
//! nodes in the flat vector they arrived in, with side indexes for
//! composite-key and gate-number lookup; father links stay integers until
//! a lookup resolves them.

use std::collections::HashMap;

use super::errors::{StoreError, StoreResult};
use super::snapshot::ProjectSnapshot;
use super::ModelReader;
use crate::model::{
    CcfGroup, CcfMember, Component, Event, EventKey, EventKind, EventTree, FaultTree,
    FaultTreeNode, NodeKey, Param, ParamKey, Sequence, SysComponent, SysFaultTree, SysTopGate,
    System, User,
};

#[derive(Debug)]
struct TreeArena {
    tree: FaultTree,
    by_key: HashMap<NodeKey, usize>,
    /// Gate number -> node index, for father resolution.
    by_gate: HashMap<i32, usize>,
    top: Option<usize>,
}

impl TreeArena {
    fn build(tree: FaultTree) -> StoreResult<Self> {
        let mut by_key = HashMap::with_capacity(tree.nodes.len());
        let mut by_gate = HashMap::new();
        let mut top = None;

        for (index, node) in tree.nodes.iter().enumerate() {
            if by_key.insert(node.key(), index).is_some() {
                return Err(StoreError::duplicate_record("FaultTreeNodes", node.key()));
            }
            if node.rec_type == EventKind::Gate.code() {
                if by_gate.insert(node.rec_num, index).is_some() {
                    return Err(StoreError::duplicate_record(
                        "FaultTreeNodes",
                        format!("gate {} in tree {}", node.rec_num, node.tree),
                    ));
                }
            }
            if node.is_top() && top.is_none() {
                top = Some(index);
            }
        }

        Ok(Self {
            tree,
            by_key,
            by_gate,
            top,
        })
    }
}

/// One loaded, immutable project model.
#[derive(Debug)]
pub struct ProjectStore {
    events: HashMap<EventKey, Event>,
    params: HashMap<ParamKey, Param>,
    trees: HashMap<i32, TreeArena>,
    event_trees: HashMap<i32, EventTree>,
    sequences: HashMap<i32, Sequence>,
    ccf_groups: HashMap<i32, CcfGroup>,
    ccf_members: Vec<CcfMember>,
    systems: HashMap<i32, System>,
    components: HashMap<i32, Component>,
    sys_components: Vec<SysComponent>,
    sys_fault_trees: Vec<SysFaultTree>,
    sys_top_gates: Vec<SysTopGate>,
    users: HashMap<i32, User>,
}

impl ProjectStore {
    /// Builds a store from a snapshot, rejecting duplicate keys.
    ///
    /// Referential integrity is not checked here; run a
    /// [`ModelValidator`](super::ModelValidator) pass (the loader does).
    pub fn from_snapshot(snapshot: ProjectSnapshot) -> StoreResult<Self> {
        let mut events = HashMap::with_capacity(snapshot.events.len());
        for event in snapshot.events {
            let key = event.key();
            if events.insert(key, event).is_some() {
                return Err(StoreError::duplicate_record("Events", format_key(key)));
            }
        }

        let mut params = HashMap::with_capacity(snapshot.params.len());
        for param in snapshot.params {
            let key = param.key();
            if params.insert(key, param).is_some() {
                return Err(StoreError::duplicate_record("Params", format_key(key)));
            }
        }

        let mut trees = HashMap::with_capacity(snapshot.fault_trees.len());
        for tree in snapshot.fault_trees {
            let num = tree.num;
            if trees.insert(num, TreeArena::build(tree)?).is_some() {
                return Err(StoreError::duplicate_record("FaultTrees", num));
            }
        }

        let mut event_trees = HashMap::with_capacity(snapshot.event_trees.len());
        for tree in snapshot.event_trees {
            let num = tree.num;
            if event_trees.insert(num, tree).is_some() {
                return Err(StoreError::duplicate_record("EventTrees", num));
            }
        }

        let mut sequences = HashMap::with_capacity(snapshot.sequences.len());
        for sequence in snapshot.sequences {
            let num = sequence.num;
            if sequences.insert(num, sequence).is_some() {
                return Err(StoreError::duplicate_record("Sequences", num));
            }
        }

        let mut ccf_groups = HashMap::with_capacity(snapshot.ccf_groups.len());
        for group in snapshot.ccf_groups {
            let num = group.num;
            if ccf_groups.insert(num, group).is_some() {
                return Err(StoreError::duplicate_record("CcfGroups", num));
            }
        }

        let mut systems = HashMap::with_capacity(snapshot.systems.len());
        for system in snapshot.systems {
            let num = system.num;
            if systems.insert(num, system).is_some() {
                return Err(StoreError::duplicate_record("Systems", num));
            }
        }

        let mut components = HashMap::with_capacity(snapshot.components.len());
        for component in snapshot.components {
            let num = component.num;
            if components.insert(num, component).is_some() {
                return Err(StoreError::duplicate_record("Components", num));
            }
        }

        let mut users = HashMap::with_capacity(snapshot.users.len());
        for user in snapshot.users {
            let num = user.num;
            if users.insert(num, user).is_some() {
                return Err(StoreError::duplicate_record("Users", num));
            }
        }

        Ok(Self {
            events,
            params,
            trees,
            event_trees,
            sequences,
            ccf_groups,
            ccf_members: snapshot.ccf_members,
            systems,
            components,
            sys_components: snapshot.sys_components,
            sys_fault_trees: snapshot.sys_fault_trees,
            sys_top_gates: snapshot.sys_top_gates,
            users,
        })
    }

    pub fn has_event(&self, kind: i16, num: i32) -> bool {
        self.events.contains_key(&(kind, num))
    }

    pub fn has_param(&self, kind: i16, num: i32) -> bool {
        self.params.contains_key(&(kind, num))
    }

    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.events.values()
    }

    pub fn params(&self) -> impl Iterator<Item = &Param> {
        self.params.values()
    }

    pub fn fault_tree(&self, num: i32) -> StoreResult<&FaultTree> {
        self.trees
            .get(&num)
            .map(|arena| &arena.tree)
            .ok_or_else(|| StoreError::record_not_found("FaultTrees", num))
    }

    pub fn fault_trees(&self) -> impl Iterator<Item = &FaultTree> {
        self.trees.values().map(|arena| &arena.tree)
    }

    /// The tree's single node without a father gate.
    pub fn top_node(&self, tree: i32) -> StoreResult<&FaultTreeNode> {
        let arena = self
            .trees
            .get(&tree)
            .ok_or_else(|| StoreError::record_not_found("FaultTrees", tree))?;
        arena
            .top
            .map(|index| &arena.tree.nodes[index])
            .ok_or_else(|| {
                StoreError::record_not_found("FaultTreeNodes", format!("top of tree {}", tree))
            })
    }

    /// The placement of a gate inside a tree, by gate number.
    pub fn gate_node(&self, tree: i32, gate: i32) -> StoreResult<&FaultTreeNode> {
        let arena = self
            .trees
            .get(&tree)
            .ok_or_else(|| StoreError::record_not_found("FaultTrees", tree))?;
        arena
            .by_gate
            .get(&gate)
            .map(|&index| &arena.tree.nodes[index])
            .ok_or_else(|| {
                StoreError::record_not_found(
                    "FaultTreeNodes",
                    format!("gate {} in tree {}", gate, tree),
                )
            })
    }

    /// Nodes marked as transfer boundaries.
    pub fn transfer_nodes(&self, tree: i32) -> StoreResult<Vec<&FaultTreeNode>> {
        Ok(self
            .fault_tree(tree)?
            .nodes
            .iter()
            .filter(|node| node.is_transfer())
            .collect())
    }

    /// Nodes placing gate events.
    pub fn gate_nodes(&self, tree: i32) -> StoreResult<Vec<&FaultTreeNode>> {
        self.nodes_of_kind(tree, EventKind::Gate)
    }

    /// Nodes placing basic events.
    pub fn basic_event_nodes(&self, tree: i32) -> StoreResult<Vec<&FaultTreeNode>> {
        self.nodes_of_kind(tree, EventKind::BasicEvent)
    }

    fn nodes_of_kind(&self, tree: i32, kind: EventKind) -> StoreResult<Vec<&FaultTreeNode>> {
        Ok(self
            .fault_tree(tree)?
            .nodes
            .iter()
            .filter(|node| node.rec_type == kind.code())
            .collect())
    }

    pub fn event_tree(&self, num: i32) -> StoreResult<&EventTree> {
        self.event_trees
            .get(&num)
            .ok_or_else(|| StoreError::record_not_found("EventTrees", num))
    }

    pub fn event_trees(&self) -> impl Iterator<Item = &EventTree> {
        self.event_trees.values()
    }

    pub fn sequences(&self) -> impl Iterator<Item = &Sequence> {
        self.sequences.values()
    }

    pub fn ccf_group(&self, num: i32) -> StoreResult<&CcfGroup> {
        self.ccf_groups
            .get(&num)
            .ok_or_else(|| StoreError::record_not_found("CcfGroups", num))
    }

    pub fn ccf_groups(&self) -> impl Iterator<Item = &CcfGroup> {
        self.ccf_groups.values()
    }

    /// Membership records of one CCF group.
    pub fn ccf_members_of(&self, group: i32) -> Vec<&CcfMember> {
        self.ccf_members
            .iter()
            .filter(|member| member.group_num == group)
            .collect()
    }

    pub fn ccf_members(&self) -> impl Iterator<Item = &CcfMember> {
        self.ccf_members.iter()
    }

    pub fn system(&self, num: i32) -> StoreResult<&System> {
        self.systems
            .get(&num)
            .ok_or_else(|| StoreError::record_not_found("Systems", num))
    }

    pub fn systems(&self) -> impl Iterator<Item = &System> {
        self.systems.values()
    }

    /// Components linked to one system. A dangling link is an error.
    pub fn components_of_system(&self, system: i32) -> StoreResult<Vec<&Component>> {
        self.sys_components
            .iter()
            .filter(|link| link.system == system)
            .map(|link| {
                self.components
                    .get(&link.component)
                    .ok_or_else(|| StoreError::record_not_found("Components", link.component))
            })
            .collect()
    }

    /// Fault trees linked to one system. A dangling link is an error.
    pub fn fault_trees_of_system(&self, system: i32) -> StoreResult<Vec<&FaultTree>> {
        self.sys_fault_trees
            .iter()
            .filter(|link| link.system == system)
            .map(|link| self.fault_tree(link.tree))
            .collect()
    }

    /// Top gate events linked to one system. A dangling link is an error.
    pub fn top_gates_of_system(&self, system: i32) -> StoreResult<Vec<&Event>> {
        self.sys_top_gates
            .iter()
            .filter(|link| link.system == system)
            .map(|link| self.event(EventKind::Gate.code(), link.gate))
            .collect()
    }

    pub fn sys_components(&self) -> impl Iterator<Item = &SysComponent> {
        self.sys_components.iter()
    }

    pub fn sys_fault_trees(&self) -> impl Iterator<Item = &SysFaultTree> {
        self.sys_fault_trees.iter()
    }

    pub fn sys_top_gates(&self) -> impl Iterator<Item = &SysTopGate> {
        self.sys_top_gates.iter()
    }

    pub fn component(&self, num: i32) -> StoreResult<&Component> {
        self.components
            .get(&num)
            .ok_or_else(|| StoreError::record_not_found("Components", num))
    }

    pub fn user(&self, num: i32) -> StoreResult<&User> {
        self.users
            .get(&num)
            .ok_or_else(|| StoreError::record_not_found("Users", num))
    }
}

impl ModelReader for ProjectStore {
    fn event(&self, kind: i16, num: i32) -> StoreResult<&Event> {
        self.events
            .get(&(kind, num))
            .ok_or_else(|| StoreError::record_not_found("Events", format_key((kind, num))))
    }

    fn node(&self, key: &NodeKey) -> StoreResult<&FaultTreeNode> {
        let arena = self
            .trees
            .get(&key.tree)
            .ok_or_else(|| StoreError::record_not_found("FaultTrees", key.tree))?;
        arena
            .by_key
            .get(key)
            .map(|&index| &arena.tree.nodes[index])
            .ok_or_else(|| StoreError::record_not_found("FaultTreeNodes", key))
    }

    fn father<'a>(&'a self, node: &FaultTreeNode) -> StoreResult<Option<&'a FaultTreeNode>> {
        if node.is_top() {
            return Ok(None);
        }
        self.gate_node(node.tree, node.father_gate).map(Some)
    }

    fn param(&self, kind: i16, num: i32) -> StoreResult<&Param> {
        self.params
            .get(&(kind, num))
            .ok_or_else(|| StoreError::record_not_found("Params", format_key((kind, num))))
    }
}

fn format_key(key: (i16, i32)) -> String {
    format!("({}, {})", key.0, key.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AuditTrail, FaultTreeKind, Symbol, Transfer};

    fn gate(num: i32, symbol: Symbol) -> Event {
        Event {
            kind: EventKind::Gate,
            num,
            id: format!("G{}", num),
            text: None,
            tag: None,
            symbol: Some(symbol),
            model: None,
            state: None,
            calc_type: None,
            mean: None,
            init_enabled: None,
            audit: AuditTrail::default(),
            flag: None,
        }
    }

    fn node(tree: i32, father_gate: i32, rec_num: i32, level: i16) -> FaultTreeNode {
        FaultTreeNode {
            tree,
            father_gate,
            rec_type: EventKind::Gate.code(),
            rec_num,
            pos: 0,
            level,
            transfer: Some(Transfer::Not),
            negated: false,
            flag: None,
        }
    }

    fn two_level_store() -> ProjectStore {
        let snapshot = ProjectSnapshot {
            events: vec![gate(1, Symbol::Or), gate(2, Symbol::And)],
            fault_trees: vec![FaultTree {
                kind: FaultTreeKind::Common,
                num: 10,
                id: "FT-10".into(),
                text: None,
                tag: None,
                align: None,
                is_positioned: None,
                audit: AuditTrail::default(),
                flag: None,
                nodes: vec![node(10, 0, 1, 0), node(10, 1, 2, 1)],
            }],
            ..ProjectSnapshot::default()
        };
        ProjectStore::from_snapshot(snapshot).unwrap()
    }

    #[test]
    fn test_event_lookup_hits_and_misses() {
        let store = two_level_store();
        assert!(store.event(EventKind::Gate.code(), 1).is_ok());

        let err = store.event(EventKind::Gate.code(), 99).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_node_lookup_by_composite_key() {
        let store = two_level_store();
        let key = node(10, 1, 2, 1).key();
        let found = store.node(&key).unwrap();
        assert_eq!(found.rec_num, 2);
    }

    #[test]
    fn test_father_of_top_is_none() {
        let store = two_level_store();
        let top = store.top_node(10).unwrap();
        assert!(store.father(top).unwrap().is_none());
    }

    #[test]
    fn test_father_resolves_through_gate_index() {
        let store = two_level_store();
        let key = node(10, 1, 2, 1).key();
        let child = store.node(&key).unwrap();
        let father = store.father(child).unwrap().unwrap();
        assert_eq!(father.rec_num, 1);
        assert!(father.is_top());
    }

    #[test]
    fn test_father_dangling_gate_is_error() {
        let snapshot = ProjectSnapshot {
            events: vec![gate(1, Symbol::Or)],
            fault_trees: vec![FaultTree {
                kind: FaultTreeKind::Common,
                num: 10,
                id: "FT-10".into(),
                text: None,
                tag: None,
                align: None,
                is_positioned: None,
                audit: AuditTrail::default(),
                flag: None,
                // father gate 77 has no placement in this tree
                nodes: vec![node(10, 77, 1, 0)],
            }],
            ..ProjectSnapshot::default()
        };
        let store = ProjectStore::from_snapshot(snapshot).unwrap();
        let key = node(10, 77, 1, 0).key();
        let dangling = store.node(&key).unwrap();

        let err = store.father(dangling).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_duplicate_event_rejected() {
        let snapshot = ProjectSnapshot {
            events: vec![gate(1, Symbol::Or), gate(1, Symbol::And)],
            ..ProjectSnapshot::default()
        };
        let err = ProjectStore::from_snapshot(snapshot).unwrap_err();
        assert_eq!(err.code().code(), "RISK_DUPLICATE_RECORD");
    }

    #[test]
    fn test_node_partition_queries() {
        let mut snapshot = ProjectSnapshot {
            events: vec![gate(1, Symbol::Or)],
            ..ProjectSnapshot::default()
        };
        let mut basic = node(10, 1, 5, 1);
        basic.rec_type = EventKind::BasicEvent.code();
        let mut transfer = node(10, 1, 6, 1);
        transfer.transfer = Some(Transfer::Yes);
        snapshot.fault_trees = vec![FaultTree {
            kind: FaultTreeKind::Common,
            num: 10,
            id: "FT-10".into(),
            text: None,
            tag: None,
            align: None,
            is_positioned: None,
            audit: AuditTrail::default(),
            flag: None,
            nodes: vec![node(10, 0, 1, 0), basic, transfer],
        }];
        let store = ProjectStore::from_snapshot(snapshot).unwrap();

        assert_eq!(store.gate_nodes(10).unwrap().len(), 2);
        assert_eq!(store.basic_event_nodes(10).unwrap().len(), 1);
        let transfers = store.transfer_nodes(10).unwrap();
        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].rec_num, 6);
    }
}
