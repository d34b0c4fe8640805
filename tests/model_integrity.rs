//! Model integrity and loading tests
//!
//! The traversal code assumes a consistent snapshot; these tests pin down
//! what the validator rejects and what a loaded store answers.

use riskdb::catalog::RecordCatalog;
use riskdb::model::{
    AuditTrail, CcfGroup, CcfMember, Component, Event, EventKind, FaultTree, FaultTreeKind,
    FaultTreeNode, SysComponent, SysFaultTree, SysTopGate, Symbol, System, Transfer,
};
use riskdb::store::{
    ModelValidator, ProjectSnapshot, ProjectStore, SnapshotLoader, ViolationKind,
};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

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

fn basic_event(num: i32) -> Event {
    Event {
        kind: EventKind::BasicEvent,
        num,
        id: format!("BE-{}", num),
        text: None,
        tag: None,
        symbol: Some(Symbol::Oval),
        model: None,
        state: None,
        calc_type: None,
        mean: Some(1.0e-4),
        init_enabled: None,
        audit: AuditTrail::default(),
        flag: None,
    }
}

fn node(tree: i32, father_gate: i32, rec_type: i16, rec_num: i32, level: i16) -> FaultTreeNode {
    FaultTreeNode {
        tree,
        father_gate,
        rec_type,
        rec_num,
        pos: 0,
        level,
        transfer: Some(Transfer::Not),
        negated: false,
        flag: None,
    }
}

fn tree(num: i32, nodes: Vec<FaultTreeNode>) -> FaultTree {
    FaultTree {
        kind: FaultTreeKind::Common,
        num,
        id: format!("FT-{}", num),
        text: None,
        tag: None,
        align: None,
        is_positioned: None,
        audit: AuditTrail::default(),
        flag: None,
        nodes,
    }
}

/// One OR gate over one basic event.
fn small_snapshot() -> ProjectSnapshot {
    ProjectSnapshot {
        events: vec![gate(1, Symbol::Or), basic_event(2)],
        fault_trees: vec![tree(
            1,
            vec![
                node(1, 0, EventKind::Gate.code(), 1, 0),
                node(1, 1, EventKind::BasicEvent.code(), 2, 1),
            ],
        )],
        ..ProjectSnapshot::default()
    }
}

fn violation_kinds(snapshot: ProjectSnapshot) -> Vec<ViolationKind> {
    let catalog = RecordCatalog::standard();
    let store = ProjectStore::from_snapshot(snapshot).unwrap();
    ModelValidator::new(&store, &catalog)
        .violations()
        .into_iter()
        .map(|v| v.kind)
        .collect()
}

// =============================================================================
// Validator Rejections
// =============================================================================

#[test]
fn test_consistent_snapshot_has_no_violations() {
    assert!(violation_kinds(small_snapshot()).is_empty());
}

#[test]
fn test_missing_event_reference_is_flagged() {
    let mut snapshot = small_snapshot();
    snapshot.events.pop(); // drop the basic event, keep its node
    assert!(violation_kinds(snapshot).contains(&ViolationKind::MissingEvent));
}

#[test]
fn test_unknown_record_kind_is_flagged() {
    let mut snapshot = small_snapshot();
    snapshot.fault_trees[0].nodes[1].rec_type = 99;
    assert!(violation_kinds(snapshot).contains(&ViolationKind::UnknownRecordKind));
}

#[test]
fn test_second_top_node_is_flagged() {
    let mut snapshot = small_snapshot();
    snapshot.events.push(gate(3, Symbol::And));
    snapshot.fault_trees[0]
        .nodes
        .push(node(1, 0, EventKind::Gate.code(), 3, 0));
    assert!(violation_kinds(snapshot).contains(&ViolationKind::MultipleTopNodes));
}

#[test]
fn test_missing_father_gate_is_flagged() {
    let mut snapshot = small_snapshot();
    snapshot.fault_trees[0].nodes[1].father_gate = 42;
    assert!(violation_kinds(snapshot).contains(&ViolationKind::MissingFatherGate));
}

/// Two gates fathering each other never reach a top node.
#[test]
fn test_father_cycle_is_flagged() {
    let snapshot = ProjectSnapshot {
        events: vec![gate(1, Symbol::Or), gate(2, Symbol::Or)],
        fault_trees: vec![tree(
            1,
            vec![
                node(1, 2, EventKind::Gate.code(), 1, 0),
                node(1, 1, EventKind::Gate.code(), 2, 1),
            ],
        )],
        ..ProjectSnapshot::default()
    };
    let kinds = violation_kinds(snapshot);
    assert!(kinds.contains(&ViolationKind::NoTopNode));
    assert!(kinds.contains(&ViolationKind::FatherCycle));
}

#[test]
fn test_ccf_member_without_event_is_flagged() {
    let mut snapshot = small_snapshot();
    snapshot.ccf_groups.push(CcfGroup {
        kind: 22,
        num: 1,
        id: "CCF-1".into(),
        text: None,
        tag: None,
        ccf_model: Some(1),
        alpha8_bound: None,
        audit: AuditTrail::default(),
        flag: None,
    });
    snapshot.ccf_members.push(CcfMember {
        group_kind: 22,
        group_num: 1,
        event_type: EventKind::BasicEvent.code(),
        event_num: 777,
        flag: None,
    });
    assert!(violation_kinds(snapshot).contains(&ViolationKind::MissingCcfMemberEvent));
}

#[test]
fn test_dangling_system_link_is_flagged() {
    let mut snapshot = small_snapshot();
    snapshot.systems.push(System {
        kind: 24,
        num: 1,
        id: "SYS-1".into(),
        text: None,
        tag: None,
        audit: AuditTrail::default(),
        flag: None,
    });
    snapshot.sys_components.push(SysComponent {
        system: 1,
        component: 5, // no such component
        flag: None,
    });
    assert!(violation_kinds(snapshot).contains(&ViolationKind::MissingSystemTarget));
}

// =============================================================================
// Loader
// =============================================================================

#[test]
fn test_loader_round_trip() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("project.json");
    std::fs::write(&path, serde_json::to_string(&small_snapshot()).unwrap()).unwrap();

    let catalog = RecordCatalog::standard();
    let store = SnapshotLoader::new(&catalog).load(&path).unwrap();

    assert_eq!(store.events().count(), 2);
    let top = store.top_node(1).unwrap();
    assert_eq!(top.rec_num, 1);
    assert_eq!(store.basic_event_nodes(1).unwrap().len(), 1);
}

#[test]
fn test_loader_rejects_malformed_json() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("project.json");
    std::fs::write(&path, "{ not json").unwrap();

    let catalog = RecordCatalog::standard();
    let err = SnapshotLoader::new(&catalog).load(&path).unwrap_err();
    assert_eq!(err.code().code(), "RISK_SNAPSHOT_MALFORMED");
}

#[test]
fn test_loader_rejects_inconsistent_model() {
    let mut snapshot = small_snapshot();
    snapshot.events.pop();

    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("project.json");
    std::fs::write(&path, serde_json::to_string(&snapshot).unwrap()).unwrap();

    let catalog = RecordCatalog::standard();
    let err = SnapshotLoader::new(&catalog).load(&path).unwrap_err();
    assert_eq!(err.code().code(), "RISK_MODEL_INTEGRITY");
}

// =============================================================================
// Relationship Queries
// =============================================================================

#[test]
fn test_system_links_resolve() {
    let mut snapshot = small_snapshot();
    snapshot.systems.push(System {
        kind: 24,
        num: 1,
        id: "SYS-1".into(),
        text: None,
        tag: None,
        audit: AuditTrail::default(),
        flag: None,
    });
    snapshot.components.push(Component {
        kind: 25,
        num: 7,
        id: "PUMP-A".into(),
        text: None,
        tag: None,
        audit: AuditTrail::default(),
        flag: None,
    });
    snapshot.sys_components.push(SysComponent {
        system: 1,
        component: 7,
        flag: None,
    });
    snapshot.sys_fault_trees.push(SysFaultTree {
        system: 1,
        tree: 1,
        flag: None,
    });
    snapshot.sys_top_gates.push(SysTopGate {
        system: 1,
        gate: 1,
        flag: None,
    });

    let catalog = RecordCatalog::standard();
    let store = SnapshotLoader::new(&catalog).build(snapshot).unwrap();

    let components = store.components_of_system(1).unwrap();
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].id, "PUMP-A");

    let trees = store.fault_trees_of_system(1).unwrap();
    assert_eq!(trees.len(), 1);
    assert_eq!(trees[0].num, 1);

    let gates = store.top_gates_of_system(1).unwrap();
    assert_eq!(gates.len(), 1);
    assert_eq!(gates[0].num, 1);
}

#[test]
fn test_transfer_nodes_query() {
    let mut snapshot = small_snapshot();
    snapshot.events.push(gate(3, Symbol::Or));
    let mut transfer = node(1, 1, EventKind::Gate.code(), 3, 1);
    transfer.transfer = Some(Transfer::Yes);
    snapshot.fault_trees[0].nodes.push(transfer);

    let catalog = RecordCatalog::standard();
    let store = SnapshotLoader::new(&catalog).build(snapshot).unwrap();

    let transfers = store.transfer_nodes(1).unwrap();
    assert_eq!(transfers.len(), 1);
    assert_eq!(transfers[0].rec_num, 3);
}
