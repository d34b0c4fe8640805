//! Entity definitions for the PSA project model
//!
//! Every entity mirrors a persisted record and is immutable from the point
//! of view of this crate: records are created, reviewed, and approved by an
//! external editorial workflow, and the store only reads them.
//!
//! # Design Principles
//!
//! - Discriminator codes are the persisted integer values, never re-derived
//! - Polymorphic hierarchies are a common payload plus a kind tag
//! - Open enumerations (distribution types) keep the raw code alongside the
//!   typed view, so unrecognized codes survive a load/save round trip

mod audit;
mod ccf;
mod event;
mod event_tree;
mod fault_tree;
mod param;
mod system;

pub use audit::{AuditTrail, User};
pub use ccf::{CcfGroup, CcfMember};
pub use event::{Event, EventKey, EventKind, Symbol};
pub use event_tree::{EtNode, EventTree, Sequence};
pub use fault_tree::{FaultTree, FaultTreeKind, FaultTreeNode, NodeKey, Transfer};
pub use param::{DistKind, Param, ParamKey, ParamKind};
pub use system::{Component, SysComponent, SysFaultTree, SysTopGate, System};
