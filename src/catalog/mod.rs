//! Record catalog: the explicit registry of record classes
//!
//! The original tool registered all table metadata on a process-wide
//! declarative object at import time. Here the registry is an ordinary
//! value: built once at startup with [`RecordCatalog::standard`] and passed
//! by reference to the loader and validator. Nothing in this crate holds
//! global state.

use std::collections::BTreeMap;

use crate::model::{EventKind, FaultTreeKind, ParamKind};

/// Which entity family a record class belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFamily {
    Event,
    Parameter,
    FaultTree,
}

/// One registered record class: a persisted kind code and its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordClass {
    pub code: i16,
    pub name: &'static str,
    pub family: RecordFamily,
}

/// Registry of the record classes whose kind codes this crate interprets.
///
/// Codes are taken from the model enums, the single place they are defined;
/// the catalog never re-derives or renumbers them.
#[derive(Debug, Clone)]
pub struct RecordCatalog {
    by_code: BTreeMap<i16, RecordClass>,
}

impl RecordCatalog {
    /// The standard catalog: every event, parameter, and fault-tree kind.
    pub fn standard() -> Self {
        let mut catalog = Self {
            by_code: BTreeMap::new(),
        };
        for kind in EventKind::ALL {
            catalog.insert(RecordClass {
                code: kind.code(),
                name: kind.class_name(),
                family: RecordFamily::Event,
            });
        }
        for kind in ParamKind::ALL {
            catalog.insert(RecordClass {
                code: kind.code(),
                name: kind.class_name(),
                family: RecordFamily::Parameter,
            });
        }
        for kind in FaultTreeKind::ALL {
            catalog.insert(RecordClass {
                code: kind.code(),
                name: kind.class_name(),
                family: RecordFamily::FaultTree,
            });
        }
        catalog
    }

    fn insert(&mut self, class: RecordClass) {
        let previous = self.by_code.insert(class.code, class);
        debug_assert!(
            previous.is_none(),
            "kind code {} registered twice",
            class.code
        );
    }

    /// Looks up a class by its persisted kind code.
    pub fn class(&self, code: i16) -> Option<&RecordClass> {
        self.by_code.get(&code)
    }

    pub fn is_event_kind(&self, code: i16) -> bool {
        matches!(self.class(code), Some(class) if class.family == RecordFamily::Event)
    }

    pub fn is_param_kind(&self, code: i16) -> bool {
        matches!(self.class(code), Some(class) if class.family == RecordFamily::Parameter)
    }

    pub fn is_fault_tree_kind(&self, code: i16) -> bool {
        matches!(self.class(code), Some(class) if class.family == RecordFamily::FaultTree)
    }

    /// All registered classes in code order.
    pub fn classes(&self) -> impl Iterator<Item = &RecordClass> {
        self.by_code.values()
    }
}
