//! Snapshot loader
//!
//! Reads a project snapshot from a JSON file, builds the in-memory store,
//! and runs the integrity pass before handing the store out. A malformed
//! file or an inconsistent model fails the load; nothing is repaired.

use std::path::Path;

use super::errors::{StoreError, StoreResult};
use super::memory::ProjectStore;
use super::snapshot::ProjectSnapshot;
use super::validator::ModelValidator;
use crate::catalog::RecordCatalog;
use crate::observability::{Logger, Severity};

/// Loads validated stores from snapshot files.
pub struct SnapshotLoader<'a> {
    catalog: &'a RecordCatalog,
}

impl<'a> SnapshotLoader<'a> {
    pub fn new(catalog: &'a RecordCatalog) -> Self {
        Self { catalog }
    }

    /// Loads and validates one snapshot file.
    pub fn load(&self, path: &Path) -> StoreResult<ProjectStore> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| StoreError::snapshot_io(path.display(), e))?;

        let snapshot: ProjectSnapshot = serde_json::from_str(&content)
            .map_err(|e| StoreError::snapshot_malformed(path.display(), e.to_string()))?;

        let records = snapshot.record_count();
        let store = self.build(snapshot).map_err(|e| {
            Logger::log_stderr(
                Severity::Error,
                "snapshot_load_failed",
                &[
                    ("path", &path.display().to_string()),
                    ("error", &e.to_string()),
                ],
            );
            e
        })?;

        Logger::log(
            Severity::Info,
            "snapshot_loaded",
            &[
                ("path", &path.display().to_string()),
                ("records", &records.to_string()),
            ],
        );
        Ok(store)
    }

    /// Builds and validates a store from an already parsed snapshot.
    pub fn build(&self, snapshot: ProjectSnapshot) -> StoreResult<ProjectStore> {
        let store = ProjectStore::from_snapshot(snapshot)?;
        ModelValidator::new(&store, self.catalog).validate()?;
        Ok(store)
    }
}
