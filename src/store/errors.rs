//! Store error types
//!
//! Error codes:
//! - RISK_RECORD_NOT_FOUND
//! - RISK_DUPLICATE_RECORD
//! - RISK_SNAPSHOT_MALFORMED
//! - RISK_MODEL_INTEGRITY
//!
//! A missing or duplicated record always means corrupt or inconsistent
//! model data: the store never repairs, defaults, or retries. Callers
//! decide whether to skip the affected tree or abort.

use std::fmt;
use std::io;

/// Store-specific error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorCode {
    /// A referenced record does not exist
    RiskRecordNotFound,
    /// A snapshot carried two records with the same key
    RiskDuplicateRecord,
    /// A snapshot file could not be read or parsed
    RiskSnapshotMalformed,
    /// Referential-integrity validation failed
    RiskModelIntegrity,
}

impl StoreErrorCode {
    /// Returns the stable string code.
    pub fn code(&self) -> &'static str {
        match self {
            StoreErrorCode::RiskRecordNotFound => "RISK_RECORD_NOT_FOUND",
            StoreErrorCode::RiskDuplicateRecord => "RISK_DUPLICATE_RECORD",
            StoreErrorCode::RiskSnapshotMalformed => "RISK_SNAPSHOT_MALFORMED",
            StoreErrorCode::RiskModelIntegrity => "RISK_MODEL_INTEGRITY",
        }
    }
}

impl fmt::Display for StoreErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Store error with record-class and key context.
#[derive(Debug)]
pub struct StoreError {
    code: StoreErrorCode,
    message: String,
    details: Option<String>,
    source: Option<io::Error>,
}

impl StoreError {
    /// A referenced record is absent.
    pub fn record_not_found(class: &str, key: impl fmt::Display) -> Self {
        Self {
            code: StoreErrorCode::RiskRecordNotFound,
            message: format!("{} record not found", class),
            details: Some(format!("key: {}", key)),
            source: None,
        }
    }

    /// A snapshot carried the same key twice.
    pub fn duplicate_record(class: &str, key: impl fmt::Display) -> Self {
        Self {
            code: StoreErrorCode::RiskDuplicateRecord,
            message: format!("duplicate {} record in snapshot", class),
            details: Some(format!("key: {}", key)),
            source: None,
        }
    }

    /// A snapshot file failed to read.
    pub fn snapshot_io(path: impl fmt::Display, source: io::Error) -> Self {
        Self {
            code: StoreErrorCode::RiskSnapshotMalformed,
            message: format!("failed to read snapshot '{}'", path),
            details: None,
            source: Some(source),
        }
    }

    /// A snapshot file failed to parse.
    pub fn snapshot_malformed(path: impl fmt::Display, reason: impl Into<String>) -> Self {
        Self {
            code: StoreErrorCode::RiskSnapshotMalformed,
            message: format!("malformed snapshot '{}'", path),
            details: Some(reason.into()),
            source: None,
        }
    }

    /// Referential-integrity validation found violations.
    pub fn integrity(count: usize, first: impl fmt::Display) -> Self {
        Self {
            code: StoreErrorCode::RiskModelIntegrity,
            message: format!("model failed integrity validation with {} violation(s)", count),
            details: Some(format!("first: {}", first)),
            source: None,
        }
    }

    /// Returns the error code.
    pub fn code(&self) -> StoreErrorCode {
        self.code
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns additional context, typically the offending key.
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    pub fn is_not_found(&self) -> bool {
        self.code == StoreErrorCode::RiskRecordNotFound
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
