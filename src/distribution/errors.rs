//! Distribution resolution error types

use thiserror::Error;

use crate::model::Param;

/// Result type for distribution resolution.
pub type DistributionResult<T> = Result<T, DistributionError>;

/// Errors raised while resolving a parameter's distribution.
///
/// Both variants mean the record itself is bad; the resolver never clamps
/// or defaults, it surfaces the violation so the input data can be fixed.
#[derive(Debug, Error)]
pub enum DistributionError {
    /// A field the declared distribution needs is unset.
    #[error("param '{param}': {field} is required for a {dist} distribution but is unset")]
    MissingField {
        param: String,
        dist: &'static str,
        field: &'static str,
    },

    /// The stored values produce an invalid distribution.
    #[error("param '{param}': invalid {dist} parameters: {reason}")]
    InvalidParameter {
        param: String,
        dist: &'static str,
        reason: String,
    },
}

impl DistributionError {
    pub fn missing_field(param: &Param, dist: &'static str, field: &'static str) -> Self {
        DistributionError::MissingField {
            param: param.id.clone(),
            dist,
            field,
        }
    }

    pub fn invalid(param: &Param, dist: &'static str, reason: impl Into<String>) -> Self {
        DistributionError::InvalidParameter {
            param: param.id.clone(),
            dist,
            reason: reason.into(),
        }
    }
}
