//! Editorial audit trail and user records
//!
//! Every first-class record carries optional edit/review/approval stamps
//! pointing at the user who performed the step. The core never writes these
//! fields; they come from the editorial workflow that owns the database.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Edit, review, and approval history of a record.
///
/// All fields are optional: a freshly imported record may carry none of
/// them, a fully approved one carries all six.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditTrail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_uid: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_uid: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_uid: Option<i32>,
}

impl AuditTrail {
    /// A record counts as approved once the approval stamp is present.
    pub fn is_approved(&self) -> bool {
        self.approved_date.is_some()
    }

    /// Users referenced by any stamp, for referential-integrity checks.
    pub fn referenced_uids(&self) -> impl Iterator<Item = i32> + '_ {
        [self.edit_uid, self.review_uid, self.approved_uid]
            .into_iter()
            .flatten()
    }
}

/// A user account referenced by audit stamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub num: i32,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rights: Option<i16>,
    #[serde(default)]
    pub is_removed: bool,
    #[serde(default)]
    pub audit: AuditTrail,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_approved_requires_stamp() {
        let mut trail = AuditTrail::default();
        assert!(!trail.is_approved());

        trail.approved_date = Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap());
        assert!(trail.is_approved());
    }

    #[test]
    fn test_referenced_uids_skips_unset() {
        let trail = AuditTrail {
            edit_uid: Some(3),
            approved_uid: Some(7),
            ..AuditTrail::default()
        };
        let uids: Vec<i32> = trail.referenced_uids().collect();
        assert_eq!(uids, vec![3, 7]);
    }
}
