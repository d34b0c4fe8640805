//! Common-cause-failure groups
//!
//! A CCF group names the basic events that can fail together from a shared
//! cause and the parametric model used to expand them.

use serde::{Deserialize, Serialize};

use super::audit::AuditTrail;
use super::event::EventKey;

/// A common-cause-failure group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CcfGroup {
    pub kind: i16,
    pub num: i32,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<i16>,
    /// Parametric CCF model code (beta factor, alpha factor, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ccf_model: Option<i16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha8_bound: Option<i32>,
    #[serde(default)]
    pub audit: AuditTrail,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<bool>,
}

/// Membership record: one basic event belonging to one CCF group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CcfMember {
    pub group_kind: i16,
    pub group_num: i32,
    pub event_type: i16,
    pub event_num: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<bool>,
}

impl CcfMember {
    pub fn event_key(&self) -> EventKey {
        (self.event_type, self.event_num)
    }
}
