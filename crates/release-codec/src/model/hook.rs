//! Lifecycle hooks recorded on a release.

use serde::{Deserialize, Serialize};

use crate::model::Timestamp;

/// A manifest run at a specific point of the release lifecycle.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Hook {
    #[prost(string, tag = "1")]
    pub name: String,
    /// Kubernetes kind of the hook resource.
    #[prost(string, tag = "2")]
    pub kind: String,
    /// Chart-relative path of the template that produced the hook.
    #[prost(string, tag = "3")]
    pub path: String,
    #[prost(string, tag = "4")]
    pub manifest: String,
    #[prost(enumeration = "HookEvent", repeated, tag = "5")]
    pub events: Vec<i32>,
    #[prost(message, optional, tag = "6")]
    pub last_run: Option<Timestamp>,
    /// Ordering weight among hooks of the same event.
    #[prost(int32, tag = "7")]
    pub weight: i32,
    #[prost(enumeration = "HookDeletePolicy", repeated, tag = "8")]
    pub delete_policies: Vec<i32>,
    /// Seconds to wait for deletion before giving up.
    #[prost(int64, tag = "9")]
    pub delete_timeout: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum HookEvent {
    Unknown = 0,
    PreInstall = 1,
    PostInstall = 2,
    PreDelete = 3,
    PostDelete = 4,
    PreUpgrade = 5,
    PostUpgrade = 6,
    PreRollback = 7,
    PostRollback = 8,
    ReleaseTestSuccess = 9,
    ReleaseTestFailure = 10,
    CrdInstall = 11,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum HookDeletePolicy {
    Succeeded = 0,
    Failed = 1,
    BeforeHookCreation = 2,
}
