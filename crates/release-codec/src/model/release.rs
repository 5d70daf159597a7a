//! The release record and its status metadata.
//!
//! Field tags are the persisted wire contract of stored releases and must
//! never be renumbered.

use serde::{Deserialize, Serialize};

use crate::model::{Chart, Config, Hook};

/// One deployed application state, as stored by the release storage driver.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Release {
    /// Release name.
    #[prost(string, tag = "1")]
    pub name: String,
    /// Lifecycle information (status, deployment times).
    #[prost(message, optional, tag = "2")]
    pub info: Option<Info>,
    /// The chart that was released.
    #[prost(message, optional, tag = "3")]
    pub chart: Option<Chart>,
    /// User-supplied values overriding the chart defaults.
    #[prost(message, optional, tag = "4")]
    pub config: Option<Config>,
    /// Rendered manifest string.
    #[prost(string, tag = "5")]
    pub manifest: String,
    /// Hooks declared by the chart.
    #[prost(message, repeated, tag = "6")]
    pub hooks: Vec<Hook>,
    /// Revision number; increases by one on every upgrade or rollback.
    #[prost(int32, tag = "7")]
    pub version: i32,
    /// Kubernetes namespace the release lives in.
    #[prost(string, tag = "8")]
    pub namespace: String,
}

impl Release {
    /// Creates an empty release with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Status code of the release, `Unknown` when no info is recorded.
    pub fn status_code(&self) -> StatusCode {
        self.info
            .as_ref()
            .and_then(|info| info.status.as_ref())
            .map(|status| status.code())
            .unwrap_or_default()
    }
}

/// Release lifecycle information.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Info {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(message, optional, tag = "2")]
    pub first_deployed: Option<Timestamp>,
    #[prost(message, optional, tag = "3")]
    pub last_deployed: Option<Timestamp>,
    /// Set once the release has been deleted.
    #[prost(message, optional, tag = "4")]
    pub deleted: Option<Timestamp>,
    /// Human-friendly description of the last operation.
    #[prost(string, tag = "5")]
    pub description: String,
}

/// Current state of a release.
///
/// Tag 2 (the old resources detail map) is retired and must stay unused.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Status {
    #[prost(enumeration = "StatusCode", tag = "1")]
    pub code: i32,
    /// Cluster resources as reported by the last status query.
    #[prost(string, tag = "3")]
    pub resources: String,
    /// Rendered chart notes.
    #[prost(string, tag = "4")]
    pub notes: String,
    #[prost(message, optional, tag = "5")]
    pub last_test_suite_run: Option<TestSuite>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum StatusCode {
    /// Indeterminate state.
    Unknown = 0,
    Deployed = 1,
    Deleted = 2,
    /// Replaced by a newer revision.
    Superseded = 3,
    Failed = 4,
    /// Deletion has started but not finished.
    Deleting = 5,
    PendingInstall = 6,
    PendingUpgrade = 7,
    PendingRollback = 8,
}

impl StatusCode {
    /// Upper-snake name as it appears in the schema definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            StatusCode::Unknown => "UNKNOWN",
            StatusCode::Deployed => "DEPLOYED",
            StatusCode::Deleted => "DELETED",
            StatusCode::Superseded => "SUPERSEDED",
            StatusCode::Failed => "FAILED",
            StatusCode::Deleting => "DELETING",
            StatusCode::PendingInstall => "PENDING_INSTALL",
            StatusCode::PendingUpgrade => "PENDING_UPGRADE",
            StatusCode::PendingRollback => "PENDING_ROLLBACK",
        }
    }
}

/// Results of the last `test` run against a release.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct TestSuite {
    #[prost(message, optional, tag = "1")]
    pub started_at: Option<Timestamp>,
    #[prost(message, optional, tag = "2")]
    pub completed_at: Option<Timestamp>,
    #[prost(message, repeated, tag = "3")]
    pub results: Vec<TestRun>,
}

#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct TestRun {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(enumeration = "TestRunStatus", tag = "2")]
    pub status: i32,
    #[prost(string, tag = "3")]
    pub info: String,
    #[prost(message, optional, tag = "4")]
    pub started_at: Option<Timestamp>,
    #[prost(message, optional, tag = "5")]
    pub completed_at: Option<Timestamp>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum TestRunStatus {
    Unknown = 0,
    Success = 1,
    Failure = 2,
    Running = 3,
}

/// Point in time with nanosecond precision.
///
/// Wire-compatible with `google.protobuf.Timestamp`.
#[derive(Clone, Copy, PartialEq, Eq, prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Timestamp {
    /// Seconds since the Unix epoch.
    #[prost(int64, tag = "1")]
    pub seconds: i64,
    /// Non-negative fraction of a second, `0..=999_999_999`.
    #[prost(int32, tag = "2")]
    pub nanos: i32,
}

impl Timestamp {
    /// Creates a timestamp from whole seconds since the Unix epoch.
    pub fn from_unix(seconds: i64) -> Self {
        Self { seconds, nanos: 0 }
    }
}
