//! Release record types.
//!
//! This module contains the protobuf messages of a persisted release:
//! - Release, status and test results
//! - Hooks
//! - Chart contents and configuration values

pub mod chart;
pub mod hook;
pub mod release;

pub use chart::{Any, Chart, Config, ConfigValue, Maintainer, Metadata, Template};
pub use hook::{Hook, HookDeletePolicy, HookEvent};
pub use release::{Info, Release, Status, StatusCode, TestRun, TestRunStatus, TestSuite, Timestamp};
