//! Bulk enable/disable of scheduled Splunk saved searches.
//!
//! A `disable` or `listonly` run walks every installed app, lists the
//! enabled and scheduled saved searches in each one and records what it did
//! in a CSV ledger. An `enable` run replays that ledger to turn the same
//! searches back on.

pub mod actions;
pub mod apps;
pub mod args;
pub mod cancellation;
pub mod error;
pub mod ledger;
pub mod progress;
pub mod searches;
pub mod workflow;

pub use apps::IgnoreList;
pub use ledger::{Ledger, LedgerAction, LedgerError, LedgerRow};
pub use searches::SearchRecord;
pub use workflow::{RunOptions, RunSummary, RunType};
