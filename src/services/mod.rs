//! CI querying and evaluation services.

pub mod ci_client;
pub mod evaluator;
pub mod failure_report;
pub mod git;
pub mod merge_check;

pub use ci_client::CiClient;
pub use evaluator::{check_view, evaluate_view};
pub use failure_report::{report_failures, write_failed_cases};
pub use git::{resolve_current_branch, resolve_current_branch_in};
pub use merge_check::{MergeVerdict, run_merge_check};
