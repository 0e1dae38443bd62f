//! Domain models for the CI JSON API.

use serde::{Deserialize, Deserializer};

pub mod test_report;
pub mod view;

// Re-export commonly used types
pub use test_report::{
    FAILED_STATUS, TestChildReports, TestChildReportsResult, TestReport, TestReportCase,
    TestReportSuite, decode_test_report,
};
pub use view::{Job, JobStatus, View, decode_view};

/// Treat an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Like `null_as_default`, and a `null` element becomes `T::default()`.
pub(crate) fn nulls_as_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(items.into_iter().map(Option::unwrap_or_default).collect())
}
