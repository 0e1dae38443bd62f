//! Test report models for `lastCompletedBuild/testReport`.
//!
//! Leaf jobs list their suites directly under the report root. Jobs that
//! aggregate sub-jobs wrap suites in `childReports[].result`. Both shapes are
//! always walked.

use serde::Deserialize;

use super::{null_as_default, nulls_as_default};

/// Case status marking a failed test.
pub const FAILED_STATUS: &str = "FAILED";

/// One junit test case.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestReportCase {
    #[serde(deserialize_with = "null_as_default")]
    pub class_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub duration: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
}

impl TestReportCase {
    pub fn is_failed(&self) -> bool {
        self.status == FAILED_STATUS
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TestReportSuite {
    #[serde(deserialize_with = "nulls_as_default")]
    pub cases: Vec<TestReportCase>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// `childReports[].result`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestChildReportsResult {
    #[serde(deserialize_with = "null_as_default")]
    pub duration: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub fail_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub pass_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub skip_count: i64,
    #[serde(deserialize_with = "nulls_as_default")]
    pub suites: Vec<TestReportSuite>,
}

/// `childReports[]`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TestChildReports {
    #[serde(deserialize_with = "null_as_default")]
    pub result: TestChildReportsResult,
}

/// Root of a job's test report.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestReport {
    #[serde(deserialize_with = "null_as_default")]
    pub fail_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub skip_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_count: i64,
    #[serde(deserialize_with = "nulls_as_default")]
    pub child_reports: Vec<TestChildReports>,
    #[serde(deserialize_with = "nulls_as_default")]
    pub suites: Vec<TestReportSuite>,
}

impl TestReport {
    /// Failed cases as `(suite name, case name)`: child-report suites first,
    /// then suites under the root, each in document order.
    pub fn failed_cases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.child_reports
            .iter()
            .flat_map(|child| child.result.suites.iter())
            .chain(self.suites.iter())
            .flat_map(|suite| {
                suite
                    .cases
                    .iter()
                    .filter(|case| case.is_failed())
                    .map(move |case| (suite.name.as_str(), case.name.as_str()))
            })
    }
}

/// Decode a test report from a raw JSON body.
pub fn decode_test_report(body: &[u8]) -> serde_json::Result<TestReport> {
    serde_json::from_slice(body)
}
