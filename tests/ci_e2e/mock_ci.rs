//! Mock CI server with the view and test report endpoints.

use canimerge_lib::config::Config;
use canimerge_lib::services::CiClient;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct MockCi {
    pub server: MockServer,
}

impl MockCi {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn config(&self, detail: bool, debug: bool) -> Config {
        Config {
            detail,
            debug,
            ..Default::default()
        }
        .with_base_url(self.server.uri())
    }

    pub fn client(&self, config: &Config) -> CiClient {
        CiClient::new(config).unwrap()
    }

    /// Serve `body` for `/view/<view>/api/json?pretty=true`.
    pub async fn mount_view_body(&self, view: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/view/{view}/api/json")))
            .and(query_param("pretty", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Serve a view whose jobs are `(name, color)` pairs, in order.
    pub async fn mount_view(&self, view: &str, jobs: &[(&str, &str)]) {
        self.mount_view_body(view, &view_json(view, jobs).to_string())
            .await;
    }

    /// Serve `body` as `job`'s last completed test report, expecting `times` hits.
    pub async fn mount_report_body(&self, view: &str, job: &str, body: &str, times: u64) {
        Mock::given(method("GET"))
            .and(path(format!(
                "/view/{view}/job/{job}/lastCompletedBuild/testReport/api/json"
            )))
            .and(query_param("pretty", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(times)
            .mount(&self.server)
            .await;
    }

    pub async fn mount_report(&self, view: &str, job: &str, report: Value) {
        self.mount_report_body(view, job, &report.to_string(), 1)
            .await;
    }

    /// Number of test report requests the server has seen.
    pub async fn report_requests(&self) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path().ends_with("/testReport/api/json"))
            .count()
    }
}

pub fn view_json(view: &str, jobs: &[(&str, &str)]) -> Value {
    json!({
        "description": null,
        "jobs": jobs
            .iter()
            .map(|(name, color)| json!({
                "_class": "hudson.model.FreeStyleProject",
                "name": name,
                "url": format!("http://ci/job/{name}/"),
                "color": color,
            }))
            .collect::<Vec<_>>(),
        "name": view,
        "property": [],
        "url": format!("http://ci/view/{view}/"),
    })
}

/// Leaf-job report: suites directly under the root.
pub fn suites_report(suites: &[(&str, Vec<(&str, &str)>)]) -> Value {
    json!({
        "_class": "hudson.tasks.junit.TestResult",
        "testActions": [],
        "duration": 3.2,
        "empty": false,
        "failCount": 0,
        "passCount": 0,
        "skipCount": 0,
        "suites": suites_json(suites),
    })
}

/// Aggregating-job report: suites wrapped in `childReports[].result`.
pub fn child_reports(suites: &[(&str, Vec<(&str, &str)>)]) -> Value {
    json!({
        "_class": "hudson.tasks.test.MatrixTestResult",
        "failCount": 0,
        "skipCount": 0,
        "totalCount": 0,
        "urlName": "testReport",
        "childReports": [{
            "child": {"_class": "hudson.matrix.MatrixRun", "number": 7, "url": "http://ci/job/x/7/"},
            "result": {
                "_class": "hudson.tasks.junit.TestResult",
                "duration": 1.0,
                "empty": false,
                "failCount": 0,
                "passCount": 0,
                "skipCount": 0,
                "suites": suites_json(suites),
            }
        }],
    })
}

fn suites_json(suites: &[(&str, Vec<(&str, &str)>)]) -> Value {
    Value::Array(
        suites
            .iter()
            .map(|(name, cases)| {
                json!({
                    "name": name,
                    "duration": 0.4,
                    "cases": cases
                        .iter()
                        .map(|(case, status)| json!({
                            "className": format!("com.example.{name}"),
                            "name": case,
                            "status": status,
                            "duration": 0.1,
                            "errorDetails": null,
                        }))
                        .collect::<Vec<_>>(),
                })
            })
            .collect(),
    )
}
