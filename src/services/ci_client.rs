//! JSON client for the CI server's status API.
//!
//! One GET per call, no retries, no auth and no timeout override. Transport
//! and body-read failures come back as errors; the caller decides whether
//! they are fatal.

use std::io::Write;

use tracing::debug;

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// HTTP client bound to one CI server.
#[derive(Clone)]
pub struct CiClient {
    base_url: String,
    debug: bool,
    http_client: reqwest::Client,
}

impl CiClient {
    /// Create a client from run configuration.
    pub fn new(config: &Config) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .build()
            .map_err(AppError::Client)?;

        Ok(Self {
            base_url: config.ci_base_url.trim_end_matches('/').to_string(),
            debug: config.debug,
            http_client,
        })
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// `<base>/view/<view>/api/json?pretty=true`
    pub fn view_url(&self, view_name: &str) -> String {
        format!("{}/view/{}/api/json?pretty=true", self.base_url, view_name)
    }

    /// `<base>/view/<view>/job/<job>/lastCompletedBuild/testReport/api/json?pretty=true`
    pub fn test_report_url(&self, view_name: &str, job_name: &str) -> String {
        format!(
            "{}/view/{}/job/{}/lastCompletedBuild/testReport/api/json?pretty=true",
            self.base_url, view_name, job_name
        )
    }

    /// GET `url` and return the raw body. HTTP status is not inspected.
    ///
    /// In debug mode the URL and body are echoed to `out` before returning.
    pub async fn fetch<W: Write>(&self, url: &str, out: &mut W) -> AppResult<Vec<u8>> {
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|source| AppError::Retrieval {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| AppError::ReadBody {
                url: url.to_string(),
                source,
            })?
            .to_vec();

        debug!("{} returned {} ({} bytes)", url, status, body.len());

        if self.debug {
            writeln!(out, "URL: {} BODY: {}", url, String::from_utf8_lossy(&body))?;
        }

        Ok(body)
    }
}
