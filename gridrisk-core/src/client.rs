//! HTTP client for the analysis service.
//!
//! One call: `POST {backend}/api/v1/analyze` with the dataset as the
//! multipart field `files`. There is no retry; a failure goes straight back
//! to the caller for display.

use crate::analysis::{parse_response, AnalysisResult};
use crate::config::DashboardConfig;
use crate::error::ClientError;
use log::{error, info};
use reqwest::multipart::{Form, Part};
use reqwest::Client;

/// Multipart field name the service reads the dataset from.
pub const UPLOAD_FIELD: &str = "files";

#[derive(Clone)]
pub struct AnalysisClient {
    http: Client,
    endpoint: String,
}

impl AnalysisClient {
    pub fn new(config: &DashboardConfig) -> Result<Self, ClientError> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder =
            builder.timeout(std::time::Duration::from_secs(config.request_timeout_secs));

        Ok(Self {
            http: builder.build()?,
            endpoint: config.analyze_url(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Upload one dataset file and parse the analysis it produces.
    pub async fn analyze(
        &self,
        file_name: String,
        contents: Vec<u8>,
    ) -> Result<AnalysisResult, ClientError> {
        info!("Uploading {} ({} bytes) to {}", file_name, contents.len(), self.endpoint);
        let form = Form::new().part(UPLOAD_FIELD, Part::bytes(contents).file_name(file_name));

        let response = self.http.post(&self.endpoint).multipart(form).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("Analysis service returned {}", status);
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let result = parse_response(&body)?;
        info!(
            "Received analysis: {} anomalies, {} records",
            result.anomalies.len(),
            result.ranking_source().len()
        );
        Ok(result)
    }
}
