use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use lambda_runtime::LambdaEvent;
use log::{debug, error, info};
use serde_json::Value;
use shared::storage::ObjectStore;

use crate::event::RequestEvent;
use crate::leaks::scan_headers;
use crate::models::{HttpResponse, LogRecord};
use crate::report::{error_report, leak_report};

pub(crate) struct RequestLogger<S> {
    store: S,
    bucket_name: String,
}

impl<S: ObjectStore> RequestLogger<S> {
    pub fn new(store: S, bucket_name: String) -> Self {
        Self { store, bucket_name }
    }

    pub async fn handle(&self, event: LambdaEvent<Value>) -> Result<HttpResponse> {
        Ok(self
            .handle_at(&event.payload, &event.context.request_id, Utc::now())
            .await)
    }

    /// Logs one request as of `now`. Never fails: a storage error becomes a 500.
    pub async fn handle_at(
        &self,
        event: &Value,
        request_id: &str,
        now: DateTime<Utc>,
    ) -> HttpResponse {
        let record = LogRecord::new(RequestEvent::from_value(event), request_id, now);
        let key = storage_key(now, request_id);
        debug!(
            "Logging {} {} to {}",
            record.http_method, record.full_url_path, key
        );

        match self.persist(&key, &record).await {
            Ok(()) => {
                let findings = scan_headers(&record.headers);
                info!(
                    "Stored request log at s3://{}/{} ({} leaked keys)",
                    self.bucket_name,
                    key,
                    findings.len()
                );
                HttpResponse::markdown(200, &leak_report(&findings))
            }
            Err(err) => {
                error!("Error saving request log to S3: {:#}", err);
                HttpResponse::markdown(500, &error_report(&err))
            }
        }
    }

    async fn persist(&self, key: &str, record: &LogRecord) -> Result<()> {
        let body = serde_json::to_vec_pretty(record).context("failed to serialize request log")?;
        self.store
            .put(&self.bucket_name, key, body, "application/json")
            .await
    }
}

/// `logs/<YYYY-MM-DD>/<HH>/<request-id>.json`, bucketed by UTC hour.
pub(crate) fn storage_key(now: DateTime<Utc>, request_id: &str) -> String {
    format!("logs/{}/{}.json", now.format("%Y-%m-%d/%H"), request_id)
}
