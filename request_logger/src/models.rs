//! Project-specific model definitions
//!
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

use crate::event::RequestEvent;

/// The document persisted for every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct LogRecord {
    pub timestamp: String,
    pub request_id: String,

    pub raw_path: String,
    pub raw_query_string: String,
    pub full_url_path: String,
    pub requested_filename: String,

    pub http_method: String,
    pub source_ip: String,
    pub user_agent: String,
    pub protocol: String,

    pub headers: Map<String, Value>,
    pub query_parameters: Map<String, Value>,

    pub body: String,
    pub is_base64_encoded: bool,

    pub domain_name: String,
    pub stage: String,
    pub time: String,
    pub time_epoch: i64,
}

impl LogRecord {
    pub fn new(event: RequestEvent, request_id: &str, now: DateTime<Utc>) -> LogRecord {
        let full_url_path = if event.raw_query_string.is_empty() {
            event.raw_path.clone()
        } else {
            format!("{}?{}", event.raw_path, event.raw_query_string)
        };
        let requested_filename = requested_filename(&event.raw_path);

        LogRecord {
            timestamp: iso_timestamp(now),
            request_id: request_id.to_string(),
            raw_path: event.raw_path,
            raw_query_string: event.raw_query_string,
            full_url_path,
            requested_filename,
            http_method: event.method,
            source_ip: event.source_ip,
            user_agent: event.user_agent,
            protocol: event.protocol,
            headers: event.headers,
            query_parameters: event.query_parameters,
            body: event.body,
            is_base64_encoded: event.is_base64_encoded,
            domain_name: event.domain_name,
            stage: event.stage,
            time: event.time,
            time_epoch: event.time_epoch,
        }
    }
}

/// Last non-empty path segment, e.g. `/pdf-to-markdown/test.pdf` -> `test.pdf`.
pub(crate) fn requested_filename(raw_path: &str) -> String {
    raw_path
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or("unknown")
        .to_string()
}

pub(crate) fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

/// Function URL response envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HttpResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl HttpResponse {
    pub fn markdown(status_code: u16, content: &str) -> HttpResponse {
        let body = json!({ "content": content, "mimetype": "text/markdown" }).to_string();

        HttpResponse {
            status_code,
            headers: [("Content-Type".to_string(), "application/json".to_string())]
                .into_iter()
                .collect(),
            body,
        }
    }
}
