//! Defensive read access to the Lambda Function URL payload.
//!
//! Every field of the incoming event is optional. Accessors fall back to a
//! default whenever a field is missing or holds the wrong JSON kind.
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy)]
pub(crate) struct Fields<'a>(Option<&'a Map<String, Value>>);

impl<'a> Fields<'a> {
    pub fn of(value: &'a Value) -> Self {
        Fields(value.as_object())
    }

    /// Nested object, or an empty view if `key` is absent or not an object.
    pub fn nested(&self, key: &str) -> Fields<'a> {
        Fields(self.get(key).and_then(Value::as_object))
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.0.and_then(|m| m.get(key))
    }

    pub fn str_or(&self, key: &str, default: &str) -> String {
        self.get(key)
            .and_then(Value::as_str)
            .unwrap_or(default)
            .to_string()
    }

    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(default)
    }

    pub fn i64_or(&self, key: &str, default: i64) -> i64 {
        self.get(key)
            .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
            .unwrap_or(default)
    }

    pub fn object_or_empty(&self, key: &str) -> Map<String, Value> {
        self.get(key)
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default()
    }
}

/// Typed view of an inbound request with all defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RequestEvent {
    pub raw_path: String,
    pub raw_query_string: String,
    pub method: String,
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

impl RequestEvent {
    pub fn from_value(event: &Value) -> RequestEvent {
        let event = Fields::of(event);
        let request_context = event.nested("requestContext");
        let http = request_context.nested("http");

        RequestEvent {
            raw_path: event.str_or("rawPath", ""),
            raw_query_string: event.str_or("rawQueryString", ""),
            method: http.str_or("method", "UNKNOWN"),
            source_ip: http.str_or("sourceIp", "unknown"),
            user_agent: http.str_or("userAgent", "unknown"),
            protocol: http.str_or("protocol", "unknown"),
            headers: event.object_or_empty("headers"),
            query_parameters: event.object_or_empty("queryStringParameters"),
            body: event.str_or("body", ""),
            is_base64_encoded: event.bool_or("isBase64Encoded", false),
            domain_name: request_context.str_or("domainName", ""),
            stage: request_context.str_or("stage", ""),
            time: request_context.str_or("time", ""),
            time_epoch: request_context.i64_or("timeEpoch", 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_event() {
        let event = json!({
            "rawPath": "/pdf-to-markdown/test.pdf",
            "rawQueryString": "a=1",
            "headers": { "host": "example.lambda-url.us-east-1.on.aws", "x-e-region": "us-east-1" },
            "queryStringParameters": { "a": "1" },
            "body": "aGVsbG8=",
            "isBase64Encoded": true,
            "requestContext": {
                "domainName": "example.lambda-url.us-east-1.on.aws",
                "stage": "$default",
                "time": "05/Mar/2024:14:22:00 +0000",
                "timeEpoch": 1709648520000i64,
                "http": {
                    "method": "POST",
                    "sourceIp": "203.0.113.7",
                    "userAgent": "curl/8.4.0",
                    "protocol": "HTTP/1.1"
                }
            }
        });

        let req = RequestEvent::from_value(&event);
        assert_eq!(req.raw_path, "/pdf-to-markdown/test.pdf");
        assert_eq!(req.raw_query_string, "a=1");
        assert_eq!(req.method, "POST");
        assert_eq!(req.source_ip, "203.0.113.7");
        assert_eq!(req.user_agent, "curl/8.4.0");
        assert_eq!(req.protocol, "HTTP/1.1");
        assert_eq!(req.headers.len(), 2);
        assert_eq!(req.query_parameters.get("a"), Some(&json!("1")));
        assert_eq!(req.body, "aGVsbG8=");
        assert!(req.is_base64_encoded);
        assert_eq!(req.domain_name, "example.lambda-url.us-east-1.on.aws");
        assert_eq!(req.stage, "$default");
        assert_eq!(req.time, "05/Mar/2024:14:22:00 +0000");
        assert_eq!(req.time_epoch, 1709648520000);
    }

    #[test]
    fn test_empty_event_uses_defaults() {
        let req = RequestEvent::from_value(&json!({}));
        assert_eq!(req.raw_path, "");
        assert_eq!(req.raw_query_string, "");
        assert_eq!(req.method, "UNKNOWN");
        assert_eq!(req.source_ip, "unknown");
        assert_eq!(req.user_agent, "unknown");
        assert_eq!(req.protocol, "unknown");
        assert!(req.headers.is_empty());
        assert!(req.query_parameters.is_empty());
        assert_eq!(req.body, "");
        assert!(!req.is_base64_encoded);
        assert_eq!(req.domain_name, "");
        assert_eq!(req.stage, "");
        assert_eq!(req.time, "");
        assert_eq!(req.time_epoch, 0);
    }

    #[test]
    fn test_non_object_event() {
        for event in [json!(null), json!([1, 2, 3]), json!("hello"), json!(42)] {
            assert_eq!(
                RequestEvent::from_value(&event),
                RequestEvent::from_value(&json!({}))
            );
        }
    }

    #[test]
    fn test_wrong_kinds_fall_back() {
        let event = json!({
            "rawPath": 17,
            "headers": ["not", "a", "map"],
            "queryStringParameters": null,
            "body": null,
            "isBase64Encoded": "yes",
            "requestContext": {
                "http": "GET",
                "timeEpoch": "soon"
            }
        });

        let req = RequestEvent::from_value(&event);
        assert_eq!(req.raw_path, "");
        assert!(req.headers.is_empty());
        assert!(req.query_parameters.is_empty());
        assert_eq!(req.body, "");
        assert!(!req.is_base64_encoded);
        assert_eq!(req.method, "UNKNOWN");
        assert_eq!(req.time_epoch, 0);
    }

    #[test]
    fn test_float_epoch_truncates() {
        let event = json!({ "requestContext": { "timeEpoch": 1709648520000.9 } });
        assert_eq!(RequestEvent::from_value(&event).time_epoch, 1709648520000);
    }
}
