//! HTTP client for the Sanity query API

use super::{ContentSource, GatewayError, Query};
use crate::config::ContentConfig;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Body returned by the query endpoint
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<QueryFailure>,
}

#[derive(Debug, Deserialize)]
struct QueryFailure {
    #[serde(default)]
    description: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

impl QueryFailure {
    fn message(&self) -> String {
        match (&self.description, &self.kind) {
            (Some(description), _) => description.clone(),
            (None, Some(kind)) => kind.clone(),
            (None, None) => "unknown query error".to_string(),
        }
    }
}

/// Read-only client for one project/dataset
#[derive(Debug, Clone)]
pub struct SanityClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SanityClient {
    pub fn new(config: &ContentConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("igreja-unida/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            endpoint: config.query_url(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Query string pairs: the GROQ text plus one `$name=<json>` per parameter
fn query_pairs(query: &Query) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(query.params.len() + 1);
    pairs.push(("query".to_string(), query.groq.clone()));
    for (name, value) in &query.params {
        pairs.push((format!("${name}"), value.to_string()));
    }
    pairs
}

fn decode_body(body: &str) -> Result<Value, GatewayError> {
    let response: QueryResponse =
        serde_json::from_str(body).map_err(|e| GatewayError::Decode(e.to_string()))?;

    if let Some(failure) = response.error {
        return Err(GatewayError::Query(failure.message()));
    }
    Ok(response.result.unwrap_or(Value::Null))
}

#[async_trait]
impl ContentSource for SanityClient {
    async fn fetch(&self, query: &Query) -> Result<Value, GatewayError> {
        tracing::debug!(query = query.label, "querying content store");

        let response = self
            .http
            .get(&self.endpoint)
            .query(&query_pairs(query))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // The store reports query errors with a 400 and a JSON body
            if let Ok(QueryResponse { error: Some(failure), .. }) = serde_json::from_str(&body) {
                return Err(GatewayError::Query(failure.message()));
            }
            return Err(GatewayError::from_status(status.as_u16(), &body));
        }

        decode_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::queries;
    use serde_json::json;

    #[test]
    fn test_query_pairs_encode_params_as_json() {
        let pairs = query_pairs(&queries::pastor_by_slug("joao"));
        assert_eq!(pairs[0].0, "query");
        assert_eq!(pairs[1], ("$slug".to_string(), "\"joao\"".to_string()));
    }

    #[test]
    fn test_decode_body_returns_result() {
        let value = decode_body(r#"{"ms": 3, "query": "*", "result": [{"nome": "A"}]}"#).unwrap();
        assert_eq!(value, json!([{"nome": "A"}]));
    }

    #[test]
    fn test_decode_body_missing_result_is_null() {
        assert_eq!(decode_body(r#"{"ms": 1}"#).unwrap(), Value::Null);
    }

    #[test]
    fn test_decode_body_reports_query_error() {
        let err = decode_body(
            r#"{"error": {"description": "expected ']'", "type": "queryParseError"}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, GatewayError::Query(ref msg) if msg == "expected ']'"));
    }

    #[test]
    fn test_decode_body_rejects_garbage() {
        assert!(matches!(decode_body("<html>"), Err(GatewayError::Decode(_))));
    }

    #[test]
    fn test_client_uses_configured_endpoint() {
        let client = SanityClient::new(&ContentConfig::default()).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://8u8f8r8d.apicdn.sanity.io/v2024-06-05/data/query/production"
        );
    }
}
