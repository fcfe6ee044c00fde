//! Wire types and the blocking call against the query endpoint.

use serde::{Deserialize, Serialize};

use crate::http_client;

const MAX_RESPONSE_BYTES: usize = 4 * 1024 * 1024;

/// Fallback message when an error body carries no usable `detail` field.
const UNKNOWN_ERROR: &str = "Unknown error";

/// Request body sent to the query endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct QueryRequest {
    pub question: String,
}

/// One result row: column name to JSON value, in the server's key order.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Verdict describing how trustworthy the returned SQL/data is judged to be.
///
/// `status` is an open string set ("valid", "warning", "invalid", ...); the
/// UI passes any value through rather than whitelisting.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Verification {
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub reason: String,
}

impl Default for Verification {
    fn default() -> Self {
        Self {
            status: default_status(),
            confidence: 0.0,
            reason: String::new(),
        }
    }
}

fn default_status() -> String {
    "unverified".to_string()
}

/// Parsed success response. Fields the server omitted decode to empty
/// defaults rather than failing the whole response.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryResponse {
    pub sql: String,
    pub data: Vec<Row>,
    pub verification: Verification,
}

/// Failures surfaced to the console as the single error state.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The service answered with a non-2xx status; message is its `detail`.
    #[error("{0}")]
    Server(String),
    /// The request never completed.
    #[error("HTTP error: {0}")]
    Transport(String),
    /// The service answered 2xx with an undecodable body.
    #[error("Invalid response: {0}")]
    Json(String),
}

#[derive(Debug, Deserialize)]
struct QueryResponseWire {
    sql: Option<String>,
    data: Option<Vec<Row>>,
    verification: Option<Verification>,
}

/// POST the question to the endpoint and parse the answer.
pub fn run_query(endpoint: &str, question: &str) -> Result<QueryResponse, QueryError> {
    let request = QueryRequest {
        question: question.to_string(),
    };
    let response = match http_client::agent()
        .post(endpoint)
        .set("Accept", "application/json")
        .set("Content-Type", "application/json")
        .send_json(&request)
    {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            let body = read_body_limited(response).unwrap_or_default();
            tracing::warn!("Query endpoint returned HTTP {code}");
            return Err(QueryError::Server(error_detail(&body)));
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(QueryError::Transport(err.to_string()));
        }
    };

    let body = read_body_limited(response).map_err(QueryError::Json)?;
    parse_query_response(&body)
}

/// Extract the `detail` message from an error body, with a generic fallback.
pub(crate) fn error_detail(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body.trim())
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(|detail| detail.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
}

pub(crate) fn parse_query_response(body: &str) -> Result<QueryResponse, QueryError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(QueryError::Json("Empty response body".to_string()));
    }
    let wire: QueryResponseWire =
        serde_json::from_str(trimmed).map_err(|err| QueryError::Json(err.to_string()))?;
    Ok(QueryResponse {
        sql: wire.sql.unwrap_or_default(),
        data: wire.data.unwrap_or_default(),
        verification: wire.verification.unwrap_or_default(),
    })
}

fn read_body_limited(response: ureq::Response) -> Result<String, String> {
    let bytes = http_client::read_response_bytes(response, MAX_RESPONSE_BYTES)
        .map_err(|err| err.to_string())?;
    String::from_utf8(bytes).map_err(|err| err.to_string())
}
