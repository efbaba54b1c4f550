/// HTTP client for the booking endpoint
///
/// The endpoint accepts the serialized draft as a JSON POST and answers
/// with `{success, message}` on acceptance or `{error}` on rejection.
/// Every transport-level problem (unreachable host, timeout, unreadable
/// body) is folded into `SubmitError::Network` so the caller only ever
/// sees the three-way outcome: accepted, rejected, or network failure.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::state::booking::BookingDraft;

/// Hosted booking function; override with the BOOKING_ENDPOINT env var
pub const DEFAULT_ENDPOINT: &str =
    "https://functions.poehali.dev/57ffdf7c-4ede-460b-8321-02f137f7df9f/booking";

/// Acknowledgment body of a successful submission.
/// A 2xx status alone confirms acceptance; the body is informational.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingAck {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Why a submission attempt did not succeed
#[derive(Debug, Clone, Error)]
pub enum SubmitError {
    /// The endpoint was reached but declined the request
    #[error("booking rejected: {0}")]
    Rejected(String),
    /// The request could not be completed at all
    #[error("network failure: {0}")]
    Network(String),
}

/// Client for the remote booking endpoint
#[derive(Debug, Clone)]
pub struct BookingClient {
    client: Client,
    endpoint: String,
}

impl BookingClient {
    /// Create a client for the given endpoint URL
    pub fn new(endpoint: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, endpoint }
    }

    /// Submit a booking draft and classify the outcome.
    /// The draft itself is the wire payload.
    pub async fn submit(&self, draft: &BookingDraft) -> Result<BookingAck, SubmitError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(draft)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        classify_response(status, &body)
    }
}

/// Rejection body of a declined submission
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Map a completed HTTP exchange onto the submission outcome.
///
/// Any 2xx status is acceptance regardless of body shape. On rejection
/// the server's `error` text is passed through verbatim when the body
/// parses; otherwise a generic message carries the status code.
fn classify_response(status: StatusCode, body: &str) -> Result<BookingAck, SubmitError> {
    if status.is_success() {
        return Ok(serde_json::from_str(body).unwrap_or_default());
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| format!("Сервер вернул ошибку {}", status.as_u16()));

    Err(SubmitError::Rejected(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_2xx_is_accepted() {
        let ack = classify_response(
            StatusCode::OK,
            r#"{"success": true, "message": "Заявка принята"}"#,
        )
        .unwrap();

        assert!(ack.success);
        assert_eq!(ack.message.as_deref(), Some("Заявка принята"));
    }

    #[test]
    fn test_2xx_with_unparseable_body_is_still_accepted() {
        // Status alone confirms acceptance
        assert!(classify_response(StatusCode::OK, "not json at all").is_ok());
    }

    #[test]
    fn test_rejection_passes_server_message_through() {
        let err = classify_response(
            StatusCode::BAD_REQUEST,
            r#"{"error": "Room unavailable"}"#,
        )
        .unwrap_err();

        match err {
            SubmitError::Rejected(msg) => assert_eq!(msg, "Room unavailable"),
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_rejection_without_error_field_gets_generic_message() {
        let err = classify_response(StatusCode::INTERNAL_SERVER_ERROR, "oops").unwrap_err();

        match err {
            SubmitError::Rejected(msg) => assert!(msg.contains("500")),
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_network_failure() {
        // Nothing listens on the discard port, so the connection is refused
        let client = BookingClient::new("http://127.0.0.1:9/booking".to_string());
        let draft = BookingDraft {
            name: "Ivan".to_string(),
            phone: "+79991234567".to_string(),
            dates: "01.06-07.06".to_string(),
            guests: "2".to_string(),
            message: String::new(),
        };

        match client.submit(&draft).await {
            Err(SubmitError::Network(_)) => {}
            other => panic!("expected network failure, got {:?}", other),
        }
    }
}
