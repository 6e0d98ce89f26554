use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::trip_id::TripId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripApiErrorKind {
    /// The request never produced a response.
    Network,
    /// A response arrived but its body was not the expected JSON.
    Decode,
    /// The request could not be assembled.
    Request,
}

impl TripApiErrorKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Decode => "decode",
            Self::Request => "request",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} error (status {status_code}): {message}", .kind.as_str())]
pub struct TripApiError {
    pub kind: TripApiErrorKind,
    /// HTTP status, or 0 when no response was received.
    pub status_code: u16,
    pub message: String,
}

impl TripApiError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: TripApiErrorKind::Network,
            status_code: 0,
            message: message.into(),
        }
    }

    pub fn decode(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            kind: TripApiErrorKind::Decode,
            status_code,
            message: message.into(),
        }
    }

    pub fn request(message: impl Into<String>) -> Self {
        Self {
            kind: TripApiErrorKind::Request,
            status_code: 0,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct DeleteTripResponse {
    #[serde(default)]
    pub success: bool,
}

/// Result of `POST /generate`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawGenerateResponse")]
pub enum GenerateTripResponse {
    Created { trip_id: TripId },
    Rejected { error: String },
}

#[derive(Deserialize)]
struct RawGenerateResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    trip_id: Option<TripId>,
}

impl TryFrom<RawGenerateResponse> for GenerateTripResponse {
    type Error = String;

    fn try_from(raw: RawGenerateResponse) -> Result<Self, Self::Error> {
        if let Some(error) = raw.error.filter(|error| !error.is_empty()) {
            return Ok(Self::Rejected { error });
        }
        raw.trip_id
            .map(|trip_id| Self::Created { trip_id })
            .ok_or_else(|| "response carried neither trip_id nor error".to_string())
    }
}

/// Backend calls the controllers depend on.
///
/// Futures are not `Send`: browser handles live on the page's single thread.
#[async_trait(?Send)]
pub trait TripApi {
    /// Serialized generation form, forwarded to the backend unmodified.
    type Payload;

    async fn delete_trip(&self, trip_id: &TripId) -> Result<DeleteTripResponse, TripApiError>;
    async fn generate_trip(
        &self,
        payload: Self::Payload,
    ) -> Result<GenerateTripResponse, TripApiError>;
}

/// Decodes a response body without looking at the status first; the backend
/// reports validation failures as JSON on 4xx/5xx responses.
pub fn decode_trip_response<T: DeserializeOwned>(
    status_code: u16,
    raw: &str,
) -> Result<T, TripApiError> {
    serde_json::from_str(raw).map_err(|error| {
        TripApiError::decode(status_code, format!("failed to decode response: {error}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_response_defaults_to_failure() {
        let missing: DeleteTripResponse = decode_trip_response(200, "{}").expect("decoded");
        assert!(!missing.success);
        let ok: DeleteTripResponse =
            decode_trip_response(200, r#"{"success":true}"#).expect("decoded");
        assert!(ok.success);
    }

    #[test]
    fn generate_response_prefers_non_empty_error() {
        let rejected: GenerateTripResponse =
            decode_trip_response(400, r#"{"error":"bad input","trip_id":3}"#).expect("decoded");
        assert_eq!(
            rejected,
            GenerateTripResponse::Rejected {
                error: "bad input".to_string()
            }
        );

        let created: GenerateTripResponse =
            decode_trip_response(200, r#"{"error":"","trip_id":3}"#).expect("decoded");
        assert_eq!(
            created,
            GenerateTripResponse::Created {
                trip_id: TripId::from(3_u64)
            }
        );
    }

    #[test]
    fn generate_response_without_id_or_error_is_a_decode_error() {
        let error = decode_trip_response::<GenerateTripResponse>(200, r#"{"status":"ok"}"#)
            .expect_err("expected decode failure");
        assert_eq!(error.kind, TripApiErrorKind::Decode);
        assert_eq!(error.status_code, 200);
    }

    #[test]
    fn html_error_pages_fail_to_decode_with_status() {
        let error =
            decode_trip_response::<DeleteTripResponse>(404, "<!doctype html><h1>Not Found</h1>")
                .expect_err("expected decode failure");
        assert_eq!(error.kind, TripApiErrorKind::Decode);
        assert_eq!(error.status_code, 404);
        assert!(error.to_string().starts_with("decode error (status 404)"));
    }
}
