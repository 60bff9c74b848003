//! FCM HTTP v1 client.

use fcm_core::{Message, MulticastReport, SendReport, SendResponse};

use crate::{Messaging, SendError};

const DEFAULT_ENDPOINT: &str = "https://fcm.googleapis.com";

/// HTTP v1 API client for one FCM project.
pub struct FcmClient {
    http: reqwest::Client,
    endpoint: String,
    project_id: String,
    access_token: String,
}

impl FcmClient {
    /// Create a client for a project.
    ///
    /// `access_token` is an OAuth2 bearer token scoped for Firebase
    /// messaging; acquiring and refreshing it is the caller's concern.
    pub fn new(project_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            project_id: project_id.into(),
            access_token: access_token.into(),
        }
    }

    /// Override the API endpoint (tests, private gateways).
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    fn send_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/messages:send",
            self.endpoint, self.project_id
        )
    }
}

impl Messaging for FcmClient {
    async fn send(&self, message: &Message) -> Result<SendResponse, SendError> {
        tracing::debug!(project = %self.project_id, "sending FCM message");

        let response = self
            .http
            .post(self.send_url())
            .bearer_auth(&self.access_token)
            .json(&serde_json::json!({ "message": message }))
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        parse_send_response(status, &body)
    }

    async fn send_multicast(
        &self,
        message: &Message,
        tokens: &[String],
    ) -> Result<MulticastReport, SendError> {
        // v1 has no batch endpoint; fan out and collect per-target outcomes.
        let mut report = MulticastReport::default();

        for token in tokens {
            let mut per_token = message.clone();
            let outgoing = per_token.for_token(token);
            match self.send(&outgoing).await {
                Ok(response) => report.push(SendReport::success(token, response)),
                Err(error) => report.push(SendReport::failure(token, error)),
            }
        }

        Ok(report)
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(serde::Deserialize, Default)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    details: Vec<serde_json::Value>,
}

/// Classify one completed HTTP exchange.
fn parse_send_response(status: u16, body: &str) -> Result<SendResponse, SendError> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body).map_err(|_| SendError::Response {
            status,
            body: body.to_owned(),
        });
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => {
            let code = error_code(&parsed.error);
            if code.is_empty() {
                return Err(SendError::Response {
                    status,
                    body: body.to_owned(),
                });
            }
            Err(SendError::Messaging {
                code,
                message: parsed.error.message,
            })
        }
        Err(_) => Err(SendError::Response {
            status,
            body: body.to_owned(),
        }),
    }
}

/// The FCM-specific error code when present, else the RPC status.
fn error_code(error: &ErrorDetail) -> String {
    error
        .details
        .iter()
        .filter(|detail| {
            detail["@type"]
                .as_str()
                .is_some_and(|ty| ty.ends_with("fcm.v1.FcmError"))
        })
        .find_map(|detail| detail["errorCode"].as_str())
        .map(str::to_owned)
        .unwrap_or_else(|| error.status.clone())
}
