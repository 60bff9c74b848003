//! Send acknowledgments and per-target reports.

/// Ack for one accepted message.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SendResponse {
    /// Message resource name, `projects/*/messages/{message_id}`.
    pub name: String,
}

impl SendResponse {
    /// The trailing message id of the resource name.
    pub fn message_id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }
}

/// Outcome for one target within a multicast send.
#[derive(Debug, Clone)]
pub struct SendReport {
    /// Device token that was targeted.
    pub token: String,
    /// Ack, if the send was accepted.
    pub response: Option<SendResponse>,
    /// Error message, if the send failed.
    pub error: Option<String>,
}

impl SendReport {
    pub fn success(token: impl Into<String>, response: SendResponse) -> Self {
        Self {
            token: token.into(),
            response: Some(response),
            error: None,
        }
    }

    pub fn failure(token: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self {
            token: token.into(),
            response: None,
            error: Some(error.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Ordered per-target outcomes of one multicast call.
#[derive(Debug, Clone, Default)]
pub struct MulticastReport {
    items: Vec<SendReport>,
}

impl MulticastReport {
    pub fn new(items: Vec<SendReport>) -> Self {
        Self { items }
    }

    pub fn push(&mut self, report: SendReport) {
        self.items.push(report);
    }

    pub fn items(&self) -> &[SendReport] {
        &self.items
    }

    pub fn success_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.items.len() - self.success_count()
    }

    pub fn has_failures(&self) -> bool {
        self.items.iter().any(|item| !item.is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_id_from_resource_name() {
        let response = SendResponse {
            name: "projects/demo/messages/abc123".into(),
        };
        assert_eq!(response.message_id(), "abc123");
    }

    #[test]
    fn test_report_counts() {
        let ok = SendResponse {
            name: "projects/demo/messages/1".into(),
        };
        let mut report = MulticastReport::default();
        report.push(SendReport::success("a", ok));
        report.push(SendReport::failure("b", "unregistered"));

        assert_eq!(report.success_count(), 1);
        assert_eq!(report.failure_count(), 1);
        assert!(report.has_failures());
    }
}
