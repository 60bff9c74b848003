//! FCM v1 message model.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Data payload keys FCM refuses.
const RESERVED_DATA_KEYS: &[&str] = &["from", "notification", "message_type"];

/// Delivery target of a cloud message.
///
/// Serializes as the matching v1 field (`token`, `topic` or `condition`).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// A single device registration token.
    Token(String),
    /// A topic name, without the `/topics/` prefix.
    Topic(String),
    /// A boolean topic condition expression.
    Condition(String),
}

/// Notification content rendered by the platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Notification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Notification {
    /// Notification with a title and body.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: Some(body.into()),
            image: None,
        }
    }
}

/// Structured FCM v1 message (the `message` object of the send request).
///
/// The target is rewritten per token by the channel; everything else is
/// shared across tokens.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CloudMessage {
    /// Where the message is delivered.
    #[serde(flatten)]
    pub target: Option<Target>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,

    /// Custom key-value payload. Values must be strings in v1.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, String>,

    /// Android-specific overrides, passed through verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android: Option<serde_json::Value>,

    /// APNs-specific overrides, passed through verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apns: Option<serde_json::Value>,

    /// Webpush-specific overrides, passed through verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webpush: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fcm_options: Option<serde_json::Value>,
}

impl CloudMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of this message addressed at a single device token.
    #[must_use]
    pub fn with_token(mut self, token: &str) -> Self {
        self.target = Some(Target::Token(token.to_owned()));
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = Some(target);
        self
    }

    #[must_use]
    pub fn with_notification(mut self, notification: Notification) -> Self {
        self.notification = Some(notification);
        self
    }

    /// Add one data payload entry.
    #[must_use]
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_android(mut self, config: serde_json::Value) -> Self {
        self.android = Some(config);
        self
    }

    #[must_use]
    pub fn with_apns(mut self, config: serde_json::Value) -> Self {
        self.apns = Some(config);
        self
    }

    #[must_use]
    pub fn with_webpush(mut self, config: serde_json::Value) -> Self {
        self.webpush = Some(config);
        self
    }
}

/// Caller-assembled message body plus a mutable token field.
///
/// Unlike [`CloudMessage`], the same instance is reused across the tokens of
/// one send: the token field is rewritten in place between sends.
#[derive(Debug, Clone, Default)]
pub struct RawMessage {
    token: Option<String>,
    payload: serde_json::Value,
}

impl RawMessage {
    /// Wrap a caller-assembled v1 message body. Must be a JSON object.
    pub fn new(payload: serde_json::Value) -> Self {
        Self {
            token: None,
            payload,
        }
    }

    /// Point this message at a device token, replacing any previous one.
    pub fn set_token(&mut self, token: &str) {
        self.token = Some(token.to_owned());
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn payload(&self) -> &serde_json::Value {
        &self.payload
    }
}

impl Serialize for RawMessage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let serde_json::Value::Object(fields) = &self.payload {
            for (key, value) in fields {
                if key == "token" && self.token.is_some() {
                    continue;
                }
                map.serialize_entry(key, value)?;
            }
        }
        if let Some(token) = &self.token {
            map.serialize_entry("token", token)?;
        }
        map.end()
    }
}

/// Provider message, one of the two shapes a notification may produce.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(untagged)]
pub enum Message {
    Cloud(CloudMessage),
    Raw(RawMessage),
}

impl Message {
    /// Structural checks the type system cannot express.
    ///
    /// Runs before any send: a raw payload must be a JSON object, and cloud
    /// data keys must avoid the FCM reserved words.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Message::Cloud(cloud) => {
                for key in cloud.data.keys() {
                    if RESERVED_DATA_KEYS.contains(&key.as_str())
                        || key.starts_with("google.")
                        || key.starts_with("gcm.")
                    {
                        return Err(format!("reserved data key: {key}"));
                    }
                }
                Ok(())
            }
            Message::Raw(raw) => {
                if raw.payload.is_object() {
                    Ok(())
                } else {
                    Err("raw payload must be a JSON object".to_owned())
                }
            }
        }
    }

    /// The wire message for one device token.
    ///
    /// Cloud messages derive a copy with the target rewritten; raw messages
    /// have their token field updated in place and are shared across tokens.
    pub fn for_token(&mut self, token: &str) -> Cow<'_, Self> {
        if let Self::Raw(raw) = &mut *self {
            raw.set_token(token);
        }
        match &*self {
            Self::Cloud(cloud) => Cow::Owned(Self::Cloud(cloud.clone().with_token(token))),
            Self::Raw(_) => Cow::Borrowed(self),
        }
    }
}

impl From<CloudMessage> for Message {
    fn from(message: CloudMessage) -> Self {
        Message::Cloud(message)
    }
}

impl From<RawMessage> for Message {
    fn from(message: RawMessage) -> Self {
        Message::Raw(message)
    }
}
