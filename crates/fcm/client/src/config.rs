//! Client configuration loading.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{FcmClient, MessagingManager};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// FCM client configuration.
///
/// ```toml
/// project_id = "my-app"
/// access_token = "ya29.default"
///
/// [projects.staging]
/// project_id = "my-app-staging"
/// access_token = "ya29.staging"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Default project, used when a notification gives no override.
    pub project_id: String,
    pub access_token: String,

    /// API endpoint override; defaults to the public FCM endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Additional projects addressable by notification override.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub projects: HashMap<String, ProjectConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub project_id: String,
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl ClientConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Build the client registry this config describes.
    pub fn into_manager(self) -> MessagingManager<FcmClient> {
        let default = build_client(&self.project_id, &self.access_token, self.endpoint.as_deref());
        let mut manager = MessagingManager::new(default);

        for (key, project) in self.projects {
            let client = build_client(
                &project.project_id,
                &project.access_token,
                project.endpoint.as_deref(),
            );
            manager = manager.with_project(key, client);
        }

        manager
    }
}

fn build_client(project_id: &str, access_token: &str, endpoint: Option<&str>) -> FcmClient {
    let client = FcmClient::new(project_id, access_token);
    match endpoint {
        Some(endpoint) => client.with_endpoint(endpoint),
        None => client,
    }
}
