//! Project-keyed client resolution.

use std::collections::HashMap;

/// Registry of messaging clients keyed by project id.
///
/// A lookup that misses falls back to the default client, so a missing
/// configuration entry downgrades to default-project delivery instead of
/// failing the call. Send failures are never a reason to fall back.
pub struct MessagingManager<M> {
    default: M,
    projects: HashMap<String, M>,
}

impl<M> MessagingManager<M> {
    pub fn new(default: M) -> Self {
        Self {
            default,
            projects: HashMap::new(),
        }
    }

    /// Register a client under a project id.
    #[must_use]
    pub fn with_project(mut self, project_id: impl Into<String>, client: M) -> Self {
        self.projects.insert(project_id.into(), client);
        self
    }

    /// The client for the given project, or the default.
    pub fn resolve(&self, project_id: Option<&str>) -> &M {
        match project_id {
            Some(id) => match self.projects.get(id) {
                Some(client) => client,
                None => {
                    tracing::debug!(project = %id, "no client bound for project, using default");
                    &self.default
                }
            },
            None => &self.default,
        }
    }

    pub fn default_client(&self) -> &M {
        &self.default
    }
}
