//! Deployment configuration for the delete endpoint, with the URI
//! derivations the pipeline and the adapters need.

use serde::{Deserialize, Serialize};

use crate::error::SERVICE_PATH;
use crate::types::CrudProfile;

pub const SERVICE_TITLE: &str = "Ontology Delete Web Service";

/// Base URLs of the hosting framework. `base_url` never keeps a trailing
/// slash; `wsf_graph` is always slash-terminated, so graph names concatenate
/// without separator juggling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    base_url: String,
    wsf_graph: String,
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>, wsf_graph: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let mut wsf_graph = wsf_graph.into();
        if !wsf_graph.ends_with('/') {
            wsf_graph.push('/');
        }
        Self { base_url, wsf_graph }
    }

    /// Read `ONTO_WS_BASE_URL` and `ONTO_WS_GRAPH`, falling back to the
    /// localhost defaults.
    pub fn from_env() -> Self {
        let base_url = std::env::var("ONTO_WS_BASE_URL")
            .unwrap_or_else(|_| "http://localhost".to_string());
        let wsf_graph = std::env::var("ONTO_WS_GRAPH")
            .unwrap_or_else(|_| "http://localhost/wsf/".to_string());
        Self::new(base_url, wsf_graph)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn wsf_graph(&self) -> &str {
        &self.wsf_graph
    }

    /// Collection-level permission scope covering all ontologies.
    pub fn ontologies_scope(&self) -> String {
        format!("{}ontologies/", self.wsf_graph)
    }

    /// Graph holding dataset registrations and ontology hold markers.
    pub fn datasets_graph(&self) -> String {
        format!("{}datasets/", self.wsf_graph)
    }

    /// Identity URI of this service in the registry.
    pub fn service_uri(&self) -> String {
        format!("{}/wsf{}", self.base_url, SERVICE_PATH)
    }

    /// HTTP endpoint URI.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, SERVICE_PATH)
    }

    pub fn profile(&self) -> ServiceProfile {
        ServiceProfile {
            service_uri: self.service_uri(),
            endpoint: self.endpoint(),
            title: SERVICE_TITLE.to_string(),
            crud: CrudProfile::delete_only(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new("http://localhost", "http://localhost/wsf/")
    }
}

/// Registry-facing description of this endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceProfile {
    pub service_uri: String,
    pub endpoint: String,
    pub title: String,
    pub crud: CrudProfile,
}
