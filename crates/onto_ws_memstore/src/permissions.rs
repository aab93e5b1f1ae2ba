//! In-memory permission store with an explicit grant table.
//!
//! Denials carry the auth collaborator's own descriptor shape, so pipeline
//! tests can assert verbatim propagation of a foreign service's error.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use onto_ws_core::error::{ErrorDescriptor, Severity};
use onto_ws_core::identity::Identity;
use onto_ws_core::ports::PermissionStore;
use onto_ws_core::response::WsFailure;

pub const AUTH_SERVICE_PATH: &str = "/ws/auth/validator/";

/// Grant table of (identity, scope URI) pairs. Every check is recorded in
/// call order for assertions.
pub struct MemPermissionStore {
    grants: Mutex<HashSet<(String, String)>>,
    checks: Mutex<Vec<(String, String)>>,
}

impl MemPermissionStore {
    pub fn new() -> Self {
        Self {
            grants: Mutex::new(HashSet::new()),
            checks: Mutex::new(Vec::new()),
        }
    }

    pub fn grant(&self, identity: impl Into<String>, scope_uri: impl Into<String>) {
        self.grants
            .lock()
            .unwrap()
            .insert((identity.into(), scope_uri.into()));
    }

    /// Checks performed so far, as (identity, scope URI) in call order.
    pub fn checks(&self) -> Vec<(String, String)> {
        self.checks.lock().unwrap().clone()
    }

    pub fn check_count(&self) -> usize {
        self.checks.lock().unwrap().len()
    }

    fn denial(identity: &Identity, scope_uri: &str) -> WsFailure {
        WsFailure {
            status: 403,
            status_message: "Forbidden".to_string(),
            status_message_ext: "Unauthorized access".to_string(),
            error: ErrorDescriptor {
                id: "WS-AUTH-VALIDATOR-303".to_string(),
                service: AUTH_SERVICE_PATH.to_string(),
                name: "No access defined".to_string(),
                description: "No access defined for this identity on the requested scope"
                    .to_string(),
                debug_info: format!("{identity} has no delete access on {scope_uri}"),
                level: Severity::Warning,
            },
        }
    }
}

impl Default for MemPermissionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PermissionStore for MemPermissionStore {
    async fn check(&self, identity: &Identity, scope_uri: &str) -> Result<(), WsFailure> {
        self.checks
            .lock()
            .unwrap()
            .push((identity.to_string(), scope_uri.to_string()));
        let granted = self
            .grants
            .lock()
            .unwrap()
            .contains(&(identity.to_string(), scope_uri.to_string()));
        if granted {
            Ok(())
        } else {
            Err(Self::denial(identity, scope_uri))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn grant_allows_and_is_recorded() {
        let store = MemPermissionStore::new();
        store.grant("alice", "http://ex.org/wsf/ontologies/");
        let result = store
            .check(&Identity::new("alice"), "http://ex.org/wsf/ontologies/")
            .await;
        assert!(result.is_ok());
        assert_eq!(
            store.checks(),
            vec![("alice".to_string(), "http://ex.org/wsf/ontologies/".to_string())]
        );
    }

    #[tokio::test]
    async fn denial_carries_auth_service_descriptor() {
        let store = MemPermissionStore::new();
        let err = store
            .check(&Identity::new("mallory"), "http://ex.org/onto")
            .await
            .unwrap_err();
        assert_eq!(err.status, 403);
        assert_eq!(err.error.service, AUTH_SERVICE_PATH);
        assert_eq!(err.error.level, Severity::Warning);
        assert!(err.error.debug_info.contains("mallory"));
        assert!(err.error.debug_info.contains("http://ex.org/onto"));
    }
}
