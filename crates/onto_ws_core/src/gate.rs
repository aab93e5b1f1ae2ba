//! Two-tier permission evaluation: collection-level registry scope first,
//! specific resource scope as the fallback.

use std::sync::Arc;

use crate::identity::Identity;
use crate::ports::PermissionStore;
use crate::response::WsFailure;

/// Gate deciding whether one identity may mutate a target ontology.
pub struct PermissionGate {
    permissions: Arc<dyn PermissionStore>,
}

impl PermissionGate {
    pub fn new(permissions: Arc<dyn PermissionStore>) -> Self {
        Self { permissions }
    }

    /// Check `identity` against the registry scope, then against the
    /// resource scope if the registry denies. Either grant suffices.
    ///
    /// On a double denial only the resource-scope denial is surfaced; the
    /// registry denial is dropped. With an empty resource URI there is no
    /// fallback and the registry denial stands.
    pub async fn authorize(
        &self,
        identity: &Identity,
        resource_uri: &str,
        registry_uri: &str,
    ) -> Result<(), WsFailure> {
        match self.permissions.check(identity, registry_uri).await {
            Ok(()) => Ok(()),
            Err(registry_denial) => {
                if resource_uri.is_empty() {
                    return Err(registry_denial);
                }
                tracing::debug!(
                    identity = %identity,
                    scope = registry_uri,
                    "registry scope denied, falling back to resource scope"
                );
                self.permissions.check(identity, resource_uri).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::error::{ErrorDescriptor, Severity};

    const REGISTRY: &str = "http://ex.org/wsf/ontologies/";
    const RESOURCE: &str = "http://ex.org/onto";

    struct StubPermissions {
        granted: Vec<(String, String)>,
        checks: Mutex<Vec<String>>,
    }

    impl StubPermissions {
        fn new(granted: &[(&str, &str)]) -> Self {
            Self {
                granted: granted
                    .iter()
                    .map(|(i, s)| (i.to_string(), s.to_string()))
                    .collect(),
                checks: Mutex::new(Vec::new()),
            }
        }

        fn checks(&self) -> Vec<String> {
            self.checks.lock().unwrap().clone()
        }
    }

    fn denial(scope: &str) -> WsFailure {
        WsFailure {
            status: 403,
            status_message: "Forbidden".into(),
            status_message_ext: "Unauthorized access".into(),
            error: ErrorDescriptor {
                id: "WS-AUTH-VALIDATOR-303".into(),
                service: "/ws/auth/validator/".into(),
                name: "No access defined".into(),
                description: "No access defined for this identity on the requested scope".into(),
                debug_info: scope.into(),
                level: Severity::Warning,
            },
        }
    }

    #[async_trait]
    impl PermissionStore for StubPermissions {
        async fn check(&self, identity: &Identity, scope_uri: &str) -> Result<(), WsFailure> {
            self.checks.lock().unwrap().push(scope_uri.to_string());
            let granted = self
                .granted
                .iter()
                .any(|(i, s)| i == identity.as_str() && s == scope_uri);
            if granted {
                Ok(())
            } else {
                Err(denial(scope_uri))
            }
        }
    }

    #[tokio::test]
    async fn registry_grant_short_circuits() {
        let store = Arc::new(StubPermissions::new(&[("alice", REGISTRY)]));
        let gate = PermissionGate::new(store.clone());
        let result = gate
            .authorize(&Identity::new("alice"), RESOURCE, REGISTRY)
            .await;
        assert!(result.is_ok());
        assert_eq!(store.checks(), vec![REGISTRY.to_string()]);
    }

    #[tokio::test]
    async fn fallback_grants_on_resource_scope() {
        let store = Arc::new(StubPermissions::new(&[("alice", RESOURCE)]));
        let gate = PermissionGate::new(store.clone());
        let result = gate
            .authorize(&Identity::new("alice"), RESOURCE, REGISTRY)
            .await;
        assert!(result.is_ok());
        assert_eq!(store.checks(), vec![REGISTRY.to_string(), RESOURCE.to_string()]);
    }

    #[tokio::test]
    async fn double_denial_surfaces_resource_scope_error() {
        let store = Arc::new(StubPermissions::new(&[]));
        let gate = PermissionGate::new(store.clone());
        let err = gate
            .authorize(&Identity::new("alice"), RESOURCE, REGISTRY)
            .await
            .unwrap_err();
        assert_eq!(err.status, 403);
        assert_eq!(err.error.debug_info, RESOURCE);
        assert_eq!(store.checks().len(), 2);
    }

    #[tokio::test]
    async fn empty_resource_uri_keeps_registry_denial() {
        let store = Arc::new(StubPermissions::new(&[]));
        let gate = PermissionGate::new(store.clone());
        let err = gate
            .authorize(&Identity::new("alice"), "", REGISTRY)
            .await
            .unwrap_err();
        assert_eq!(err.error.debug_info, REGISTRY);
        assert_eq!(store.checks(), vec![REGISTRY.to_string()]);
    }
}
