//! Top-level orchestration: authorization, validation, store deletion, and
//! cascade for one delete request.

use std::sync::Arc;

use tracing::Instrument;
use uuid::Uuid;

use crate::cascade::CascadeCoordinator;
use crate::config::{ServiceConfig, ServiceProfile};
use crate::deleter::OntologyResourceDeleter;
use crate::error::ErrorCode;
use crate::gate::PermissionGate;
use crate::ports::{
    DatasetDeregistrar, OntologyStore, PermissionStore, RecordDeleter, RegistryStore,
};
use crate::response::{ResponseState, WsFailure};
use crate::types::DeleteRequest;

/// Orchestrator for one delete request.
///
/// Stage order: authorize the requester, authorize the registered identity
/// when delegated, validate URI presence, store deletion, cascade. The
/// first failure is written to the response register and ends the run;
/// later stages never execute once the register is non-ok.
pub struct DeletePipeline {
    config: ServiceConfig,
    gate: PermissionGate,
    store: Arc<dyn OntologyStore>,
    deleter: OntologyResourceDeleter,
    cascade: CascadeCoordinator,
}

impl DeletePipeline {
    pub fn new(
        config: ServiceConfig,
        permissions: Arc<dyn PermissionStore>,
        store: Arc<dyn OntologyStore>,
        registry: Arc<dyn RegistryStore>,
        records: Arc<dyn RecordDeleter>,
        datasets: Arc<dyn DatasetDeregistrar>,
    ) -> Self {
        Self {
            config,
            gate: PermissionGate::new(permissions),
            store,
            deleter: OntologyResourceDeleter::new(registry),
            cascade: CascadeCoordinator::new(records, datasets),
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Registry-facing description of this endpoint.
    pub fn profile(&self) -> ServiceProfile {
        self.config.profile()
    }

    /// Run the pipeline to completion and return the response register.
    pub async fn run(&self, request: &DeleteRequest) -> ResponseState {
        let span = tracing::info_span!(
            "ontology_delete",
            request_id = %Uuid::new_v4(),
            ontology = %request.ontology_uri,
            kind = request.target.kind_str(),
        );
        self.run_stages(request).instrument(span).await
    }

    async fn run_stages(&self, request: &DeleteRequest) -> ResponseState {
        let mut state = ResponseState::new();

        if let Err(failure) = self.authorize(request).await {
            tracing::info!(status = failure.status, "authorization denied");
            state.apply(failure);
            return state;
        }
        tracing::debug!("authorized");

        if let Err(failure) = validate(request) {
            state.apply(failure);
            return state;
        }

        // The session lives until this function returns, so it is released
        // on the error exits as well as on success.
        let session = match self.store.checkout().await {
            Ok(session) => session,
            Err(err) => {
                state.apply(WsFailure::bad_request(
                    ErrorCode::StoreOperationFailure,
                    format!("checkout: {err}"),
                ));
                return state;
            }
        };

        if let Err(failure) = self
            .deleter
            .delete(session.as_ref(), &request.ontology_uri, &request.target)
            .await
        {
            state.apply(failure);
            return state;
        }
        tracing::debug!("store deletion committed");

        if let Err(failure) = self
            .cascade
            .cascade(&request.ontology_uri, &request.target, &request.identities)
            .await
        {
            tracing::info!(status = failure.status, "cascade collaborator failed");
            state.apply(failure);
            return state;
        }
        tracing::debug!("cascade completed");

        state
    }

    async fn authorize(&self, request: &DeleteRequest) -> Result<(), WsFailure> {
        let registry_scope = self.config.ontologies_scope();
        let identities = &request.identities;

        self.gate
            .authorize(&identities.requester, &request.ontology_uri, &registry_scope)
            .await?;
        if identities.is_delegated() {
            self.gate
                .authorize(&identities.registered, &request.ontology_uri, &registry_scope)
                .await?;
        }
        Ok(())
    }
}

/// URI presence checks. Run only after authorization has passed; the
/// ontology URI is checked before the kind-specific one.
fn validate(request: &DeleteRequest) -> Result<(), WsFailure> {
    if request.ontology_uri.is_empty() {
        return Err(WsFailure::bad_request(ErrorCode::MissingOntologyUri, ""));
    }
    if let (Some(code), Some(uri)) = (
        request.target.missing_uri_code(),
        request.target.entity_uri(),
    ) {
        if uri.is_empty() {
            return Err(WsFailure::bad_request(code, ""));
        }
    }
    Ok(())
}
