//! Destructive operations against the ontology store for one target kind.

use std::sync::Arc;

use crate::error::{ErrorCode, StoreError};
use crate::ns::wsf;
use crate::ports::{OntologyHandle, OntologySession, RegistryStore};
use crate::response::WsFailure;
use crate::types::ResourceTarget;

/// Performs the store-level deletion for one request.
pub struct OntologyResourceDeleter {
    registry: Arc<dyn RegistryStore>,
}

impl OntologyResourceDeleter {
    pub fn new(registry: Arc<dyn RegistryStore>) -> Self {
        Self { registry }
    }

    /// Resolve the ontology on the given session and delete the target.
    /// URI presence has already been validated by the orchestrator.
    ///
    /// Entity kinds set the modified annotation only after a successful
    /// removal. The whole-ontology kind deletes the object, then clears the
    /// registry hold marker as a separate statement; a marker failure is
    /// logged and swallowed, and the object delete is never rolled back.
    pub async fn delete(
        &self,
        session: &dyn OntologySession,
        ontology_uri: &str,
        target: &ResourceTarget,
    ) -> Result<(), WsFailure> {
        let ontology = session
            .resolve(ontology_uri)
            .await
            .map_err(|err| resolve_failure(ontology_uri, &err))?;

        match target {
            ResourceTarget::Class { uri } => {
                ontology
                    .remove_class(uri)
                    .await
                    .map_err(|err| store_failure("remove_class", &err))?;
                self.mark_modified(ontology.as_ref()).await?;
            }
            ResourceTarget::Property { uri } => {
                ontology
                    .remove_property(uri)
                    .await
                    .map_err(|err| store_failure("remove_property", &err))?;
                self.mark_modified(ontology.as_ref()).await?;
            }
            ResourceTarget::NamedIndividual { uri } => {
                ontology
                    .remove_named_individual(uri)
                    .await
                    .map_err(|err| store_failure("remove_named_individual", &err))?;
                self.mark_modified(ontology.as_ref()).await?;
            }
            ResourceTarget::Ontology => {
                ontology
                    .delete()
                    .await
                    .map_err(|err| store_failure("delete", &err))?;
                if let Err(err) = self.registry.remove_hold_marker(ontology_uri).await {
                    tracing::warn!(
                        ontology = ontology_uri,
                        error = %err,
                        "hold marker removal failed, continuing"
                    );
                }
            }
        }

        Ok(())
    }

    async fn mark_modified(&self, ontology: &dyn OntologyHandle) -> Result<(), WsFailure> {
        ontology
            .add_annotation(wsf::ONTOLOGY_MODIFIED, "true")
            .await
            .map_err(|err| store_failure("add_annotation", &err))
    }
}

fn resolve_failure(ontology_uri: &str, err: &StoreError) -> WsFailure {
    WsFailure::bad_request(
        ErrorCode::OntologyLoadFailure,
        format!("{ontology_uri}: {err}"),
    )
}

fn store_failure(operation: &str, err: &StoreError) -> WsFailure {
    WsFailure::bad_request(
        ErrorCode::StoreOperationFailure,
        format!("{operation}: {err}"),
    )
}
