//! Port traits for the external collaborators of the delete pipeline.
//! Implemented by adapter crates; core logic depends only on these traits.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::identity::Identity;
use crate::response::WsFailure;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

// ── Permission store ──────────────────────────────────────────

/// Permission lookups for one identity against one scope URI.
#[async_trait]
pub trait PermissionStore: Send + Sync {
    /// Check whether `identity` may mutate resources under `scope_uri`.
    ///
    /// Ok means the store answered 200. A denial carries the store's own
    /// status, messages, and error descriptor; adapters map transport
    /// faults into a 5xx failure of the same shape.
    async fn check(&self, identity: &Identity, scope_uri: &str) -> Result<(), WsFailure>;
}

// ── Ontology store ────────────────────────────────────────────

/// Session pool for the ontology store bridge.
#[async_trait]
pub trait OntologyStore: Send + Sync {
    /// Check a session out of the pool for one pipeline run.
    ///
    /// The session is released by dropping it, on every exit path. Release
    /// is best-effort: drop cannot report failure, adapters may log one.
    async fn checkout(&self) -> StoreResult<Box<dyn OntologySession>>;
}

/// One checked-out store session.
#[async_trait]
pub trait OntologySession: Send + Sync {
    /// Resolve an ontology URI to a live handle.
    ///
    /// A URI that does not load is an [`StoreError::Unresolvable`] value,
    /// part of the signature rather than a thrown exception.
    async fn resolve(&self, ontology_uri: &str) -> StoreResult<Box<dyn OntologyHandle>>;
}

/// A resolved ontology, exposing the mutations the pipeline performs.
#[async_trait]
pub trait OntologyHandle: Send + Sync {
    async fn remove_class(&self, class_uri: &str) -> StoreResult<()>;

    async fn remove_property(&self, property_uri: &str) -> StoreResult<()>;

    async fn remove_named_individual(&self, individual_uri: &str) -> StoreResult<()>;

    /// Remove the whole ontology object from the store.
    async fn delete(&self) -> StoreResult<()>;

    /// Write an annotation statement on the ontology itself.
    async fn add_annotation(&self, property_uri: &str, value: &str) -> StoreResult<()>;
}

// ── Registry statements ───────────────────────────────────────

/// Statement-level registry mutations that run outside the ontology bridge.
#[async_trait]
pub trait RegistryStore: Send + Sync {
    /// Clear the hold marker flagging `ontology_uri` as present.
    ///
    /// Runs as its own statement, not atomic with the ontology object
    /// delete.
    async fn remove_hold_marker(&self, ontology_uri: &str) -> StoreResult<()>;
}

// ── Cascade collaborators ─────────────────────────────────────

/// Record-deletion subsystem invoked after an entity-level delete.
#[async_trait]
pub trait RecordDeleter: Send + Sync {
    /// Delete the record for `record_uri` in the dataset backing
    /// `ontology_uri`.
    ///
    /// The collaborator performs its own authorization and negotiation; a
    /// failure comes back in the caller's response shape and is copied
    /// verbatim, never re-derived.
    async fn delete_record(
        &self,
        record_uri: &str,
        ontology_uri: &str,
        registered: &Identity,
        requester: &Identity,
    ) -> Result<(), WsFailure>;
}

/// Dataset registry subsystem invoked after a whole-ontology delete.
#[async_trait]
pub trait DatasetDeregistrar: Send + Sync {
    /// Remove the dataset registration for `ontology_uri`. Same propagation
    /// contract as [`RecordDeleter::delete_record`].
    async fn deregister(
        &self,
        ontology_uri: &str,
        registered: &Identity,
        requester: &Identity,
    ) -> Result<(), WsFailure>;
}
