//! In-memory ontology store: a session pool facade over one shared graph.
//!
//! Sessions checked out of the pool all operate on the same shared map,
//! mirroring a single backing bridge. Checkout and mutation failures are
//! scriptable so pipeline tests can drive the error paths.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use onto_ws_core::error::StoreError;
use onto_ws_core::ports::{OntologyHandle, OntologySession, OntologyStore, StoreResult};

/// Contents of one loaded ontology.
#[derive(Debug, Clone, Default)]
pub struct MemOntology {
    pub classes: HashSet<String>,
    pub properties: HashSet<String>,
    pub individuals: HashSet<String>,
    pub annotations: HashMap<String, String>,
}

impl MemOntology {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, uri: impl Into<String>) -> Self {
        self.classes.insert(uri.into());
        self
    }

    pub fn with_property(mut self, uri: impl Into<String>) -> Self {
        self.properties.insert(uri.into());
        self
    }

    pub fn with_individual(mut self, uri: impl Into<String>) -> Self {
        self.individuals.insert(uri.into());
        self
    }
}

type SharedGraph = Arc<Mutex<HashMap<String, MemOntology>>>;

/// In-memory session pool.
pub struct MemOntologyStore {
    graph: SharedGraph,
    sessions_opened: AtomicUsize,
    refuse_checkouts: AtomicBool,
}

impl MemOntologyStore {
    pub fn new() -> Self {
        Self {
            graph: Arc::new(Mutex::new(HashMap::new())),
            sessions_opened: AtomicUsize::new(0),
            refuse_checkouts: AtomicBool::new(false),
        }
    }

    pub fn insert_ontology(&self, uri: impl Into<String>, ontology: MemOntology) {
        self.graph.lock().unwrap().insert(uri.into(), ontology);
    }

    /// Snapshot of one ontology's current contents.
    pub fn ontology(&self, uri: &str) -> Option<MemOntology> {
        self.graph.lock().unwrap().get(uri).cloned()
    }

    pub fn contains_ontology(&self, uri: &str) -> bool {
        self.graph.lock().unwrap().contains_key(uri)
    }

    /// Number of sessions handed out since construction.
    pub fn sessions_opened(&self) -> usize {
        self.sessions_opened.load(Ordering::SeqCst)
    }

    /// Make every subsequent checkout fail, until reset.
    pub fn refuse_checkouts(&self, refuse: bool) {
        self.refuse_checkouts.store(refuse, Ordering::SeqCst);
    }
}

impl Default for MemOntologyStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OntologyStore for MemOntologyStore {
    async fn checkout(&self) -> StoreResult<Box<dyn OntologySession>> {
        if self.refuse_checkouts.load(Ordering::SeqCst) {
            return Err(StoreError::SessionUnavailable(
                "pool refused the checkout".into(),
            ));
        }
        let opened = self.sessions_opened.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(sessions = opened, "ontology store session checked out");
        Ok(Box::new(MemSession {
            graph: self.graph.clone(),
        }))
    }
}

/// One checked-out session. Dropping it is the release.
pub struct MemSession {
    graph: SharedGraph,
}

#[async_trait]
impl OntologySession for MemSession {
    async fn resolve(&self, ontology_uri: &str) -> StoreResult<Box<dyn OntologyHandle>> {
        if !self.graph.lock().unwrap().contains_key(ontology_uri) {
            return Err(StoreError::Unresolvable(ontology_uri.to_string()));
        }
        Ok(Box::new(MemOntologyHandle {
            graph: self.graph.clone(),
            uri: ontology_uri.to_string(),
        }))
    }
}

/// Handle to one resolved ontology.
///
/// Mutations on an entity that is not present fail with
/// [`StoreError::Mutation`]; deletes are not idempotent at this layer.
pub struct MemOntologyHandle {
    graph: SharedGraph,
    uri: String,
}

impl MemOntologyHandle {
    fn mutate<T>(
        &self,
        f: impl FnOnce(&mut MemOntology) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let mut graph = self.graph.lock().unwrap();
        let ontology = graph
            .get_mut(&self.uri)
            .ok_or_else(|| StoreError::Mutation(format!("ontology {} no longer loaded", self.uri)))?;
        f(ontology)
    }
}

#[async_trait]
impl OntologyHandle for MemOntologyHandle {
    async fn remove_class(&self, class_uri: &str) -> StoreResult<()> {
        self.mutate(|o| {
            if o.classes.remove(class_uri) {
                Ok(())
            } else {
                Err(StoreError::Mutation(format!("class {class_uri} not present")))
            }
        })
    }

    async fn remove_property(&self, property_uri: &str) -> StoreResult<()> {
        self.mutate(|o| {
            if o.properties.remove(property_uri) {
                Ok(())
            } else {
                Err(StoreError::Mutation(format!(
                    "property {property_uri} not present"
                )))
            }
        })
    }

    async fn remove_named_individual(&self, individual_uri: &str) -> StoreResult<()> {
        self.mutate(|o| {
            if o.individuals.remove(individual_uri) {
                Ok(())
            } else {
                Err(StoreError::Mutation(format!(
                    "named individual {individual_uri} not present"
                )))
            }
        })
    }

    async fn delete(&self) -> StoreResult<()> {
        let removed = self.graph.lock().unwrap().remove(&self.uri);
        match removed {
            Some(_) => Ok(()),
            None => Err(StoreError::Mutation(format!(
                "ontology {} no longer loaded",
                self.uri
            ))),
        }
    }

    async fn add_annotation(&self, property_uri: &str, value: &str) -> StoreResult<()> {
        self.mutate(|o| {
            o.annotations
                .insert(property_uri.to_string(), value.to_string());
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolve_unknown_uri_is_unresolvable() {
        let store = MemOntologyStore::new();
        let session = store.checkout().await.unwrap();
        let err = session.resolve("http://ex.org/missing").await.err().unwrap();
        assert!(matches!(err, StoreError::Unresolvable(_)));
    }

    #[tokio::test]
    async fn removals_mutate_the_shared_graph() {
        let store = MemOntologyStore::new();
        store.insert_ontology(
            "http://ex.org/onto",
            MemOntology::new().with_class("http://ex.org/Foo"),
        );
        let session = store.checkout().await.unwrap();
        let handle = session.resolve("http://ex.org/onto").await.unwrap();
        handle.remove_class("http://ex.org/Foo").await.unwrap();
        assert!(store.ontology("http://ex.org/onto").unwrap().classes.is_empty());
    }

    #[tokio::test]
    async fn removing_an_absent_class_is_a_mutation_error() {
        let store = MemOntologyStore::new();
        store.insert_ontology("http://ex.org/onto", MemOntology::new());
        let session = store.checkout().await.unwrap();
        let handle = session.resolve("http://ex.org/onto").await.unwrap();
        let err = handle.remove_class("http://ex.org/Foo").await.unwrap_err();
        assert!(matches!(err, StoreError::Mutation(_)));
    }

    #[tokio::test]
    async fn checkout_counting_and_refusal() {
        let store = MemOntologyStore::new();
        assert_eq!(store.sessions_opened(), 0);
        store.checkout().await.unwrap();
        assert_eq!(store.sessions_opened(), 1);
        store.refuse_checkouts(true);
        let err = store.checkout().await.err().unwrap();
        assert!(matches!(err, StoreError::SessionUnavailable(_)));
        assert_eq!(store.sessions_opened(), 1);
    }

    #[tokio::test]
    async fn delete_removes_the_ontology_entry() {
        let store = MemOntologyStore::new();
        store.insert_ontology("http://ex.org/onto", MemOntology::new());
        let session = store.checkout().await.unwrap();
        let handle = session.resolve("http://ex.org/onto").await.unwrap();
        handle.delete().await.unwrap();
        assert!(!store.contains_ontology("http://ex.org/onto"));
        let err = handle.delete().await.unwrap_err();
        assert!(matches!(err, StoreError::Mutation(_)));
    }
}
