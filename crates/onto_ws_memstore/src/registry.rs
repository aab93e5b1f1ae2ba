//! In-memory registry statements: ontology hold markers in the datasets
//! graph.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use onto_ws_core::error::StoreError;
use onto_ws_core::ports::{RegistryStore, StoreResult};

/// Hold markers keyed by ontology URI, scoped to one datasets graph.
pub struct MemRegistryStore {
    datasets_graph: String,
    markers: Mutex<HashSet<String>>,
    fail_removals: AtomicBool,
}

impl MemRegistryStore {
    pub fn new(datasets_graph: impl Into<String>) -> Self {
        Self {
            datasets_graph: datasets_graph.into(),
            markers: Mutex::new(HashSet::new()),
            fail_removals: AtomicBool::new(false),
        }
    }

    pub fn datasets_graph(&self) -> &str {
        &self.datasets_graph
    }

    pub fn set_hold_marker(&self, ontology_uri: impl Into<String>) {
        self.markers.lock().unwrap().insert(ontology_uri.into());
    }

    pub fn has_hold_marker(&self, ontology_uri: &str) -> bool {
        self.markers.lock().unwrap().contains(ontology_uri)
    }

    /// Make every subsequent marker removal fail, until reset.
    pub fn fail_removals(&self, fail: bool) {
        self.fail_removals.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl RegistryStore for MemRegistryStore {
    async fn remove_hold_marker(&self, ontology_uri: &str) -> StoreResult<()> {
        if self.fail_removals.load(Ordering::SeqCst) {
            return Err(StoreError::Internal(anyhow::anyhow!(
                "delete statement refused by {}",
                self.datasets_graph
            )));
        }
        // Removing an absent marker is a no-op, like a SPARQL delete of a
        // triple that is not there.
        self.markers.lock().unwrap().remove(ontology_uri);
        Ok(())
    }
}
