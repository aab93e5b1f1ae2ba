//! In-memory implementations of every onto_ws_core port trait.
//! The reference store for embedded use, and the harness behind the
//! end-to-end pipeline tests in this crate's `tests/` directory.

pub mod collaborators;
pub mod permissions;
pub mod registry;
pub mod store;

pub use collaborators::{
    DeregisterCall, RecordDeleteCall, RecordingDatasetDeregistrar, RecordingRecordDeleter,
};
pub use permissions::{MemPermissionStore, AUTH_SERVICE_PATH};
pub use registry::MemRegistryStore;
pub use store::{MemOntology, MemOntologyStore};
