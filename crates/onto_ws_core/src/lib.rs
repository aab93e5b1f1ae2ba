//! Ontology delete web service core: domain types, the error catalog, port
//! traits for every external collaborator, and the delete pipeline that
//! sequences authorization, store mutation, and cascade.
//! Adapter crates implement the ports; this crate stays transport-free.

pub mod cascade;
pub mod config;
pub mod deleter;
pub mod error;
pub mod gate;
pub mod identity;
pub mod ns;
pub mod pipeline;
pub mod ports;
pub mod response;
pub mod types;

pub use cascade::CascadeCoordinator;
pub use config::{ServiceConfig, ServiceProfile, SERVICE_TITLE};
pub use deleter::OntologyResourceDeleter;
pub use error::{CatalogEntry, ErrorCode, ErrorDescriptor, Severity, StoreError, SERVICE_PATH};
pub use gate::PermissionGate;
pub use identity::{Identity, IdentityPair};
pub use pipeline::DeletePipeline;
pub use response::{ResponseState, WsFailure};
pub use types::{CrudProfile, DeleteRequest, ResourceTarget};
