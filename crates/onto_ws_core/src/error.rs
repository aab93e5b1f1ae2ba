//! Error catalog for the ontology delete service, plus the store-level
//! error type surfaced by the ontology store ports.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Service path stamped on every catalog-originated error descriptor.
pub const SERVICE_PATH: &str = "/ws/ontology/delete/";

/// Severity attached to each catalog entry.
/// Warning covers client-input failures; Error covers store/server failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ── Catalog codes ─────────────────────────────────────────────

/// Stable failure codes raised by this service.
///
/// Codes `_200` through `_204` are client-input failures; `_300` and `_301`
/// are store failures. Authorization and cascade failures are not in this
/// catalog: their descriptors come from the failing collaborator verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// `_200`: unrecognised operation selector at the service boundary.
    UnknownOperation,
    /// `_201`: no ontology URI supplied.
    MissingOntologyUri,
    /// `_202`: property delete requested with an empty property URI.
    MissingPropertyUri,
    /// `_203`: named-individual delete requested with an empty URI.
    MissingIndividualUri,
    /// `_204`: class delete requested with an empty class URI.
    MissingClassUri,
    /// `_300`: the ontology URI does not resolve to a loadable ontology.
    OntologyLoadFailure,
    /// `_301`: the store failed a session checkout or a mutation statement.
    StoreOperationFailure,
}

/// One immutable catalog entry. Per-occurrence debug context is added by
/// [`ErrorCode::instantiate`], never stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub level: Severity,
}

const UNKNOWN_OPERATION: CatalogEntry = CatalogEntry {
    id: "WS-ONTOLOGY-DELETE-200",
    name: "Unknown function call",
    description: "The function call being requested is unknown or unsupported \
                  by this Ontology Delete web service endpoint",
    level: Severity::Warning,
};

const MISSING_ONTOLOGY_URI: CatalogEntry = CatalogEntry {
    id: "WS-ONTOLOGY-DELETE-201",
    name: "No Ontology URI defined for this request",
    description: "No Ontology URI defined for this request",
    level: Severity::Warning,
};

const MISSING_PROPERTY_URI: CatalogEntry = CatalogEntry {
    id: "WS-ONTOLOGY-DELETE-202",
    name: "No Property URI defined for this request",
    description: "No Property URI defined for this request",
    level: Severity::Warning,
};

const MISSING_INDIVIDUAL_URI: CatalogEntry = CatalogEntry {
    id: "WS-ONTOLOGY-DELETE-203",
    name: "No Named Individual URI defined for this request",
    description: "No Named Individual URI defined for this request",
    level: Severity::Warning,
};

const MISSING_CLASS_URI: CatalogEntry = CatalogEntry {
    id: "WS-ONTOLOGY-DELETE-204",
    name: "No Class URI defined for this request",
    description: "No Class URI defined for this request",
    level: Severity::Warning,
};

const ONTOLOGY_LOAD_FAILURE: CatalogEntry = CatalogEntry {
    id: "WS-ONTOLOGY-DELETE-300",
    name: "Can't load the ontology",
    description: "The ontology can't be loaded by the endpoint",
    level: Severity::Error,
};

const STORE_OPERATION_FAILURE: CatalogEntry = CatalogEntry {
    id: "WS-ONTOLOGY-DELETE-301",
    name: "Ontology store operation failed",
    description: "The ontology store reported a failure while performing the \
                  requested delete operation",
    level: Severity::Error,
};

impl ErrorCode {
    /// Short wire code, e.g. `"_201"`.
    pub fn code_str(&self) -> &'static str {
        match self {
            Self::UnknownOperation => "_200",
            Self::MissingOntologyUri => "_201",
            Self::MissingPropertyUri => "_202",
            Self::MissingIndividualUri => "_203",
            Self::MissingClassUri => "_204",
            Self::OntologyLoadFailure => "_300",
            Self::StoreOperationFailure => "_301",
        }
    }

    /// Static catalog lookup.
    pub fn entry(&self) -> &'static CatalogEntry {
        match self {
            Self::UnknownOperation => &UNKNOWN_OPERATION,
            Self::MissingOntologyUri => &MISSING_ONTOLOGY_URI,
            Self::MissingPropertyUri => &MISSING_PROPERTY_URI,
            Self::MissingIndividualUri => &MISSING_INDIVIDUAL_URI,
            Self::MissingClassUri => &MISSING_CLASS_URI,
            Self::OntologyLoadFailure => &ONTOLOGY_LOAD_FAILURE,
            Self::StoreOperationFailure => &STORE_OPERATION_FAILURE,
        }
    }

    /// Clone the catalog entry into a per-occurrence descriptor with the
    /// caller's debug context.
    pub fn instantiate(&self, debug_info: impl Into<String>) -> ErrorDescriptor {
        let entry = self.entry();
        ErrorDescriptor {
            id: entry.id.to_string(),
            service: SERVICE_PATH.to_string(),
            name: entry.name.to_string(),
            description: entry.description.to_string(),
            debug_info: debug_info.into(),
            level: entry.level,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code_str())
    }
}

// ── Error descriptor ──────────────────────────────────────────

/// Structured error surfaced to the caller.
///
/// Catalog-originated descriptors carry this service's path; descriptors
/// copied from a failing collaborator keep the collaborator's own id and
/// service path untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDescriptor {
    pub id: String,
    pub service: String,
    pub name: String,
    pub description: String,
    pub debug_info: String,
    pub level: Severity,
}

impl std::fmt::Display for ErrorDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.debug_info.is_empty() {
            write!(f, "[{}] {}", self.id, self.name)
        } else {
            write!(f, "[{}] {}: {}", self.id, self.name, self.debug_info)
        }
    }
}

// ── Store errors ──────────────────────────────────────────────

/// Failures reported by the ontology store and registry ports.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The URI does not resolve to a loadable ontology.
    #[error("ontology cannot be loaded: {0}")]
    Unresolvable(String),

    /// The store rejected or failed a mutation statement.
    #[error("store mutation failed: {0}")]
    Mutation(String),

    /// No session could be checked out from the pool.
    #[error("store session unavailable: {0}")]
    SessionUnavailable(String),

    #[error("internal: {0}")]
    Internal(#[from] anyhow::Error),
}
