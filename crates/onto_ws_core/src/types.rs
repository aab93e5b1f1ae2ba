//! Request types for the delete service: resource target, caller request,
//! and the endpoint capability profile.

use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;
use crate::identity::IdentityPair;
use crate::response::WsFailure;

// ── Resource target ───────────────────────────────────────────

/// The kind of resource a delete request addresses.
///
/// Entity variants carry the entity's own URI. The whole-ontology variant
/// carries nothing: it is keyed by the request's ontology URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResourceTarget {
    Class { uri: String },
    Property { uri: String },
    NamedIndividual { uri: String },
    Ontology,
}

impl ResourceTarget {
    /// Parse a boundary operation selector. Returns None for selectors this
    /// endpoint does not support.
    pub fn from_selector(selector: &str, resource_uri: impl Into<String>) -> Option<Self> {
        match selector {
            "class" => Some(Self::Class { uri: resource_uri.into() }),
            "property" => Some(Self::Property { uri: resource_uri.into() }),
            "named_individual" => Some(Self::NamedIndividual { uri: resource_uri.into() }),
            "ontology" => Some(Self::Ontology),
            _ => None,
        }
    }

    pub fn kind_str(&self) -> &'static str {
        match self {
            Self::Class { .. } => "class",
            Self::Property { .. } => "property",
            Self::NamedIndividual { .. } => "named_individual",
            Self::Ontology => "ontology",
        }
    }

    /// The entity URI that must be non-empty for this kind, when there is one.
    pub fn entity_uri(&self) -> Option<&str> {
        match self {
            Self::Class { uri } | Self::Property { uri } | Self::NamedIndividual { uri } => {
                Some(uri)
            }
            Self::Ontology => None,
        }
    }

    /// Catalog code raised when this kind's required URI is empty.
    pub fn missing_uri_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Class { .. } => Some(ErrorCode::MissingClassUri),
            Self::Property { .. } => Some(ErrorCode::MissingPropertyUri),
            Self::NamedIndividual { .. } => Some(ErrorCode::MissingIndividualUri),
            Self::Ontology => None,
        }
    }
}

impl std::fmt::Display for ResourceTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind_str())
    }
}

// ── Delete request ────────────────────────────────────────────

/// One delete request, constructed from caller input and immutable
/// afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteRequest {
    pub ontology_uri: String,
    pub target: ResourceTarget,
    pub identities: IdentityPair,
}

impl DeleteRequest {
    pub fn new(
        ontology_uri: impl Into<String>,
        target: ResourceTarget,
        identities: IdentityPair,
    ) -> Self {
        Self {
            ontology_uri: ontology_uri.into(),
            target,
            identities,
        }
    }

    /// Build a request from the raw boundary inputs. Identity defaulting and
    /// aliasing happen here; an unrecognised selector yields the catalog's
    /// unknown-operation failure.
    pub fn from_selector(
        ontology_uri: impl Into<String>,
        selector: &str,
        resource_uri: impl Into<String>,
        requester: impl Into<String>,
        registered: impl Into<String>,
    ) -> Result<Self, WsFailure> {
        let target = ResourceTarget::from_selector(selector, resource_uri).ok_or_else(|| {
            WsFailure::bad_request(
                ErrorCode::UnknownOperation,
                format!("requested function: {selector}"),
            )
        })?;
        Ok(Self {
            ontology_uri: ontology_uri.into(),
            target,
            identities: IdentityPair::new(requester, registered),
        })
    }
}

// ── Endpoint capability profile ───────────────────────────────

/// CRUD capabilities advertised by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrudProfile {
    pub create: bool,
    pub read: bool,
    pub update: bool,
    pub delete: bool,
}

impl CrudProfile {
    /// This endpoint mutates nothing but deletions.
    pub const fn delete_only() -> Self {
        Self {
            create: false,
            read: false,
            update: false,
            delete: true,
        }
    }
}
