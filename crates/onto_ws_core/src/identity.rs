//! Principal identities for a delete request: the requester who sent the
//! call and the registered principal on whose behalf it is made.

use serde::{Deserialize, Serialize};

/// Opaque principal token (an address or an `<address>::<account>` composite).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity(pub String);

impl Identity {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Requester and registered principals, with the defaulting and aliasing
/// rules applied once at construction. Both identities are immutable for
/// the rest of the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityPair {
    pub requester: Identity,
    pub registered: Identity,
}

impl IdentityPair {
    /// Build the pair from raw caller input.
    ///
    /// An empty registered identity defaults to the requester. A registered
    /// identity whose first four characters spell `self` (case-insensitive)
    /// is an alias: with an `::` separator it becomes
    /// `<requester>::<account-suffix>`, without one it collapses to the bare
    /// requester. Aliasing is an identity rewrite, not a permission decision.
    pub fn new(requester: impl Into<String>, registered: impl Into<String>) -> Self {
        let requester = requester.into();
        let mut registered = registered.into();

        if registered.is_empty() {
            registered = requester.clone();
        }

        let self_prefixed = registered
            .get(..4)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("self"));
        if self_prefixed {
            registered = match registered.find("::") {
                Some(pos) => format!("{}::{}", requester, &registered[pos + 2..]),
                None => requester.clone(),
            };
        }

        Self {
            requester: Identity::new(requester),
            registered: Identity::new(registered),
        }
    }

    /// True when the call is made on behalf of a principal other than the
    /// requester. Controls whether the permission gate runs a second time.
    pub fn is_delegated(&self) -> bool {
        self.requester != self.registered
    }
}
