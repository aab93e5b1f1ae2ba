//! Per-request response register: status line fields plus an optional
//! structured error, independent of any transport or content negotiation.

use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, ErrorDescriptor};

/// Terminal failure produced by a pipeline stage or copied verbatim from a
/// failing collaborator. Carries exactly the fields the response register
/// records, so propagation is a field-for-field copy with no re-derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WsFailure {
    pub status: u16,
    pub status_message: String,
    pub status_message_ext: String,
    pub error: ErrorDescriptor,
}

impl WsFailure {
    /// Catalog failure with the standard client-error exit. The extended
    /// message repeats the catalog entry's name, matching the register's
    /// wire conventions.
    pub fn bad_request(code: ErrorCode, debug_info: impl Into<String>) -> Self {
        let error = code.instantiate(debug_info);
        Self {
            status: 400,
            status_message: "Bad Request".to_string(),
            status_message_ext: error.name.clone(),
            error,
        }
    }
}

impl std::fmt::Display for WsFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {}", self.status, self.status_message, self.error)
    }
}

/// Mutable response register for one pipeline run.
///
/// Starts at `200 OK` and is written at most once with a terminal failure.
/// Write-once discipline is the orchestrator's job: callers check
/// [`ResponseState::is_ok`] before running the next stage; the register
/// itself does not reject a second write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseState {
    status: u16,
    status_message: String,
    status_message_ext: String,
    error: Option<ErrorDescriptor>,
}

impl ResponseState {
    pub fn new() -> Self {
        Self {
            status: 200,
            status_message: "OK".to_string(),
            status_message_ext: String::new(),
            error: None,
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn status_message_ext(&self) -> &str {
        &self.status_message_ext
    }

    pub fn error(&self) -> Option<&ErrorDescriptor> {
        self.error.as_ref()
    }

    /// True while no failure has been recorded.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    pub fn set_status(
        &mut self,
        status: u16,
        message: impl Into<String>,
        extension: impl Into<String>,
    ) {
        self.status = status;
        self.status_message = message.into();
        self.status_message_ext = extension.into();
    }

    pub fn set_error(&mut self, error: ErrorDescriptor) {
        self.error = Some(error);
    }

    /// Copy a stage failure into the register, field for field.
    pub fn apply(&mut self, failure: WsFailure) {
        self.set_status(failure.status, failure.status_message, failure.status_message_ext);
        self.set_error(failure.error);
    }
}

impl Default for ResponseState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Severity;

    #[test]
    fn new_state_is_ok() {
        let state = ResponseState::new();
        assert!(state.is_ok());
        assert_eq!(state.status(), 200);
        assert_eq!(state.status_message(), "OK");
        assert_eq!(state.status_message_ext(), "");
        assert!(state.error().is_none());
    }

    #[test]
    fn set_status_clears_ok() {
        let mut state = ResponseState::new();
        state.set_status(403, "Forbidden", "no access to scope");
        assert!(!state.is_ok());
        assert_eq!(state.status(), 403);
        assert_eq!(state.status_message(), "Forbidden");
        assert_eq!(state.status_message_ext(), "no access to scope");
    }

    #[test]
    fn set_error_records_descriptor() {
        let mut state = ResponseState::new();
        state.set_error(ErrorCode::MissingClassUri.instantiate("class_uri empty"));
        let err = state.error().unwrap();
        assert_eq!(err.id, "WS-ONTOLOGY-DELETE-204");
        assert_eq!(err.debug_info, "class_uri empty");
    }

    #[test]
    fn apply_copies_all_failure_fields() {
        let failure = WsFailure {
            status: 403,
            status_message: "Forbidden".into(),
            status_message_ext: "Unauthorized access".into(),
            error: ErrorDescriptor {
                id: "WS-AUTH-VALIDATOR-300".into(),
                service: "/ws/auth/validator/".into(),
                name: "No access defined".into(),
                description: "No access defined for this identity".into(),
                debug_info: "scope http://ex.org/wsf/ontologies/".into(),
                level: Severity::Warning,
            },
        };
        let mut state = ResponseState::new();
        state.apply(failure.clone());
        assert_eq!(state.status(), failure.status);
        assert_eq!(state.status_message(), failure.status_message);
        assert_eq!(state.status_message_ext(), failure.status_message_ext);
        assert_eq!(state.error(), Some(&failure.error));
    }

    #[test]
    fn bad_request_uses_catalog_name_as_extension() {
        let failure = WsFailure::bad_request(ErrorCode::MissingPropertyUri, "property_uri empty");
        assert_eq!(failure.status, 400);
        assert_eq!(failure.status_message, "Bad Request");
        assert_eq!(failure.status_message_ext, "No Property URI defined for this request");
        assert_eq!(failure.error.id, "WS-ONTOLOGY-DELETE-202");
        assert_eq!(failure.error.debug_info, "property_uri empty");
    }

    #[test]
    fn ws_failure_display() {
        let failure = WsFailure::bad_request(ErrorCode::MissingOntologyUri, "");
        assert_eq!(
            failure.to_string(),
            "400 Bad Request: [WS-ONTOLOGY-DELETE-201] No Ontology URI defined for this request"
        );
    }
}
