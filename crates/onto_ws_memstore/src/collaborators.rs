//! Recording cascade collaborators with scriptable outcomes.

use std::sync::Mutex;

use async_trait::async_trait;

use onto_ws_core::identity::Identity;
use onto_ws_core::ports::{DatasetDeregistrar, RecordDeleter};
use onto_ws_core::response::WsFailure;

/// Arguments of one record-deletion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDeleteCall {
    pub record_uri: String,
    pub ontology_uri: String,
    pub registered: String,
    pub requester: String,
}

/// Record deleter that logs every call and optionally fails with a scripted
/// outcome.
#[derive(Default)]
pub struct RecordingRecordDeleter {
    calls: Mutex<Vec<RecordDeleteCall>>,
    failure: Mutex<Option<WsFailure>>,
}

impl RecordingRecordDeleter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call return this failure.
    pub fn fail_with(&self, failure: WsFailure) {
        *self.failure.lock().unwrap() = Some(failure);
    }

    pub fn calls(&self) -> Vec<RecordDeleteCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordDeleter for RecordingRecordDeleter {
    async fn delete_record(
        &self,
        record_uri: &str,
        ontology_uri: &str,
        registered: &Identity,
        requester: &Identity,
    ) -> Result<(), WsFailure> {
        self.calls.lock().unwrap().push(RecordDeleteCall {
            record_uri: record_uri.to_string(),
            ontology_uri: ontology_uri.to_string(),
            registered: registered.to_string(),
            requester: requester.to_string(),
        });
        match self.failure.lock().unwrap().clone() {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }
}

/// Arguments of one dataset-deregistration call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeregisterCall {
    pub ontology_uri: String,
    pub registered: String,
    pub requester: String,
}

/// Dataset deregistrar counterpart of [`RecordingRecordDeleter`].
#[derive(Default)]
pub struct RecordingDatasetDeregistrar {
    calls: Mutex<Vec<DeregisterCall>>,
    failure: Mutex<Option<WsFailure>>,
}

impl RecordingDatasetDeregistrar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_with(&self, failure: WsFailure) {
        *self.failure.lock().unwrap() = Some(failure);
    }

    pub fn calls(&self) -> Vec<DeregisterCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DatasetDeregistrar for RecordingDatasetDeregistrar {
    async fn deregister(
        &self,
        ontology_uri: &str,
        registered: &Identity,
        requester: &Identity,
    ) -> Result<(), WsFailure> {
        self.calls.lock().unwrap().push(DeregisterCall {
            ontology_uri: ontology_uri.to_string(),
            registered: registered.to_string(),
            requester: requester.to_string(),
        });
        match self.failure.lock().unwrap().clone() {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }
}
