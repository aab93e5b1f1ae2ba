//! Delegation to the record and dataset subsystems after a successful
//! store-level deletion.

use std::sync::Arc;

use crate::identity::IdentityPair;
use crate::ports::{DatasetDeregistrar, RecordDeleter};
use crate::response::WsFailure;
use crate::types::ResourceTarget;

/// Invokes the dependent subsystems once the store mutation has committed.
pub struct CascadeCoordinator {
    records: Arc<dyn RecordDeleter>,
    datasets: Arc<dyn DatasetDeregistrar>,
}

impl CascadeCoordinator {
    pub fn new(records: Arc<dyn RecordDeleter>, datasets: Arc<dyn DatasetDeregistrar>) -> Self {
        Self { records, datasets }
    }

    /// Cascade for one deleted target. Entity kinds go to the record
    /// deleter, the whole-ontology kind to the dataset deregistrar. A
    /// collaborator failure propagates verbatim; the store mutation that
    /// preceded it stays committed.
    pub async fn cascade(
        &self,
        ontology_uri: &str,
        target: &ResourceTarget,
        identities: &IdentityPair,
    ) -> Result<(), WsFailure> {
        match target {
            ResourceTarget::Class { uri }
            | ResourceTarget::Property { uri }
            | ResourceTarget::NamedIndividual { uri } => {
                self.records
                    .delete_record(
                        uri,
                        ontology_uri,
                        &identities.registered,
                        &identities.requester,
                    )
                    .await
            }
            ResourceTarget::Ontology => {
                self.datasets
                    .deregister(ontology_uri, &identities.registered, &identities.requester)
                    .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::error::{ErrorDescriptor, Severity};
    use crate::identity::Identity;

    #[derive(Default)]
    struct StubRecords {
        calls: Mutex<Vec<(String, String, String, String)>>,
        failure: Option<WsFailure>,
    }

    #[async_trait]
    impl RecordDeleter for StubRecords {
        async fn delete_record(
            &self,
            record_uri: &str,
            ontology_uri: &str,
            registered: &Identity,
            requester: &Identity,
        ) -> Result<(), WsFailure> {
            self.calls.lock().unwrap().push((
                record_uri.to_string(),
                ontology_uri.to_string(),
                registered.to_string(),
                requester.to_string(),
            ));
            match &self.failure {
                Some(f) => Err(f.clone()),
                None => Ok(()),
            }
        }
    }

    #[derive(Default)]
    struct StubDatasets {
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl DatasetDeregistrar for StubDatasets {
        async fn deregister(
            &self,
            ontology_uri: &str,
            _registered: &Identity,
            _requester: &Identity,
        ) -> Result<(), WsFailure> {
            self.calls.lock().unwrap().push(ontology_uri.to_string());
            Ok(())
        }
    }

    fn forbidden() -> WsFailure {
        WsFailure {
            status: 403,
            status_message: "Forbidden".into(),
            status_message_ext: "Unauthorized access".into(),
            error: ErrorDescriptor {
                id: "WS-CRUD-DELETE-301".into(),
                service: "/ws/crud/delete/".into(),
                name: "No access".into(),
                description: "No delete access for this identity".into(),
                debug_info: String::new(),
                level: Severity::Warning,
            },
        }
    }

    #[tokio::test]
    async fn entity_kind_goes_to_record_deleter() {
        let records = Arc::new(StubRecords::default());
        let datasets = Arc::new(StubDatasets::default());
        let cascade = CascadeCoordinator::new(records.clone(), datasets.clone());
        let identities = IdentityPair::new("10.0.0.1", "self::bob");
        let target = ResourceTarget::Class { uri: "http://ex.org/Foo".into() };

        cascade
            .cascade("http://ex.org/onto", &target, &identities)
            .await
            .unwrap();
        assert_eq!(
            records.calls.lock().unwrap().as_slice(),
            [(
                "http://ex.org/Foo".to_string(),
                "http://ex.org/onto".to_string(),
                "10.0.0.1::bob".to_string(),
                "10.0.0.1".to_string(),
            )]
        );
        assert!(datasets.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn ontology_kind_goes_to_dataset_deregistrar() {
        let records = Arc::new(StubRecords::default());
        let datasets = Arc::new(StubDatasets::default());
        let cascade = CascadeCoordinator::new(records.clone(), datasets.clone());
        let identities = IdentityPair::new("10.0.0.1", "");

        cascade
            .cascade("http://ex.org/onto", &ResourceTarget::Ontology, &identities)
            .await
            .unwrap();
        assert_eq!(datasets.calls.lock().unwrap().as_slice(), ["http://ex.org/onto"]);
        assert!(records.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn collaborator_failure_propagates_verbatim() {
        let records = Arc::new(StubRecords { failure: Some(forbidden()), ..Default::default() });
        let datasets = Arc::new(StubDatasets::default());
        let cascade = CascadeCoordinator::new(records, datasets);
        let identities = IdentityPair::new("10.0.0.1", "");
        let target = ResourceTarget::Property { uri: "http://ex.org/p".into() };

        let err = cascade
            .cascade("http://ex.org/onto", &target, &identities)
            .await
            .unwrap_err();
        assert_eq!(err, forbidden());
    }
}
