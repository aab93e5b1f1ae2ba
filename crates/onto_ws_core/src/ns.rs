//! WSF vocabulary constants written or cleared by the delete pipeline.

/// `wsf:` namespace (web service framework registry vocabulary).
pub mod wsf {
    pub const NS: &str = "http://purl.org/ontology/wsf#";

    /// Annotation set on an ontology after a successful entity removal.
    /// Signals downstream tooling to re-export or re-index.
    pub const ONTOLOGY_MODIFIED: &str = "http://purl.org/ontology/wsf#ontologyModified";

    /// Registry marker flagging an ontology as present in the datasets graph.
    /// Cleared when the whole ontology is deleted.
    pub const HOLD_ONTOLOGY: &str = "http://purl.org/ontology/wsf#holdOntology";
}
