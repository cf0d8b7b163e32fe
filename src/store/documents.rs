//! Append-only log of generated documents.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{DocumentType, GeneratedDocumentRecord};

/// Records every document handed back to a caller.
pub trait DocumentStore: Send + Sync {
    /// Appends one record and returns its id. Existing records are never touched.
    fn append(
        &self,
        employee_id: Uuid,
        document_type: DocumentType,
        generated_on: DateTime<Utc>,
        bytes: Vec<u8>,
    ) -> Uuid;

    /// Records for one employee in the order they were generated.
    fn list_for(&self, employee_id: Uuid) -> Vec<GeneratedDocumentRecord>;
}

/// [`DocumentStore`] kept in process memory.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    records: RwLock<HashMap<Uuid, Vec<GeneratedDocumentRecord>>>,
}

impl InMemoryDocumentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records across all employees.
    pub fn len(&self) -> usize {
        let records = self.records.read().unwrap_or_else(|p| p.into_inner());
        records.values().map(Vec::len).sum()
    }

    /// Returns `true` when nothing has been generated yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn append(
        &self,
        employee_id: Uuid,
        document_type: DocumentType,
        generated_on: DateTime<Utc>,
        bytes: Vec<u8>,
    ) -> Uuid {
        let record = GeneratedDocumentRecord {
            id: Uuid::new_v4(),
            employee_id,
            document_type,
            generated_on,
            bytes,
        };
        let id = record.id;

        let mut records = self.records.write().unwrap_or_else(|p| p.into_inner());
        records.entry(employee_id).or_default().push(record);
        id
    }

    fn list_for(&self, employee_id: Uuid) -> Vec<GeneratedDocumentRecord> {
        let records = self.records.read().unwrap_or_else(|p| p.into_inner());
        records.get(&employee_id).cloned().unwrap_or_default()
    }
}
