//! Persistence for employees and generated documents.
//!
//! Both stores are trait objects so the HTTP layer and the document service
//! never depend on how records are kept. The bundled implementations hold
//! everything in memory behind a [`std::sync::RwLock`].

mod documents;
mod employees;

pub use documents::{DocumentStore, InMemoryDocumentStore};
pub use employees::{EmployeeDirectory, InMemoryEmployeeDirectory};
