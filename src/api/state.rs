//! Application state for the payroll document API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::assets::AssetStore;
use crate::config::ConfigLoader;
use crate::documents::DocumentRenderer;
use crate::service::DocumentService;
use crate::store::{InMemoryDocumentStore, InMemoryEmployeeDirectory};

/// Shared application state.
///
/// Holds the document service; stores behind it guard their own interior.
#[derive(Clone)]
pub struct AppState {
    service: DocumentService,
}

impl AppState {
    /// Creates state backed by in-memory stores.
    pub fn new(config: ConfigLoader, assets: Arc<dyn AssetStore>) -> Self {
        let renderer = DocumentRenderer::new(Arc::new(config.into_config()), assets);
        Self::from_service(DocumentService::new(
            Arc::new(InMemoryEmployeeDirectory::new()),
            Arc::new(InMemoryDocumentStore::new()),
            renderer,
        ))
    }

    /// Creates state around an existing service.
    pub fn from_service(service: DocumentService) -> Self {
        Self { service }
    }

    /// Returns the document service.
    pub fn service(&self) -> &DocumentService {
        &self.service
    }
}
