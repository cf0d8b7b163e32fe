//! Document generation workflow.
//!
//! [`DocumentService`] ties the pieces together for one request: find the
//! employee, render the requested document, then append exactly one
//! [`GeneratedDocumentRecord`](crate::models::GeneratedDocumentRecord).
//! A failed lookup or render leaves the document store untouched.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::documents::DocumentRenderer;
use crate::error::{EngineError, EngineResult};
use crate::models::{DocumentRequest, RenderedDocument};
use crate::store::{DocumentStore, EmployeeDirectory};

/// Looks up employees, renders their documents and records the results.
#[derive(Clone)]
pub struct DocumentService {
    employees: Arc<dyn EmployeeDirectory>,
    documents: Arc<dyn DocumentStore>,
    renderer: DocumentRenderer,
}

impl DocumentService {
    /// Creates a service over the given collaborators.
    pub fn new(
        employees: Arc<dyn EmployeeDirectory>,
        documents: Arc<dyn DocumentStore>,
        renderer: DocumentRenderer,
    ) -> Self {
        Self {
            employees,
            documents,
            renderer,
        }
    }

    /// The employee directory.
    pub fn employees(&self) -> &Arc<dyn EmployeeDirectory> {
        &self.employees
    }

    /// The generated-document log.
    pub fn documents(&self) -> &Arc<dyn DocumentStore> {
        &self.documents
    }

    /// The renderer, also used for standalone salary calculations.
    pub fn renderer(&self) -> &DocumentRenderer {
        &self.renderer
    }

    /// Renders `request` and records the output.
    ///
    /// `now` supplies every missing date and is stored as the record's
    /// generation time.
    pub fn generate(
        &self,
        request: &DocumentRequest,
        now: DateTime<Utc>,
    ) -> EngineResult<RenderedDocument> {
        let employee = self.employees.get(request.employee_id).ok_or_else(|| {
            warn!(employee_id = %request.employee_id, "Employee not found");
            EngineError::EmployeeNotFound {
                employee_id: request.employee_id,
            }
        })?;

        let rendered = self.renderer.render_request(request, &employee, now)?;

        let record_id = self.documents.append(
            employee.id,
            rendered.document_type,
            now,
            rendered.bytes.clone(),
        );

        info!(
            employee_id = %employee.id,
            document_type = %rendered.document_type,
            record_id = %record_id,
            "Generated document recorded"
        );

        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{Asset, AssetStore};
    use crate::config::AppConfig;
    use crate::documents::{Layout, Renderer};
    use crate::models::{DocumentType, Employee};
    use crate::store::{InMemoryDocumentStore, InMemoryEmployeeDirectory};
    use chrono::TimeZone;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    struct NoAssets;

    impl AssetStore for NoAssets {
        fn resolve(&self, _name: &str) -> Asset {
            Asset::Absent
        }
    }

    struct StubRenderer;

    impl Renderer for StubRenderer {
        fn render(&self, _layout: &Layout) -> EngineResult<Vec<u8>> {
            Ok(b"%PDF-stub".to_vec())
        }
    }

    struct BrokenRenderer;

    impl Renderer for BrokenRenderer {
        fn render(&self, _layout: &Layout) -> EngineResult<Vec<u8>> {
            Err(EngineError::RenderError {
                message: "writer failed".to_string(),
            })
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 31, 10, 0, 0).unwrap()
    }

    fn service_with(
        renderer: Arc<dyn Renderer>,
    ) -> (DocumentService, Arc<InMemoryDocumentStore>, Employee) {
        let employees = Arc::new(InMemoryEmployeeDirectory::new());
        let documents = Arc::new(InMemoryDocumentStore::new());
        let employee = employees.insert(Employee {
            id: Uuid::new_v4(),
            employee_no: "ML-042".to_string(),
            name: "Asha Rao".to_string(),
            joining_date: None,
            designation: Some("Software Engineer".to_string()),
            department: None,
            pan: None,
            location: None,
            uan: None,
            monthly_ctc: Decimal::new(50000, 0),
            annual_ctc: Decimal::new(600000, 0),
            created_at: now(),
        });
        let renderer =
            DocumentRenderer::with_renderer(Arc::new(AppConfig::default()), Arc::new(NoAssets), renderer);
        let service = DocumentService::new(employees, documents.clone(), renderer);
        (service, documents, employee)
    }

    fn request(employee_id: Uuid, document_type: &str) -> DocumentRequest {
        DocumentRequest {
            employee_id,
            document_type: document_type.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_generate_records_exactly_once() {
        let (service, documents, employee) = service_with(Arc::new(StubRenderer));

        let rendered = service
            .generate(&request(employee.id, "payslip"), now())
            .unwrap();

        assert_eq!(rendered.document_type, DocumentType::Payslip);
        assert_eq!(rendered.file_name, "payslip_ML-042.pdf");

        let records = documents.list_for(employee.id);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].generated_on, now());
        assert_eq!(records[0].bytes, rendered.bytes);
    }

    #[test]
    fn test_unknown_employee() {
        let (service, documents, _) = service_with(Arc::new(StubRenderer));
        let missing = Uuid::new_v4();

        let result = service.generate(&request(missing, "offer"), now());

        assert!(matches!(
            result,
            Err(EngineError::EmployeeNotFound { employee_id }) if employee_id == missing
        ));
        assert!(documents.is_empty());
    }

    #[test]
    fn test_invalid_type_records_nothing() {
        let (service, documents, employee) = service_with(Arc::new(StubRenderer));

        let result = service.generate(&request(employee.id, "bonus"), now());

        assert!(matches!(result, Err(EngineError::InvalidDocumentType { .. })));
        assert!(documents.is_empty());
    }

    #[test]
    fn test_render_failure_records_nothing() {
        let (service, documents, employee) = service_with(Arc::new(BrokenRenderer));

        let result = service.generate(&request(employee.id, "relieving"), now());

        assert!(matches!(result, Err(EngineError::RenderError { .. })));
        assert!(documents.is_empty());
    }
}
