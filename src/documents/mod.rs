//! Document composition and rendering.
//!
//! Each document type has a composer that turns employee facts, dates and
//! salary figures into a [`Layout`]. [`DocumentRenderer`] dispatches on the
//! resolved [`DocumentSpec`], loads any images through the [`AssetStore`],
//! and hands the layout to a [`Renderer`].

mod experience_letter;
mod format;
mod header;
mod layout;
mod offer_letter;
mod payslip;
mod pdf;
mod relieving_letter;

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::assets::AssetStore;
use crate::calculation::{SalaryCalculator, apply_payslip_deductions};
use crate::config::AppConfig;
use crate::error::EngineResult;
use crate::models::{DocumentRequest, DocumentSpec, Employee, RenderedDocument};

pub use format::{amount_or_na, format_amount, letter_date, month_year, offer_date};
pub use layout::{
    Align, BODY_FONT_SIZE, Block, Cell, Column, Image, Layout, Table, Text, TextStyle,
};
pub use pdf::{A4_HEIGHT, A4_WIDTH, PdfRenderer, Renderer};

/// Renders the four document types.
///
/// Holds only read-only collaborators, so a single instance can serve
/// concurrent requests.
#[derive(Clone)]
pub struct DocumentRenderer {
    config: Arc<AppConfig>,
    calculator: SalaryCalculator,
    assets: Arc<dyn AssetStore>,
    renderer: Arc<dyn Renderer>,
}

impl DocumentRenderer {
    /// Creates a renderer producing PDFs.
    pub fn new(config: Arc<AppConfig>, assets: Arc<dyn AssetStore>) -> Self {
        Self::with_renderer(config, assets, Arc::new(PdfRenderer::default()))
    }

    /// Creates a renderer with a custom output backend.
    pub fn with_renderer(
        config: Arc<AppConfig>,
        assets: Arc<dyn AssetStore>,
        renderer: Arc<dyn Renderer>,
    ) -> Self {
        let calculator = SalaryCalculator::new(config.salary().clone());
        Self {
            config,
            calculator,
            assets,
            renderer,
        }
    }

    /// The salary calculator configured for this renderer.
    pub fn calculator(&self) -> &SalaryCalculator {
        &self.calculator
    }

    /// Builds the layout for `spec` without rendering it.
    ///
    /// Missing or unreadable images are left out; they never cause an error.
    pub fn compose(&self, employee: &Employee, spec: &DocumentSpec) -> EngineResult<Layout> {
        let company = self.config.company();

        let layout = match spec {
            DocumentSpec::Offer(letter) => {
                let breakup = self
                    .calculator
                    .calculate(employee.monthly_ctc, Some(&letter.overrides));
                let logo = self.assets.resolve_optional(letter.logo_asset.as_deref());
                let signature = self
                    .assets
                    .resolve_optional(letter.signature_asset.as_deref());
                offer_letter::compose(company, employee, letter, &breakup, &logo, &signature)
            }
            DocumentSpec::Payslip(payslip) => {
                let breakup = self.calculator.calculate(employee.monthly_ctc, None);
                let figures =
                    apply_payslip_deductions(&breakup, &payslip.overrides, self.config.payslip());
                let logo = self.assets.resolve_optional(payslip.logo_asset.as_deref());
                payslip::compose(
                    company,
                    self.config.payslip(),
                    employee,
                    payslip,
                    &figures,
                    &logo,
                )?
            }
            DocumentSpec::Experience(letter) => {
                experience_letter::compose(company, employee, letter)
            }
            DocumentSpec::Relieving(letter) => relieving_letter::compose(company, employee, letter),
        };

        Ok(layout)
    }

    /// Composes and renders `spec` for `employee`.
    pub fn render(&self, employee: &Employee, spec: &DocumentSpec) -> EngineResult<RenderedDocument> {
        let started = Instant::now();
        let document_type = spec.document_type();

        let layout = self.compose(employee, spec)?;
        let bytes = self.renderer.render(&layout)?;

        info!(
            employee_id = %employee.id,
            document_type = %document_type,
            size = bytes.len(),
            duration_us = started.elapsed().as_micros(),
            "Document rendered"
        );

        Ok(RenderedDocument::pdf(document_type, employee, bytes))
    }

    /// Resolves a raw request against `employee` and renders it.
    ///
    /// Fails with `InvalidDocumentType` before any rendering when the type
    /// tag is unknown.
    pub fn render_request(
        &self,
        request: &DocumentRequest,
        employee: &Employee,
        now: DateTime<Utc>,
    ) -> EngineResult<RenderedDocument> {
        let spec = request.resolve(employee, now)?;
        self.render(employee, &spec)
    }
}
