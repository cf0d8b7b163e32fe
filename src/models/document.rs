//! Document request and dispatch models.
//!
//! A [`DocumentRequest`] is what callers send: a free-form type tag, optional
//! dates, salary overrides and asset names. Resolving it against an employee
//! produces a [`DocumentSpec`], a closed set of variants each carrying only
//! the data its document needs, with every date default already applied.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::{Employee, SalaryOverrides};

/// Media type of every rendered document.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// The four supported document layouts.
///
/// # Example
///
/// ```
/// use payroll_docs::models::DocumentType;
///
/// let parsed: DocumentType = "PaySlip".parse().unwrap();
/// assert_eq!(parsed, DocumentType::Payslip);
/// assert!("bonus".parse::<DocumentType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Offer letter with salary annexure.
    Offer,
    /// Monthly payslip.
    Payslip,
    /// Experience certificate.
    Experience,
    /// Relieving letter.
    Relieving,
}

impl DocumentType {
    /// The canonical lower-case tag.
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentType::Offer => "offer",
            DocumentType::Payslip => "payslip",
            DocumentType::Experience => "experience",
            DocumentType::Relieving => "relieving",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = EngineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "offer" => Ok(DocumentType::Offer),
            "payslip" => Ok(DocumentType::Payslip),
            "experience" => Ok(DocumentType::Experience),
            "relieving" => Ok(DocumentType::Relieving),
            _ => Err(EngineError::InvalidDocumentType {
                document_type: value.to_string(),
            }),
        }
    }
}

/// A caller's request to render one document for one employee.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRequest {
    /// The employee the document is for.
    pub employee_id: Uuid,
    /// Document type tag, matched case-insensitively.
    pub document_type: String,
    /// Date printed as the issue date.
    pub issue_date: Option<DateTime<Utc>>,
    /// Offer letter start date.
    pub start_date: Option<DateTime<Utc>>,
    /// Experience letter start of tenure.
    pub from_date: Option<DateTime<Utc>>,
    /// End of tenure / relieving date.
    pub to_date: Option<DateTime<Utc>>,
    /// Salary overrides.
    pub overrides: SalaryOverrides,
    /// Logo image asset name.
    pub logo_asset: Option<String>,
    /// Signature image asset name.
    pub signature_asset: Option<String>,
}

impl DocumentRequest {
    /// Parses the type tag and applies each document's date defaults.
    ///
    /// Fails with [`EngineError::InvalidDocumentType`] for an unknown tag.
    pub fn resolve(&self, employee: &Employee, now: DateTime<Utc>) -> EngineResult<DocumentSpec> {
        let document_type: DocumentType = self.document_type.parse()?;
        let issue_date = self.issue_date.unwrap_or(now);

        let spec = match document_type {
            DocumentType::Offer => DocumentSpec::Offer(OfferLetter {
                issue_date,
                start_date: self.start_date.or(employee.joining_date).unwrap_or(now),
                overrides: self.overrides.clone(),
                logo_asset: self.logo_asset.clone(),
                signature_asset: self.signature_asset.clone(),
            }),
            DocumentType::Payslip => DocumentSpec::Payslip(Payslip {
                issue_date,
                overrides: self.overrides.clone(),
                logo_asset: self.logo_asset.clone(),
            }),
            DocumentType::Experience => DocumentSpec::Experience(ExperienceLetter {
                from_date: self.from_date.or(employee.joining_date).unwrap_or(now),
                to_date: self.to_date.unwrap_or(now),
                issue_date,
            }),
            DocumentType::Relieving => DocumentSpec::Relieving(RelievingLetter {
                relieving_date: self.to_date.unwrap_or(now),
                issue_date,
            }),
        };

        Ok(spec)
    }
}

/// Inputs of an offer letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferLetter {
    /// Date of the offer.
    pub issue_date: DateTime<Utc>,
    /// Start date of the assignment.
    pub start_date: DateTime<Utc>,
    /// Overrides applied to the annexure breakup.
    pub overrides: SalaryOverrides,
    /// Logo image asset name.
    pub logo_asset: Option<String>,
    /// Signatory image asset name.
    pub signature_asset: Option<String>,
}

/// Inputs of a payslip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payslip {
    /// Any date inside the month the payslip covers.
    pub issue_date: DateTime<Utc>,
    /// Deduction and travel allowance overrides.
    pub overrides: SalaryOverrides,
    /// Logo image asset name.
    pub logo_asset: Option<String>,
}

/// Inputs of an experience letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceLetter {
    /// First day of employment.
    pub from_date: DateTime<Utc>,
    /// Last day of employment.
    pub to_date: DateTime<Utc>,
    /// Date the letter is issued.
    pub issue_date: DateTime<Utc>,
}

/// Inputs of a relieving letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelievingLetter {
    /// Date the relieving takes effect.
    pub relieving_date: DateTime<Utc>,
    /// Date the letter is issued.
    pub issue_date: DateTime<Utc>,
}

/// A fully resolved document, one variant per layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSpec {
    /// Offer letter.
    Offer(OfferLetter),
    /// Payslip.
    Payslip(Payslip),
    /// Experience letter.
    Experience(ExperienceLetter),
    /// Relieving letter.
    Relieving(RelievingLetter),
}

impl DocumentSpec {
    /// The type of document this spec renders.
    pub fn document_type(&self) -> DocumentType {
        match self {
            DocumentSpec::Offer(_) => DocumentType::Offer,
            DocumentSpec::Payslip(_) => DocumentType::Payslip,
            DocumentSpec::Experience(_) => DocumentType::Experience,
            DocumentSpec::Relieving(_) => DocumentType::Relieving,
        }
    }
}

/// A finished document ready to hand to the requester.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// The type that was rendered.
    pub document_type: DocumentType,
    /// Suggested download name, `{type}_{employee_no}.pdf`.
    pub file_name: String,
    /// Media type of `bytes`.
    pub media_type: &'static str,
    /// The document itself.
    pub bytes: Vec<u8>,
}

impl RenderedDocument {
    /// Wraps rendered bytes with the suggested file name for the employee.
    pub fn pdf(document_type: DocumentType, employee: &Employee, bytes: Vec<u8>) -> Self {
        Self {
            document_type,
            file_name: format!("{}_{}.pdf", document_type, employee.employee_no),
            media_type: PDF_MEDIA_TYPE,
            bytes,
        }
    }
}

/// A persisted copy of a generated document. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedDocumentRecord {
    /// Record identifier.
    pub id: Uuid,
    /// The employee the document belongs to.
    pub employee_id: Uuid,
    /// The type of document.
    pub document_type: DocumentType,
    /// When the document was generated.
    pub generated_on: DateTime<Utc>,
    /// The rendered bytes.
    #[serde(skip)]
    pub bytes: Vec<u8>,
}
