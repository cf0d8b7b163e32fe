//! Request types for the payroll document API.
//!
//! Field names are snake_case. Salary override fields sit at the top level
//! of the body and may use the legacy sentinels (`0` or `-1` for "not
//! supplied"); [`SalaryOverrides::effective`] decides which values count.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::MAX_AMOUNT;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    DocumentRequest, EmployeeDetails, OverrideField, SalaryOverrides, deserialize_optional_utc,
};

/// Body of `POST /api/documents/employee` and `PUT /api/documents/employee/:id`.
pub type EmployeeRequest = EmployeeDetails;

/// Body of `POST /api/documents/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateDocumentRequest {
    /// The employee to render for.
    pub employee_id: Uuid,
    /// One of `offer`, `payslip`, `experience`, `relieving` (any case).
    pub document_type: String,
    /// Issue date; defaults to now.
    #[serde(default, deserialize_with = "deserialize_optional_utc")]
    pub issue_date: Option<DateTime<Utc>>,
    /// Offer letter start date.
    #[serde(default, deserialize_with = "deserialize_optional_utc")]
    pub start_date: Option<DateTime<Utc>>,
    /// Experience letter start of tenure.
    #[serde(default, deserialize_with = "deserialize_optional_utc")]
    pub from_date: Option<DateTime<Utc>>,
    /// End of tenure or relieving date.
    #[serde(default, deserialize_with = "deserialize_optional_utc")]
    pub to_date: Option<DateTime<Utc>>,
    /// Logo image name under the asset root.
    #[serde(default)]
    pub logo_asset: Option<String>,
    /// Signature image name under the asset root.
    #[serde(default)]
    pub signature_asset: Option<String>,
    /// Salary overrides, flattened into the body.
    #[serde(flatten)]
    pub overrides: SalaryOverrides,
}

impl GenerateDocumentRequest {
    /// Rejects override amounts above [`MAX_AMOUNT`].
    pub fn validate(&self) -> EngineResult<()> {
        check_overrides(&self.overrides)
    }
}

impl From<GenerateDocumentRequest> for DocumentRequest {
    fn from(req: GenerateDocumentRequest) -> Self {
        DocumentRequest {
            employee_id: req.employee_id,
            document_type: req.document_type,
            issue_date: req.issue_date,
            start_date: req.start_date,
            from_date: req.from_date,
            to_date: req.to_date,
            overrides: req.overrides,
            logo_asset: req.logo_asset,
            signature_asset: req.signature_asset,
        }
    }
}

/// Body of `POST /api/salary/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryCalculationRequest {
    /// Monthly cost to company.
    pub monthly_ctc: Decimal,
    /// Salary overrides, flattened into the body.
    #[serde(flatten)]
    pub overrides: SalaryOverrides,
}

impl SalaryCalculationRequest {
    /// Rejects a negative CTC and any amount above [`MAX_AMOUNT`].
    pub fn validate(&self) -> EngineResult<()> {
        check_amount("monthly_ctc", self.monthly_ctc)?;
        check_overrides(&self.overrides)
    }
}

fn invalid(field: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidRequest {
        field: field.to_string(),
        message: message.into(),
    }
}

fn check_amount(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(invalid(field, "must not be negative"));
    }
    if value > MAX_AMOUNT {
        return Err(invalid(field, format!("must not exceed {}", MAX_AMOUNT)));
    }
    Ok(())
}

/// Overrides may carry negative sentinels, so only the upper bound applies.
fn check_overrides(overrides: &SalaryOverrides) -> EngineResult<()> {
    for field in OverrideField::ALL {
        if overrides.raw(field).is_some_and(|value| value > MAX_AMOUNT) {
            return Err(invalid(
                field.name(),
                format!("must not exceed {}", MAX_AMOUNT),
            ));
        }
    }
    Ok(())
}

/// Checks the fields every stored employee must carry.
pub fn validate_employee(details: &EmployeeDetails) -> EngineResult<()> {
    if details.employee_no.trim().is_empty() {
        return Err(invalid("employee_no", "must not be blank"));
    }
    if details.name.trim().is_empty() {
        return Err(invalid("name", "must not be blank"));
    }
    check_amount("monthly_ctc", details.monthly_ctc)?;
    check_amount("annual_ctc", details.annual_ctc)
}
