//! Core data models for the payroll document engine.
//!
//! This module contains all the domain models used throughout the engine.

mod dates;
mod document;
mod employee;
mod overrides;
mod salary_breakup;

pub use dates::{deserialize_optional_utc, parse_utc_instant};
pub use document::{
    DocumentRequest, DocumentSpec, DocumentType, ExperienceLetter, GeneratedDocumentRecord,
    OfferLetter, PDF_MEDIA_TYPE, Payslip, RelievingLetter, RenderedDocument,
};
pub use employee::{Employee, EmployeeDetails};
pub use overrides::{OverrideField, SalaryOverrides};
pub use salary_breakup::{AuditStep, SalaryBreakup, SalaryCalculation};
