//! Employee model.
//!
//! This module defines the employee facts that documents are rendered from.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::dates::deserialize_optional_utc;

/// Represents an employee on whose behalf documents are generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee record.
    pub id: Uuid,
    /// The human-facing employee number printed on documents.
    pub employee_no: String,
    /// The employee's full name.
    pub name: String,
    /// The date the employee joined, if known.
    #[serde(default)]
    pub joining_date: Option<DateTime<Utc>>,
    /// Job title.
    #[serde(default)]
    pub designation: Option<String>,
    /// Department name.
    #[serde(default)]
    pub department: Option<String>,
    /// Permanent Account Number.
    #[serde(default)]
    pub pan: Option<String>,
    /// Work location.
    #[serde(default)]
    pub location: Option<String>,
    /// Universal Account Number for provident fund.
    #[serde(default)]
    pub uan: Option<String>,
    /// Monthly cost to company.
    pub monthly_ctc: Decimal,
    /// Annual cost to company as recorded on the employee.
    pub annual_ctc: Decimal,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl Employee {
    /// Returns the designation, or an empty string when none is recorded.
    pub fn designation_or_blank(&self) -> &str {
        self.designation.as_deref().unwrap_or_default()
    }

    /// Returns the work location, or an empty string when none is recorded.
    pub fn location_or_blank(&self) -> &str {
        self.location.as_deref().unwrap_or_default()
    }
}

/// Caller-editable employee facts, used for both create and update.
///
/// The record id and creation time are owned by the directory and never
/// taken from the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDetails {
    /// The human-facing employee number.
    pub employee_no: String,
    /// Full name.
    pub name: String,
    /// Joining date; offsets are converted to UTC.
    #[serde(default, deserialize_with = "deserialize_optional_utc")]
    pub joining_date: Option<DateTime<Utc>>,
    /// Job title.
    #[serde(default)]
    pub designation: Option<String>,
    /// Department name.
    #[serde(default)]
    pub department: Option<String>,
    /// Work location.
    #[serde(default)]
    pub location: Option<String>,
    /// Permanent Account Number.
    #[serde(default)]
    pub pan: Option<String>,
    /// Universal Account Number.
    #[serde(default)]
    pub uan: Option<String>,
    /// Monthly cost to company.
    pub monthly_ctc: Decimal,
    /// Annual cost to company.
    pub annual_ctc: Decimal,
}

impl EmployeeDetails {
    /// Creates a new employee record with a fresh id.
    pub fn into_employee(self, created_at: DateTime<Utc>) -> Employee {
        let mut employee = Employee {
            id: Uuid::new_v4(),
            employee_no: String::new(),
            name: String::new(),
            joining_date: None,
            designation: None,
            department: None,
            pan: None,
            location: None,
            uan: None,
            monthly_ctc: Decimal::ZERO,
            annual_ctc: Decimal::ZERO,
            created_at,
        };
        self.apply_to(&mut employee);
        employee
    }

    /// Overwrites every editable field of `employee`.
    pub fn apply_to(self, employee: &mut Employee) {
        employee.employee_no = self.employee_no;
        employee.name = self.name;
        employee.joining_date = self.joining_date;
        employee.designation = self.designation;
        employee.department = self.department;
        employee.location = self.location;
        employee.pan = self.pan;
        employee.uan = self.uan;
        employee.monthly_ctc = self.monthly_ctc;
        employee.annual_ctc = self.annual_ctc;
    }
}
