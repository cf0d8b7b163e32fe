//! Configuration types for salary calculation and document rendering.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every type carries a
//! `Default` holding the standard policy so the engine also runs without
//! any files on disk.

use rust_decimal::Decimal;
use serde::Deserialize;

/// The issuing company as it appears on letters and payslips.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CompanyProfile {
    /// Upper-case company line shown under the legacy logo.
    pub display_name: String,
    /// The name used inside letter wording.
    pub legal_name: String,
    /// Postal address, one entry per printed line.
    pub address_lines: Vec<String>,
    /// Contact phone number for the page footer.
    pub phone: String,
    /// Contact e-mail for the page footer.
    pub email: String,
    /// Website for the page footer.
    pub website: String,
    /// The logo asset that still needs the company name printed beneath it.
    pub legacy_logo: String,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            display_name: "METROLABS SERVICES PVT.LTD".to_string(),
            legal_name: "Metrolabs Services Pvt.Ltd".to_string(),
            address_lines: vec![
                "1-90/2/46/1, 4th floor, Sriram Plaza,".to_string(),
                "Vial Rao Nagar, Madhapur, Hyderabad,".to_string(),
                "Telangana, India, 500081".to_string(),
            ],
            phone: "+91-9951222468".to_string(),
            email: "hr@metrolabsservices.com".to_string(),
            website: "www.metrolabsservices.com".to_string(),
            legacy_logo: "Metrolabs_old.png".to_string(),
        }
    }
}

impl CompanyProfile {
    /// Returns true when the given logo asset is the legacy one.
    ///
    /// The comparison ignores ASCII case.
    pub fn is_legacy_logo(&self, logo_asset: Option<&str>) -> bool {
        logo_asset.is_some_and(|name| name.eq_ignore_ascii_case(&self.legacy_logo))
    }
}

/// Percentages and fixed amounts used to split a monthly CTC.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SalaryPolicy {
    /// Share of the monthly CTC paid as Basic.
    pub basic_percent: Decimal,
    /// Share of the monthly CTC paid as HRA.
    pub hra_percent: Decimal,
    /// Fixed monthly conveyance.
    pub conveyance: Decimal,
    /// Fixed monthly professional tax.
    pub professional_tax: Decimal,
    /// Provident fund as a share of Basic.
    pub pf_percent_of_basic: Decimal,
}

impl Default for SalaryPolicy {
    fn default() -> Self {
        Self {
            basic_percent: Decimal::new(50, 2),
            hra_percent: Decimal::new(25, 2),
            conveyance: Decimal::new(1600, 0),
            professional_tax: Decimal::new(200, 0),
            pf_percent_of_basic: Decimal::new(12, 2),
        }
    }
}

/// Deduction defaults and attendance figures printed on payslips.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PayslipPolicy {
    /// Provident fund deducted when the caller supplies none.
    pub provident_fund: Decimal,
    /// Professional tax deducted when the caller supplies none.
    pub professional_tax: Decimal,
    /// PF admin charge deducted when the caller supplies none.
    pub pf_admin: Decimal,
    /// Working days printed in the details box.
    pub effective_working_days: u32,
    /// Loss-of-pay days printed in the details box.
    pub loss_of_pay_days: u32,
}

impl Default for PayslipPolicy {
    fn default() -> Self {
        Self {
            provident_fund: Decimal::new(3600, 0),
            professional_tax: Decimal::new(200, 0),
            pf_admin: Decimal::new(150, 0),
            effective_working_days: 25,
            loss_of_pay_days: 0,
        }
    }
}

/// Layout of `company.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CompanyConfig {
    /// The company profile section.
    pub company: CompanyProfile,
}

/// Layout of `payroll.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PayrollConfig {
    /// Salary split policy.
    #[serde(default)]
    pub salary: SalaryPolicy,
    /// Payslip deduction policy.
    #[serde(default)]
    pub payslip: PayslipPolicy,
}

/// The complete engine configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    company: CompanyProfile,
    payroll: PayrollConfig,
}

impl AppConfig {
    /// Creates a new AppConfig from its component parts.
    pub fn new(company: CompanyProfile, payroll: PayrollConfig) -> Self {
        Self { company, payroll }
    }

    /// Returns the company profile.
    pub fn company(&self) -> &CompanyProfile {
        &self.company
    }

    /// Returns the salary split policy.
    pub fn salary(&self) -> &SalaryPolicy {
        &self.payroll.salary
    }

    /// Returns the payslip deduction policy.
    pub fn payslip(&self) -> &PayslipPolicy {
        &self.payroll.payslip
    }
}
