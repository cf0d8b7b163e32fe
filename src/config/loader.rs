//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the company
//! profile and payroll policy from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{AppConfig, CompanyConfig, PayrollConfig};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── company.yaml   # Company profile printed on documents
/// └── payroll.yaml   # Salary split and payslip deduction policy
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_docs::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Issuing company: {}", loader.config().company().legal_name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let company = Self::load_yaml::<CompanyConfig>(&path.join("company.yaml"))?;
        let payroll = Self::load_yaml::<PayrollConfig>(&path.join("payroll.yaml"))?;

        info!(
            config_dir = %path.display(),
            company = %company.company.legal_name,
            "Loaded configuration"
        );

        Ok(Self {
            config: AppConfig::new(company.company, payroll),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CompanyProfile, PayslipPolicy, SalaryPolicy};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_load_repository_config() {
        let loader = ConfigLoader::load("./config").expect("Failed to load config");
        let config = loader.config();

        assert_eq!(config.company(), &CompanyProfile::default());
        assert_eq!(config.salary(), &SalaryPolicy::default());
        assert_eq!(config.payslip(), &PayslipPolicy::default());
    }

    #[test]
    fn test_missing_directory_reports_company_file() {
        let err = ConfigLoader::load("./does/not/exist").unwrap_err();
        match err {
            EngineError::ConfigNotFound { path } => assert!(path.ends_with("company.yaml")),
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_payroll_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let company = fs::read_to_string("./config/company.yaml").unwrap();
        write(dir.path(), "company.yaml", &company);

        let err = ConfigLoader::load(dir.path()).unwrap_err();
        match err {
            EngineError::ConfigNotFound { path } => assert!(path.ends_with("payroll.yaml")),
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "company.yaml", "company: [not, a, profile");
        write(dir.path(), "payroll.yaml", "{}");

        let err = ConfigLoader::load(dir.path()).unwrap_err();
        assert!(matches!(err, EngineError::ConfigParseError { .. }));
    }

    #[test]
    fn test_custom_policy_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let company = fs::read_to_string("./config/company.yaml").unwrap();
        write(dir.path(), "company.yaml", &company);
        write(
            dir.path(),
            "payroll.yaml",
            r#"
payslip:
  provident_fund: "1800"
  professional_tax: "150"
  pf_admin: "75"
  effective_working_days: 22
  loss_of_pay_days: 1
"#,
        );

        let config = ConfigLoader::load(dir.path()).unwrap().into_config();
        assert_eq!(config.payslip().provident_fund, dec("1800"));
        assert_eq!(config.payslip().effective_working_days, 22);
        assert_eq!(config.salary(), &SalaryPolicy::default());
    }
}
