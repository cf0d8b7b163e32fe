//! Configuration loading and management for the payroll document engine.
//!
//! This module loads the company profile and the payroll policy from YAML
//! files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_docs::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Conveyance: {}", config.config().salary().conveyance);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, CompanyConfig, CompanyProfile, PayrollConfig, PayslipPolicy, SalaryPolicy,
};
