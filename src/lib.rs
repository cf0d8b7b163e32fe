//! Payroll document engine.
//!
//! This crate splits a monthly cost-to-company figure into salary
//! components and renders four HR documents from it: offer letters,
//! payslips, experience letters and relieving letters, all as PDFs.
//!
//! The building blocks are usable on their own:
//!
//! - [`calculation::SalaryCalculator`] derives a [`models::SalaryBreakup`]
//!   with an optional audit trail.
//! - [`calculation::amount_in_words`] spells amounts using the Indian
//!   lakh/crore grouping.
//! - [`documents::DocumentRenderer`] composes and renders a document for an
//!   employee.
//! - [`service::DocumentService`] adds employee lookup and the record of
//!   generated documents, and [`api`] exposes it all over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod assets;
pub mod calculation;
pub mod config;
pub mod documents;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
