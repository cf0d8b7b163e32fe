//! Relieving letter.

use crate::config::CompanyProfile;
use crate::models::{Employee, RelievingLetter};

use super::format::letter_date;
use super::layout::{Block, Layout, Text};

/// Builds the relieving letter. Carries no salary figures.
pub fn compose(company: &CompanyProfile, employee: &Employee, letter: &RelievingLetter) -> Layout {
    Layout {
        header: Vec::new(),
        body: vec![
            Block::text(letter_date(letter.issue_date)),
            Block::Spacer(10.0),
            Block::Text(Text::new("RELIEVING LETTER").bold()),
            Block::Spacer(10.0),
            Block::text(format!(
                "This is to confirm that {} (Emp No: {}) has been relieved from {} effective {}.",
                employee.name,
                employee.employee_no,
                company.legal_name,
                letter_date(letter.relieving_date)
            )),
            Block::Spacer(25.0),
            Block::text("Authorized Signatory"),
        ],
        footer: None,
    }
}
