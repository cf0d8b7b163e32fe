//! Experience certificate.

use crate::config::CompanyProfile;
use crate::models::{Employee, ExperienceLetter};

use super::format::letter_date;
use super::layout::{Block, Layout, Text};

/// Builds the experience letter. Carries no salary figures.
pub fn compose(company: &CompanyProfile, employee: &Employee, letter: &ExperienceLetter) -> Layout {
    Layout {
        header: Vec::new(),
        body: vec![
            Block::Text(Text::new("TO WHOMSOEVER IT MAY CONCERN").bold().centered()),
            Block::Spacer(8.0),
            Block::text(format!("Date: {}", letter_date(letter.issue_date))),
            Block::Spacer(15.0),
            Block::text(format!(
                "This is to certify that {} worked with {} from {} to {}. Their designation was {}. Their conduct was good.",
                employee.name,
                company.legal_name,
                letter_date(letter.from_date),
                letter_date(letter.to_date),
                employee.designation_or_blank()
            )),
            Block::Spacer(15.0),
            Block::text("We wish them all success in future endeavors."),
        ],
        footer: None,
    }
}
