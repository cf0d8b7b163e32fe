//! Offer letter with the Annexure-I salary breakup.

use rust_decimal::Decimal;

use crate::assets::Asset;
use crate::calculation::MONTHS_PER_YEAR;
use crate::config::CompanyProfile;
use crate::models::{Employee, OfferLetter, SalaryBreakup};

use super::format::{format_amount, letter_date, offer_date};
use super::header::{contact_footer, letterhead};
use super::layout::{Align, Block, Cell, Column, Image, Layout, Table, Text};

const SIGNATURE_WIDTH: f32 = 120.0;
const SIGNATURE_HEIGHT: f32 = 65.0;

/// Builds the two-page offer letter.
pub fn compose(
    company: &CompanyProfile,
    employee: &Employee,
    letter: &OfferLetter,
    breakup: &SalaryBreakup,
    logo: &Asset,
    signature: &Asset,
) -> Layout {
    let mut body = vec![
        Block::Text(Text::new("OFFER LETTER").bold().size(16.0).centered().underlined()),
        Block::Spacer(25.0),
        Block::Table(
            Table::new(vec![140.0, 15.0, 360.0])
                .row(colon_row("Date", offer_date(letter.issue_date)))
                .row(colon_row("Name", employee.name.clone()))
                .row(colon_row("Work location", employee.location_or_blank().to_string())),
        ),
        Block::Spacer(12.0),
        Block::text(format!("Dear {},", employee.name)),
        Block::Spacer(BLANK_LINE),
        Block::text(format!(
            "With reference to your appointment with {}, we have pleasure in offering you the position as \"{}\" in our organization on a fixed term contract basis. The detail of the offer is as follow:",
            company.legal_name,
            employee.designation_or_blank()
        )),
        Block::Spacer(BLANK_LINE),
        Block::Table(
            Table::new(vec![180.0, 10.0, 325.0])
                .row(colon_row("Start date of Assignment", letter_date(letter.start_date)))
                .row(colon_row("Monthly CTC", format!("{}/-", format_amount(employee.monthly_ctc))))
                .row(colon_row("Annual CTC", format!("{}/-", format_amount(employee.annual_ctc)))),
        ),
        Block::Spacer(BLANK_LINE),
        Block::text(
            "Any statutory dues like PF, ESIC, Bonus etc, if applicable, will be paid / Deducted as per law after probation period of one (1) year from the date of joining. All taxes will be deducted as applicable by law.",
        ),
        Block::Spacer(BLANK_LINE),
        Block::text(format!(
            "If you wish to accept this offer, kindly send the accepted copy of the same along with a copy of your resignation letter or relieving letter (if applicable). In case the signed acceptance and required documents are not received by {legal} within 48 hours of the offer date, {legal} at their discretion reserve their right to treat this offer as withdrawn automatically without further notice.",
            legal = company.legal_name
        )),
        Block::PageBreak,
    ];

    body.extend(annexure(employee, breakup));
    body.push(Block::Spacer(20.0));
    body.push(signature_blocks(company, signature));

    Layout {
        header: letterhead(company, logo, letter.logo_asset.as_deref()),
        body,
        footer: Some(contact_footer(company)),
    }
}

const BLANK_LINE: f32 = 14.0;

fn colon_row(label: &str, value: String) -> Vec<Cell> {
    vec![Cell::new(label), Cell::new(":"), Cell::new(value)]
}

fn annexure(employee: &Employee, breakup: &SalaryBreakup) -> Vec<Block> {
    let months = Decimal::from(MONTHS_PER_YEAR);
    let centered = |content: String| Cell::text(Text::new(content).centered());
    let heading = |content: &str| Cell::text(Text::new(content).bold().centered());
    let row = |label: &str, monthly: Decimal, yearly: Decimal| {
        vec![
            centered(label.to_string()),
            centered(format_amount(monthly)),
            centered(format_amount(yearly)),
        ]
    };

    let net_monthly = breakup.net_take_home();

    let table = Table::new(vec![2.0, 1.0, 1.0])
        .bordered()
        .row(vec![heading("Salary Breakup").span(3)])
        .row(vec![heading(employee.name.as_str()), heading(employee.designation_or_blank()).span(2)])
        .row(vec![heading("Particulars"), heading("Monthly"), heading("Yearly")])
        .row(row("Basic", breakup.basic, breakup.basic * months))
        .row(row("HRA", breakup.hra, breakup.hra * months))
        .row(row("Conveyance", breakup.conveyance, breakup.conveyance * months))
        .row(row(
            "Special Allowances",
            breakup.special_allowance,
            breakup.special_allowance * months,
        ))
        .row(row("CTC", breakup.monthly_ctc, breakup.annual_ctc))
        .row(row("PT", breakup.pt, breakup.pt * months))
        .row(row("Net Take Home Salary", net_monthly, net_monthly * months));

    vec![
        Block::Spacer(18.0),
        Block::Text(Text::new("Annexure-I: Fixed Annual CTC").bold().size(14.0).centered()),
        Block::Spacer(40.0),
        Block::Table(table),
        Block::Spacer(24.0),
        Block::Columns {
            columns: vec![
                Column::new(12.0, vec![Block::Text(Text::new("\u{2022}").bold())]),
                Column::new(
                    500.0,
                    vec![Block::Text(
                        Text::new(
                            "Income Tax and Professional tax as applicable will be deducted. All taxes will be deducted as applicable by law. Your salary is strictly confidential.",
                        )
                        .bold(),
                    )],
                ),
            ],
            boxed: false,
        },
    ]
}

fn signature_blocks(company: &CompanyProfile, signature: &Asset) -> Block {
    let mut employer = vec![
        Block::text(format!("For {}.", company.legal_name)),
        Block::Spacer(6.0),
    ];
    match signature {
        Asset::Image(bytes) => employer.push(Block::Image(Image {
            bytes: bytes.clone(),
            width: SIGNATURE_WIDTH,
            max_height: Some(SIGNATURE_HEIGHT),
            align: Align::Left,
        })),
        Asset::Absent => employer.push(Block::Spacer(SIGNATURE_HEIGHT)),
    }
    employer.push(Block::Spacer(4.0));
    employer.push(Block::text("Authorized Signatory"));

    let employee = vec![
        Block::Text(Text::new("Accepted By").centered()),
        Block::Spacer(SIGNATURE_HEIGHT),
        Block::Text(Text::new("Signature of Employee").centered()),
    ];

    Block::Columns {
        columns: vec![Column::new(295.0, employer), Column::new(220.0, employee)],
        boxed: false,
    }
}
