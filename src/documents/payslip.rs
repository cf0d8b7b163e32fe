//! Monthly payslip.

use rust_decimal::prelude::ToPrimitive;

use crate::assets::Asset;
use crate::calculation::{PayslipFigures, amount_in_words};
use crate::config::{CompanyProfile, PayslipPolicy};
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, Payslip};

use super::format::{amount_or_na, format_amount, letter_date, month_year};
use super::header::{contact_footer, letterhead};
use super::layout::{Block, Cell, Column, Layout, Table, Text};

/// Builds the payslip for the month of `payslip.issue_date`.
///
/// Fails only when the net pay is too large to spell out.
pub fn compose(
    company: &CompanyProfile,
    policy: &PayslipPolicy,
    employee: &Employee,
    payslip: &Payslip,
    figures: &PayslipFigures,
    logo: &Asset,
) -> EngineResult<Layout> {
    let net_whole = figures
        .net_pay
        .trunc()
        .to_i64()
        .ok_or_else(|| EngineError::InvalidRequest {
            field: "monthly_ctc".to_string(),
            message: format!("net pay {} is out of range", figures.net_pay),
        })?;

    let body = vec![
        Block::Text(
            Text::new(format!(
                "Pay-slip for the month of {}",
                month_year(payslip.issue_date)
            ))
            .bold()
            .size(14.0)
            .centered(),
        ),
        Block::Spacer(10.0),
        details_box(policy, employee),
        Block::Spacer(12.0),
        Block::Table(earnings_and_deductions(figures)),
        Block::Spacer(24.0),
        Block::Text(
            Text::new(format!(
                "Net Pay for the month: {}/-",
                format_amount(figures.net_pay)
            ))
            .bold(),
        ),
        Block::Spacer(10.0),
        Block::field(
            "Net Pay for the month: ",
            format!("{} Rupees Only.", amount_in_words(net_whole)),
        ),
        Block::Spacer(2.0),
        Block::Text(Text::new("(Rupees In words only)").italic()),
        Block::Spacer(20.0),
        Block::Text(
            Text::new(
                "*This is a computer generated pay-slip, hence does not require signature or stamp.",
            )
            .italic(),
        ),
    ];

    Ok(Layout {
        header: letterhead(company, logo, payslip.logo_asset.as_deref()),
        body,
        footer: Some(contact_footer(company)),
    })
}

fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

fn details_box(policy: &PayslipPolicy, employee: &Employee) -> Block {
    let joining = employee
        .joining_date
        .map(letter_date)
        .unwrap_or_else(|| "-".to_string());

    let left = vec![
        Block::field("Name: ", employee.name.clone()),
        Block::field("Joining Date: ", joining),
        Block::field("Designation: ", employee.designation_or_blank()),
        Block::field("Department: ", employee.department.clone().unwrap_or_default()),
        Block::field("Location: ", employee.location_or_blank()),
        Block::field(
            "Effective Working Days: ",
            policy.effective_working_days.to_string(),
        ),
        Block::field("LOP: ", policy.loss_of_pay_days.to_string()),
    ];

    let right = vec![
        Block::field("Employee No: ", employee.employee_no.clone()),
        Block::Spacer(6.0),
        Block::field("PAN Number: ", or_dash(employee.pan.as_deref())),
        Block::Spacer(6.0),
        Block::field("UAN Number: ", or_dash(employee.uan.as_deref())),
    ];

    Block::Columns {
        columns: vec![Column::new(1.0, left), Column::new(1.0, right)],
        boxed: true,
    }
}

fn earnings_and_deductions(figures: &PayslipFigures) -> Table {
    let bold = |content: &str| Cell::text(Text::new(content).bold());
    let amount = |content: String| Cell::text(Text::new(content).right());
    let line = |label: &str, value| vec![Cell::new(label), amount(amount_or_na(value))];

    let earnings = [
        line("BASIC ADVANCE", figures.basic),
        line("HRA", figures.hra),
        line("CONVEYANCE", figures.conveyance),
        line("SPECIAL ALLOWANCE", figures.special_allowance),
        line("TRAVEL ALLOWANCE", figures.travel_allowance),
    ];
    let deductions = [
        line("PF", figures.pf),
        line("PT", figures.pt),
        line("PF ADMIN", figures.pf_admin),
        line("MOBILE DEDUCTION", figures.mobile_deduction),
        line("HEALTH INSURANCE", figures.health_insurance),
    ];

    let mut table = Table::new(vec![1.4, 1.0, 1.4, 1.0])
        .bordered()
        .row(vec![
            Cell::text(Text::new("EARNINGS").bold().centered()).span(2).shaded(),
            Cell::text(Text::new("DEDUCTIONS").bold().centered()).span(2).shaded(),
        ])
        .row(vec![
            bold("ITEM"),
            Cell::text(Text::new("AMOUNT").bold().right()),
            bold("ITEM"),
            Cell::text(Text::new("AMOUNT").bold().right()),
        ]);

    for (earning, deduction) in earnings.into_iter().zip(deductions) {
        table = table.row(earning.into_iter().chain(deduction).collect());
    }

    table.row(vec![
        bold("TOTAL EARNINGS.INR"),
        Cell::text(Text::new(format_amount(figures.total_earnings)).bold().right()),
        bold("TOTAL DEDUCTIONS.INR"),
        Cell::text(Text::new(format_amount(figures.total_deductions)).bold().right()),
    ])
}
