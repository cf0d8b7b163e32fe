//! Company letterhead shared by the offer letter and the payslip.

use crate::assets::Asset;
use crate::config::CompanyProfile;

use super::layout::{Align, Block, Image, Text};

const LOGO_WIDTH: f32 = 160.0;

/// Logo (when present), the legacy company-name line, then the address.
pub fn letterhead(company: &CompanyProfile, logo: &Asset, logo_asset: Option<&str>) -> Vec<Block> {
    let mut blocks = Vec::new();

    if let Asset::Image(bytes) = logo {
        blocks.push(Block::Image(Image {
            bytes: bytes.clone(),
            width: LOGO_WIDTH,
            max_height: None,
            align: Align::Left,
        }));
    }
    blocks.push(Block::Spacer(6.0));

    if company.is_legacy_logo(logo_asset) {
        blocks.push(Block::Text(Text::new(&company.display_name).bold().size(12.0)));
    }
    blocks.push(Block::text(company.address_lines.join("\n")));
    blocks.push(Block::Spacer(10.0));

    blocks
}

/// `Phone : …,   Email : …,   Web : …`
pub fn contact_footer(company: &CompanyProfile) -> Text {
    Text::new(format!(
        "Phone : {},   Email : {},   Web : {}",
        company.phone, company.email, company.website
    ))
    .centered()
}
