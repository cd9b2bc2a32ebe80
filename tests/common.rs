//! Common test utilities for building forms, codes and clipboards.
use rand::SeedableRng;
use rand::rngs::StdRng;
use utmkit::prelude::*;

pub const FIXED_CODE: &str = "cpm-12345678-afbf08";

/// The campaign code used by the documented scenarios.
#[allow(dead_code)]
pub fn fixed_code() -> CampaignCode {
    CampaignCode::parse(FIXED_CODE).expect("fixed code is well-formed")
}

/// A complete landing-page form.
///
/// Composes to `https://metamask.io/page?utm_source=twitter&utm_medium=paid_social&utm_campaign=<code>`.
#[allow(dead_code)]
pub fn landing_page_fields() -> FieldStore {
    [
        (Field::User, "alice"),
        (Field::LandingPageUrl, "https://metamask.io/page"),
        (Field::UtmSource, "twitter"),
        (Field::UtmMedium, "paid_social"),
        (Field::CampaignName, "q1"),
        (Field::BusinessLine, "Infura"),
        (Field::StartDate, "2024-01-01"),
        (Field::EndDate, "2024-02-01"),
        (Field::Objective, "awareness"),
        (Field::Tactic, "branding"),
        (Field::Tags, ""),
    ]
    .into_iter()
    .collect()
}

/// A complete deeplink form using a listed URL type and no tactic.
#[allow(dead_code)]
pub fn deeplink_fields() -> FieldStore {
    [
        (Field::User, "bob@example.com"),
        (Field::UrlType, "https://portfolio.metamask.io"),
        (Field::UtmSource, "Twitter / X"),
        (Field::UtmMedium, "Paid (Social)"),
        (Field::CampaignName, "Spring Launch"),
        (Field::BusinessLine, "MMPortfolio"),
        (Field::StartDate, "2024-03-01"),
        (Field::EndDate, "2024-03-31"),
        (Field::Objective, "engagement"),
        (Field::Ticket, "GROWTH-42"),
    ]
    .into_iter()
    .collect()
}

/// Creates a session with a seeded RNG and replays `fields` into it.
#[allow(dead_code)]
pub fn seeded_builder(config: VariantConfig, fields: &FieldStore, seed: u64) -> LinkBuilder {
    let mut builder = LinkBuilder::with_rng(config, StdRng::seed_from_u64(seed));
    for (field, value) in fields.iter() {
        builder.set_field(field, value);
    }
    builder
}

/// A clipboard that rejects every write.
#[allow(dead_code)]
#[derive(Default)]
pub struct DeniedClipboard {
    pub attempts: usize,
}

impl Clipboard for DeniedClipboard {
    fn write_text(&mut self, _text: &str) -> std::result::Result<(), ClipboardError> {
        self.attempts += 1;
        Err(ClipboardError::Unavailable("permission denied".to_string()))
    }
}
