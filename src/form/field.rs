use crate::error::FieldError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every named input of the link builder form.
///
/// Not every variant uses every field: the landing-page form reads
/// `LandingPageUrl`, the deeplink form reads `UrlType`/`CustomUrl` and `Ticket`.
/// The external name (`camelCase`) is what input collaborators, JSON files and
/// the CLI use to address a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    User,
    LandingPageUrl,
    UrlType,
    CustomUrl,
    UtmSource,
    UtmMedium,
    CampaignName,
    BusinessLine,
    StartDate,
    EndDate,
    Objective,
    Tactic,
    Tags,
    Ticket,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 14] = [
        Field::User,
        Field::LandingPageUrl,
        Field::UrlType,
        Field::CustomUrl,
        Field::UtmSource,
        Field::UtmMedium,
        Field::CampaignName,
        Field::BusinessLine,
        Field::StartDate,
        Field::EndDate,
        Field::Objective,
        Field::Tactic,
        Field::Tags,
        Field::Ticket,
    ];

    /// The fields whose changes can regenerate the campaign code.
    pub const CODE_TRIGGERS: [Field; 3] = [Field::CampaignName, Field::BusinessLine, Field::UtmSource];

    pub fn name(self) -> &'static str {
        match self {
            Field::User => "user",
            Field::LandingPageUrl => "landingPageUrl",
            Field::UrlType => "urlType",
            Field::CustomUrl => "customUrl",
            Field::UtmSource => "utmSource",
            Field::UtmMedium => "utmMedium",
            Field::CampaignName => "campaignName",
            Field::BusinessLine => "businessLine",
            Field::StartDate => "startDate",
            Field::EndDate => "endDate",
            Field::Objective => "objective",
            Field::Tactic => "tactic",
            Field::Tags => "tags",
            Field::Ticket => "ticket",
        }
    }

    /// Human-readable label, used when reporting missing inputs.
    pub fn label(self) -> &'static str {
        match self {
            Field::User => "User",
            Field::LandingPageUrl => "Landing Page URL",
            Field::UrlType => "URL Type",
            Field::CustomUrl => "Custom URL",
            Field::UtmSource => "UTM Source",
            Field::UtmMedium => "UTM Medium",
            Field::CampaignName => "Campaign Name",
            Field::BusinessLine => "Business Line",
            Field::StartDate => "Start Date",
            Field::EndDate => "End Date",
            Field::Objective => "Objective",
            Field::Tactic => "Tactic",
            Field::Tags => "Tags",
            Field::Ticket => "Ticket",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.name() == s)
            .ok_or_else(|| FieldError::UnknownField(s.to_string()))
    }
}

/// A single user edit, as delivered by the input collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: Field,
    pub value: String,
}

impl FieldChange {
    pub fn new(field: Field, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}
