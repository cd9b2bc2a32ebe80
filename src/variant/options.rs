//! Dropdown option lists offered by the built-in form variants.

use serde::{Deserialize, Serialize};

/// Placeholder option of the landing-page dropdowns.
pub const NONE_SELECTED: &str = "none selected";

/// Deeplink `urlType` value that defers to the free-form custom URL field.
pub const CUSTOM_URL_TYPE: &str = "custom";

pub const BUSINESS_LINES: &[&str] = &[
    "Consensys-All",
    "Developers-All",
    "MMask-Users",
    "MMExtension",
    "MMMobile",
    "MMInst",
    "MMDeveloper",
    "MMPortfolio",
    "Infura",
    "Linea",
];

pub const OBJECTIVES: &[&str] = &[
    "awareness",
    "acquisition",
    "monetization",
    "engagement",
    "leadgen",
    "registration",
];

pub const TACTICS: &[&str] = &[
    "productrelease",
    "featureupdate",
    "announcement",
    "content",
    "retargeting",
    "branding",
    "eventpromotion",
    "experiment",
];

pub const URL_TYPES: &[&str] = &[
    "https://metamask.io/download",
    "https://portfolio.metamask.io",
    "https://link.metamask.io/swap",
    "https://link.metamask.io/buy",
    "metamask://dapp/portfolio.metamask.io",
    CUSTOM_URL_TYPE,
];

/// The choices a presentation layer renders for each dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormOptions {
    pub business_lines: Vec<String>,
    pub objectives: Vec<String>,
    pub tactics: Vec<String>,
    pub url_types: Vec<String>,
}

impl FormOptions {
    /// Options of the landing-page form, each list led by its placeholder.
    pub fn landing_page() -> Self {
        Self {
            business_lines: owned(BUSINESS_LINES),
            objectives: with_placeholder(OBJECTIVES),
            tactics: with_placeholder(TACTICS),
            url_types: Vec::new(),
        }
    }

    pub fn deeplink() -> Self {
        Self {
            business_lines: owned(BUSINESS_LINES),
            objectives: owned(OBJECTIVES),
            tactics: owned(TACTICS),
            url_types: owned(URL_TYPES),
        }
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn with_placeholder(values: &[&str]) -> Vec<String> {
    std::iter::once(NONE_SELECTED)
        .chain(values.iter().copied())
        .map(str::to_string)
        .collect()
}
