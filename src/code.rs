use crate::error::CodeError;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

const PREFIX: &str = "cpm-";
const SUFFIX: &str = "-afbf08";
const DIGITS_MIN: u32 = 10_000_000;
const DIGITS_MAX: u32 = 99_999_999;

static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^cpm-[0-9]{8}-afbf08$").expect("valid campaign code pattern"));

/// The auto-generated campaign identifier embedded as `utm_campaign`.
///
/// A value of this type always has the shape `cpm-<8 digits>-afbf08`; it can
/// only be obtained through [`CampaignCode::generate`] or a checked parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CampaignCode(String);

impl CampaignCode {
    /// Generates a fresh code from the thread-local RNG.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::rng())
    }

    /// Generates a fresh code from a caller-supplied RNG.
    ///
    /// The number is drawn from `[10_000_000, 99_999_999]`, so it always has
    /// exactly eight digits without padding.
    pub fn generate_with<R: Rng>(rng: &mut R) -> Self {
        let digits = rng.random_range(DIGITS_MIN..=DIGITS_MAX);
        CampaignCode(format!("{}{}{}", PREFIX, digits, SUFFIX))
    }

    pub fn parse(raw: &str) -> Result<Self, CodeError> {
        if CODE_PATTERN.is_match(raw) {
            Ok(CampaignCode(raw.to_string()))
        } else {
            Err(CodeError::InvalidFormat(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The eight-digit numeric part.
    pub fn digits(&self) -> &str {
        &self.0[PREFIX.len()..self.0.len() - SUFFIX.len()]
    }
}

impl fmt::Display for CampaignCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CampaignCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CampaignCode {
    type Error = CodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CampaignCode> for String {
    fn from(code: CampaignCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CampaignCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
