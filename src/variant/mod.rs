//! Per-variant configuration of the link builder engine.
//!
//! The landing-page and deeplink forms share one engine. Everything that
//! differs between them (which fields are required, which dropdown values are
//! placeholders, how the destination is resolved, whether UTM values are
//! normalized, when the campaign code is regenerated) is data in a
//! [`VariantConfig`].

pub mod options;

use crate::error::ConfigError;
use crate::form::{Field, FieldStore, Selection};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::str::FromStr;

pub use options::*;

/// How the destination URL is read from the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DestinationStrategy {
    /// The destination is the raw value of a single field.
    Direct { field: Field },
    /// A dropdown picks the destination; one sentinel option defers to a
    /// free-form field instead.
    #[serde(rename_all = "camelCase")]
    Typed {
        type_field: Field,
        custom_field: Field,
        custom_sentinel: String,
    },
}

/// The field a destination was read from, together with its raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDestination<'a> {
    pub source: Field,
    pub value: &'a str,
}

impl DestinationStrategy {
    pub fn resolve<'a>(&self, store: &'a FieldStore) -> ResolvedDestination<'a> {
        match self {
            DestinationStrategy::Direct { field } => ResolvedDestination {
                source: *field,
                value: store.get(*field),
            },
            DestinationStrategy::Typed {
                type_field,
                custom_field,
                custom_sentinel,
            } => {
                let selected = store.get(*type_field);
                if selected == custom_sentinel.as_str() {
                    ResolvedDestination {
                        source: *custom_field,
                        value: store.get(*custom_field),
                    }
                } else {
                    ResolvedDestination {
                        source: *type_field,
                        value: selected,
                    }
                }
            }
        }
    }

    /// Fields this strategy may read from.
    pub fn fields(&self) -> Vec<Field> {
        match self {
            DestinationStrategy::Direct { field } => vec![*field],
            DestinationStrategy::Typed {
                type_field,
                custom_field,
                ..
            } => vec![*type_field, *custom_field],
        }
    }
}

/// When a change to a trigger field regenerates the campaign code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TriggerPolicy {
    /// Every trigger field must be filled.
    #[default]
    AllPresent,
    /// At least one trigger field must be filled.
    AnyPresent,
}

impl TriggerPolicy {
    pub fn is_satisfied(self, store: &FieldStore, triggers: &[Field]) -> bool {
        match self {
            TriggerPolicy::AllPresent => triggers.iter().all(|f| store.is_filled(*f)),
            TriggerPolicy::AnyPresent => triggers.iter().any(|f| store.is_filled(*f)),
        }
    }
}

/// Extra acceptance rules for a dropdown-backed field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRule {
    pub field: Field,
    /// Placeholder option that counts as "nothing selected".
    #[serde(default)]
    pub sentinel: Option<String>,
    /// When set, only these values are accepted.
    #[serde(default)]
    pub one_of: Option<Vec<String>>,
}

impl SelectionRule {
    pub fn accepts(&self, raw: &str) -> bool {
        Selection::classify(raw, self.sentinel.as_deref())
            .chosen()
            .is_some_and(|value| {
                self.one_of
                    .as_ref()
                    .is_none_or(|allowed| allowed.iter().any(|a| a == value))
            })
    }
}

/// Everything that distinguishes one form variant from another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantConfig {
    pub name: String,
    pub destination: DestinationStrategy,
    /// Prefixes a destination must start with, e.g. `https://`.
    pub allowed_schemes: Vec<String>,
    /// Fields that must be non-empty, in reporting order. The destination is
    /// always required and does not need to be listed.
    pub required: Vec<Field>,
    #[serde(default)]
    pub selections: Vec<SelectionRule>,
    /// Whether source, medium and content are normalized before encoding.
    #[serde(default)]
    pub normalize: bool,
    #[serde(default = "default_triggers")]
    pub triggers: Vec<Field>,
    #[serde(default)]
    pub trigger_policy: TriggerPolicy,
    #[serde(default)]
    pub options: FormOptions,
}

fn default_triggers() -> Vec<Field> {
    Field::CODE_TRIGGERS.to_vec()
}

impl VariantConfig {
    /// The landing-page form: a flat field set with a direct landing page URL,
    /// verbatim UTM values, and both objective and tactic required.
    pub fn landing_page() -> Self {
        Self {
            name: VariantKind::LandingPage.to_string(),
            destination: DestinationStrategy::Direct {
                field: Field::LandingPageUrl,
            },
            allowed_schemes: vec!["http://".to_string(), "https://".to_string()],
            required: vec![
                Field::User,
                Field::UtmSource,
                Field::UtmMedium,
                Field::CampaignName,
                Field::BusinessLine,
                Field::StartDate,
                Field::EndDate,
                Field::Objective,
                Field::Tactic,
            ],
            selections: vec![
                SelectionRule {
                    field: Field::Objective,
                    sentinel: Some(NONE_SELECTED.to_string()),
                    one_of: None,
                },
                SelectionRule {
                    field: Field::Tactic,
                    sentinel: Some(NONE_SELECTED.to_string()),
                    one_of: None,
                },
            ],
            normalize: false,
            triggers: default_triggers(),
            trigger_policy: TriggerPolicy::AllPresent,
            options: FormOptions::landing_page(),
        }
    }

    /// The deeplink form: destination picked from a URL type list (or a custom
    /// URL), `metamask://` links allowed, normalized UTM values, a ticket
    /// reference required and the tactic optional.
    pub fn deeplink() -> Self {
        Self {
            name: VariantKind::Deeplink.to_string(),
            destination: DestinationStrategy::Typed {
                type_field: Field::UrlType,
                custom_field: Field::CustomUrl,
                custom_sentinel: CUSTOM_URL_TYPE.to_string(),
            },
            allowed_schemes: vec![
                "http://".to_string(),
                "https://".to_string(),
                "metamask://".to_string(),
            ],
            required: vec![
                Field::User,
                Field::UtmSource,
                Field::UtmMedium,
                Field::CampaignName,
                Field::BusinessLine,
                Field::StartDate,
                Field::EndDate,
                Field::Objective,
                Field::Ticket,
            ],
            selections: vec![SelectionRule {
                field: Field::Objective,
                sentinel: None,
                one_of: Some(OBJECTIVES.iter().map(|o| o.to_string()).collect()),
            }],
            normalize: true,
            triggers: default_triggers(),
            trigger_policy: TriggerPolicy::AnyPresent,
            options: FormOptions::deeplink(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: VariantConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        let config = Self::from_json(&content)?;
        log::debug!("Loaded variant '{}' from '{}'", config.name, path);
        Ok(config)
    }

    /// Rejects configurations the engine cannot operate on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.allowed_schemes.is_empty() || self.allowed_schemes.iter().any(|s| s.is_empty()) {
            return Err(ConfigError::Invalid(
                "at least one non-empty allowed scheme prefix is required".to_string(),
            ));
        }
        if self.triggers.is_empty() {
            return Err(ConfigError::Invalid(
                "the campaign code trigger set must not be empty".to_string(),
            ));
        }
        if let DestinationStrategy::Typed {
            type_field,
            custom_field,
            custom_sentinel,
        } = &self.destination
        {
            if type_field == custom_field {
                return Err(ConfigError::Invalid(format!(
                    "typed destination reads '{}' for both the type and the custom URL",
                    type_field
                )));
            }
            if custom_sentinel.is_empty() {
                return Err(ConfigError::Invalid(
                    "typed destination needs a non-empty custom sentinel".to_string(),
                ));
            }
            // Only one of the two fields is read at a time; requiring both would
            // reject every form.
            if let Some(field) = [type_field, custom_field]
                .into_iter()
                .find(|field| self.required.contains(field))
            {
                return Err(ConfigError::Invalid(format!(
                    "'{}' is resolved by the typed destination and cannot also be required",
                    field
                )));
            }
        }
        if let Some(rule) = self
            .selections
            .iter()
            .find(|r| r.one_of.as_ref().is_some_and(|values| values.is_empty()))
        {
            return Err(ConfigError::Invalid(format!(
                "selection rule for '{}' allows no values",
                rule.field
            )));
        }
        Ok(())
    }

    pub fn selection_rule(&self, field: Field) -> Option<&SelectionRule> {
        self.selections.iter().find(|rule| rule.field == field)
    }

    pub fn is_required(&self, field: Field) -> bool {
        self.required.contains(&field)
    }

    /// Fields shown by this variant's form, in form order.
    pub fn fields(&self) -> Vec<Field> {
        let destination = self.destination.fields();
        Field::ALL
            .iter()
            .copied()
            .filter(|f| destination.contains(f) || self.required.contains(f) || self.is_optional_input(*f))
            .collect()
    }

    fn is_optional_input(&self, field: Field) -> bool {
        match field {
            Field::Tags => true,
            Field::Tactic => !self.options.tactics.is_empty(),
            _ => false,
        }
    }
}

/// The built-in variants, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VariantKind {
    LandingPage,
    Deeplink,
}

impl VariantKind {
    pub fn config(self) -> VariantConfig {
        match self {
            VariantKind::LandingPage => VariantConfig::landing_page(),
            VariantKind::Deeplink => VariantConfig::deeplink(),
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariantKind::LandingPage => write!(f, "landing-page"),
            VariantKind::Deeplink => write!(f, "deeplink"),
        }
    }
}

impl FromStr for VariantKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "landing-page" => Ok(VariantKind::LandingPage),
            "deeplink" => Ok(VariantKind::Deeplink),
            other => Err(ConfigError::Invalid(format!("unknown variant '{}'", other))),
        }
    }
}
