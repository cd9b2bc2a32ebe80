use crate::engine::LinkBuilder;
use crate::error::FormDataError;
use crate::form::{Field, FieldChange, FieldStore};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fs;

/// Raw form values as exchanged in JSON, keyed by external field name.
///
/// ```json
/// { "user": "alice", "landingPageUrl": "https://metamask.io/page" }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct FormData {
    values: AHashMap<String, String>,
}

impl FormData {
    pub fn from_json(json: &str) -> Result<Self, FormDataError> {
        let data: FormData = serde_json::from_str(json)?;
        // Surface unknown names at load time rather than on first use.
        data.changes()?;
        Ok(data)
    }

    pub fn from_file(path: &str) -> Result<Self, FormDataError> {
        let content = fs::read_to_string(path).map_err(|source| FormDataError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Captures the non-empty fields of a store.
    pub fn from_store(store: &FieldStore) -> Self {
        Self {
            values: store
                .iter()
                .map(|(field, value)| (field.name().to_string(), value.to_string()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The values as field changes, in form order.
    pub fn changes(&self) -> Result<Vec<FieldChange>, FormDataError> {
        let mut changes = self
            .values
            .iter()
            .map(|(name, value)| Ok(FieldChange::new(name.parse::<Field>()?, value.clone())))
            .collect::<Result<Vec<_>, FormDataError>>()?;
        changes.sort_by_key(|change| change.field);
        Ok(changes)
    }
}

/// Machine-readable result of a build, as printed by `utmkit-cli --json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BuildSummary {
    pub variant: String,
    pub valid: bool,
    pub campaign_code: Option<String>,
    pub url: Option<String>,
    pub diagnostic: Option<String>,
    pub missing: Vec<Field>,
}

impl BuildSummary {
    pub fn from_builder(builder: &LinkBuilder) -> Self {
        let report = builder.validation_report();
        let (url, diagnostic) = match builder.compose() {
            Ok(url) => (Some(url), None),
            Err(diagnostic) => (None, Some(diagnostic.to_string())),
        };
        Self {
            variant: builder.config().name.clone(),
            valid: report.is_complete(),
            campaign_code: builder.campaign_code().map(|code| code.to_string()),
            url,
            diagnostic,
            missing: report.missing,
        }
    }
}
