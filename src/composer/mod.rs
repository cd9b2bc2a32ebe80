//! Assembles the final tracking URL from a destination and UTM parameters.

mod normalize;

pub use normalize::normalize;

use crate::code::CampaignCode;
use crate::error::Diagnostic;
use crate::form::{Field, FieldStore};
use crate::validator::Validator;
use crate::variant::VariantConfig;
use url::Url;
use url::form_urlencoded;

pub const UTM_SOURCE: &str = "utm_source";
pub const UTM_MEDIUM: &str = "utm_medium";
pub const UTM_CAMPAIGN: &str = "utm_campaign";
pub const UTM_CONTENT: &str = "utm_content";

/// Fields whose values are normalized when the variant asks for it.
pub const NORMALIZED_FIELDS: [Field; 3] = [Field::UtmSource, Field::UtmMedium, Field::Tags];

/// Turns a form into a tracking URL for one variant.
///
/// Composition is a pure function of the field values and the campaign code;
/// calling it twice with the same inputs yields the same string.
pub struct UrlComposer<'a> {
    config: &'a VariantConfig,
}

impl<'a> UrlComposer<'a> {
    pub fn new(config: &'a VariantConfig) -> Self {
        Self { config }
    }

    /// Builds the tracking URL, or the diagnostic explaining why it cannot be built.
    ///
    /// Missing inputs take precedence over a malformed destination. The output
    /// is the serialized destination (with any existing query kept), then `&`
    /// if that query was non-empty or `?` if there was none, then the encoded
    /// UTM parameters. The serialized destination is never altered, so a
    /// fragment stays where it was and the parameters follow it.
    pub fn compose(
        &self,
        store: &FieldStore,
        code: Option<&CampaignCode>,
    ) -> Result<String, Diagnostic> {
        let report = Validator::new(self.config).check(store, code);
        let code = match code {
            Some(code) if report.has_all_inputs() => code,
            _ => {
                log::debug!("Composition skipped: {}", report);
                return Err(Diagnostic::IncompleteFields);
            }
        };
        if report.malformed_destination {
            return Err(Diagnostic::MalformedDestination);
        }

        let destination = self.config.destination.resolve(store);
        let url = Url::parse(destination.value).map_err(|e| {
            log::debug!("Destination '{}' failed to parse: {}", destination.value, e);
            Diagnostic::MalformedDestination
        })?;

        let separator = match (url.query(), url.fragment()) {
            (Some(query), _) if !query.is_empty() => "&",
            (Some(_), None) => "",
            _ => "?",
        };
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.parameters(store, code))
            .finish();

        Ok(format!("{}{}{}", url.as_str(), separator, query))
    }

    /// Like [`compose`](Self::compose), but always yields a displayable string.
    pub fn render(&self, store: &FieldStore, code: Option<&CampaignCode>) -> String {
        self.compose(store, code)
            .unwrap_or_else(|diagnostic| diagnostic.to_string())
    }

    /// The UTM parameters in insertion order, before percent-encoding.
    ///
    /// `utm_content` is only present when the tags are non-empty after
    /// normalization. The campaign code is never normalized.
    pub fn parameters(&self, store: &FieldStore, code: &CampaignCode) -> Vec<(&'static str, String)> {
        let mut params = vec![
            (UTM_SOURCE, self.value(store, Field::UtmSource)),
            (UTM_MEDIUM, self.value(store, Field::UtmMedium)),
            (UTM_CAMPAIGN, code.to_string()),
        ];
        let content = self.value(store, Field::Tags);
        if !content.is_empty() {
            params.push((UTM_CONTENT, content));
        }
        params
    }

    fn value(&self, store: &FieldStore, field: Field) -> String {
        encoded_value(self.config, field, store.get(field))
    }
}

/// The value a field contributes to the query string.
pub(crate) fn encoded_value(config: &VariantConfig, field: Field, raw: &str) -> String {
    if config.normalize && NORMALIZED_FIELDS.contains(&field) {
        normalize(raw)
    } else {
        raw.to_string()
    }
}
