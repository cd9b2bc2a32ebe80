use crate::code::CampaignCode;
use crate::composer::encoded_value;
use crate::form::{Field, FieldStore};
use crate::variant::VariantConfig;
use itertools::Itertools;
use serde::Serialize;
use std::fmt;

/// The outcome of checking a form against its variant's rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// Required inputs that are empty, placeholders, not an accepted option, or
    /// empty once normalized.
    pub missing: Vec<Field>,
    /// The destination is present but does not start with an allowed scheme.
    pub malformed_destination: bool,
    /// No campaign code has been generated yet.
    pub missing_code: bool,
}

impl ValidationReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && !self.malformed_destination && !self.missing_code
    }

    /// True when every input is present; the destination may still be malformed.
    pub fn has_all_inputs(&self) -> bool {
        self.missing.is_empty() && !self.missing_code
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_complete() {
            return write!(f, "all required fields are valid");
        }
        let mut problems = Vec::new();
        if !self.missing.is_empty() {
            problems.push(format!(
                "missing {}",
                self.missing.iter().map(|field| field.label()).join(", ")
            ));
        }
        if self.malformed_destination {
            problems.push("destination URL has an unsupported scheme".to_string());
        }
        if self.missing_code {
            problems.push("campaign code not generated".to_string());
        }
        write!(f, "{}", problems.join("; "))
    }
}

/// Decides whether a form is complete and well-formed for one variant.
pub struct Validator<'a> {
    config: &'a VariantConfig,
}

impl<'a> Validator<'a> {
    pub fn new(config: &'a VariantConfig) -> Self {
        Self { config }
    }

    pub fn is_valid(&self, store: &FieldStore, code: Option<&CampaignCode>) -> bool {
        self.check(store, code).is_complete()
    }

    /// Evaluates every rule and reports all failures, not just the first.
    pub fn check(&self, store: &FieldStore, code: Option<&CampaignCode>) -> ValidationReport {
        let mut report = ValidationReport::default();

        let destination = self.config.destination.resolve(store);
        if destination.value.is_empty() {
            report.missing.push(destination.source);
        } else if !self.has_allowed_scheme(destination.value) {
            report.malformed_destination = true;
        }

        for field in &self.config.required {
            if !self.accepts(*field, store.get(*field)) {
                report.missing.push(*field);
            }
        }

        report.missing_code = code.is_none();
        report
    }

    pub fn has_allowed_scheme(&self, url: &str) -> bool {
        self.config
            .allowed_schemes
            .iter()
            .any(|scheme| url.starts_with(scheme.as_str()))
    }

    fn accepts(&self, field: Field, raw: &str) -> bool {
        match self.config.selection_rule(field) {
            Some(rule) => rule.accepts(raw),
            None => !encoded_value(self.config, field, raw).is_empty(),
        }
    }
}
