//! Integration tests for utmkit
//!
//! End-to-end tests that load variant configs and form data from JSON and run
//! them through a session.
//!
mod common;
use common::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use utmkit::prelude::*;

const LANDING_FORM_JSON: &str = r#"{
    "user": "alice",
    "landingPageUrl": "https://metamask.io/page?ref=abc",
    "utmSource": "twitter",
    "utmMedium": "paid_social",
    "campaignName": "q1",
    "businessLine": "Infura",
    "startDate": "2024-01-01",
    "endDate": "2024-02-01",
    "objective": "awareness",
    "tactic": "branding",
    "tags": "banner_v1"
}"#;

const CUSTOM_VARIANT_JSON: &str = r#"{
    "name": "partner",
    "destination": { "kind": "direct", "field": "landingPageUrl" },
    "allowedSchemes": ["https://"],
    "required": ["user", "utmSource", "utmMedium", "campaignName"],
    "normalize": true,
    "triggerPolicy": "anyPresent"
}"#;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_form_data_through_landing_page_session() {
        let form = FormData::from_json(LANDING_FORM_JSON).expect("Failed to parse form data");
        assert_eq!(form.len(), 11);

        let mut builder =
            LinkBuilder::with_rng(VariantConfig::landing_page(), StdRng::seed_from_u64(21));
        for change in form.changes().expect("Field names should be known") {
            builder.apply(change);
        }

        assert!(builder.is_valid());
        let code = builder.campaign_code().expect("Code should be generated");
        assert_eq!(
            builder.generated_url(),
            format!(
                "https://metamask.io/page?ref=abc&utm_source=twitter&utm_medium=paid_social&utm_campaign={}&utm_content=banner_v1",
                code
            )
        );
    }

    #[test]
    fn test_form_data_rejects_unknown_fields() {
        let result = FormData::from_json(r#"{ "user": "alice", "color": "blue" }"#);
        match result {
            Err(FormDataError::Field(FieldError::UnknownField(name))) => assert_eq!(name, "color"),
            other => panic!("Expected an unknown field error, got {:?}", other),
        }
    }

    #[test]
    fn test_form_data_changes_follow_form_order() {
        let form = FormData::from_json(r#"{ "tags": "t", "user": "u", "utmSource": "s" }"#).unwrap();
        let fields: Vec<_> = form.changes().unwrap().into_iter().map(|c| c.field).collect();
        assert_eq!(fields, vec![Field::User, Field::UtmSource, Field::Tags]);
    }

    #[test]
    fn test_form_data_snapshot_round_trip() {
        let store = landing_page_fields();
        let form = FormData::from_store(&store);
        let json = serde_json::to_string(&form).unwrap();
        let restored = FormData::from_json(&json).unwrap();
        assert_eq!(restored, form);
        assert!(!json.contains("tags"));
    }

    #[test]
    fn test_form_data_from_file() {
        let dir = std::env::temp_dir().join(format!("utmkit-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("form.json");
        fs::write(&path, LANDING_FORM_JSON).unwrap();

        let form = FormData::from_file(path.to_str().unwrap()).expect("Failed to load form file");
        assert_eq!(form.len(), 11);

        let missing = FormData::from_file(dir.join("missing.json").to_str().unwrap());
        assert!(matches!(missing, Err(FormDataError::Io { .. })));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_custom_variant_from_json() {
        let config = VariantConfig::from_json(CUSTOM_VARIANT_JSON).expect("Config should load");
        assert_eq!(config.name, "partner");
        assert_eq!(config.triggers, Field::CODE_TRIGGERS.to_vec());
        assert_eq!(config.trigger_policy, TriggerPolicy::AnyPresent);

        let mut builder = LinkBuilder::with_rng(config, StdRng::seed_from_u64(22));
        builder.set_field(Field::User, "dana");
        builder.set_field(Field::LandingPageUrl, "https://partner.example/offer");
        builder.set_field(Field::UtmSource, "Partner Site");
        builder.set_field(Field::UtmMedium, "Referral");
        builder.set_field(Field::CampaignName, "Summer");

        assert!(builder.is_valid(), "{}", builder.validation_report());
        assert!(
            builder
                .generated_url()
                .starts_with("https://partner.example/offer?utm_source=partner_site&utm_medium=referral&")
        );

        builder.set_field(Field::LandingPageUrl, "http://partner.example/offer");
        assert_eq!(builder.compose(), Err(Diagnostic::MalformedDestination));
    }

    #[test]
    fn test_invalid_variant_json() {
        let no_schemes = CUSTOM_VARIANT_JSON.replace(r#"["https://"]"#, "[]");
        assert!(matches!(
            VariantConfig::from_json(&no_schemes),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            VariantConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_typed_destination_fields_cannot_be_required() {
        let mut config = VariantConfig::deeplink();
        assert!(config.validate().is_ok());

        config.required.push(Field::CustomUrl);
        match config.validate() {
            Err(ConfigError::Invalid(message)) => assert!(message.contains("customUrl")),
            other => panic!("Expected an invalid config error, got {:?}", other),
        }

        let mut config = VariantConfig::deeplink();
        config.required.insert(0, Field::UrlType);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_preset_config_round_trips_through_json() {
        for kind in [VariantKind::LandingPage, VariantKind::Deeplink] {
            let config = kind.config();
            let json = serde_json::to_string(&config).unwrap();
            let restored = VariantConfig::from_json(&json).unwrap();
            assert_eq!(restored, config);
            assert_eq!(kind.to_string().parse::<VariantKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_build_summary() {
        let builder = seeded_builder(VariantConfig::deeplink(), &deeplink_fields(), 23);
        let summary = BuildSummary::from_builder(&builder);
        assert!(summary.valid);
        assert_eq!(summary.variant, "deeplink");
        assert!(summary.diagnostic.is_none());
        assert!(summary.url.as_deref().unwrap().contains("utm_source=twitter_%2F_x"));

        let empty = LinkBuilder::new(VariantConfig::deeplink());
        let summary = BuildSummary::from_builder(&empty);
        assert!(!summary.valid);
        assert_eq!(summary.url, None);
        assert_eq!(summary.diagnostic.as_deref(), Some("Please fill all required fields"));
        assert!(summary.missing.contains(&Field::Ticket));

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["campaignCode"], serde_json::Value::Null);
        assert_eq!(json["missing"][0], "urlType");
    }
}
