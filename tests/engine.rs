//! Tests for the link builder session: code regeneration, copy and clear.
mod common;
use common::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use utmkit::prelude::*;

fn landing_builder(seed: u64) -> LinkBuilder {
    LinkBuilder::with_rng(VariantConfig::landing_page(), StdRng::seed_from_u64(seed))
}

#[test]
fn test_code_waits_for_all_triggers_on_landing_page() {
    let mut builder = landing_builder(1);
    builder.set_field(Field::CampaignName, "q1");
    assert!(builder.campaign_code().is_none());
    builder.set_field(Field::BusinessLine, "Infura");
    assert!(builder.campaign_code().is_none());
    builder.set_field(Field::UtmSource, "twitter");
    assert!(builder.campaign_code().is_some());
}

#[test]
fn test_code_regenerates_on_trigger_change() {
    let mut builder = seeded_builder(VariantConfig::landing_page(), &landing_page_fields(), 3);
    let first = builder.campaign_code().cloned().unwrap();

    builder.set_field(Field::CampaignName, "q2");
    let second = builder.campaign_code().cloned().unwrap();
    assert_ne!(first, second);

    builder.set_field(Field::UtmMedium, "email");
    assert_eq!(builder.campaign_code(), Some(&second));
}

#[test]
fn test_unchanged_value_does_not_regenerate() {
    let mut builder = seeded_builder(VariantConfig::landing_page(), &landing_page_fields(), 4);
    let before = builder.campaign_code().cloned();
    assert!(!builder.set_field(Field::CampaignName, "q1"));
    assert_eq!(builder.campaign_code().cloned(), before);
}

#[test]
fn test_code_survives_emptied_trigger() {
    let mut builder = seeded_builder(VariantConfig::landing_page(), &landing_page_fields(), 5);
    let before = builder.campaign_code().cloned();
    builder.set_field(Field::UtmSource, "");
    assert_eq!(builder.campaign_code().cloned(), before);
    assert!(!builder.is_valid());
}

#[test]
fn test_deeplink_code_needs_any_trigger() {
    let mut builder =
        LinkBuilder::with_rng(VariantConfig::deeplink(), StdRng::seed_from_u64(6));
    builder.set_field(Field::User, "bob");
    assert!(builder.campaign_code().is_none());
    builder.set_field(Field::UtmSource, "newsletter");
    assert!(builder.campaign_code().is_some());
}

#[test]
fn test_seeded_sessions_are_reproducible() {
    let a = seeded_builder(VariantConfig::landing_page(), &landing_page_fields(), 99);
    let b = seeded_builder(VariantConfig::landing_page(), &landing_page_fields(), 99);
    assert_eq!(a.campaign_code(), b.campaign_code());
    assert_eq!(a.generated_url(), b.generated_url());
}

#[test]
fn test_generated_url_embeds_current_code() {
    let builder = seeded_builder(VariantConfig::landing_page(), &landing_page_fields(), 7);
    let code = builder.campaign_code().unwrap();
    assert!(builder.is_valid());
    assert_eq!(
        builder.generated_url(),
        format!(
            "https://metamask.io/page?utm_source=twitter&utm_medium=paid_social&utm_campaign={}",
            code
        )
    );
}

#[test]
fn test_apply_field_change() {
    let mut builder = landing_builder(8);
    assert!(builder.apply(FieldChange::new(Field::User, "carol")));
    assert_eq!(builder.get(Field::User), "carol");
}

#[test]
fn test_clear_resets_session() {
    let clock = ManualClock::new();
    let mut builder = seeded_builder(VariantConfig::landing_page(), &landing_page_fields(), 9);
    let mut clipboard = MemoryClipboard::new();
    assert!(builder.copy(&mut clipboard, clock.now()).is_copied());

    builder.clear();
    assert!(builder.fields().is_empty());
    assert!(builder.campaign_code().is_none());
    assert!(!builder.is_copied(clock.now()));
    assert_eq!(builder.generated_url(), "Please fill all required fields");
}

#[test]
fn test_copy_writes_url_and_expires() {
    let clock = ManualClock::new();
    let mut builder = seeded_builder(VariantConfig::landing_page(), &landing_page_fields(), 10);
    let mut clipboard = MemoryClipboard::new();

    let outcome = builder.copy(&mut clipboard, clock.now());
    assert_eq!(outcome, CopyOutcome::Copied(builder.generated_url()));
    assert_eq!(clipboard.contents(), Some(builder.generated_url().as_str()));
    assert!(builder.is_copied(clock.now()));

    clock.advance(Duration::from_millis(2000));
    assert!(!builder.is_copied(clock.now()));
}

#[test]
fn test_repeated_copy_restarts_timer() {
    let clock = ManualClock::new();
    let mut builder = seeded_builder(VariantConfig::landing_page(), &landing_page_fields(), 11);
    let mut clipboard = MemoryClipboard::new();

    builder.copy(&mut clipboard, clock.now());
    clock.advance(Duration::from_millis(1500));
    builder.copy(&mut clipboard, clock.now());
    clock.advance(Duration::from_millis(1000));
    assert!(builder.is_copied(clock.now()));
    clock.advance(Duration::from_millis(1000));
    assert!(!builder.is_copied(clock.now()));
}

#[test]
fn test_copy_refused_when_invalid() {
    let clock = ManualClock::new();
    let mut builder = landing_builder(12);
    builder.set_field(Field::User, "alice");
    let mut clipboard = MemoryClipboard::new();

    let outcome = builder.copy(&mut clipboard, clock.now());
    assert_eq!(outcome, CopyOutcome::NotReady(Diagnostic::IncompleteFields));
    assert!(clipboard.contents().is_none());
    assert!(!builder.is_copied(clock.now()));
}

#[test]
fn test_copy_refused_for_malformed_destination() {
    let clock = ManualClock::new();
    let mut fields = landing_page_fields();
    fields.set(Field::LandingPageUrl, "ftp://bad");
    let mut builder = seeded_builder(VariantConfig::landing_page(), &fields, 13);
    let mut clipboard = MemoryClipboard::new();

    let outcome = builder.copy(&mut clipboard, clock.now());
    assert_eq!(outcome, CopyOutcome::NotReady(Diagnostic::MalformedDestination));
    assert!(clipboard.contents().is_none());
}

#[test]
fn test_clipboard_failure_is_not_fatal() {
    let clock = ManualClock::new();
    let mut builder = seeded_builder(VariantConfig::landing_page(), &landing_page_fields(), 14);
    let mut clipboard = DeniedClipboard::default();

    let outcome = builder.copy(&mut clipboard, clock.now());
    assert!(matches!(outcome, CopyOutcome::ClipboardUnavailable(_)));
    assert_eq!(clipboard.attempts, 1);
    assert!(!builder.is_copied(clock.now()));
    assert!(builder.is_valid());
}

#[test]
fn test_validation_report_tracks_session() {
    let mut builder = landing_builder(15);
    let report = builder.validation_report();
    assert!(report.missing_code);
    assert!(report.missing.contains(&Field::User));

    for (field, value) in landing_page_fields().iter() {
        builder.set_field(field, value);
    }
    assert!(builder.validation_report().is_complete());
}
