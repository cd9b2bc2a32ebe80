//! # utmkit - Campaign Link Builder Engine
//!
//! **utmkit** turns the fields of a campaign form into a canonical tracking URL.
//! It validates required inputs, generates a campaign code, normalizes UTM values
//! and appends them to the destination as `utm_source`, `utm_medium`,
//! `utm_campaign` and (optionally) `utm_content`.
//!
//! ## Core Workflow
//!
//! The engine knows nothing about widgets or layout. A presentation layer feeds
//! it raw field values and reads back the derived state:
//!
//! 1.  **Pick a Variant**: Use a built-in [`VariantConfig`](variant::VariantConfig)
//!     (`landing_page()` or `deeplink()`) or load one from JSON.
//! 2.  **Start a Session**: Create a [`LinkBuilder`](engine::LinkBuilder) for that variant.
//! 3.  **Feed Edits**: Call `set_field` for every change. Edits to the campaign name,
//!     business line or UTM source regenerate the campaign code.
//! 4.  **Read Results**: `is_valid()`, `campaign_code()` and `generated_url()` are
//!     recomputed on every call. `copy()` writes the link through a
//!     [`Clipboard`](clipboard::Clipboard) and `clear()` resets the session.
//!
//! ## Quick Start
//!
//! ```rust
//! use utmkit::prelude::*;
//!
//! let mut builder = LinkBuilder::new(VariantConfig::landing_page());
//! builder.set_field(Field::User, "alice");
//! builder.set_field(Field::LandingPageUrl, "https://metamask.io/page");
//! builder.set_field(Field::UtmSource, "twitter");
//! builder.set_field(Field::UtmMedium, "paid_social");
//! builder.set_field(Field::CampaignName, "q1");
//! builder.set_field(Field::BusinessLine, "Infura");
//! builder.set_field(Field::StartDate, "2024-01-01");
//! builder.set_field(Field::EndDate, "2024-02-01");
//! builder.set_field(Field::Objective, "awareness");
//! builder.set_field(Field::Tactic, "branding");
//!
//! assert!(builder.is_valid());
//! let url = builder.generated_url();
//! assert!(url.starts_with("https://metamask.io/page?utm_source=twitter&utm_medium=paid_social"));
//!
//! let mut clipboard = MemoryClipboard::new();
//! let now = std::time::Instant::now();
//! assert!(builder.copy(&mut clipboard, now).is_copied());
//! assert_eq!(clipboard.contents(), Some(url.as_str()));
//! assert!(builder.is_copied(now));
//! ```

pub mod clipboard;
pub mod code;
pub mod composer;
pub mod data;
pub mod engine;
pub mod error;
pub mod form;
pub mod prelude;
pub mod validator;
pub mod variant;
