//! The per-session link builder: field store, derived campaign code, and the
//! copy/clear actions a presentation layer drives.

pub mod feedback;

pub use feedback::{COPIED_DISPLAY, Clock, CopiedFlag, ManualClock, SystemClock};

use crate::clipboard::Clipboard;
use crate::code::CampaignCode;
use crate::composer::UrlComposer;
use crate::error::{ClipboardError, Diagnostic};
use crate::form::{Field, FieldChange, FieldStore};
use crate::validator::{ValidationReport, Validator};
use crate::variant::VariantConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;

/// What happened when the user asked to copy the link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The link was written and the acknowledgment armed.
    Copied(String),
    /// The form cannot produce a link yet; nothing was written.
    NotReady(Diagnostic),
    /// The clipboard rejected the write; the acknowledgment stays off.
    ClipboardUnavailable(ClipboardError),
}

impl CopyOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, CopyOutcome::Copied(_))
    }
}

/// One form session.
///
/// All derivation is explicit: [`set_field`](Self::set_field) stores the value
/// and re-derives the campaign code on the spot, while the URL and validity
/// are recomputed from scratch on every read.
pub struct LinkBuilder {
    config: VariantConfig,
    store: FieldStore,
    code: Option<CampaignCode>,
    copied: CopiedFlag,
    rng: StdRng,
}

impl LinkBuilder {
    pub fn new(config: VariantConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Creates a session whose campaign codes come from `rng`.
    pub fn with_rng(config: VariantConfig, rng: StdRng) -> Self {
        Self {
            config,
            store: FieldStore::new(),
            code: None,
            copied: CopiedFlag::default(),
            rng,
        }
    }

    pub fn config(&self) -> &VariantConfig {
        &self.config
    }

    pub fn fields(&self) -> &FieldStore {
        &self.store
    }

    pub fn get(&self, field: Field) -> &str {
        self.store.get(field)
    }

    pub fn campaign_code(&self) -> Option<&CampaignCode> {
        self.code.as_ref()
    }

    /// Stores a user edit and returns whether the value actually changed.
    ///
    /// A change to a trigger field regenerates the campaign code when the
    /// variant's trigger policy is satisfied. The previous code is kept
    /// otherwise, even if the trigger fields were emptied.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.store.get(field) == value {
            return false;
        }
        log::debug!("Field '{}' changed", field);
        self.store.set(field, value);
        self.on_field_changed(field);
        true
    }

    pub fn apply(&mut self, change: FieldChange) -> bool {
        self.set_field(change.field, change.value)
    }

    fn on_field_changed(&mut self, field: Field) {
        if !self.config.triggers.contains(&field) {
            return;
        }
        if self
            .config
            .trigger_policy
            .is_satisfied(&self.store, &self.config.triggers)
        {
            self.regenerate_code();
        }
    }

    /// Draws a fresh campaign code unconditionally.
    pub fn regenerate_code(&mut self) -> &CampaignCode {
        let code = CampaignCode::generate_with(&mut self.rng);
        log::debug!("Generated campaign code {}", code);
        self.code.insert(code)
    }

    pub fn validation_report(&self) -> ValidationReport {
        Validator::new(&self.config).check(&self.store, self.code.as_ref())
    }

    pub fn is_valid(&self) -> bool {
        Validator::new(&self.config).is_valid(&self.store, self.code.as_ref())
    }

    pub fn compose(&self) -> Result<String, Diagnostic> {
        UrlComposer::new(&self.config).compose(&self.store, self.code.as_ref())
    }

    /// The link, or the diagnostic text to show in its place.
    pub fn generated_url(&self) -> String {
        UrlComposer::new(&self.config).render(&self.store, self.code.as_ref())
    }

    /// Copies the link if the form is valid and composes cleanly.
    ///
    /// A composed link implies a valid form, so the composer alone gates the write.
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard, now: Instant) -> CopyOutcome {
        let url = match self.compose() {
            Ok(url) => url,
            Err(diagnostic) => return CopyOutcome::NotReady(diagnostic),
        };
        match clipboard.write_text(&url) {
            Ok(()) => {
                self.copied.arm(now);
                log::info!("Copied tracking link to clipboard");
                CopyOutcome::Copied(url)
            }
            Err(e) => {
                log::warn!("Could not copy tracking link: {}", e);
                CopyOutcome::ClipboardUnavailable(e)
            }
        }
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied.is_set(now)
    }

    /// Resets every field, the campaign code and the copied acknowledgment.
    pub fn clear(&mut self) {
        self.store.clear();
        self.code = None;
        self.copied.reset();
        log::info!("Cleared form '{}'", self.config.name);
    }
}
