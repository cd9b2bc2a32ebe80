//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the utmkit crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use utmkit::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let config = VariantConfig::from_file("path/to/variant.json")?;
//! let form = FormData::from_file("path/to/form.json")?;
//!
//! let mut builder = LinkBuilder::new(config);
//! for change in form.changes()? {
//!     builder.apply(change);
//! }
//! println!("{}", builder.generated_url());
//! # Ok(())
//! # }
//! ```

// Session engine
pub use crate::engine::{Clock, CopyOutcome, LinkBuilder, ManualClock, SystemClock};

// Building blocks
pub use crate::code::CampaignCode;
pub use crate::composer::{UrlComposer, normalize};
pub use crate::validator::{ValidationReport, Validator};

// Form model and configuration
pub use crate::data::{BuildSummary, FormData};
pub use crate::form::{Field, FieldChange, FieldStore, Selection};
pub use crate::variant::{DestinationStrategy, TriggerPolicy, VariantConfig, VariantKind};

// Clipboard backends
pub use crate::clipboard::{Clipboard, MemoryClipboard};
#[cfg(feature = "clipboard")]
pub use crate::clipboard::SystemClipboard;

// Error types
pub use crate::error::{
    ClipboardError, CodeError, ConfigError, Diagnostic, FieldError, FormDataError,
};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
