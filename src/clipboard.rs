use crate::error::ClipboardError;

/// A destination for copied links.
///
/// Writes may be rejected by the host (no display server, missing
/// permissions); the engine treats that as "not copied" and carries on.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// In-process clipboard that keeps the last written text.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// The operating system clipboard.
///
/// On Linux the written text is only served while its owner is alive. A
/// short-lived process should use [`SystemClipboard::holding`], which blocks
/// in `write_text` until another application takes the clipboard over.
#[cfg(feature = "clipboard")]
pub struct SystemClipboard {
    inner: arboard::Clipboard,
    hold: bool,
}

#[cfg(feature = "clipboard")]
impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        arboard::Clipboard::new()
            .map(|inner| Self { inner, hold: false })
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }

    /// Keeps serving written text until the clipboard is replaced.
    pub fn holding(mut self) -> Self {
        self.hold = true;
        self
    }

    pub fn is_holding(&self) -> bool {
        self.hold
    }
}

#[cfg(feature = "clipboard")]
impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        #[cfg(target_os = "linux")]
        {
            use arboard::SetExtLinux;
            if self.hold {
                return self
                    .inner
                    .set()
                    .wait()
                    .text(text)
                    .map_err(|e| ClipboardError::Unavailable(e.to_string()));
            }
        }
        self.inner
            .set_text(text)
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}
