use thiserror::Error;

/// The host environment denies or lacks clipboard access
#[derive(Debug, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardUnavailable(pub String);

/// Write-side clipboard capability. The app injects an implementation into
/// views; tests substitute recording or failing fakes.
pub trait Clipboard {
  fn set_text(&mut self, text: &str) -> Result<(), ClipboardUnavailable>;
}

/// System clipboard backed by arboard
pub struct SystemClipboard {
  inner: arboard::Clipboard,
}

impl SystemClipboard {
  /// Fails on headless hosts (no display server). The app keeps running
  /// without a clipboard in that case.
  pub fn new() -> Result<Self, ClipboardUnavailable> {
    let inner = arboard::Clipboard::new().map_err(|e| ClipboardUnavailable(e.to_string()))?;
    Ok(Self { inner })
  }
}

impl Clipboard for SystemClipboard {
  fn set_text(&mut self, text: &str) -> Result<(), ClipboardUnavailable> {
    self.inner.set_text(text).map_err(|e| ClipboardUnavailable(e.to_string()))
  }
}
