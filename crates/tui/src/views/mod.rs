pub mod about;
pub mod datasets;

pub use about::AboutView;
pub use datasets::DatasetsView;

use crate::clipboard::Clipboard;
use crate::notify::{Notifier, Toast};
use nadbench_core::Citation;
use tracing::warn;

/// Title of the toast raised by every copy-reference activation
pub const COPIED_TOAST_TITLE: &str = "Following reference has been copied.";

/// Copy a citation to the clipboard and confirm with a success toast.
///
/// The clipboard write happens first so the toast reports an attempted or
/// completed copy. A missing or failing clipboard is degraded mode, not an
/// error: it is logged and the toast is still raised. Exactly one write and
/// one toast per call.
pub(crate) fn copy_citation(citation: &Citation, clipboard: Option<&mut dyn Clipboard>, notifier: &mut dyn Notifier) {
  match clipboard {
    Some(clipboard) => {
      if let Err(e) = clipboard.set_text(citation.as_str()) {
        warn!("clipboard write failed: {}", e);
      }
    }
    None => warn!("no system clipboard, reference not copied"),
  }

  notifier.notify(Toast::success(COPIED_TOAST_TITLE, citation.as_str()));
}
