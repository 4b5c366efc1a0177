pub mod app;
pub mod clipboard;
pub mod event;
pub mod notify;
pub mod theme;
pub mod views;
pub mod widgets;

use anyhow::Result;
use nadbench_core::Config;

pub use app::{App, View};
pub use clipboard::{Clipboard, ClipboardUnavailable, SystemClipboard};
pub use notify::{Notifier, Toast, ToastLevel, ToastStack};

/// Run the TUI application
pub async fn run(config: Config) -> Result<()> {
  app::run(config).await
}
