use std::time::{Duration, Instant};

/// Auto-dismiss interval for toasts
pub const TOAST_DURATION: Duration = Duration::from_millis(5000);

/// Classification of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
  Success,
  Info,
  Error,
}

/// A transient notification
#[derive(Debug, Clone)]
pub struct Toast {
  pub title: String,
  pub body: String,
  pub level: ToastLevel,
  pub duration: Duration,
  pub dismissible: bool,
  created: Instant,
}

impl Toast {
  pub fn new(level: ToastLevel, title: impl Into<String>, body: impl Into<String>) -> Self {
    Self {
      title: title.into(),
      body: body.into(),
      level,
      duration: TOAST_DURATION,
      dismissible: true,
      created: Instant::now(),
    }
  }

  pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
    Self::new(ToastLevel::Success, title, body)
  }

  pub fn created(&self) -> Instant {
    self.created
  }

  pub fn is_expired(&self, now: Instant) -> bool {
    now.saturating_duration_since(self.created) >= self.duration
  }
}

/// Capability to raise a transient notification. Views depend on this seam;
/// the production implementation is [`ToastStack`].
pub trait Notifier {
  fn notify(&mut self, toast: Toast);
}

/// Transient notification stack. Owns auto-dismiss timing: the app tick
/// calls [`ToastStack::prune`], views never manage timers. Each pushed
/// toast is independent; there is no deduplication or merging.
#[derive(Debug, Default)]
pub struct ToastStack {
  toasts: Vec<Toast>,
}

impl ToastStack {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, toast: Toast) {
    self.toasts.push(toast);
  }

  /// Drop toasts older than their duration
  pub fn prune(&mut self, now: Instant) {
    self.toasts.retain(|t| !t.is_expired(now));
  }

  /// Manually dismiss the newest dismissible toast
  pub fn dismiss_newest(&mut self) -> Option<Toast> {
    let idx = self.toasts.iter().rposition(|t| t.dismissible)?;
    Some(self.toasts.remove(idx))
  }

  /// Oldest first
  pub fn iter(&self) -> std::slice::Iter<'_, Toast> {
    self.toasts.iter()
  }

  pub fn len(&self) -> usize {
    self.toasts.len()
  }

  pub fn is_empty(&self) -> bool {
    self.toasts.is_empty()
  }
}

impl Notifier for ToastStack {
  fn notify(&mut self, toast: Toast) {
    self.push(toast);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_expiry_boundary() {
    let toast = Toast::success("title", "body");
    let created = toast.created();
    assert!(!toast.is_expired(created));
    assert!(!toast.is_expired(created + Duration::from_millis(4999)));
    assert!(toast.is_expired(created + Duration::from_millis(5000)));
  }

  #[test]
  fn test_prune_drops_only_expired() {
    let mut stack = ToastStack::new();
    stack.push(Toast::success("a", "first"));
    stack.push(Toast::success("b", "second"));
    let now = stack.iter().next().unwrap().created();

    stack.prune(now + Duration::from_millis(100));
    assert_eq!(stack.len(), 2);

    // Well past both durations, regardless of the instants the two pushes ran at
    stack.prune(now + Duration::from_millis(60_000));
    assert!(stack.is_empty());
  }

  #[test]
  fn test_push_never_merges() {
    let mut stack = ToastStack::new();
    for _ in 0..3 {
      stack.push(Toast::success("same title", "same body"));
    }
    assert_eq!(stack.len(), 3);
  }

  #[test]
  fn test_dismiss_newest_first() {
    let mut stack = ToastStack::new();
    stack.push(Toast::success("old", "old"));
    stack.push(Toast::success("new", "new"));

    let dismissed = stack.dismiss_newest().unwrap();
    assert_eq!(dismissed.title, "new");
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.iter().next().unwrap().title, "old");
  }

  #[test]
  fn test_dismiss_skips_pinned_toasts() {
    let mut stack = ToastStack::new();
    let mut pinned = Toast::new(ToastLevel::Info, "pinned", "stays");
    pinned.dismissible = false;
    stack.push(pinned);

    assert!(stack.dismiss_newest().is_none());
    assert_eq!(stack.len(), 1);
  }
}
