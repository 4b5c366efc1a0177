use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions that can be performed in the TUI
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
  /// Quit the application
  Quit,
  /// Switch to a specific view
  SwitchView(usize),
  /// Navigate up in a list
  NavigateUp,
  /// Navigate down in a list
  NavigateDown,
  /// Go to top of list
  GoToTop,
  /// Go to bottom of list
  GoToBottom,
  /// Tab to next view
  NextView,
  /// Copy the current view's reference to the clipboard
  CopyReference,
  /// Dismiss the newest toast
  DismissToast,
  /// Toggle help overlay
  ToggleHelp,
  /// Go back (Escape)
  Back,
  /// No action
  None,
}

/// Convert a key event to an action
pub fn key_to_action(key: KeyEvent) -> Action {
  match key.code {
    // Quit
    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
    KeyCode::Char('q') => Action::Quit,

    // View switching
    KeyCode::Char('1') => Action::SwitchView(0),
    KeyCode::Char('2') => Action::SwitchView(1),
    KeyCode::Tab => Action::NextView,

    // Navigation
    KeyCode::Char('j') | KeyCode::Down => Action::NavigateDown,
    KeyCode::Char('k') | KeyCode::Up => Action::NavigateUp,
    KeyCode::Char('g') => Action::GoToTop,
    KeyCode::Char('G') => Action::GoToBottom,

    // Actions
    KeyCode::Char('c') | KeyCode::Enter => Action::CopyReference,
    KeyCode::Char('x') => Action::DismissToast,
    KeyCode::Char('?') => Action::ToggleHelp,
    KeyCode::Esc => Action::Back,

    _ => Action::None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crossterm::event::KeyEvent;

  fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
  }

  #[test]
  fn test_copy_bindings() {
    assert_eq!(key_to_action(key(KeyCode::Char('c'))), Action::CopyReference);
    assert_eq!(key_to_action(key(KeyCode::Enter)), Action::CopyReference);
  }

  #[test]
  fn test_ctrl_c_quits() {
    let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(key_to_action(event), Action::Quit);
  }

  #[test]
  fn test_navigation_bindings() {
    assert_eq!(key_to_action(key(KeyCode::Char('j'))), Action::NavigateDown);
    assert_eq!(key_to_action(key(KeyCode::Up)), Action::NavigateUp);
    assert_eq!(key_to_action(key(KeyCode::Char('1'))), Action::SwitchView(0));
    assert_eq!(key_to_action(key(KeyCode::F(5))), Action::None);
  }
}
