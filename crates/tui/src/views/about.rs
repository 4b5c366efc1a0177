use crate::clipboard::Clipboard;
use crate::notify::Notifier;
use crate::theme::Theme;
use crate::views::copy_citation;
use crate::widgets::Figure;
use nadbench_core::AboutContent;
use ratatui::{
  buffer::Buffer,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Style, Stylize},
  text::Line,
  widgets::{Paragraph, Widget, Wrap},
};

/// About view state: the fixed page content, injected so tests can
/// substitute their own
#[derive(Debug, Default)]
pub struct AboutState {
  content: AboutContent,
}

impl AboutState {
  pub fn new(content: AboutContent) -> Self {
    Self { content }
  }

  pub fn content(&self) -> &AboutContent {
    &self.content
  }

  /// Copy the page reference and raise the confirmation toast. Always
  /// enabled; repeated activations each raise their own toast.
  pub fn copy_reference(&self, clipboard: Option<&mut dyn Clipboard>, notifier: &mut dyn Notifier) {
    copy_citation(&self.content.citation, clipboard, notifier);
  }
}

/// About view widget
pub struct AboutView<'a> {
  state: &'a AboutState,
}

impl<'a> AboutView<'a> {
  pub fn new(state: &'a AboutState) -> Self {
    Self { state }
  }
}

impl Widget for AboutView<'_> {
  fn render(self, area: Rect, buf: &mut Buffer) {
    if area.width < 40 || area.height < 12 {
      let msg = "Terminal too small";
      buf.set_string(area.x, area.y, msg, Style::default().fg(Theme::ERROR));
      return;
    }

    // Title + body
    let chunks = Layout::default()
      .direction(Direction::Vertical)
      .constraints([Constraint::Length(2), Constraint::Min(8)])
      .split(area);

    buf.set_string(
      chunks[0].x + 1,
      chunks[0].y,
      &self.state.content.title,
      Style::default().fg(Theme::ACCENT).bold(),
    );

    // Text column + figure
    let body = Layout::default()
      .direction(Direction::Horizontal)
      .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
      .split(chunks[1]);

    let text_chunks = Layout::default()
      .direction(Direction::Vertical)
      .constraints([Constraint::Min(6), Constraint::Length(3)])
      .split(body[0]);

    self.render_paragraphs(text_chunks[0], buf);
    self.render_copy_control(text_chunks[1], buf);

    Figure::new("DATA REPORT").render(body[1], buf);
  }
}

impl AboutView<'_> {
  fn render_paragraphs(&self, area: Rect, buf: &mut Buffer) {
    let inner = Rect::new(area.x + 1, area.y, area.width.saturating_sub(2), area.height);

    let mut lines: Vec<Line> = Vec::new();
    for (i, paragraph) in self.state.content.paragraphs.iter().enumerate() {
      if i > 0 {
        lines.push(Line::default());
      }
      lines.push(Line::from(paragraph.as_str()));
    }

    Paragraph::new(lines)
      .style(Style::default().fg(Theme::TEXT))
      .wrap(Wrap { trim: true })
      .render(inner, buf);
  }

  fn render_copy_control(&self, area: Rect, buf: &mut Buffer) {
    if area.height < 2 {
      return;
    }

    let label = " Copy Reference ";
    let y = area.y + 1;
    buf.set_string(area.x + 1, y, label, Style::default().fg(Theme::BG).bg(Theme::ACCENT).bold());

    let hint = "c / enter";
    let hint_x = area.x + 1 + label.len() as u16 + 2;
    if hint_x + hint.len() as u16 <= area.x + area.width {
      buf.set_string(hint_x, y, hint, Style::default().fg(Theme::MUTED));
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::clipboard::testing::{FailingClipboard, RecordingClipboard};
  use crate::notify::{ToastLevel, ToastStack};
  use crate::views::COPIED_TOAST_TITLE;
  use nadbench_core::Citation;
  use nadbench_core::about::REFERENCE;

  fn render_to_buffer(state: &AboutState) -> Buffer {
    let area = Rect::new(0, 0, 100, 30);
    let mut buf = Buffer::empty(area);
    AboutView::new(state).render(area, &mut buf);
    buf
  }

  fn buffer_text(buf: &Buffer) -> String {
    let mut text = String::new();
    for y in 0..buf.area.height {
      for x in 0..buf.area.width {
        text.push_str(buf[(x, y)].symbol());
      }
      text.push('\n');
    }
    text
  }

  #[test]
  fn test_rendering_is_idempotent() {
    let state = AboutState::default();
    assert_eq!(render_to_buffer(&state), render_to_buffer(&state));
  }

  #[test]
  fn test_render_shows_static_content() {
    let state = AboutState::default();
    let text = buffer_text(&render_to_buffer(&state));
    assert!(text.contains("A climate change benchmark database"));
    assert!(text.contains("Copy Reference"));
    assert!(text.contains("DATA REPORT"));
  }

  #[test]
  fn test_activation_raises_success_toast_with_citation() {
    let state = AboutState::default();
    let mut clipboard = RecordingClipboard::default();
    let mut toasts = ToastStack::new();

    state.copy_reference(Some(&mut clipboard), &mut toasts);

    assert_eq!(toasts.len(), 1);
    let toast = toasts.iter().next().unwrap();
    assert_eq!(toast.title, COPIED_TOAST_TITLE);
    assert_eq!(toast.body, REFERENCE);
    assert_eq!(toast.level, ToastLevel::Success);
  }

  #[test]
  fn test_clipboard_receives_citation_verbatim() {
    let state = AboutState::default();
    let mut clipboard = RecordingClipboard::default();
    let mut toasts = ToastStack::new();

    state.copy_reference(Some(&mut clipboard), &mut toasts);

    assert_eq!(
      clipboard.writes,
      vec![
        "Proma, A. M., Islam, M. S., Ciko, S., Baten, R. A., & Hoque, E. (2022). NADBenchmarks-a \
compilation of Benchmark Datasets for Machine Learning Tasks related to Natural Disasters."
      ]
    );
  }

  #[test]
  fn test_repeated_activations_are_independent() {
    let state = AboutState::default();
    let mut clipboard = RecordingClipboard::default();
    let mut toasts = ToastStack::new();

    for _ in 0..4 {
      state.copy_reference(Some(&mut clipboard), &mut toasts);
    }

    assert_eq!(clipboard.writes.len(), 4);
    assert_eq!(toasts.len(), 4);
    assert!(toasts.iter().all(|t| t.body == REFERENCE));
  }

  #[test]
  fn test_substituted_content_flows_through_render_and_copy() {
    let content = AboutContent {
      title: "A substituted title".to_string(),
      paragraphs: vec!["One paragraph.".to_string()],
      citation: Citation::new("Doe, J. (2020). A Different Reference.").unwrap(),
    };
    let state = AboutState::new(content);
    assert_eq!(state.content().title, "A substituted title");

    let text = buffer_text(&render_to_buffer(&state));
    assert!(text.contains("A substituted title"));
    assert!(!text.contains("A climate change benchmark database"));

    let mut clipboard = RecordingClipboard::default();
    let mut toasts = ToastStack::new();
    state.copy_reference(Some(&mut clipboard), &mut toasts);

    assert_eq!(clipboard.writes, vec!["Doe, J. (2020). A Different Reference."]);
    assert_eq!(toasts.iter().next().unwrap().body, "Doe, J. (2020). A Different Reference.");
  }

  #[test]
  fn test_clipboard_failure_is_contained() {
    let state = AboutState::default();
    let mut clipboard = FailingClipboard;
    let mut toasts = ToastStack::new();

    state.copy_reference(Some(&mut clipboard), &mut toasts);

    // Degraded mode: toast still raised, view still renders
    assert_eq!(toasts.len(), 1);
    let text = buffer_text(&render_to_buffer(&state));
    assert!(text.contains("Copy Reference"));
  }
}
