use crate::notify::{Toast, ToastLevel};
use crate::theme::Theme;
use ratatui::{
  buffer::Buffer,
  layout::Rect,
  style::{Color, Style, Stylize},
  widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

/// A single transient notification card
/// Example:
/// ┌──────────────────────────────┐
/// │ ✓ Following reference has... │
/// │ Proma, A. M., Islam, M. S.,  │
/// │ ...                          │
/// └───────────────── x:dismiss ──┘
pub struct ToastCard<'a> {
  toast: &'a Toast,
}

impl<'a> ToastCard<'a> {
  pub fn new(toast: &'a Toast) -> Self {
    Self { toast }
  }

  /// Total card height (borders included) when rendered at `width`
  pub fn height(&self, width: u16) -> u16 {
    let inner = width.saturating_sub(4) as usize;
    let body_lines = wrap_text(&self.toast.body, inner).len() as u16;
    body_lines + 3
  }

  fn level_color(&self) -> Color {
    match self.toast.level {
      ToastLevel::Success => Theme::SUCCESS,
      ToastLevel::Info => Theme::INFO,
      ToastLevel::Error => Theme::ERROR,
    }
  }

  fn level_symbol(&self) -> &'static str {
    match self.toast.level {
      ToastLevel::Success => "✓",
      ToastLevel::Info => "•",
      ToastLevel::Error => "✗",
    }
  }
}

impl Widget for ToastCard<'_> {
  fn render(self, area: Rect, buf: &mut Buffer) {
    if area.width < 8 || area.height < 3 {
      return;
    }

    for y in area.y..area.y + area.height {
      for x in area.x..area.x + area.width {
        buf[(x, y)].set_bg(Theme::SURFACE).set_char(' ');
      }
    }

    let color = self.level_color();
    let mut block = Block::default()
      .borders(Borders::ALL)
      .border_style(Style::default().fg(color));
    if self.toast.dismissible {
      block = block.title_bottom(" x:dismiss ").title_style(Style::default().fg(Theme::MUTED));
    }

    let inner = block.inner(area);
    block.render(area, buf);

    let pad = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height);

    let title = format!("{} {}", self.level_symbol(), self.toast.title);
    let clipped = clip_to_width(&title, pad.width as usize);
    buf.set_string(pad.x, pad.y, &clipped, Style::default().fg(color).bold());

    for (i, line) in wrap_text(&self.toast.body, pad.width as usize).iter().enumerate() {
      let y = pad.y + 1 + i as u16;
      if y >= pad.y + pad.height {
        break;
      }
      buf.set_string(pad.x, y, line, Style::default().fg(Theme::TEXT));
    }
  }
}

/// Greedy word wrap by display width
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
  if width == 0 {
    return vec![String::new()];
  }

  let mut lines = Vec::new();
  let mut current = String::new();

  for word in text.split_whitespace() {
    let word = if word.width() > width {
      // Hard-split words wider than the card
      let mut rest = word;
      while rest.width() > width {
        let split: String = rest.chars().take(width).collect();
        let taken = split.chars().count();
        if !current.is_empty() {
          lines.push(std::mem::take(&mut current));
        }
        lines.push(split);
        rest = &rest[rest.char_indices().nth(taken).map(|(i, _)| i).unwrap_or(rest.len())..];
      }
      rest
    } else {
      word
    };

    if word.is_empty() {
      continue;
    }

    if current.is_empty() {
      current.push_str(word);
    } else if current.width() + 1 + word.width() <= width {
      current.push(' ');
      current.push_str(word);
    } else {
      lines.push(std::mem::take(&mut current));
      current.push_str(word);
    }
  }

  if !current.is_empty() || lines.is_empty() {
    lines.push(current);
  }

  lines
}

fn clip_to_width(text: &str, width: usize) -> String {
  if text.width() <= width {
    return text.to_string();
  }
  let mut out = String::new();
  for c in text.chars() {
    if out.width() + 4 > width {
      break;
    }
    out.push(c);
  }
  out.push_str("...");
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_wrap_respects_width() {
    let lines = wrap_text("Proma, A. M., Islam, M. S., Ciko, S., Baten, R. A.", 20);
    assert!(lines.len() > 1);
    assert!(lines.iter().all(|l| l.width() <= 20));
  }

  #[test]
  fn test_wrap_empty_text() {
    assert_eq!(wrap_text("", 10), vec![String::new()]);
  }

  #[test]
  fn test_wrap_hard_splits_long_words() {
    let lines = wrap_text("abcdefghijklmnop", 5);
    assert!(lines.iter().all(|l| l.width() <= 5));
    assert_eq!(lines.join(""), "abcdefghijklmnop");
  }

  #[test]
  fn test_card_height_grows_with_body() {
    let short = Toast::success("t", "short");
    let long = Toast::success("t", "a much longer body that will certainly wrap across several lines at this width");
    let card_short = ToastCard::new(&short);
    let card_long = ToastCard::new(&long);
    assert!(card_long.height(30) > card_short.height(30));
  }
}
