use crate::theme::Theme;
use ratatui::{
  buffer::Buffer,
  layout::Rect,
  style::{Style, Stylize},
  widgets::{Block, Borders, Widget},
};

/// The About page's bundled figure, shipped with the binary as text art
pub const DATA_REPORT: &str = include_str!("../../assets/data_report.txt");

/// A bordered panel rendering a static text-art figure verbatim
pub struct Figure<'a> {
  title: &'a str,
  art: &'a str,
}

impl<'a> Figure<'a> {
  pub fn new(title: &'a str) -> Self {
    Self {
      title,
      art: DATA_REPORT,
    }
  }

  pub fn art(mut self, art: &'a str) -> Self {
    self.art = art;
    self
  }
}

impl Widget for Figure<'_> {
  fn render(self, area: Rect, buf: &mut Buffer) {
    if area.width < 5 || area.height < 3 {
      return;
    }

    let block = Block::default()
      .title(self.title)
      .title_style(Style::default().fg(Theme::ACCENT).bold())
      .borders(Borders::ALL)
      .border_style(Style::default().fg(Theme::OVERLAY));

    let inner = block.inner(area);
    block.render(area, buf);

    for (i, line) in self.art.lines().enumerate() {
      let y = inner.y + i as u16;
      if y >= inner.y + inner.height {
        break;
      }

      let style = if line.contains('█') || line.contains('░') {
        Style::default().fg(Theme::ACCENT)
      } else {
        Style::default().fg(Theme::SUBTEXT)
      };

      let max = inner.width as usize;
      let clipped: String = line.chars().take(max).collect();
      buf.set_string(inner.x, y, &clipped, style);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_bundled_figure_is_nonempty() {
    assert!(!DATA_REPORT.trim().is_empty());
    assert!(DATA_REPORT.contains("disaster phase"));
  }

  #[test]
  fn test_substituted_art_renders_verbatim() {
    let area = Rect::new(0, 0, 30, 5);
    let mut buf = Buffer::empty(area);
    Figure::new("FIG").art("custom art line").render(area, &mut buf);

    let mut text = String::new();
    for y in 0..area.height {
      for x in 0..area.width {
        text.push_str(buf[(x, y)].symbol());
      }
    }
    assert!(text.contains("custom art line"));
    assert!(!text.contains("disaster phase"));
  }

  #[test]
  fn test_render_clips_to_area() {
    let area = Rect::new(0, 0, 20, 6);
    let mut buf = Buffer::empty(area);
    Figure::new("FIG").render(area, &mut buf);
    // Bordered panel fits exactly; no panic on narrow areas
    let tiny = Rect::new(0, 0, 4, 2);
    let mut tiny_buf = Buffer::empty(tiny);
    Figure::new("FIG").render(tiny, &mut tiny_buf);
  }
}
