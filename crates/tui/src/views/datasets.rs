use crate::clipboard::Clipboard;
use crate::notify::Notifier;
use crate::theme::Theme;
use crate::views::copy_citation;
use nadbench_core::{Dataset, builtin_catalog};
use ratatui::{
  buffer::Buffer,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Style, Stylize},
  text::Line,
  widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Datasets view state: the built-in catalog and the current selection
#[derive(Debug)]
pub struct DatasetsState {
  pub datasets: Vec<Dataset>,
  pub selected: usize,
}

impl DatasetsState {
  pub fn new() -> Self {
    Self::with_datasets(builtin_catalog())
  }

  pub fn with_datasets(datasets: Vec<Dataset>) -> Self {
    Self { datasets, selected: 0 }
  }

  pub fn select_prev(&mut self) {
    self.selected = self.selected.saturating_sub(1);
  }

  pub fn select_next(&mut self) {
    if self.selected + 1 < self.datasets.len() {
      self.selected += 1;
    }
  }

  pub fn select_first(&mut self) {
    self.selected = 0;
  }

  pub fn select_last(&mut self) {
    self.selected = self.datasets.len().saturating_sub(1);
  }

  pub fn selected_dataset(&self) -> Option<&Dataset> {
    self.datasets.get(self.selected)
  }

  /// Copy the selected dataset's reference through the same
  /// clipboard-and-toast path as the About view
  pub fn copy_reference(&self, clipboard: Option<&mut dyn Clipboard>, notifier: &mut dyn Notifier) {
    if let Some(dataset) = self.selected_dataset() {
      copy_citation(&dataset.reference, clipboard, notifier);
    }
  }
}

impl Default for DatasetsState {
  fn default() -> Self {
    Self::new()
  }
}

/// Datasets view widget: selectable list plus detail panel
pub struct DatasetsView<'a> {
  state: &'a DatasetsState,
}

impl<'a> DatasetsView<'a> {
  pub fn new(state: &'a DatasetsState) -> Self {
    Self { state }
  }
}

impl Widget for DatasetsView<'_> {
  fn render(self, area: Rect, buf: &mut Buffer) {
    if area.width < 40 || area.height < 10 {
      let msg = "Terminal too small";
      buf.set_string(area.x, area.y, msg, Style::default().fg(Theme::ERROR));
      return;
    }

    let chunks = Layout::default()
      .direction(Direction::Horizontal)
      .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
      .split(area);

    self.render_list(chunks[0], buf);
    self.render_detail(chunks[1], buf);
  }
}

impl DatasetsView<'_> {
  fn render_list(&self, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
      .title("DATASETS")
      .title_style(Style::default().fg(Theme::ACCENT).bold())
      .borders(Borders::ALL)
      .border_style(Style::default().fg(Theme::OVERLAY));

    let inner = block.inner(area);
    block.render(area, buf);

    if self.state.datasets.is_empty() {
      buf.set_string(inner.x, inner.y, "Catalog is empty", Style::default().fg(Theme::MUTED));
      return;
    }

    for (i, dataset) in self.state.datasets.iter().enumerate() {
      let y = inner.y + i as u16;
      if y >= inner.y + inner.height {
        break;
      }

      let is_selected = i == self.state.selected;
      let marker = if is_selected { "▸ " } else { "  " };
      let name_style = if is_selected {
        Style::default().fg(Theme::ACCENT).bold()
      } else {
        Style::default().fg(Theme::TEXT)
      };

      buf.set_string(inner.x, y, marker, name_style);
      buf.set_string(inner.x + 2, y, &dataset.name, name_style);

      let phase = dataset.phase.as_str();
      let phase_x = inner.x + inner.width.saturating_sub(phase.len() as u16 + 1);
      if phase_x > inner.x + 2 + dataset.name.len() as u16 {
        buf.set_string(phase_x, y, phase, Style::default().fg(Theme::phase_color(dataset.phase)));
      }
    }
  }

  fn render_detail(&self, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
      .title("DETAIL")
      .title_style(Style::default().fg(Theme::ACCENT).bold())
      .borders(Borders::ALL)
      .border_style(Style::default().fg(Theme::OVERLAY));

    let inner = block.inner(area);
    block.render(area, buf);

    let Some(dataset) = self.state.selected_dataset() else {
      buf.set_string(inner.x, inner.y, "Nothing selected", Style::default().fg(Theme::MUTED));
      return;
    };

    let mut y = inner.y;
    let mut field = |label: &str, value: &str, color, y: &mut u16| {
      if *y >= inner.y + inner.height {
        return;
      }
      buf.set_string(inner.x + 1, *y, label, Style::default().fg(Theme::SUBTEXT));
      buf.set_string(inner.x + 12, *y, value, Style::default().fg(color));
      *y += 1;
    };

    field("Name", &dataset.name, Theme::TEXT, &mut y);
    field("Type", dataset.data_type.as_str(), Theme::data_type_color(dataset.data_type), &mut y);
    field("Phase", dataset.phase.as_str(), Theme::phase_color(dataset.phase), &mut y);
    field("Tasks", &dataset.task_types.join(", "), Theme::TEXT, &mut y);
    field("Size", &dataset.size, Theme::TEXT, &mut y);
    field("Timespan", &dataset.timespan, Theme::TEXT, &mut y);
    field("Coverage", &dataset.geo_coverage, Theme::TEXT, &mut y);
    field("Published", &dataset.published, Theme::TEXT, &mut y);

    y += 1;
    if y < inner.y + inner.height {
      buf.set_string(inner.x + 1, y, "Reference", Style::default().fg(Theme::SUBTEXT));
      y += 1;

      let ref_area = Rect::new(
        inner.x + 1,
        y,
        inner.width.saturating_sub(2),
        (inner.y + inner.height).saturating_sub(y),
      );
      Paragraph::new(Line::from(dataset.reference.as_str()))
        .style(Style::default().fg(Theme::TEXT))
        .wrap(Wrap { trim: true })
        .render(ref_area, buf);
    }
  }
}
