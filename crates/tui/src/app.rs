use crate::clipboard::{Clipboard, SystemClipboard};
use crate::event::{Action, key_to_action};
use crate::notify::ToastStack;
use crate::theme::Theme;
use crate::views::{AboutView, DatasetsView, about::AboutState, datasets::DatasetsState};
use crate::widgets::ToastCard;
use anyhow::Result;
use crossterm::{
  event::{self, Event as CrosstermEvent, KeyEventKind},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use nadbench_core::Config;
use ratatui::{
  Terminal,
  backend::CrosstermBackend,
  buffer::Buffer,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Style, Stylize},
  widgets::{Block, Borders, Clear, Widget},
};
use std::io;
use std::time::{Duration, Instant};
use tokio::time::interval;
use tracing::warn;

/// The current view being displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
  #[default]
  About,
  Datasets,
}

impl View {
  pub fn name(&self) -> &'static str {
    match self {
      View::About => "About",
      View::Datasets => "Datasets",
    }
  }

  pub fn index(&self) -> usize {
    match self {
      View::About => 0,
      View::Datasets => 1,
    }
  }

  pub fn from_index(index: usize) -> Self {
    match index {
      1 => View::Datasets,
      _ => View::About,
    }
  }
}

const VIEW_COUNT: usize = 2;

/// Main application state
pub struct App {
  pub current_view: View,
  pub should_quit: bool,
  pub show_help: bool,
  pub tick_rate: Duration,

  // View states
  pub about: AboutState,
  pub datasets: DatasetsState,

  // Host-owned collaborators
  pub toasts: ToastStack,
  clipboard: Option<Box<dyn Clipboard>>,
}

impl App {
  pub fn new(config: &Config) -> Self {
    let clipboard: Option<Box<dyn Clipboard>> = match SystemClipboard::new() {
      Ok(clipboard) => Some(Box::new(clipboard)),
      Err(e) => {
        warn!("{}, copy actions will only raise toasts", e);
        None
      }
    };

    Self {
      current_view: View::About,
      should_quit: false,
      show_help: false,
      tick_rate: Duration::from_millis(config.ui.tick_rate_ms.max(50)),
      about: AboutState::default(),
      datasets: DatasetsState::new(),
      toasts: ToastStack::new(),
      clipboard,
    }
  }

  /// Replace the clipboard port (tests inject fakes here)
  pub fn set_clipboard(&mut self, clipboard: Option<Box<dyn Clipboard>>) {
    self.clipboard = clipboard;
  }

  pub fn has_clipboard(&self) -> bool {
    self.clipboard.is_some()
  }

  pub fn handle_action(&mut self, action: Action) {
    match action {
      Action::Quit => self.should_quit = true,
      Action::SwitchView(index) => self.current_view = View::from_index(index),
      Action::NextView => self.current_view = View::from_index((self.current_view.index() + 1) % VIEW_COUNT),
      Action::NavigateUp => self.navigate_up(),
      Action::NavigateDown => self.navigate_down(),
      Action::GoToTop => {
        if self.current_view == View::Datasets {
          self.datasets.select_first();
        }
      }
      Action::GoToBottom => {
        if self.current_view == View::Datasets {
          self.datasets.select_last();
        }
      }
      Action::CopyReference => self.copy_reference(),
      Action::DismissToast => {
        self.toasts.dismiss_newest();
      }
      Action::ToggleHelp => self.show_help = !self.show_help,
      Action::Back => self.back(),
      Action::None => {}
    }
  }

  fn navigate_up(&mut self) {
    if self.current_view == View::Datasets {
      self.datasets.select_prev();
    }
  }

  fn navigate_down(&mut self) {
    if self.current_view == View::Datasets {
      self.datasets.select_next();
    }
  }

  fn copy_reference(&mut self) {
    let clipboard: Option<&mut dyn Clipboard> = self.clipboard.as_mut().map(|b| &mut **b as &mut dyn Clipboard);
    match self.current_view {
      View::About => self.about.copy_reference(clipboard, &mut self.toasts),
      View::Datasets => self.datasets.copy_reference(clipboard, &mut self.toasts),
    }
  }

  fn back(&mut self) {
    if self.show_help {
      self.show_help = false;
    } else if self.current_view != View::About {
      self.current_view = View::About;
    }
  }

  /// Host-owned timer: expire toasts past their duration
  pub fn on_tick(&mut self) {
    self.toasts.prune(Instant::now());
  }
}

/// Run the TUI application
pub async fn run(config: Config) -> Result<()> {
  // Setup terminal
  enable_raw_mode()?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend)?;

  let mut app = App::new(&config);
  let mut tick = interval(app.tick_rate);

  loop {
    terminal.draw(|f| {
      render_app(&app, f.area(), f.buffer_mut());
    })?;

    tokio::select! {
        _ = tick.tick() => {
            app.on_tick();
        }
        result = tokio::task::spawn_blocking(|| {
            if event::poll(Duration::from_millis(100)).ok()? {
                event::read().ok()
            } else {
                None
            }
        }) => {
            if let Ok(Some(event)) = result {
                match event {
                    CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                        app.handle_action(key_to_action(key));
                    }
                    CrosstermEvent::Resize(_, _) => {
                        // Terminal will redraw on next loop
                    }
                    _ => {}
                }
            }
        }
    }

    if app.should_quit {
      break;
    }
  }

  // Cleanup
  disable_raw_mode()?;
  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  Ok(())
}

/// Render the application
fn render_app(app: &App, area: Rect, buf: &mut Buffer) {
  // Clear with background
  Clear.render(area, buf);
  for y in area.y..area.y + area.height {
    for x in area.x..area.x + area.width {
      buf[(x, y)].set_bg(Theme::BG);
    }
  }

  // Layout: header + content + footer
  let chunks = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(2), // Header with tabs
      Constraint::Min(8),    // Content
      Constraint::Length(1), // Footer with keybindings
    ])
    .split(area);

  render_header(app, chunks[0], buf);

  match app.current_view {
    View::About => AboutView::new(&app.about).render(chunks[1], buf),
    View::Datasets => DatasetsView::new(&app.datasets).render(chunks[1], buf),
  }

  render_footer(app, chunks[2], buf);

  if app.show_help {
    render_help_overlay(area, buf);
  }

  // Toasts go on top of everything
  render_toasts(app, area, buf);
}

fn render_header(app: &App, area: Rect, buf: &mut Buffer) {
  let title = "NaD Benchmarks";
  buf.set_string(area.x + 1, area.y, title, Style::default().fg(Theme::ACCENT).bold());

  let tabs_x = area.x + title.len() as u16 + 3;
  let views = [View::About, View::Datasets];

  let mut x = tabs_x;
  for (i, view) in views.iter().enumerate() {
    let is_selected = *view == app.current_view;
    let label = format!("[{}]{} ", i + 1, view.name());

    let style = if is_selected {
      Style::default().fg(Theme::ACCENT).bold()
    } else {
      Style::default().fg(Theme::SUBTEXT)
    };

    buf.set_string(x, area.y, &label, style);
    x += label.len() as u16;
  }

  // Clipboard availability
  let (clip_status, clip_color) = if app.has_clipboard() {
    ("● clipboard", Theme::SUCCESS)
  } else {
    ("○ no clipboard", Theme::WARNING)
  };
  let clip_x = area.x + area.width.saturating_sub(clip_status.len() as u16 + 2);
  buf.set_string(clip_x, area.y, clip_status, Style::default().fg(clip_color));

  // Separator
  for x in area.x..area.x + area.width {
    buf[(x, area.y + 1)].set_char('─').set_fg(Theme::OVERLAY);
  }
}

fn render_footer(app: &App, area: Rect, buf: &mut Buffer) {
  let keybindings = match app.current_view {
    View::About => "q:Quit  1-2:Views  c/Enter:Copy Reference  x:Dismiss  ?:Help",
    View::Datasets => "q:Quit  1-2:Views  j/k:Nav  c/Enter:Copy Reference  x:Dismiss  ?:Help",
  };

  buf.set_string(area.x + 1, area.y, keybindings, Style::default().fg(Theme::MUTED));

  let version = concat!("v", env!("CARGO_PKG_VERSION"));
  let version_x = area.x + area.width.saturating_sub(version.len() as u16 + 2);
  buf.set_string(version_x, area.y, version, Style::default().fg(Theme::SUBTEXT));
}

fn render_help_overlay(area: Rect, buf: &mut Buffer) {
  let help_width = 44;
  let help_height = 14;
  let x = area.x + (area.width.saturating_sub(help_width)) / 2;
  let y = area.y + (area.height.saturating_sub(help_height)) / 2;

  let help_area = Rect::new(x, y, help_width.min(area.width), help_height.min(area.height));

  for hy in help_area.y..help_area.y + help_area.height {
    for hx in help_area.x..help_area.x + help_area.width {
      buf[(hx, hy)].set_bg(Theme::SURFACE).set_char(' ');
    }
  }

  let block = Block::default()
    .title("Help")
    .title_style(Style::default().fg(Theme::ACCENT).bold())
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Theme::ACCENT));
  let inner = block.inner(help_area);
  block.render(help_area, buf);

  let help_text = [
    "NAVIGATION",
    "  1-2      Switch views",
    "  Tab      Cycle views",
    "  j/k      Navigate datasets",
    "  g/G      Jump to top/bottom",
    "  Esc      Back/close",
    "",
    "ACTIONS",
    "  c/Enter  Copy reference",
    "  x        Dismiss newest toast",
    "  q        Quit",
    "  ?        Toggle help",
  ];

  for (i, line) in help_text.iter().enumerate() {
    if i as u16 >= inner.height {
      break;
    }
    let style = if line.starts_with(|c: char| c.is_uppercase()) {
      Style::default().fg(Theme::ACCENT).bold()
    } else {
      Style::default().fg(Theme::TEXT)
    };
    buf.set_string(inner.x, inner.y + i as u16, line, style);
  }
}

/// Stack toasts in the bottom-right corner, newest at the bottom
fn render_toasts(app: &App, area: Rect, buf: &mut Buffer) {
  if app.toasts.is_empty() {
    return;
  }

  let width = 46.min(area.width.saturating_sub(4));
  if width < 8 {
    return;
  }
  let x = area.x + area.width.saturating_sub(width + 2);
  let mut bottom = area.y + area.height.saturating_sub(2);

  for toast in app.toasts.iter().rev() {
    let card = ToastCard::new(toast);
    let height = card.height(width);
    let Some(y) = bottom.checked_sub(height) else {
      break;
    };
    if y <= area.y + 2 {
      break;
    }

    card.render(Rect::new(x, y, width, height), buf);
    bottom = y.saturating_sub(1);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::clipboard::testing::RecordingClipboard;
  use crate::views::COPIED_TOAST_TITLE;
  use nadbench_core::about::REFERENCE;

  fn test_app() -> App {
    let mut app = App::new(&Config::default());
    app.set_clipboard(Some(Box::new(RecordingClipboard::default())));
    app
  }

  #[test]
  fn test_view_switching() {
    let mut app = test_app();
    assert_eq!(app.current_view, View::About);

    app.handle_action(Action::SwitchView(1));
    assert_eq!(app.current_view, View::Datasets);

    app.handle_action(Action::NextView);
    assert_eq!(app.current_view, View::About);

    app.handle_action(Action::SwitchView(9));
    assert_eq!(app.current_view, View::About);
  }

  #[test]
  fn test_copy_action_on_about_view() {
    let mut app = test_app();
    app.handle_action(Action::CopyReference);

    assert_eq!(app.toasts.len(), 1);
    let toast = app.toasts.iter().next().unwrap();
    assert_eq!(toast.title, COPIED_TOAST_TITLE);
    assert_eq!(toast.body, REFERENCE);
  }

  #[test]
  fn test_copy_action_without_clipboard_is_contained() {
    let mut app = test_app();
    app.set_clipboard(None);

    app.handle_action(Action::CopyReference);
    app.handle_action(Action::CopyReference);

    assert_eq!(app.toasts.len(), 2);
    assert!(!app.should_quit);
  }

  #[test]
  fn test_dismiss_action() {
    let mut app = test_app();
    app.handle_action(Action::CopyReference);
    app.handle_action(Action::DismissToast);
    assert!(app.toasts.is_empty());
  }

  #[test]
  fn test_back_closes_help_then_returns_to_about() {
    let mut app = test_app();
    app.handle_action(Action::SwitchView(1));
    app.handle_action(Action::ToggleHelp);

    app.handle_action(Action::Back);
    assert!(!app.show_help);
    assert_eq!(app.current_view, View::Datasets);

    app.handle_action(Action::Back);
    assert_eq!(app.current_view, View::About);
  }

  #[test]
  fn test_render_smoke() {
    let mut app = test_app();
    app.handle_action(Action::CopyReference);

    let area = Rect::new(0, 0, 100, 30);
    let mut buf = Buffer::empty(area);
    render_app(&app, area, &mut buf);

    let mut text = String::new();
    for y in 0..area.height {
      for x in 0..area.width {
        text.push_str(buf[(x, y)].symbol());
      }
    }
    assert!(text.contains("NaD Benchmarks"));
    assert!(text.contains("x:dismiss"));
  }
}
