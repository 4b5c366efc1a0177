use nadbench_core::{DataType, DisasterPhase};
use ratatui::style::Color;

/// Theme colors; the accent is the NADBenchmarks site green
pub struct Theme;

impl Theme {
  // Base colors
  pub const BG: Color = Color::Rgb(24, 26, 22);
  pub const SURFACE: Color = Color::Rgb(42, 46, 38);
  pub const OVERLAY: Color = Color::Rgb(64, 70, 58);
  pub const TEXT: Color = Color::Rgb(214, 219, 208);
  pub const SUBTEXT: Color = Color::Rgb(168, 176, 160);
  pub const MUTED: Color = Color::Rgb(110, 118, 102);

  // Accent colors
  pub const ACCENT: Color = Color::Rgb(122, 172, 53); // #7AAC35
  pub const SUCCESS: Color = Color::Rgb(166, 227, 161);
  pub const WARNING: Color = Color::Rgb(249, 226, 175);
  pub const ERROR: Color = Color::Rgb(243, 139, 168);
  pub const INFO: Color = Color::Rgb(148, 226, 213);

  /// Get color for a disaster-management phase
  pub fn phase_color(phase: DisasterPhase) -> Color {
    match phase {
      DisasterPhase::Prevention => Self::INFO,
      DisasterPhase::Preparedness => Self::WARNING,
      DisasterPhase::Response => Self::ERROR,
      DisasterPhase::Recovery => Self::SUCCESS,
    }
  }

  /// Get color for a dataset data type
  pub fn data_type_color(data_type: DataType) -> Color {
    match data_type {
      DataType::Image => Color::Rgb(137, 180, 250),
      DataType::Text => Color::Rgb(249, 226, 175),
      DataType::Audio => Color::Rgb(203, 166, 247),
      DataType::Video => Color::Rgb(250, 179, 135),
      DataType::Tabular => Color::Rgb(148, 226, 213),
      DataType::Multimodal => Color::Rgb(243, 139, 168),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_phase_colors_are_distinct() {
    let colors = [
      Theme::phase_color(DisasterPhase::Prevention),
      Theme::phase_color(DisasterPhase::Preparedness),
      Theme::phase_color(DisasterPhase::Response),
      Theme::phase_color(DisasterPhase::Recovery),
    ];
    for (i, a) in colors.iter().enumerate() {
      for b in colors.iter().skip(i + 1) {
        assert_ne!(a, b);
      }
    }
  }
}
