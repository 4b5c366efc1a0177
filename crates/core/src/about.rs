use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// The bibliographic reference for the NADBenchmarks paper. This is the
/// payload of the About view's "Copy Reference" action; the displayed copy
/// source and the toast body are this same value.
pub const REFERENCE: &str = "Proma, A. M., Islam, M. S., Ciko, S., Baten, R. A., & Hoque, E. (2022). \
NADBenchmarks-a compilation of Benchmark Datasets for Machine Learning Tasks related to Natural Disasters.";

pub const ABOUT_TITLE: &str = "A climate change benchmark database";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
  "This site facilitates the process of searching for natural disaster datasets for ML engineers.",
  "NaD Benchmarks 2 presents a collection of existing benchmark datasets for machine learning models \
for natural disasters. The supported features and individual dataset information are specifically \
included as per feedback collected through user interviews.",
  "NaD Benchmarks 2 is an extension of Benchmark datasets for Machine Learning for Natural Disasters \
as introduced by Proma et al.",
];

/// A bibliographic citation (newtype, guaranteed non-empty)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Citation(String);

impl Citation {
  pub fn new(text: impl Into<String>) -> Result<Self> {
    let text = text.into();
    if text.trim().is_empty() {
      return Err(Error::Validation("citation must not be empty".to_string()));
    }
    Ok(Self(text))
  }

  /// Wrap a compile-time citation literal
  pub fn from_static(text: &'static str) -> Self {
    debug_assert!(!text.trim().is_empty());
    Self(text.to_string())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl std::fmt::Display for Citation {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Build-time copy for the About view. Injected into the view state as a
/// value so tests can substitute their own content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutContent {
  pub title: String,
  pub paragraphs: Vec<String>,
  pub citation: Citation,
}

impl AboutContent {
  /// The shipped About page
  pub fn builtin() -> Self {
    Self {
      title: ABOUT_TITLE.to_string(),
      paragraphs: ABOUT_PARAGRAPHS.iter().map(|p| p.to_string()).collect(),
      citation: Citation::from_static(REFERENCE),
    }
  }
}

impl Default for AboutContent {
  fn default() -> Self {
    Self::builtin()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_citation_rejects_empty() {
    assert!(Citation::new("").is_err());
    assert!(Citation::new("   ").is_err());
    assert!(Citation::new("Proma et al. (2022)").is_ok());
  }

  #[test]
  fn test_builtin_content_is_fixed() {
    let a = AboutContent::builtin();
    let b = AboutContent::builtin();
    assert_eq!(a, b);
    assert_eq!(a.citation.as_str(), REFERENCE);
    assert_eq!(a.paragraphs.len(), 3);
  }

  #[test]
  fn test_reference_keeps_punctuation() {
    // The ampersand and hyphenation are part of the citation verbatim
    assert!(REFERENCE.contains("& Hoque, E. (2022)"));
    assert!(REFERENCE.contains("NADBenchmarks-a compilation"));
  }
}
