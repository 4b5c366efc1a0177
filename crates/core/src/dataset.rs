use crate::about::Citation;
use serde::{Deserialize, Serialize};

/// Kind of data a benchmark dataset is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
  Image,
  Text,
  Audio,
  Video,
  Tabular,
  Multimodal,
}

impl DataType {
  pub fn as_str(&self) -> &'static str {
    match self {
      DataType::Image => "image",
      DataType::Text => "text",
      DataType::Audio => "audio",
      DataType::Video => "video",
      DataType::Tabular => "tabular",
      DataType::Multimodal => "multimodal",
    }
  }
}

impl std::str::FromStr for DataType {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "image" => Ok(DataType::Image),
      "text" => Ok(DataType::Text),
      "audio" => Ok(DataType::Audio),
      "video" => Ok(DataType::Video),
      "tabular" => Ok(DataType::Tabular),
      "multimodal" => Ok(DataType::Multimodal),
      _ => Err(format!("Unknown data type: {}", s)),
    }
  }
}

/// Disaster-management phase a dataset targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisasterPhase {
  Prevention,
  Preparedness,
  Response,
  Recovery,
}

impl DisasterPhase {
  pub fn as_str(&self) -> &'static str {
    match self {
      DisasterPhase::Prevention => "prevention",
      DisasterPhase::Preparedness => "preparedness",
      DisasterPhase::Response => "response",
      DisasterPhase::Recovery => "recovery",
    }
  }
}

impl std::str::FromStr for DisasterPhase {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "prevention" => Ok(DisasterPhase::Prevention),
      "preparedness" => Ok(DisasterPhase::Preparedness),
      "response" => Ok(DisasterPhase::Response),
      "recovery" => Ok(DisasterPhase::Recovery),
      _ => Err(format!("Unknown disaster phase: {}", s)),
    }
  }
}

/// A benchmark dataset entry in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
  pub name: String,
  pub data_type: DataType,
  pub phase: DisasterPhase,
  pub task_types: Vec<String>,
  pub size: String,
  pub timespan: String,
  pub geo_coverage: String,
  pub published: String,
  pub reference: Citation,
}

fn entry(
  name: &str,
  data_type: DataType,
  phase: DisasterPhase,
  task_types: &[&str],
  size: &str,
  timespan: &str,
  geo_coverage: &str,
  published: &str,
  reference: &'static str,
) -> Dataset {
  Dataset {
    name: name.to_string(),
    data_type,
    phase,
    task_types: task_types.iter().map(|t| t.to_string()).collect(),
    size: size.to_string(),
    timespan: timespan.to_string(),
    geo_coverage: geo_coverage.to_string(),
    published: published.to_string(),
    reference: Citation::from_static(reference),
  }
}

/// The catalog shipped with the binary. Read-only; the browser never
/// fetches or mutates entries.
pub fn builtin_catalog() -> Vec<Dataset> {
  vec![
    entry(
      "xBD",
      DataType::Image,
      DisasterPhase::Recovery,
      &["semantic segmentation", "damage classification"],
      "850,736 building polygons",
      "2011-2019",
      "15 countries",
      "2019",
      "Gupta, R., Goodman, B., Patel, N., et al. (2019). Creating xBD: A Dataset for Assessing Building \
Damage from Satellite Imagery.",
    ),
    entry(
      "CrisisMMD",
      DataType::Multimodal,
      DisasterPhase::Response,
      &["informativeness filtering", "humanitarian categorization"],
      "16,058 tweets, 18,082 images",
      "2017",
      "Global",
      "2018",
      "Alam, F., Ofli, F., & Imran, M. (2018). CrisisMMD: Multimodal Twitter Datasets from Seven Natural \
Disasters.",
    ),
    entry(
      "HumAID",
      DataType::Text,
      DisasterPhase::Response,
      &["humanitarian categorization"],
      "77,196 tweets",
      "2016-2019",
      "Global",
      "2021",
      "Alam, F., Qazi, U., Imran, M., & Ofli, F. (2021). HumAID: Human-Annotated Disaster Incidents Data \
from Twitter with Deep Learning Benchmarks.",
    ),
    entry(
      "FloodNet",
      DataType::Image,
      DisasterPhase::Recovery,
      &["semantic segmentation", "visual question answering"],
      "2,343 UAV images",
      "2017",
      "Texas, USA",
      "2021",
      "Rahnemoonfar, M., Chowdhury, T., Sarkar, A., et al. (2021). FloodNet: A High Resolution Aerial \
Imagery Dataset for Post Flood Scene Understanding.",
    ),
    entry(
      "Incidents1M",
      DataType::Image,
      DisasterPhase::Response,
      &["incident classification"],
      "1,787,154 images",
      "2012-2019",
      "Global",
      "2020",
      "Weber, E., Marzo, N., Papadopoulos, D. P., et al. (2020). Detecting Natural Disasters, Damage, and \
Incidents in the Wild.",
    ),
    entry(
      "STEAD",
      DataType::Tabular,
      DisasterPhase::Prevention,
      &["earthquake detection", "phase picking"],
      "1,200,000 seismic traces",
      "1984-2018",
      "Global",
      "2019",
      "Mousavi, S. M., Sheng, Y., Zhu, W., & Beroza, G. C. (2019). STanford EArthquake Dataset (STEAD): A \
Global Data Set of Seismic Signals for AI.",
    ),
  ]
}
