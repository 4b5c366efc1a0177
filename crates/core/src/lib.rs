pub mod about;
pub mod config;
pub mod dataset;
pub mod error;

pub use about::{AboutContent, Citation};
pub use config::{Config, UiConfig};
pub use dataset::{DataType, Dataset, DisasterPhase, builtin_catalog};
pub use error::{Error, Result};
