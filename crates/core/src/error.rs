use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("Validation: {0}")]
  Validation(String),

  #[error("Config: {0}")]
  Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
