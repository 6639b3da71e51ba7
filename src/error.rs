//! Error type shared by the whole crate.
//!
//! Every failure is local to a single render call; nothing here is fatal to the host.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
  /// Caller supplied inputs that cannot be rendered.
  #[error("validation error: {0}")]
  Validation(String),

  /// Drawing surface could not be used, e.g. its lock is poisoned.
  #[error("surface error: {0}")]
  Surface(String),

  #[error(transparent)]
  Other(#[from] anyhow::Error),
}

impl Error {
  pub fn validation(msg: impl Into<String>) -> Self {
    Self::Validation(msg.into())
  }

  pub fn surface(msg: impl Into<String>) -> Self {
    Self::Surface(msg.into())
  }

  pub fn is_validation(&self) -> bool {
    matches!(self, Self::Validation(_))
  }
}
