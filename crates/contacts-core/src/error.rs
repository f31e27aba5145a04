//! Error types for `contacts-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// One or more of `name`, `email`, `phone` is absent or empty.
  #[error("Name, Email, and Phone are required")]
  MissingRequiredFields,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
