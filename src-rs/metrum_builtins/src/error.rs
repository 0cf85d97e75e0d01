use thiserror::Error;

/// An error raised when looking up a unit suffix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No unit is registered under the suffix
    #[error("unknown unit `{suffix}`")]
    UnknownUnit {
        /// The suffix that was looked up
        suffix: String,
    },
}

impl RegistryError {
    /// Creates an `UnknownUnit` error for the suffix.
    #[must_use]
    pub fn unknown_unit(suffix: &str) -> Self {
        Self::UnknownUnit {
            suffix: suffix.to_string(),
        }
    }
}
