//! Errors raised while loading or validating ragkb settings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file or `RAGKB_*` variable could not be parsed or merged.
    #[error("failed to load ragkb config: {0}")]
    Load(#[from] figment::Error),

    /// A setting the client cannot run without is empty.
    #[error("{field} is not set (config file or RAGKB_ env)")]
    Missing { field: &'static str },

    /// A setting is present but unusable, e.g. `server.timeout_secs = 0`.
    #[error("invalid {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ConfigError {
    /// Dotted path of the offending setting, when the error is about one.
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::Load(_) => None,
            Self::Missing { field } | Self::InvalidValue { field, .. } => Some(*field),
        }
    }
}
