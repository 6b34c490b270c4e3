//! Error types and result alias for the crate.
//!
//! Layout functions never fail; [`enum@crate::error::Error`] is only produced when
//! validating configuration up front (options, bounds, placer construction).
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_message_is_prefixed() {
        let err = Error::InvalidConfig("min_spacing must be > 0".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: min_spacing must be > 0"
        );
    }
}
