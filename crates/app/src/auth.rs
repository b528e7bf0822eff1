//! Shared-secret bearer authentication.

use std::fmt;

use subtle::ConstantTimeEq;

use powerctl_domain::error::PowerCtlError;

/// Placeholder secret shipped in sample configuration. Never deploy with it.
pub const DEFAULT_API_KEY: &str = "your-secret-api-key-here";

/// The single secret every mutating request must present.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Whether this is still the insecure sample secret.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_API_KEY
    }

    /// Value for an outbound `Authorization` header.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }

    /// Check an inbound `Authorization` header value.
    ///
    /// The header must be exactly `Bearer <secret>`; the secret comparison
    /// runs in constant time.
    ///
    /// # Errors
    ///
    /// Returns [`PowerCtlError::Unauthorized`] when the header is absent,
    /// uses another scheme, or carries the wrong token.
    pub fn verify(&self, authorization: Option<&str>) -> Result<(), PowerCtlError> {
        let token = authorization
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(PowerCtlError::Unauthorized)?;

        if self.0.is_empty() || !bool::from(token.as_bytes().ct_eq(self.0.as_bytes())) {
            return Err(PowerCtlError::Unauthorized);
        }
        Ok(())
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_matching_bearer_token() {
        let key = ApiKey::new("s3cret");
        assert!(key.verify(Some("Bearer s3cret")).is_ok());
    }

    #[test]
    fn should_reject_missing_header() {
        let key = ApiKey::new("s3cret");
        assert!(matches!(key.verify(None), Err(PowerCtlError::Unauthorized)));
    }

    #[test]
    fn should_reject_wrong_token() {
        let key = ApiKey::new("s3cret");
        assert!(key.verify(Some("Bearer s3cre")).is_err());
        assert!(key.verify(Some("Bearer s3cret ")).is_err());
        assert!(key.verify(Some("Bearer S3CRET")).is_err());
    }

    #[test]
    fn should_reject_other_schemes() {
        let key = ApiKey::new("s3cret");
        assert!(key.verify(Some("s3cret")).is_err());
        assert!(key.verify(Some("bearer s3cret")).is_err());
        assert!(key.verify(Some("Basic s3cret")).is_err());
    }

    #[test]
    fn should_never_accept_with_empty_secret() {
        let key = ApiKey::new("");
        assert!(key.verify(Some("Bearer ")).is_err());
    }

    #[test]
    fn should_detect_default_secret() {
        assert!(ApiKey::new(DEFAULT_API_KEY).is_default());
        assert!(!ApiKey::new("custom").is_default());
    }

    #[test]
    fn should_format_bearer_header() {
        assert_eq!(ApiKey::new("abc").bearer(), "Bearer abc");
    }

    #[test]
    fn should_redact_secret_in_debug_output() {
        let text = format!("{:?}", ApiKey::new("abc"));
        assert!(!text.contains("abc"));
    }
}
