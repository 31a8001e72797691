//! Static credentials
//!
//! The key pair is read once at startup from `S5-S3.conf`. The secret never
//! appears in `Debug` output.

/// Default credentials file name, resolved against the working directory
pub const DEFAULT_CREDENTIALS_FILE: &str = "S5-S3.conf";

/// Access key pair used to sign requests
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret() {
        let credentials = Credentials {
            access_key_id: "AKIAEXAMPLE".into(),
            secret_access_key: "c2VjcmV0/key+value=".into(),
        };
        let debug = format!("{credentials:?}");
        assert!(debug.contains("AKIAEXAMPLE"));
        assert!(!debug.contains("c2VjcmV0"));
    }
}
