use std::fmt;
use std::time::Duration;

/// Identity extracted from a valid session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Plaintext credentials as received from a caller.
///
/// Never persisted; the password is redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub name: String,
    pub password: String,
}

impl Credentials {
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Signing key and token lifetime for the session manager.
#[derive(Clone)]
pub struct TokenSettings {
    key: Vec<u8>,
    lifetime: Duration,
}

impl TokenSettings {
    pub fn new(key: impl Into<Vec<u8>>, lifetime: Duration) -> Self {
        Self {
            key: key.into(),
            lifetime,
        }
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }
}

impl fmt::Debug for TokenSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSettings")
            .field("key", &"<redacted>")
            .field("lifetime", &self.lifetime)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secrets() {
        let credentials = Credentials::new("adam", "pwd");
        let printed = format!("{:?}", credentials);
        assert!(printed.contains("adam"));
        assert!(!printed.contains("pwd"));

        let settings = TokenSettings::new(b"super secret key".to_vec(), Duration::from_secs(60));
        assert!(!format!("{:?}", settings).contains("super secret key"));
    }
}
