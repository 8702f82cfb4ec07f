use std::time::Duration;

use chrono::DateTime;
use chrono::TimeZone;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Session token payload.
///
/// Application field `name` composed with the registered RFC 7519 claims the
/// service relies on. `exp` and `iat` are whole seconds since the Unix epoch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user name)
    pub sub: String,

    /// User name, duplicated from `sub` for clients reading the payload
    pub name: String,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,

    /// Issued at (Unix timestamp, seconds)
    pub iat: i64,

    /// JWT ID, unique per issued token
    pub jti: String,
}

impl Claims {
    /// Create claims for `name` that expire `lifetime` after `now`.
    ///
    /// The expiry is truncated to whole seconds, as JWT NumericDate requires.
    /// A lifetime too large to represent saturates at the maximum date.
    ///
    /// # Arguments
    /// * `name` - User name, used as subject
    /// * `lifetime` - Duration until the token expires
    /// * `now` - Issuance instant
    pub fn for_user_at(name: impl ToString, lifetime: Duration, now: DateTime<Utc>) -> Self {
        let expires_at = chrono::Duration::from_std(lifetime)
            .ok()
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        let name = name.to_string();
        Self {
            sub: name.clone(),
            name,
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Create claims for `name` issued now.
    pub fn for_user(name: impl ToString, lifetime: Duration) -> Self {
        Self::for_user_at(name, lifetime, Utc::now())
    }

    /// Expiry as a date, `None` if `exp` is out of range.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }

    /// Check whether the token is expired at `now`.
    ///
    /// Compared with millisecond precision: the token stops being valid at the
    /// instant `exp` is reached.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.exp.checked_mul(1000) {
            Some(exp_millis) => exp_millis <= now.timestamp_millis(),
            None => self.exp < 0,
        }
    }
}
