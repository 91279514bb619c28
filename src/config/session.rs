//! Session configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Longest accepted idle timeout or sweep interval: one year.
pub const MAX_SESSION_SECS: u64 = 365 * 24 * 60 * 60;

/// Session cookie and expiry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session id
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Seconds of inactivity after which a session expires
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,

    /// Seconds between sweeps that drop expired sessions
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,
}

impl SessionConfig {
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }

    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_cookie_token(&self.cookie_name) {
            return Err(ValidationError::InvalidCookieName(self.cookie_name.clone()));
        }
        if self.idle_timeout_secs == 0 {
            return Err(ValidationError::InvalidIdleTimeout);
        }
        if self.sweep_interval_secs == 0 {
            return Err(ValidationError::InvalidSweepInterval);
        }
        if self.idle_timeout_secs > MAX_SESSION_SECS {
            return Err(ValidationError::SessionDurationTooLong("idle_timeout_secs"));
        }
        if self.sweep_interval_secs > MAX_SESSION_SECS {
            return Err(ValidationError::SessionDurationTooLong("sweep_interval_secs"));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            idle_timeout_secs: default_idle_timeout(),
            sweep_interval_secs: default_sweep_interval(),
        }
    }
}

/// RFC 6265 cookie-name token: visible ASCII minus separators.
fn is_cookie_token(name: &str) -> bool {
    const SEPARATORS: &str = "()<>@,;:\\\"/[]?={} \t";
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_graphic() && !SEPARATORS.contains(c))
}

fn default_cookie_name() -> String {
    "todo_session".to_string()
}

fn default_idle_timeout() -> u64 {
    86_400
}

fn default_sweep_interval() -> u64 {
    300
}
