use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Error,
}

/// Transient status line text. Expiry is driven by the `now` the reducer is given.
#[derive(Debug, Clone, Default)]
pub struct MessageState {
    pub last_error: Option<String>,
    pub last_info: Option<String>,
    pub expires_at: Option<Instant>,
}

impl MessageState {
    const ERROR_TIMEOUT: Duration = Duration::from_secs(4);
    const INFO_TIMEOUT: Duration = Duration::from_millis(1500);

    pub fn set_error_at(&mut self, msg: String, now: Instant) {
        self.last_error = Some(msg);
        self.last_info = None;
        self.expires_at = Some(now + Self::ERROR_TIMEOUT);
    }

    pub fn set_info_at(&mut self, msg: String, now: Instant) {
        self.last_info = Some(msg);
        self.last_error = None;
        self.expires_at = Some(now + Self::INFO_TIMEOUT);
    }

    /// Returns true when something was cleared.
    pub fn clear_expired_at(&mut self, now: Instant) -> bool {
        if let Some(expires) = self.expires_at
            && expires <= now
        {
            self.clear();
            return true;
        }
        false
    }

    pub fn clear(&mut self) {
        self.last_error = None;
        self.last_info = None;
        self.expires_at = None;
    }

    pub fn current(&self) -> Option<(MessageLevel, &str)> {
        if let Some(error) = &self.last_error {
            return Some((MessageLevel::Error, error));
        }
        self.last_info
            .as_deref()
            .map(|info| (MessageLevel::Info, info))
    }
}
