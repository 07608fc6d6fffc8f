//! One-shot flash messages
//!
//! A flash message is attached to a redirect response and consumed exactly
//! once by the next rendered page, then discarded. The value travels as
//! `level|message`, base64url-encoded without padding, so it survives
//! cookie transport untouched.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

/// Severity of a flash message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Error,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "success" => Some(Self::Success),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// A short-lived notification shown on the next rendered page only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    level: FlashLevel,
    message: String,
}

impl FlashMessage {
    /// Create a flash message
    pub fn new(level: FlashLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// Create a success flash message
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(FlashLevel::Success, message)
    }

    pub fn level(&self) -> FlashLevel {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Encode for cookie transport
    pub fn to_cookie_value(&self) -> String {
        let raw = format!("{}|{}", self.level.as_str(), self.message);
        URL_SAFE_NO_PAD.encode(raw.as_bytes())
    }

    /// Decode from a cookie value. Malformed input yields `None`;
    /// a missing or garbled flash renders as no flash at all.
    pub fn from_cookie_value(value: &str) -> Option<Self> {
        let bytes = URL_SAFE_NO_PAD.decode(value).ok()?;
        let raw = String::from_utf8(bytes).ok()?;
        let (level, message) = raw.split_once('|')?;
        Some(Self::new(FlashLevel::parse(level)?, message))
    }
}
