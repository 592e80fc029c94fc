// src/flash.rs
//
// One-shot status text handed from one navigation to the next. The envelope
// rides in a cookie set on the redirect; the destination page clears the
// cookie in the same response that displays it.

use astra::Request;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const FLASH_COOKIE: &str = "jobtrack_flash";

/// Visible lifetime, counted from when the flash was issued.
pub const FLASH_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Flash {
    Message(String),
    Error(String),
}

impl Flash {
    pub fn text(&self) -> &str {
        match self {
            Flash::Message(t) | Flash::Error(t) => t,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashEnvelope {
    pub flash: Flash,
    /// Unix milliseconds.
    pub issued_at: i64,
}

/// A flash that made it to the page, with how long it may stay up.
#[derive(Debug, Clone, PartialEq)]
pub struct ShownFlash {
    pub flash: Flash,
    pub remaining: Duration,
}

pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

impl FlashEnvelope {
    pub fn new(flash: Flash, issued_at: i64) -> Self {
        Self { flash, issued_at }
    }

    pub fn encode(&self) -> String {
        // Serializing a plain enum + i64 cannot fail.
        let json = serde_json::to_vec(self).unwrap_or_default();
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(json)
    }

    pub fn decode(raw: &str) -> Option<Self> {
        let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(raw.trim())
            .ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    /// Time left before the flash must be gone; `None` once it has expired.
    pub fn remaining(&self, now: i64) -> Option<Duration> {
        let elapsed = now.saturating_sub(self.issued_at).max(0) as u64;
        let ttl = FLASH_TTL.as_millis() as u64;
        (elapsed < ttl).then(|| Duration::from_millis(ttl - elapsed))
    }

    pub fn set_cookie(&self) -> String {
        format!(
            "{FLASH_COOKIE}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
            self.encode(),
            FLASH_TTL.as_secs()
        )
    }
}

pub fn clear_cookie() -> String {
    format!("{FLASH_COOKIE}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}

fn cookie_value<'a>(req: &'a Request, name: &str) -> Option<&'a str> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v)
}

/// Result of reading the flash cookie on a page that consumes it.
#[derive(Debug, Default)]
pub struct Taken {
    pub shown: Option<ShownFlash>,
    /// The cookie was present and must be cleared, even if it was unusable.
    pub consumed: bool,
}

pub fn take(req: &Request, now: i64) -> Taken {
    let Some(raw) = cookie_value(req, FLASH_COOKIE).filter(|v| !v.is_empty()) else {
        return Taken::default();
    };

    let shown = FlashEnvelope::decode(raw).and_then(|env| {
        let remaining = env.remaining(now)?;
        Some(ShownFlash {
            flash: env.flash,
            remaining,
        })
    });

    if shown.is_none() {
        tracing::debug!("dropping expired or unreadable flash");
    }

    Taken {
        shown,
        consumed: true,
    }
}
