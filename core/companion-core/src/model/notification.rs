//! Transient notifications ("toasts").

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

token_enum! {
    pub enum ToastVariant ("toast variant") {
        Default => "default",
        Success => "success",
        Error => "error",
    }
}

/// Caller-supplied notification; id and timing are assigned at enqueue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewToast {
    pub title: String,
    pub description: Option<String>,
    pub variant: Option<ToastVariant>,
    pub duration_ms: Option<u64>,
}

impl NewToast {
    pub fn new(title: impl Into<String>) -> Self {
        NewToast {
            title: title.into(),
            description: None,
            variant: None,
            duration_ms: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn variant(mut self, variant: ToastVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub variant: ToastVariant,
    pub duration_ms: u64,
    pub created_at: DateTime<Utc>,
}

impl Toast {
    /// Durations too large to represent never expire.
    pub fn expires_at(&self) -> DateTime<Utc> {
        i64::try_from(self.duration_ms)
            .ok()
            .and_then(Duration::try_milliseconds)
            .and_then(|d| self.created_at.checked_add_signed(d))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at() <= now
    }
}
