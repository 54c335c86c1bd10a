//! In-memory queue of transient notifications ("toasts").
//!
//! The queue only ever grows by [`NotificationQueue::push`] and shrinks by
//! [`NotificationQueue::dismiss`] or [`NotificationQueue::expire`]. Entries
//! are kept in insertion order, which is also their display order.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const LIFETIME_MS: i64 = 4500;

/// How long a notification stays in the queue unless dismissed earlier.
pub const NOTIFICATION_LIFETIME: Duration = Duration::from_millis(LIFETIME_MS as u64);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("notification queue unavailable")]
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(String);

impl NotificationId {
    /// Timestamp in milliseconds, then a hex suffix of eight random digits
    /// followed by the queue's sequence number.
    fn generate(now: DateTime<Utc>, rng: &mut fastrand::Rng, seq: u64) -> Self {
        Self(format!(
            "{}-{:08x}{:x}",
            now.timestamp_millis(),
            rng.u32(..),
            seq
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Success,
    #[default]
    Info,
    Error,
}

/// A notification as handed to [`NotificationQueue::push`], before it has an id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationDraft {
    pub title: String,
    pub description: Option<String>,
    pub variant: Variant,
}

impl NotificationDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title).with_variant(Variant::Success)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(title).with_variant(Variant::Info)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub description: Option<String>,
    pub variant: Variant,
    expires_at: DateTime<Utc>,
}

impl Notification {
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}

#[derive(Debug, Clone)]
pub struct NotificationQueue {
    entries: Vec<Notification>,
    rng: fastrand::Rng,
    issued: u64,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::with_rng(fastrand::Rng::new())
    }

    pub fn with_rng(rng: fastrand::Rng) -> Self {
        Self {
            entries: Vec::new(),
            rng,
            issued: 0,
        }
    }

    /// Appends a notification created at `now` and returns its id.
    ///
    /// Ids never repeat within one queue, including ids already dismissed.
    pub fn push(&mut self, draft: NotificationDraft, now: DateTime<Utc>) -> NotificationId {
        let id = NotificationId::generate(now, &mut self.rng, self.issued);
        self.issued += 1;
        let NotificationDraft {
            title,
            description,
            variant,
        } = draft;
        self.entries.push(Notification {
            id: id.clone(),
            title,
            description,
            variant,
            expires_at: now + TimeDelta::milliseconds(LIFETIME_MS),
        });
        id
    }

    /// Removes the notification with `id`. Returns whether anything was removed.
    pub fn dismiss(&mut self, id: &NotificationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| &n.id != id);
        self.entries.len() != before
    }

    /// Drops every notification whose lifetime has run out at `now`.
    pub fn expire(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|n| n.expires_at > now);
        before - self.entries.len()
    }

    pub fn contains(&self, id: &NotificationId) -> bool {
        self.entries.iter().any(|n| &n.id == id)
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
