//! # Flash message data model.
//!
//! - [`Severity`] closed set of visual categories (each maps to a style class)
//! - [`FlashMessage`] text + severity, as handed over by producers
//! - [`FlashEntry`] a message once queued, carrying its [`FlashId`]
//!
//! Entries are identified by id only: two messages with identical text and
//! severity become two distinct entries.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

/// Global counter for entry identities.
static FLASH_SEQ: AtomicU64 = AtomicU64::new(1);

/// Visual/semantic category of a flash message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Failed,
    Warning,
    Primary,
    Link,
    #[default]
    Info,
    Dark,
}

impl Severity {
    /// Every severity, in declaration order.
    pub const ALL: [Severity; 7] = [
        Severity::Success,
        Severity::Failed,
        Severity::Warning,
        Severity::Primary,
        Severity::Link,
        Severity::Info,
        Severity::Dark,
    ];

    /// Returns the Bulma notification modifier class for this severity.
    ///
    /// # Example
    /// ```
    /// use flashkit::Severity;
    ///
    /// assert_eq!(Severity::Failed.css_class(), "is-danger");
    /// ```
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "is-success",
            Severity::Failed => "is-danger",
            Severity::Warning => "is-warning",
            Severity::Primary => "is-primary",
            Severity::Link => "is-link",
            Severity::Info => "is-info",
            Severity::Dark => "is-dark",
        }
    }

    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Failed => "failed",
            Severity::Warning => "warning",
            Severity::Primary => "primary",
            Severity::Link => "link",
            Severity::Info => "info",
            Severity::Dark => "dark",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// A user-visible status notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashMessage {
    /// Text shown to the user.
    pub text: String,
    /// Visual category.
    pub severity: Severity,
}

impl FlashMessage {
    /// Creates a new message.
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }

    #[inline]
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Success)
    }

    #[inline]
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Warning)
    }

    #[inline]
    pub fn failed(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Failed)
    }
}

/// Identity of a queued flash entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlashId(u64);

impl FlashId {
    pub(crate) fn next() -> Self {
        FlashId(FLASH_SEQ.fetch_add(1, AtomicOrdering::Relaxed))
    }

    /// Raw numeric value (stable for the life of the process).
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for FlashId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "flash-{}", self.0)
    }
}

/// A message occupying a position in the queue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashEntry {
    /// Identity used for dismissal and expiry.
    pub id: FlashId,
    /// The message itself.
    pub message: FlashMessage,
}

impl FlashEntry {
    pub(crate) fn new(message: FlashMessage) -> Self {
        Self {
            id: FlashId::next(),
            message,
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.message.text
    }

    #[inline]
    pub fn severity(&self) -> Severity {
        self.message.severity
    }
}
