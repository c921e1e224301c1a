//! # Runtime configuration.
//!
//! Provides [`Config`] with the settings for the flash queue ([`FlashConfig`])
//! and the autosave editor ([`EditorConfig`]).
//!
//! ## Sentinel values
//! The flash timeout is usually handed over as a signed millisecond count.
//! [`FlashTimeout::from_millis`] decodes it:
//! - `0` → disabled (new messages are dropped)
//! - `< 0` → persist until dismissed
//! - `> 0` → removed after that many milliseconds

use std::time::Duration;

/// How long a flash message stays visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashTimeout {
    /// Messages are not shown at all.
    Disabled,
    /// Messages stay until explicitly dismissed.
    Persist,
    /// Messages are removed after the given delay.
    After(Duration),
}

impl FlashTimeout {
    /// Decodes the signed millisecond convention (`0` off, `-1` forever).
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    /// use flashkit::FlashTimeout;
    ///
    /// assert_eq!(FlashTimeout::from_millis(0), FlashTimeout::Disabled);
    /// assert_eq!(FlashTimeout::from_millis(-1), FlashTimeout::Persist);
    /// assert_eq!(
    ///     FlashTimeout::from_millis(250),
    ///     FlashTimeout::After(Duration::from_millis(250))
    /// );
    /// ```
    pub fn from_millis(ms: i64) -> Self {
        match ms {
            0 => FlashTimeout::Disabled,
            ms if ms < 0 => FlashTimeout::Persist,
            ms => FlashTimeout::After(Duration::from_millis(ms.unsigned_abs())),
        }
    }

    /// Encodes back into the signed millisecond convention.
    pub fn as_millis(&self) -> i64 {
        match self {
            FlashTimeout::Disabled => 0,
            FlashTimeout::Persist => -1,
            FlashTimeout::After(d) => d.as_millis().min(i64::MAX as u128) as i64,
        }
    }

    /// Returns the expiry delay, if messages expire at all.
    #[inline]
    pub fn expiry(&self) -> Option<Duration> {
        match self {
            FlashTimeout::After(d) if !d.is_zero() => Some(*d),
            _ => None,
        }
    }

    /// Returns `true` if new messages are dropped.
    #[inline]
    pub fn is_disabled(&self) -> bool {
        match self {
            FlashTimeout::Disabled => true,
            FlashTimeout::After(d) => d.is_zero(),
            FlashTimeout::Persist => false,
        }
    }
}

impl Default for FlashTimeout {
    /// Four seconds.
    fn default() -> Self {
        FlashTimeout::After(Duration::from_millis(4000))
    }
}

/// Settings for a [`FlashQueue`](crate::FlashQueue).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlashConfig {
    /// Visibility of each message (see [`FlashTimeout`]).
    pub timeout: FlashTimeout,
    /// Insert new messages at the head instead of the tail.
    pub prepend: bool,
}

impl FlashConfig {
    /// Builds a config from the signed millisecond convention.
    pub fn from_millis(timeout_ms: i64, prepend: bool) -> Self {
        Self {
            timeout: FlashTimeout::from_millis(timeout_ms),
            prepend,
        }
    }
}

/// Settings for a [`NoteEditor`](crate::NoteEditor).
///
/// ## Field semantics
/// - `autosave_delay`: quiet period after the last edit before saving
/// - `saving_indicator`: how long the "saving" status stays up after a save starts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditorConfig {
    /// Quiet period after the last edit before the note is saved.
    pub autosave_delay: Duration,
    /// How long [`SaveStatus::Saving`](crate::SaveStatus::Saving) stays visible.
    pub saving_indicator: Duration,
}

impl Default for EditorConfig {
    /// Default configuration:
    ///
    /// - `autosave_delay = 1s`
    /// - `saving_indicator = 1s`
    fn default() -> Self {
        Self {
            autosave_delay: Duration::from_millis(1000),
            saving_indicator: Duration::from_millis(1000),
        }
    }
}

/// Top-level configuration bundling every component's settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Flash queue settings.
    pub flash: FlashConfig,
    /// Note editor settings.
    pub editor: EditorConfig,
}
