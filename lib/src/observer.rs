//! Hooks for watching a run without affecting it.

use crate::core::FirstOccurrence;

/// Receives progress notifications from the tracker.
///
/// Notifications are observational only; nothing an observer does can change
/// the tracked result.
pub trait Observer {
    /// A lemma was seen for the first time.
    fn on_new_lemma(&mut self, _record: &FirstOccurrence) {}

    /// A page had no extractable text and contributed no tokens.
    fn on_empty_page(&mut self, _page: usize) {}
}

/// Ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Observer for Silent {}
