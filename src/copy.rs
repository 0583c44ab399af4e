//! Copy-to-clipboard with a short-lived "copied" indicator.
//!
//! A [`CopyAction`] writes a value through a [`ClipboardWriter`] and, only if
//! the write succeeded, marks its [`TransientFlag`] active. The flag reverts on
//! its own once the feedback window elapses.

mod clipboard;
mod flag;
pub mod presentation;
mod scheduler;
#[cfg(test)]
pub(crate) mod testing;

use std::time::Duration;

pub use clipboard::{ClipboardError, ClipboardWriter, DomClipboard};
pub use flag::{FlagStore, TransientFlag};
pub use scheduler::{Scheduler, SchedulerError, TimerScheduler};

/// How long the "copied" indicator stays up unless content overrides it.
pub const DEFAULT_FEEDBACK: Duration = Duration::from_millis(2000);

pub struct CopyAction<C, S, F>
where
    S: Scheduler,
{
    clipboard: C,
    flag: TransientFlag<S, F>,
}

impl<C, S, F> Clone for CopyAction<C, S, F>
where
    C: Clone,
    S: Scheduler + Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            clipboard: self.clipboard.clone(),
            flag: self.flag.clone(),
        }
    }
}

impl<C, S, F> CopyAction<C, S, F>
where
    C: ClipboardWriter,
    S: Scheduler,
    F: FlagStore,
{
    pub fn new(clipboard: C, flag: TransientFlag<S, F>) -> Self {
        Self { clipboard, flag }
    }

    pub fn flag(&self) -> &TransientFlag<S, F> {
        &self.flag
    }

    /// Copies `value` and lights the indicator.
    ///
    /// A failed write is logged and handed back; the indicator is left alone
    /// so it never claims a copy that didn't happen.
    pub fn trigger(&self, value: &str) -> Result<(), ClipboardError> {
        if let Err(err) = self.clipboard.write_text(value) {
            log::error!("Copy failed: {err}");
            return Err(err);
        }
        self.flag.mark_active();
        Ok(())
    }
}
