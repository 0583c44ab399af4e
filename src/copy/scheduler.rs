use std::time::Duration;

use chrono::{DateTime, Utc};
use leptos::prelude::{set_timeout_with_handle, TimeoutHandle};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("host refused to schedule timer: {0}")]
pub struct SchedulerError(pub String);

/// Host timer capability: run a callback later, or take that back.
///
/// Callbacks and handles are `Send` so the owning flag can be torn down from a
/// reactive cleanup.
pub trait Scheduler {
    type Handle: Send + 'static;

    fn now(&self) -> DateTime<Utc>;

    fn schedule(
        &self,
        delay: Duration,
        callback: Box<dyn FnOnce() + Send + 'static>,
    ) -> Result<Self::Handle, SchedulerError>;

    /// Cancelling a handle that already fired is a no-op.
    fn cancel(&self, handle: Self::Handle);
}

/// Browser `setTimeout`/`clearTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimerScheduler;

impl Scheduler for TimerScheduler {
    type Handle = TimeoutHandle;

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn schedule(
        &self,
        delay: Duration,
        callback: Box<dyn FnOnce() + Send + 'static>,
    ) -> Result<Self::Handle, SchedulerError> {
        // setTimeout takes a signed 32-bit millisecond delay
        if i32::try_from(delay.as_millis()).is_err() {
            return Err(SchedulerError(format!(
                "delay of {} ms is too long for setTimeout",
                delay.as_millis()
            )));
        }
        set_timeout_with_handle(callback, delay).map_err(|e| SchedulerError(format!("{e:?}")))
    }

    fn cancel(&self, handle: Self::Handle) {
        handle.clear();
    }
}
