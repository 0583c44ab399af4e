//! Test doubles for the clipboard and the timer host.

use std::{
    cell::RefCell,
    rc::Rc,
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

use chrono::{DateTime, Utc};

use super::{ClipboardError, ClipboardWriter, Scheduler, SchedulerError};

struct Timer {
    id: u64,
    due_ms: u64,
    callback: Box<dyn FnOnce() + Send>,
}

#[derive(Default)]
struct Timeline {
    now_ms: u64,
    next_id: u64,
    timers: Vec<Timer>,
    ignore_cancel: bool,
    refuse: bool,
}

/// Simulated clock; timers only fire when the test advances time.
///
/// `Send + Sync` so flags built on it can be handed to reactive cleanups.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Arc<Mutex<Timeline>>,
}

impl ManualScheduler {
    /// `cancel` is accepted but never removes anything.
    pub fn ignoring_cancel() -> Self {
        let s = Self::default();
        s.timeline().ignore_cancel = true;
        s
    }

    /// Every `schedule` call fails.
    pub fn refusing() -> Self {
        let s = Self::default();
        s.timeline().refuse = true;
        s
    }

    pub fn pending(&self) -> usize {
        self.timeline().timers.len()
    }

    pub fn advance_ms(&self, ms: u64) {
        let target = self.timeline().now_ms + ms;
        self.advance_to_ms(target);
    }

    /// Fires every timer due at or before `target`, earliest first.
    pub fn advance_to_ms(&self, target: u64) {
        loop {
            let next = {
                let mut timeline = self.timeline();
                let due = timeline
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due_ms <= target)
                    .min_by_key(|(_, t)| (t.due_ms, t.id))
                    .map(|(i, _)| i);
                due.map(|i| {
                    let timer = timeline.timers.remove(i);
                    timeline.now_ms = timeline.now_ms.max(timer.due_ms);
                    timer.callback
                })
            };
            match next {
                Some(callback) => callback(),
                None => break,
            }
        }
        let mut timeline = self.timeline();
        timeline.now_ms = timeline.now_ms.max(target);
    }

    fn timeline(&self) -> MutexGuard<'_, Timeline> {
        self.inner.lock().expect("should be able to lock timeline")
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u64;

    fn now(&self) -> DateTime<Utc> {
        let ms = self.timeline().now_ms;
        DateTime::from_timestamp_millis(ms as i64).expect("simulated time should be in range")
    }

    fn schedule(
        &self,
        delay: Duration,
        callback: Box<dyn FnOnce() + Send + 'static>,
    ) -> Result<u64, SchedulerError> {
        let mut timeline = self.timeline();
        if timeline.refuse {
            return Err(SchedulerError("timers disabled".to_string()));
        }
        let id = timeline.next_id;
        timeline.next_id += 1;
        let due_ms = timeline.now_ms + delay.as_millis() as u64;
        timeline.timers.push(Timer {
            id,
            due_ms,
            callback,
        });
        Ok(id)
    }

    fn cancel(&self, handle: u64) {
        let mut timeline = self.timeline();
        if !timeline.ignore_cancel {
            timeline.timers.retain(|t| t.id != handle);
        }
    }
}

#[derive(Default)]
struct ClipboardState {
    contents: Option<String>,
    writes: usize,
    failing: bool,
}

/// In-memory clipboard shared by every clone.
#[derive(Clone, Default)]
pub struct FakeClipboard {
    inner: Rc<RefCell<ClipboardState>>,
}

impl FakeClipboard {
    pub fn failing() -> Self {
        let c = Self::default();
        c.set_failing(true);
        c
    }

    pub fn set_failing(&self, failing: bool) {
        self.inner.borrow_mut().failing = failing;
    }

    pub fn contents(&self) -> Option<String> {
        self.inner.borrow().contents.clone()
    }

    pub fn writes(&self) -> usize {
        self.inner.borrow().writes
    }
}

impl ClipboardWriter for FakeClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut state = self.inner.borrow_mut();
        if state.failing {
            return Err(ClipboardError::Rejected);
        }
        state.contents = Some(text.to_string());
        state.writes += 1;
        Ok(())
    }
}
