use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex, MutexGuard,
    },
    time::Duration,
};

use chrono::{DateTime, TimeDelta, Utc};
use leptos::prelude::*;

use super::scheduler::Scheduler;

/// Where a [`TransientFlag`] publishes its on/off state.
///
/// In the page this is a signal so the pill re-renders; headless callers can
/// use a plain atomic.
pub trait FlagStore: Clone + Send + Sync + 'static {
    fn active(&self) -> bool;
    fn set_active(&self, active: bool);
}

impl FlagStore for RwSignal<bool> {
    fn active(&self) -> bool {
        self.try_get_untracked().unwrap_or(false)
    }

    fn set_active(&self, active: bool) {
        // the owning view may already be gone during cleanup
        _ = self.try_set(active);
    }
}

impl FlagStore for Arc<AtomicBool> {
    fn active(&self) -> bool {
        AtomicBool::load(self, Ordering::SeqCst)
    }

    fn set_active(&self, active: bool) {
        AtomicBool::store(self, active, Ordering::SeqCst);
    }
}

struct TimerState<H> {
    // bumped on every mark/reset so a stale timer can tell it lost
    generation: u64,
    pending: Option<H>,
    expires_at: Option<DateTime<Utc>>,
}

/// A boolean that switches itself back off after a fixed window.
///
/// Idle -> Active on [`mark_active`](Self::mark_active), Active -> Idle when the
/// window runs out or on [`reset`](Self::reset). Marking again while active
/// restarts the window; at most one reset timer is pending at a time.
pub struct TransientFlag<S: Scheduler, F> {
    scheduler: S,
    store: F,
    duration: Duration,
    timer: Arc<Mutex<TimerState<S::Handle>>>,
}

impl<S, F> Clone for TransientFlag<S, F>
where
    S: Scheduler + Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            scheduler: self.scheduler.clone(),
            store: self.store.clone(),
            duration: self.duration,
            timer: Arc::clone(&self.timer),
        }
    }
}

impl<S: Scheduler, F: FlagStore> TransientFlag<S, F> {
    pub fn new(scheduler: S, store: F, duration: Duration) -> Self {
        store.set_active(false);
        Self {
            scheduler,
            store,
            duration,
            timer: Arc::new(Mutex::new(TimerState {
                generation: 0,
                pending: None,
                expires_at: None,
            })),
        }
    }

    pub fn is_active(&self) -> bool {
        self.store.active()
    }

    /// When the current window closes, or `None` while idle.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.lock().expires_at
    }

    pub fn mark_active(&self) {
        let now = self.scheduler.now();
        let Some(expires_at) = TimeDelta::from_std(self.duration)
            .ok()
            .and_then(|window| now.checked_add_signed(window))
        else {
            log::warn!(
                "Indicator window of {:?} can't be timed, clearing it now",
                self.duration
            );
            self.reset();
            return;
        };
        let (generation, superseded) = {
            let mut timer = self.lock();
            timer.generation += 1;
            timer.expires_at = Some(expires_at);
            (timer.generation, timer.pending.take())
        };
        if let Some(handle) = superseded {
            self.scheduler.cancel(handle);
        }
        self.store.set_active(true);

        let revert = {
            let timer = Arc::clone(&self.timer);
            let store = self.store.clone();
            move || settle(&timer, &store, generation)
        };
        match self.scheduler.schedule(self.duration, Box::new(revert)) {
            Ok(handle) => {
                let mut timer = self.lock();
                if timer.generation == generation {
                    timer.pending = Some(handle);
                } else {
                    drop(timer);
                    self.scheduler.cancel(handle);
                }
            }
            Err(err) => {
                log::warn!("Couldn't schedule indicator reset, clearing it now: {err}");
                settle(&self.timer, &self.store, generation);
            }
        }
    }

    /// Drops straight back to idle and cancels any pending reset.
    ///
    /// Call this when the owning view goes away.
    pub fn reset(&self) {
        let pending = {
            let mut timer = self.lock();
            timer.generation += 1;
            timer.expires_at = None;
            timer.pending.take()
        };
        if let Some(handle) = pending {
            self.scheduler.cancel(handle);
        }
        self.store.set_active(false);
    }

    fn lock(&self) -> MutexGuard<'_, TimerState<S::Handle>> {
        self.timer
            .lock()
            .expect("should be able to lock indicator timer")
    }
}

fn settle<H, F: FlagStore>(timer: &Mutex<TimerState<H>>, store: &F, generation: u64) {
    {
        let mut timer = timer
            .lock()
            .expect("should be able to lock indicator timer");
        if timer.generation != generation {
            return;
        }
        timer.pending = None;
        timer.expires_at = None;
    }
    store.set_active(false);
}

#[cfg(test)]
mod tests {
    use super::super::testing::ManualScheduler;
    use super::*;

    fn flag(scheduler: &ManualScheduler) -> TransientFlag<ManualScheduler, Arc<AtomicBool>> {
        TransientFlag::new(
            scheduler.clone(),
            Arc::new(AtomicBool::new(false)),
            Duration::from_millis(2000),
        )
    }

    #[test]
    fn test_starts_idle() {
        let scheduler = ManualScheduler::default();
        let flag = flag(&scheduler);
        assert!(!flag.is_active());
        assert_eq!(flag.expires_at(), None);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_new_clears_stale_store() {
        let scheduler = ManualScheduler::default();
        let store = Arc::new(AtomicBool::new(true));
        let flag = TransientFlag::new(scheduler, store.clone(), Duration::from_millis(2000));
        assert!(!flag.is_active());
        assert!(!store.active());
    }

    #[test]
    fn test_single_window() {
        let scheduler = ManualScheduler::default();
        let flag = flag(&scheduler);

        flag.mark_active();
        assert!(flag.is_active());

        scheduler.advance_to_ms(1000);
        assert!(flag.is_active());

        scheduler.advance_to_ms(2001);
        assert!(!flag.is_active());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_reverts_exactly_at_deadline() {
        let scheduler = ManualScheduler::default();
        let flag = flag(&scheduler);

        flag.mark_active();
        scheduler.advance_to_ms(1999);
        assert!(flag.is_active());
        scheduler.advance_to_ms(2000);
        assert!(!flag.is_active());
    }

    #[test]
    fn test_retrigger_restarts_window() {
        let scheduler = ManualScheduler::default();
        let flag = flag(&scheduler);

        flag.mark_active();
        scheduler.advance_to_ms(1000);
        flag.mark_active();
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance_to_ms(2500);
        assert!(flag.is_active());

        scheduler.advance_to_ms(3001);
        assert!(!flag.is_active());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_stale_timer_is_ignored_when_cancel_does_nothing() {
        let scheduler = ManualScheduler::ignoring_cancel();
        let flag = flag(&scheduler);

        flag.mark_active();
        scheduler.advance_to_ms(1000);
        flag.mark_active();
        // both timers are still queued, the first is stale
        assert_eq!(scheduler.pending(), 2);

        scheduler.advance_to_ms(2000);
        assert!(flag.is_active());
        scheduler.advance_to_ms(2999);
        assert!(flag.is_active());
        scheduler.advance_to_ms(3000);
        assert!(!flag.is_active());
    }

    #[test]
    fn test_rapid_retriggers_leave_one_timer() {
        let scheduler = ManualScheduler::default();
        let flag = flag(&scheduler);

        for _ in 0..5 {
            flag.mark_active();
            scheduler.advance_ms(300);
        }
        assert_eq!(scheduler.pending(), 1);
        // last mark was at 1200
        scheduler.advance_to_ms(3199);
        assert!(flag.is_active());
        scheduler.advance_to_ms(3200);
        assert!(!flag.is_active());
    }

    #[test]
    fn test_expires_at_tracks_latest_mark() {
        let scheduler = ManualScheduler::default();
        let flag = flag(&scheduler);

        flag.mark_active();
        assert_eq!(flag.expires_at(), DateTime::from_timestamp_millis(2000));

        scheduler.advance_to_ms(1000);
        flag.mark_active();
        assert_eq!(flag.expires_at(), DateTime::from_timestamp_millis(3000));

        scheduler.advance_to_ms(3000);
        assert_eq!(flag.expires_at(), None);
    }

    #[test]
    fn test_reset_cancels_pending_timer() {
        let scheduler = ManualScheduler::default();
        let flag = flag(&scheduler);

        flag.mark_active();
        scheduler.advance_to_ms(500);
        flag.reset();
        assert!(!flag.is_active());
        assert_eq!(flag.expires_at(), None);
        assert_eq!(scheduler.pending(), 0);

        // nothing left to fire
        scheduler.advance_to_ms(5000);
        assert!(!flag.is_active());
    }

    #[test]
    fn test_reset_beats_uncancelled_timer() {
        let scheduler = ManualScheduler::ignoring_cancel();
        let flag = flag(&scheduler);

        flag.mark_active();
        flag.reset();
        // a later activation must not be cut short by the pre-reset timer
        scheduler.advance_to_ms(1500);
        flag.mark_active();
        scheduler.advance_to_ms(2000);
        assert!(flag.is_active());
        scheduler.advance_to_ms(3500);
        assert!(!flag.is_active());
    }

    #[test]
    fn test_reset_while_idle_is_harmless() {
        let scheduler = ManualScheduler::default();
        let flag = flag(&scheduler);
        flag.reset();
        flag.reset();
        assert!(!flag.is_active());
        flag.mark_active();
        assert!(flag.is_active());
    }

    #[test]
    fn test_refused_schedule_never_sticks_active() {
        let scheduler = ManualScheduler::refusing();
        let flag = flag(&scheduler);

        flag.mark_active();
        assert!(!flag.is_active());
        assert_eq!(flag.expires_at(), None);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_clones_share_state() {
        let scheduler = ManualScheduler::default();
        let flag = flag(&scheduler);
        let other = flag.clone();

        other.mark_active();
        assert!(flag.is_active());
        assert_eq!(flag.expires_at(), other.expires_at());
    }

    #[test]
    fn test_untimeable_window_never_sticks_active() {
        let scheduler = ManualScheduler::default();
        let flag = TransientFlag::new(
            scheduler.clone(),
            Arc::new(AtomicBool::new(false)),
            Duration::MAX,
        );

        flag.mark_active();
        assert!(!flag.is_active());
        assert_eq!(flag.expires_at(), None);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_active_always_has_expiry() {
        let scheduler = ManualScheduler::default();
        let flag = flag(&scheduler);

        for _ in 0..3 {
            flag.mark_active();
            assert!(flag.is_active());
            assert!(flag.expires_at().is_some());
            scheduler.advance_ms(700);
        }
    }

    #[test]
    fn test_signal_store_follows_flag() {
        let owner = Owner::new();
        owner.with(|| {
            let scheduler = ManualScheduler::default();
            let copied = RwSignal::new(false);
            let flag = TransientFlag::new(scheduler.clone(), copied, Duration::from_millis(2000));

            flag.mark_active();
            assert!(copied.get_untracked());
            scheduler.advance_to_ms(2000);
            assert!(!copied.get_untracked());
        });
    }

    #[test]
    fn test_owner_cleanup_disarms_pending_timer() {
        let scheduler = ManualScheduler::ignoring_cancel();
        let owner = Owner::new();
        let flag = owner.with(|| {
            let copied = RwSignal::new(false);
            let flag = TransientFlag::new(scheduler.clone(), copied, Duration::from_millis(2000));
            let teardown = flag.clone();
            on_cleanup(move || teardown.reset());
            flag
        });

        flag.mark_active();
        assert!(flag.is_active());
        scheduler.advance_to_ms(500);

        owner.cleanup();
        assert!(!flag.is_active());
        assert_eq!(flag.expires_at(), None);

        // the uncancelled timer still fires but must not touch anything
        scheduler.advance_to_ms(5000);
        assert_eq!(scheduler.pending(), 0);
        assert!(!flag.is_active());
        assert_eq!(flag.expires_at(), None);
    }
}
