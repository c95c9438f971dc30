use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, info, warn};

use super::scheduler::{Scheduler, TaskHandle};
use super::storage::KeyValueStore;
use super::subscription::{Subscribers, Subscription};
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplashState {
    Uninitialized,
    Showing,
    Dismissed,
}

struct SplashInner {
    state: Cell<SplashState>,
    duration_ms: u32,
    session: Option<Rc<dyn KeyValueStore>>,
    scheduler: Rc<dyn Scheduler>,
    timer: RefCell<Option<TaskHandle>>,
    on_complete: RefCell<Option<Box<dyn FnOnce()>>>,
    listeners: Subscribers<SplashState>,
}

/// Boot sequence that shows the intro once per session.
///
/// `start` either dismisses straight away (the session flag is set) or shows
/// the splash and arms a timer. When the timer fires the flag is written and
/// the completion callback runs. `teardown` cancels a pending timer.
pub struct SplashController {
    inner: Rc<SplashInner>,
}

impl SplashController {
    pub fn new(
        duration_ms: u32,
        session: Option<Rc<dyn KeyValueStore>>,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        Self {
            inner: Rc::new(SplashInner {
                state: Cell::new(SplashState::Uninitialized),
                duration_ms,
                session,
                scheduler,
                timer: RefCell::new(None),
                on_complete: RefCell::new(None),
                listeners: Subscribers::new(),
            }),
        }
    }

    /// Runs once when the timer expires. Never runs for a skipped splash.
    pub fn on_complete(&self, callback: impl FnOnce() + 'static) {
        *self.inner.on_complete.borrow_mut() = Some(Box::new(callback));
    }

    pub fn subscribe(&self, listener: impl Fn(&SplashState) + 'static) -> Subscription {
        self.inner.listeners.subscribe(listener)
    }

    pub fn state(&self) -> SplashState {
        self.inner.state.get()
    }

    pub fn duration_ms(&self) -> u32 {
        self.inner.duration_ms
    }

    /// Calling `start` again after the first time is a no-op.
    pub fn start(&self) -> SplashState {
        if self.state() != SplashState::Uninitialized {
            return self.state();
        }
        let inner = &self.inner;

        if inner.already_shown() {
            info!("Splash already shown this session, skipping");
            inner.transition(SplashState::Dismissed);
            return SplashState::Dismissed;
        }

        inner.transition(SplashState::Showing);
        let weak: Weak<SplashInner> = Rc::downgrade(inner);
        let handle = inner.scheduler.set_timeout(
            inner.duration_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.finish();
                }
            }),
        );
        *inner.timer.borrow_mut() = Some(handle);
        debug!("Splash showing for {} ms", self.duration_ms());
        SplashState::Showing
    }

    pub fn teardown(&self) {
        if let Some(mut timer) = self.inner.timer.borrow_mut().take() {
            debug!("Splash torn down before completion");
            timer.cancel();
        }
        self.inner.on_complete.borrow_mut().take();
    }
}

impl Drop for SplashController {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl SplashInner {
    fn already_shown(&self) -> bool {
        let Some(session) = self.session.as_ref() else {
            return false;
        };
        match session.get(config::SPLASH_SEEN_KEY) {
            Ok(flag) => matches!(flag.as_deref(), Some(value) if !value.is_empty()),
            Err(e) => {
                warn!("Could not read splash flag: {}", e);
                false
            }
        }
    }

    fn finish(&self) {
        // Terminal-state guard: completion happens at most once.
        if self.state.get() != SplashState::Showing {
            return;
        }
        if let Some(timer) = self.timer.borrow_mut().take() {
            timer.forget();
        }

        if let Some(session) = self.session.as_ref() {
            if let Err(e) = session.set(config::SPLASH_SEEN_KEY, "true") {
                warn!("Could not record splash flag: {}", e);
            }
        }

        self.transition(SplashState::Dismissed);
        let callback = self.on_complete.borrow_mut().take();
        if let Some(callback) = callback {
            callback();
        }
        info!("Splash complete");
    }

    fn transition(&self, next: SplashState) {
        self.state.set(next);
        self.listeners.notify(&next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::scheduler::testing::ManualScheduler;
    use crate::state::storage::testing::FailingStorage;
    use crate::state::storage::MemoryStorage;

    struct Harness {
        scheduler: ManualScheduler,
        session: Rc<MemoryStorage>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                scheduler: ManualScheduler::new(),
                session: Rc::new(MemoryStorage::new()),
            }
        }

        fn controller(&self, duration_ms: u32) -> (SplashController, Rc<Cell<u32>>) {
            let controller = SplashController::new(
                duration_ms,
                Some(self.session.clone()),
                Rc::new(self.scheduler.clone()),
            );
            let completions = Rc::new(Cell::new(0));
            {
                let completions = completions.clone();
                controller.on_complete(move || completions.set(completions.get() + 1));
            }
            (controller, completions)
        }
    }

    #[test]
    fn completes_once_no_earlier_than_duration() {
        let harness = Harness::new();
        let (controller, completions) = harness.controller(3500);

        assert_eq!(controller.start(), SplashState::Showing);
        harness.scheduler.advance(3499);
        assert_eq!(completions.get(), 0);
        assert_eq!(controller.state(), SplashState::Showing);

        harness.scheduler.advance(1);
        assert_eq!(completions.get(), 1);
        assert_eq!(controller.state(), SplashState::Dismissed);

        harness.scheduler.advance(10_000);
        assert_eq!(completions.get(), 1);
    }

    #[test]
    fn teardown_before_expiry_suppresses_completion() {
        let harness = Harness::new();
        let (controller, completions) = harness.controller(3500);

        controller.start();
        harness.scheduler.advance(1000);
        controller.teardown();
        controller.teardown();
        harness.scheduler.advance(5000);

        assert_eq!(completions.get(), 0);
        assert_eq!(harness.scheduler.pending_timers(), 0);
        assert_eq!(harness.session.get(config::SPLASH_SEEN_KEY), Ok(None));
    }

    #[test]
    fn dropping_the_controller_cancels_the_timer() {
        let harness = Harness::new();
        let (controller, completions) = harness.controller(3500);
        controller.start();
        drop(controller);

        harness.scheduler.advance(4000);
        assert_eq!(completions.get(), 0);
        assert_eq!(harness.scheduler.pending_timers(), 0);
    }

    #[test]
    fn first_visit_then_reload_skips_splash() {
        let harness = Harness::new();
        let (first, completions) = harness.controller(3500);
        assert_eq!(first.start(), SplashState::Showing);
        harness.scheduler.advance(3500);
        assert_eq!(completions.get(), 1);
        drop(first);

        let (second, second_completions) = harness.controller(3500);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let seen = seen.clone();
            second.subscribe(move |state| seen.borrow_mut().push(*state))
        };
        assert_eq!(second.start(), SplashState::Dismissed);
        assert_eq!(*seen.borrow(), vec![SplashState::Dismissed]);

        harness.scheduler.advance(10_000);
        assert_eq!(second_completions.get(), 0);
        assert_eq!(harness.scheduler.pending_timers(), 0);
    }

    #[test]
    fn any_non_empty_flag_counts_as_seen() {
        let harness = Harness::new();
        harness.session.set(config::SPLASH_SEEN_KEY, "1").unwrap();
        let (controller, completions) = harness.controller(3500);
        assert_eq!(controller.start(), SplashState::Dismissed);
        assert_eq!(completions.get(), 0);

        let harness = Harness::new();
        harness.session.set(config::SPLASH_SEEN_KEY, "").unwrap();
        let (controller, _) = harness.controller(3500);
        assert_eq!(controller.start(), SplashState::Showing);
    }

    #[test]
    fn start_is_idempotent() {
        let harness = Harness::new();
        let (controller, completions) = harness.controller(500);
        controller.start();
        controller.start();
        assert_eq!(harness.scheduler.pending_timers(), 1);

        harness.scheduler.advance(500);
        assert_eq!(controller.start(), SplashState::Dismissed);
        assert_eq!(completions.get(), 1);
    }

    #[test]
    fn state_never_reverts_after_dismissal() {
        let harness = Harness::new();
        let (controller, _) = harness.controller(100);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let seen = seen.clone();
            controller.subscribe(move |state| seen.borrow_mut().push(*state))
        };

        controller.start();
        harness.scheduler.advance(100);
        controller.teardown();
        controller.start();

        assert_eq!(
            *seen.borrow(),
            vec![SplashState::Showing, SplashState::Dismissed]
        );
        assert_eq!(controller.state(), SplashState::Dismissed);
    }

    #[test]
    fn unavailable_session_storage_still_shows_and_completes() {
        let scheduler = ManualScheduler::new();
        let controller = SplashController::new(
            200,
            Some(Rc::new(FailingStorage)),
            Rc::new(scheduler.clone()),
        );
        let done = Rc::new(Cell::new(false));
        {
            let done = done.clone();
            controller.on_complete(move || done.set(true));
        }

        assert_eq!(controller.start(), SplashState::Showing);
        scheduler.advance(200);
        assert!(done.get());
        assert_eq!(controller.state(), SplashState::Dismissed);
    }
}
