use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::scheduler::{Scheduler, TaskHandle};
use super::subscription::{Subscribers, Subscription};

struct ScrollInner {
    offset: Cell<f64>,
    latest: Cell<f64>,
    // Doubles as the "scheduled" flag: `Some` while a frame is pending.
    pending_frame: RefCell<Option<TaskHandle>>,
    scheduler: Rc<dyn Scheduler>,
    listeners: Subscribers<f64>,
}

/// Vertical scroll offset shared by every consumer, flushed at most once per
/// animation frame.
#[derive(Clone)]
pub struct ScrollSignal {
    inner: Rc<ScrollInner>,
}

impl PartialEq for ScrollSignal {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ScrollSignal {
    pub fn new(scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            inner: Rc::new(ScrollInner {
                offset: Cell::new(0.0),
                latest: Cell::new(0.0),
                pending_frame: RefCell::new(None),
                scheduler,
                listeners: Subscribers::new(),
            }),
        }
    }

    /// Last flushed offset; may lag the real position by one frame.
    pub fn current_offset(&self) -> f64 {
        self.inner.offset.get()
    }

    pub fn subscribe(&self, listener: impl Fn(&f64) + 'static) -> Subscription {
        self.inner.listeners.subscribe(listener)
    }

    /// Feeds a raw scroll position. Events arriving while a frame is already
    /// pending only overwrite the value that frame will publish.
    pub fn record(&self, offset: f64) {
        let inner = &self.inner;
        inner.latest.set(offset.max(0.0));
        if inner.pending_frame.borrow().is_some() {
            return;
        }

        let weak: Weak<ScrollInner> = Rc::downgrade(inner);
        let handle = inner.scheduler.request_frame(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.flush();
            }
        }));
        *inner.pending_frame.borrow_mut() = Some(handle);
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.len()
    }
}

impl ScrollInner {
    fn flush(&self) {
        if let Some(handle) = self.pending_frame.borrow_mut().take() {
            handle.forget();
        }
        let offset = self.latest.get();
        self.offset.set(offset);
        self.listeners.notify(&offset);
    }
}

/// Window `scroll` listener feeding a [`ScrollSignal`]. Removed on drop.
pub struct WindowScrollListener {
    window: web_sys::Window,
    callback: Closure<dyn FnMut()>,
}

impl Drop for WindowScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
    }
}

/// Binds the browser scroll event. Returns `None` when there is no window to
/// listen to; the offset then stays at zero.
pub fn listen_window(signal: &ScrollSignal) -> Option<WindowScrollListener> {
    let Some(window) = web_sys::window() else {
        warn!("No window available, scroll offset fixed at 0");
        return None;
    };

    let callback = {
        let signal = signal.clone();
        let window = window.clone();
        Closure::wrap(Box::new(move || {
            signal.record(window.scroll_y().unwrap_or(0.0));
        }) as Box<dyn FnMut()>)
    };

    if let Err(e) = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
        warn!("Could not listen for scroll events: {:?}", e);
        return None;
    }

    // A page restored mid-scroll should not wait for the first event.
    signal.record(window.scroll_y().unwrap_or(0.0));
    Some(WindowScrollListener { window, callback })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::scheduler::testing::ManualScheduler;

    fn signal() -> (ManualScheduler, ScrollSignal) {
        let scheduler = ManualScheduler::new();
        let signal = ScrollSignal::new(Rc::new(scheduler.clone()));
        (scheduler, signal)
    }

    #[test]
    fn events_within_one_frame_coalesce_to_the_last_offset() {
        let (scheduler, signal) = signal();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let _sub = {
            let calls = calls.clone();
            signal.subscribe(move |offset| calls.borrow_mut().push(*offset))
        };

        for i in 1..=100 {
            signal.record(f64::from(i) * 7.0);
        }
        assert_eq!(scheduler.pending_frames(), 1);
        assert!(calls.borrow().is_empty());

        scheduler.run_frame();
        assert_eq!(*calls.borrow(), vec![700.0]);
        assert_eq!(signal.current_offset(), 700.0);
    }

    #[test]
    fn each_frame_publishes_at_most_once() {
        let (scheduler, signal) = signal();
        let count = Rc::new(Cell::new(0));
        let _sub = {
            let count = count.clone();
            signal.subscribe(move |_| count.set(count.get() + 1))
        };

        signal.record(10.0);
        scheduler.run_frame();
        scheduler.run_frame();
        signal.record(20.0);
        signal.record(30.0);
        scheduler.run_frame();

        assert_eq!(count.get(), 2);
        assert_eq!(signal.current_offset(), 30.0);
    }

    #[test]
    fn reads_lag_until_the_frame_fires() {
        let (scheduler, signal) = signal();
        signal.record(120.0);
        assert_eq!(signal.current_offset(), 0.0);
        scheduler.run_frame();
        assert_eq!(signal.current_offset(), 120.0);
    }

    #[test]
    fn unsubscribing_does_not_affect_other_subscribers() {
        let (scheduler, signal) = signal();
        let kept = Rc::new(Cell::new(0.0));
        let _kept_sub = {
            let kept = kept.clone();
            signal.subscribe(move |offset| kept.set(*offset))
        };
        let mut dropped = signal.subscribe(|_| {});
        assert_eq!(signal.subscriber_count(), 2);

        signal.record(50.0);
        dropped.dispose();
        dropped.dispose();
        scheduler.run_frame();

        assert_eq!(kept.get(), 50.0);
        assert_eq!(signal.subscriber_count(), 1);
    }

    #[test]
    fn negative_overscroll_clamps_to_zero() {
        let (scheduler, signal) = signal();
        signal.record(-35.0);
        scheduler.run_frame();
        assert_eq!(signal.current_offset(), 0.0);
    }
}
