use gloo_render::request_animation_frame;
use gloo_timers::callback::Timeout;

pub type Task = Box<dyn FnOnce()>;

/// Source of deferred work. The browser implementation is backed by
/// `setTimeout`/`requestAnimationFrame`; tests drive a manual clock.
pub trait Scheduler {
    fn set_timeout(&self, millis: u32, task: Task) -> TaskHandle;
    fn request_frame(&self, task: Task) -> TaskHandle;
}

/// Pending timer or frame. Cancelling is idempotent and dropping cancels.
#[must_use = "dropping a TaskHandle cancels the task"]
pub struct TaskHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TaskHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    /// Lets the task run without keeping the handle around.
    pub fn forget(mut self) {
        self.cancel = None;
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn set_timeout(&self, millis: u32, task: Task) -> TaskHandle {
        let timeout = Timeout::new(millis, task);
        TaskHandle::new(move || drop(timeout))
    }

    fn request_frame(&self, task: Task) -> TaskHandle {
        let frame = request_animation_frame(move |_timestamp| task());
        TaskHandle::new(move || drop(frame))
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ManualScheduler;
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn timers_fire_in_due_order() {
        let scheduler = ManualScheduler::new();
        let order = Rc::new(std::cell::RefCell::new(Vec::new()));

        for (delay, tag) in [(300u32, 'b'), (100, 'a'), (500, 'c')] {
            let order = order.clone();
            scheduler
                .set_timeout(delay, Box::new(move || order.borrow_mut().push(tag)))
                .forget();
        }

        scheduler.advance(400);
        assert_eq!(*order.borrow(), vec!['a', 'b']);
        scheduler.advance(100);
        assert_eq!(*order.borrow(), vec!['a', 'b', 'c']);
    }

    #[test]
    fn cancel_twice_is_harmless() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let mut handle = {
            let fired = fired.clone();
            scheduler.set_timeout(10, Box::new(move || fired.set(true)))
        };

        handle.cancel();
        handle.cancel();
        scheduler.advance(20);

        assert!(!fired.get());
        assert_eq!(scheduler.pending_timers(), 0);
    }

    #[test]
    fn dropped_frame_handle_never_runs() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        {
            let fired = fired.clone();
            let _handle = scheduler.request_frame(Box::new(move || fired.set(true)));
        }
        scheduler.run_frame();
        assert!(!fired.get());
    }
}
