use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener<T> = Rc<dyn Fn(&T)>;

struct Registry<T> {
    next_id: u64,
    listeners: Vec<(u64, Listener<T>)>,
}

/// Listener list shared by the stores. Each `subscribe` hands back a
/// [`Subscription`] that removes exactly that listener.
pub struct Subscribers<T> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T: 'static> Subscribers<T> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.listeners.push((id, Rc::new(listener)));
            id
        };

        let registry: Weak<RefCell<Registry<T>>> = Rc::downgrade(&self.registry);
        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().listeners.retain(|(other, _)| *other != id);
            }
        })
    }

    /// Calls every listener registered at the time of the call. Listeners may
    /// subscribe or dispose while being notified.
    pub fn notify(&self, value: &T) {
        let snapshot: Vec<Listener<T>> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in snapshot {
            listener(value);
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

impl<T: 'static> Default for Subscribers<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle returned by every subscribe/observe call. Disposing is idempotent
/// and also happens on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A handle that owns nothing, used when observation degraded.
    pub fn noop() -> Self {
        Self { release: None }
    }

    pub fn dispose(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}
