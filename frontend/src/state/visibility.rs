use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::subscription::Subscription;

pub type SectionId = u64;

#[derive(Debug, Error)]
pub enum ObserveError {
    #[error("no window to observe against")]
    NoWindow,
    #[error("IntersectionObserver unavailable: {0}")]
    Unsupported(String),
}

/// Whatever can tell whether a target is on screen.
pub trait ViewportProbe {
    type Target;

    /// Synchronous check used at observe time. `None` means unknown.
    fn is_in_view(&self, target: &Self::Target, threshold: f64) -> Option<bool>;

    fn watch(
        &self,
        target: &Self::Target,
        threshold: f64,
        on_change: Rc<dyn Fn(bool)>,
    ) -> Result<Subscription, ObserveError>;
}

type Sections = Rc<RefCell<HashMap<SectionId, bool>>>;

/// Per-section "revealed" flags. Each observed section owns its own entry
/// and only its observer writes to it.
pub struct VisibilityTrigger<P: ViewportProbe> {
    probe: P,
    threshold: f64,
    sections: Sections,
    next_id: Cell<SectionId>,
}

impl<P: ViewportProbe> VisibilityTrigger<P> {
    pub fn new(probe: P, threshold: f64) -> Self {
        Self {
            probe,
            threshold,
            sections: Rc::new(RefCell::new(HashMap::new())),
            next_id: Cell::new(0),
        }
    }

    pub fn observe(
        &self,
        target: &P::Target,
        callback: impl Fn(bool) + 'static,
    ) -> SectionSubscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.sections.borrow_mut().insert(id, false);

        let deliver: Rc<dyn Fn(bool)> = {
            let sections = Rc::downgrade(&self.sections);
            Rc::new(move |visible: bool| {
                let Some(sections) = sections.upgrade() else {
                    return;
                };
                let changed = match sections.borrow_mut().get_mut(&id) {
                    Some(flag) if *flag != visible => {
                        *flag = visible;
                        true
                    }
                    _ => false,
                };
                if changed {
                    callback(visible);
                }
            })
        };

        if self.probe.is_in_view(target, self.threshold) == Some(true) {
            deliver(true);
        }

        let watch = match self.probe.watch(target, self.threshold, deliver.clone()) {
            Ok(watch) => watch,
            Err(e) => {
                warn!("Section {} treated as always visible: {}", id, e);
                deliver(true);
                Subscription::noop()
            }
        };

        debug!("Section {} observed ({} active)", id, self.observed_count());
        SectionSubscription {
            id,
            sections: Rc::downgrade(&self.sections),
            watch,
        }
    }

    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.sections.borrow().get(&id).copied().unwrap_or(false)
    }

    pub fn observed_count(&self) -> usize {
        self.sections.borrow().len()
    }
}

/// Observation of one section. `dispose` (or drop) stops watching and removes
/// the section's flag.
#[must_use = "dropping a SectionSubscription stops observing"]
pub struct SectionSubscription {
    id: SectionId,
    sections: Weak<RefCell<HashMap<SectionId, bool>>>,
    watch: Subscription,
}

impl SectionSubscription {
    pub fn id(&self) -> SectionId {
        self.id
    }

    pub fn dispose(&mut self) {
        self.watch.dispose();
        if let Some(sections) = self.sections.upgrade() {
            sections.borrow_mut().remove(&self.id);
        }
    }
}

impl Drop for SectionSubscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Fraction of an element's height inside a viewport of the given height.
pub fn visible_fraction(top: f64, bottom: f64, viewport_height: f64) -> f64 {
    let height = bottom - top;
    if height <= 0.0 {
        return if top >= 0.0 && top <= viewport_height { 1.0 } else { 0.0 };
    }
    let visible = bottom.min(viewport_height) - top.max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

/// Shared by the initial check and the observer callback so both agree on
/// what counts as visible.
pub fn meets_threshold(fraction: f64, threshold: f64) -> bool {
    fraction > 0.0 && fraction >= threshold
}

/// Browser probe backed by `IntersectionObserver`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomViewport;

impl ViewportProbe for DomViewport {
    type Target = Element;

    fn is_in_view(&self, target: &Element, threshold: f64) -> Option<bool> {
        let viewport_height = web_sys::window()?.inner_height().ok()?.as_f64()?;
        let rect = target.get_bounding_client_rect();
        let fraction = visible_fraction(rect.top(), rect.bottom(), viewport_height);
        Some(meets_threshold(fraction, threshold))
    }

    fn watch(
        &self,
        target: &Element,
        threshold: f64,
        on_change: Rc<dyn Fn(bool)>,
    ) -> Result<Subscription, ObserveError> {
        if web_sys::window().is_none() {
            return Err(ObserveError::NoWindow);
        }

        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            let latest = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .last();
            if let Some(entry) = latest {
                on_change(meets_threshold(entry.intersection_ratio(), threshold));
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| ObserveError::Unsupported(format!("{:?}", e)))?;
        observer.observe(target);
        debug!("Observing section <{}>", target.tag_name().to_lowercase());

        let target = target.clone();
        Ok(Subscription::new(move || {
            observer.unobserve(&target);
            observer.disconnect();
            drop(callback);
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fake viewport: targets are ids, visibility is set by the test.
    #[derive(Default)]
    struct FakeViewport {
        visible: RefCell<HashMap<u32, bool>>,
        watchers: Rc<RefCell<HashMap<u32, Rc<dyn Fn(bool)>>>>,
        broken: bool,
    }

    impl FakeViewport {
        fn scroll_into_view(&self, target: u32, visible: bool) {
            self.visible.borrow_mut().insert(target, visible);
            let watcher = self.watchers.borrow().get(&target).cloned();
            if let Some(watcher) = watcher {
                watcher(visible);
            }
        }
    }

    impl ViewportProbe for Rc<FakeViewport> {
        type Target = u32;

        fn is_in_view(&self, target: &u32, _threshold: f64) -> Option<bool> {
            self.visible.borrow().get(target).copied()
        }

        fn watch(
            &self,
            target: &u32,
            _threshold: f64,
            on_change: Rc<dyn Fn(bool)>,
        ) -> Result<Subscription, ObserveError> {
            if self.broken {
                return Err(ObserveError::Unsupported("test".into()));
            }
            self.watchers.borrow_mut().insert(*target, on_change);
            let watchers = self.watchers.clone();
            let target = *target;
            Ok(Subscription::new(move || {
                watchers.borrow_mut().remove(&target);
            }))
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<bool>>>, impl Fn(bool) + 'static) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        (calls, move |visible| sink.borrow_mut().push(visible))
    }

    #[test]
    fn already_visible_section_gets_initial_true() {
        let viewport = Rc::new(FakeViewport::default());
        viewport.scroll_into_view(1, true);
        let trigger = VisibilityTrigger::new(viewport.clone(), 0.1);

        let (calls, callback) = recorder();
        let sub = trigger.observe(&1, callback);

        assert_eq!(*calls.borrow(), vec![true]);
        assert!(trigger.is_revealed(sub.id()));
    }

    #[test]
    fn repeated_notifications_are_deduplicated() {
        let viewport = Rc::new(FakeViewport::default());
        viewport.scroll_into_view(1, true);
        let trigger = VisibilityTrigger::new(viewport.clone(), 0.1);
        let (calls, callback) = recorder();
        let _sub = trigger.observe(&1, callback);

        // The browser observer also reports the initial state.
        viewport.scroll_into_view(1, true);
        viewport.scroll_into_view(1, false);
        viewport.scroll_into_view(1, false);
        viewport.scroll_into_view(1, true);

        assert_eq!(*calls.borrow(), vec![true, false, true]);
    }

    #[test]
    fn sections_are_independent() {
        let viewport = Rc::new(FakeViewport::default());
        let trigger = VisibilityTrigger::new(viewport.clone(), 0.1);
        let (first_calls, first_cb) = recorder();
        let (second_calls, second_cb) = recorder();
        let first = trigger.observe(&1, first_cb);
        let second = trigger.observe(&2, second_cb);

        viewport.scroll_into_view(2, true);

        assert!(first_calls.borrow().is_empty());
        assert_eq!(*second_calls.borrow(), vec![true]);
        assert!(!trigger.is_revealed(first.id()));
        assert!(trigger.is_revealed(second.id()));
    }

    #[test]
    fn dispose_releases_observer_and_flag() {
        let viewport = Rc::new(FakeViewport::default());
        let trigger = VisibilityTrigger::new(viewport.clone(), 0.1);
        let (calls, callback) = recorder();
        let mut sub = trigger.observe(&7, callback);
        assert_eq!(trigger.observed_count(), 1);

        sub.dispose();
        sub.dispose();
        viewport.scroll_into_view(7, true);

        assert!(calls.borrow().is_empty());
        assert_eq!(trigger.observed_count(), 0);
        assert!(viewport.watchers.borrow().is_empty());
    }

    #[test]
    fn unwinding_section_still_releases_observer() {
        let viewport = Rc::new(FakeViewport::default());
        let trigger = VisibilityTrigger::new(viewport.clone(), 0.1);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _sub = trigger.observe(&3, |_| {});
            panic!("section failed to render");
        }));

        assert!(result.is_err());
        assert_eq!(trigger.observed_count(), 0);
        assert!(viewport.watchers.borrow().is_empty());
    }

    #[test]
    fn missing_observer_degrades_to_always_visible() {
        let viewport = Rc::new(FakeViewport {
            broken: true,
            ..FakeViewport::default()
        });
        let trigger = VisibilityTrigger::new(viewport, 0.1);
        let (calls, callback) = recorder();
        let sub = trigger.observe(&4, callback);

        assert_eq!(*calls.borrow(), vec![true]);
        assert!(trigger.is_revealed(sub.id()));
    }

    #[test]
    fn sliver_below_threshold_is_not_visible() {
        assert!(!meets_threshold(0.05, 0.1));
        assert!(meets_threshold(0.1, 0.1));
        assert!(meets_threshold(1.0, 0.1));
        assert!(!meets_threshold(0.0, 0.0));
        // The same edge as the observer sees it, from element geometry.
        assert!(!meets_threshold(visible_fraction(790.0, 990.0, 800.0), 0.1));
        assert!(meets_threshold(visible_fraction(770.0, 970.0, 800.0), 0.1));
    }

    #[test]
    fn visible_fraction_handles_partial_overlap() {
        assert_eq!(visible_fraction(0.0, 100.0, 800.0), 1.0);
        assert_eq!(visible_fraction(750.0, 850.0, 800.0), 0.5);
        assert_eq!(visible_fraction(-90.0, 10.0, 800.0), 0.1);
        assert_eq!(visible_fraction(900.0, 1000.0, 800.0), 0.0);
        assert_eq!(visible_fraction(-200.0, -100.0, 800.0), 0.0);
    }
}
