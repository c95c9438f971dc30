use std::rc::Rc;

use crate::config;
use crate::state::{
    scheduler::{BrowserScheduler, Scheduler},
    scroll::ScrollSignal,
    splash::SplashController,
    storage::{open_session, KeyValueStore},
    theme::{Theme, ThemeStore},
    visibility::{DomViewport, VisibilityTrigger},
};

/// Everything the component tree shares. `App` builds it once (memoized) and
/// hands it down through a `ContextProvider`.
#[derive(Clone)]
pub struct Runtime {
    pub theme: ThemeStore,
    pub scroll: ScrollSignal,
    pub visibility: Rc<VisibilityTrigger<DomViewport>>,
    scheduler: Rc<dyn Scheduler>,
    session: Rc<dyn KeyValueStore>,
}

impl PartialEq for Runtime {
    fn eq(&self, other: &Self) -> bool {
        self.theme == other.theme && Rc::ptr_eq(&self.visibility, &other.visibility)
    }
}

impl Runtime {
    pub fn init() -> Self {
        let scheduler: Rc<dyn Scheduler> = Rc::new(BrowserScheduler);
        let session = open_session();
        Self {
            theme: ThemeStore::init(Some(session.clone())),
            scroll: ScrollSignal::new(scheduler.clone()),
            visibility: Rc::new(VisibilityTrigger::new(DomViewport, config::REVEAL_THRESHOLD)),
            session,
            scheduler,
        }
    }

    /// A fresh controller for the app shell; the session flag decides
    /// whether it shows anything.
    pub fn splash(&self) -> SplashController {
        SplashController::new(
            config::SPLASH_DURATION_MS,
            Some(self.session.clone()),
            self.scheduler.clone(),
        )
    }
}

/// Theme value plus the store that owns it. Consumers re-render when the
/// value changes.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub store: ThemeStore,
}

impl ThemeContext {
    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn toggle(&self) {
        self.store.toggle();
    }
}

/// Mirrors the theme onto `<html data-theme>` so page-level CSS outside the
/// component tree follows it too.
pub fn apply_to_document(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}
