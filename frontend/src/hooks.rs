use web_sys::Element;
use yew::prelude::*;

use crate::runtime::{Runtime, ThemeContext};
use crate::state::scroll::ScrollSignal;

#[hook]
pub fn use_runtime() -> Runtime {
    use_context::<Runtime>().expect("Runtime must be provided at the app root")
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext must be provided at the app root")
}

/// Latest frame-throttled scroll offset. Re-renders on every published frame.
#[hook]
pub fn use_scroll_offset() -> f64 {
    let runtime = use_runtime();
    let offset = use_state_eq(|| runtime.scroll.current_offset());

    {
        let offset = offset.clone();
        use_effect_with_deps(
            move |scroll: &ScrollSignal| {
                let subscription = scroll.subscribe(move |value| offset.set(*value));
                move || drop(subscription)
            },
            runtime.scroll.clone(),
        );
    }

    *offset
}

/// Whether the page is scrolled beyond `threshold` pixels. Only re-renders
/// when the answer flips.
#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
    let runtime = use_runtime();
    let past = use_state_eq(|| runtime.scroll.current_offset() > threshold);

    {
        let past = past.clone();
        use_effect_with_deps(
            move |(scroll, threshold): &(ScrollSignal, f64)| {
                let threshold = *threshold;
                past.set(scroll.current_offset() > threshold);
                let subscription = scroll.subscribe(move |value| past.set(*value > threshold));
                move || drop(subscription)
            },
            (runtime.scroll.clone(), threshold),
        );
    }

    *past
}

/// Tracks whether the element behind `node` intersects the viewport.
#[hook]
pub fn use_section_visibility(node: NodeRef) -> bool {
    let runtime = use_runtime();
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        let trigger = runtime.visibility.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let subscription = node.cast::<Element>().map(|element| {
                    let setter = visible.clone();
                    let subscription = trigger.observe(&element, move |value| setter.set(value));
                    // A new node starts from its own flag, not the previous node's.
                    visible.set(trigger.is_revealed(subscription.id()));
                    subscription
                });
                move || drop(subscription)
            },
            node,
        );
    }

    *visible
}

/// Like [`use_section_visibility`] but latches: once revealed, stays revealed
/// so entry animations play a single time.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let visible = use_section_visibility(node);
    let latched = use_mut_ref(|| false);
    if visible {
        *latched.borrow_mut() = true;
    }
    let revealed = *latched.borrow();
    revealed
}
