use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config;
use crate::hooks::{use_scrolled_past, use_theme};

#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let visible = use_scrolled_past(config::SCROLL_TO_TOP_THRESHOLD);
    let theme = use_theme();

    if !visible {
        return html! {};
    }

    let onclick = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    html! {
        <button
            class={classes!("floating-button", "scroll-to-top", theme.theme.pick("floating-light", "floating-dark"))}
            aria-label="Scroll to top"
            {onclick}
        >
            {"↑"}
        </button>
    }
}
