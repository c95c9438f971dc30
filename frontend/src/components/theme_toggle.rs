use yew::prelude::*;

use crate::hooks::use_theme;

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_theme();
    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| theme.toggle())
    };
    let target = theme.theme.toggled();

    html! {
        <button
            class={classes!("floating-button", "theme-toggle", theme.theme.pick("floating-light", "floating-dark"))}
            aria-label={format!("Switch to {} mode", target)}
            {onclick}
        >
            { if theme.is_dark() { "☀" } else { "☾" } }
        </button>
    }
}
