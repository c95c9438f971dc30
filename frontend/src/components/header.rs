use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::hooks::{use_scrolled_past, use_theme};
use crate::Route;

pub static NAV_ITEMS: [(Route, &str); 6] = [
    (Route::Home, "Home"),
    (Route::Services, "Services"),
    (Route::Pricing, "Pricing"),
    (Route::About, "About"),
    (Route::Portfolio, "Portfolio"),
    (Route::Contact, "Contact"),
];

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let scrolled = use_scrolled_past(config::HEADER_SCROLL_THRESHOLD);
    let theme = use_theme();
    let route = use_route::<Route>();

    // Close the mobile menu whenever the route changes.
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                menu_open.set(false);
                || ()
            },
            route.clone(),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let header_class = classes!(
        "site-header",
        scrolled.then_some("scrolled"),
        theme.theme.pick("header-light", "header-dark"),
    );
    let menu_class = classes!("nav-links", (*menu_open).then_some("mobile-menu-open"));

    html! {
        <header class={header_class}>
            <div class="container nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="logo-mark">{"P"}</span>
                    <span class="logo-text">{ config::SITE_NAME }</span>
                </Link<Route>>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <nav class={menu_class}>
                    {
                        for NAV_ITEMS.iter().map(|(target, label)| {
                            let active = route.as_ref() == Some(target);
                            html! {
                                <Link<Route>
                                    to={target.clone()}
                                    classes={classes!("nav-link", active.then_some("active"))}
                                >
                                    { *label }
                                </Link<Route>>
                            }
                        })
                    }
                    <a href={config::WHATSAPP_URL} target="_blank" rel="noreferrer" class="nav-cta">
                        {"WhatsApp"}
                    </a>
                </nav>
            </div>
        </header>
    }
}
