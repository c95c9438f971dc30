use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod hooks;
mod runtime;
mod styles;
mod state {
    pub mod scheduler;
    pub mod scroll;
    pub mod splash;
    pub mod storage;
    pub mod subscription;
    pub mod theme;
    pub mod visibility;
}
mod components {
    pub mod contact_form;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod layout;
    pub mod pricing_cards;
    pub mod projects_grid;
    pub mod reveal;
    pub mod scroll_to_top;
    pub mod services_list;
    pub mod splash_screen;
    pub mod team;
    pub mod testimonials;
    pub mod theme_toggle;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod portfolio;
    pub mod pricing;
    pub mod services;
}

use components::splash_screen::SplashScreen;
use pages::{
    about::About,
    contact::Contact,
    home::Home,
    not_found::NotFound,
    portfolio::Portfolio,
    pricing::Pricing,
    services::Services,
};
use runtime::{apply_to_document, Runtime, ThemeContext};
use state::{scroll, splash::SplashState, scroll::ScrollSignal, theme::ThemeStore};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/pricing")]
    Pricing,
    #[at("/portfolio")]
    Portfolio,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing /> }
        }
        Route::Portfolio => {
            info!("Rendering Portfolio page");
            html! { <Portfolio /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let runtime = use_memo(|_| Runtime::init(), ());
    let theme = use_state_eq(|| runtime.theme.get());
    let splash = use_state_eq(|| SplashState::Uninitialized);

    {
        let theme = theme.clone();
        use_effect_with_deps(
            move |store: &ThemeStore| {
                apply_to_document(store.get());
                let subscription = store.subscribe(move |value| {
                    apply_to_document(*value);
                    theme.set(*value);
                });
                move || drop(subscription)
            },
            runtime.theme.clone(),
        );
    }

    use_effect_with_deps(
        move |signal: &ScrollSignal| {
            let listener = scroll::listen_window(signal);
            move || drop(listener)
        },
        runtime.scroll.clone(),
    );

    {
        let splash = splash.clone();
        let runtime = runtime.clone();
        use_effect_with_deps(
            move |_| {
                let controller = runtime.splash();
                controller.on_complete(|| info!("Revealing application shell"));
                let subscription = {
                    let splash = splash.clone();
                    controller.subscribe(move |state| splash.set(*state))
                };
                splash.set(controller.start());
                move || {
                    controller.teardown();
                    drop(subscription);
                }
            },
            (),
        );
    }

    let theme_context = ThemeContext {
        theme: *theme,
        store: runtime.theme.clone(),
    };

    let content = match *splash {
        SplashState::Uninitialized => html! {},
        SplashState::Showing => html! { <SplashScreen duration_ms={config::SPLASH_DURATION_MS} /> },
        SplashState::Dismissed => html! {
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        },
    };

    html! {
        <ContextProvider<Runtime> context={(*runtime).clone()}>
            <ContextProvider<ThemeContext> context={theme_context}>
                <style>{ styles::BASE }</style>
                <div class={classes!("app", format!("theme-{}", theme.as_str()))}>
                    { content }
                </div>
            </ContextProvider<ThemeContext>>
        </ContextProvider<Runtime>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
