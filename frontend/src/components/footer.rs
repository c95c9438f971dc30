use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::header::NAV_ITEMS;
use crate::config;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div>
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        <span class="logo-mark">{"P"}</span>
                        <span class="logo-text">{ config::SITE_NAME }</span>
                    </Link<Route>>
                    <p class="footer-tagline">{ config::TAGLINE }</p>
                </div>
                <div>
                    <h4>{"Explore"}</h4>
                    <ul>
                        {
                            for NAV_ITEMS.iter().map(|(target, label)| html! {
                                <li><Link<Route> to={target.clone()}>{ *label }</Link<Route>></li>
                            })
                        }
                    </ul>
                </div>
                <div>
                    <h4>{"Contact"}</h4>
                    <ul>
                        <li><a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{ config::CONTACT_EMAIL }</a></li>
                        <li><a href={format!("tel:{}", config::CONTACT_PHONE.replace(' ', ""))}>{ config::CONTACT_PHONE }</a></li>
                        <li>{ config::CONTACT_ADDRESS }</li>
                    </ul>
                </div>
            </div>
            <div class="container footer-bottom">
                { format!("© {} {}. All rights reserved.", year, config::SITE_NAME) }
            </div>
        </footer>
    }
}
