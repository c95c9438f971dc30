use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::Layout;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <Layout title="Page Not Found - Pollinate IQ">
            <section class="section not-found">
                <div class="container">
                    <h1>{"404"}</h1>
                    <p>{"Oops! The page you're looking for doesn't exist."}</p>
                    <Link<Route> to={Route::Home} classes="button button-primary">{"Return Home"}</Link<Route>>
                </div>
            </section>
        </Layout>
    }
}
