use yew::prelude::*;

use crate::components::{layout::Layout, projects_grid::ProjectsGrid, testimonials::TestimonialsSection};
use crate::pages::home::CtaSection;

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    html! {
        <Layout
            title="Portfolio - Pollinate IQ"
            description="A selection of websites, apps and brands we've built for our clients."
        >
            <ProjectsGrid />
            <TestimonialsSection />
            <CtaSection />
        </Layout>
    }
}
