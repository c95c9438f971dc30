use yew::prelude::*;

use crate::components::{
    layout::Layout,
    reveal::{RevealSection, SectionHeading},
    services_list::ServicesList,
};
use crate::pages::home::CtaSection;

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <Layout
            title="Services - Pollinate IQ"
            description="Strategy, design, software development and digital marketing services."
        >
            <RevealSection class="page-hero">
                <SectionHeading
                    badge="Services"
                    title="Everything Your Brand Needs Online"
                    subtitle="Pick a single service or let us run your whole digital presence."
                />
            </RevealSection>
            <ServicesList show_process={true} />
            <CtaSection />
        </Layout>
    }
}
