use yew::prelude::*;

use crate::components::{
    layout::Layout,
    reveal::{RevealSection, SectionHeading},
    team::TeamSection,
};
use crate::pages::home::CtaSection;

pub static VALUES: [(&str, &str); 4] = [
    ("Curiosity", "We ask why before we ask how."),
    ("Craft", "Details matter, from copy to code."),
    ("Candour", "Clear timelines, honest advice, no surprises."),
    ("Community", "Proudly African, building for local businesses first."),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <Layout
            title="About Us - Pollinate IQ"
            description="Meet the team behind Pollinate IQ and learn how we help brands grow online."
        >
            <RevealSection class="page-hero">
                <SectionHeading
                    badge="About Pollinate IQ"
                    title="Strategy, Design and Technology Under One Roof"
                    subtitle="Founded in Gauteng, we partner with ambitious businesses to build digital products that last."
                />
            </RevealSection>
            <RevealSection id="values" class="values">
                <SectionHeading badge="Our Values" title="What Drives Us" />
                <div class="card-grid">
                    {
                        for VALUES.iter().map(|(title, detail)| html! {
                            <div class="value-card">
                                <h3>{ *title }</h3>
                                <p>{ *detail }</p>
                            </div>
                        })
                    }
                </div>
            </RevealSection>
            <TeamSection />
            <CtaSection />
        </Layout>
    }
}
