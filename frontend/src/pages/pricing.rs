use yew::prelude::*;

use crate::components::{
    layout::Layout,
    pricing_cards::{PricingComparison, PricingFaq, PricingPlans},
    reveal::{RevealSection, SectionHeading},
};
use crate::pages::home::CtaSection;

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <Layout
            title="Pricing - Pollinate IQ"
            description="Transparent packages for websites, branding and digital marketing."
        >
            <RevealSection class="page-hero">
                <SectionHeading
                    badge="Pricing"
                    title="Packages for Every Stage of Growth"
                    subtitle="Once-off project pricing in South African Rand. No hidden fees."
                />
            </RevealSection>
            <PricingPlans show_heading={false} />
            <PricingComparison />
            <PricingFaq />
            <CtaSection />
        </Layout>
    }
}
