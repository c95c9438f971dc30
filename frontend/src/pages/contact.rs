use yew::prelude::*;

use crate::components::{
    contact_form::ContactForm,
    layout::Layout,
    reveal::{RevealSection, SectionHeading},
};

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <Layout
            title="Contact Us - Pollinate IQ"
            description="Get in touch with Pollinate IQ for a quote or a chat about your next project."
        >
            <RevealSection class="page-hero">
                <SectionHeading
                    badge="Contact"
                    title="Let's Talk About Your Project"
                    subtitle="Send us a message and we'll get back to you within one business day."
                />
            </RevealSection>
            <ContactForm />
        </Layout>
    }
}
