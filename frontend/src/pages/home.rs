use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{
    contact_form::ContactForm,
    hero::HeroSection,
    layout::Layout,
    reveal::{RevealSection, SectionHeading},
    services_list::ServicesList,
    team::TeamSection,
    testimonials::TestimonialsSection,
};
use crate::Route;

pub static STATS: [(&str, &str); 4] = [
    ("120+", "Projects delivered"),
    ("60+", "Happy clients"),
    ("8", "Years in business"),
    ("24/7", "Support"),
];

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
        <RevealSection id="about" class="about">
            <div class="split">
                <div>
                    <SectionHeading
                        badge="About Us"
                        title="A Digital Agency That Grows With You"
                    />
                    <p>
                        {"Pollinate IQ blends strategy, design and engineering to help South African businesses \
                          compete online. We build brands, websites and software that are measured by the results they bring."}
                    </p>
                    <Link<Route> to={Route::About} classes="button button-ghost">{"Learn More"}</Link<Route>>
                </div>
                <div class="stats-grid">
                    {
                        for STATS.iter().map(|(value, label)| html! {
                            <div class="stat">
                                <span class="stat-value">{ *value }</span>
                                <span class="stat-label">{ *label }</span>
                            </div>
                        })
                    }
                </div>
            </div>
        </RevealSection>
    }
}

pub static MANUVOO_FEATURES: [(&str, &str); 6] = [
    ("Property Management", "Complete hotel and property management system with real-time updates."),
    ("Guest Experience", "Enhanced guest journey from booking to checkout with personalised service."),
    ("Booking & Reservations", "Seamless booking with automated confirmations and management."),
    ("Analytics & Insights", "Comprehensive reporting for data-driven decisions."),
    ("Secure & Reliable", "Enterprise-grade security with a 99.9% uptime guarantee."),
    ("Lightning Fast", "Optimised for instant responses and smooth operations."),
];

/// Showcase for the agency's own hospitality platform.
#[function_component(ManuvooSection)]
pub fn manuvoo_section() -> Html {
    html! {
        <RevealSection id="manuvoo" class="manuvoo">
            <SectionHeading
                badge="Hospitality Solution"
                title="Introducing Manuvooo"
                subtitle="Our flagship end-to-end platform for hotels and hospitality businesses: operations, guests and growth in one place."
            />
            <div class="card-grid">
                {
                    for MANUVOO_FEATURES.iter().enumerate().map(|(i, (title, detail))| html! {
                        <div class="service-card" style={format!("transition-delay: {}ms;", i * 100)}>
                            <h3>{ *title }</h3>
                            <p>{ *detail }</p>
                        </div>
                    })
                }
            </div>
            <div class="cta-panel showcase-cta">
                <h3>{"Ready to Transform Your Hospitality Business?"}</h3>
                <p>{"Join hospitality businesses who trust Manuvooo to streamline operations and boost revenue."}</p>
                <div class="hero-cta-group">
                    <Link<Route> to={Route::Contact} classes="button button-primary">{"Schedule Demo"}</Link<Route>>
                    <Link<Route> to={Route::Services} classes="button button-ghost">{"Learn More"}</Link<Route>>
                </div>
            </div>
        </RevealSection>
    }
}

#[function_component(CtaSection)]
pub fn cta_section() -> Html {
    html! {
        <RevealSection class="cta">
            <div class="cta-panel">
                <h2>{"Ready to grow your digital presence?"}</h2>
                <p>{"Tell us about your project and get a tailored proposal within two business days."}</p>
                <Link<Route> to={Route::Contact} classes="button button-primary">{"Start a Project"}</Link<Route>>
            </div>
        </RevealSection>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <Layout>
            <HeroSection />
            <AboutSection />
            <ServicesList />
            <ManuvooSection />
            <CtaSection />
            <TeamSection />
            <TestimonialsSection />
            <RevealSection id="contact" class="contact-section">
                <SectionHeading
                    badge="Get in Touch"
                    title="Let's Build Something Great"
                />
                <ContactForm show_info={false} />
            </RevealSection>
        </Layout>
    }
}
