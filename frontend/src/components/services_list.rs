use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::{RevealSection, SectionHeading};
use crate::hooks::use_theme;
use crate::Route;

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

pub static SERVICES: [Service; 6] = [
    Service {
        title: "Strategic Planning & Research",
        description: "Market research, competitor analysis and a clear roadmap before a single pixel is designed.",
        category: "Strategy",
    },
    Service {
        title: "Solution Synthesis & Design",
        description: "Brand identity, UX flows and interface design that make complex products feel simple.",
        category: "Design",
    },
    Service {
        title: "Custom Software Development",
        description: "Websites, web apps and mobile apps engineered for speed, security and growth.",
        category: "Development",
    },
    Service {
        title: "Digital Transformation",
        description: "Moving paper-based and legacy processes onto modern, connected platforms.",
        category: "Development",
    },
    Service {
        title: "Performance Optimization",
        description: "SEO, Core Web Vitals and conversion tuning so your site earns its keep.",
        category: "Marketing",
    },
    Service {
        title: "Consulting & Advisory",
        description: "Expert guidance on technology strategy, architecture decisions and delivery.",
        category: "Strategy",
    },
];

pub static PROCESS: [(&str, &str); 4] = [
    ("Discovery & Analysis", "We learn your business, audience and goals."),
    ("Design & Planning", "Wireframes, prototypes and a delivery plan you sign off."),
    ("Development & Testing", "Iterative builds with reviews at every milestone."),
    ("Launch & Support", "Go-live, monitoring and ongoing improvements."),
];

#[derive(Properties, PartialEq)]
pub struct ServicesListProps {
    #[prop_or(false)]
    pub show_process: bool,
}

#[function_component(ServicesList)]
pub fn services_list(props: &ServicesListProps) -> Html {
    let theme = use_theme();

    html! {
        <>
            <RevealSection id="services" class="services">
                <SectionHeading
                    badge="What We Do"
                    title="Services Built for Growth"
                    subtitle="From strategy to launch, everything your brand needs online."
                />
                <div class="card-grid">
                    {
                        for SERVICES.iter().map(|service| html! {
                            <div class={classes!("service-card", theme.theme.pick("card-light", "card-dark"))}>
                                <span class="category">{ service.category }</span>
                                <h3>{ service.title }</h3>
                                <p>{ service.description }</p>
                            </div>
                        })
                    }
                </div>
                <div class="section-cta">
                    <Link<Route> to={Route::Services} classes="button button-ghost">{"Explore Services"}</Link<Route>>
                </div>
            </RevealSection>
            {
                if props.show_process {
                    html! {
                        <RevealSection id="process" class="process">
                            <SectionHeading badge="How We Work" title="Our Process" />
                            <ol class="process-steps">
                                {
                                    for PROCESS.iter().enumerate().map(|(i, (title, detail))| html! {
                                        <li>
                                            <span class="step-number">{ format!("{:02}", i + 1) }</span>
                                            <h3>{ *title }</h3>
                                            <p>{ *detail }</p>
                                        </li>
                                    })
                                }
                            </ol>
                        </RevealSection>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}
