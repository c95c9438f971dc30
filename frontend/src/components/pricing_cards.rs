use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::{RevealSection, SectionHeading};
use crate::hooks::use_theme;
use crate::Route;

/// Ordered from cheapest to most complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Basic,
    Standard,
    Premium,
    Custom,
}

#[derive(PartialEq)]
pub struct Plan {
    pub title: &'static str,
    pub price: Option<&'static str>,
    pub description: &'static str,
    pub tier: Tier,
    pub features: &'static [&'static str],
    pub popular: bool,
}

impl Plan {
    pub fn price_label(&self) -> String {
        match self.price {
            Some(price) => format!("R{}", price),
            None => "Custom".to_string(),
        }
    }
}

pub static PLANS: [Plan; 4] = [
    Plan {
        title: "Starter",
        price: Some("1,950"),
        description: "Perfect for small businesses just getting started with digital marketing.",
        tier: Tier::Basic,
        features: &[
            "Logo Design (3 Concepts)",
            "Basic Website (3 Pages)",
            "Mobile Responsive Design",
            "Social Media Setup",
            "Contact Form Integration",
            "1 Month Support",
            "Google Analytics Setup",
        ],
        popular: false,
    },
    Plan {
        title: "Growth",
        price: Some("5,950"),
        description: "Ideal for established businesses looking to expand their digital presence.",
        tier: Tier::Standard,
        features: &[
            "Custom Website (5 Pages)",
            "Mobile Responsive Design",
            "Advanced SEO Setup",
            "Content Management System",
            "Social Media Integration",
            "Email Newsletter Setup",
            "6 Months Priority Support",
            "Performance Optimization",
        ],
        popular: true,
    },
    Plan {
        title: "Enterprise",
        price: Some("12,950"),
        description: "Comprehensive solution for businesses requiring advanced digital capabilities.",
        tier: Tier::Premium,
        features: &[
            "Custom Website (10+ Pages)",
            "E-commerce Functionality",
            "Advanced SEO & Analytics",
            "Email Marketing Automation",
            "Customer Portal Integration",
            "12 Months Priority Support",
            "Monthly Strategy Sessions",
        ],
        popular: false,
    },
    Plan {
        title: "Custom Solution",
        price: None,
        description: "Tailored solutions for unique business requirements and complex projects.",
        tier: Tier::Custom,
        features: &[
            "Tailored Digital Strategy",
            "Custom Development",
            "Enterprise Integration",
            "API Development",
            "Dedicated Project Manager",
            "Ongoing Maintenance",
        ],
        popular: false,
    },
];

pub static FAQS: [(&str, &str); 4] = [
    (
        "How long does a typical project take?",
        "Starter projects usually launch within two to three weeks. Larger builds are scoped during discovery and delivered in milestones.",
    ),
    (
        "Can I upgrade my plan later?",
        "Yes. Work already delivered is credited towards the higher tier.",
    ),
    (
        "Do you offer payment plans?",
        "We split most projects into a deposit and milestone payments. Talk to us about what suits your cash flow.",
    ),
    (
        "What happens after the support period?",
        "You can continue on a monthly maintenance retainer or take over the site yourself with full handover documentation.",
    ),
];

/// Each comparison row and the cheapest tier that includes it. Every higher
/// tier includes it too.
pub static COMPARISON: [(&str, Tier); 12] = [
    ("Responsive Website Design", Tier::Basic),
    ("Content Management System", Tier::Standard),
    ("SEO Optimization", Tier::Basic),
    ("Social Media Integration", Tier::Basic),
    ("E-commerce Functionality", Tier::Premium),
    ("Custom API Integration", Tier::Premium),
    ("Email Marketing Setup", Tier::Standard),
    ("Analytics Dashboard", Tier::Standard),
    ("Priority Support", Tier::Standard),
    ("Dedicated Project Manager", Tier::Premium),
    ("Regular Strategy Sessions", Tier::Premium),
    ("Custom Development", Tier::Custom),
];

/// Whether `plan` ticks `feature` in the comparison table. Unknown features
/// are never included.
pub fn included(plan: &Plan, feature: &str) -> bool {
    COMPARISON
        .iter()
        .find(|(name, _)| *name == feature)
        .map_or(false, |(_, from)| plan.tier >= *from)
}

#[derive(Properties, PartialEq)]
pub struct PricingCardProps {
    pub index: usize,
}

#[function_component(PricingCard)]
pub fn pricing_card(props: &PricingCardProps) -> Html {
    let theme = use_theme();
    let Some(plan) = PLANS.get(props.index) else {
        return html! {};
    };

    let tier_class = match plan.tier {
        Tier::Basic => "tier-basic",
        Tier::Standard => "tier-standard",
        Tier::Premium => "tier-premium",
        Tier::Custom => "tier-custom",
    };

    html! {
        <div class={classes!(
            "pricing-card",
            tier_class,
            plan.popular.then_some("popular"),
            theme.theme.pick("card-light", "card-dark"),
        )}>
            {
                if plan.popular {
                    html! { <span class="popular-badge">{"Most Popular"}</span> }
                } else {
                    html! {}
                }
            }
            <h3>{ plan.title }</h3>
            <div class="price">
                <span class="amount">{ plan.price_label() }</span>
                { if plan.price.is_some() { html! { <span class="period">{" once-off"}</span> } } else { html! {} } }
            </div>
            <p class="plan-description">{ plan.description }</p>
            <ul class="feature-list">
                { for plan.features.iter().map(|feature| html! { <li>{"✓ "}{ *feature }</li> }) }
            </ul>
            <Link<Route> to={Route::Contact} classes="button button-primary">
                { if plan.price.is_some() { "Get Started" } else { "Contact Us" } }
            </Link<Route>>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PricingPlansProps {
    #[prop_or(true)]
    pub show_heading: bool,
}

#[function_component(PricingPlans)]
pub fn pricing_plans(props: &PricingPlansProps) -> Html {
    html! {
        <RevealSection id="pricing" class="pricing">
            {
                if props.show_heading {
                    html! {
                        <SectionHeading
                            badge="Pricing"
                            title="Simple, Transparent Pricing"
                            subtitle="All prices are in South African Rand (ZAR). Need a custom solution? Contact us for a personalized quote."
                        />
                    }
                } else {
                    html! {}
                }
            }
            <div class="pricing-grid">
                { for (0..PLANS.len()).map(|index| html! { <PricingCard {index} /> }) }
            </div>
        </RevealSection>
    }
}

#[function_component(PricingComparison)]
pub fn pricing_comparison() -> Html {
    let theme = use_theme();

    html! {
        <RevealSection id="compare" class="comparison">
            <SectionHeading
                badge="Compare"
                title="Compare Our Packages"
                subtitle="See which package best fits your business needs"
            />
            <div class="comparison-scroll">
                <table class={classes!("comparison-table", theme.theme.pick("card-light", "card-dark"))}>
                    <thead>
                        <tr>
                            <th class="feature-name">{"Features"}</th>
                            { for PLANS.iter().map(|plan| html! { <th>{ plan.title }</th> }) }
                        </tr>
                    </thead>
                    <tbody>
                        <tr class="price-row">
                            <td class="feature-name">{"Price"}</td>
                            { for PLANS.iter().map(|plan| html! { <td>{ plan.price_label() }</td> }) }
                        </tr>
                        {
                            for COMPARISON.iter().map(|(feature, _)| html! {
                                <tr>
                                    <td class="feature-name">{ *feature }</td>
                                    {
                                        for PLANS.iter().map(|plan| {
                                            if included(plan, feature) {
                                                html! { <td class="tick" aria-label="Included">{"✓"}</td> }
                                            } else {
                                                html! { <td class="cross" aria-label="Not included">{"✕"}</td> }
                                            }
                                        })
                                    }
                                </tr>
                            })
                        }
                    </tbody>
                </table>
            </div>
        </RevealSection>
    }
}

#[function_component(PricingFaq)]
pub fn pricing_faq() -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <RevealSection id="faq" class="faq">
            <SectionHeading badge="FAQ" title="Frequently Asked Questions" />
            <div class="faq-list">
                {
                    for FAQS.iter().enumerate().map(|(i, (question, answer))| {
                        let expanded = *open == Some(i);
                        let onclick = {
                            let open = open.clone();
                            Callback::from(move |_: MouseEvent| {
                                open.set(if expanded { None } else { Some(i) });
                            })
                        };
                        html! {
                            <div class={classes!("faq-item", expanded.then_some("open"))}>
                                <button class="faq-question" aria-expanded={expanded.to_string()} {onclick}>
                                    { *question }
                                    <span class="faq-icon">{ if expanded { "−" } else { "+" } }</span>
                                </button>
                                { if expanded { html! { <p class="faq-answer">{ *answer }</p> } } else { html! {} } }
                            </div>
                        }
                    })
                }
            </div>
        </RevealSection>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_popular_plan() {
        let popular: Vec<_> = PLANS.iter().filter(|p| p.popular).map(|p| p.title).collect();
        assert_eq!(popular, vec!["Growth"]);
    }

    #[test]
    fn comparison_ticks_follow_tiers() {
        let [starter, growth, enterprise, custom] = &PLANS;
        assert!(included(starter, "SEO Optimization"));
        assert!(!included(starter, "Content Management System"));
        assert!(included(growth, "Content Management System"));
        assert!(!included(growth, "E-commerce Functionality"));
        assert!(included(enterprise, "Dedicated Project Manager"));
        assert!(!included(enterprise, "Custom Development"));
        assert!(included(custom, "Custom Development"));
        assert!(!included(custom, "Teleportation"));
    }

    #[test]
    fn higher_tiers_never_lose_a_tick() {
        for (feature, _) in COMPARISON.iter() {
            let ticks: Vec<bool> = PLANS.iter().map(|plan| included(plan, feature)).collect();
            assert!(ticks.windows(2).all(|pair| pair[0] <= pair[1]), "{feature}");
            assert!(ticks[3], "{feature}");
        }
    }

    #[test]
    fn custom_plan_has_no_fixed_price() {
        assert_eq!(PLANS[0].price_label(), "R1,950");
        assert_eq!(PLANS[3].price_label(), "Custom");
        assert_eq!(PLANS[3].tier, Tier::Custom);
    }
}
