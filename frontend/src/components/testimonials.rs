use yew::prelude::*;
use yew_hooks::use_interval;

use crate::components::reveal::{RevealSection, SectionHeading};
use crate::config;

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub company: &'static str,
    pub image: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        quote: "Pollinate IQ transformed our digital presence beyond our expectations. The website redesign, SEO work and social strategy brought a 65% increase in qualified leads within four months.",
        author: "Amanda Richardson",
        company: "Richardson Financial Services",
        image: "https://images.unsplash.com/photo-1531123897727-8f129e1688ce?auto=format&fit=crop&w=400&q=80",
    },
    Testimonial {
        quote: "They didn't just create a brand identity; they crafted our entire digital story. Our user engagement increased by 85% post-launch.",
        author: "Marcus Thompson",
        company: "EcoTech Innovations",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&w=400&q=80",
    },
    Testimonial {
        quote: "The e-commerce platform revolutionised our operations. Intuitive admin, seamless payments, and conversion rates up by 55%.",
        author: "Priya Sharma",
        company: "Artisan Marketplace",
        image: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?auto=format&fit=crop&w=400&q=80",
    },
    Testimonial {
        quote: "Their custom CRM streamlined our operations and improved client communication significantly.",
        author: "Lisa Chen",
        company: "Premier Real Estate Group",
        image: "https://images.unsplash.com/photo-1580489944761-15a19d654956?auto=format&fit=crop&w=400&q=80",
    },
];

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

pub fn previous_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if current == 0 {
        len - 1
    } else {
        current - 1
    }
}

fn dot_classes(index: usize, active: usize) -> Classes {
    classes!("carousel-dot", (index == active).then_some("active"))
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    let active = use_state(|| 0usize);
    let len = TESTIMONIALS.len();

    {
        let active = active.clone();
        use_interval(
            move || active.set(next_index(*active, len)),
            config::TESTIMONIAL_INTERVAL_MS,
        );
    }

    let next = {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| active.set(next_index(*active, len)))
    };
    let previous = {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| active.set(previous_index(*active, len)))
    };

    let current = &TESTIMONIALS[*active % len];

    html! {
        <RevealSection id="testimonials" class="testimonials">
            <SectionHeading badge="Testimonials" title="What Our Clients Say" />
            <div class="testimonial-card" key={*active}>
                <div class="stars">{"★★★★★"}</div>
                <blockquote>{ format!("\u{201c}{}\u{201d}", current.quote) }</blockquote>
                <div class="testimonial-author">
                    <img src={current.image} alt={current.author} loading="lazy" />
                    <div>
                        <h4>{ current.author }</h4>
                        <p>{ current.company }</p>
                    </div>
                </div>
            </div>
            <div class="carousel-controls">
                <button class="carousel-button" aria-label="Previous testimonial" onclick={previous}>{"‹"}</button>
                <div class="carousel-dots">
                    {
                        for (0..len).map(|i| {
                            let class = dot_classes(i, *active);
                            let active = active.clone();
                            let onclick = Callback::from(move |_: MouseEvent| active.set(i));
                            html! {
                                <button
                                    {class}
                                    aria-label={format!("Show testimonial {}", i + 1)}
                                    {onclick}
                                ></button>
                            }
                        })
                    }
                </div>
                <button class="carousel-button" aria-label="Next testimonial" onclick={next}>{"›"}</button>
            </div>
        </RevealSection>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_wrap_both_ways() {
        assert_eq!(next_index(3, 4), 0);
        assert_eq!(next_index(1, 4), 2);
        assert_eq!(previous_index(0, 4), 3);
        assert_eq!(previous_index(2, 4), 1);
    }

    #[test]
    fn only_the_current_dot_is_highlighted() {
        assert!(dot_classes(2, 2).contains("active"));
        assert!(!dot_classes(1, 2).contains("active"));
        assert!(dot_classes(1, 2).contains("carousel-dot"));
    }

    #[test]
    fn empty_carousel_stays_at_zero() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(previous_index(0, 0), 0);
    }
}
