use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_scroll_offset;
use crate::Route;

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1573164713988-8665fc963095?auto=format&fit=crop&w=2069&q=80";

/// Transforms applied to the hero layers for a given scroll offset and
/// pointer drift.
#[derive(Clone, Debug, PartialEq)]
pub struct Parallax {
    pub background: String,
    pub overlay_opacity: f64,
    pub badge: String,
    pub heading: String,
    pub lead: String,
}

pub fn parallax(scroll: f64, pointer: (f64, f64)) -> Parallax {
    let (px, py) = pointer;
    Parallax {
        background: format!(
            "translate({:.2}px, {:.2}px) scale({:.4})",
            px * 1.5,
            py * 1.5 - scroll * 0.08,
            1.0 + scroll * 0.0003
        ),
        overlay_opacity: (0.8 + scroll * 0.001).min(1.0),
        badge: format!("translateY({:.2}px)", scroll * 0.1),
        heading: format!("translateY({:.2}px)", scroll * 0.05),
        lead: format!("translateY({:.2}px)", scroll * 0.02),
    }
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let scroll = use_scroll_offset();
    let pointer = use_state_eq(|| (0.0_f64, 0.0_f64));

    let onmousemove = {
        let pointer = pointer.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(window) = web_sys::window() {
                let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                pointer.set((
                    (f64::from(e.client_x()) - width / 2.0) * 0.01,
                    (f64::from(e.client_y()) - height / 2.0) * 0.01,
                ));
            }
        })
    };

    let layers = parallax(scroll, *pointer);

    html! {
        <section class="hero" {onmousemove}>
            <div class="hero-background">
                <div
                    class="hero-image"
                    style={format!("background-image: url('{}'); transform: {};", HERO_IMAGE, layers.background)}
                ></div>
                <div class="hero-overlay" style={format!("opacity: {:.3};", layers.overlay_opacity)}></div>
            </div>
            <div class="container hero-content">
                <div class="hero-badge" style={format!("transform: {};", layers.badge)}>
                    <span class="badge-line"></span>
                    <span>{"Digital Agency 2025"}</span>
                </div>
                <h1 style={format!("transform: {};", layers.heading)}>
                    <span class="gradient-text">{"Digital Products"}</span>
                    <span class="accent-text">{"For Future"}</span>
                </h1>
                <p class="hero-lead" style={format!("transform: {};", layers.lead)}>
                    {"Empower Your Brand's Digital Presence with AI-Driven Solutions and Next-Gen Technology."}
                </p>
                <div class="hero-cta-group">
                    <Link<Route> to={Route::Contact} classes="button button-primary">
                        {"Get Started →"}
                    </Link<Route>>
                    <Link<Route> to={Route::Portfolio} classes="button button-ghost">
                        {"View Our Work"}
                    </Link<Route>>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_hero_is_untransformed() {
        let layers = parallax(0.0, (0.0, 0.0));
        assert_eq!(layers.background, "translate(0.00px, 0.00px) scale(1.0000)");
        assert_eq!(layers.badge, "translateY(0.00px)");
        assert_eq!(layers.overlay_opacity, 0.8);
    }

    #[test]
    fn layers_drift_at_different_rates() {
        let layers = parallax(200.0, (0.0, 0.0));
        assert_eq!(layers.background, "translate(0.00px, -16.00px) scale(1.0600)");
        assert_eq!(layers.badge, "translateY(20.00px)");
        assert_eq!(layers.heading, "translateY(10.00px)");
        assert_eq!(layers.lead, "translateY(4.00px)");
    }

    #[test]
    fn overlay_never_exceeds_opaque() {
        assert_eq!(parallax(5000.0, (0.0, 0.0)).overlay_opacity, 1.0);
    }
}
