use yew::prelude::*;

use crate::config;
use crate::hooks::use_theme;

#[derive(Properties, PartialEq)]
pub struct SplashScreenProps {
    pub duration_ms: u32,
}

/// Seconds the progress bar takes to fill; it finishes half a second before
/// the splash is dismissed.
pub fn progress_seconds(duration_ms: u32) -> f64 {
    (f64::from(duration_ms) / 1000.0 - 0.5).max(0.0)
}

/// Spread the decorative particles deterministically over the screen.
fn particle_style(index: u32) -> String {
    let size = 5 + (index * 7) % 20;
    let left = (index * 37 + 11) % 100;
    let top = (index * 53 + 23) % 100;
    format!(
        "width: {size}px; height: {size}px; left: {left}%; top: {top}%; animation-delay: {:.1}s;",
        f64::from(index) * 0.2
    )
}

#[function_component(SplashScreen)]
pub fn splash_screen(props: &SplashScreenProps) -> Html {
    let theme = use_theme();
    let progress = format!("animation-duration: {:.1}s;", progress_seconds(props.duration_ms));

    html! {
        <div class={classes!("splash", theme.theme.pick("splash-light", "splash-dark"))} role="status">
            <style>
                {r#"
                    .splash {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .splash-light { background: #fff; color: #111; }
                    .splash-dark { background: #0d0d0d; color: #fff; }
                    .splash-particle {
                        position: absolute;
                        border-radius: 50%;
                        background: #ffbc3f;
                        opacity: 0.2;
                        animation: splashFloat 2s ease-in-out infinite;
                    }
                    .splash-logo {
                        width: 96px;
                        height: 96px;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 40px;
                        font-weight: bold;
                        margin-bottom: 24px;
                        animation: splashPop 0.8s ease-out forwards;
                    }
                    .splash-light .splash-logo { background: #0d0d0d; color: #fff; }
                    .splash-dark .splash-logo { background: #fff; color: #0d0d0d; }
                    .splash-text { text-align: center; animation: splashRise 0.6s ease-out 0.3s both; }
                    .splash-text p { opacity: 0.8; }
                    .splash-progress {
                        position: absolute;
                        bottom: 48px;
                        width: 256px;
                        height: 4px;
                        background: #e5e7eb;
                        border-radius: 9999px;
                        overflow: hidden;
                    }
                    .splash-progress-bar {
                        height: 100%;
                        width: 0;
                        background: #ffbc3f;
                        animation-name: splashFill;
                        animation-timing-function: linear;
                        animation-fill-mode: forwards;
                    }
                    @keyframes splashFill { from { width: 0; } to { width: 100%; } }
                    @keyframes splashPop { from { transform: scale(0.8); opacity: 0; } to { transform: scale(1); opacity: 1; } }
                    @keyframes splashRise { from { transform: translateY(20px); opacity: 0; } to { transform: translateY(0); opacity: 1; } }
                    @keyframes splashFloat {
                        0% { transform: scale(0); opacity: 0; }
                        50% { transform: scale(1); opacity: 1; }
                        100% { transform: scale(0.8); opacity: 0; }
                    }
                "#}
            </style>
            <div class="splash-particles">
                { for (0..10).map(|i| html! { <div class="splash-particle" style={particle_style(i)}></div> }) }
            </div>
            <div class="splash-logo">{"P"}</div>
            <div class="splash-text">
                <h1>{ config::SITE_NAME }</h1>
                <p>{ config::TAGLINE }</p>
            </div>
            <div class="splash-progress">
                <div class="splash-progress-bar" style={progress}></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_finishes_half_a_second_early() {
        assert_eq!(progress_seconds(3500), 3.0);
        assert_eq!(progress_seconds(200), 0.0);
    }

    #[test]
    fn particles_stay_on_screen() {
        for i in 0..10 {
            let style = particle_style(i);
            assert!(style.contains("left: "));
            assert!(!style.contains("left: 100%"));
        }
    }
}
