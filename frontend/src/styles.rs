pub const BASE: &str = r#"
:root { --accent: #ffbc3f; --accent-dark: #ca8a04; }
* { box-sizing: border-box; }
body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; }
a { color: inherit; text-decoration: none; }

.app { min-height: 100vh; transition: background 0.3s ease, color 0.3s ease; }
.theme-light { --bg: #e5e7eb; --surface: #ffffff; --text: #111111; --muted: #4b5563; --border: #e5e7eb; background: var(--bg); color: var(--text); }
.theme-dark { --bg: #0d0d0d; --surface: rgba(255, 255, 255, 0.05); --text: #ffffff; --muted: #d1d5db; --border: rgba(255, 255, 255, 0.1); background: var(--bg); color: var(--text); }

.container { max-width: 1200px; margin: 0 auto; padding: 0 16px; }
.layout { display: flex; flex-direction: column; min-height: 100vh; }
.site-main { flex-grow: 1; padding-top: 80px; }

.site-header { position: fixed; top: 0; width: 100%; z-index: 40; padding: 20px 0; transition: all 0.3s ease; color: #fff; }
.site-header.scrolled { padding: 12px 0; backdrop-filter: blur(12px); box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); }
.header-light.scrolled { background: rgba(255, 255, 255, 0.95); color: #111; }
.header-dark.scrolled { background: rgba(13, 13, 13, 0.9); }
.nav-content { display: flex; justify-content: space-between; align-items: center; }
.nav-logo { display: flex; align-items: center; gap: 8px; font-weight: bold; font-size: 20px; }
.logo-mark { width: 36px; height: 36px; border-radius: 50%; background: var(--accent); color: #111; display: flex; align-items: center; justify-content: center; }
.nav-links { display: flex; align-items: center; gap: 8px; }
.nav-link { padding: 8px 12px; border-radius: 8px; transition: all 0.3s ease; }
.nav-link:hover, .nav-link.active { color: var(--accent); }
.nav-link.active { box-shadow: inset 0 -2px 0 var(--accent); }
.nav-cta { margin-left: 8px; padding: 8px 16px; border-radius: 8px; background: var(--accent); color: #111; font-weight: 500; }
.burger-menu { display: none; background: none; border: none; cursor: pointer; }
.burger-menu span { display: block; width: 22px; height: 2px; margin: 5px 0; background: currentColor; }

.floating-button { position: fixed; bottom: 32px; z-index: 50; padding: 12px; width: 48px; height: 48px; border-radius: 50%; cursor: pointer; font-size: 18px; transition: transform 0.3s ease; }
.floating-button:hover { transform: scale(1.1); background: var(--accent); }
.floating-light { background: rgba(255, 255, 255, 0.9); border: 1px solid #e5e7eb; color: #1f2937; }
.floating-dark { background: rgba(17, 24, 39, 0.9); border: 1px solid #4b5563; color: #fde047; }
.theme-toggle { left: 16px; }
.scroll-to-top { right: 16px; }

.hero { position: relative; min-height: 100vh; margin-top: -80px; display: flex; align-items: center; overflow: hidden; color: #fff; }
.hero-background, .hero-image, .hero-overlay { position: absolute; inset: 0; }
.hero-image { background-size: cover; background-position: center; filter: brightness(0.7); transition: transform 0.15s ease-out; will-change: transform; }
.hero-overlay { background: linear-gradient(to top, #000, rgba(0, 0, 0, 0.5), transparent); }
.hero-content { position: relative; z-index: 1; max-width: 800px; }
.hero-badge { display: inline-flex; align-items: center; gap: 8px; padding: 8px 16px; border-radius: 9999px; color: var(--accent); }
.badge-line { width: 48px; height: 4px; background: var(--accent); border-radius: 2px; }
.hero h1 { font-size: clamp(48px, 8vw, 96px); line-height: 1.1; margin: 24px 0; }
.hero h1 span { display: block; }
.accent-text { color: var(--accent); }
.hero-lead { font-size: 22px; color: #e5e7eb; }
.hero-cta-group { display: flex; flex-wrap: wrap; gap: 16px; }

.button { display: inline-block; padding: 14px 28px; border-radius: 8px; font-weight: 500; transition: all 0.3s ease; border: 1px solid transparent; cursor: pointer; }
.button-primary { background: var(--accent); color: #111; }
.button-primary:hover { box-shadow: 0 0 20px rgba(255, 188, 63, 0.3); }
.button-primary:disabled { opacity: 0.6; cursor: wait; }
.button-ghost { border-color: currentColor; }

.section { padding: 96px 0; }
.section-light { background: var(--bg); }
.section-dark { background: var(--bg); }
.reveal > .container { opacity: 0; transform: translateY(24px); transition: opacity 0.6s ease, transform 0.6s ease; }
.reveal.revealed > .container { opacity: 1; transform: none; }
.section-heading { text-align: center; margin-bottom: 48px; }
.section-heading h2 { font-size: clamp(32px, 4vw, 48px); margin: 16px 0; }
.section-subtitle { color: var(--muted); max-width: 640px; margin: 0 auto; }
.badge { display: inline-flex; align-items: center; gap: 8px; padding: 8px 16px; border-radius: 9999px; background: rgba(255, 188, 63, 0.15); color: var(--accent); font-size: 14px; }
.badge-dot { width: 8px; height: 8px; border-radius: 50%; background: var(--accent); }

.card-grid, .pricing-grid, .team-grid { display: grid; gap: 24px; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); }
.service-card, .project-card, .pricing-card, .value-card, .team-card, .info-card, .testimonial-card { background: var(--surface); border: 1px solid var(--border); border-radius: 16px; padding: 24px; transition: all 0.3s ease; }
.service-card:hover, .project-card:hover, .pricing-card:hover { transform: translateY(-4px); border-color: var(--accent); }
.category { color: var(--accent); font-size: 13px; text-transform: uppercase; letter-spacing: 0.05em; }
.section-cta { text-align: center; margin-top: 40px; }

.split { display: grid; gap: 48px; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); align-items: center; }
.split .section-heading { text-align: left; }
.stats-grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 24px; }
.stat-value { display: block; font-size: 40px; font-weight: bold; color: var(--accent); }
.stat-label { color: var(--muted); }

.avatar { width: 80px; height: 80px; border-radius: 50%; background: var(--accent); color: #111; font-size: 28px; font-weight: bold; display: flex; align-items: center; justify-content: center; margin-bottom: 16px; }
.role { color: var(--accent); }
.bio { color: var(--muted); }

.testimonial-card { max-width: 760px; margin: 0 auto; animation: fadeIn 0.5s ease-in-out; }
.stars { color: var(--accent); margin-bottom: 16px; }
.testimonial-card blockquote { font-style: italic; margin: 0 0 24px; }
.testimonial-author { display: flex; align-items: center; gap: 16px; }
.testimonial-author img { width: 48px; height: 48px; border-radius: 50%; object-fit: cover; }
.carousel-controls { display: flex; justify-content: center; align-items: center; gap: 16px; margin-top: 24px; }
.carousel-button { width: 40px; height: 40px; border-radius: 50%; border: 1px solid var(--border); background: var(--surface); color: inherit; cursor: pointer; }
.carousel-dot { width: 10px; height: 10px; margin: 0 4px; border-radius: 50%; border: none; background: var(--border); cursor: pointer; }
.carousel-dot.active { background: var(--accent); width: 24px; border-radius: 5px; }

.pricing-card { position: relative; display: flex; flex-direction: column; gap: 12px; }
.pricing-card.popular { border-color: var(--accent); transform: scale(1.03); }
.popular-badge { position: absolute; top: -12px; right: 24px; padding: 4px 12px; border-radius: 9999px; background: var(--accent); color: #111; font-size: 12px; }
.amount { font-size: 36px; font-weight: bold; }
.period { color: var(--muted); }
.feature-list { list-style: none; padding: 0; margin: 0 0 16px; flex-grow: 1; }
.feature-list li { padding: 4px 0; }
.faq-list { max-width: 760px; margin: 0 auto; }
.faq-item { border-bottom: 1px solid var(--border); }
.faq-question { width: 100%; display: flex; justify-content: space-between; padding: 20px 0; background: none; border: none; color: inherit; font-size: 17px; cursor: pointer; text-align: left; }
.faq-answer { color: var(--muted); padding-bottom: 20px; margin: 0; }

.comparison-scroll { overflow-x: auto; }
.comparison-table { width: 100%; border-collapse: collapse; padding: 0; }
.comparison-table th, .comparison-table td { padding: 16px; text-align: center; border-bottom: 1px solid var(--border); }
.comparison-table .feature-name { text-align: left; }
.comparison-table .price-row { background: rgba(255, 188, 63, 0.1); font-weight: 500; }
.comparison-table .tick { color: #16a34a; }
.comparison-table .cross { color: var(--muted); }
.showcase-cta { margin-top: 48px; }
.showcase-cta .hero-cta-group { justify-content: center; }

.filter-bar { display: flex; justify-content: center; flex-wrap: wrap; gap: 8px; margin-bottom: 32px; }
.filter-button { padding: 8px 16px; border-radius: 9999px; border: 1px solid var(--border); background: var(--surface); color: inherit; cursor: pointer; }
.filter-button.active { background: var(--accent); color: #111; }
.project-card { padding: 0; overflow: hidden; }
.project-card img { width: 100%; height: 200px; object-fit: cover; }
.project-body { padding: 20px; }

.process-steps { list-style: none; padding: 0; display: grid; gap: 24px; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); }
.step-number { font-size: 32px; font-weight: bold; color: var(--accent); }

.cta-panel { text-align: center; padding: 64px 24px; border-radius: 24px; background: linear-gradient(135deg, rgba(255, 188, 63, 0.2), rgba(255, 188, 63, 0.05)); }

.contact { padding: 64px 0; }
.contact-info { display: grid; gap: 24px; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); margin: 0 auto 48px; max-width: 1200px; padding: 0 16px; text-align: center; }
.contact-form { max-width: 760px; margin: 0 auto; display: flex; flex-direction: column; gap: 20px; padding: 0 16px; }
.form-row { display: grid; gap: 20px; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); }
.contact-form label { display: flex; flex-direction: column; gap: 8px; font-weight: 500; }
.contact-form input, .contact-form select, .contact-form textarea { padding: 12px 16px; border-radius: 8px; border: 1px solid var(--border); background: var(--surface); color: inherit; font: inherit; }
.field-error { color: #ef4444; font-size: 14px; margin: 0; }
.form-status { padding: 12px 16px; border-radius: 8px; }
.form-status.success { background: rgba(34, 197, 94, 0.15); color: #16a34a; }
.form-status.error { background: rgba(239, 68, 68, 0.15); color: #dc2626; }

.site-footer { padding: 64px 0 24px; border-top: 1px solid var(--border); }
.footer-grid { display: grid; gap: 32px; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); }
.site-footer ul { list-style: none; padding: 0; }
.site-footer li { padding: 4px 0; color: var(--muted); }
.footer-tagline { color: var(--muted); }
.footer-bottom { margin-top: 32px; text-align: center; color: var(--muted); font-size: 14px; }

.not-found { text-align: center; }
.not-found h1 { font-size: 96px; color: var(--accent); margin: 0; }

@keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }

@media (max-width: 950px) {
    .burger-menu { display: block; z-index: 50; }
    .nav-links { position: fixed; inset: 0; flex-direction: column; justify-content: center; gap: 20px; font-size: 20px; background: rgba(0, 0, 0, 0.9); color: #fff; opacity: 0; pointer-events: none; transition: opacity 0.5s ease; }
    .nav-links.mobile-menu-open { opacity: 1; pointer-events: auto; }
}
"#;
