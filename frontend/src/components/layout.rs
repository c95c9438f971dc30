use log::warn;
use wasm_bindgen::JsValue;
use web_sys::Document;
use yew::prelude::*;

use crate::components::{footer::Footer, header::Header, scroll_to_top::ScrollToTop, theme_toggle::ThemeToggle};

pub const DEFAULT_TITLE: &str = "Pollinate IQ - Digital Agency";
pub const DEFAULT_DESCRIPTION: &str =
    "Empower Your Brand's Digital Presence with AI-Driven Solutions and Next-Gen Technology";
pub const DEFAULT_KEYWORDS: &str = "digital agency, web development, AI solutions, branding, technology";

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or(AttrValue::Static(DEFAULT_TITLE))]
    pub title: AttrValue,
    #[prop_or(AttrValue::Static(DEFAULT_DESCRIPTION))]
    pub description: AttrValue,
    #[prop_or(AttrValue::Static(DEFAULT_KEYWORDS))]
    pub keywords: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Finds `<meta {attr}="{name}">` in the head, creating it when missing, and
/// sets its content.
fn upsert_meta(document: &Document, attr: &str, name: &str, content: &str) -> Result<(), JsValue> {
    let selector = format!("meta[{}=\"{}\"]", attr, name);
    let meta = match document.query_selector(&selector)? {
        Some(meta) => meta,
        None => {
            let meta = document.create_element("meta")?;
            meta.set_attribute(attr, name)?;
            if let Some(head) = document.head() {
                head.append_child(&meta)?;
            }
            meta
        }
    };
    meta.set_attribute("content", content)
}

fn apply_head(title: &str, description: &str, keywords: &str) -> Result<(), JsValue> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Ok(());
    };
    document.set_title(title);
    upsert_meta(&document, "name", "description", description)?;
    upsert_meta(&document, "name", "keywords", keywords)?;
    upsert_meta(&document, "property", "og:title", title)?;
    upsert_meta(&document, "property", "og:description", description)
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    {
        use_effect_with_deps(
            move |(title, description, keywords): &(AttrValue, AttrValue, AttrValue)| {
                if let Err(e) = apply_head(title, description, keywords) {
                    warn!("Could not update document head: {:?}", e);
                }
                || ()
            },
            (props.title.clone(), props.description.clone(), props.keywords.clone()),
        );
    }

    html! {
        <div class="layout">
            <ThemeToggle />
            <ScrollToTop />
            <Header />
            <main class="site-main" role="main" aria-label="Main content">
                { for props.children.iter() }
            </main>
            <Footer />
        </div>
    }
}
