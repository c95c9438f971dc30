use yew::prelude::*;

use crate::hooks::{use_reveal, use_theme};

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Page section that fades in the first time it scrolls into view.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let theme = use_theme();

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!(
                "section",
                "reveal",
                revealed.then_some("revealed"),
                theme.theme.pick("section-light", "section-dark"),
                props.class.clone(),
            )}
        >
            <div class="container">
                { for props.children.iter() }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub badge: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading">
            <span class="badge"><span class="badge-dot"></span>{ props.badge.clone() }</span>
            <h2>{ props.title.clone() }</h2>
            {
                if let Some(subtitle) = &props.subtitle {
                    html! { <p class="section-subtitle">{ subtitle.clone() }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
