use yew::prelude::*;

use crate::components::reveal::{RevealSection, SectionHeading};
use crate::hooks::use_theme;

pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub summary: &'static str,
    pub image: &'static str,
}

pub static PROJECTS: [Project; 6] = [
    Project {
        title: "E-Commerce Redesign",
        category: "Web",
        summary: "A faster storefront and checkout that lifted conversion by 55%.",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&w=800&q=80",
    },
    Project {
        title: "Fitness App",
        category: "Mobile",
        summary: "Class booking, progress tracking and payments in one app.",
        image: "https://images.unsplash.com/photo-1517836357463-d25dfeac3438?auto=format&fit=crop&w=800&q=80",
    },
    Project {
        title: "Financial Brand Identity",
        category: "Branding",
        summary: "A complete visual identity for a growing advisory firm.",
        image: "https://images.unsplash.com/photo-1554224155-6726b3ff858f?auto=format&fit=crop&w=800&q=80",
    },
    Project {
        title: "Real Estate CRM",
        category: "Web",
        summary: "Lead pipeline and client portal for a property group.",
        image: "https://images.unsplash.com/photo-1560518883-ce09059eeffa?auto=format&fit=crop&w=800&q=80",
    },
    Project {
        title: "Law Firm Campaign",
        category: "Marketing",
        summary: "PPC and content strategy that returned 300% in one quarter.",
        image: "https://images.unsplash.com/photo-1589829545856-d10d557cf95f?auto=format&fit=crop&w=800&q=80",
    },
    Project {
        title: "Eco Startup Launch",
        category: "Branding",
        summary: "Name, logo and launch site for a clean-tech startup.",
        image: "https://images.unsplash.com/photo-1497436072909-60f360e1d4b1?auto=format&fit=crop&w=800&q=80",
    },
];

pub const ALL: &str = "All";

/// Distinct categories in first-seen order, prefixed with [`ALL`].
pub fn categories(projects: &[Project]) -> Vec<&'static str> {
    let mut found = vec![ALL];
    for project in projects {
        if !found.contains(&project.category) {
            found.push(project.category);
        }
    }
    found
}

pub fn filter<'a>(projects: &'a [Project], category: &str) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|project| category == ALL || project.category == category)
        .collect()
}

#[function_component(ProjectsGrid)]
pub fn projects_grid() -> Html {
    let theme = use_theme();
    let selected = use_state(|| ALL);

    html! {
        <RevealSection id="portfolio" class="portfolio">
            <SectionHeading badge="Portfolio" title="Selected Work" />
            <div class="filter-bar">
                {
                    for categories(&PROJECTS).into_iter().map(|category| {
                        let onclick = {
                            let selected = selected.clone();
                            Callback::from(move |_: MouseEvent| selected.set(category))
                        };
                        html! {
                            <button
                                class={classes!("filter-button", (*selected == category).then_some("active"))}
                                {onclick}
                            >
                                { category }
                            </button>
                        }
                    })
                }
            </div>
            <div class="card-grid">
                {
                    for filter(&PROJECTS, *selected).into_iter().map(|project| html! {
                        <article class={classes!("project-card", theme.theme.pick("card-light", "card-dark"))}>
                            <img src={project.image} alt={project.title} loading="lazy" />
                            <div class="project-body">
                                <span class="category">{ project.category }</span>
                                <h3>{ project.title }</h3>
                                <p>{ project.summary }</p>
                            </div>
                        </article>
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
    fn categories_are_unique_and_start_with_all() {
        assert_eq!(categories(&PROJECTS), vec![ALL, "Web", "Mobile", "Branding", "Marketing"]);
    }

    #[test]
    fn filter_by_category() {
        let titles: Vec<_> = filter(&PROJECTS, "Branding").iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["Financial Brand Identity", "Eco Startup Launch"]);
        assert_eq!(filter(&PROJECTS, ALL).len(), PROJECTS.len());
        assert!(filter(&PROJECTS, "Print").is_empty());
    }
}
