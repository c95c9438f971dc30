use yew::prelude::*;

use crate::components::reveal::{RevealSection, SectionHeading};

pub struct Member {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub initials: &'static str,
}

pub static TEAM: [Member; 3] = [
    Member {
        name: "Reginald Nkabinde",
        role: "Founder & Creative Director",
        bio: "Leads brand strategy and design, turning business goals into digital experiences people remember.",
        initials: "RN",
    },
    Member {
        name: "Keith Mafuwe",
        role: "Head of Engineering",
        bio: "Architects the platforms behind our client work, from marketing sites to custom business software.",
        initials: "KM",
    },
    Member {
        name: "Solomon Ramafalo",
        role: "Growth & Marketing Lead",
        bio: "Runs data-driven campaigns across search and social that keep qualified leads coming in.",
        initials: "SR",
    },
];

#[function_component(TeamSection)]
pub fn team_section() -> Html {
    html! {
        <RevealSection id="team" class="team">
            <SectionHeading
                badge="Our Team"
                title="Meet the People Behind the Work"
                subtitle="A small, senior team that stays with your project from first call to launch."
            />
            <div class="team-grid">
                {
                    for TEAM.iter().enumerate().map(|(i, member)| html! {
                        <div class="team-card" style={format!("transition-delay: {}ms;", i * 120)}>
                            <div class="avatar">{ member.initials }</div>
                            <h3>{ member.name }</h3>
                            <p class="role">{ member.role }</p>
                            <p class="bio">{ member.bio }</p>
                        </div>
                    })
                }
            </div>
        </RevealSection>
    }
}
