//! The anchor-addressable regions of the page, in page order.

mod about;
mod contact;
mod hero;
mod projects;
mod resume;
mod skills;

use leptos::prelude::*;

pub use about::About;
pub use contact::Contact;
pub use hero::Hero;
pub use projects::{ProjectCard, Projects};
pub use resume::Resume;
pub use skills::{SkillCard, Skills};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Top,
    About,
    Skills,
    Projects,
    Resume,
    Contact,
}

impl Section {
    /// Every region, in the order they appear on the page.
    pub const ALL: [Section; 6] = [
        Section::Top,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Resume,
        Section::Contact,
    ];

    /// The regions listed in the navigation bar.
    pub const NAV: [Section; 5] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Resume,
        Section::Contact,
    ];

    /// The `id` of the region's root element.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Top => "top",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Resume => "resume",
            Section::Contact => "contact",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Section::Top => "#top",
            Section::About => "#about",
            Section::Skills => "#skills",
            Section::Projects => "#projects",
            Section::Resume => "#resume",
            Section::Contact => "#contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Top => "Top",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Resume => "Resume",
            Section::Contact => "Contact",
        }
    }

    /// One-liner under the section title.
    pub fn blurb(self) -> &'static str {
        match self {
            Section::Top => "",
            Section::About => "Short version: I like building tools people actually enjoy using.",
            Section::Skills => "Tools I use to make computers behave.",
            Section::Projects => "Selected work. Replace links and tweak bullets as you finalize.",
            Section::Resume => {
                "Quick scan format. You can later swap this with your exact resume content."
            }
            Section::Contact => {
                "If you want to talk roles, projects, or collaboration, email is best."
            }
        }
    }

    /// Contact is a call to action, the other entries are plain links.
    pub fn nav_class(self) -> Option<&'static str> {
        match self {
            Section::Contact => Some("btn btnGhost"),
            _ => None,
        }
    }

    pub fn render(self) -> AnyView {
        match self {
            Section::Top => view! { <Hero /> }.into_any(),
            Section::About => view! { <About /> }.into_any(),
            Section::Skills => view! { <Skills /> }.into_any(),
            Section::Projects => view! { <Projects /> }.into_any(),
            Section::Resume => view! { <Resume /> }.into_any(),
            Section::Contact => view! { <Contact /> }.into_any(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hrefs_point_to_anchors() {
        for section in Section::ALL {
            assert_eq!(format!("#{}", section.anchor()), section.href());
        }
    }

    #[test]
    fn nav_follows_page_order() {
        let positions: Vec<usize> = Section::NAV
            .iter()
            .map(|nav| Section::ALL.iter().position(|s| s == nav).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
