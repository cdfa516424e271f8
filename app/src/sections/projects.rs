use leptos::prelude::*;

use crate::components::{Bullets, ChipRow, SectionHeader};
use crate::content::{Project, PROJECTS};
use crate::sections::Section;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.anchor() class="section">
            <SectionHeader section=Section::Projects />
            <div class="projectGrid">
                {PROJECTS.iter().map(|project| view! { <ProjectCard project=project /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    let links = project.links();

    view! {
        <article id=project.html_id() class="card projectCard">
            <div class="projectTop">
                <div>
                    <h3 class="projectTitle">{project.title}</h3>
                    <div class="projectTagline">{project.tagline}</div>
                </div>
            </div>
            <Bullets items=project.bullets />
            <ChipRow items=project.stack />
            // Absent and empty links are the same, nothing is rendered.
            {(!links.is_empty()).then(|| {
                view! {
                    <div class="projectLinks">
                        {links
                            .iter()
                            .map(|link| {
                                view! {
                                    <a class="btn btnSmall btnGhost" href=link.href>{link.label}</a>
                                }
                            })
                            .collect_view()}
                    </div>
                }
            })}
        </article>
    }
}
