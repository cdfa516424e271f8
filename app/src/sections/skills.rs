use leptos::prelude::*;

use crate::components::{ChipRow, SectionHeader};
use crate::content::{SkillGroup, SKILLS};
use crate::sections::Section;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=Section::Skills.anchor() class="section">
            <SectionHeader section=Section::Skills />
            <div class="skillsGrid">
                {SKILLS.iter().map(|group| view! { <SkillCard group=group /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn SkillCard(group: &'static SkillGroup) -> impl IntoView {
    view! {
        <div class="card skillCard">
            <h3>{group.label}</h3>
            <ChipRow items=group.items />
        </div>
    }
}
