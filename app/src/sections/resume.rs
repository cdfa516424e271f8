use leptos::prelude::*;

use crate::components::{Bullets, SectionHeader, TimelineItem};
use crate::content::{EDUCATION, EXPERIENCE, MINOR, SCHOOL};
use crate::sections::Section;

#[component]
pub fn Resume() -> impl IntoView {
    view! {
        <section id=Section::Resume.anchor() class="section">
            <SectionHeader section=Section::Resume />
            <div class="grid2">
                <div class="card">
                    <h3>"Experience"</h3>
                    {EXPERIENCE.iter().map(|entry| view! { <TimelineItem entry=entry /> }).collect_view()}
                </div>
                <div class="card">
                    <h3>{format!("Education: {}", SCHOOL)}</h3>
                    {EDUCATION.iter().map(|entry| view! { <TimelineItem entry=entry /> }).collect_view()}
                    <h3 class="spaced">{MINOR.role}</h3>
                    <Bullets items=MINOR.bullets />
                </div>
            </div>
        </section>
    }
}
