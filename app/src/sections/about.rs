use leptos::prelude::*;

use crate::components::{Bullets, SectionHeader};
use crate::content::LOOKING_FOR;
use crate::sections::Section;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.anchor() class="section">
            <SectionHeader section=Section::About />
            <div class="grid2">
                <div class="card">
                    <h3>"What I do"</h3>
                    <p>
                        "I build software across the stack, with a soft spot for desktop apps, automation, \
                         and systems that need to be reliable under pressure. I care about clean architecture, \
                         readable code, and UX that feels intentional."
                    </p>
                    <p class="muted">
                        "This site is intentionally simple so you can find what you need fast."
                    </p>
                </div>
                <div class="card">
                    <h3>"What I\u{2019}m looking for"</h3>
                    <Bullets items=LOOKING_FOR />
                </div>
            </div>
        </section>
    }
}
