use leptos::prelude::*;

use crate::components::SectionHeader;
use crate::content::PROFILE;
use crate::sections::Section;

#[component]
pub fn Contact() -> impl IntoView {
    let mailto = PROFILE.mailto();

    view! {
        <section id=Section::Contact.anchor() class="section">
            <SectionHeader section=Section::Contact />
            <div class="card contactCard">
                <div>
                    <div class="contactLabel">"Email"</div>
                    <a class="contactValue" href=mailto.clone()>{PROFILE.email}</a>
                    <div class="muted spacedSmall">
                        "Tip: include a link to the job posting or a short description of what you\u{2019}re building."
                    </div>
                </div>
                <div class="contactActions">
                    <a class="btn btnPrimary" href=mailto>"Email me"</a>
                    <a class="btn btnGhost" href=Section::Top.href()>"Back to top"</a>
                </div>
            </div>
        </section>
    }
}
