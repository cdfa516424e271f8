use leptos::prelude::*;

use crate::content::{HIGHLIGHTS, META_CARDS, PROFILE, PROFILE_LINKS};
use crate::sections::Section;

#[component]
pub fn Hero() -> impl IntoView {
    let mailto = PROFILE.mailto();

    view! {
        <main id=Section::Top.anchor() class="hero">
            <div class="heroLeft">
                <div class="kicker">"Portfolio"</div>
                <h1 class="headline">"Building clean software with sharp edges and softer UX."</h1>
                <p class="subhead">
                    {format!(
                        "I\u{2019}m {}. I build cross-platform apps, backend systems, and data-driven tools. \
                         This site is a quick map of what I\u{2019}ve shipped and what I\u{2019}m good at.",
                        PROFILE.name,
                    )}
                </p>

                <div class="ctaRow">
                    <a class="btn btnPrimary" href=Section::Projects.href()>"View Projects"</a>
                    <a class="btn btnGhost" href=mailto.clone()>{PROFILE.email}</a>
                </div>

                <div class="metaRow">
                    {META_CARDS
                        .iter()
                        .map(|card| {
                            view! {
                                <div class="metaCard">
                                    <div class="metaLabel">{card.label}</div>
                                    <div class="metaValue">{card.value}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <aside class="heroRight" aria-label="Highlights">
                <div class="panel">
                    <div class="panelTitle">"Quick Highlights"</div>
                    <ul class="panelList">
                        {HIGHLIGHTS
                            .iter()
                            .map(|highlight| view! { <li><span class="dot"></span>{*highlight}</li> })
                            .collect_view()}
                    </ul>
                    <div class="panelActions">
                        <a class="btn btnSmall btnGhost" href=Section::Resume.href()>"Resume Sections"</a>
                        <a class="btn btnSmall btnGhost" href=Section::Contact.href()>"Get in touch"</a>
                    </div>
                </div>

                <div class="panel soft">
                    <div class="panelTitle">"Links"</div>
                    <div class="linkGrid">
                        {PROFILE_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        class="linkCard"
                                        href=link.href
                                        target=link.external.then_some("_blank")
                                        rel=link.external.then_some("noreferrer")
                                    >
                                        <div class="linkCardTitle">{link.title}</div>
                                        <div class="linkCardSub">{link.subtitle}</div>
                                    </a>
                                }
                            })
                            .collect_view()}
                        <a class="linkCard" href=mailto>
                            <div class="linkCardTitle">"Email"</div>
                            <div class="linkCardSub">{PROFILE.email}</div>
                        </a>
                    </div>
                </div>
            </aside>
        </main>
    }
}
