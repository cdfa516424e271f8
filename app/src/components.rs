use leptos::either::Either;
use leptos::prelude::*;

use crate::content::{self, TimelineEntry, PROFILE};
use crate::sections::Section;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <header class="nav">
            <a class="brand" href=Section::Top.href() aria-label="Go to top">
                <div class="brandMark" aria-hidden="true">
                    <span>{PROFILE.brand_mark}</span>
                    <small>{PROFILE.brand_suffix}</small>
                </div>
                <div class="brandText">
                    <div class="brandTitle">{PROFILE.brand_title}</div>
                    <div class="brandSub">{PROFILE.brand_subtitle}</div>
                </div>
            </a>
            <nav class="links" aria-label="Primary">
                {Section::NAV
                    .iter()
                    .map(|section| match section.nav_class() {
                        Some(class) => Either::Left(view! {
                            <a class=class href=section.href()>{section.title()}</a>
                        }),
                        None => Either::Right(view! {
                            <a href=section.href()>{section.title()}</a>
                        }),
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}

#[component]
pub fn Footer(#[prop(optional)] year: Option<i32>) -> impl IntoView {
    let year = year.unwrap_or_else(content::current_year);

    view! {
        <footer class="footer">
            <div class="footerInner">
                <div class="muted">{format!("\u{a9} {} {}", year, PROFILE.brand_title)}</div>
                <div class="footerLinks">
                    <a href=Section::Projects.href()>{Section::Projects.title()}</a>
                    <a href=Section::Resume.href()>{Section::Resume.title()}</a>
                    <a href=PROFILE.mailto()>"Email"</a>
                </div>
            </div>
        </footer>
    }
}

#[component]
pub fn Chip(text: &'static str) -> impl IntoView {
    view! { <span class="chip">{text}</span> }
}

#[component]
pub fn ChipRow(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="chipRow">
            {items.iter().map(|item| view! { <Chip text=*item /> }).collect_view()}
        </div>
    }
}

#[component]
pub fn Bullets(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="bullets">
            {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
        </ul>
    }
}

#[component]
pub fn SectionHeader(section: Section) -> impl IntoView {
    view! {
        <div class="sectionHeader">
            <h2>{section.title()}</h2>
            <p>{section.blurb()}</p>
        </div>
    }
}

#[component]
pub fn TimelineItem(entry: &'static TimelineEntry) -> impl IntoView {
    view! {
        <div class="timelineItem">
            <div class="timelineTop">
                <div class="timelineRole">{entry.role}</div>
                {(!entry.meta.is_empty())
                    .then(|| view! { <div class="timelineMeta">{entry.meta}</div> })}
            </div>
            <Bullets items=entry.bullets />
        </div>
    }
}
