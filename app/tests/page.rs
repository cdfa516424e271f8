use app::components::{Footer, NavBar};
use app::content::{self, Link, Project, PROJECTS, SKILLS};
use app::pages::home::Index;
use app::sections::{ProjectCard, Section, SkillCard};
use chrono::Datelike;
use leptos::prelude::*;

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn render<V: IntoView + 'static>(view: impl FnOnce() -> V) -> String {
    setup();

    let owner = Owner::new();
    // Drop the markers left between adjacent text nodes for hydration.
    owner.with(|| view().into_view().to_html()).replace("<!>", "")
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn chips(html: &str) -> Vec<&str> {
    html.split("<span class=\"chip\">")
        .skip(1)
        .filter_map(|rest| rest.split('<').next())
        .collect()
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("`{}' is missing from the page", needle))
}

static NO_LINKS: Project = Project {
    title: "Quiet",
    tagline: "No links here",
    bullets: &["Only bullets."],
    stack: &["Rust"],
    links: None,
};

static EMPTY_LINKS: Project = Project {
    title: "Hushed",
    tagline: "Empty link list",
    bullets: &[],
    stack: &[],
    links: Some(&[]),
};

static WITH_LINKS: Project = Project {
    title: "Linked",
    tagline: "Two links",
    bullets: &[],
    stack: &[],
    links: Some(&[
        Link {
            label: "Source",
            href: "https://example.org/source",
        },
        Link {
            label: "Docs",
            href: "https://example.org/docs",
        },
    ]),
};

#[test]
fn project_cards_show_every_field_in_order() {
    for project in PROJECTS {
        let html = render(|| view! { <ProjectCard project=project /> });

        assert!(html.contains(&escape(project.title)));
        assert!(html.contains(&escape(project.tagline)));
        let mut last = 0;
        for bullet in project.bullets {
            let at = position(&html, &format!("<li>{}</li>", escape(bullet)));
            assert!(at > last, "bullets of {} are out of order", project.title);
            last = at;
        }
        assert_eq!(project.stack.to_vec(), chips(&html));
        assert!(html.contains(&format!("id=\"{}\"", project.html_id())));
    }
}

#[test]
fn links_block_is_omitted_without_links() {
    for project in [&NO_LINKS, &EMPTY_LINKS] {
        let html = render(|| view! { <ProjectCard project=project /> });
        assert!(!html.contains("projectLinks"), "{}", html);
    }
}

#[test]
fn links_are_rendered_with_label_and_href() {
    let html = render(|| view! { <ProjectCard project={&WITH_LINKS} /> });

    assert!(html.contains("projectLinks"));
    let source = position(&html, "href=\"https://example.org/source\">Source</a>");
    let docs = position(&html, "href=\"https://example.org/docs\">Docs</a>");
    assert!(source < docs);
}

#[test]
fn skill_cards_show_exactly_their_items() {
    for group in SKILLS {
        let html = render(|| view! { <SkillCard group=group /> });

        assert!(html.contains(&format!("<h3>{}</h3>", escape(group.label))));
        let expected: Vec<String> = group.items.iter().map(|item| escape(item)).collect();
        assert_eq!(expected, chips(&html));
    }
}

#[test]
fn navigation_anchors_resolve() {
    let html = render(|| view! { <Index /> });

    let targets: Vec<&str> = html
        .split("href=\"#")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .filter(|target| !target.is_empty())
        .collect();
    for section in Section::ALL {
        assert!(targets.contains(&section.anchor()), "nothing links to #{}", section.anchor());
    }
    for target in targets {
        assert!(
            html.contains(&format!("id=\"{}\"", target)),
            "#{} does not resolve",
            target
        );
    }
}

#[test]
fn footer_shows_the_current_year() {
    let html = render(|| view! { <Footer /> });
    // The local clock may be on either side of New Year compared to UTC.
    let local = chrono::Local::now().year();
    assert!(
        (local - 1..=local + 1)
            .any(|year| html.contains(&format!("\u{a9} {} T-wood Development", year))),
        "{}",
        html
    );

    let html = render(|| view! { <Footer year=1999 /> });
    assert!(html.contains("\u{a9} 1999 T-wood Development"));
}

#[test]
fn only_the_contact_nav_link_has_a_class() {
    let html = render(|| view! { <NavBar /> });

    assert!(!html.contains("class=\"\""), "{}", html);
    assert!(html.contains("<a href=\"#about\">About</a>"));
    assert!(html.contains("<a class=\"btn btnGhost\" href=\"#contact\">Contact</a>"));
}

#[test]
fn page_lists_every_project_and_skill_group_once() {
    let html = render(|| view! { <Index /> });

    assert_eq!(3, html.matches("class=\"card projectCard\"").count());
    assert_eq!(5, html.matches("class=\"card skillCard\"").count());

    let titles: Vec<usize> = PROJECTS
        .iter()
        .map(|project| position(&html, &format!(">{}</h3>", escape(project.title))))
        .collect();
    assert!(titles.windows(2).all(|pair| pair[0] < pair[1]));

    let labels: Vec<usize> = SKILLS
        .iter()
        .map(|group| position(&html, &format!("<h3>{}</h3>", escape(group.label))))
        .collect();
    assert!(labels.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn sections_follow_page_order() {
    let html = render(|| view! { <Index /> });

    let nav = position(&html, "class=\"nav\"");
    let anchors: Vec<usize> = Section::ALL
        .iter()
        .map(|section| position(&html, &format!("id=\"{}\"", section.anchor())))
        .collect();
    let footer = position(&html, "class=\"footer\"");

    assert!(nav < anchors[0]);
    assert!(anchors.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(anchors[anchors.len() - 1] < footer);
}

#[test]
fn email_links_use_mailto() {
    let html = render(|| view! { <Index /> });

    let mailto = format!("href=\"{}\"", content::PROFILE.mailto());
    assert_eq!(5, html.matches(&mailto).count());
}
