//! The literal records the page is rendered from.
//!
//! Everything here is `'static` and immutable: the page is a pure function of
//! these tables.

mod data;
pub mod errors;

use chrono::Datelike;
use std::collections::HashSet;

pub use data::{
    EDUCATION, EXPERIENCE, HIGHLIGHTS, LOOKING_FOR, META_CARDS, MINOR, PROFILE, PROFILE_LINKS,
    PROJECTS, SCHOOL, SKILLS,
};
pub use errors::{Error, Result};

/// Label and target of a button-style link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub tagline: &'static str,
    pub bullets: &'static [&'static str],
    pub stack: &'static [&'static str],
    pub links: Option<&'static [Link]>,
}

impl Project {
    /// The project links, `None` being the same as no links.
    pub fn links(&self) -> &'static [Link] {
        self.links.unwrap_or_default()
    }

    /// Id of the project card, so that it can be linked to directly.
    pub fn html_id(&self) -> String {
        format!("project-{}", slug::slugify(self.title))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub label: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetaCard {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProfileLink {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub href: &'static str,
    /// Opens in a new tab.
    pub external: bool,
}

/// One row of the resume, an empty `meta` is not rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineEntry {
    pub role: &'static str,
    pub meta: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub brand_mark: &'static str,
    pub brand_suffix: &'static str,
    pub brand_title: &'static str,
    pub brand_subtitle: &'static str,
    pub email: &'static str,
    pub description: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// The year shown in the footer, in UTC so that the server and the browser
/// agree regardless of their time zones.
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// Check the shipped tables, see [`validate_tables`].
pub fn validate() -> Result<()> {
    validate_tables(PROJECTS, SKILLS)
}

/// Labels used as list keys must be unique within their own list, and links
/// need both a label and a target.
pub fn validate_tables(projects: &[Project], skills: &[SkillGroup]) -> Result<()> {
    ensure_unique("projects", projects.iter().map(|project| project.title))?;
    for project in projects {
        ensure_unique(project.title, project.stack.iter().copied())?;
        ensure_unique(project.title, project.links().iter().map(|link| link.label))?;
        for link in project.links() {
            if link.label.trim().is_empty() || link.href.trim().is_empty() {
                return Err(Error::EmptyLink {
                    list: String::from(project.title),
                    label: String::from(link.label),
                });
            }
        }
    }

    ensure_unique("skills", skills.iter().map(|group| group.label))?;
    for group in skills {
        ensure_unique(group.label, group.items.iter().copied())?;
    }

    Ok(())
}

fn ensure_unique<'a>(list: &str, keys: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(Error::DuplicateKey {
                list: String::from(list),
                key: String::from(key),
            });
        }
    }
    Ok(())
}

/// Links still pointing to `#`, as `(where, label)` pairs.
pub fn placeholder_links() -> Vec<(&'static str, &'static str)> {
    let projects = PROJECTS.iter().flat_map(|project| {
        project
            .links()
            .iter()
            .filter(|link| link.href == "#")
            .map(move |link| (project.title, link.label))
    });
    let profile = PROFILE_LINKS
        .iter()
        .filter(|link| link.href == "#")
        .map(|link| ("profile links", link.title));
    projects.chain(profile).collect()
}

/// Log every placeholder link, returns how many were found.
pub fn warn_placeholder_links() -> usize {
    let placeholders = placeholder_links();
    for (owner, label) in placeholders.iter() {
        log::warn!("Link \"{}\" of {} still points to a placeholder", label, owner);
    }
    placeholders.len()
}
