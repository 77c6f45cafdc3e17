//! Portfolio document model and loader.
//!
//! The viewer displays a single TOML document describing the page: a hero
//! block followed by about, experience timeline, skill groups, projects and
//! contact sections. Empty sections are simply left off the page, so a
//! minimal document renders without errors.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Stable identifier for one page section. Section order on the page is the
/// declaration order here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Hero,
    About,
    Experience,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Portfolio {
    pub hero: Hero,
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub experience: Vec<TimelineEntry>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub contact: Contact,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Hero {
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct About {
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimelineEntry {
    pub period: String,
    pub role: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub items: Vec<ContactItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactItem {
    pub label: String,
    pub value: String,
}

impl Portfolio {
    /// Sections actually present in this document, in page order. The hero
    /// is always present; the rest appear only when they have content.
    pub fn sections_present(&self) -> Vec<SectionId> {
        let mut sections = vec![SectionId::Hero];
        if !self.about.paragraphs.is_empty() {
            sections.push(SectionId::About);
        }
        if !self.experience.is_empty() {
            sections.push(SectionId::Experience);
        }
        if self.skills.iter().any(|group| !group.tags.is_empty()) {
            sections.push(SectionId::Skills);
        }
        if !self.projects.is_empty() {
            sections.push(SectionId::Projects);
        }
        if !self.contact.items.is_empty() {
            sections.push(SectionId::Contact);
        }
        sections
    }

    pub fn section_count(&self) -> usize {
        self.sections_present().len()
    }
}

/// Load and parse a portfolio document.
pub fn load_portfolio(path: &Path) -> Result<Portfolio> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read portfolio file {}", path.display()))?;
    parse_portfolio(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

pub fn parse_portfolio(raw: &str) -> Result<Portfolio> {
    let portfolio: Portfolio = toml::from_str(raw)?;
    Ok(portfolio)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[hero]
name = "Avery Quinn"
title = "Systems Engineer"
tagline = "I build quiet, reliable software."

[about]
paragraphs = ["First paragraph.", "Second paragraph."]

[[experience]]
period = "2022 - Present"
role = "Senior Engineer"
organization = "Example Co"
summary = "Shipped things."

[[skills]]
name = "Languages"
tags = ["Rust", "Zig"]

[[projects]]
name = "folio"
description = "This viewer."
tech = ["iced"]

[contact]
items = [{ label = "Email", value = "avery@example.com" }]
"#;

    #[test]
    fn parses_full_document() {
        let portfolio = parse_portfolio(SAMPLE).unwrap();
        assert_eq!(portfolio.hero.name, "Avery Quinn");
        assert_eq!(portfolio.about.paragraphs.len(), 2);
        assert_eq!(portfolio.experience.len(), 1);
        assert_eq!(portfolio.projects.len(), 1);
        assert_eq!(
            portfolio.sections_present(),
            vec![
                SectionId::Hero,
                SectionId::About,
                SectionId::Experience,
                SectionId::Skills,
                SectionId::Projects,
                SectionId::Contact,
            ]
        );
    }

    #[test]
    fn hero_only_document_has_single_section() {
        let portfolio = parse_portfolio("[hero]\nname = \"A\"\n").unwrap();
        assert_eq!(portfolio.sections_present(), vec![SectionId::Hero]);
    }

    #[test]
    fn skill_groups_without_tags_do_not_produce_a_section() {
        let raw = "[hero]\nname = \"A\"\n\n[[skills]]\nname = \"Empty\"\n";
        let portfolio = parse_portfolio(raw).unwrap();
        assert_eq!(portfolio.sections_present(), vec![SectionId::Hero]);
    }
}
