//! Page geometry model.
//!
//! The strategy here is intentionally simple: every section is rendered at a
//! height computed up front from the document's shape and the appearance
//! config, so scroll arithmetic (reveal thresholds, centerline focus, jump
//! targets) operates on exact positions instead of querying the renderer.
//! Text heights are approximated from character counts; the approximation
//! only needs to be stable, not typographically perfect, because the view
//! renders each section at exactly the height computed here.

use crate::config::AppConfig;
use crate::content::{Portfolio, SectionId};

/// Vertical padding inside every section container.
pub const SECTION_PADDING_PX: f32 = 32.0;
/// Extra height for a section heading row.
pub const HEADING_HEIGHT_PX: f32 = 44.0;
/// Fixed height of the hero block (name, title, tagline, profile image).
pub const HERO_HEIGHT_PX: f32 = 520.0;
/// Height of one timeline entry row.
pub const TIMELINE_ITEM_HEIGHT_PX: f32 = 120.0;
/// Height of one row of skill tags.
pub const SKILL_ROW_HEIGHT_PX: f32 = 48.0;
/// Tags per rendered row within a skill group.
pub const SKILL_TAGS_PER_ROW: usize = 6;
/// Height of one project card.
pub const PROJECT_CARD_HEIGHT_PX: f32 = 180.0;
/// Height of one contact row.
pub const CONTACT_ITEM_HEIGHT_PX: f32 = 40.0;

/// Geometry of one section within the scrollable page.
#[derive(Debug, Clone)]
pub struct SectionLayout {
    pub id: SectionId,
    /// Absolute top within the page content, in pixels.
    pub top: f32,
    pub height: f32,
}

impl SectionLayout {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Geometry of one timeline entry, positioned absolutely within the page.
#[derive(Debug, Clone)]
pub struct TimelineItemLayout {
    pub top: f32,
    pub height: f32,
}

/// Precomputed geometry for the whole page.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub sections: Vec<SectionLayout>,
    pub timeline_items: Vec<TimelineItemLayout>,
    pub content_height: f32,
}

impl PageLayout {
    pub fn section(&self, id: SectionId) -> Option<&SectionLayout> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// The section whose vertical bounds contain `y`, if any. Used for the
    /// centerline focus rule: bounds are half-open so a coordinate exactly on
    /// a boundary belongs to the lower section.
    pub fn section_at(&self, y: f32) -> Option<SectionId> {
        self.sections
            .iter()
            .find(|section| section.top <= y && y < section.bottom())
            .map(|section| section.id)
    }
}

/// Compute the geometry for every section present in the document.
pub fn compute_layout(portfolio: &Portfolio, config: &AppConfig) -> PageLayout {
    let line_height = config.font_size as f32 * config.line_spacing;
    let mut sections = Vec::new();
    let mut timeline_items = Vec::new();
    let mut cursor = 0.0f32;

    for id in portfolio.sections_present() {
        let height = match id {
            SectionId::Hero => HERO_HEIGHT_PX,
            SectionId::About => {
                let body: f32 = portfolio
                    .about
                    .paragraphs
                    .iter()
                    .map(|para| paragraph_height(para, config.content_width, line_height))
                    .sum();
                HEADING_HEIGHT_PX + body + SECTION_PADDING_PX * 2.0
            }
            SectionId::Experience => {
                let items = portfolio.experience.len() as f32;
                let height =
                    HEADING_HEIGHT_PX + items * TIMELINE_ITEM_HEIGHT_PX + SECTION_PADDING_PX * 2.0;
                let items_top = cursor + SECTION_PADDING_PX + HEADING_HEIGHT_PX;
                for index in 0..portfolio.experience.len() {
                    timeline_items.push(TimelineItemLayout {
                        top: items_top + index as f32 * TIMELINE_ITEM_HEIGHT_PX,
                        height: TIMELINE_ITEM_HEIGHT_PX,
                    });
                }
                height
            }
            SectionId::Skills => {
                let rows: usize = portfolio
                    .skills
                    .iter()
                    .filter(|group| !group.tags.is_empty())
                    .map(|group| group.tags.len().div_ceil(SKILL_TAGS_PER_ROW))
                    .sum();
                let groups = portfolio
                    .skills
                    .iter()
                    .filter(|group| !group.tags.is_empty())
                    .count() as f32;
                HEADING_HEIGHT_PX
                    + groups * HEADING_HEIGHT_PX
                    + rows as f32 * SKILL_ROW_HEIGHT_PX
                    + SECTION_PADDING_PX * 2.0
            }
            SectionId::Projects => {
                HEADING_HEIGHT_PX
                    + portfolio.projects.len() as f32 * PROJECT_CARD_HEIGHT_PX
                    + SECTION_PADDING_PX * 2.0
            }
            SectionId::Contact => {
                HEADING_HEIGHT_PX
                    + portfolio.contact.items.len() as f32 * CONTACT_ITEM_HEIGHT_PX
                    + SECTION_PADDING_PX * 2.0
            }
        };

        sections.push(SectionLayout {
            id,
            top: cursor,
            height,
        });
        cursor += height + config.section_spacing;
    }

    // The trailing spacing after the last section stays as bottom padding.
    PageLayout {
        sections,
        timeline_items,
        content_height: cursor,
    }
}

/// Approximate rendered height of one paragraph at the configured width.
fn paragraph_height(text: &str, content_width: f32, line_height: f32) -> f32 {
    // Average glyph advance of roughly 0.55em keeps the estimate stable
    // across font sizes without measuring actual glyphs.
    let chars_per_line = (content_width / (line_height * 0.55)).floor().max(20.0) as usize;
    let lines = text.chars().count().div_ceil(chars_per_line).max(1);
    lines as f32 * line_height + line_height * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::parse_portfolio;

    fn sample_portfolio() -> Portfolio {
        parse_portfolio(
            r#"
[hero]
name = "A"

[about]
paragraphs = ["Some words about the author, long enough to wrap a few lines when rendered at the configured content width."]

[[experience]]
period = "2021"
role = "Engineer"

[[experience]]
period = "2023"
role = "Senior Engineer"

[[skills]]
name = "Languages"
tags = ["Rust", "C", "Python", "Go", "Zig", "Lua", "SQL"]

[[projects]]
name = "one"

[contact]
items = [{ label = "Email", value = "a@example.com" }]
"#,
        )
        .unwrap()
    }

    #[test]
    fn section_tops_are_strictly_increasing() {
        let layout = compute_layout(&sample_portfolio(), &AppConfig::default());
        for pair in layout.sections.windows(2) {
            assert!(pair[1].top > pair[0].top);
            assert!(pair[1].top >= pair[0].bottom());
        }
        assert!(layout.content_height >= layout.sections.last().unwrap().bottom());
    }

    #[test]
    fn timeline_items_sit_inside_the_experience_section() {
        let layout = compute_layout(&sample_portfolio(), &AppConfig::default());
        let experience = layout.section(SectionId::Experience).unwrap();
        assert_eq!(layout.timeline_items.len(), 2);
        for item in &layout.timeline_items {
            assert!(item.top >= experience.top);
            assert!(item.top + item.height <= experience.bottom());
        }
        assert!(layout.timeline_items[1].top > layout.timeline_items[0].top);
    }

    #[test]
    fn section_at_uses_half_open_bounds() {
        let layout = compute_layout(&sample_portfolio(), &AppConfig::default());
        let hero = layout.section(SectionId::Hero).unwrap();
        assert_eq!(layout.section_at(hero.top), Some(SectionId::Hero));
        assert_eq!(layout.section_at(hero.bottom() - 0.5), Some(SectionId::Hero));
        // The exact bottom edge falls into the inter-section gap.
        assert_eq!(layout.section_at(hero.bottom()), None);
        assert_eq!(layout.section_at(-1.0), None);
    }

    #[test]
    fn seven_tags_span_two_skill_rows() {
        let portfolio = sample_portfolio();
        let config = AppConfig::default();
        let layout = compute_layout(&portfolio, &config);
        let skills = layout.section(SectionId::Skills).unwrap();
        let expected = HEADING_HEIGHT_PX
            + HEADING_HEIGHT_PX
            + 2.0 * SKILL_ROW_HEIGHT_PX
            + SECTION_PADDING_PX * 2.0;
        assert!((skills.height - expected).abs() < 0.01);
    }
}
