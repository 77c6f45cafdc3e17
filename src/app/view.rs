use super::messages::Message;
use super::state::{
    App, COMPACT_NAV_BREAKPOINT_PX, NAV_RAIL_EXPANDED_WIDTH_PX, NAV_RAIL_WIDTH_PX, PAGE_SCROLL_ID,
};
use crate::content::{Project, SectionId, SkillGroup, TimelineEntry};
use crate::layout::{
    PROJECT_CARD_HEIGHT_PX, SECTION_PADDING_PX, SKILL_TAGS_PER_ROW, SectionLayout,
    TIMELINE_ITEM_HEIGHT_PX,
};
use iced::alignment::Horizontal;
use iced::widget::text::LineHeight;
use iced::widget::{
    Column, Row, Space, button, column, container, mouse_area, row, scrollable, text,
};
use iced::{Background, Border, Element, Length, Theme, border};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        row![self.nav_rail(), self.page()].into()
    }

    /// Fixed rail of one dot per section, plus the expand and theme toggles.
    /// Narrow viewports force the collapsed rail.
    fn nav_rail(&self) -> Element<'_, Message> {
        let expanded = self.nav.expanded
            && self.viewport.viewport_width >= COMPACT_NAV_BREAKPOINT_PX;

        let toggle = button(text(if expanded { "«" } else { "»" }).size(16.0))
            .on_press(Message::NavToggleClicked)
            .style(button::text);

        let mut rail = column![toggle].spacing(12).padding(16);
        for id in &self.nav.dots {
            let id = *id;
            let active = self.nav.is_active(id);
            let marker = text(if active { "●" } else { "○" }).size(16.0);
            let label: Element<'_, Message> = if expanded {
                row![marker, text(id.label()).size(14.0)]
                    .spacing(8)
                    .into()
            } else {
                marker.into()
            };
            rail = rail.push(
                button(label)
                    .on_press(Message::NavDotClicked(id))
                    .style(button::text)
                    .padding(4),
            );
        }
        rail = rail.push(
            button(text("◐").size(16.0))
                .on_press(Message::ToggleTheme)
                .style(button::text),
        );

        container(rail)
            .width(Length::Fixed(if expanded {
                NAV_RAIL_EXPANDED_WIDTH_PX
            } else {
                NAV_RAIL_WIDTH_PX
            }))
            .height(Length::Fill)
            .into()
    }

    /// The scrollable page. Every section is rendered at exactly the height
    /// the layout model computed for it, so scroll arithmetic stays in sync
    /// with what is on screen.
    fn page(&self) -> Element<'_, Message> {
        let mut sections = Column::new().spacing(self.config.section_spacing);
        for (index, section) in self.layout.sections.iter().enumerate() {
            sections = sections.push(self.section_container(index, section));
        }

        let content = container(sections.max_width(self.config.content_width))
            .center_x(Length::Fill);

        scrollable(content)
            .on_scroll(|viewport| Message::Scrolled {
                offset: viewport.absolute_offset(),
                viewport_width: viewport.bounds().width,
                viewport_height: viewport.bounds().height,
                content_height: viewport.content_bounds().height,
            })
            .id(PAGE_SCROLL_ID.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn section_container<'a>(
        &'a self,
        index: usize,
        section: &'a SectionLayout,
    ) -> Element<'a, Message> {
        let revealed = self.reveal.sections.get(index).copied().unwrap_or(false);
        let body: Element<'a, Message> = if revealed {
            match section.id {
                SectionId::Hero => self.hero_section(),
                SectionId::About => self.about_section(),
                SectionId::Experience => self.experience_section(),
                SectionId::Skills => self.skills_section(),
                SectionId::Projects => self.projects_section(),
                SectionId::Contact => self.contact_section(),
            }
        } else {
            // An unrevealed section holds its slot so the page geometry
            // matches the layout model while the content stays hidden.
            Space::new(Length::Fill, Length::Fixed(section.height)).into()
        };

        container(body)
            .width(Length::Fill)
            .height(Length::Fixed(section.height))
            .padding(SECTION_PADDING_PX)
            .into()
    }

    fn hero_section(&self) -> Element<'_, Message> {
        let hero = &self.portfolio.hero;
        let mut block = Column::new()
            .spacing(12)
            .align_x(Horizontal::Center)
            .width(Length::Fill);
        if let Some(handle) = &self.profile_image {
            block = block.push(iced::widget::image(handle.clone()).height(Length::Fixed(180.0)));
        }
        block = block.push(text(&hero.name).size(42.0));
        if !hero.title.is_empty() {
            block = block.push(text(&hero.title).size(22.0));
        }
        if !hero.tagline.is_empty() {
            block = block.push(text(&hero.tagline).size(16.0));
        }
        container(block).center_y(Length::Fill).into()
    }

    fn about_section(&self) -> Element<'_, Message> {
        let mut block = Column::new().spacing(16);
        block = block.push(section_heading("About"));
        for para in &self.portfolio.about.paragraphs {
            block = block.push(
                text(para)
                    .size(self.config.font_size as f32)
                    .line_height(LineHeight::Relative(self.config.line_spacing)),
            );
        }
        block.into()
    }

    fn experience_section(&self) -> Element<'_, Message> {
        let mut block = Column::new();
        block = block.push(section_heading("Experience"));
        for (index, entry) in self.portfolio.experience.iter().enumerate() {
            block = block.push(self.timeline_item(index, entry));
        }
        block.into()
    }

    /// One timeline row. Items stay blank until their staggered flip lands.
    fn timeline_item<'a>(
        &'a self,
        index: usize,
        entry: &'a TimelineEntry,
    ) -> Element<'a, Message> {
        let visible = self
            .reveal
            .timeline
            .get(index)
            .map(|item| item.visible)
            .unwrap_or(false);
        let height = Length::Fixed(TIMELINE_ITEM_HEIGHT_PX);
        if !visible {
            return Space::new(Length::Fill, height).into();
        }

        let details = column![
            text(&entry.role).size(18.0),
            text(&entry.organization).size(14.0),
            text(&entry.summary).size(14.0),
        ]
        .spacing(4);

        container(
            row![
                text(&entry.period).size(14.0).width(Length::Fixed(120.0)),
                details,
            ]
            .spacing(16),
        )
        .height(height)
        .padding([8, 0])
        .into()
    }

    fn skills_section(&self) -> Element<'_, Message> {
        let mut block = Column::new().spacing(12);
        block = block.push(section_heading("Skills"));
        for (group_idx, group) in self.portfolio.skills.iter().enumerate() {
            if group.tags.is_empty() {
                continue;
            }
            block = block.push(self.skill_group(group_idx, group));
        }
        block.into()
    }

    fn skill_group<'a>(&'a self, group_idx: usize, group: &'a SkillGroup) -> Element<'a, Message> {
        let mut rows = Column::new().spacing(8);
        rows = rows.push(text(&group.name).size(18.0));
        for (row_idx, chunk) in group.tags.chunks(SKILL_TAGS_PER_ROW).enumerate() {
            let mut tag_row = Row::new().spacing(8);
            for (offset, tag) in chunk.iter().enumerate() {
                let tag_idx = row_idx * SKILL_TAGS_PER_ROW + offset;
                let active = self
                    .interact
                    .active_tags
                    .get(group_idx)
                    .and_then(|tags| tags.get(tag_idx))
                    .copied()
                    .unwrap_or(false);
                tag_row = tag_row.push(
                    button(text(tag.as_str()).size(13.0))
                        .on_press(Message::SkillTagClicked {
                            group: group_idx,
                            tag: tag_idx,
                        })
                        .style(move |theme, status| tag_style(theme, status, active))
                        .padding([6, 12]),
                );
            }
            rows = rows.push(tag_row);
        }
        rows.into()
    }

    fn projects_section(&self) -> Element<'_, Message> {
        let mut block = Column::new().spacing(12);
        block = block.push(section_heading("Projects"));
        for (index, project) in self.portfolio.projects.iter().enumerate() {
            block = block.push(self.project_card(index, project));
        }
        block.into()
    }

    /// Hover lifts the card, a click flips it between its description and
    /// its tech/link details.
    fn project_card<'a>(&'a self, index: usize, project: &'a Project) -> Element<'a, Message> {
        let hovered = self.interact.hovered_card == Some(index);
        let expanded = self
            .interact
            .expanded_cards
            .get(index)
            .copied()
            .unwrap_or(false);

        let mut body = column![text(&project.name).size(20.0)].spacing(8);
        if expanded {
            if !project.tech.is_empty() {
                body = body.push(text(project.tech.join("  ·  ")).size(13.0));
            }
            if let Some(link) = &project.link {
                body = body.push(text(link.as_str()).size(13.0));
            }
        } else if !project.description.is_empty() {
            body = body.push(text(&project.description).size(14.0));
        }

        let card = container(body)
            .width(Length::Fill)
            .height(Length::Fixed(PROJECT_CARD_HEIGHT_PX - 12.0))
            .padding(16)
            .style(move |theme| card_style(theme, hovered, expanded));

        mouse_area(card)
            .on_enter(Message::ProjectCardEntered(index))
            .on_exit(Message::ProjectCardExited(index))
            .on_press(Message::ProjectCardClicked(index))
            .into()
    }

    fn contact_section(&self) -> Element<'_, Message> {
        let mut block = Column::new().spacing(8);
        block = block.push(section_heading("Contact"));
        for item in &self.portfolio.contact.items {
            block = block.push(
                row![
                    text(&item.label).size(14.0).width(Length::Fixed(120.0)),
                    text(&item.value).size(14.0),
                ]
                .spacing(16),
            );
        }
        block.into()
    }
}

fn section_heading(label: &'static str) -> Element<'static, Message> {
    text(label).size(28.0).into()
}

fn tag_style(theme: &Theme, status: button::Status, active: bool) -> button::Style {
    let palette = theme.extended_palette();
    let (background, text_color) = if active {
        (palette.primary.strong.color, palette.primary.strong.text)
    } else if matches!(status, button::Status::Hovered) {
        (palette.background.strong.color, palette.background.strong.text)
    } else {
        (palette.background.weak.color, palette.background.weak.text)
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: border::rounded(12.0),
        ..button::Style::default()
    }
}

fn card_style(theme: &Theme, hovered: bool, expanded: bool) -> container::Style {
    let palette = theme.extended_palette();
    let border_color = if expanded {
        palette.primary.strong.color
    } else if hovered {
        palette.background.strong.color
    } else {
        palette.background.weak.color
    };
    container::Style {
        background: Some(Background::Color(if hovered {
            palette.background.strong.color
        } else {
            palette.background.weak.color
        })),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}
