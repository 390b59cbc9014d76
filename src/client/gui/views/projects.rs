//! Practice project suggestions fetched per topic.

use iced::widget::{Column, Container, Row, Text};
use iced::{Alignment, Color, Element, Font, Length};
use iced_aw::{style::BadgeStyles, Badge};

use crate::client::models::app_state::{FetchPhase, GapAppState};
use crate::client::models::content::Difficulty;
use crate::client::models::messages::Message;

const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);
const ERROR_RED: Color = Color::from_rgb(1.0, 0.3, 0.3);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn card_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            radius: 10.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn difficulty_badge<'a>(difficulty: Difficulty) -> Element<'a, Message> {
    let style = match difficulty {
        Difficulty::Beginner => BadgeStyles::Success,
        Difficulty::Intermediate => BadgeStyles::Warning,
        Difficulty::Advanced => BadgeStyles::Danger,
    };
    Badge::new(Text::new(difficulty.label()).size(12))
        .style(style)
        .into()
}

pub fn view(state: &GapAppState) -> Element<Message> {
    let projects = &state.projects;

    let heading = Column::new()
        .spacing(4)
        .push(
            Text::new(format!("Projects for {}", projects.topic))
                .font(BOLD_FONT)
                .size(24)
                .style(TEXT_PRIMARY),
        )
        .push(
            Text::new("Build something to make the topic stick.")
                .size(14)
                .style(TEXT_SECONDARY),
        );

    let content: Element<Message> = match &projects.phase {
        FetchPhase::Loading => Text::new("Loading project ideas...").size(14).style(TEXT_SECONDARY).into(),
        FetchPhase::Failed(message) => Text::new(message).size(14).style(ERROR_RED).into(),
        FetchPhase::Loaded(list) if list.is_empty() => {
            Text::new("No project suggestions came back for this topic.")
                .size(14)
                .style(TEXT_SECONDARY)
                .into()
        }
        FetchPhase::Loaded(list) => {
            let mut items = Column::new().spacing(10);
            for project in list {
                items = items.push(
                    Container::new(
                        Column::new()
                            .spacing(6)
                            .push(
                                Row::new()
                                    .spacing(12)
                                    .align_items(Alignment::Center)
                                    .push(
                                        Text::new(&project.title)
                                            .font(BOLD_FONT)
                                            .size(15)
                                            .style(TEXT_PRIMARY)
                                            .width(Length::Fill),
                                    )
                                    .push(difficulty_badge(project.difficulty)),
                            )
                            .push(Text::new(&project.description).size(14).style(TEXT_SECONDARY)),
                    )
                    .padding(14)
                    .width(Length::Fill)
                    .style(iced::theme::Container::Custom(Box::new(card_appearance))),
                );
            }
            items.into()
        }
    };

    Column::new().spacing(20).push(heading).push(content).into()
}
