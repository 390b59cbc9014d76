//! AI-suggested learning resources fetched per topic.

use iced::widget::{Column, Container, Row, Text};
use iced::{Alignment, Color, Element, Font, Length};
use iced_aw::{style::BadgeStyles, Badge};

use crate::client::models::app_state::{FetchPhase, GapAppState};
use crate::client::models::messages::Message;

const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);
const ERROR_RED: Color = Color::from_rgb(1.0, 0.3, 0.3);
const LINK_BLUE: Color = Color::from_rgb(0.4, 0.65, 1.0);

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

pub fn view(state: &GapAppState) -> Element<Message> {
    let resources = &state.ai_resources;

    let heading = Column::new()
        .spacing(4)
        .push(
            Text::new(format!("AI Resources for {}", resources.topic))
                .font(BOLD_FONT)
                .size(24)
                .style(TEXT_PRIMARY),
        )
        .push(
            Text::new("Fresh suggestions generated for your topic.")
                .size(14)
                .style(TEXT_SECONDARY),
        );

    let content: Element<Message> = match &resources.phase {
        FetchPhase::Loading => Text::new("Loading resources...").size(14).style(TEXT_SECONDARY).into(),
        FetchPhase::Failed(message) => Text::new(message).size(14).style(ERROR_RED).into(),
        FetchPhase::Loaded(list) if list.is_empty() => {
            Text::new("No resource suggestions came back for this topic.")
                .size(14)
                .style(TEXT_SECONDARY)
                .into()
        }
        FetchPhase::Loaded(list) => {
            let mut items = Column::new().spacing(10);
            for resource in list {
                let mut header = Row::new().spacing(12).align_items(Alignment::Center).push(
                    Text::new(&resource.title)
                        .font(BOLD_FONT)
                        .size(15)
                        .style(TEXT_PRIMARY)
                        .width(Length::Fill),
                );
                if let Some(kind) = &resource.kind {
                    header = header.push(
                        Badge::new(Text::new(kind).size(12)).style(BadgeStyles::Info),
                    );
                }
                items = items.push(
                    Container::new(
                        Column::new()
                            .spacing(4)
                            .push(header)
                            .push(Text::new(&resource.url).size(13).style(LINK_BLUE)),
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
