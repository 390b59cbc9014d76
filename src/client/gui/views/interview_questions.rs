//! Interview questions for the active topic: an accordion of
//! question/answer pairs with a difficulty badge. At most one entry is
//! expanded at a time.

use iced::widget::{Button, Column, Container, Row, Text};
use iced::{Alignment, Color, Element, Font, Length};
use iced_aw::{style::BadgeStyles, Badge, Card};

use crate::client::models::app_state::{FetchPhase, GapAppState};
use crate::client::models::content::{Difficulty, Question};
use crate::client::models::messages::Message;

const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36);
const ANSWER_BG: Color = Color::from_rgb(0.12, 0.13, 0.26);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);
const ERROR_RED: Color = Color::from_rgb(1.0, 0.3, 0.3);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn entry_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(CARD_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            width: 1.0,
            color: Color::from_rgb(0.2, 0.2, 0.3),
            radius: 10.0.into(),
        },
        ..Default::default()
    }
}

fn answer_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(ANSWER_BG)),
        text_color: Some(TEXT_PRIMARY),
        border: iced::Border {
            radius: 8.0.into(),
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

fn question_entry<'a>(question: &'a Question, expanded: bool) -> Element<'a, Message> {
    let header = Row::new()
        .spacing(12)
        .align_items(Alignment::Center)
        .push(Text::new(&question.question).size(15).width(Length::Fill))
        .push(difficulty_badge(question.difficulty));

    let toggle = Button::new(header)
        .style(iced::theme::Button::Text)
        .on_press(Message::ToggleQuestion(question.id.clone()))
        .padding([12, 10])
        .width(Length::Fill);

    let mut entry = Column::new().push(toggle);
    if expanded {
        entry = entry.push(
            Container::new(Text::new(&question.answer).size(14))
                .padding(16)
                .width(Length::Fill)
                .style(iced::theme::Container::Custom(Box::new(answer_appearance))),
        );
    }

    Container::new(entry)
        .width(Length::Fill)
        .padding(4)
        .style(iced::theme::Container::Custom(Box::new(entry_appearance)))
        .into()
}

pub fn view(state: &GapAppState) -> Element<Message> {
    let questions = &state.questions;

    let heading = Column::new()
        .spacing(4)
        .push(
            Text::new(format!("Interview Questions for {}", questions.fetch.topic))
                .font(BOLD_FONT)
                .size(24)
                .style(TEXT_PRIMARY),
        )
        .push(
            Text::new("AI-generated questions to test your knowledge.")
                .size(14)
                .style(TEXT_SECONDARY),
        );

    let content: Element<Message> = match &questions.fetch.phase {
        FetchPhase::Loading => Text::new("Loading questions...").size(14).style(TEXT_SECONDARY).into(),
        FetchPhase::Failed(message) => Text::new(message).size(14).style(ERROR_RED).into(),
        FetchPhase::Loaded(list) if list.is_empty() => {
            Text::new("No questions came back for this topic.")
                .size(14)
                .style(TEXT_SECONDARY)
                .into()
        }
        FetchPhase::Loaded(list) => {
            let mut items = Column::new().spacing(8);
            for question in list {
                let expanded = questions.expanded.as_deref() == Some(question.id.as_str());
                items = items.push(question_entry(question, expanded));
            }

            let mut body = Column::new().spacing(12).push(items);
            if let Some(at) = questions.loaded_at {
                body = body.push(
                    Text::new(format!("Updated {}", at.format("%H:%M")))
                        .size(12)
                        .style(TEXT_SECONDARY),
                );
            }

            Card::new(
                Column::new()
                    .spacing(4)
                    .push(Text::new("Practice Questions").font(BOLD_FONT).size(18))
                    .push(
                        Text::new("Click a question to reveal the answer. Try to answer it yourself first!")
                            .size(13)
                            .style(TEXT_SECONDARY),
                    ),
                body,
            )
            .into()
        }
    };

    Column::new().spacing(20).push(heading).push(content).into()
}
