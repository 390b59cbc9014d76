//! Entry screen: the user names a topic, optionally describes what they
//! already know, and kicks off the gap analysis.

use iced::widget::{Button, Column, Container, Row, Space, Text, TextInput};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::models::app_state::GapAppState;
use crate::client::models::messages::Message;

const BG_MAIN: Color = Color::from_rgb(0.06, 0.07, 0.18);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);
const ERROR_RED: Color = Color::from_rgb(1.0, 0.3, 0.3);

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");
const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

pub fn view(state: &GapAppState) -> Element<Message> {
    let heading = Column::new()
        .spacing(8)
        .align_items(Alignment::Center)
        .push(
            Row::new()
                .spacing(10)
                .align_items(Alignment::Center)
                .push(Text::new("🧭").font(EMOJI_FONT).size(32))
                .push(Text::new("GapFinder").font(BOLD_FONT).size(32).style(TEXT_PRIMARY)),
        )
        .push(
            Text::new("Find the gaps between what you know and where you want to be.")
                .size(15)
                .style(TEXT_SECONDARY),
        );

    let topic_input = TextInput::new("Topic you want to master, e.g. machine learning", &state.topic_input)
        .on_input(Message::TopicInputChanged)
        .on_submit(Message::SubmitAnalysis)
        .padding(12)
        .size(15);

    let knowledge_input = TextInput::new(
        "What do you already know about it? (optional)",
        &state.knowledge_input,
    )
    .on_input(Message::KnowledgeInputChanged)
    .padding(12)
    .size(15);

    let mut submit = Button::new(
        Container::new(Text::new("Analyze My Knowledge").font(BOLD_FONT).size(15))
            .width(Length::Fill)
            .center_x(),
    )
    .style(iced::theme::Button::Primary)
    .padding(14)
    .width(Length::Fill);
    if !state.analyzing {
        submit = submit.on_press(Message::SubmitAnalysis);
    }

    let mut form = Column::new()
        .spacing(14)
        .width(Length::Fixed(520.0))
        .push(topic_input)
        .push(knowledge_input)
        .push(submit);

    if state.analyzing {
        form = form.push(Text::new("Analyzing your knowledge...").size(14).style(TEXT_SECONDARY));
    }
    if let Some(error) = &state.analysis_error {
        form = form.push(Text::new(error).size(14).style(ERROR_RED));
    }

    let sample_link = Button::new(Text::new("Browse sample results").size(13))
        .style(iced::theme::Button::Text)
        .on_press(Message::OpenSampleResults)
        .padding(6);

    let content = Column::new()
        .spacing(28)
        .align_items(Alignment::Center)
        .push(Space::new(Length::Fill, Length::Fixed(60.0)))
        .push(heading)
        .push(form)
        .push(sample_link);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}
