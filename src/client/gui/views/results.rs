//! Shell of the results area: sidebar, back action, sample-data banner
//! and the one active section.

use iced::widget::{Button, Column, Container, Row, Scrollable, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::gui::views;
use crate::client::gui::widgets::{alert, sidebar};
use crate::client::models::app_state::{GapAppState, Section};
use crate::client::models::messages::Message;

const BG_MAIN: Color = Color::from_rgb(0.06, 0.07, 0.18);
const TEXT_PRIMARY: Color = Color::WHITE;

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

pub fn view(state: &GapAppState, section: Section) -> Element<Message> {
    let back_button = Button::new(
        Row::new()
            .spacing(8)
            .align_items(Alignment::Center)
            .push(Text::new("←").font(EMOJI_FONT).size(16))
            .push(Text::new("Go Back").font(BOLD_FONT).size(13)),
    )
    .style(iced::theme::Button::Secondary)
    .on_press(Message::GoBack)
    .padding(10);

    let mut main = Column::new()
        .spacing(16)
        .width(Length::Fill)
        .push(Row::new().push(back_button));

    if state.context.demo {
        main = main.push(alert::demo_banner());
    }

    let body = match section {
        Section::GapAnalysis => views::gap_analysis::view(state),
        Section::Resources => views::resources::view(state),
        Section::Projects => views::projects::view(state),
        Section::AiResources => views::ai_resources::view(state),
        Section::InterviewQuestions => views::interview_questions::view(state),
    };
    main = main.push(body);

    let content = Row::new()
        .push(sidebar::view(section))
        .push(
            Scrollable::new(Container::new(main).padding(24))
                .width(Length::Fill)
                .height(Length::Fill),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}
