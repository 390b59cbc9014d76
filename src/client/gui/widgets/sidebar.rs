//! Navigation rail of the results area.

use iced::widget::{Button, Column, Container, Row, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::models::app_state::Section;
use crate::client::models::messages::Message;

const SIDEBAR_BG: Color = Color::from_rgb(0.04, 0.05, 0.13);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");
const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn sidebar_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(SIDEBAR_BG)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

pub fn view(active: Section) -> Element<'static, Message> {
    let mut items = Column::new().spacing(6).width(Length::Fill);
    for section in Section::ALL {
        let label = Row::new()
            .spacing(10)
            .align_items(Alignment::Center)
            .push(Text::new(section.emoji()).font(EMOJI_FONT).size(15))
            .push(Text::new(section.title()).size(14));

        let mut button = Button::new(label).padding([10, 14]).width(Length::Fill);
        if section == active {
            button = button.style(iced::theme::Button::Primary);
        } else {
            button = button
                .style(iced::theme::Button::Text)
                .on_press(Message::OpenSection(section));
        }
        items = items.push(button);
    }

    Container::new(
        Column::new()
            .spacing(24)
            .push(
                Column::new()
                    .spacing(2)
                    .push(Text::new("GapFinder").font(BOLD_FONT).size(22).style(TEXT_PRIMARY))
                    .push(Text::new("Learning companion").size(12).style(TEXT_SECONDARY)),
            )
            .push(items),
    )
    .width(Length::Fixed(220.0))
    .height(Length::Fill)
    .padding(16)
    .style(iced::theme::Container::Custom(Box::new(sidebar_appearance)))
    .into()
}
