//! Banner shown while the results area runs on sample data.

use iced::widget::{Column, Container, Row, Text};
use iced::{Alignment, Color, Element, Font, Length};

use crate::client::models::messages::Message;

const BANNER_BG: Color = Color::from_rgb(0.24, 0.19, 0.06);
const BANNER_BORDER: Color = Color::from_rgb(0.85, 0.65, 0.15);
const BANNER_TEXT: Color = Color::from_rgb(0.95, 0.87, 0.6);

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");
const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn banner_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BANNER_BG)),
        text_color: Some(BANNER_TEXT),
        border: iced::Border {
            width: 1.0,
            color: BANNER_BORDER,
            radius: 8.0.into(),
        },
        shadow: iced::Shadow::default(),
    }
}

pub fn demo_banner<'a>() -> Element<'a, Message> {
    Container::new(
        Row::new()
            .spacing(12)
            .align_items(Alignment::Center)
            .push(Text::new("⚠️").font(EMOJI_FONT).size(18))
            .push(
                Column::new()
                    .spacing(2)
                    .push(Text::new("Demo Mode").font(BOLD_FONT).size(14).style(BANNER_TEXT))
                    .push(
                        Text::new("You're viewing sample data. Start a real analysis from the homepage.")
                            .size(13)
                            .style(BANNER_TEXT),
                    ),
            ),
    )
    .padding([10, 14])
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(banner_appearance)))
    .into()
}
