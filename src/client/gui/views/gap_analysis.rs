//! Gap report for the analyzed topic, rendered leniently from the
//! backend's untyped JSON. Demo sessions show a built-in sample report.

use iced::widget::{Column, Container, Row, Text};
use iced::{Color, Element, Font, Length};
use serde_json::Value;

use crate::client::models::app_state::GapAppState;
use crate::client::models::messages::Message;

const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);

const EMOJI_FONT: Font = Font::with_name("Segoe UI Emoji");
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
            radius: 12.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Pull a list of strings out of the report, ignoring anything that is
/// not shaped as expected.
fn string_items(report: &Value, key: &str) -> Vec<String> {
    report
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn bullet_section<'a>(emoji: &'a str, title: &'a str, items: Vec<String>) -> Element<'a, Message> {
    let mut list = Column::new().spacing(6);
    for item in items {
        list = list.push(
            Row::new()
                .spacing(8)
                .push(Text::new("•").size(14).style(TEXT_SECONDARY))
                .push(Text::new(item).size(14).style(TEXT_PRIMARY)),
        );
    }

    Container::new(
        Column::new()
            .spacing(10)
            .push(
                Row::new()
                    .spacing(8)
                    .push(Text::new(emoji).font(EMOJI_FONT).size(16))
                    .push(Text::new(title).font(BOLD_FONT).size(16).style(TEXT_PRIMARY)),
            )
            .push(list),
    )
    .padding(16)
    .width(Length::Fill)
    .style(iced::theme::Container::Custom(Box::new(card_appearance)))
    .into()
}

fn sample_report() -> Value {
    serde_json::json!({
        "strengths": [
            "Core syntax and control flow",
            "Basic DOM manipulation"
        ],
        "gaps": [
            "Closures and the event loop",
            "Promises and async/await",
            "Automated testing"
        ],
        "recommendations": [
            "Build a small app around fetch and async/await",
            "Work through the MDN guide on closures",
            "Add unit tests to an existing project"
        ]
    })
}

pub fn view(state: &GapAppState) -> Element<Message> {
    let ctx = &state.context;

    let heading = Column::new()
        .spacing(4)
        .push(
            Text::new(format!("Gap Analysis for {}", ctx.topic))
                .font(BOLD_FONT)
                .size(24)
                .style(TEXT_PRIMARY),
        )
        .push(
            Text::new("Where you stand and what to tackle next.")
                .size(14)
                .style(TEXT_SECONDARY),
        );

    let mut sections = Column::new().spacing(16);

    if !ctx.knowledge.is_empty() {
        sections = sections.push(
            Container::new(
                Column::new()
                    .spacing(8)
                    .push(Text::new("What you told us").font(BOLD_FONT).size(16).style(TEXT_PRIMARY))
                    .push(Text::new(&ctx.knowledge).size(14).style(TEXT_SECONDARY)),
            )
            .padding(16)
            .width(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(card_appearance))),
        );
    }

    let sample;
    let report = match &ctx.ai_output {
        Some(report) => Some(report),
        None if ctx.demo => {
            sample = sample_report();
            Some(&sample)
        }
        None => None,
    };

    let mut any_section = false;
    if let Some(report) = report {
        for (emoji, title, key) in [
            ("✅", "What you already know", "strengths"),
            ("🧩", "Gaps to close", "gaps"),
            ("🎯", "Recommended next steps", "recommendations"),
        ] {
            let items = string_items(report, key);
            if !items.is_empty() {
                any_section = true;
                sections = sections.push(bullet_section(emoji, title, items));
            }
        }
    }

    if !any_section {
        sections = sections.push(
            Text::new("Run an analysis from the homepage to see your gap report.")
                .size(14)
                .style(TEXT_SECONDARY),
        );
    }

    Column::new().spacing(20).push(heading).push(sections).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_items_reads_arrays_of_strings() {
        let report = json!({ "gaps": ["a", "b"] });
        assert_eq!(string_items(&report, "gaps"), vec!["a", "b"]);
    }

    #[test]
    fn test_string_items_ignores_malformed_entries() {
        let report = json!({ "gaps": ["a", 7, { "x": 1 }] });
        assert_eq!(string_items(&report, "gaps"), vec!["a"]);
        assert!(string_items(&report, "missing").is_empty());
        assert!(string_items(&json!({ "gaps": "not a list" }), "gaps").is_empty());
    }

    #[test]
    fn test_sample_report_has_all_sections() {
        let report = sample_report();
        for key in ["strengths", "gaps", "recommendations"] {
            assert!(!string_items(&report, key).is_empty());
        }
    }
}
