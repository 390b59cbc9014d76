//! Curated resources carried by the analysis report. This section never
//! fetches on its own; it only renders what the report included.

use iced::widget::{Column, Container, Text};
use iced::{Color, Element, Font, Length};
use serde_json::Value;

use crate::client::models::app_state::GapAppState;
use crate::client::models::messages::Message;

const CARD_BG: Color = Color::from_rgb(0.18, 0.19, 0.36);
const TEXT_PRIMARY: Color = Color::WHITE;
const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7);
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

/// Resource entries named by the report, skipping malformed ones.
fn resource_entries(report: &Value) -> Vec<(String, String)> {
    report
        .get("resources")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| {
                    let title = item.get("title").and_then(Value::as_str)?;
                    let url = item.get("url").and_then(Value::as_str).unwrap_or_default();
                    Some((title.to_string(), url.to_string()))
                })
                .collect()
        })
        .unwrap_or_default()
}

pub fn view(state: &GapAppState) -> Element<Message> {
    let ctx = &state.context;

    let heading = Column::new()
        .spacing(4)
        .push(
            Text::new(format!("Resources for {}", ctx.topic))
                .font(BOLD_FONT)
                .size(24)
                .style(TEXT_PRIMARY),
        )
        .push(
            Text::new("Curated material from your analysis report.")
                .size(14)
                .style(TEXT_SECONDARY),
        );

    let entries = ctx
        .ai_output
        .as_ref()
        .map(resource_entries)
        .unwrap_or_default();

    let content: Element<Message> = if entries.is_empty() {
        Text::new("Your report didn't include curated resources. Try the AI Resources section.")
            .size(14)
            .style(TEXT_SECONDARY)
            .into()
    } else {
        let mut list = Column::new().spacing(10);
        for (title, url) in entries {
            let mut entry = Column::new()
                .spacing(4)
                .push(Text::new(title).font(BOLD_FONT).size(15).style(TEXT_PRIMARY));
            if !url.is_empty() {
                entry = entry.push(Text::new(url).size(13).style(LINK_BLUE));
            }
            list = list.push(
                Container::new(entry)
                    .padding(14)
                    .width(Length::Fill)
                    .style(iced::theme::Container::Custom(Box::new(card_appearance))),
            );
        }
        list.into()
    };

    Column::new().spacing(20).push(heading).push(content).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resource_entries_require_a_title() {
        let report = json!({
            "resources": [
                { "title": "The Book", "url": "https://example.com" },
                { "url": "https://no-title.example.com" },
                { "title": "No url" }
            ]
        });
        let entries = resource_entries(&report);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, "The Book");
        assert_eq!(entries[1].1, "");
    }

    #[test]
    fn test_resource_entries_tolerate_missing_section() {
        assert!(resource_entries(&json!({})).is_empty());
        assert!(resource_entries(&json!({ "resources": 3 })).is_empty());
    }
}
