//! Settings view

use crate::message::{EditorMessage, Message};
use crate::services::GuiConfig;
use crate::theme::{colors, font_size, radius, spacing};

use iced::widget::{checkbox, column, container, row, text};
use iced::{Element, Length, Theme};
use std::path::Path;

/// Render the settings view
pub fn view_settings<'a>(config: &'a GuiConfig, records_dir: &'a Path) -> Element<'a, Message> {
    let title = text("Settings")
        .size(font_size::XXL)
        .color(colors::TEXT_PRIMARY);

    let chart_section = container(
        column![
            text("Chart display")
                .size(font_size::LG)
                .color(colors::TEXT_PRIMARY),
            checkbox("Show numeric values at markers", config.show_values)
                .on_toggle(|v| Message::Editor(EditorMessage::ShowValuesToggled(v)))
                .text_size(font_size::BASE),
            checkbox("Show axis labels", config.show_axis_labels)
                .on_toggle(|v| Message::Editor(EditorMessage::ShowAxisLabelsToggled(v)))
                .text_size(font_size::BASE),
        ]
        .spacing(spacing::MD),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(section_style);

    let storage_section = container(
        column![
            text("Storage")
                .size(font_size::LG)
                .color(colors::TEXT_PRIMARY),
            row![
                text("Records directory:")
                    .size(font_size::BASE)
                    .color(colors::TEXT_SECONDARY),
                text(records_dir.display().to_string())
                    .size(font_size::BASE)
                    .color(colors::TEXT_PRIMARY),
            ]
            .spacing(spacing::SM),
            text("One TOML file per tasting; JSON export lands in the same directory.")
                .size(font_size::SM)
                .color(colors::TEXT_MUTED),
        ]
        .spacing(spacing::MD),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(section_style);

    column![title, chart_section, storage_section]
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .into()
}

fn section_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(colors::BG_SURFACE.into()),
        border: iced::Border {
            color: colors::BG_ELEVATED,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
