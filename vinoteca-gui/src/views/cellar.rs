//! Cellar view
//!
//! Lists saved tasting records with mini radar thumbnails.

use crate::message::{CellarMessage, EditorMessage, Message};
use crate::state::AppState;
use crate::theme::{colors, font_size, radius, spacing};
use crate::widgets::{RadarEditor, RatingStars};

use iced::widget::{button, column, container, horizontal_space, row, scrollable, text, Canvas};
use iced::{Alignment, Element, Length, Theme};
use vinoteca::domain::TastingNote;

/// Render the cellar view
pub fn view_cellar(state: &AppState) -> Element<'_, Message> {
    let header = view_header(state);

    let content: Element<'_, Message> = if state.records.is_empty() {
        view_empty()
    } else {
        let cards: Vec<Element<'_, Message>> = state
            .records
            .iter()
            .map(|note| view_record_card(state, note))
            .collect();

        scrollable(iced::widget::Column::with_children(cards).spacing(spacing::MD))
            .height(Length::Fill)
            .into()
    };

    column![header, content]
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Cellar header with actions
fn view_header(state: &AppState) -> Element<'_, Message> {
    let title = text("Cellar")
        .size(font_size::XXL)
        .color(colors::TEXT_PRIMARY);

    let count = text(format!("{} tastings", state.records.len()))
        .size(font_size::BASE)
        .color(colors::TEXT_SECONDARY);

    let new_button = button(text("New Tasting").size(font_size::SM))
        .on_press(Message::Editor(EditorMessage::New))
        .padding([spacing::XS, spacing::SM])
        .style(primary_button_style);

    let export_button = button(text("Export JSON").size(font_size::SM))
        .on_press(Message::Cellar(CellarMessage::Export))
        .padding([spacing::XS, spacing::SM])
        .style(secondary_button_style);

    row![title, count, horizontal_space(), export_button, new_button]
        .align_y(Alignment::Center)
        .spacing(spacing::MD)
        .width(Length::Fill)
        .into()
}

/// View when no records exist
fn view_empty() -> Element<'static, Message> {
    container(
        column![
            text("No tastings yet")
                .size(font_size::XL)
                .color(colors::TEXT_SECONDARY),
            text("Record your first wine to start the cellar.")
                .size(font_size::BASE)
                .color(colors::TEXT_MUTED),
            button(text("New Tasting").size(font_size::BASE))
                .on_press(Message::Editor(EditorMessage::New))
                .padding([spacing::SM, spacing::MD])
                .style(primary_button_style),
        ]
        .spacing(spacing::MD)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

/// A single record card
fn view_record_card<'a>(state: &'a AppState, note: &'a TastingNote) -> Element<'a, Message> {
    // Mini chart: read-only, sparse grid, no value labels
    let thumbnail: Element<'a, Message> = Canvas::new(
        RadarEditor::display(note.characteristics).with_axis_labels(false),
    )
    .width(Length::Fixed(120.0))
    .height(Length::Fixed(120.0))
    .into();

    let mut subtitle_parts: Vec<String> = Vec::new();
    if let Some(vintage) = &note.vintage {
        subtitle_parts.push(vintage.to_string());
    }
    if let Some(region) = &note.region {
        subtitle_parts.push(region.clone());
    }
    if let Some(grape) = &note.grape_variety {
        subtitle_parts.push(grape.clone());
    }

    let subtitle: Element<'a, Message> = if subtitle_parts.is_empty() {
        text("").into()
    } else {
        text(subtitle_parts.join(" · "))
            .size(font_size::SM)
            .color(colors::TEXT_SECONDARY)
            .into()
    };

    let rating: Element<'a, Message> = Canvas::new(RatingStars::display(note.rating))
        .width(Length::Fixed(110.0))
        .height(Length::Fixed(20.0))
        .into();

    let notes_preview: Element<'a, Message> = match &note.notes {
        Some(notes) => {
            let mut preview: String = notes.chars().take(120).collect();
            if notes.chars().count() > 120 {
                preview.push('…');
            }
            text(preview)
                .size(font_size::SM)
                .color(colors::TEXT_MUTED)
                .into()
        }
        None => text("").into(),
    };

    let tasted_on: Element<'a, Message> = text(format!("Tasted {}", format_date(&note.created_at)))
        .size(font_size::XS)
        .color(colors::TEXT_MUTED)
        .into();

    let is_pending_delete = state.pending_delete.as_ref() == Some(&note.id);

    let actions: Element<'a, Message> = if is_pending_delete {
        row![
            text("Delete this tasting?")
                .size(font_size::SM)
                .color(colors::ACCENT_RED),
            button(text("Delete").size(font_size::SM))
                .on_press(Message::Cellar(CellarMessage::ConfirmDelete))
                .padding([spacing::XS, spacing::SM])
                .style(danger_button_style),
            button(text("Keep").size(font_size::SM))
                .on_press(Message::Cellar(CellarMessage::CancelDelete))
                .padding([spacing::XS, spacing::SM])
                .style(secondary_button_style),
        ]
        .spacing(spacing::SM)
        .align_y(Alignment::Center)
        .into()
    } else {
        row![
            button(text("Edit").size(font_size::SM))
                .on_press(Message::Cellar(CellarMessage::Edit(note.id.clone())))
                .padding([spacing::XS, spacing::SM])
                .style(secondary_button_style),
            button(text("Delete").size(font_size::SM))
                .on_press(Message::Cellar(CellarMessage::RequestDelete(note.id.clone())))
                .padding([spacing::XS, spacing::SM])
                .style(secondary_button_style),
        ]
        .spacing(spacing::SM)
        .into()
    };

    let details = column![
        row![
            text(&note.name)
                .size(font_size::LG)
                .color(colors::TEXT_PRIMARY),
            horizontal_space(),
            rating,
        ]
        .align_y(Alignment::Center),
        subtitle,
        tasted_on,
        notes_preview,
        actions,
    ]
    .spacing(spacing::SM)
    .width(Length::Fill);

    container(
        row![thumbnail, details]
            .spacing(spacing::MD)
            .align_y(Alignment::Center),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(card_style)
    .into()
}

/// Render an RFC 3339 timestamp as a short date, falling back to the
/// raw string if it does not parse
fn format_date(timestamp: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.format("%b %d, %Y").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

// Style helpers

fn card_style(_theme: &Theme) -> container::Style {
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

pub(crate) fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered => colors::ACCENT_WINE_BRIGHT,
        _ => colors::ACCENT_WINE,
    };
    button::Style {
        background: Some(bg.into()),
        text_color: colors::TEXT_PRIMARY,
        border: iced::Border {
            color: bg,
            width: 0.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

pub(crate) fn secondary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered => colors::BG_OVERLAY,
        _ => colors::BG_ELEVATED,
    };
    button::Style {
        background: Some(bg.into()),
        text_color: colors::TEXT_SECONDARY,
        border: iced::Border {
            color: colors::BG_OVERLAY,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

pub(crate) fn danger_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered => colors::ACCENT_RED,
        _ => colors::with_alpha(colors::ACCENT_RED, 0.8),
    };
    button::Style {
        background: Some(bg.into()),
        text_color: colors::TEXT_PRIMARY,
        border: iced::Border {
            color: bg,
            width: 0.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}
