//! Tasting editor view
//!
//! Entry/edit form for a tasting record. The radar editor canvas and the
//! form fields share one draft held in `AppState`; every committed drag
//! step flows back through `EditorMessage::CharacteristicsChanged`.

use crate::message::{EditorMessage, Message};
use crate::services::GuiConfig;
use crate::state::AppState;
use crate::theme::{colors, font_size, radius, spacing};
use crate::views::cellar::{primary_button_style, secondary_button_style};
use crate::widgets::{RadarEditor, RatingStars};

use iced::widget::{
    button, checkbox, column, container, horizontal_space, row, scrollable, text, text_input,
    Canvas,
};
use iced::{Alignment, Element, Length, Theme};

/// Render the tasting editor view
pub fn view_editor<'a>(state: &'a AppState, config: &'a GuiConfig) -> Element<'a, Message> {
    let form = &state.editor;

    let title = if form.is_editing() {
        "Edit Tasting"
    } else {
        "New Tasting"
    };
    let header = row![
        text(title).size(font_size::XXL).color(colors::TEXT_PRIMARY),
        horizontal_space(),
        button(text("Cancel").size(font_size::SM))
            .on_press(Message::Editor(EditorMessage::Cancel))
            .padding([spacing::XS, spacing::SM])
            .style(secondary_button_style),
        button(text("Save").size(font_size::SM))
            .on_press(Message::Editor(EditorMessage::Save))
            .padding([spacing::XS, spacing::SM])
            .style(primary_button_style),
    ]
    .align_y(Alignment::Center)
    .spacing(spacing::SM)
    .width(Length::Fill);

    let fields = view_fields(state);
    let chart = view_chart_section(state, config);
    let label_scan = view_label_scan(state);

    let body = row![
        column![fields, label_scan].spacing(spacing::LG).width(Length::FillPortion(1)),
        chart.width(Length::FillPortion(1)),
    ]
    .spacing(spacing::LG)
    .width(Length::Fill);

    scrollable(
        column![header, body]
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .width(Length::Fill),
    )
    .height(Length::Fill)
    .into()
}

/// The text fields and rating row
fn view_fields(state: &AppState) -> Element<'_, Message> {
    let form = &state.editor;

    let name_input = labeled(
        "Wine name *",
        text_input("e.g. Chateau Margaux 2018", &form.name)
            .on_input(|s| Message::Editor(EditorMessage::NameChanged(s)))
            .padding(spacing::SM)
            .into(),
    );

    let rating: Element<'_, Message> = labeled(
        "Rating",
        Canvas::new(RatingStars::new(form.rating, |r| {
            Message::Editor(EditorMessage::RatingChanged(r))
        }))
        .width(Length::Fixed(140.0))
        .height(Length::Fixed(26.0))
        .into(),
    );

    let vintage_input = labeled(
        "Vintage",
        text_input("e.g. 2018", &form.vintage)
            .on_input(|s| Message::Editor(EditorMessage::VintageChanged(s)))
            .padding(spacing::SM)
            .into(),
    );

    let region_input = labeled(
        "Region",
        text_input("e.g. Bordeaux", &form.region)
            .on_input(|s| Message::Editor(EditorMessage::RegionChanged(s)))
            .padding(spacing::SM)
            .into(),
    );

    let grape_input = labeled(
        "Grape variety",
        text_input("e.g. Cabernet Sauvignon", &form.grape_variety)
            .on_input(|s| Message::Editor(EditorMessage::GrapeVarietyChanged(s)))
            .padding(spacing::SM)
            .into(),
    );

    let producer_input = labeled(
        "Producer",
        text_input("e.g. Domaine de la Romanee-Conti", &form.producer)
            .on_input(|s| Message::Editor(EditorMessage::ProducerChanged(s)))
            .padding(spacing::SM)
            .into(),
    );

    let notes_input = labeled(
        "Notes",
        text_input("Aromas, palate, finish...", &form.notes)
            .on_input(|s| Message::Editor(EditorMessage::NotesChanged(s)))
            .padding(spacing::SM)
            .into(),
    );

    container(
        column![
            name_input,
            row![vintage_input, rating]
                .spacing(spacing::MD)
                .align_y(Alignment::End),
            region_input,
            grape_input,
            producer_input,
            notes_input,
        ]
        .spacing(spacing::MD),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(section_style)
    .into()
}

/// The radar editor and its display toggles
fn view_chart_section<'a>(
    state: &'a AppState,
    config: &'a GuiConfig,
) -> iced::widget::Container<'a, Message> {
    let form = &state.editor;

    let heading = text("Taste profile")
        .size(font_size::LG)
        .color(colors::TEXT_PRIMARY);

    let hint = text("Drag a point along its axis to set the value.")
        .size(font_size::SM)
        .color(colors::TEXT_MUTED);

    let editor = RadarEditor::new(form.characteristics, |set| {
        Message::Editor(EditorMessage::CharacteristicsChanged(set))
    })
    .with_values(config.show_values)
    .with_axis_labels(config.show_axis_labels);

    let canvas: Element<'_, Message> = Canvas::new(editor)
        .width(Length::Fill)
        .height(Length::Fixed(340.0))
        .into();

    let readout: Vec<Element<'a, Message>> = form
        .characteristics
        .iter()
        .map(|(axis, value)| {
            row![
                text(axis.label())
                    .size(font_size::SM)
                    .color(colors::axis_color(axis)),
                horizontal_space(),
                text(value.to_string())
                    .size(font_size::SM)
                    .color(colors::TEXT_SECONDARY),
            ]
            .width(Length::Fill)
            .into()
        })
        .collect();

    let toggles = row![
        checkbox("Values", config.show_values)
            .on_toggle(|v| Message::Editor(EditorMessage::ShowValuesToggled(v)))
            .size(font_size::BASE)
            .text_size(font_size::SM),
        checkbox("Axis labels", config.show_axis_labels)
            .on_toggle(|v| Message::Editor(EditorMessage::ShowAxisLabelsToggled(v)))
            .size(font_size::BASE)
            .text_size(font_size::SM),
    ]
    .spacing(spacing::MD);

    container(
        column![
            heading,
            hint,
            canvas,
            toggles,
            iced::widget::Column::with_children(readout).spacing(spacing::XS),
        ]
        .spacing(spacing::MD),
    )
    .padding(spacing::MD)
    .style(section_style)
}

/// Label text import section
fn view_label_scan(state: &AppState) -> Element<'_, Message> {
    let form = &state.editor;

    let heading = text("Label scan")
        .size(font_size::LG)
        .color(colors::TEXT_PRIMARY);

    let hint = text("Paste text from a label photo to pre-fill fields.")
        .size(font_size::SM)
        .color(colors::TEXT_MUTED);

    let input = text_input("Label text...", &form.label_text)
        .on_input(|s| Message::Editor(EditorMessage::LabelTextChanged(s)))
        .padding(spacing::SM);

    let scan_button = button(text("Scan").size(font_size::SM))
        .on_press(Message::Editor(EditorMessage::ScanLabelText))
        .padding([spacing::XS, spacing::SM])
        .style(secondary_button_style);

    let suggestions: Element<'_, Message> = match &form.suggestions {
        Some(scan) if scan.has_suggestions() => {
            let mut lines: Vec<Element<'_, Message>> = Vec::new();
            for (label, value) in [
                ("Name", &scan.wine_name),
                ("Grape", &scan.grape_variety),
                ("Region", &scan.region),
                ("Vintage", &scan.vintage),
                ("Producer", &scan.producer),
            ] {
                if let Some(value) = value {
                    lines.push(
                        text(format!("{}: {}", label, value))
                            .size(font_size::SM)
                            .color(colors::TEXT_SECONDARY)
                            .into(),
                    );
                }
            }
            column![
                iced::widget::Column::with_children(lines).spacing(spacing::XS),
                button(text("Apply to empty fields").size(font_size::SM))
                    .on_press(Message::Editor(EditorMessage::ApplySuggestions))
                    .padding([spacing::XS, spacing::SM])
                    .style(primary_button_style),
            ]
            .spacing(spacing::SM)
            .into()
        }
        Some(_) => text("No suggestions found in the label text.")
            .size(font_size::SM)
            .color(colors::TEXT_MUTED)
            .into(),
        None => text("").into(),
    };

    container(
        column![heading, hint, row![input, scan_button]
            .spacing(spacing::SM)
            .align_y(Alignment::Center), suggestions]
        .spacing(spacing::MD),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(section_style)
    .into()
}

/// Labeled form row
fn labeled<'a>(label: &'a str, input: Element<'a, Message>) -> Element<'a, Message> {
    column![
        text(label).size(font_size::SM).color(colors::TEXT_SECONDARY),
        input,
    ]
    .spacing(spacing::XS)
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
