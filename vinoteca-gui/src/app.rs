//! Main application structure
//!
//! Implements the Elm Architecture (TEA) pattern for vinoteca-gui.

use crate::message::{CellarMessage, EditorMessage, KeyboardShortcut, Message, View};
use crate::services::GuiConfig;
use crate::state::{AppState, EditorForm, Notification};
use crate::theme::{colors, font_size, spacing, vinoteca_theme};
use crate::views;

use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::widget::{button, column, container, horizontal_space, row, text, Column, Space};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use std::fs;
use vinoteca::ocr::parse_label_text;
use vinoteca::store::RecordStore;

/// Main application
pub struct VinotecaGui {
    /// Application state
    state: AppState,

    /// Tasting record store
    store: RecordStore,

    /// GUI configuration (chart display preferences)
    config: GuiConfig,
}

impl VinotecaGui {
    /// Create a new application instance
    pub fn new() -> (Self, Task<Message>) {
        let store = RecordStore::new();
        let config = GuiConfig::load();

        let mut state = AppState::new();
        state.records = store.list().into_iter().cloned().collect();

        if state.records.is_empty() {
            state.set_notification(Notification::info(
                "Welcome! Record your first tasting to start the cellar.",
            ));
        }

        let app = Self {
            state,
            store,
            config,
        };

        (app, Task::none())
    }

    /// Reload the record cache from the store
    fn refresh_records(&mut self) {
        self.state.records = self.store.list().into_iter().cloned().collect();
    }

    /// Persist the config, logging on failure
    fn save_config(&self) {
        if let Err(e) = self.config.save() {
            log::warn!("Failed to save config: {}", e);
        }
    }

    /// Update application state based on a message
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // Navigation
            Message::ViewChanged(view) => {
                self.state.current_view = view;
                Task::none()
            }

            Message::SidebarToggled => {
                self.state.sidebar_expanded = !self.state.sidebar_expanded;
                Task::none()
            }

            Message::KeyPressed(shortcut) => {
                match shortcut {
                    KeyboardShortcut::GotoCellar => self.state.current_view = View::Cellar,
                    KeyboardShortcut::GotoEditor => {
                        return self.update(Message::Editor(EditorMessage::New));
                    }
                    KeyboardShortcut::GotoSettings => self.state.current_view = View::Settings,
                    KeyboardShortcut::Save => {
                        if self.state.current_view == View::Editor {
                            return self.update(Message::Editor(EditorMessage::Save));
                        }
                    }
                    KeyboardShortcut::Refresh => {
                        return self.update(Message::Cellar(CellarMessage::Refresh));
                    }
                    KeyboardShortcut::ToggleSidebar => {
                        self.state.sidebar_expanded = !self.state.sidebar_expanded;
                    }
                }
                Task::none()
            }

            Message::Cellar(msg) => self.update_cellar(msg),
            Message::Editor(msg) => self.update_editor(msg),

            Message::DismissNotification => {
                self.state.clear_notification();
                Task::none()
            }
        }
    }

    /// Handle cellar messages
    fn update_cellar(&mut self, message: CellarMessage) -> Task<Message> {
        match message {
            CellarMessage::Edit(id) => {
                if let Some(note) = self.store.get(&id) {
                    self.state.editor = EditorForm::from_note(note);
                    self.state.current_view = View::Editor;
                } else {
                    self.state
                        .set_notification(Notification::error("Record no longer exists"));
                }
            }

            CellarMessage::RequestDelete(id) => {
                self.state.pending_delete = Some(id);
            }

            CellarMessage::CancelDelete => {
                self.state.pending_delete = None;
            }

            CellarMessage::ConfirmDelete => {
                if let Some(id) = self.state.pending_delete.take() {
                    match self.store.delete(&id) {
                        Ok(()) => {
                            self.refresh_records();
                            self.state
                                .set_notification(Notification::success("Tasting deleted"));
                        }
                        Err(e) => {
                            self.state
                                .set_notification(Notification::error(format!(
                                    "Delete failed: {}",
                                    e
                                )));
                        }
                    }
                }
            }

            CellarMessage::Refresh => {
                if let Err(e) = self.store.load_all() {
                    self.state
                        .set_notification(Notification::error(format!("Reload failed: {}", e)));
                } else {
                    self.refresh_records();
                    self.state
                        .set_notification(Notification::success("Records refreshed"));
                }
            }

            CellarMessage::Export => match self.store.export_json() {
                Ok(json) => {
                    let path = self.store.records_dir().join("cellar-export.json");
                    match fs::write(&path, json) {
                        Ok(()) => {
                            self.state.set_notification(Notification::success(format!(
                                "Exported to {}",
                                path.display()
                            )));
                        }
                        Err(e) => {
                            self.state.set_notification(Notification::error(format!(
                                "Export failed: {}",
                                e
                            )));
                        }
                    }
                }
                Err(e) => {
                    self.state
                        .set_notification(Notification::error(format!("Export failed: {}", e)));
                }
            },
        }

        Task::none()
    }

    /// Handle tasting editor messages
    fn update_editor(&mut self, message: EditorMessage) -> Task<Message> {
        match message {
            EditorMessage::New => {
                self.state.editor = EditorForm::new();
                self.state.current_view = View::Editor;
            }

            // The radar editor proposes a full replacement set; committing
            // it here is what moves the chart on the next render
            EditorMessage::CharacteristicsChanged(set) => {
                self.state.editor.characteristics = set;
            }

            EditorMessage::NameChanged(name) => self.state.editor.name = name,
            EditorMessage::NotesChanged(notes) => self.state.editor.notes = notes,
            EditorMessage::RatingChanged(rating) => self.state.editor.rating = rating,
            EditorMessage::VintageChanged(vintage) => self.state.editor.vintage = vintage,
            EditorMessage::RegionChanged(region) => self.state.editor.region = region,
            EditorMessage::GrapeVarietyChanged(grape) => self.state.editor.grape_variety = grape,
            EditorMessage::ProducerChanged(producer) => self.state.editor.producer = producer,
            EditorMessage::LabelTextChanged(label_text) => {
                self.state.editor.label_text = label_text;
            }

            EditorMessage::ScanLabelText => {
                let scan = parse_label_text(&self.state.editor.label_text);
                if !scan.has_suggestions() {
                    self.state.set_notification(Notification::warning(
                        "No suggestions found in the label text",
                    ));
                }
                self.state.editor.suggestions = Some(scan);
            }

            EditorMessage::ApplySuggestions => {
                self.state.editor.apply_suggestions();
                self.state
                    .set_notification(Notification::info("Suggestions applied to empty fields"));
            }

            EditorMessage::ShowValuesToggled(show) => {
                self.config.show_values = show;
                self.save_config();
            }

            EditorMessage::ShowAxisLabelsToggled(show) => {
                self.config.show_axis_labels = show;
                self.save_config();
            }

            EditorMessage::Save => {
                let draft = match self.state.editor.to_draft() {
                    Ok(draft) => draft,
                    Err(e) => {
                        self.state
                            .set_notification(Notification::error(e.to_string()));
                        return Task::none();
                    }
                };

                let result = match self.state.editor.editing_id.clone() {
                    Some(id) => self.store.update(&id, draft).map(|n| n.name),
                    None => self.store.create(draft).map(|n| n.name),
                };

                match result {
                    Ok(name) => {
                        self.refresh_records();
                        self.state.editor = EditorForm::new();
                        self.state.current_view = View::Cellar;
                        self.state
                            .set_notification(Notification::success(format!("Saved \"{}\"", name)));
                    }
                    Err(e) => {
                        self.state
                            .set_notification(Notification::error(format!("Save failed: {}", e)));
                    }
                }
            }

            EditorMessage::Cancel => {
                self.state.editor = EditorForm::new();
                self.state.current_view = View::Cellar;
            }
        }

        Task::none()
    }

    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        let sidebar = self.view_sidebar();
        let content = self.view_content();

        let main_layout = row![sidebar, content].height(Length::Fill);

        let with_notification = if let Some(ref notif) = self.state.notification {
            let notification = self.view_notification(notif);
            column![main_layout, notification]
        } else {
            column![main_layout]
        };

        container(with_notification)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(colors::BG_BASE.into()),
                ..Default::default()
            })
            .into()
    }

    /// Render the sidebar navigation
    fn view_sidebar(&self) -> Element<'_, Message> {
        let width = if self.state.sidebar_expanded {
            Length::Fixed(180.0)
        } else {
            Length::Fixed(60.0)
        };

        let nav_items = [
            (View::Cellar, "Cellar", colors::ACCENT_WINE),
            (View::Editor, "Tasting", colors::AXIS_BODY),
        ];

        let nav_buttons: Vec<Element<'_, Message>> = nav_items
            .iter()
            .map(|(view, label, color)| self.view_nav_button(*view, label, *color))
            .collect();

        let nav_column = Column::with_children(nav_buttons).spacing(spacing::SM);

        let settings_button = self.view_nav_button(View::Settings, "Settings", colors::ACCENT_AMBER);

        let content = column![
            nav_column,
            Space::with_height(Length::Fill),
            settings_button,
        ]
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .height(Length::Fill);

        container(content)
            .width(width)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(colors::BG_SURFACE.into()),
                ..Default::default()
            })
            .into()
    }

    /// Render a navigation button
    fn view_nav_button<'a>(
        &'a self,
        view: View,
        label: &'a str,
        accent: iced::Color,
    ) -> Element<'a, Message> {
        let is_active = self.state.current_view == view;

        let style = move |_theme: &Theme, status: button::Status| {
            if is_active {
                button::Style {
                    background: Some(colors::with_alpha(accent, 0.15).into()),
                    text_color: accent,
                    border: iced::Border {
                        color: colors::with_alpha(accent, 0.4),
                        width: 1.0,
                        radius: 10.0.into(),
                    },
                    ..Default::default()
                }
            } else {
                let bg = match status {
                    button::Status::Hovered => colors::with_alpha(accent, 0.08),
                    _ => colors::BG_SURFACE,
                };
                let text_col = match status {
                    button::Status::Hovered => colors::lerp(colors::TEXT_SECONDARY, accent, 0.5),
                    _ => colors::TEXT_SECONDARY,
                };
                button::Style {
                    background: Some(bg.into()),
                    text_color: text_col,
                    border: iced::Border {
                        color: colors::with_alpha(accent, 0.0),
                        width: 0.0,
                        radius: 10.0.into(),
                    },
                    ..Default::default()
                }
            }
        };

        let label_text: Element<'_, Message> = if self.state.sidebar_expanded {
            text(label).size(font_size::BASE).into()
        } else {
            text(&label[..1]).size(font_size::LG).into()
        };

        button(label_text)
            .on_press(Message::ViewChanged(view))
            .padding([spacing::SM, spacing::MD])
            .width(Length::Fill)
            .style(style)
            .into()
    }

    /// Render the main content area
    fn view_content(&self) -> Element<'_, Message> {
        let content = match self.state.current_view {
            View::Cellar => views::view_cellar(&self.state),
            View::Editor => views::view_editor(&self.state, &self.config),
            View::Settings => views::view_settings(&self.config, self.store.records_dir()),
        };

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(colors::BG_BASE.into()),
                ..Default::default()
            })
            .into()
    }

    /// Render the notification toast
    fn view_notification<'a>(&'a self, notif: &'a Notification) -> Element<'a, Message> {
        use crate::state::NotificationKind;

        let color = match notif.kind {
            NotificationKind::Info => colors::AXIS_ACIDITY,
            NotificationKind::Success => colors::ACCENT_GREEN,
            NotificationKind::Warning => colors::ACCENT_AMBER,
            NotificationKind::Error => colors::ACCENT_RED,
        };

        let dismiss_btn = button(text("x").size(font_size::SM))
            .on_press(Message::DismissNotification)
            .padding(spacing::XS)
            .style(move |_theme: &Theme, status| {
                let text_col = match status {
                    button::Status::Hovered => color,
                    _ => colors::TEXT_SECONDARY,
                };
                button::Style {
                    background: None,
                    text_color: text_col,
                    ..Default::default()
                }
            });

        let content = row![
            text(&notif.message)
                .size(font_size::BASE)
                .color(colors::TEXT_PRIMARY),
            horizontal_space(),
            dismiss_btn,
        ]
        .align_y(Alignment::Center)
        .spacing(spacing::SM);

        container(content)
            .padding(spacing::MD)
            .width(Length::Fill)
            .style(move |_theme| container::Style {
                background: Some(colors::BG_SURFACE.into()),
                border: iced::Border {
                    color: colors::with_alpha(color, 0.6),
                    width: 1.5,
                    radius: 12.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    /// Get theme
    pub fn theme(&self) -> Theme {
        vinoteca_theme()
    }

    /// Get title
    pub fn title(&self) -> String {
        String::from("vinoteca - Wine Tasting Notebook")
    }

    /// Set up subscriptions
    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(handle_keyboard_shortcut)
    }
}

/// Handle keyboard shortcuts
fn handle_keyboard_shortcut(key: Key, modifiers: Modifiers) -> Option<Message> {
    if modifiers.control() {
        if let Key::Character(c) = &key {
            match c.as_str() {
                "1" => return Some(Message::KeyPressed(KeyboardShortcut::GotoCellar)),
                "2" => return Some(Message::KeyPressed(KeyboardShortcut::GotoEditor)),
                "," => return Some(Message::KeyPressed(KeyboardShortcut::GotoSettings)),
                "s" | "S" => return Some(Message::KeyPressed(KeyboardShortcut::Save)),
                "b" | "B" => return Some(Message::KeyPressed(KeyboardShortcut::ToggleSidebar)),
                _ => {}
            }
        }
    }

    if let Key::Named(Named::F5) = key {
        return Some(Message::KeyPressed(KeyboardShortcut::Refresh));
    }

    None
}
