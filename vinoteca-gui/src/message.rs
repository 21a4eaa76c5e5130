//! Application message definitions
//!
//! Hierarchical message structure following The Elm Architecture.

use vinoteca::domain::{CharacteristicSet, RecordId, TastingRating};

/// Top-level application messages
#[derive(Debug, Clone)]
pub enum Message {
    // === Navigation ===
    /// Switch to a different view
    ViewChanged(View),

    /// Toggle sidebar expanded/collapsed
    SidebarToggled,

    /// Keyboard shortcut pressed
    KeyPressed(KeyboardShortcut),

    // === Cellar (record list) ===
    /// Cellar messages
    Cellar(CellarMessage),

    // === Tasting editor ===
    /// Editor messages
    Editor(EditorMessage),

    // === Notifications ===
    /// Dismiss error/notification
    DismissNotification,
}

/// Available application views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Record list
    #[default]
    Cellar,
    /// Tasting entry / edit form
    Editor,
    /// Application settings
    Settings,
}

impl View {
    /// Get the display name for this view
    pub fn name(&self) -> &'static str {
        match self {
            View::Cellar => "Cellar",
            View::Editor => "Tasting",
            View::Settings => "Settings",
        }
    }
}

/// Record list specific messages
#[derive(Debug, Clone)]
pub enum CellarMessage {
    /// Open a record in the editor
    Edit(RecordId),

    /// Ask to delete a record (opens confirmation)
    RequestDelete(RecordId),

    /// Confirm the pending deletion
    ConfirmDelete,

    /// Cancel the pending deletion
    CancelDelete,

    /// Reload records from disk
    Refresh,

    /// Export the cellar as JSON next to the record files
    Export,
}

/// Tasting editor specific messages
#[derive(Debug, Clone)]
pub enum EditorMessage {
    /// Start a fresh tasting entry
    New,

    /// The radar editor proposed an updated value set (full set, no delta)
    CharacteristicsChanged(CharacteristicSet),

    /// Wine name input changed
    NameChanged(String),

    /// Notes input changed
    NotesChanged(String),

    /// Rating picked (None clears)
    RatingChanged(Option<TastingRating>),

    /// Vintage input changed
    VintageChanged(String),

    /// Region input changed
    RegionChanged(String),

    /// Grape variety input changed
    GrapeVarietyChanged(String),

    /// Producer input changed
    ProducerChanged(String),

    /// Label text input changed (pasted OCR output)
    LabelTextChanged(String),

    /// Parse the label text into suggestions
    ScanLabelText,

    /// Apply label suggestions into empty form fields
    ApplySuggestions,

    /// Toggle numeric value display on the chart
    ShowValuesToggled(bool),

    /// Toggle axis labels on the chart
    ShowAxisLabelsToggled(bool),

    /// Save the current draft (create or update)
    Save,

    /// Discard the current draft and return to the cellar
    Cancel,
}

impl From<CellarMessage> for Message {
    fn from(msg: CellarMessage) -> Self {
        Message::Cellar(msg)
    }
}

impl From<EditorMessage> for Message {
    fn from(msg: EditorMessage) -> Self {
        Message::Editor(msg)
    }
}

/// Keyboard shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardShortcut {
    /// Navigate to the cellar (Ctrl+1)
    GotoCellar,
    /// Start a new tasting (Ctrl+2)
    GotoEditor,
    /// Navigate to settings (Ctrl+,)
    GotoSettings,
    /// Save the current draft (Ctrl+S)
    Save,
    /// Refresh records (F5)
    Refresh,
    /// Toggle sidebar (Ctrl+B)
    ToggleSidebar,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_names() {
        assert_eq!(View::Cellar.name(), "Cellar");
        assert_eq!(View::Editor.name(), "Tasting");
        assert_eq!(View::Settings.name(), "Settings");
    }

    #[test]
    fn test_message_from_submessage() {
        let msg: Message = CellarMessage::Refresh.into();
        assert!(matches!(msg, Message::Cellar(CellarMessage::Refresh)));
    }
}
