//! Application state definitions
//!
//! Contains all state types for the vinoteca-gui application.

use crate::message::View;
use vinoteca::domain::{
    CharacteristicSet, LabelScan, NoteDraft, RecordId, TastingNote, TastingRating, Vintage,
};
use vinoteca::error::DomainError;

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Current view
    pub current_view: View,

    /// Whether sidebar is expanded
    pub sidebar_expanded: bool,

    /// Loaded records, newest first
    pub records: Vec<TastingNote>,

    /// Record pending deletion (for confirmation dialog)
    pub pending_delete: Option<RecordId>,

    /// The tasting entry form
    pub editor: EditorForm,

    /// Current notification/error message
    pub notification: Option<Notification>,
}

impl AppState {
    /// Create a new application state
    pub fn new() -> Self {
        Self {
            sidebar_expanded: true,
            ..Self::default()
        }
    }

    /// Set a notification
    pub fn set_notification(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    /// Clear the current notification
    pub fn clear_notification(&mut self) {
        self.notification = None;
    }
}

/// The tasting entry form, owner of the characteristic set being edited
#[derive(Debug, Clone, Default)]
pub struct EditorForm {
    /// Record being edited, None when entering a new tasting
    pub editing_id: Option<RecordId>,

    /// Wine name input
    pub name: String,

    /// The five taste values bound to the radar editor
    pub characteristics: CharacteristicSet,

    /// Notes input
    pub notes: String,

    /// Picked rating
    pub rating: Option<TastingRating>,

    /// Vintage input (validated on save)
    pub vintage: String,

    /// Region input
    pub region: String,

    /// Grape variety input
    pub grape_variety: String,

    /// Producer input
    pub producer: String,

    /// Pasted label text for scanning
    pub label_text: String,

    /// Parsed suggestions from the label text
    pub suggestions: Option<LabelScan>,
}

impl EditorForm {
    /// Fresh form for a new tasting, all axes at the neutral midpoint
    pub fn new() -> Self {
        Self::default()
    }

    /// Form populated from an existing record
    pub fn from_note(note: &TastingNote) -> Self {
        Self {
            editing_id: Some(note.id.clone()),
            name: note.name.clone(),
            characteristics: note.characteristics,
            notes: note.notes.clone().unwrap_or_default(),
            rating: note.rating,
            vintage: note
                .vintage
                .as_ref()
                .map(|v| v.as_str().to_string())
                .unwrap_or_default(),
            region: note.region.clone().unwrap_or_default(),
            grape_variety: note.grape_variety.clone().unwrap_or_default(),
            producer: note.producer.clone().unwrap_or_default(),
            label_text: String::new(),
            suggestions: note.label_scan.clone(),
        }
    }

    /// Whether the form edits an existing record
    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Build a draft for saving
    ///
    /// # Errors
    /// Returns a `DomainError` for an invalid vintage or field limits
    pub fn to_draft(&self) -> Result<NoteDraft, DomainError> {
        let vintage = match self.vintage.trim() {
            "" => None,
            v => Some(Vintage::new(v)?),
        };

        let draft = NoteDraft {
            name: self.name.clone(),
            characteristics: self.characteristics,
            notes: non_empty(&self.notes),
            rating: self.rating,
            vintage,
            region: non_empty(&self.region),
            grape_variety: non_empty(&self.grape_variety),
            producer: non_empty(&self.producer),
            label_scan: self.suggestions.clone(),
        };
        draft.validate()?;
        Ok(draft)
    }

    /// Copy label suggestions into fields the user has left empty
    pub fn apply_suggestions(&mut self) {
        let Some(scan) = self.suggestions.clone() else {
            return;
        };

        if self.name.trim().is_empty() {
            if let Some(name) = scan.wine_name {
                self.name = name;
            }
        }
        if self.grape_variety.trim().is_empty() {
            if let Some(grape) = scan.grape_variety {
                self.grape_variety = grape;
            }
        }
        if self.region.trim().is_empty() {
            if let Some(region) = scan.region {
                self.region = region;
            }
        }
        if self.vintage.trim().is_empty() {
            if let Some(vintage) = scan.vintage {
                self.vintage = vintage;
            }
        }
        if self.producer.trim().is_empty() {
            if let Some(producer) = scan.producer {
                self.producer = producer;
            }
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

/// A transient user-facing message
#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    /// Informational notification
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            message: message.into(),
        }
    }

    /// Success notification
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    /// Warning notification
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Warning,
            message: message.into(),
        }
    }

    /// Error notification
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vinoteca::domain::{Characteristic, CharacteristicValue};

    #[test]
    fn test_form_roundtrip_through_note() {
        let characteristics = CharacteristicSet::default().with_value(
            Characteristic::Bitterness,
            CharacteristicValue::new(15).unwrap(),
        );
        let mut form = EditorForm::new();
        form.name = "Gruner Veltliner".to_string();
        form.characteristics = characteristics;
        form.vintage = "2022".to_string();

        let draft = form.to_draft().unwrap();
        assert_eq!(draft.name, "Gruner Veltliner");
        assert_eq!(draft.characteristics, characteristics);
        assert_eq!(draft.vintage.unwrap().as_str(), "2022");
        assert!(draft.notes.is_none());
    }

    #[test]
    fn test_form_rejects_bad_vintage() {
        let mut form = EditorForm::new();
        form.name = "Wine".to_string();
        form.vintage = "not-a-year".to_string();
        assert!(form.to_draft().is_err());
    }

    #[test]
    fn test_apply_suggestions_keeps_user_input() {
        let mut form = EditorForm::new();
        form.name = "My Name".to_string();
        form.suggestions = Some(LabelScan {
            extracted_text: String::new(),
            processed_at: String::new(),
            wine_name: Some("Scanned Name".to_string()),
            grape_variety: Some("Merlot".to_string()),
            region: None,
            vintage: Some("2015".to_string()),
            producer: None,
        });

        form.apply_suggestions();
        assert_eq!(form.name, "My Name");
        assert_eq!(form.grape_variety, "Merlot");
        assert_eq!(form.vintage, "2015");
        assert!(form.region.is_empty());
    }

    #[test]
    fn test_form_from_note_is_editing() {
        let note = TastingNote::from_draft(
            RecordId::generate(),
            NoteDraft::new("Fleurie"),
        )
        .unwrap();
        let form = EditorForm::from_note(&note);
        assert!(form.is_editing());
        assert_eq!(form.name, "Fleurie");
        assert_eq!(form.characteristics, CharacteristicSet::default());
    }
}
