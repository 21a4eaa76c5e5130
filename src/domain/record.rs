//! Tasting record domain types
//!
//! A record pairs a wine name with its characteristic set plus optional
//! free-text metadata. Field limits follow the persisted schema; types
//! are validated on construction (fail-fast pattern).

use crate::domain::characteristics::CharacteristicSet;
use crate::domain::label::LabelScan;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Maximum wine name length
pub const MAX_NAME_LEN: usize = 100;
/// Maximum notes length
pub const MAX_NOTES_LEN: usize = 1000;
/// Maximum length for region, grape variety, and producer
pub const MAX_FIELD_LEN: usize = 100;
/// Maximum vintage string length
pub const MAX_VINTAGE_LEN: usize = 10;

/// Unique record identifier, assigned by the store on create
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Generate a fresh random id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Star rating (1-5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TastingRating(u8);

impl TastingRating {
    /// Minimum rating
    pub const MIN: u8 = 1;
    /// Maximum rating
    pub const MAX: u8 = 5;

    /// Create a new rating with validation
    ///
    /// # Errors
    /// Returns `DomainError::InvalidRating` if value is outside 1-5
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DomainError::InvalidRating(value));
        }
        Ok(Self(value))
    }

    /// Get the rating as a star count
    #[inline]
    pub const fn stars(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for TastingRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5", self.0)
    }
}

impl TryFrom<u8> for TastingRating {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TastingRating> for u8 {
    fn from(rating: TastingRating) -> Self {
        rating.0
    }
}

/// A vintage year, stored as the label prints it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Vintage(String);

impl Vintage {
    /// Create a new vintage with validation
    ///
    /// Accepts a 4-digit year in the 1900-2099 range.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidVintage` otherwise
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let trimmed = value.trim();
        let valid = trimmed.len() == 4
            && trimmed.chars().all(|c| c.is_ascii_digit())
            && (trimmed.starts_with("19") || trimmed.starts_with("20"));
        if !valid || value.len() > MAX_VINTAGE_LEN {
            return Err(DomainError::InvalidVintage(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the vintage as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Vintage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Vintage {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Vintage> for String {
    fn from(vintage: Vintage) -> Self {
        vintage.0
    }
}

/// An unsaved tasting entry, as held by the entry form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteDraft {
    /// Wine name (required, 1-100 chars)
    pub name: String,

    /// The five taste values
    #[serde(default)]
    pub characteristics: CharacteristicSet,

    /// Free-text tasting notes
    #[serde(default)]
    pub notes: Option<String>,

    /// Star rating
    #[serde(default)]
    pub rating: Option<TastingRating>,

    /// Vintage year
    #[serde(default)]
    pub vintage: Option<Vintage>,

    /// Wine region
    #[serde(default)]
    pub region: Option<String>,

    /// Grape variety
    #[serde(default)]
    pub grape_variety: Option<String>,

    /// Producer / winery
    #[serde(default)]
    pub producer: Option<String>,

    /// Label scan suggestions attached to this entry
    #[serde(default)]
    pub label_scan: Option<LabelScan>,
}

impl NoteDraft {
    /// Create a draft for a named wine with neutral characteristics
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the characteristic values
    pub fn with_characteristics(mut self, characteristics: CharacteristicSet) -> Self {
        self.characteristics = characteristics;
        self
    }

    /// Set the tasting notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Set the rating
    pub fn with_rating(mut self, rating: TastingRating) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Set the vintage
    pub fn with_vintage(mut self, vintage: Vintage) -> Self {
        self.vintage = Some(vintage);
        self
    }

    /// Validate all fields against their limits
    ///
    /// # Errors
    /// Returns the first `DomainError` found
    pub fn validate(&self) -> Result<(), DomainError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidName("name cannot be empty".into()));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(DomainError::FieldTooLong {
                field: "name",
                len: name.chars().count(),
                max: MAX_NAME_LEN,
            });
        }
        check_len("notes", self.notes.as_deref(), MAX_NOTES_LEN)?;
        check_len("region", self.region.as_deref(), MAX_FIELD_LEN)?;
        check_len("grape_variety", self.grape_variety.as_deref(), MAX_FIELD_LEN)?;
        check_len("producer", self.producer.as_deref(), MAX_FIELD_LEN)?;
        Ok(())
    }
}

fn check_len(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), DomainError> {
    if let Some(value) = value {
        let len = value.chars().count();
        if len > max {
            return Err(DomainError::FieldTooLong { field, len, max });
        }
    }
    Ok(())
}

/// A persisted tasting record with store-assigned id and timestamps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TastingNote {
    /// Unique record id
    pub id: RecordId,

    /// Wine name
    pub name: String,

    /// The five taste values
    pub characteristics: CharacteristicSet,

    /// Free-text tasting notes
    #[serde(default)]
    pub notes: Option<String>,

    /// Star rating
    #[serde(default)]
    pub rating: Option<TastingRating>,

    /// Vintage year
    #[serde(default)]
    pub vintage: Option<Vintage>,

    /// Wine region
    #[serde(default)]
    pub region: Option<String>,

    /// Grape variety
    #[serde(default)]
    pub grape_variety: Option<String>,

    /// Producer / winery
    #[serde(default)]
    pub producer: Option<String>,

    /// Label scan suggestions, if an image was processed
    #[serde(default)]
    pub label_scan: Option<LabelScan>,

    /// Creation timestamp (RFC 3339)
    pub created_at: String,

    /// Last modified timestamp (RFC 3339)
    pub modified_at: String,
}

impl TastingNote {
    /// Build a record from a validated draft
    ///
    /// # Errors
    /// Returns a `DomainError` if the draft fails validation
    pub fn from_draft(id: RecordId, draft: NoteDraft) -> Result<Self, DomainError> {
        draft.validate()?;
        let now = chrono::Utc::now().to_rfc3339();
        Ok(Self {
            id,
            name: draft.name.trim().to_string(),
            characteristics: draft.characteristics,
            notes: draft.notes.filter(|s| !s.trim().is_empty()),
            rating: draft.rating,
            vintage: draft.vintage,
            region: draft.region.filter(|s| !s.trim().is_empty()),
            grape_variety: draft.grape_variety.filter(|s| !s.trim().is_empty()),
            producer: draft.producer.filter(|s| !s.trim().is_empty()),
            label_scan: draft.label_scan,
            created_at: now.clone(),
            modified_at: now,
        })
    }

    /// Replace the editable fields from a draft, keeping id and created_at
    ///
    /// # Errors
    /// Returns a `DomainError` if the draft fails validation
    pub fn apply_draft(&mut self, draft: NoteDraft) -> Result<(), DomainError> {
        draft.validate()?;
        self.name = draft.name.trim().to_string();
        self.characteristics = draft.characteristics;
        self.notes = draft.notes.filter(|s| !s.trim().is_empty());
        self.rating = draft.rating;
        self.vintage = draft.vintage;
        self.region = draft.region.filter(|s| !s.trim().is_empty());
        self.grape_variety = draft.grape_variety.filter(|s| !s.trim().is_empty());
        self.producer = draft.producer.filter(|s| !s.trim().is_empty());
        if draft.label_scan.is_some() {
            self.label_scan = draft.label_scan;
        }
        self.touch();
        Ok(())
    }

    /// Turn this record back into an editable draft
    pub fn to_draft(&self) -> NoteDraft {
        NoteDraft {
            name: self.name.clone(),
            characteristics: self.characteristics,
            notes: self.notes.clone(),
            rating: self.rating,
            vintage: self.vintage.clone(),
            region: self.region.clone(),
            grape_variety: self.grape_variety.clone(),
            producer: self.producer.clone(),
            label_scan: self.label_scan.clone(),
        }
    }

    /// Update the modified timestamp
    pub fn touch(&mut self) {
        self.modified_at = chrono::Utc::now().to_rfc3339();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::characteristics::{Characteristic, CharacteristicValue};

    #[test]
    fn test_rating_valid() {
        assert!(TastingRating::new(1).is_ok());
        assert!(TastingRating::new(5).is_ok());
    }

    #[test]
    fn test_rating_invalid() {
        assert!(TastingRating::new(0).is_err());
        assert!(TastingRating::new(6).is_err());
    }

    #[test]
    fn test_rating_display() {
        let rating = TastingRating::new(4).unwrap();
        assert_eq!(rating.to_string(), "4/5");
    }

    #[test]
    fn test_vintage_valid() {
        assert!(Vintage::new("2018").is_ok());
        assert!(Vintage::new("1947").is_ok());
        assert_eq!(Vintage::new(" 2020 ").unwrap().as_str(), "2020");
    }

    #[test]
    fn test_vintage_invalid() {
        assert!(Vintage::new("18").is_err());
        assert!(Vintage::new("20188").is_err());
        assert!(Vintage::new("3018").is_err());
        assert!(Vintage::new("year").is_err());
    }

    #[test]
    fn test_draft_validation() {
        assert!(NoteDraft::new("Chateau Margaux").validate().is_ok());
        assert!(NoteDraft::new("  ").validate().is_err());
        assert!(NoteDraft::new("x".repeat(101)).validate().is_err());

        let long_notes = NoteDraft::new("Wine").with_notes("n".repeat(1001));
        assert!(matches!(
            long_notes.validate(),
            Err(DomainError::FieldTooLong { field: "notes", .. })
        ));
    }

    #[test]
    fn test_record_from_draft() {
        let characteristics = CharacteristicSet::default()
            .with_value(Characteristic::Acidity, CharacteristicValue::new(70).unwrap());
        let draft = NoteDraft::new("  Barolo Riserva ")
            .with_characteristics(characteristics)
            .with_rating(TastingRating::new(5).unwrap())
            .with_vintage(Vintage::new("2016").unwrap());

        let note = TastingNote::from_draft(RecordId::generate(), draft).unwrap();
        assert_eq!(note.name, "Barolo Riserva");
        assert_eq!(note.characteristics, characteristics);
        assert_eq!(note.rating.unwrap().stars(), 5);
        assert_eq!(note.created_at, note.modified_at);
    }

    #[test]
    fn test_empty_optionals_dropped() {
        let mut draft = NoteDraft::new("Wine");
        draft.region = Some("   ".to_string());
        draft.notes = Some(String::new());

        let note = TastingNote::from_draft(RecordId::generate(), draft).unwrap();
        assert!(note.region.is_none());
        assert!(note.notes.is_none());
    }

    #[test]
    fn test_draft_roundtrip() {
        let draft = NoteDraft::new("Riesling")
            .with_notes("petrol, lime")
            .with_vintage(Vintage::new("2019").unwrap());
        let note = TastingNote::from_draft(RecordId::generate(), draft.clone()).unwrap();
        let back = note.to_draft();
        assert_eq!(back.name, draft.name);
        assert_eq!(back.notes, draft.notes);
        assert_eq!(back.vintage, draft.vintage);
    }

    #[test]
    fn test_record_toml_roundtrip() {
        let note =
            TastingNote::from_draft(RecordId::generate(), NoteDraft::new("Chianti")).unwrap();
        let serialized = toml::to_string_pretty(&note).unwrap();
        let back: TastingNote = toml::from_str(&serialized).unwrap();
        assert_eq!(back.id, note.id);
        assert_eq!(back.name, note.name);
        assert_eq!(back.characteristics, note.characteristics);
    }
}
