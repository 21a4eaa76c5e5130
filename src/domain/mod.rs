//! Domain models for vinoteca
//!
//! This module contains all domain types with validation.
//! Types are validated on construction (fail-fast pattern).

pub mod characteristics;
pub mod label;
pub mod record;

pub use characteristics::{Characteristic, CharacteristicSet, CharacteristicValue};
pub use label::LabelScan;
pub use record::{NoteDraft, RecordId, TastingNote, TastingRating, Vintage};
