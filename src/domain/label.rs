//! Label scan domain types
//!
//! The output of the label OCR pipeline: best-effort field suggestions
//! parsed from the text on a wine label. Never authoritative; the user
//! decides which suggestions to accept.

use serde::{Deserialize, Serialize};

/// Fields extracted from label text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelScan {
    /// The raw extracted text the suggestions were parsed from
    pub extracted_text: String,

    /// When the scan was processed (RFC 3339)
    pub processed_at: String,

    /// Suggested wine name
    #[serde(default)]
    pub wine_name: Option<String>,

    /// Suggested grape variety
    #[serde(default)]
    pub grape_variety: Option<String>,

    /// Suggested region
    #[serde(default)]
    pub region: Option<String>,

    /// Suggested vintage year
    #[serde(default)]
    pub vintage: Option<String>,

    /// Suggested producer
    #[serde(default)]
    pub producer: Option<String>,
}

impl LabelScan {
    /// Whether any field suggestion was extracted
    pub fn has_suggestions(&self) -> bool {
        self.wine_name.is_some()
            || self.grape_variety.is_some()
            || self.region.is_some()
            || self.vintage.is_some()
            || self.producer.is_some()
    }
}
