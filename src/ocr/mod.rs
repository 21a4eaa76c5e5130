//! Label text parsing
//!
//! Image OCR itself happens outside this crate; this module takes the
//! extracted text of a wine label and pulls out best-effort field
//! suggestions by keyword matching. All results are suggestions only.

use crate::domain::LabelScan;
use regex::Regex;
use std::sync::LazyLock;

/// Grape varieties recognized on labels
const GRAPE_VARIETIES: &[&str] = &[
    "Cabernet Sauvignon",
    "Merlot",
    "Pinot Noir",
    "Chardonnay",
    "Sauvignon Blanc",
    "Syrah",
    "Shiraz",
    "Malbec",
    "Nebbiolo",
    "Sangiovese",
    "Tempranillo",
    "Riesling",
    "Pinot Grigio",
    "Gewürztraminer",
    "Viognier",
    "Grenache",
    "Cabernet Franc",
    "Petit Verdot",
    "Carménère",
    "Barbera",
    "Dolcetto",
];

/// Wine regions recognized on labels
const REGIONS: &[&str] = &[
    "Bordeaux",
    "Burgundy",
    "Champagne",
    "Rhône",
    "Loire",
    "Alsace",
    "Tuscany",
    "Piedmont",
    "Veneto",
    "Sicily",
    "Rioja",
    "Ribera del Duero",
    "Napa Valley",
    "Sonoma",
    "Willamette Valley",
    "Marlborough",
    "Barossa Valley",
    "Hunter Valley",
    "Mosel",
    "Rheingau",
    "Douro",
    "Alentejo",
];

/// Words that mark a line as naming the producer
const PRODUCER_KEYWORDS: &[&str] = &["Winery", "Vineyards", "Estate", "Château", "Domaine", "Bodega"];

/// Vintage years as printed on labels (1900-2099)
static VINTAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(19|20)\d{2}\b").expect("vintage pattern is valid"));

/// Parse extracted label text into field suggestions
pub fn parse_label_text(text: &str) -> LabelScan {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut scan = LabelScan {
        extracted_text: text.to_string(),
        processed_at: chrono::Utc::now().to_rfc3339(),
        ..LabelScan::default()
    };

    // Wine name: first short-ish early line not starting with a digit
    scan.wine_name = lines
        .iter()
        .take(5)
        .find(|line| {
            line.len() > 3 && line.len() < 50 && !line.starts_with(|c: char| c.is_ascii_digit())
        })
        .map(|line| line.to_string());

    scan.grape_variety = find_keyword(&lines, GRAPE_VARIETIES);
    scan.region = find_keyword(&lines, REGIONS);

    scan.vintage = VINTAGE_RE.find(text).map(|m| m.as_str().to_string());

    // Producer: the whole line containing a producer keyword
    scan.producer = lines
        .iter()
        .find(|line| PRODUCER_KEYWORDS.iter().any(|kw| line.contains(kw)))
        .map(|line| line.to_string());

    scan
}

/// First table entry contained (case-insensitively) in any line
fn find_keyword(lines: &[&str], table: &[&str]) -> Option<String> {
    for line in lines {
        let lower = line.to_lowercase();
        for entry in table {
            if lower.contains(&entry.to_lowercase()) {
                return Some(entry.to_string());
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_LABEL: &str = "\
Silver Oak
Napa Valley
Cabernet Sauvignon
2018
Silver Oak Winery, Oakville";

    #[test]
    fn test_full_label() {
        let scan = parse_label_text(SAMPLE_LABEL);
        assert_eq!(scan.wine_name.as_deref(), Some("Silver Oak"));
        assert_eq!(scan.grape_variety.as_deref(), Some("Cabernet Sauvignon"));
        assert_eq!(scan.region.as_deref(), Some("Napa Valley"));
        assert_eq!(scan.vintage.as_deref(), Some("2018"));
        assert_eq!(
            scan.producer.as_deref(),
            Some("Silver Oak Winery, Oakville")
        );
        assert!(scan.has_suggestions());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let scan = parse_label_text("grand cru\nCHABLIS from BURGUNDY\nchardonnay all the way");
        assert_eq!(scan.grape_variety.as_deref(), Some("Chardonnay"));
        assert_eq!(scan.region.as_deref(), Some("Burgundy"));
    }

    #[test]
    fn test_name_skips_numeric_leading_lines() {
        let scan = parse_label_text("750ml\n1985\nPenfolds Grange");
        assert_eq!(scan.wine_name.as_deref(), Some("Penfolds Grange"));
        assert_eq!(scan.vintage.as_deref(), Some("1985"));
    }

    #[test]
    fn test_vintage_is_first_plausible_year() {
        let scan = parse_label_text("Bottled 2021, vintage 2019");
        assert_eq!(scan.vintage.as_deref(), Some("2021"));
        assert!(parse_label_text("est. 1312").vintage.is_none());
    }

    #[test]
    fn test_empty_text_has_no_suggestions() {
        let scan = parse_label_text("");
        assert!(!scan.has_suggestions());
        assert!(scan.extracted_text.is_empty());
    }

    #[test]
    fn test_accented_keywords() {
        let scan = parse_label_text("Château Margaux\nBordeaux");
        assert_eq!(scan.producer.as_deref(), Some("Château Margaux"));
        assert_eq!(scan.region.as_deref(), Some("Bordeaux"));
    }
}
