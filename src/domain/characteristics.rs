//! Taste characteristic domain types
//!
//! Provides validated types for the five wine taste axes and the
//! value set edited on the radar chart.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five taste axes, in fixed display order.
///
/// The order determines the angular position on the radar chart and
/// must never change once records are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Characteristic {
    Sweetness,
    Body,
    Acidity,
    Tannin,
    Bitterness,
}

impl Characteristic {
    /// All axes in chart order
    pub const ALL: [Characteristic; 5] = [
        Characteristic::Sweetness,
        Characteristic::Body,
        Characteristic::Acidity,
        Characteristic::Tannin,
        Characteristic::Bitterness,
    ];

    /// Number of axes
    pub const COUNT: usize = Self::ALL.len();

    /// Stable identifier used in persisted records
    pub const fn key(&self) -> &'static str {
        match self {
            Characteristic::Sweetness => "sweetness",
            Characteristic::Body => "body",
            Characteristic::Acidity => "acidity",
            Characteristic::Tannin => "tannin",
            Characteristic::Bitterness => "bitterness",
        }
    }

    /// Display label
    pub const fn label(&self) -> &'static str {
        match self {
            Characteristic::Sweetness => "Sweetness",
            Characteristic::Body => "Body",
            Characteristic::Acidity => "Acidity",
            Characteristic::Tannin => "Tannin",
            Characteristic::Bitterness => "Bitterness",
        }
    }

    /// Position of this axis in chart order
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    /// Axis at the given chart position, if in range
    pub fn from_index(index: usize) -> Option<Characteristic> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single characteristic value (0-100)
///
/// Validated on construction to ensure the value is within valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CharacteristicValue(u8);

impl CharacteristicValue {
    /// Minimum valid value
    pub const MIN: u8 = 0;
    /// Maximum valid value
    pub const MAX: u8 = 100;
    /// Neutral midpoint used for fresh records
    pub const NEUTRAL: CharacteristicValue = CharacteristicValue(50);

    /// Create a new CharacteristicValue with validation
    ///
    /// # Errors
    /// Returns `DomainError::InvalidCharacteristicValue` if value > 100
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if value > Self::MAX {
            return Err(DomainError::InvalidCharacteristicValue(value));
        }
        Ok(Self(value))
    }

    /// Clamp an arbitrary float into range and round to the nearest integer.
    ///
    /// Interactive updates go through this path; out-of-range intermediate
    /// arithmetic is clamped rather than rejected.
    pub fn from_f32(value: f32) -> Self {
        Self(value.clamp(0.0, 100.0).round() as u8)
    }

    /// Get the value as a percentage (0-100)
    #[inline]
    pub const fn as_percentage(&self) -> u8 {
        self.0
    }

    /// Get the value as a fraction (0.0-1.0)
    #[inline]
    pub fn as_fraction(&self) -> f32 {
        self.0 as f32 / 100.0
    }
}

impl Default for CharacteristicValue {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl fmt::Display for CharacteristicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for CharacteristicValue {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CharacteristicValue> for u8 {
    fn from(value: CharacteristicValue) -> Self {
        value.0
    }
}

/// The full set of five characteristic values, one per axis.
///
/// Owned by the view holding the tasting form; the radar editor receives
/// it by value and proposes replacement sets, it never mutates in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacteristicSet {
    pub sweetness: CharacteristicValue,
    pub body: CharacteristicValue,
    pub acidity: CharacteristicValue,
    pub tannin: CharacteristicValue,
    pub bitterness: CharacteristicValue,
}

impl CharacteristicSet {
    /// Create a set with every axis at the given value
    pub fn uniform(value: CharacteristicValue) -> Self {
        Self {
            sweetness: value,
            body: value,
            acidity: value,
            tannin: value,
            bitterness: value,
        }
    }

    /// Get the value for an axis
    pub fn get(&self, axis: Characteristic) -> CharacteristicValue {
        match axis {
            Characteristic::Sweetness => self.sweetness,
            Characteristic::Body => self.body,
            Characteristic::Acidity => self.acidity,
            Characteristic::Tannin => self.tannin,
            Characteristic::Bitterness => self.bitterness,
        }
    }

    /// Return a copy with one axis replaced
    #[must_use]
    pub fn with_value(mut self, axis: Characteristic, value: CharacteristicValue) -> Self {
        match axis {
            Characteristic::Sweetness => self.sweetness = value,
            Characteristic::Body => self.body = value,
            Characteristic::Acidity => self.acidity = value,
            Characteristic::Tannin => self.tannin = value,
            Characteristic::Bitterness => self.bitterness = value,
        }
        self
    }

    /// All values in axis order
    pub fn values(&self) -> [CharacteristicValue; Characteristic::COUNT] {
        [
            self.sweetness,
            self.body,
            self.acidity,
            self.tannin,
            self.bitterness,
        ]
    }

    /// Iterate (axis, value) pairs in axis order
    pub fn iter(&self) -> impl Iterator<Item = (Characteristic, CharacteristicValue)> + '_ {
        Characteristic::ALL.iter().map(|&axis| (axis, self.get(axis)))
    }
}

impl Default for CharacteristicSet {
    /// All axes at the neutral midpoint (50)
    fn default() -> Self {
        Self::uniform(CharacteristicValue::NEUTRAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_valid() {
        assert!(CharacteristicValue::new(0).is_ok());
        assert!(CharacteristicValue::new(50).is_ok());
        assert!(CharacteristicValue::new(100).is_ok());
    }

    #[test]
    fn test_value_invalid() {
        assert!(CharacteristicValue::new(101).is_err());
        assert!(CharacteristicValue::new(255).is_err());
    }

    #[test]
    fn test_value_from_f32_clamps_and_rounds() {
        assert_eq!(CharacteristicValue::from_f32(-12.0).as_percentage(), 0);
        assert_eq!(CharacteristicValue::from_f32(140.0).as_percentage(), 100);
        assert_eq!(CharacteristicValue::from_f32(49.5).as_percentage(), 50);
        assert_eq!(CharacteristicValue::from_f32(49.4).as_percentage(), 49);
    }

    #[test]
    fn test_value_as_fraction() {
        let value = CharacteristicValue::new(50).unwrap();
        assert!((value.as_fraction() - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_axis_order_is_stable() {
        let keys: Vec<_> = Characteristic::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(
            keys,
            vec!["sweetness", "body", "acidity", "tannin", "bitterness"]
        );
        for (i, axis) in Characteristic::ALL.iter().enumerate() {
            assert_eq!(axis.index(), i);
            assert_eq!(Characteristic::from_index(i), Some(*axis));
        }
        assert_eq!(Characteristic::from_index(5), None);
    }

    #[test]
    fn test_set_default_is_neutral() {
        let set = CharacteristicSet::default();
        for (_, value) in set.iter() {
            assert_eq!(value.as_percentage(), 50);
        }
    }

    #[test]
    fn test_set_with_value_replaces_single_axis() {
        let set = CharacteristicSet::default()
            .with_value(Characteristic::Tannin, CharacteristicValue::new(80).unwrap());

        assert_eq!(set.get(Characteristic::Tannin).as_percentage(), 80);
        assert_eq!(set.get(Characteristic::Sweetness).as_percentage(), 50);
        assert_eq!(set.get(Characteristic::Bitterness).as_percentage(), 50);
    }

    #[test]
    fn test_set_serializes_as_named_map() {
        let set = CharacteristicSet::default()
            .with_value(Characteristic::Body, CharacteristicValue::new(62).unwrap());
        let toml = toml::to_string(&set).unwrap();
        assert!(toml.contains("body = 62"));
        assert!(toml.contains("sweetness = 50"));

        let back: CharacteristicSet = toml::from_str(&toml).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn test_set_rejects_out_of_range_on_parse() {
        let result: Result<CharacteristicSet, _> = toml::from_str("sweetness = 130");
        assert!(result.is_err());
    }
}
