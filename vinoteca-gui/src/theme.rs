//! Custom dark theme and color definitions for vinoteca-gui
//!
//! A cellar-dark aesthetic with one accent color per taste axis.

use iced::theme::{Custom, Palette};
use iced::Theme;
use std::sync::Arc;

/// Color definitions
pub mod colors {
    use iced::Color;
    use vinoteca::domain::Characteristic;

    // Background layers - deep cellar dark with a red tint

    /// Deepest background (#0c0709)
    pub const BG_BASE: Color = Color::from_rgb(0.047, 0.027, 0.035);

    /// Card/panel background (#171013)
    pub const BG_SURFACE: Color = Color::from_rgb(0.09, 0.063, 0.075);

    /// Elevated elements (#241820)
    pub const BG_ELEVATED: Color = Color::from_rgb(0.14, 0.094, 0.125);

    /// Overlay/hover (#362434)
    pub const BG_OVERLAY: Color = Color::from_rgb(0.21, 0.14, 0.2);

    // Text colors

    /// Primary text - warm white (#f8f3f5)
    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.97, 0.95, 0.96);

    /// Secondary text - dusty rose (#b39aa6)
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.70, 0.60, 0.65);

    /// Muted/disabled text (#6e5560)
    pub const TEXT_MUTED: Color = Color::from_rgb(0.43, 0.33, 0.38);

    // Accent colors

    /// Primary accent - wine red (#c0355c)
    pub const ACCENT_WINE: Color = Color::from_rgb(0.753, 0.208, 0.36);

    /// Wine bright - for hover highlights
    pub const ACCENT_WINE_BRIGHT: Color = Color::from_rgb(0.9, 0.42, 0.55);

    /// Success - mint (#34d399)
    pub const ACCENT_GREEN: Color = Color::from_rgb(0.2, 0.83, 0.6);

    /// Warning - amber (#fbbf24)
    pub const ACCENT_AMBER: Color = Color::from_rgb(0.98, 0.75, 0.14);

    /// Error - hot red (#f43f5e)
    pub const ACCENT_RED: Color = Color::from_rgb(0.957, 0.247, 0.37);

    /// Rating stars - gold (#ffd700)
    pub const ACCENT_GOLD: Color = Color::from_rgb(1.0, 0.843, 0.0);

    // Per-axis accents

    /// Sweetness - coral (#ff6b6b)
    pub const AXIS_SWEETNESS: Color = Color::from_rgb(1.0, 0.42, 0.42);

    /// Body - teal (#4ecdc4)
    pub const AXIS_BODY: Color = Color::from_rgb(0.306, 0.804, 0.769);

    /// Acidity - sky blue (#45b7d1)
    pub const AXIS_ACIDITY: Color = Color::from_rgb(0.27, 0.718, 0.82);

    /// Tannin - sage (#96ceb4)
    pub const AXIS_TANNIN: Color = Color::from_rgb(0.588, 0.808, 0.706);

    /// Bitterness - pale gold (#ffeaa7)
    pub const AXIS_BITTERNESS: Color = Color::from_rgb(1.0, 0.918, 0.655);

    /// Display-only accent color for a taste axis
    pub fn axis_color(axis: Characteristic) -> Color {
        match axis {
            Characteristic::Sweetness => AXIS_SWEETNESS,
            Characteristic::Body => AXIS_BODY,
            Characteristic::Acidity => AXIS_ACIDITY,
            Characteristic::Tannin => AXIS_TANNIN,
            Characteristic::Bitterness => AXIS_BITTERNESS,
        }
    }

    /// Create a color with modified alpha
    pub fn with_alpha(color: Color, alpha: f32) -> Color {
        Color { a: alpha, ..color }
    }

    /// Interpolate between two colors
    pub fn lerp(from: Color, to: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color::from_rgba(
            from.r + (to.r - from.r) * t,
            from.g + (to.g - from.g) * t,
            from.b + (to.b - from.b) * t,
            from.a + (to.a - from.a) * t,
        )
    }
}

/// Create the custom vinoteca dark theme
pub fn vinoteca_theme() -> Theme {
    Theme::Custom(Arc::new(Custom::new(
        "vinoteca-cellar".to_string(),
        Palette {
            background: colors::BG_BASE,
            text: colors::TEXT_PRIMARY,
            primary: colors::ACCENT_WINE,
            success: colors::ACCENT_GREEN,
            danger: colors::ACCENT_RED,
        },
    )))
}

/// Spacing constants
#[allow(dead_code)]
pub mod spacing {
    /// Extra small spacing (4px)
    pub const XS: u16 = 4;
    /// Small spacing (8px)
    pub const SM: u16 = 8;
    /// Medium spacing (16px)
    pub const MD: u16 = 16;
    /// Large spacing (24px)
    pub const LG: u16 = 24;
    /// Extra large spacing (32px)
    pub const XL: u16 = 32;
}

/// Font sizes
#[allow(dead_code)]
pub mod font_size {
    /// Extra small (10px) - Labels
    pub const XS: u16 = 10;
    /// Small (12px) - Captions
    pub const SM: u16 = 12;
    /// Base (14px) - Body text
    pub const BASE: u16 = 14;
    /// Large (16px) - Emphasis
    pub const LG: u16 = 16;
    /// Extra large (18px) - Subheadings
    pub const XL: u16 = 18;
    /// 2XL (22px) - Headings
    pub const XXL: u16 = 22;
}

/// Border radius constants
#[allow(dead_code)]
pub mod radius {
    /// Small radius (4px)
    pub const SM: f32 = 4.0;
    /// Medium radius (8px)
    pub const MD: f32 = 8.0;
    /// Large radius (12px)
    pub const LG: f32 = 12.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use vinoteca::domain::Characteristic;

    #[test]
    fn test_each_axis_has_distinct_color() {
        let all: Vec<_> = Characteristic::ALL
            .iter()
            .map(|&axis| colors::axis_color(axis))
            .collect();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_vinoteca_theme_creation() {
        let theme = vinoteca_theme();
        assert!(matches!(theme, Theme::Custom(_)));
    }

    #[test]
    fn test_with_alpha() {
        let color = colors::with_alpha(colors::ACCENT_WINE, 0.5);
        assert!((color.a - 0.5).abs() < 0.001);
    }
}
