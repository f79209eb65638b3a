use serde::{Deserialize, Serialize};

use super::hex::{Color, Rgb};
use crate::error::ColorError;

/// Normal text, level AA.
pub const AA_SMALL: f64 = 4.5;
/// Normal text, level AAA.
pub const AAA_SMALL: f64 = 7.0;
/// Large text (18pt, or 14pt bold), level AA.
pub const AA_LARGE: f64 = 3.0;
/// Large text, level AAA.
pub const AAA_LARGE: f64 = 4.5;

/// Convert sRGB channel (0-255) to linear light value.
/// sRGB -> linear: if V <= 0.03928: V/12.92, else ((V+0.055)/1.055)^2.4
fn srgb_to_linear(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= 0.03928 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Calculate relative luminance per WCAG 2.x.
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * srgb_to_linear(rgb.r) + 0.7152 * srgb_to_linear(rgb.g) + 0.0722 * srgb_to_linear(rgb.b)
}

/// Calculate WCAG contrast ratio between two colors.
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let l1 = relative_luminance(a.rgb());
    let l2 = relative_luminance(b.rgb());
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// String-facing form of [`contrast_ratio`].
pub fn contrast_ratio_hex(hex1: &str, hex2: &str) -> Result<f64, ColorError> {
    Ok(contrast_ratio(hex1.parse()?, hex2.parse()?))
}

/// Round a ratio to 2 decimals. Display only; thresholds use the raw value.
pub fn round_ratio(ratio: f64) -> f64 {
    (ratio * 100.0).round() / 100.0
}

/// Render a ratio the way the checker shows it, e.g. `4.54:1`.
pub fn format_ratio(ratio: f64) -> String {
    format!("{:.2}:1", ratio)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Aa,
    Aaa,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextSize {
    Small,
    Large,
}

impl Level {
    pub fn threshold(self, size: TextSize) -> f64 {
        match (self, size) {
            (Level::Aa, TextSize::Small) => AA_SMALL,
            (Level::Aaa, TextSize::Small) => AAA_SMALL,
            (Level::Aa, TextSize::Large) => AA_LARGE,
            (Level::Aaa, TextSize::Large) => AAA_LARGE,
        }
    }
}

/// Pass/fail for the four WCAG text thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Compliance {
    #[serde(rename = "smallTextAA")]
    pub small_text_aa: bool,
    #[serde(rename = "smallTextAAA")]
    pub small_text_aaa: bool,
    #[serde(rename = "largeTextAA")]
    pub large_text_aa: bool,
    #[serde(rename = "largeTextAAA")]
    pub large_text_aaa: bool,
}

impl Compliance {
    pub fn passes(&self, level: Level, size: TextSize) -> bool {
        match (level, size) {
            (Level::Aa, TextSize::Small) => self.small_text_aa,
            (Level::Aaa, TextSize::Small) => self.small_text_aaa,
            (Level::Aa, TextSize::Large) => self.large_text_aa,
            (Level::Aaa, TextSize::Large) => self.large_text_aaa,
        }
    }

    pub fn all(&self) -> bool {
        self.small_text_aa && self.small_text_aaa && self.large_text_aa && self.large_text_aaa
    }

    pub fn none(&self) -> bool {
        !(self.small_text_aa || self.small_text_aaa || self.large_text_aa || self.large_text_aaa)
    }
}

/// Determine pass/fail for all WCAG thresholds from an unrounded ratio.
pub fn evaluate_compliance(ratio: f64) -> Compliance {
    Compliance {
        small_text_aa: ratio >= AA_SMALL,
        small_text_aaa: ratio >= AAA_SMALL,
        large_text_aa: ratio >= AA_LARGE,
        large_text_aaa: ratio >= AAA_LARGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(hex: &str) -> Color {
        hex.parse().unwrap()
    }

    #[test]
    fn luminance_extremes() {
        assert_eq!(relative_luminance(Rgb::new(255, 255, 255)), 1.0);
        assert_eq!(relative_luminance(Rgb::new(0, 0, 0)), 0.0);
    }

    #[test]
    fn luminance_uses_low_segment_below_knee() {
        // 10/255 = 0.0392 sits under the 0.03928 knee
        let l = relative_luminance(Rgb::new(10, 10, 10));
        assert!((l - (10.0 / 255.0) / 12.92).abs() < 1e-12, "got {l}");
    }

    #[test]
    fn black_on_white_is_21() {
        let ratio = contrast_ratio(c("#000000"), c("#ffffff"));
        assert!((ratio - 21.0).abs() < 0.01);
    }

    #[test]
    fn white_on_white_is_1() {
        assert_eq!(contrast_ratio(c("#ffffff"), c("#ffffff")), 1.0);
        assert_eq!(contrast_ratio(c("#777777"), c("#777777")), 1.0);
    }

    #[test]
    fn gray_on_white() {
        // colord: 4.54
        let ratio = contrast_ratio(c("#767676"), c("#ffffff"));
        assert!((ratio - 4.54).abs() < 0.01);
    }

    #[test]
    fn red_on_white() {
        // colord: 3.99
        let ratio = contrast_ratio(c("#ff0000"), c("#ffffff"));
        assert!((ratio - 3.99).abs() < 0.01);
    }

    #[test]
    fn slate_on_white() {
        // colord: 14.62
        let ratio = contrast_ratio(c("#1e293b"), c("#ffffff"));
        assert!((ratio - 14.62).abs() < 0.05);
    }

    #[test]
    fn zinc_400_on_zinc_950() {
        // colord: 7.76
        let ratio = contrast_ratio(c("#a1a1aa"), c("#09090b"));
        assert!((ratio - 7.76).abs() < 0.05);
    }

    #[test]
    fn hex_form_rejects_bad_input() {
        assert!(contrast_ratio_hex("#000000", "#fff").is_ok());
        assert!(matches!(
            contrast_ratio_hex("#000000", "white"),
            Err(ColorError::InvalidColorFormat { .. })
        ));
    }

    #[test]
    fn max_ratio_passes_everything() {
        let r = evaluate_compliance(contrast_ratio(Color::WHITE, Color::BLACK));
        assert!(r.all());
    }

    #[test]
    fn unit_ratio_passes_nothing() {
        assert!(evaluate_compliance(1.0).none());
    }

    #[test]
    fn thresholds_are_inclusive() {
        let r = evaluate_compliance(4.5);
        assert!(r.small_text_aa);
        assert!(r.large_text_aaa);
        assert!(!r.small_text_aaa);

        let r = evaluate_compliance(3.0);
        assert!(r.large_text_aa);
        assert!(!r.small_text_aa);

        assert!(evaluate_compliance(7.0).all());
    }

    #[test]
    fn compliance_uses_unrounded_ratio() {
        // 4.496 displays as 4.50 but must still fail AA
        let raw = 4.496;
        assert_eq!(format_ratio(raw), "4.50:1");
        assert!(!evaluate_compliance(raw).small_text_aa);
    }

    #[test]
    fn passes_matches_level_thresholds() {
        let r = evaluate_compliance(5.0);
        for level in [Level::Aa, Level::Aaa] {
            for size in [TextSize::Small, TextSize::Large] {
                assert_eq!(r.passes(level, size), 5.0 >= level.threshold(size));
            }
        }
    }

    #[test]
    fn round_ratio_two_decimals() {
        assert_eq!(round_ratio(4.5448), 4.54);
        assert_eq!(round_ratio(21.0), 21.0);
    }

    #[test]
    fn compliance_serializes_with_js_names() {
        let json = serde_json::to_value(evaluate_compliance(21.0)).unwrap();
        assert_eq!(json["smallTextAA"], true);
        assert_eq!(json["largeTextAAA"], true);
    }

    proptest! {
        #[test]
        fn prop_ratio_symmetric_and_bounded(
            a in (0u8..=255, 0u8..=255, 0u8..=255),
            b in (0u8..=255, 0u8..=255, 0u8..=255),
        ) {
            let ca = Color::from_rgb(Rgb::new(a.0, a.1, a.2));
            let cb = Color::from_rgb(Rgb::new(b.0, b.1, b.2));
            let ab = contrast_ratio(ca, cb);
            prop_assert_eq!(ab, contrast_ratio(cb, ca));
            prop_assert!(ab >= 1.0);
            prop_assert!(ab <= 21.0 + 1e-9);
        }

        #[test]
        fn prop_identity_ratio_is_one(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let color = Color::from_rgb(Rgb::new(r, g, b));
            prop_assert_eq!(contrast_ratio(color, color), 1.0);
        }

        #[test]
        fn prop_luminance_in_unit_range(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let l = relative_luminance(Rgb::new(r, g, b));
            prop_assert!((0.0..=1.0).contains(&l));
        }
    }
}
