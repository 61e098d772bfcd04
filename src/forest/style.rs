//! Chart colors and marker sizing
//!
//! The plot uses a fixed two-tone palette: intervention blue for study
//! markers and the left arrow, control red for the combined effect and the
//! right arrow. Marker sizes are specified as areas in printer's points
//! squared and converted to pixel dimensions at render time, so square
//! area stays linear in study weight at any DPI.

use plotters::style::RGBColor;

/// Study markers, CI segments, and the "favors intervention" arrow (#2166AC)
pub const INTERVENTION_BLUE: RGBColor = RGBColor(0x21, 0x66, 0xAC);

/// Combined effect and the "favors control" arrow (#B2182B)
pub const CONTROL_RED: RGBColor = RGBColor(0xB2, 0x18, 0x2B);

/// Null line, separator line, and caption text
pub const NEUTRAL_GRAY: RGBColor = RGBColor(0x80, 0x80, 0x80);

/// Caption box fill (#F9F9F9)
pub const CAPTION_FILL: RGBColor = RGBColor(0xF9, 0xF9, 0xF9);

/// Caption box border (#E0E0E0)
pub const CAPTION_BORDER: RGBColor = RGBColor(0xE0, 0xE0, 0xE0);

/// Parse a hex color string to an RGB color
///
/// Supports formats:
/// - `#RRGGBB` (6 hex digits)
/// - `#RRGGBBAA` (8 hex digits, alpha ignored)
/// - either form without the leading `#`
pub fn parse_hex_color(hex: &str) -> Option<RGBColor> {
    let hex = hex.trim_start_matches('#');

    if hex.len() != 6 && hex.len() != 8 {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(RGBColor(r, g, b))
}

/// Convert a length in printer's points (1/72 inch) to pixels at `dpi`.
pub fn pt_to_px(pt: f64, dpi: u32) -> f64 {
    pt * dpi as f64 / 72.0
}

/// Half-side of a study's square marker in pixels.
///
/// The square's area in points squared is `area_per_weight × weight`, so
/// rendered area is proportional to weight (area = k × weight).
pub fn square_half_side_px(weight_percent: f64, area_per_weight: f64, dpi: u32) -> i32 {
    let side_pt = (weight_percent * area_per_weight).sqrt();
    (pt_to_px(side_pt, dpi) / 2.0).round() as i32
}

/// Half-diagonal of the pooled diamond marker in pixels.
///
/// A diamond with half-diagonal h covers area 2h², so h = sqrt(area / 2).
pub fn diamond_half_diag_px(area_pt2: f64, dpi: u32) -> i32 {
    let half_diag_pt = (area_pt2 / 2.0).sqrt();
    pt_to_px(half_diag_pt, dpi).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        // 6-digit hex
        assert_eq!(parse_hex_color("#FF0000"), Some(RGBColor(255, 0, 0)));
        assert_eq!(parse_hex_color("#2166AC"), Some(INTERVENTION_BLUE));
        assert_eq!(parse_hex_color("#B2182B"), Some(CONTROL_RED));

        // Without #
        assert_eq!(parse_hex_color("808080"), Some(NEUTRAL_GRAY));

        // 8-digit hex (alpha ignored)
        assert_eq!(parse_hex_color("#2166ACFF"), Some(INTERVENTION_BLUE));

        // Invalid
        assert_eq!(parse_hex_color("#FFF"), None); // Too short
        assert_eq!(parse_hex_color("GGGGGG"), None); // Invalid hex
    }

    #[test]
    fn test_pt_to_px() {
        // 72 pt = 1 inch = dpi pixels
        assert_eq!(pt_to_px(72.0, 300), 300.0);
        assert_eq!(pt_to_px(36.0, 300), 150.0);
        assert_eq!(pt_to_px(72.0, 72), 72.0);
    }

    #[test]
    fn test_square_area_proportional_to_weight() {
        // area = k × weight: doubling the weight doubles the pixel area
        let dpi = 300;
        let k: f64 = 8.0;
        for &(w_small, w_large) in &[(10.0, 20.0), (15.0, 30.0), (25.0, 50.0)] {
            let side_small = pt_to_px((w_small * k).sqrt(), dpi);
            let side_large = pt_to_px((w_large * k).sqrt(), dpi);
            let ratio = (side_large * side_large) / (side_small * side_small);
            assert!((ratio - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_square_half_side_monotonic() {
        let mut last = 0;
        for weight in [15.0, 18.0, 20.0, 22.0, 25.0] {
            let half = square_half_side_px(weight, 8.0, 300);
            assert!(half > last, "marker size must grow with weight");
            last = half;
        }
    }

    #[test]
    fn test_diamond_half_diag() {
        // 300 pt² diamond: h = sqrt(150) pt ≈ 12.25 pt ≈ 51 px at 300 DPI
        assert_eq!(diamond_half_diag_px(300.0, 300), 51);
    }
}
