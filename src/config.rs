//! Chart configuration
//!
//! All values are compiled-in defaults: the chart this program draws is a
//! fixed illustrative figure, so there is no property loading and no
//! external configuration surface. The struct exists so every geometric
//! constant has a name and a unit, and so the layout code can be tested
//! against it.

use std::path::PathBuf;

/// Configuration for the rendered forest plot.
///
/// Distances along the x axis are in data units (risk-ratio scale), figure
/// dimensions are in plot units (inches) resolved to pixels via `dpi`.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Figure width in plot units (inches)
    pub figure_width: f64,

    /// Figure height in plot units (inches)
    pub figure_height: f64,

    /// Raster resolution in dots per inch
    pub dpi: u32,

    /// X-axis range (risk-ratio scale)
    pub x_range: (f64, f64),

    /// Y-axis range (row coordinates)
    pub y_range: (f64, f64),

    /// Null-effect reference position (RR = 1, no effect)
    pub null_effect: f64,

    /// X anchor of the study-name column (text right-aligned here)
    pub study_column_x: f64,

    /// X anchor of the "effect [CI]" column (text left-aligned here)
    pub effect_column_x: f64,

    /// X anchor of the weight column (text centered here)
    pub weight_column_x: f64,

    /// Gap between the null line and each arrow tail, in x-axis units
    pub arrow_inner_offset: f64,

    /// Distance from the null line to each arrow tip, in x-axis units
    pub arrow_outer_offset: f64,

    /// Distance from the null line to each arrow label, in x-axis units
    pub arrow_label_offset: f64,

    /// Square marker area per percentage point of weight, in printer's
    /// points squared (area = scale × weight)
    pub marker_area_per_weight: f64,

    /// Diamond marker area for the combined effect, in points squared
    pub pooled_marker_area: f64,

    /// Height of the caption strip below the chart, in printer's points
    pub caption_strip_pt: f64,

    /// Output PNG path, relative to the working directory
    pub output_path: PathBuf,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            figure_width: 12.0,
            figure_height: 8.0,
            dpi: 300,
            x_range: (0.3, 1.85),
            y_range: (-3.2, 6.5),
            null_effect: 1.0,
            study_column_x: 0.35,
            effect_column_x: 1.35,
            weight_column_x: 1.75,
            arrow_inner_offset: 0.05,
            arrow_outer_offset: 0.50,
            arrow_label_offset: 0.30,
            marker_area_per_weight: 8.0,
            pooled_marker_area: 300.0,
            caption_strip_pt: 40.0,
            output_path: PathBuf::from("forest_plot_v3.png"),
        }
    }
}

impl PlotConfig {
    /// Resolve figure dimensions to raster pixels at the configured DPI.
    ///
    /// 12×8 plot units at 300 DPI → 3600×2400 pixels.
    pub fn resolve_dimensions(&self) -> (u32, u32) {
        let width = (self.figure_width * self.dpi as f64).round() as u32;
        let height = (self.figure_height * self.dpi as f64).round() as u32;
        (width, height)
    }

    /// Caption strip height in pixels at the configured DPI.
    pub fn caption_strip_px(&self) -> u32 {
        crate::forest::style::pt_to_px(self.caption_strip_pt, self.dpi).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dimensions() {
        let config = PlotConfig::default();
        assert_eq!(config.resolve_dimensions(), (3600, 2400));
    }

    #[test]
    fn test_null_line_at_one() {
        // RR = 1 means no effect; the reference line must sit exactly there
        let config = PlotConfig::default();
        assert_eq!(config.null_effect, 1.0);
    }

    #[test]
    fn test_axis_ranges_cover_annotations() {
        let config = PlotConfig::default();
        let (x_min, x_max) = config.x_range;
        let (y_min, y_max) = config.y_range;

        // Arrow tips and labels must stay inside the axis range
        assert!(x_min < config.null_effect - config.arrow_outer_offset);
        assert!(x_max > config.null_effect + config.arrow_outer_offset);
        // Arrow row (-1.5) and label row (-2.0) sit above the lower limit
        assert!(y_min < -2.0);
        assert!(y_max > 6.0);
    }

    #[test]
    fn test_text_columns_ordered() {
        let config = PlotConfig::default();
        assert!(config.study_column_x < config.effect_column_x);
        assert!(config.effect_column_x < config.weight_column_x);
    }
}
