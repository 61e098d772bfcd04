//! Row and annotation geometry
//!
//! Pure coordinate bookkeeping, kept apart from the drawing code so the
//! structural properties of the chart (row order, arrow symmetry, where the
//! separator sits) can be tested without a rendering backend.
//!
//! Rows use a numeric y coordinate: studies occupy rows n..1 from top to
//! bottom, the header row sits at n+1, and everything below row 0 is
//! annotation space (combined effect, arrows, arrow labels).

use crate::config::PlotConfig;

/// Vertical placement of every row in the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout {
    /// One y position per study, in display order (top to bottom)
    pub study_rows: Vec<f64>,
    /// Bold column-header row above the studies
    pub header_row: f64,
    /// Thin separator line between the studies and the combined effect
    pub separator_row: f64,
    /// Combined-effect row
    pub pooled_row: f64,
    /// Directional arrows row
    pub arrow_row: f64,
    /// Arrow label row (text anchored below this y)
    pub arrow_label_row: f64,
}

impl RowLayout {
    /// Lay out rows for `n_studies` studies.
    pub fn for_studies(n_studies: usize) -> Self {
        let study_rows = (1..=n_studies).rev().map(|row| row as f64).collect();
        Self {
            study_rows,
            header_row: n_studies as f64 + 1.0,
            separator_row: 0.25,
            pooled_row: -0.5,
            arrow_row: -1.5,
            arrow_label_row: -2.0,
        }
    }
}

/// A horizontal arrow from `tail` to `tip` at a fixed row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowSpan {
    pub tail: f64,
    pub tip: f64,
}

impl ArrowSpan {
    /// True if the arrow points toward smaller x values.
    pub fn points_left(&self) -> bool {
        self.tip < self.tail
    }
}

/// The two outward arrows straddling the null line.
///
/// Both spans use the same offsets, so tails and tips are symmetric
/// around `null_effect` by construction.
pub fn arrow_spans(config: &PlotConfig) -> (ArrowSpan, ArrowSpan) {
    let null = config.null_effect;
    let favors_intervention = ArrowSpan {
        tail: null - config.arrow_inner_offset,
        tip: null - config.arrow_outer_offset,
    };
    let favors_control = ArrowSpan {
        tail: null + config.arrow_inner_offset,
        tip: null + config.arrow_outer_offset,
    };
    (favors_intervention, favors_control)
}

/// X centers of the two arrow labels, symmetric around the null line.
pub fn arrow_label_centers(config: &PlotConfig) -> (f64, f64) {
    (
        config.null_effect - config.arrow_label_offset,
        config.null_effect + config.arrow_label_offset,
    )
}

/// Separator line span: inset 5% from each end of the x axis.
pub fn separator_span(config: &PlotConfig) -> (f64, f64) {
    let (x_min, x_max) = config.x_range;
    let width = x_max - x_min;
    (x_min + 0.05 * width, x_max - 0.05 * width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_study_rows_descend() {
        let layout = RowLayout::for_studies(5);
        assert_eq!(layout.study_rows, vec![5.0, 4.0, 3.0, 2.0, 1.0]);
        assert_eq!(layout.header_row, 6.0);
    }

    #[test]
    fn test_rows_ordered_top_to_bottom() {
        let layout = RowLayout::for_studies(5);
        // header > studies > separator > pooled > arrows > labels
        assert!(layout.header_row > layout.study_rows[0]);
        assert!(*layout.study_rows.last().unwrap() > layout.separator_row);
        assert!(layout.separator_row > layout.pooled_row);
        assert!(layout.pooled_row > layout.arrow_row);
        assert!(layout.arrow_row > layout.arrow_label_row);
    }

    #[test]
    fn test_arrows_symmetric_around_null() {
        let config = PlotConfig::default();
        let (left, right) = arrow_spans(&config);

        assert!(left.points_left());
        assert!(!right.points_left());

        // Offsets 0.05 and 0.50 on both sides of x = 1
        let null = config.null_effect;
        assert!((null - left.tail - (right.tail - null)).abs() < 1e-12);
        assert!((null - left.tip - (right.tip - null)).abs() < 1e-12);
        assert!((null - left.tail - 0.05).abs() < 1e-12);
        assert!((null - left.tip - 0.50).abs() < 1e-12);
    }

    #[test]
    fn test_arrow_labels_symmetric() {
        let config = PlotConfig::default();
        let (left_x, right_x) = arrow_label_centers(&config);
        let null = config.null_effect;
        assert!((null - left_x - (right_x - null)).abs() < 1e-12);
    }

    #[test]
    fn test_separator_inside_axis() {
        let config = PlotConfig::default();
        let (start, end) = separator_span(&config);
        let (x_min, x_max) = config.x_range;
        assert!(x_min < start && start < end && end < x_max);
    }
}
