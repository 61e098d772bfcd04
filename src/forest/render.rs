//! Forest plot renderer
//!
//! Maps the fixed study records, the row layout, and the style constants to
//! plotters primitives on a bitmap backend and writes the PNG. Pixel-sized
//! glyphs (markers, arrow heads) are composed onto data coordinates with
//! element composition, so the chart scales with the configured DPI.

use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontStyle;

use super::data::{self, StudyRecord};
use super::error::Result;
use super::layout::{self, ArrowSpan, RowLayout};
use super::style;
use crate::config::PlotConfig;

type ForestChart<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

const TITLE: &str = "Forest Plot: Visual Interpretation of a Meta-analysis";
const X_AXIS_LABEL: &str = "Risk Ratio (RR)";
const CAPTION: &str = "\u{25A0} Square: point estimate (size \u{221D} weight)   \u{2502}   \
                       \u{2500}\u{2500} Line: 95% confidence interval   \u{2502}   \
                       \u{25C6} Diamond: combined effect   \u{2502}   \
                       \u{2506} Dashed: null line (RR = 1)";

/// Render the illustrative forest plot described by `config`.
pub fn render(config: &PlotConfig) -> Result<()> {
    let studies = data::sample_studies();
    let pooled = data::pooled_record();
    render_to_file(config, &studies, &pooled)
}

/// Render `studies` and the `pooled` record to `config.output_path`.
pub fn render_to_file(
    config: &PlotConfig,
    studies: &[StudyRecord],
    pooled: &StudyRecord,
) -> Result<()> {
    let (width, height) = config.resolve_dimensions();
    let dpi = config.dpi;
    let px = |pt: f64| style::pt_to_px(pt, dpi);

    let root = BitMapBackend::new(&config.output_path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;

    // Title strip on top, caption strip on the bottom, chart in between
    let title_px = px(30.0).round() as i32;
    let (title_area, rest) = root.split_vertically(title_px);
    let (_, rest_height) = rest.dim_in_pixel();
    let chart_height = (rest_height as i32 - config.caption_strip_px() as i32).max(0);
    let (chart_area, caption_area) = rest.split_vertically(chart_height);

    draw_title(&title_area, px(13.0))?;

    let layout = RowLayout::for_studies(studies.len());
    let (x_min, x_max) = config.x_range;
    let (y_min, y_max) = config.y_range;

    let mut chart = ChartBuilder::on(&chart_area)
        .margin(px(10.0).round() as i32)
        .x_label_area_size(px(30.0).round() as i32)
        .y_label_area_size(0)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    // X axis only: no grid, no y ticks, no y spine
    chart
        .configure_mesh()
        .disable_mesh()
        .disable_y_axis()
        .axis_style(BLACK.stroke_width(px(0.8).round() as u32))
        .x_desc(X_AXIS_LABEL)
        .axis_desc_style(sans_serif(px(11.0)))
        .label_style(sans_serif(px(9.0)))
        .x_label_formatter(&|x| format!("{:.2}", x))
        .draw()?;

    draw_null_line(&mut chart, config, px(1.0))?;
    draw_study_rows(&mut chart, config, studies, &layout)?;
    draw_pooled_row(&mut chart, config, pooled, &layout)?;
    draw_separator(&mut chart, config, &layout, px(0.5))?;
    draw_text_columns(&mut chart, config, studies, pooled, &layout, px(10.0), px(9.0))?;
    draw_arrows(&mut chart, config, &layout, 1.5, px(9.0))?;
    draw_caption(&caption_area, px(8.0))?;

    root.present()?;
    Ok(())
}

fn sans_serif(size_px: f64) -> TextStyle<'static> {
    TextStyle::from(("sans-serif", size_px).into_font()).color(&BLACK)
}

fn draw_title(area: &DrawingArea<BitMapBackend, Shift>, size_px: f64) -> Result<()> {
    let (_, h) = area.dim_in_pixel();
    let style = TextStyle::from(("sans-serif", size_px).into_font().style(FontStyle::Bold))
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));
    area.draw(&Text::new(TITLE, (h as i32 / 2, h as i32 / 2), style))?;
    Ok(())
}

/// Dashed vertical reference line at RR = 1 (no effect).
fn draw_null_line(chart: &mut ForestChart, config: &PlotConfig, line_px: f64) -> Result<()> {
    let (y_min, y_max) = config.y_range;
    chart.draw_series(DashedLineSeries::new(
        vec![(config.null_effect, y_min), (config.null_effect, y_max)],
        18,
        14,
        style::NEUTRAL_GRAY.stroke_width(line_px.round() as u32),
    ))?;
    Ok(())
}

/// CI segment plus weight-sized square marker for each study row.
fn draw_study_rows(
    chart: &mut ForestChart,
    config: &PlotConfig,
    studies: &[StudyRecord],
    layout: &RowLayout,
) -> Result<()> {
    let ci_stroke = style::pt_to_px(2.0, config.dpi).round() as u32;
    let edge_stroke = style::pt_to_px(0.5, config.dpi).round().max(1.0) as u32;

    for (study, &row) in studies.iter().zip(layout.study_rows.iter()) {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(study.ci_low, row), (study.ci_high, row)],
            style::INTERVENTION_BLUE.stroke_width(ci_stroke),
        )))?;

        let half =
            style::square_half_side_px(study.weight_percent, config.marker_area_per_weight, config.dpi);
        chart.draw_series(std::iter::once(
            EmptyElement::at((study.effect, row))
                + Rectangle::new(
                    [(-half, -half), (half, half)],
                    style::INTERVENTION_BLUE.filled(),
                )
                + Rectangle::new(
                    [(-half, -half), (half, half)],
                    WHITE.stroke_width(edge_stroke),
                ),
        ))?;
    }
    Ok(())
}

/// Combined-effect row: heavier CI segment and a diamond marker.
fn draw_pooled_row(
    chart: &mut ForestChart,
    config: &PlotConfig,
    pooled: &StudyRecord,
    layout: &RowLayout,
) -> Result<()> {
    let row = layout.pooled_row;
    let ci_stroke = style::pt_to_px(2.5, config.dpi).round() as u32;
    let edge_stroke = style::pt_to_px(1.0, config.dpi).round() as u32;

    chart.draw_series(std::iter::once(PathElement::new(
        vec![(pooled.ci_low, row), (pooled.ci_high, row)],
        style::CONTROL_RED.stroke_width(ci_stroke),
    )))?;

    let half = style::diamond_half_diag_px(config.pooled_marker_area, config.dpi);
    let diamond = vec![(0, -half), (half, 0), (0, half), (-half, 0)];
    chart.draw_series(std::iter::once(
        EmptyElement::at((pooled.effect, row))
            + Polygon::new(diamond.clone(), style::CONTROL_RED.filled())
            + PathElement::new(
                vec![(0, -half), (half, 0), (0, half), (-half, 0), (0, -half)],
                WHITE.stroke_width(edge_stroke),
            ),
    ))?;
    Ok(())
}

/// Thin separator line between the study rows and the combined effect.
fn draw_separator(
    chart: &mut ForestChart,
    config: &PlotConfig,
    layout: &RowLayout,
    line_px: f64,
) -> Result<()> {
    let (start, end) = layout::separator_span(config);
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(start, layout.separator_row), (end, layout.separator_row)],
        style::NEUTRAL_GRAY.stroke_width(line_px.round().max(1.0) as u32),
    )))?;
    Ok(())
}

/// Three text columns (study, effect [CI], weight) plus the header row.
fn draw_text_columns(
    chart: &mut ForestChart,
    config: &PlotConfig,
    studies: &[StudyRecord],
    pooled: &StudyRecord,
    layout: &RowLayout,
    name_px: f64,
    value_px: f64,
) -> Result<()> {
    let right = Pos::new(HPos::Right, VPos::Center);
    let left = Pos::new(HPos::Left, VPos::Center);
    let center = Pos::new(HPos::Center, VPos::Center);

    let name_style = sans_serif(name_px).pos(right);
    let mono_style = TextStyle::from(("monospace", value_px).into_font())
        .color(&BLACK)
        .pos(left);
    let weight_style = sans_serif(value_px).pos(center);

    for (study, &row) in studies.iter().zip(layout.study_rows.iter()) {
        chart.draw_series(std::iter::once(Text::new(
            study.name.to_string(),
            (config.study_column_x, row),
            name_style.clone(),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            study.effect_label(),
            (config.effect_column_x, row),
            mono_style.clone(),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
            study.weight_label(),
            (config.weight_column_x, row),
            weight_style.clone(),
        )))?;
    }

    // Combined-effect row in bold
    let bold_name = bold_sans_serif(name_px).pos(right);
    let bold_mono = TextStyle::from(
        ("monospace", value_px)
            .into_font()
            .style(FontStyle::Bold),
    )
    .color(&BLACK)
    .pos(left);
    let bold_weight = bold_sans_serif(value_px).pos(center);

    let row = layout.pooled_row;
    chart.draw_series(std::iter::once(Text::new(
        pooled.name.to_string(),
        (config.study_column_x, row),
        bold_name.clone(),
    )))?;
    chart.draw_series(std::iter::once(Text::new(
        pooled.effect_label(),
        (config.effect_column_x, row),
        bold_mono,
    )))?;
    chart.draw_series(std::iter::once(Text::new(
        pooled.weight_label(),
        (config.weight_column_x, row),
        bold_weight.clone(),
    )))?;

    // Bold column headers above the studies
    let header = layout.header_row;
    chart.draw_series(std::iter::once(Text::new(
        "Study".to_string(),
        (config.study_column_x, header),
        bold_name,
    )))?;
    chart.draw_series(std::iter::once(Text::new(
        "RR [95% CI]".to_string(),
        (config.effect_column_x, header),
        bold_sans_serif(name_px).pos(left),
    )))?;
    chart.draw_series(std::iter::once(Text::new(
        "Weight".to_string(),
        (config.weight_column_x, header),
        bold_weight,
    )))?;
    Ok(())
}

fn bold_sans_serif(size_px: f64) -> TextStyle<'static> {
    TextStyle::from(("sans-serif", size_px).into_font().style(FontStyle::Bold)).color(&BLACK)
}

/// Outward arrows straddling the null line with their two-line labels.
fn draw_arrows(
    chart: &mut ForestChart,
    config: &PlotConfig,
    layout: &RowLayout,
    line_pt: f64,
    label_px: f64,
) -> Result<()> {
    let (favors_intervention, favors_control) = layout::arrow_spans(config);
    let stroke = style::pt_to_px(line_pt, config.dpi).round() as u32;

    draw_arrow(
        chart,
        favors_intervention,
        layout.arrow_row,
        style::INTERVENTION_BLUE,
        stroke,
    )?;
    draw_arrow(
        chart,
        favors_control,
        layout.arrow_row,
        style::CONTROL_RED,
        stroke,
    )?;

    let (left_x, right_x) = layout::arrow_label_centers(config);
    draw_arrow_label(
        chart,
        ["Favors", "intervention"],
        (left_x, layout.arrow_label_row),
        style::INTERVENTION_BLUE,
        label_px,
    )?;
    draw_arrow_label(
        chart,
        ["Favors", "control"],
        (right_x, layout.arrow_label_row),
        style::CONTROL_RED,
        label_px,
    )?;
    Ok(())
}

fn draw_arrow(
    chart: &mut ForestChart,
    span: ArrowSpan,
    row: f64,
    color: RGBColor,
    stroke: u32,
) -> Result<()> {
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(span.tail, row), (span.tip, row)],
        color.stroke_width(stroke),
    )))?;

    // Filled triangular head at the tip, in pixel offsets
    let head_len = (3 * stroke) as i32;
    let head_half = (2 * stroke) as i32;
    let back = if span.points_left() { head_len } else { -head_len };
    chart.draw_series(std::iter::once(
        EmptyElement::at((span.tip, row))
            + Polygon::new(
                vec![(0, 0), (back, -head_half), (back, head_half)],
                color.filled(),
            ),
    ))?;
    Ok(())
}

fn draw_arrow_label(
    chart: &mut ForestChart,
    lines: [&str; 2],
    anchor: (f64, f64),
    color: RGBColor,
    size_px: f64,
) -> Result<()> {
    let style = TextStyle::from(("sans-serif", size_px).into_font().style(FontStyle::Bold))
        .color(&color)
        .pos(Pos::new(HPos::Center, VPos::Top));
    let line_height = (size_px * 1.2).round() as i32;

    chart.draw_series(std::iter::once(
        EmptyElement::at(anchor)
            + Text::new(lines[0].to_string(), (0, 0), style.clone())
            + Text::new(lines[1].to_string(), (0, line_height), style),
    ))?;
    Ok(())
}

/// Caption strip below the chart: a boxed one-line legend in gray.
fn draw_caption(area: &DrawingArea<BitMapBackend, Shift>, size_px: f64) -> Result<()> {
    let (w, h) = area.dim_in_pixel();
    let inset = (h / 8) as i32;
    let box_coords = [(inset, inset), (w as i32 - inset, h as i32 - inset)];

    area.draw(&Rectangle::new(box_coords, style::CAPTION_FILL.filled()))?;
    area.draw(&Rectangle::new(box_coords, style::CAPTION_BORDER.stroke_width(2)))?;

    let style = TextStyle::from(("sans-serif", size_px).into_font())
        .color(&style::NEUTRAL_GRAY)
        .pos(Pos::new(HPos::Center, VPos::Center));
    area.draw(&Text::new(CAPTION, (w as i32 / 2, h as i32 / 2), style))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_writes_nonzero_png() {
        let mut config = PlotConfig::default();
        config.output_path = std::env::temp_dir().join("forest_plot_render_test.png");

        render(&config).expect("render failed");

        let meta = std::fs::metadata(&config.output_path).expect("output file missing");
        assert!(meta.len() > 0, "output PNG is empty");

        std::fs::remove_file(&config.output_path).ok();
    }
}
