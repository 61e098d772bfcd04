//! Forest Plot Renderer - Main entry point
//!
//! Draws a single static forest plot used to explain how a meta-analysis
//! summary figure is read: per-study point estimates with confidence
//! intervals, a pooled estimate, a null-effect reference line, and
//! directional annotations. All data is fixed illustrative sample data;
//! the program renders once and writes one PNG to the working directory.
//!
//! Module organization:
//! - `forest`: data, geometry, styling, and the plotters renderer
//! - `config`: chart configuration constants

pub mod config;
pub mod forest;

use anyhow::Context;

fn main() {
    println!("Forest Plot Renderer v{}", env!("CARGO_PKG_VERSION"));

    let plot_config = config::PlotConfig::default();

    println!(
        "Rendering {}×{} plot units at {} DPI...",
        plot_config.figure_width, plot_config.figure_height, plot_config.dpi
    );

    match run(&plot_config) {
        Ok(()) => {
            println!(
                "\u{2713} Forest plot saved as '{}'",
                plot_config.output_path.display()
            );
        }
        Err(e) => {
            eprintln!("\u{2717} Failed to render forest plot: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run(plot_config: &config::PlotConfig) -> anyhow::Result<()> {
    forest::render(plot_config)
        .with_context(|| format!("rendering to '{}'", plot_config.output_path.display()))?;
    Ok(())
}
