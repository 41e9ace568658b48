//! Standalone SVG rendering of a comparison [`Chart`] with `plotters`.

use std::fmt;
use std::fs;
use std::path::Path;

use plotters::prelude::*;
use stringency_core::{Chart, ChartLine};
use tracing::debug;

use crate::LoadError;

const CAPTION_FONT: (&str, i32) = ("sans-serif", 22);
const LEGEND_SWATCH: i32 = 24;

/// Line-chart renderer producing a self-contained SVG document.
#[derive(Debug, Clone, Copy)]
pub struct SvgChart {
    width: u32,
    height: u32,
}

impl Default for SvgChart {
    fn default() -> Self {
        Self {
            width: 960,
            height: 600,
        }
    }
}

impl SvgChart {
    /// Create a renderer with a custom canvas size in pixels.
    #[must_use]
    pub fn with_size(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Render `chart` to SVG markup.
    ///
    /// The y axis spans `chart.y_range`; values outside it are clamped.
    /// Each line is drawn at its own stroke width and runs of missing values
    /// break it. Series labels sit in the lower-left corner of the plot area.
    /// A chart without lines renders its title and axes only.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Render`] if plotting fails.
    pub fn render(&self, chart: &Chart) -> Result<String, LoadError> {
        let (y_min, y_max) = y_bounds(chart.y_range);
        let x_max = chart.n_days.saturating_sub(1).max(1) as f64;

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.width, self.height)).into_drawing_area();
            root.fill(&WHITE).map_err(|e| render_error(chart, e))?;

            let mut ctx = ChartBuilder::on(&root)
                .caption(&chart.title, CAPTION_FONT)
                .margin(16)
                .x_label_area_size(48)
                .y_label_area_size(64)
                .build_cartesian_2d(0f64..x_max, y_min..y_max)
                .map_err(|e| render_error(chart, e))?;

            ctx.configure_mesh()
                .x_desc(chart.x_label.as_str())
                .y_desc(chart.y_label.as_str())
                .draw()
                .map_err(|e| render_error(chart, e))?;

            let mut labelled = 0usize;
            for (i, line) in chart.lines.iter().enumerate() {
                let style = Palette99::pick(i).stroke_width(stroke_width(line));
                let mut first = true;
                for segment in segments(line, (y_min, y_max)) {
                    let series = ctx
                        .draw_series(LineSeries::new(segment, style))
                        .map_err(|e| render_error(chart, e))?;
                    if first {
                        series
                            .label(line.label.as_str())
                            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + LEGEND_SWATCH, y)], style));
                        first = false;
                        labelled += 1;
                    }
                }
            }

            if labelled > 0 {
                ctx.configure_series_labels()
                    .position(SeriesLabelPosition::LowerLeft)
                    .background_style(&WHITE.mix(0.8))
                    .border_style(&BLACK)
                    .draw()
                    .map_err(|e| render_error(chart, e))?;
            }

            root.present().map_err(|e| render_error(chart, e))?;
        }
        Ok(svg)
    }

    /// Render `chart` and write it to `path`.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`LoadError::Render`] | Plotting fails |
    /// | [`LoadError::WriteFile`] | The file cannot be written |
    pub fn write(&self, chart: &Chart, path: &Path) -> Result<(), LoadError> {
        let svg = self.render(chart)?;
        fs::write(path, svg).map_err(|e| LoadError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(path = %path.display(), n_lines = chart.lines.len(), "svg rendered");
        Ok(())
    }
}

fn render_error(chart: &Chart, e: impl fmt::Display) -> LoadError {
    LoadError::Render {
        title: chart.title.clone(),
        message: e.to_string(),
    }
}

fn y_bounds((lo, hi): (f64, f64)) -> (f64, f64) {
    if hi > lo { (lo, hi) } else { (lo, lo + 1.0) }
}

fn stroke_width(line: &ChartLine) -> u32 {
    line.width.round().max(1.0) as u32
}

/// Split a line into runs of finite values, clamped into the y range.
fn segments(line: &ChartLine, (lo, hi): (f64, f64)) -> Vec<Vec<(f64, f64)>> {
    let mut runs: Vec<Vec<(f64, f64)>> = Vec::new();
    let mut current = Vec::new();
    for (day, &value) in line.values.iter().enumerate() {
        if value.is_finite() {
            current.push((day as f64, value.clamp(lo, hi)));
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart(lines: Vec<ChartLine>) -> Chart {
        Chart {
            title: "Top-2: Dynamic Time Warping".to_string(),
            x_label: "Days".to_string(),
            y_label: "Stringency".to_string(),
            y_range: (0.0, 100.0),
            n_days: 5,
            lines,
        }
    }

    fn line(label: &str, values: Vec<f64>, emphasized: bool) -> ChartLine {
        ChartLine {
            label: label.to_string(),
            values,
            width: if emphasized { 8.0 } else { 3.0 },
            emphasized,
        }
    }

    #[test]
    fn renders_title_lines_and_legend() {
        let svg = SvgChart::default()
            .render(&chart(vec![
                line("Netherlands", vec![50.0, 60.0, 70.0, 70.0, 70.0], true),
                line("Belgium", vec![20.0, 20.0, 20.0, 25.0, 30.0], false),
            ]))
            .unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("Top-2: Dynamic Time Warping"));
        assert!(svg.contains("Netherlands"));
        assert!(svg.contains("Belgium"));
        assert!(svg.contains("stroke-width=\"8\""));
        assert!(svg.contains("stroke-width=\"3\""));
    }

    #[test]
    fn empty_chart_has_title_and_axes() {
        let svg = SvgChart::default().render(&chart(Vec::new())).unwrap();
        assert!(svg.contains("Top-2: Dynamic Time Warping"));
        assert!(svg.contains("Stringency"));
        assert!(svg.contains("Days"));
    }

    #[test]
    fn gaps_split_the_line() {
        let renderer = SvgChart::default();
        let whole = renderer
            .render(&chart(vec![line("Chile", vec![10.0, 20.0, 30.0, 40.0, 50.0], false)]))
            .unwrap();
        let gappy = renderer
            .render(&chart(vec![line("Chile", vec![10.0, 20.0, f64::NAN, 40.0, 50.0], false)]))
            .unwrap();
        assert_eq!(gappy.matches("<polyline").count(), whole.matches("<polyline").count() + 1);
    }

    #[test]
    fn segments_clamp_and_split() {
        let runs = segments(&line("Chile", vec![150.0, f64::NAN, -5.0, 40.0], false), (0.0, 100.0));
        assert_eq!(runs, vec![vec![(0.0, 100.0)], vec![(2.0, 0.0), (3.0, 40.0)]]);
    }

    #[test]
    fn degenerate_y_range_is_widened() {
        assert_eq!(y_bounds((0.0, 100.0)), (0.0, 100.0));
        assert_eq!(y_bounds((50.0, 50.0)), (50.0, 51.0));
    }

    #[test]
    fn write_creates_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("chart.svg");
        SvgChart::with_size(640, 400).write(&chart(Vec::new()), &path).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("width=\"640\""));
    }
}
