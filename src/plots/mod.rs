//! Scatter-plot rendering for correlation reports.
//!
//! Construction and rendering are decoupled: [`CorrelationReport`] holds the
//! transformed pairs and the fitted model, and this module turns them into a
//! Plotly figure. Writing the figure to a file or opening it in a browser is
//! the caller's choice.

use plotly::common::{Mode, Title};
use plotly::layout::{Annotation, Axis, Layout};
use plotly::{Plot, Scatter};

use crate::tools::correlation::CorrelationReport;

/// Adds a straight-line trace between two points.
pub fn add_fitted_line(
    plot: &mut Plot,
    x: (f64, f64),
    y: (f64, f64),
    label: impl AsRef<str>,
) {
    let trace = Scatter::new(vec![x.0, x.1], vec![y.0, y.1])
        .name(label)
        .mode(Mode::Lines);
    plot.add_trace(trace);
}

impl CorrelationReport {
    /// Renders the scatter plot with the fitted regression line and the
    /// adjusted-R² annotation.
    pub fn render(&self) -> Plot {
        let mut plot = Plot::new();

        let scatter = Scatter::new(self.x().to_vec(), self.y().to_vec())
            .name("observations")
            .mode(Mode::Markers);
        plot.add_trace(scatter);

        let x_min = self
            .x()
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        let x_max = self
            .x()
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        add_fitted_line(
            &mut plot,
            (x_min, x_max),
            (self.stats().predict(x_min), self.stats().predict(x_max)),
            "fitted",
        );

        let layout = Layout::new()
            .title(Title::with_text(format!(
                "{} vs {}",
                self.response_name(),
                self.predictor_name()
            )))
            .x_axis(Axis::new().title(Title::with_text(format!(
                "log1p({})",
                self.predictor_name()
            ))))
            .y_axis(Axis::new().title(Title::with_text(format!(
                "log1p({})",
                self.response_name()
            ))))
            .annotations(vec![Annotation::new()
                .text(self.annotation())
                .x_ref("paper")
                .y_ref("paper")
                .x(0.05)
                .y(0.95)
                .show_arrow(false)]);
        plot.set_layout(layout);

        plot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structs::table::CountTable;

    #[test]
    fn rendered_plot_carries_annotation_and_line() {
        let table = CountTable::from_columns(vec![
            ("a", vec![0.0, 1.0, 3.0]),
            ("b", vec![1.0, 1.0, 7.0]),
        ])
        .unwrap();
        let report = CorrelationReport::build(&table, "a", "b").unwrap();
        let plot = report.render();

        let json = plot.to_json();
        assert!(json.contains("adj. R^2 = 0.5000"));
        assert!(json.contains("markers"));
        assert!(json.contains("lines"));
        assert!(json.contains("log1p(b)"));
    }
}
