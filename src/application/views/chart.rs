//! Chart-ready daily click series and its SVG layout.

use crate::domain::entities::DailyClicks;

pub const CHART_TITLE: &str = "Daily Clicks (Last 30 Days)";

const MAX_X_LABELS: usize = 8;
const MARGIN_LEFT: f64 = 40.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 32.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesPoint {
    pub label: String,
    pub clicks: u64,
}

/// Daily clicks as labelled points, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSeries {
    pub title: &'static str,
    pub points: Vec<SeriesPoint>,
}

impl ChartSeries {
    pub fn from_daily(daily: &[DailyClicks]) -> Self {
        Self {
            title: CHART_TITLE,
            points: daily
                .iter()
                .map(|day| SeriesPoint {
                    label: day.date.format("%Y-%m-%d").to_string(),
                    clicks: day.clicks,
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn max_clicks(&self) -> u64 {
        self.points.iter().map(|p| p.clicks).max().unwrap_or(0)
    }

    /// Zero-based integer ticks for the y axis.
    ///
    /// At most six ticks; the last one is at or above the largest value.
    pub fn y_ticks(&self) -> Vec<u64> {
        let max = self.max_clicks();
        let step = max.div_ceil(5).max(1);
        let top = max.div_ceil(step).max(1) * step;
        (0..=top).step_by(step as usize).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub clicks: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: u64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub x: f64,
    pub text: String,
}

/// SVG coordinates for a [`ChartSeries`] drawn into a `width` x `height` box.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub width: u32,
    pub height: u32,
    pub plot_left: f64,
    pub plot_right: f64,
    pub plot_top: f64,
    pub plot_bottom: f64,
    pub points: Vec<PlotPoint>,
    pub y_ticks: Vec<AxisTick>,
    pub x_labels: Vec<AxisLabel>,
    /// `points` attribute of the SVG polyline.
    pub polyline: String,
}

impl ChartGeometry {
    pub fn layout(series: &ChartSeries, width: u32, height: u32) -> Self {
        let plot_left = MARGIN_LEFT;
        let plot_right = (f64::from(width) - MARGIN_RIGHT).max(plot_left + 1.0);
        let plot_top = MARGIN_TOP;
        let plot_bottom = (f64::from(height) - MARGIN_BOTTOM).max(plot_top + 1.0);
        let plot_width = plot_right - plot_left;
        let plot_height = plot_bottom - plot_top;

        let ticks = series.y_ticks();
        let top_value = ticks.last().copied().unwrap_or(1).max(1) as f64;
        let y_for = |value: u64| round1(plot_bottom - plot_height * value as f64 / top_value);

        let count = series.points.len();
        let x_for = |index: usize| {
            if count <= 1 {
                round1(plot_left + plot_width / 2.0)
            } else {
                round1(plot_left + plot_width * index as f64 / (count - 1) as f64)
            }
        };

        let points: Vec<PlotPoint> = series
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| PlotPoint {
                x: x_for(i),
                y: y_for(p.clicks),
                label: p.label.clone(),
                clicks: p.clicks,
            })
            .collect();

        let label_step = count.div_ceil(MAX_X_LABELS).max(1);
        let x_labels = points
            .iter()
            .step_by(label_step)
            .map(|p| AxisLabel {
                x: p.x,
                text: p.label.clone(),
            })
            .collect();

        let y_ticks = ticks
            .into_iter()
            .map(|value| AxisTick {
                value,
                y: y_for(value),
            })
            .collect();

        let polyline = points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            width,
            height,
            plot_left,
            plot_right,
            plot_top,
            plot_bottom,
            points,
            y_ticks,
            x_labels,
            polyline,
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn daily(clicks: &[u64]) -> Vec<DailyClicks> {
        let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        clicks
            .iter()
            .enumerate()
            .map(|(i, &clicks)| DailyClicks {
                date: start + chrono::Days::new(i as u64),
                clicks,
            })
            .collect()
    }

    #[test]
    fn test_series_labels_and_title() {
        let series = ChartSeries::from_daily(&daily(&[4, 3]));
        assert_eq!(series.title, "Daily Clicks (Last 30 Days)");
        assert_eq!(series.points[0].label, "2026-03-01");
        assert_eq!(series.points[1].label, "2026-03-02");
        assert_eq!(series.max_clicks(), 4);
    }

    #[test]
    fn test_empty_series_has_no_points() {
        let series = ChartSeries::from_daily(&[]);
        assert!(series.is_empty());
        assert_eq!(series.y_ticks(), vec![0, 1]);

        let geometry = ChartGeometry::layout(&series, 640, 240);
        assert!(geometry.points.is_empty());
        assert!(geometry.x_labels.is_empty());
        assert!(geometry.polyline.is_empty());
    }

    #[test]
    fn test_y_ticks_are_zero_based_integers() {
        let series = ChartSeries::from_daily(&daily(&[7, 1]));
        assert_eq!(series.y_ticks(), vec![0, 2, 4, 6, 8]);

        let series = ChartSeries::from_daily(&daily(&[5]));
        assert_eq!(series.y_ticks(), vec![0, 1, 2, 3, 4, 5]);

        let series = ChartSeries::from_daily(&daily(&[120]));
        assert_eq!(series.y_ticks(), vec![0, 24, 48, 72, 96, 120]);
    }

    #[test]
    fn test_layout_maps_extremes_to_plot_edges() {
        let series = ChartSeries::from_daily(&daily(&[0, 5, 10]));
        let geometry = ChartGeometry::layout(&series, 456, 248);

        assert_eq!(geometry.points[0].x, 40.0);
        assert_eq!(geometry.points[2].x, 440.0);
        assert_eq!(geometry.points[0].y, 216.0);
        assert_eq!(geometry.points[2].y, 16.0);
        assert_eq!(geometry.polyline, "40,216 240,116 440,16");
        assert_eq!(geometry.y_ticks.first().map(|t| t.y), Some(216.0));
    }

    #[test]
    fn test_x_labels_are_thinned() {
        let series = ChartSeries::from_daily(&daily(&[1; 30]));
        let geometry = ChartGeometry::layout(&series, 640, 240);
        assert_eq!(geometry.points.len(), 30);
        assert!(geometry.x_labels.len() <= MAX_X_LABELS);
        assert_eq!(geometry.x_labels[0].text, "2026-03-01");
    }
}
