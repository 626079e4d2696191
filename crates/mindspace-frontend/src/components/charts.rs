//! Hand-rolled SVG chart components.
//!
//! Small enough that no charting dependency is warranted; the portal and the
//! admin analytics tab share these.

use leptos::*;

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 220.0;
const PADDING: f64 = 30.0;

/// Maps values into chart space; values are clamped to `0..=max`.
fn chart_coords(values: &[f64], max: f64) -> Vec<(f64, f64)> {
    let max = if max > 0.0 { max } else { 1.0 };
    let n = values.len();
    let span = CHART_WIDTH - 2.0 * PADDING;
    let step = if n > 1 { span / (n as f64 - 1.0) } else { 0.0 };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = if n > 1 {
                PADDING + step * i as f64
            } else {
                CHART_WIDTH / 2.0
            };
            let clamped = v.clamp(0.0, max);
            let y = PADDING + (1.0 - clamped / max) * (CHART_HEIGHT - 2.0 * PADDING);
            (x, y)
        })
        .collect()
}

fn polyline_points(values: &[f64], max: f64) -> String {
    chart_coords(values, max)
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Single-series line chart with labelled endpoints.
#[component]
pub fn LineChart(
    #[prop(into)] points: Signal<Vec<(String, f64)>>,
    max: f64,
    #[prop(default = "#6366f1")] color: &'static str,
) -> impl IntoView {
    let values = move || points.get().iter().map(|(_, v)| *v).collect::<Vec<f64>>();

    view! {
        <svg class="line-chart" viewBox="0 0 600 220" preserveAspectRatio="none">
            <line
                x1=PADDING
                y1={CHART_HEIGHT - PADDING}
                x2={CHART_WIDTH - PADDING}
                y2={CHART_HEIGHT - PADDING}
                class="chart-axis"
            />
            <polyline
                points=move || polyline_points(&values(), max)
                fill="none"
                stroke=color
                stroke-width="2"
            />
            {move || {
                chart_coords(&values(), max)
                    .into_iter()
                    .map(|(x, y)| view! { <circle cx=x cy=y r="3" fill=color/> })
                    .collect_view()
            }}
            {move || {
                points.get().first().map(|(label, _)| {
                    view! {
                        <text x=PADDING y={CHART_HEIGHT - 8.0} class="chart-label">
                            {label.clone()}
                        </text>
                    }
                })
            }}
            {move || {
                points.get().last().map(|(label, _)| {
                    view! {
                        <text
                            x={CHART_WIDTH - PADDING}
                            y={CHART_HEIGHT - 8.0}
                            text-anchor="end"
                            class="chart-label"
                        >
                            {label.clone()}
                        </text>
                    }
                })
            }}
        </svg>
    }
}

/// One line of a [`TrendChart`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub name: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// Multi-series line chart for the admin analytics tab (static mock data,
/// so the props are plain values).
#[component]
pub fn TrendChart(series: Vec<TrendSeries>, max: f64) -> impl IntoView {
    view! {
        <div class="trend-chart">
            <svg class="line-chart" viewBox="0 0 600 220" preserveAspectRatio="none">
                <line
                    x1=PADDING
                    y1={CHART_HEIGHT - PADDING}
                    x2={CHART_WIDTH - PADDING}
                    y2={CHART_HEIGHT - PADDING}
                    class="chart-axis"
                />
                {series
                    .iter()
                    .map(|s| {
                        view! {
                            <polyline
                                points=polyline_points(&s.values, max)
                                fill="none"
                                stroke=s.color
                                stroke-width="2"
                            />
                        }
                    })
                    .collect_view()}
            </svg>
            <div class="chart-legend">
                {series
                    .iter()
                    .map(|s| {
                        view! {
                            <span class="legend-item">
                                <span class="legend-swatch" style=format!("background: {}", s.color)></span>
                                {s.name}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Horizontal share bar for the risk-distribution panel.
#[component]
pub fn DistributionBar(
    label: &'static str,
    count: u32,
    total: u32,
    color: &'static str,
) -> impl IntoView {
    let percentage = if total > 0 { count * 100 / total } else { 0 };
    view! {
        <div class="dist-bar-row">
            <span class="bar-label">{label}</span>
            <div class="bar-container">
                <div
                    class="bar-fill"
                    style=format!("width: {percentage}%; background: {color}")
                ></div>
            </div>
            <span class="bar-value">{count}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords_span_the_padded_area() {
        let coords = chart_coords(&[0.0, 50.0, 100.0], 100.0);
        assert_eq!(coords.len(), 3);
        assert!((coords[0].0 - PADDING).abs() < 1e-9);
        assert!((coords[2].0 - (CHART_WIDTH - PADDING)).abs() < 1e-9);
        // Max value sits at the top padding, zero at the bottom.
        assert!((coords[2].1 - PADDING).abs() < 1e-9);
        assert!((coords[0].1 - (CHART_HEIGHT - PADDING)).abs() < 1e-9);
    }

    #[test]
    fn single_point_is_centered() {
        let coords = chart_coords(&[10.0], 20.0);
        assert_eq!(coords.len(), 1);
        assert!((coords[0].0 - CHART_WIDTH / 2.0).abs() < 1e-9);
    }

    #[test]
    fn values_above_ceiling_are_clamped() {
        let coords = chart_coords(&[200.0], 100.0);
        assert!((coords[0].1 - PADDING).abs() < 1e-9);
    }

    #[test]
    fn zero_max_does_not_divide_by_zero() {
        let s = polyline_points(&[1.0, 2.0], 0.0);
        assert!(!s.is_empty());
    }
}
