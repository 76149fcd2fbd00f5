//! SVG renderings of a [`ChartResult`].

pub mod geometry;

use contracts::domain::a002_chart::aggregate::{ChartKind, ChartResult};
use leptos::prelude::*;

use geometry::{
    axis_max, axis_ticks, bar_layout, format_number, line_path, line_points, pie_slices,
    truncate_label, Plot, LABEL_MAX_CHARS, VIEW_HEIGHT, VIEW_WIDTH,
};

const Y_TICKS: usize = 5;

fn view_box() -> String {
    format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)
}

fn px(value: f64) -> String {
    format!("{:.2}", value)
}

/// Picks the renderer for the chart's kind.
#[component]
pub fn ChartView(chart: ChartResult) -> impl IntoView {
    match chart.kind {
        ChartKind::Number => view! { <NumberCard value=chart.total() /> }.into_any(),
        ChartKind::Bar => view! { <BarChart chart=chart /> }.into_any(),
        ChartKind::Line => view! { <LineChart chart=chart /> }.into_any(),
        ChartKind::Pie => view! { <PieChart chart=chart /> }.into_any(),
    }
}

#[component]
pub fn NumberCard(value: f64) -> impl IntoView {
    view! {
        <div class="chart-number">
            <span class="chart-number__value">{format_number(value)}</span>
        </div>
    }
}

/// Value axis with grid lines and both axis titles.
fn axes(plot: Plot, max: f64, x_title: String, y_title: String) -> impl IntoView {
    let ticks = axis_ticks(&plot, max, Y_TICKS);
    let x_title_y = px(VIEW_HEIGHT - 8.0);
    let y_title_transform = format!("rotate(-90) translate({} 14)", px(-(plot.top + plot.height / 2.0)));

    view! {
        <g class="chart__axes">
            {ticks
                .into_iter()
                .map(|tick| {
                    view! {
                        <line
                            class="chart__grid"
                            x1=px(plot.left)
                            x2=px(plot.right())
                            y1=px(tick.y)
                            y2=px(tick.y)
                        />
                        <text
                            class="chart__tick"
                            x=px(plot.left - 6.0)
                            y=px(tick.y + 4.0)
                            text-anchor="end"
                        >
                            {tick.label}
                        </text>
                    }
                })
                .collect_view()}
            <line
                class="chart__axis"
                x1=px(plot.left)
                x2=px(plot.right())
                y1=px(plot.bottom())
                y2=px(plot.bottom())
            />
            <text class="chart__title" x=px(plot.left + plot.width / 2.0) y=x_title_y text-anchor="middle">
                {x_title}
            </text>
            <text class="chart__title" transform=y_title_transform text-anchor="middle">
                {y_title}
            </text>
        </g>
    }
}

#[component]
pub fn BarChart(chart: ChartResult) -> impl IntoView {
    let plot = Plot::default();
    let series = chart.series();
    let values: Vec<f64> = series.iter().map(|(_, v)| *v).collect();
    let max = axis_max(&values);
    let bars = bar_layout(&series, &plot);
    let label_y = px(plot.bottom() + 18.0);

    view! {
        <svg class="chart chart--bar" viewBox=view_box() preserveAspectRatio="xMidYMid meet">
            {axes(plot, max, chart.x_axis.clone(), chart.y_axis.clone())}
            {bars
                .into_iter()
                .map(|bar| {
                    let centre = px(bar.x + bar.width / 2.0);
                    view! {
                        <g class="chart__bar">
                            <rect
                                x=px(bar.x)
                                y=px(bar.y)
                                width=px(bar.width)
                                height=px(bar.height)
                                rx="5"
                                fill="#60A5FA"
                                stroke="#3B82F6"
                            />
                            <text class="chart__value" x=centre.clone() y=px(bar.y - 4.0) text-anchor="middle">
                                {format_number(bar.value)}
                            </text>
                            <text class="chart__label" x=centre y=label_y.clone() text-anchor="middle">
                                {truncate_label(&bar.label, LABEL_MAX_CHARS)}
                            </text>
                        </g>
                    }
                })
                .collect_view()}
        </svg>
    }
}

#[component]
pub fn LineChart(chart: ChartResult) -> impl IntoView {
    let plot = Plot::default();
    let series = chart.series();
    let values: Vec<f64> = series.iter().map(|(_, v)| *v).collect();
    let max = axis_max(&values);
    let points = line_points(&series, &plot);
    let path = line_path(&points);
    let label_y = px(plot.bottom() + 18.0);

    view! {
        <svg class="chart chart--line" viewBox=view_box() preserveAspectRatio="xMidYMid meet">
            {axes(plot, max, chart.x_axis.clone(), chart.y_axis.clone())}
            <path d=path fill="none" stroke="#3B82F6" stroke-width="3" />
            {points
                .into_iter()
                .zip(series)
                .map(|(point, (label, value))| {
                    view! {
                        <circle cx=px(point.x) cy=px(point.y) r="4" fill="#60A5FA" stroke="#3B82F6" />
                        <text class="chart__value" x=px(point.x) y=px(point.y - 8.0) text-anchor="middle">
                            {format_number(value)}
                        </text>
                        <text class="chart__label" x=px(point.x) y=label_y.clone() text-anchor="middle">
                            {truncate_label(&label, LABEL_MAX_CHARS)}
                        </text>
                    }
                })
                .collect_view()}
        </svg>
    }
}

#[component]
pub fn PieChart(chart: ChartResult) -> impl IntoView {
    let radius = VIEW_HEIGHT / 2.0 - 16.0;
    let slices = pie_slices(&chart.series(), VIEW_HEIGHT / 2.0, VIEW_HEIGHT / 2.0, radius);
    let legend = slices.clone();

    view! {
        <div class="chart chart--pie">
            <svg viewBox=format!("0 0 {} {}", VIEW_HEIGHT, VIEW_HEIGHT) preserveAspectRatio="xMidYMid meet">
                {slices
                    .into_iter()
                    .map(|slice| {
                        view! { <path d=slice.path fill=slice.color stroke="#FFFFFF" stroke-width="1" /> }
                    })
                    .collect_view()}
            </svg>
            <ul class="chart__legend">
                {legend
                    .into_iter()
                    .map(|slice| {
                        view! {
                            <li>
                                <span class="chart__swatch" style=format!("background:{}", slice.color)></span>
                                {format!(
                                    "{} ({}, {}%)",
                                    truncate_label(&slice.label, 20),
                                    format_number(slice.value),
                                    format_number(slice.fraction * 100.0),
                                )}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
