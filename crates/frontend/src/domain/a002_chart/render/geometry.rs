//! Pure layout math for the SVG charts. Coordinates are in viewBox units
//! with the origin at the top left.

use std::f64::consts::PI;

pub const VIEW_WIDTH: f64 = 640.0;
pub const VIEW_HEIGHT: f64 = 360.0;
pub const LABEL_MAX_CHARS: usize = 10;

const PALETTE: [&str; 8] = [
    "#60A5FA", "#F87171", "#34D399", "#FBBF24", "#A78BFA", "#F472B6", "#22D3EE", "#FB923C",
];

/// Drawing area inside the viewBox, leaving room for axis labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plot {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for Plot {
    fn default() -> Self {
        Self {
            left: 56.0,
            top: 16.0,
            width: VIEW_WIDTH - 72.0,
            height: VIEW_HEIGHT - 72.0,
        }
    }
}

impl Plot {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Vertical position of `value` on an axis running from 0 to `max`.
    pub fn y_for(&self, value: f64, max: f64) -> f64 {
        let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
        self.bottom() - ratio * self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub path: String,
    pub color: &'static str,
    pub label: String,
    pub value: f64,
    pub fraction: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub y: f64,
    pub label: String,
}

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Rounded to at most four decimals, without trailing zeros.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded.fract() == 0.0 {
        return format!("{}", rounded as i64);
    }
    let text = format!("{:.4}", rounded);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Cut to `max_chars` characters, the last three replaced by `...`.
pub fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Upper bound of the value axis: the largest value rounded up to 1, 2 or 5
/// times a power of ten. Never below 1.
pub fn axis_max(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10_f64.powi(max.log10().floor() as i32);
    let step = [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .find(|m| m * magnitude >= max)
        .unwrap_or(10.0);
    step * magnitude
}

/// `count + 1` evenly spaced ticks from 0 to `max`.
pub fn axis_ticks(plot: &Plot, max: f64, count: usize) -> Vec<Tick> {
    let count = count.max(1);
    (0..=count)
        .map(|i| {
            let value = max * i as f64 / count as f64;
            Tick {
                y: plot.y_for(value, max),
                label: format_number(value),
            }
        })
        .collect()
}

/// One bar per entry, centred in equal-width slots. Negative values draw
/// as zero-height bars.
pub fn bar_layout(series: &[(String, f64)], plot: &Plot) -> Vec<Bar> {
    if series.is_empty() {
        return Vec::new();
    }
    let values: Vec<f64> = series.iter().map(|(_, v)| *v).collect();
    let max = axis_max(&values);
    let slot = plot.width / series.len() as f64;
    let width = (slot * 0.7).min(40.0);

    series
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            let y = plot.y_for(*value, max);
            Bar {
                x: plot.left + slot * i as f64 + (slot - width) / 2.0,
                y,
                width,
                height: plot.bottom() - y,
                label: label.clone(),
                value: *value,
            }
        })
        .collect()
}

/// Point per entry, at the centre of its slot.
pub fn line_points(series: &[(String, f64)], plot: &Plot) -> Vec<Point> {
    if series.is_empty() {
        return Vec::new();
    }
    let values: Vec<f64> = series.iter().map(|(_, v)| *v).collect();
    let max = axis_max(&values);
    let slot = plot.width / series.len() as f64;

    values
        .iter()
        .enumerate()
        .map(|(i, value)| Point {
            x: plot.left + slot * (i as f64 + 0.5),
            y: plot.y_for(*value, max),
        })
        .collect()
}

pub fn line_path(points: &[Point]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let cmd = if i == 0 { 'M' } else { 'L' };
            format!("{}{:.2},{:.2}", cmd, p.x, p.y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Slices clockwise from twelve o'clock. Entries that are not positive
/// take no share of the pie.
pub fn pie_slices(series: &[(String, f64)], cx: f64, cy: f64, radius: f64) -> Vec<PieSlice> {
    let total: f64 = series.iter().map(|(_, v)| v.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = -PI / 2.0;
    series
        .iter()
        .enumerate()
        .filter(|(_, (_, value))| *value > 0.0)
        .map(|(i, (label, value))| {
            let fraction = value / total;
            let sweep = fraction * 2.0 * PI;
            let path = slice_path(cx, cy, radius, start, sweep);
            start += sweep;
            PieSlice {
                path,
                color: palette_color(i),
                label: label.clone(),
                value: *value,
                fraction,
            }
        })
        .collect()
}

fn slice_path(cx: f64, cy: f64, r: f64, start: f64, sweep: f64) -> String {
    // A single arc cannot close a full circle.
    if sweep >= 2.0 * PI - 1e-9 {
        return format!(
            "M{:.2},{:.2} A{r:.2},{r:.2} 0 1 1 {:.2},{:.2} A{r:.2},{r:.2} 0 1 1 {:.2},{:.2} Z",
            cx,
            cy - r,
            cx,
            cy + r,
            cx,
            cy - r,
        );
    }
    let end = start + sweep;
    let (x1, y1) = (cx + r * start.cos(), cy + r * start.sin());
    let (x2, y2) = (cx + r * end.cos(), cy + r * end.sin());
    let large_arc = if sweep > PI { 1 } else { 0 };
    format!(
        "M{:.2},{:.2} L{:.2},{:.2} A{r:.2},{r:.2} 0 {} 1 {:.2},{:.2} Z",
        cx, cy, x1, y1, large_arc, x2, y2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> Vec<(String, f64)> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("s{}", i), *v))
            .collect()
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(1.23456789), "1.2346");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(-2.5), "-2.5");
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("January", 10), "January");
        assert_eq!(truncate_label("Electronics & Gadgets", 10), "Electro...");
        assert_eq!(truncate_label("Ürünler ve Hizmetler", 10).chars().count(), 10);
    }

    #[test]
    fn test_axis_max() {
        assert_eq!(axis_max(&[]), 1.0);
        assert_eq!(axis_max(&[-3.0]), 1.0);
        assert_eq!(axis_max(&[7.0, 3.0]), 10.0);
        assert_eq!(axis_max(&[120.0]), 200.0);
        assert_eq!(axis_max(&[40.0]), 50.0);
        assert_eq!(axis_max(&[100.0]), 100.0);
    }

    #[test]
    fn test_bar_layout_scales_to_axis() {
        let plot = Plot {
            left: 0.0,
            top: 0.0,
            width: 100.0,
            height: 100.0,
        };
        let bars = bar_layout(&series(&[5.0, 10.0]), &plot);
        assert_eq!(bars.len(), 2);
        assert!((bars[0].height - 50.0).abs() < 1e-9);
        assert!((bars[1].height - 100.0).abs() < 1e-9);
        assert!((bars[1].y - 0.0).abs() < 1e-9);
        assert!(bars[0].x < bars[1].x);
        assert!(bars[0].x + bars[0].width <= 50.0);
    }

    #[test]
    fn test_bar_layout_negative_is_flat() {
        let plot = Plot::default();
        let bars = bar_layout(&series(&[-4.0, 2.0]), &plot);
        assert_eq!(bars[0].height, 0.0);
        assert!(bars[1].height > 0.0);
    }

    #[test]
    fn test_line_points_and_path() {
        let plot = Plot {
            left: 0.0,
            top: 0.0,
            width: 100.0,
            height: 100.0,
        };
        let points = line_points(&series(&[0.0, 10.0]), &plot);
        assert_eq!(points[0], Point { x: 25.0, y: 100.0 });
        assert_eq!(points[1], Point { x: 75.0, y: 0.0 });
        assert_eq!(line_path(&points), "M25.00,100.00 L75.00,0.00");
        assert!(line_path(&[]).is_empty());
    }

    #[test]
    fn test_pie_fractions() {
        let slices = pie_slices(&series(&[1.0, 3.0, 0.0]), 50.0, 50.0, 40.0);
        assert_eq!(slices.len(), 2);
        assert!((slices[0].fraction - 0.25).abs() < 1e-9);
        assert!((slices[1].fraction - 0.75).abs() < 1e-9);
        assert!(slices[0].path.starts_with("M50.00,50.00 L50.00,10.00"));
        assert!(slices[1].path.contains(" 0 1 1 "));
    }

    #[test]
    fn test_pie_single_slice_is_full_circle() {
        let slices = pie_slices(&series(&[4.0]), 50.0, 50.0, 40.0);
        assert_eq!(slices.len(), 1);
        assert_eq!(
            slices[0].path,
            "M50.00,10.00 A40.00,40.00 0 1 1 50.00,90.00 A40.00,40.00 0 1 1 50.00,10.00 Z"
        );
    }

    #[test]
    fn test_pie_empty_when_no_positive_values() {
        assert!(pie_slices(&series(&[0.0, -1.0]), 0.0, 0.0, 1.0).is_empty());
    }

    #[test]
    fn test_axis_ticks() {
        let plot = Plot {
            left: 0.0,
            top: 0.0,
            width: 100.0,
            height: 100.0,
        };
        let ticks = axis_ticks(&plot, 10.0, 2);
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["0", "5", "10"]);
        assert_eq!(ticks[2].y, 0.0);
    }
}
