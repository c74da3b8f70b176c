//! Geometry for the two landing-page charts, rendered as plain SVG.

use crate::types::{CategoryShare, WeeklyVisitors};
use std::f64::consts::PI;

/// Gap between donut slices, in degrees.
pub const DONUT_PADDING_DEG: f64 = 5.0;

#[derive(Clone, Debug, PartialEq)]
pub struct VisitorPoint {
    pub label: String,
    pub week_start: String,
    pub count: i64,
}

/// Label rows `Minggu 1..N` in the order given (the caller fetches ascending).
/// A missing count plots as zero.
pub fn visitor_series(rows: &[WeeklyVisitors]) -> Vec<VisitorPoint> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| VisitorPoint {
            label: format!("Minggu {}", i + 1),
            week_start: row.week_start.clone(),
            count: row.visitor_count.unwrap_or(0),
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for PlotArea {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 280.0,
            padding: 32.0,
        }
    }
}

impl PlotArea {
    pub fn baseline(&self) -> f64 {
        self.height - self.padding
    }

    /// SVG coordinates for each point, x spread evenly and y scaled so the
    /// largest count touches the top padding.
    pub fn plot(&self, points: &[VisitorPoint]) -> Vec<(f64, f64)> {
        let max = points.iter().map(|p| p.count).max().unwrap_or(0).max(0) as f64;
        let inner_w = self.width - 2.0 * self.padding;
        let inner_h = self.height - 2.0 * self.padding;
        let step = if points.len() > 1 {
            inner_w / (points.len() - 1) as f64
        } else {
            0.0
        };
        points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let x = if points.len() > 1 {
                    self.padding + step * i as f64
                } else {
                    self.width / 2.0
                };
                let ratio = if max > 0.0 {
                    p.count.max(0) as f64 / max
                } else {
                    0.0
                };
                (x, self.baseline() - ratio * inner_h)
            })
            .collect()
    }

    /// `points` attribute for an SVG `polyline`.
    pub fn polyline(&self, points: &[VisitorPoint]) -> String {
        self.plot(points)
            .iter()
            .map(|(x, y)| format!("{x:.1},{y:.1}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DonutSegment {
    pub name: String,
    pub color: String,
    pub count: u64,
    /// Whole percent of the total, 0 when there are no products at all.
    pub percent: u64,
    pub start_deg: f64,
    pub end_deg: f64,
}

pub fn total_products(shares: &[CategoryShare]) -> u64 {
    shares.iter().map(|s| s.count).sum()
}

/// Slices clockwise from twelve o'clock. Empty categories keep their legend
/// entry but get a zero-width slice and no padding.
pub fn donut_segments(shares: &[CategoryShare]) -> Vec<DonutSegment> {
    let total = total_products(shares);
    let filled = shares.iter().filter(|s| s.count > 0).count();
    let available = (360.0 - filled as f64 * DONUT_PADDING_DEG).max(0.0);

    let mut cursor = 0.0;
    shares
        .iter()
        .map(|share| {
            let sweep = if total > 0 {
                available * share.count as f64 / total as f64
            } else {
                0.0
            };
            let start = cursor;
            let end = start + sweep;
            if share.count > 0 {
                cursor = end + DONUT_PADDING_DEG;
            }
            DonutSegment {
                name: share.name.clone(),
                color: share.color.clone(),
                count: share.count,
                percent: if total > 0 {
                    (share.count as f64 * 100.0 / total as f64).round() as u64
                } else {
                    0
                },
                start_deg: start,
                end_deg: end,
            }
        })
        .collect()
}

fn polar(cx: f64, cy: f64, radius: f64, degrees: f64) -> (f64, f64) {
    let radians = (degrees - 90.0) * PI / 180.0;
    (cx + radius * radians.cos(), cy + radius * radians.sin())
}

/// Path `d` for a ring slice between `inner` and `outer` radius.
pub fn donut_path(cx: f64, cy: f64, outer: f64, inner: f64, segment: &DonutSegment) -> String {
    let sweep = segment.end_deg - segment.start_deg;
    if sweep <= 0.0 {
        return String::new();
    }
    let large_arc = if sweep > 180.0 { 1 } else { 0 };
    let (ox1, oy1) = polar(cx, cy, outer, segment.start_deg);
    let (ox2, oy2) = polar(cx, cy, outer, segment.end_deg);
    let (ix1, iy1) = polar(cx, cy, inner, segment.end_deg);
    let (ix2, iy2) = polar(cx, cy, inner, segment.start_deg);
    format!(
        "M {ox1:.2} {oy1:.2} A {outer} {outer} 0 {large_arc} 1 {ox2:.2} {oy2:.2} \
         L {ix1:.2} {iy1:.2} A {inner} {inner} 0 {large_arc} 0 {ix2:.2} {iy2:.2} Z"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn week(start: &str, count: Option<i64>) -> WeeklyVisitors {
        WeeklyVisitors {
            id: start.to_string(),
            week_start: start.to_string(),
            visitor_count: count,
        }
    }

    fn share(name: &str, count: u64) -> CategoryShare {
        CategoryShare {
            id: name.to_lowercase(),
            name: name.to_string(),
            color: "#10B981".to_string(),
            count,
        }
    }

    #[test]
    fn weeks_are_labelled_in_order() {
        let series = visitor_series(&[week("2024-05-06", Some(10)), week("2024-05-13", None)]);
        assert_eq!(series[0].label, "Minggu 1");
        assert_eq!(series[1].label, "Minggu 2");
        assert_eq!(series[1].count, 0);
    }

    #[test]
    fn peak_touches_the_top_padding() {
        let area = PlotArea::default();
        let series = visitor_series(&[week("a", Some(50)), week("b", Some(100))]);
        let plotted = area.plot(&series);
        assert_eq!(plotted[1], (area.width - area.padding, area.padding));
        assert_eq!(plotted[0].0, area.padding);
    }

    #[test]
    fn all_zero_counts_sit_on_the_baseline() {
        let area = PlotArea::default();
        let series = visitor_series(&[week("a", Some(0)), week("b", None)]);
        assert!(area.plot(&series).iter().all(|(_, y)| *y == area.baseline()));
    }

    #[test]
    fn segments_leave_padding_between_slices() {
        let segments = donut_segments(&[share("A", 1), share("B", 1), share("C", 0)]);
        assert_eq!(segments[0].start_deg, 0.0);
        assert_eq!(segments[0].end_deg, 175.0);
        assert_eq!(segments[1].start_deg, 180.0);
        assert_eq!(segments[1].end_deg, 355.0);
        assert_eq!(segments[2].end_deg - segments[2].start_deg, 0.0);
        assert_eq!(segments[0].percent, 50);
        assert!(donut_path(100.0, 100.0, 90.0, 50.0, &segments[2]).is_empty());
    }

    #[test]
    fn percentages_are_zero_without_products() {
        let segments = donut_segments(&[share("A", 0)]);
        assert_eq!(segments[0].percent, 0);
    }
}
