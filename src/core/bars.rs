use serde::{Deserialize, Serialize};

use crate::core::scale::YScale;
use crate::error::{ChartError, ChartResult};

/// Deterministic geometry for one bar of a categorical bar chart, in
/// percent-of-span units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    /// Center of the bar's category segment.
    pub x_center: f64,
    pub left: f64,
    pub width: f64,
    pub top: f64,
    pub height: f64,
}

/// Center position of category `index` when `total` bars share the span
/// equally.
#[must_use]
pub fn category_center(index: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let segment = 100.0 / total as f64;
    index as f64 * segment + segment / 2.0
}

/// Projects score values into bar geometry.
///
/// Bars divide the container width equally with a fixed pixel gap between
/// neighbors, so the gap stays hairline-thin at any chart size. Each bar
/// spans from the axis floor up to its score.
pub fn project_bars(
    scores: &[f64],
    y_scale: YScale,
    container_width_px: f64,
    gap_px: f64,
) -> ChartResult<Vec<BarGeometry>> {
    if !container_width_px.is_finite() || container_width_px <= 0.0 {
        return Err(ChartError::InvalidInput(
            "bar container width must be finite and > 0".to_owned(),
        ));
    }
    if !gap_px.is_finite() || gap_px < 0.0 {
        return Err(ChartError::InvalidInput(
            "bar gap must be finite and >= 0".to_owned(),
        ));
    }

    if scores.is_empty() {
        return Ok(Vec::new());
    }

    let total = scores.len();
    let total_gap_px = gap_px * (total - 1) as f64;
    let bar_width_px = (container_width_px - total_gap_px) / total as f64;
    if bar_width_px <= 0.0 {
        return Err(ChartError::InvalidInput(format!(
            "container width {container_width_px}px cannot fit {total} bars with {gap_px}px gaps"
        )));
    }

    let floor = y_scale.value_to_y(y_scale.domain().min);
    let mut bars = Vec::with_capacity(total);
    for (index, score) in scores.iter().enumerate() {
        let top = y_scale.value_to_y(*score);
        let left_px = index as f64 * (bar_width_px + gap_px);
        bars.push(BarGeometry {
            x_center: category_center(index, total),
            left: left_px / container_width_px * 100.0,
            width: bar_width_px / container_width_px * 100.0,
            top,
            height: floor - top,
        });
    }

    Ok(bars)
}
