use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::bars::{BarGeometry, project_bars};
use crate::core::grid::GridEntry;
use crate::core::scale::YScale;
use crate::core::types::{SeriesEntry, vendor_slug};
use crate::error::ChartResult;

use super::axis_furniture::build_y_entries;
use super::axis_label_format::format_metric;
use super::chart_config::AxisYConfig;

fn default_bar_gap_px() -> f64 {
    1.0
}

/// Declarative description of one categorical bar chart. The X axis is the
/// category sequence itself, so only the Y axis carries a domain and grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartConfig {
    pub axis_y: AxisYConfig,
    /// Fixed pixel gap between neighboring bars.
    #[serde(default = "default_bar_gap_px")]
    pub bar_gap_px: f64,
}

impl BarChartConfig {
    #[must_use]
    pub fn new(axis_y: AxisYConfig) -> Self {
        Self {
            axis_y,
            bar_gap_px: default_bar_gap_px(),
        }
    }
}

/// One bar with its geometry and the score label anchored above it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedBar {
    pub vendor: String,
    pub model: String,
    pub vendor_slug: String,
    pub geometry: BarGeometry,
    pub score: f64,
    pub score_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarLayoutResult {
    pub bars: Vec<PlacedBar>,
    pub y_entries: Vec<GridEntry>,
}

/// Layout orchestration for one bar chart instance.
///
/// Bar width depends on the rendered container width (the inter-bar gap is
/// fixed in pixels), so the width is an input to each layout pass rather
/// than part of the configuration.
pub struct BarChartLayoutEngine {
    config: BarChartConfig,
    data: Vec<SeriesEntry>,
}

impl BarChartLayoutEngine {
    pub fn new(config: BarChartConfig, data: Vec<SeriesEntry>) -> ChartResult<Self> {
        YScale::new(config.axis_y.domain, config.axis_y.inverted)?;
        Ok(Self { config, data })
    }

    #[must_use]
    pub fn config(&self) -> &BarChartConfig {
        &self.config
    }

    pub fn set_data(&mut self, data: Vec<SeriesEntry>) {
        self.data = data;
    }

    pub fn layout(&self, container_width_px: f64) -> ChartResult<BarLayoutResult> {
        let axis_y = &self.config.axis_y;
        let y_scale = YScale::new(axis_y.domain, axis_y.inverted)?;

        let rows: Vec<&SeriesEntry> = self
            .data
            .iter()
            .filter(|entry| {
                if entry.score.is_finite() {
                    return true;
                }
                warn!(
                    vendor = %entry.vendor,
                    model = %entry.model,
                    "dropping bar with non-finite score"
                );
                false
            })
            .collect();

        let scores: Vec<f64> = rows.iter().map(|entry| entry.score).collect();
        let geometry = project_bars(&scores, y_scale, container_width_px, self.config.bar_gap_px)?;

        let score_decimals = usize::from(axis_y.static_decimals.unwrap_or(1));
        let bars = rows
            .into_iter()
            .zip(geometry)
            .map(|(entry, geometry)| PlacedBar {
                vendor: entry.vendor.clone(),
                model: entry.model.clone(),
                vendor_slug: vendor_slug(&entry.vendor),
                geometry,
                score: entry.score,
                score_label: format_metric(entry.score, score_decimals, false, false, ""),
            })
            .collect();

        let y_entries = build_y_entries(
            y_scale,
            &axis_y.grid,
            &axis_y.unit,
            axis_y.show_units_on_first_and_last,
            axis_y.label_decimals.or(axis_y.static_decimals),
        );

        Ok(BarLayoutResult { bars, y_entries })
    }
}
