use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::scale::{BrokenXScale, ContinuousXScale, XScale, YScale};
use crate::core::types::{MetricValue, RawMetric, SeriesEntry, vendor_slug};
use crate::error::ChartResult;
use crate::interaction::{CursorPosition, HoverState, HoverTransition};

use super::axis_furniture::{
    AxisFurniture, build_x_entries_broken, build_x_entries_continuous, build_y_entries,
};
use super::axis_label_format::format_metric;
use super::chart_config::{ChartConfig, XDomainConfig};
use super::hover_resolver::nearest_point_index;

/// Points in the top span of the X range flip their name label to the left
/// so it cannot run off the chart edge.
const LABEL_FLIP_RATIO: f64 = 0.95;

/// Side on which a point's name label should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum LabelSide {
    #[default]
    Right,
    Left,
}

/// One plotted point in normalized coordinates plus its reporting metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedPoint {
    pub vendor: String,
    pub model: String,
    /// Stable style key derived from the vendor display name.
    pub vendor_slug: String,
    pub x_pct: f64,
    /// Display position; includes any visual offset.
    pub y_pct: f64,
    pub metric: MetricValue,
    /// True reported score, never adjusted by visual offsets.
    pub score: f64,
    pub label_side: LabelSide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SkipReason {
    UnparseableMetric,
    NonFinitePosition,
}

/// Row excluded from a layout pass. One bad row never blanks the chart; the
/// rest of the series still renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedPoint {
    pub vendor: String,
    pub model: String,
    pub reason: SkipReason,
}

/// Complete geometric/textual description of one chart render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub points: Vec<PlacedPoint>,
    pub furniture: AxisFurniture,
    pub skipped: Vec<SkippedPoint>,
}

/// Formatted hover content for the highlighted point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightResult {
    /// Index into the layout's `points`.
    pub point: usize,
    pub vendor: String,
    pub model: String,
    pub x_pct: f64,
    pub y_pct: f64,
    pub x_label: String,
    pub y_label: String,
}

/// Layout orchestration for one scatter chart instance.
///
/// Holds the chart's config/data pair and the transient hover highlight;
/// every `layout` call recomputes all derived geometry from scratch. Each
/// chart on a page gets its own engine, so charts never share state.
pub struct ChartLayoutEngine {
    config: ChartConfig,
    data: Vec<SeriesEntry>,
    placed: Vec<PlacedPoint>,
    hover: HoverState,
    highlight: Option<HighlightResult>,
}

impl ChartLayoutEngine {
    /// Builds an engine, rejecting configurations whose axis domains or
    /// break geometry cannot produce a meaningful layout.
    pub fn new(config: ChartConfig, data: Vec<SeriesEntry>) -> ChartResult<Self> {
        Self::build_scales(&config)?;
        Ok(Self {
            config,
            data,
            placed: Vec::new(),
            hover: HoverState::default(),
            highlight: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn data(&self) -> &[SeriesEntry] {
        &self.data
    }

    pub fn set_data(&mut self, data: Vec<SeriesEntry>) {
        self.data = data;
        self.reset_transient_state();
    }

    pub fn set_config(&mut self, config: ChartConfig) -> ChartResult<()> {
        Self::build_scales(&config)?;
        self.config = config;
        self.reset_transient_state();
        Ok(())
    }

    /// Recomputes point placement and axis furniture for the current
    /// config/data pair.
    ///
    /// Misconfigured axes fail loudly here; malformed or off-chart rows are
    /// skipped with a diagnostic while the rest of the series renders.
    pub fn layout(&mut self) -> ChartResult<LayoutResult> {
        let (x_scale, y_scale) = Self::build_scales(&self.config)?;
        let is_currency_axis = self.resolve_currency_axis();

        let resolved: Vec<Option<MetricValue>> = self
            .data
            .iter()
            .map(|entry| entry.metric.as_ref().and_then(|raw| raw.resolve().ok()))
            .collect();

        let max_metric = resolved
            .iter()
            .flatten()
            .map(|metric| metric.raw)
            .filter(|raw| raw.is_finite())
            .fold(f64::NEG_INFINITY, f64::max);
        let flip_threshold = max_metric.is_finite().then(|| max_metric * LABEL_FLIP_RATIO);

        let mut points = Vec::with_capacity(self.data.len());
        let mut skipped = Vec::new();
        for (entry, metric) in self.data.iter().zip(resolved) {
            let Some(metric) = metric else {
                warn!(
                    vendor = %entry.vendor,
                    model = %entry.model,
                    "dropping row with missing or unparseable metric value"
                );
                skipped.push(SkippedPoint {
                    vendor: entry.vendor.clone(),
                    model: entry.model.clone(),
                    reason: SkipReason::UnparseableMetric,
                });
                continue;
            };

            let display_score = match entry.visual_offset {
                Some(offset) if self.config.use_visual_offset => entry.score + offset,
                _ => entry.score,
            };
            let x_pct = x_scale.value_to_x(metric.raw);
            let y_pct = y_scale.value_to_y(display_score);
            if !x_pct.is_finite() || !y_pct.is_finite() {
                warn!(
                    vendor = %entry.vendor,
                    model = %entry.model,
                    x = x_pct,
                    y = y_pct,
                    "dropping row with non-finite position"
                );
                skipped.push(SkippedPoint {
                    vendor: entry.vendor.clone(),
                    model: entry.model.clone(),
                    reason: SkipReason::NonFinitePosition,
                });
                continue;
            }

            let label_side = match flip_threshold {
                Some(threshold) if metric.raw >= threshold => LabelSide::Left,
                _ => LabelSide::Right,
            };
            points.push(PlacedPoint {
                vendor: entry.vendor.clone(),
                model: entry.model.clone(),
                vendor_slug: vendor_slug(&entry.vendor),
                x_pct,
                y_pct,
                metric,
                score: entry.score,
                label_side,
            });
        }

        let furniture = self.build_furniture(y_scale, is_currency_axis)?;

        self.placed = points.clone();
        self.reset_transient_state();

        Ok(LayoutResult {
            points,
            furniture,
            skipped,
        })
    }

    /// Resolves the nearest point under the cursor and returns its formatted
    /// hover content.
    ///
    /// Re-hovering the same nearest point returns the cached content without
    /// re-formatting. Returns `None` before the first layout pass or when no
    /// points are placed.
    pub fn on_hover(&mut self, cursor: CursorPosition) -> Option<&HighlightResult> {
        let index = nearest_point_index(cursor, &self.placed)?;
        if let HoverTransition::Entered(index) = self.hover.on_nearest(index) {
            self.highlight = Some(self.format_highlight(index)?);
        }
        self.highlight.as_ref()
    }

    /// Clears the transient highlight. Idempotent.
    pub fn on_leave(&mut self) {
        self.hover.on_leave();
        self.highlight = None;
    }

    #[must_use]
    pub fn hovered_point(&self) -> Option<usize> {
        self.hover.highlighted()
    }

    fn reset_transient_state(&mut self) {
        self.hover.on_leave();
        self.highlight = None;
    }

    fn build_scales(config: &ChartConfig) -> ChartResult<(XScale, YScale)> {
        let x_scale = match &config.axis_x.domain {
            XDomainConfig::Continuous { domain, .. } => {
                XScale::Continuous(ContinuousXScale::new(*domain)?)
            }
            XDomainConfig::Broken {
                left_zone,
                right_zone,
                break_geometry,
                ..
            } => XScale::Broken(BrokenXScale::new(*left_zone, *right_zone, *break_geometry)?),
        };
        let y_scale = YScale::new(config.axis_y.domain, config.axis_y.inverted)?;
        Ok((x_scale, y_scale))
    }

    fn resolve_currency_axis(&self) -> bool {
        self.config.axis_x.currency.unwrap_or_else(|| {
            self.data.first().is_some_and(|entry| {
                entry
                    .metric
                    .as_ref()
                    .is_some_and(RawMetric::is_currency_encoded)
            })
        })
    }

    fn build_furniture(&self, y_scale: YScale, is_currency_axis: bool) -> ChartResult<AxisFurniture> {
        let axis_x = &self.config.axis_x;
        let (x_entries, break_span) = match &axis_x.domain {
            XDomainConfig::Continuous { domain, grid } => {
                let scale = ContinuousXScale::new(*domain)?;
                let entries = build_x_entries_continuous(
                    scale,
                    grid,
                    is_currency_axis,
                    axis_x.show_units_on_first_and_last,
                    axis_x.static_decimals,
                );
                (entries, None)
            }
            XDomainConfig::Broken {
                left_zone,
                right_zone,
                break_geometry,
                left_grid,
                right_grid,
            } => {
                let scale = BrokenXScale::new(*left_zone, *right_zone, *break_geometry)?;
                let entries = build_x_entries_broken(
                    scale,
                    left_grid,
                    right_grid,
                    is_currency_axis,
                    axis_x.show_units_on_first_and_last,
                    axis_x.static_decimals,
                );
                (
                    entries,
                    Some((
                        break_geometry.left_section_end,
                        break_geometry.right_section_start,
                    )),
                )
            }
        };

        let axis_y = &self.config.axis_y;
        let y_entries = build_y_entries(
            y_scale,
            &axis_y.grid,
            &axis_y.unit,
            axis_y.show_units_on_first_and_last,
            axis_y.static_decimals,
        );

        Ok(AxisFurniture {
            x_entries,
            y_entries,
            break_span,
        })
    }

    fn format_highlight(&self, index: usize) -> Option<HighlightResult> {
        let point = self.placed.get(index)?;
        let x_decimals = usize::from(self.config.axis_x.hover_decimals.for_vendor(&point.vendor));
        let y_decimals = usize::from(self.config.axis_y.hover_decimals.for_vendor(&point.vendor));

        Some(HighlightResult {
            point: index,
            vendor: point.vendor.clone(),
            model: point.model.clone(),
            x_pct: point.x_pct,
            y_pct: point.y_pct,
            x_label: format_metric(
                point.metric.raw,
                x_decimals,
                point.metric.is_currency,
                true,
                "",
            ),
            y_label: format_metric(point.score, y_decimals, false, true, &self.config.axis_y.unit),
        })
    }
}
