use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::grid::{self, GridEntry, GridSpec};
use crate::core::scale::{BrokenXScale, ContinuousXScale, YScale};

use super::axis_label_format::format_metric;

/// Static tick/gridline/label description of both axes of one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisFurniture {
    /// X entries ordered by position. On a broken axis this covers both
    /// zones plus the label-only breakpoint entry beside the gap.
    pub x_entries: Vec<GridEntry>,
    pub y_entries: Vec<GridEntry>,
    /// Percent span of the visual gap when the X axis is broken.
    pub break_span: Option<(f64, f64)>,
}

type LabeledValues = SmallVec<[f64; 8]>;

fn resolve_decimals(decimals_override: Option<u8>, step: f64) -> usize {
    decimals_override.map_or_else(|| grid::step_decimals(step), usize::from)
}

fn labeled_values(values: &[f64], labels: &[f64]) -> LabeledValues {
    values
        .iter()
        .copied()
        .filter(|value| grid::value_in_labels(*value, labels))
        .collect()
}

fn shows_unit(value: f64, labeled: &LabeledValues, first_and_last: bool) -> bool {
    let is_last = labeled.last().copied() == Some(value);
    if first_and_last {
        labeled.first().copied() == Some(value) || is_last
    } else {
        is_last
    }
}

pub(super) fn build_y_entries(
    scale: YScale,
    spec: &GridSpec,
    unit: &str,
    show_override: Option<bool>,
    decimals_override: Option<u8>,
) -> Vec<GridEntry> {
    let values = grid::grid_values(scale.domain(), spec);
    let labeled = labeled_values(&values, &spec.labels);
    // Percent units annotate only the topmost label by default; everything
    // else marks both ends of the axis.
    let is_percent = unit.contains('%');
    let first_and_last = show_override.unwrap_or(!is_percent);
    let decimals = resolve_decimals(decimals_override, spec.step);

    values
        .into_iter()
        .map(|value| {
            let label = grid::value_in_labels(value, &spec.labels).then(|| {
                let show_unit = shows_unit(value, &labeled, first_and_last);
                format_metric(value, decimals, false, show_unit, unit)
            });
            GridEntry {
                value,
                position: scale.value_to_y(value),
                has_tick: true,
                label,
            }
        })
        .collect()
}

pub(super) fn build_x_entries_continuous(
    scale: ContinuousXScale,
    spec: &GridSpec,
    is_currency: bool,
    show_override: Option<bool>,
    decimals_override: Option<u8>,
) -> Vec<GridEntry> {
    let values = grid::grid_values(scale.domain(), spec);
    let labeled = labeled_values(&values, &spec.labels);
    let first_and_last = show_override.unwrap_or(is_currency);
    let decimals = resolve_decimals(decimals_override, spec.step);

    values
        .into_iter()
        .map(|value| {
            let label = grid::value_in_labels(value, &spec.labels).then(|| {
                let show_unit = shows_unit(value, &labeled, first_and_last);
                format_metric(value, decimals, is_currency, show_unit, "")
            });
            GridEntry {
                value,
                position: scale.value_to_x(value),
                has_tick: true,
                label,
            }
        })
        .collect()
}

/// Plans both zones of a broken X axis independently and suppresses any tick
/// whose position falls outside its zone's rendered span, so nothing lands
/// inside the visual gap.
pub(super) fn build_x_entries_broken(
    scale: BrokenXScale,
    left_spec: &GridSpec,
    right_spec: &GridSpec,
    is_currency: bool,
    show_override: Option<bool>,
    decimals_override: Option<u8>,
) -> Vec<GridEntry> {
    let geometry = scale.geometry();
    let first_and_last = show_override.unwrap_or(is_currency);

    let mut entries = Vec::new();

    let left_values = grid::grid_values(scale.left_zone(), left_spec);
    let left_labeled = labeled_values(&left_values, &left_spec.labels);
    let left_decimals = resolve_decimals(decimals_override, left_spec.step);
    for value in left_values {
        let position = scale.value_to_x(value);
        if position >= geometry.left_section_end {
            continue;
        }
        let label = grid::value_in_labels(value, &left_spec.labels).then(|| {
            // The breakpoint plays the role of the zone's last label, so
            // in-zone values only ever qualify as "first".
            let show_unit = first_and_last && left_labeled.first().copied() == Some(value);
            format_metric(value, left_decimals, is_currency, show_unit, "")
        });
        entries.push(GridEntry {
            value,
            position,
            has_tick: true,
            label,
        });
    }

    // The left zone's terminal value sits flush against the gap: it keeps
    // its label but carries no tick or gridline of its own.
    let breakpoint = scale.breakpoint();
    entries.push(GridEntry {
        value: breakpoint,
        position: scale.value_to_x(breakpoint),
        has_tick: false,
        label: Some(format_metric(
            breakpoint,
            left_decimals,
            is_currency,
            true,
            "",
        )),
    });

    let right_values = grid::grid_values(scale.right_zone(), right_spec);
    let right_labeled = labeled_values(&right_values, &right_spec.labels);
    let right_decimals = resolve_decimals(decimals_override, right_spec.step);
    for value in right_values {
        let position = scale.value_to_x(value);
        if position < geometry.right_section_start {
            continue;
        }
        let label = grid::value_in_labels(value, &right_spec.labels).then(|| {
            let show_unit = shows_unit(value, &right_labeled, first_and_last);
            format_metric(value, right_decimals, is_currency, show_unit, "")
        });
        entries.push(GridEntry {
            value,
            position,
            has_tick: true,
            label,
        });
    }

    entries
}
