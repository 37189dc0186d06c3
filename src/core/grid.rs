use serde::{Deserialize, Serialize};

use crate::core::types::AxisDomain;

/// Tolerance used when matching generated tick values against explicit
/// label values and domain bounds.
pub const MERGE_EPSILON: f64 = 0.0001;

/// Where the generated tick ladder is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum GridAnchor {
    /// Sequence runs `min + step, min + 2*step, ...`.
    #[default]
    DomainMin,
    /// Sequence runs `step, 2*step, ...`, filtered to the domain. The right
    /// zone of a broken axis uses this so its ladder continues the left
    /// zone's spacing instead of restarting at the breakpoint.
    Zero,
}

/// Tick/gridline cadence for one axis (or one zone of a broken axis).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSpec {
    pub step: f64,
    /// Domain values guaranteed a rendered label. When non-empty, only
    /// matching ticks carry labels; when empty, every tick does.
    #[serde(default)]
    pub labels: Vec<f64>,
    #[serde(default)]
    pub anchor: GridAnchor,
}

impl GridSpec {
    #[must_use]
    pub fn stepped(step: f64) -> Self {
        Self {
            step,
            labels: Vec::new(),
            anchor: GridAnchor::DomainMin,
        }
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Vec<f64>) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn anchored_at_zero(mut self) -> Self {
        self.anchor = GridAnchor::Zero;
        self
    }
}

/// One planned tick/gridline with its optional rendered label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridEntry {
    pub value: f64,
    /// Normalized percent-of-span position.
    pub position: f64,
    /// Whether a tick mark and gridline are drawn here. Label-only entries
    /// (the terminal label of a broken axis's left zone) leave this unset.
    pub has_tick: bool,
    pub label: Option<String>,
}

impl GridEntry {
    #[must_use]
    pub fn has_label(&self) -> bool {
        self.label.is_some()
    }
}

/// Fractional-digit count of a step value, derived from its shortest
/// decimal rendering. Drives both drift-rounding of generated ticks and the
/// default label precision.
#[must_use]
pub fn step_decimals(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let text = format!("{:.12}", step.abs());
    let Some((_, fraction)) = text.split_once('.') else {
        return 0;
    };
    fraction.trim_end_matches('0').len().min(12)
}

/// Rounds a generated tick term to the step's own precision so repeated
/// stepping cannot accumulate visible drift.
#[must_use]
pub fn round_to_decimals(value: f64, decimals: usize) -> f64 {
    let factor = 10.0_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Whether `value` matches one of the explicit label values within
/// [`MERGE_EPSILON`]. An empty label list matches everything, which is what
/// makes every generated tick labeled by default.
#[must_use]
pub fn value_in_labels(value: f64, labels: &[f64]) -> bool {
    if labels.is_empty() {
        return true;
    }
    labels
        .iter()
        .any(|label| (value - label).abs() < MERGE_EPSILON)
}

/// Generates the ordered candidate tick values for one axis zone: the
/// anchored arithmetic sequence, merged with any in-domain explicit label
/// values not already present.
#[must_use]
pub fn grid_values(domain: AxisDomain, spec: &GridSpec) -> Vec<f64> {
    let mut values = Vec::new();
    if !spec.step.is_finite() || spec.step <= 0.0 {
        return values;
    }

    let decimals = step_decimals(spec.step);
    let origin = match spec.anchor {
        GridAnchor::DomainMin => domain.min,
        GridAnchor::Zero => 0.0,
    };

    let mut index: u32 = 1;
    loop {
        let term = round_to_decimals(origin + f64::from(index) * spec.step, decimals);
        if !term.is_finite() || term > domain.max + MERGE_EPSILON {
            break;
        }
        if term >= domain.min - MERGE_EPSILON {
            values.push(term);
        }
        index += 1;
    }

    if !spec.labels.is_empty() {
        for label in &spec.labels {
            if *label >= domain.min - MERGE_EPSILON
                && *label <= domain.max + MERGE_EPSILON
                && !values
                    .iter()
                    .any(|value| (value - label).abs() < MERGE_EPSILON)
            {
                values.push(*label);
            }
        }
        values.sort_by(f64::total_cmp);
    }

    values
}
