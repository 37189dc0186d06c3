use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Continuous range of real-world values represented by an axis (or one zone
/// of a broken axis).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

impl AxisDomain {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub(crate) fn validate(self, axis: &str) -> ChartResult<Self> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ChartError::InvalidDomain(format!(
                "{axis} domain bounds must be finite"
            )));
        }
        if self.max <= self.min {
            return Err(ChartError::InvalidDomain(format!(
                "{axis} domain max must exceed min (got {}..{})",
                self.min, self.max
            )));
        }
        Ok(self)
    }
}

/// Placement of the visual gap of a broken axis inside the [0, 100] output range.
///
/// `left_section_end` is where the left zone's span ends; `right_section_start`
/// is where the right zone's span begins. Nothing maps into the gap between them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakGeometry {
    pub left_section_end: f64,
    pub right_section_start: f64,
}

impl BreakGeometry {
    pub(crate) fn validate(self) -> ChartResult<Self> {
        if !self.left_section_end.is_finite() || !self.right_section_start.is_finite() {
            return Err(ChartError::InvalidDomain(
                "axis break geometry must be finite".to_owned(),
            ));
        }
        if self.left_section_end < 0.0
            || self.right_section_start > 100.0
            || self.left_section_end >= self.right_section_start
        {
            return Err(ChartError::InvalidDomain(format!(
                "axis break geometry must satisfy 0 <= left < right <= 100 (got {}..{})",
                self.left_section_end, self.right_section_start
            )));
        }
        Ok(self)
    }
}

/// Metric value as authored in a dataset row: either a plain number or a
/// currency-formatted string such as `"$1.50"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawMetric {
    Number(f64),
    Text(String),
}

impl RawMetric {
    /// Resolves the authored encoding into a tagged numeric value.
    ///
    /// The currency flag is decided here, once, and never re-sniffed
    /// downstream.
    pub fn resolve(&self) -> ChartResult<MetricValue> {
        match self {
            Self::Number(raw) => Ok(MetricValue {
                raw: *raw,
                is_currency: false,
            }),
            Self::Text(text) => {
                let trimmed = text.trim();
                let (digits, is_currency) = match trimmed.strip_prefix('$') {
                    Some(rest) => (rest, true),
                    None => (trimmed, false),
                };
                let raw = digits.parse::<f64>().map_err(|_| {
                    ChartError::ValueParse(format!("cannot parse metric value {text:?}"))
                })?;
                Ok(MetricValue { raw, is_currency })
            }
        }
    }

    /// Whether the authored encoding is currency-typed, without parsing.
    #[must_use]
    pub fn is_currency_encoded(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim_start().starts_with('$'))
    }
}

/// Numeric metric value with its currency-ness resolved at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricValue {
    pub raw: f64,
    pub is_currency: bool,
}

/// One data row of a comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesEntry {
    pub vendor: String,
    pub model: String,
    pub score: f64,
    /// Cost or parameter-count value driving the X placement. Optional so
    /// bar-chart rows (categorical X) can omit it.
    #[serde(default, alias = "cost", alias = "parametersNumber")]
    pub metric: Option<RawMetric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_offset: Option<f64>,
}

/// Builds a stable, style-key-safe slug from a vendor display name.
///
/// Lowercases, maps whitespace to dashes and `&` to `and`, drops everything
/// else outside `[a-z0-9-]`, and collapses dash runs.
#[must_use]
pub fn vendor_slug(vendor: &str) -> String {
    let mut raw = String::with_capacity(vendor.len());
    for ch in vendor.chars() {
        if ch.is_ascii_alphanumeric() {
            raw.push(ch.to_ascii_lowercase());
        } else if ch == '&' {
            raw.push_str("and");
        } else if ch.is_whitespace() || ch == '-' {
            raw.push('-');
        }
    }

    let mut slug = String::with_capacity(raw.len());
    for part in raw.split('-').filter(|part| !part.is_empty()) {
        if !slug.is_empty() {
            slug.push('-');
        }
        slug.push_str(part);
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::{RawMetric, vendor_slug};

    #[test]
    fn currency_string_resolves_with_flag() {
        let value = RawMetric::Text("$0.000930".to_owned())
            .resolve()
            .expect("currency string parses");
        assert!(value.is_currency);
        assert!((value.raw - 0.000_93).abs() < 1e-12);
    }

    #[test]
    fn plain_number_resolves_without_flag() {
        let value = RawMetric::Number(316.0).resolve().expect("number resolves");
        assert!(!value.is_currency);
        assert_eq!(value.raw, 316.0);
    }

    #[test]
    fn malformed_text_is_a_parse_error() {
        assert!(RawMetric::Text("n/a".to_owned()).resolve().is_err());
        assert!(RawMetric::Text("$".to_owned()).resolve().is_err());
    }

    #[test]
    fn vendor_slug_normalizes_punctuation_and_ampersands() {
        assert_eq!(
            vendor_slug("Singapore Agency for Science, Technology & Research"),
            "singapore-agency-for-science-technology-and-research"
        );
        assert_eq!(vendor_slug("Resemble AI"), "resemble-ai");
        assert_eq!(vendor_slug("  OpenAI  "), "openai");
    }
}
