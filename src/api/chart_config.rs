use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::grid::GridSpec;
use crate::core::types::{AxisDomain, BreakGeometry};

/// Hover label precision: one fixed count, or a default with per-vendor
/// exceptions for vendors whose metric scale warrants more (or fewer) digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HoverDecimals {
    Fixed(u8),
    PerVendor {
        default: u8,
        #[serde(default)]
        exceptions: IndexMap<String, u8>,
    },
}

impl HoverDecimals {
    #[must_use]
    pub fn for_vendor(&self, vendor: &str) -> u8 {
        match self {
            Self::Fixed(decimals) => *decimals,
            Self::PerVendor {
                default,
                exceptions,
            } => exceptions.get(vendor).copied().unwrap_or(*default),
        }
    }
}

impl Default for HoverDecimals {
    fn default() -> Self {
        Self::Fixed(2)
    }
}

/// Horizontal span of a chart: one continuous domain, or two independently
/// scaled zones joined by a visual gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum XDomainConfig {
    #[serde(rename_all = "camelCase")]
    Continuous { domain: AxisDomain, grid: GridSpec },
    #[serde(rename_all = "camelCase")]
    Broken {
        left_zone: AxisDomain,
        right_zone: AxisDomain,
        break_geometry: BreakGeometry,
        left_grid: GridSpec,
        right_grid: GridSpec,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisXConfig {
    #[serde(flatten)]
    pub domain: XDomainConfig,
    /// Static label precision. `None` falls back to the grid step's own
    /// fractional-digit count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_decimals: Option<u8>,
    #[serde(default)]
    pub hover_decimals: HoverDecimals,
    /// Forces currency formatting for static labels. `None` derives the
    /// flag from the first data row's encoding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<bool>,
    /// Overrides the default first/last unit placement policy
    /// (currency axes default to first-and-last, others to last-only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_units_on_first_and_last: Option<bool>,
}

impl AxisXConfig {
    #[must_use]
    pub fn continuous(domain: AxisDomain, grid: GridSpec) -> Self {
        Self {
            domain: XDomainConfig::Continuous { domain, grid },
            static_decimals: None,
            hover_decimals: HoverDecimals::default(),
            currency: None,
            show_units_on_first_and_last: None,
        }
    }

    #[must_use]
    pub fn broken(
        left_zone: AxisDomain,
        right_zone: AxisDomain,
        break_geometry: BreakGeometry,
        left_grid: GridSpec,
        right_grid: GridSpec,
    ) -> Self {
        Self {
            domain: XDomainConfig::Broken {
                left_zone,
                right_zone,
                break_geometry,
                left_grid,
                right_grid,
            },
            static_decimals: None,
            hover_decimals: HoverDecimals::default(),
            currency: None,
            show_units_on_first_and_last: None,
        }
    }

    #[must_use]
    pub fn with_static_decimals(mut self, decimals: u8) -> Self {
        self.static_decimals = Some(decimals);
        self
    }

    #[must_use]
    pub fn with_hover_decimals(mut self, hover_decimals: HoverDecimals) -> Self {
        self.hover_decimals = hover_decimals;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisYConfig {
    #[serde(flatten)]
    pub domain: AxisDomain,
    #[serde(rename = "gridLines")]
    pub grid: GridSpec,
    /// Lower-is-better metrics (error rates) render inverted so their best
    /// values stay on top.
    #[serde(default)]
    pub inverted: bool,
    /// Unit suffix appended to labeled values, e.g. `"%"`.
    #[serde(default)]
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_decimals: Option<u8>,
    /// Axis-label precision override used by bar charts, taking precedence
    /// over `static_decimals`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_decimals: Option<u8>,
    #[serde(default)]
    pub hover_decimals: HoverDecimals,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_units_on_first_and_last: Option<bool>,
}

impl AxisYConfig {
    #[must_use]
    pub fn new(domain: AxisDomain, grid: GridSpec) -> Self {
        Self {
            domain,
            grid,
            inverted: false,
            unit: String::new(),
            static_decimals: None,
            label_decimals: None,
            hover_decimals: HoverDecimals::default(),
            show_units_on_first_and_last: None,
        }
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    #[must_use]
    pub fn with_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    #[must_use]
    pub fn with_static_decimals(mut self, decimals: u8) -> Self {
        self.static_decimals = Some(decimals);
        self
    }

    #[must_use]
    pub fn with_hover_decimals(mut self, hover_decimals: HoverDecimals) -> Self {
        self.hover_decimals = hover_decimals;
        self
    }
}

/// Declarative description of one scatter chart. Immutable per layout pass;
/// per-chart differences (axis break, inversion, currency, visual offset,
/// hover precision) are fields here, not separate code paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub axis_x: AxisXConfig,
    pub axis_y: AxisYConfig,
    /// When set, a row's `visual_offset` nudges its plotted Y position.
    /// Reported values are never adjusted.
    #[serde(default)]
    pub use_visual_offset: bool,
}

impl ChartConfig {
    #[must_use]
    pub fn new(axis_x: AxisXConfig, axis_y: AxisYConfig) -> Self {
        Self {
            axis_x,
            axis_y,
            use_visual_offset: false,
        }
    }

    #[must_use]
    pub fn with_visual_offset(mut self, use_visual_offset: bool) -> Self {
        self.use_visual_offset = use_visual_offset;
        self
    }
}
