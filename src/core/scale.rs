use crate::core::types::{AxisDomain, BreakGeometry};
use crate::error::ChartResult;

/// Horizontal mapping for a single continuous domain.
///
/// Positions are percent-of-span values: `min` maps to 0, `max` to 100.
/// Out-of-domain values map outside [0, 100]; callers decide whether to
/// filter or render off-chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuousXScale {
    domain: AxisDomain,
}

impl ContinuousXScale {
    pub fn new(domain: AxisDomain) -> ChartResult<Self> {
        Ok(Self {
            domain: domain.validate("x axis")?,
        })
    }

    #[must_use]
    pub fn domain(self) -> AxisDomain {
        self.domain
    }

    #[must_use]
    pub fn value_to_x(self, value: f64) -> f64 {
        (value - self.domain.min) / self.domain.span() * 100.0
    }
}

/// Horizontal mapping across two independently scaled zones separated by a
/// visual gap.
///
/// Values at or below the breakpoint (`left.max`) interpolate through the
/// left zone into `[0, left_section_end]`; values above it interpolate
/// through the right zone into `[right_section_start, 100]`. By construction
/// no in-range value maps into the gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrokenXScale {
    left: AxisDomain,
    right: AxisDomain,
    geometry: BreakGeometry,
}

impl BrokenXScale {
    pub fn new(left: AxisDomain, right: AxisDomain, geometry: BreakGeometry) -> ChartResult<Self> {
        Ok(Self {
            left: left.validate("x axis left zone")?,
            right: right.validate("x axis right zone")?,
            geometry: geometry.validate()?,
        })
    }

    #[must_use]
    pub fn breakpoint(self) -> f64 {
        self.left.max
    }

    #[must_use]
    pub fn left_zone(self) -> AxisDomain {
        self.left
    }

    #[must_use]
    pub fn right_zone(self) -> AxisDomain {
        self.right
    }

    #[must_use]
    pub fn geometry(self) -> BreakGeometry {
        self.geometry
    }

    #[must_use]
    pub fn value_to_x(self, value: f64) -> f64 {
        if value <= self.breakpoint() {
            let normalized = (value - self.left.min) / self.left.span();
            normalized * self.geometry.left_section_end
        } else {
            let normalized = (value - self.right.min) / self.right.span();
            self.geometry.right_section_start
                + normalized * (100.0 - self.geometry.right_section_start)
        }
    }
}

/// Horizontal axis mapping, continuous or broken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum XScale {
    Continuous(ContinuousXScale),
    Broken(BrokenXScale),
}

impl XScale {
    #[must_use]
    pub fn value_to_x(self, value: f64) -> f64 {
        match self {
            Self::Continuous(scale) => scale.value_to_x(value),
            Self::Broken(scale) => scale.value_to_x(value),
        }
    }

    /// The `[left_section_end, right_section_start]` gap, when the axis is broken.
    #[must_use]
    pub fn break_span(self) -> Option<(f64, f64)> {
        match self {
            Self::Continuous(_) => None,
            Self::Broken(scale) => Some((
                scale.geometry.left_section_end,
                scale.geometry.right_section_start,
            )),
        }
    }
}

/// Vertical mapping from score values to percent-of-span positions.
///
/// Position 0 is the top of the plot area and 100 the bottom. On a normal
/// axis a larger value lands higher (closer to 0); with `inverted` set the
/// direction flips, which is how lower-is-better metrics keep their best
/// values on top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YScale {
    domain: AxisDomain,
    inverted: bool,
}

impl YScale {
    pub fn new(domain: AxisDomain, inverted: bool) -> ChartResult<Self> {
        Ok(Self {
            domain: domain.validate("y axis")?,
            inverted,
        })
    }

    #[must_use]
    pub fn domain(self) -> AxisDomain {
        self.domain
    }

    #[must_use]
    pub fn is_inverted(self) -> bool {
        self.inverted
    }

    #[must_use]
    pub fn value_to_y(self, value: f64) -> f64 {
        let normalized = if self.inverted {
            (self.domain.max - value) / self.domain.span()
        } else {
            (value - self.domain.min) / self.domain.span()
        };
        (1.0 - normalized) * 100.0
    }
}
