pub mod bars;
pub mod grid;
pub mod scale;
pub mod types;

pub use bars::{BarGeometry, category_center, project_bars};
pub use grid::{GridAnchor, GridEntry, GridSpec};
pub use scale::{BrokenXScale, ContinuousXScale, XScale, YScale};
pub use types::{AxisDomain, BreakGeometry, MetricValue, RawMetric, SeriesEntry, vendor_slug};
