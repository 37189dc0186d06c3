mod axis_furniture;
mod axis_label_format;
mod bar_chart;
mod chart_config;
mod engine;
mod hover_resolver;

pub use axis_furniture::AxisFurniture;
pub use axis_label_format::format_metric;
pub use bar_chart::{BarChartConfig, BarChartLayoutEngine, BarLayoutResult, PlacedBar};
pub use chart_config::{AxisXConfig, AxisYConfig, ChartConfig, HoverDecimals, XDomainConfig};
pub use engine::{
    ChartLayoutEngine, HighlightResult, LabelSide, LayoutResult, PlacedPoint, SkipReason,
    SkippedPoint,
};
