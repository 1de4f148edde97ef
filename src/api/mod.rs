mod chart_config;
mod engine;
mod shape;
mod tooltip;
mod x_axis;
mod y_axis;

pub use chart_config::{
    AxisLabelStyle, AxisLineStyle, AxisOptions, AxisTickStyle, ChartConfig, DotStyle, GridMargins,
    LineStyle, ShapeOptions, TooltipOptions,
};
pub use engine::{ChartEngine, ChartState, HIGHLIGHT_RADIUS_FACTOR};
pub use shape::{MarkerNode, REVEAL_DURATION_MS, ShapeLayout, build_shape};
pub use tooltip::{
    POINTER_OFFSET_X, POINTER_OFFSET_Y, TooltipController, TooltipPlacement, place_tooltip,
};
pub use x_axis::{XAxisLayout, build_x_axis};
pub use y_axis::{YAxisLayout, build_y_axis};
