use serde::{Deserialize, Serialize};

use crate::core::{SeriesPoint, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Outer margins between the drawing surface edges and the plot rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridMargins {
    #[serde(default = "default_grid_top")]
    pub top: f64,
    #[serde(default = "default_grid_left")]
    pub left: f64,
    #[serde(default = "default_grid_right")]
    pub right: f64,
    #[serde(default = "default_grid_bottom")]
    pub bottom: f64,
}

impl Default for GridMargins {
    fn default() -> Self {
        Self {
            top: default_grid_top(),
            left: default_grid_left(),
            right: default_grid_right(),
            bottom: default_grid_bottom(),
        }
    }
}

/// Axis line stroke style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLineStyle {
    #[serde(default = "default_true")]
    pub show: bool,
    #[serde(default = "default_stroke_width")]
    pub width: f64,
    #[serde(default = "default_black")]
    pub color: Color,
}

impl Default for AxisLineStyle {
    fn default() -> Self {
        Self {
            show: true,
            width: default_stroke_width(),
            color: Color::BLACK,
        }
    }
}

/// Tick mark style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTickStyle {
    #[serde(default = "default_true")]
    pub show: bool,
    #[serde(default = "default_tick_length")]
    pub length: f64,
    #[serde(default = "default_stroke_width")]
    pub width: f64,
    #[serde(default = "default_black")]
    pub color: Color,
}

impl Default for AxisTickStyle {
    fn default() -> Self {
        Self {
            show: true,
            length: default_tick_length(),
            width: default_stroke_width(),
            color: Color::BLACK,
        }
    }
}

/// Tick label style; `unit` is appended verbatim to each label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabelStyle {
    #[serde(default = "default_font_size")]
    pub font_size_px: f64,
    #[serde(default = "default_black")]
    pub color: Color,
    #[serde(default)]
    pub unit: String,
}

impl Default for AxisLabelStyle {
    fn default() -> Self {
        Self {
            font_size_px: default_font_size(),
            color: Color::BLACK,
            unit: String::new(),
        }
    }
}

/// Per-axis styling; every field merges over its default independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AxisOptions {
    #[serde(default)]
    pub axis_line: AxisLineStyle,
    #[serde(default)]
    pub axis_tick: AxisTickStyle,
    #[serde(default)]
    pub axis_label: AxisLabelStyle,
}

/// Polyline stroke style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    #[serde(default = "default_black")]
    pub color: Color,
    #[serde(default = "default_stroke_width")]
    pub width: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: default_stroke_width(),
        }
    }
}

/// Per-point marker style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DotStyle {
    #[serde(default = "default_true")]
    pub show: bool,
    #[serde(default = "default_dot_size")]
    pub size: f64,
    #[serde(default = "default_black")]
    pub fill_color: Color,
    #[serde(default = "default_black")]
    pub border_color: Color,
    #[serde(default = "default_dot_border_width")]
    pub border_width: f64,
}

impl Default for DotStyle {
    fn default() -> Self {
        Self {
            show: true,
            size: default_dot_size(),
            fill_color: Color::BLACK,
            border_color: Color::BLACK,
            border_width: default_dot_border_width(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ShapeOptions {
    #[serde(default)]
    pub line_style: LineStyle,
    #[serde(default)]
    pub dot_style: DotStyle,
}

/// Floating tooltip styling. `width`/`height` override the measured
/// content size when set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipOptions {
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default = "default_tooltip_background")]
    pub background: Color,
    #[serde(default = "default_black")]
    pub border_color: Color,
    #[serde(default = "default_dot_border_width")]
    pub border_width: f64,
    #[serde(default = "default_tooltip_padding_x")]
    pub padding_x: f64,
    #[serde(default = "default_tooltip_padding_y")]
    pub padding_y: f64,
    #[serde(default = "default_font_size")]
    pub font_size_px: f64,
    #[serde(default = "default_black")]
    pub text_color: Color,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            background: default_tooltip_background(),
            border_color: Color::BLACK,
            border_width: default_dot_border_width(),
            padding_x: default_tooltip_padding_x(),
            padding_y: default_tooltip_padding_y(),
            font_size_px: default_font_size(),
            text_color: Color::BLACK,
        }
    }
}

/// Full chart setup, passed once at configuration time.
///
/// The type is serializable so host applications can persist/load chart
/// setup; absent JSON fields fall back to their documented defaults
/// without overriding sibling fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub grid: GridMargins,
    #[serde(default)]
    pub x_axis: AxisOptions,
    #[serde(default)]
    pub y_axis: AxisOptions,
    #[serde(default)]
    pub shape: ShapeOptions,
    #[serde(default)]
    pub tooltip: TooltipOptions,
    pub data: Vec<SeriesPoint>,
}

impl ChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport, data: Vec<SeriesPoint>) -> Self {
        Self {
            viewport,
            grid: GridMargins::default(),
            x_axis: AxisOptions::default(),
            y_axis: AxisOptions::default(),
            shape: ShapeOptions::default(),
            tooltip: TooltipOptions::default(),
            data,
        }
    }

    #[must_use]
    pub fn with_grid(mut self, grid: GridMargins) -> Self {
        self.grid = grid;
        self
    }

    #[must_use]
    pub fn with_x_axis(mut self, options: AxisOptions) -> Self {
        self.x_axis = options;
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, options: AxisOptions) -> Self {
        self.y_axis = options;
        self
    }

    #[must_use]
    pub fn with_shape(mut self, options: ShapeOptions) -> Self {
        self.shape = options;
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, options: TooltipOptions) -> Self {
        self.tooltip = options;
        self
    }

    /// Plot width between the configured left and right margins.
    #[must_use]
    pub fn plot_width(&self) -> f64 {
        f64::from(self.viewport.width) - self.grid.left - self.grid.right
    }

    /// Plot height between the configured top and bottom margins.
    #[must_use]
    pub fn plot_height(&self) -> f64 {
        f64::from(self.viewport.height) - self.grid.top - self.grid.bottom
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for (name, value) in [
            ("grid.top", self.grid.top),
            ("grid.left", self.grid.left),
            ("grid.right", self.grid.right),
            ("grid.bottom", self.grid.bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if self.plot_width() <= 0.0 || self.plot_height() <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "grid margins leave no plot area".to_owned(),
            ));
        }

        for (axis_name, axis) in [("x_axis", &self.x_axis), ("y_axis", &self.y_axis)] {
            validate_axis_options(axis_name, axis)?;
        }

        if !self.shape.line_style.width.is_finite() || self.shape.line_style.width <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "shape.line_style.width must be finite and > 0".to_owned(),
            ));
        }
        if !self.shape.dot_style.size.is_finite() || self.shape.dot_style.size <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "shape.dot_style.size must be finite and > 0".to_owned(),
            ));
        }
        if !self.shape.dot_style.border_width.is_finite() || self.shape.dot_style.border_width < 0.0
        {
            return Err(ChartError::InvalidConfig(
                "shape.dot_style.border_width must be finite and >= 0".to_owned(),
            ));
        }

        validate_tooltip_options(&self.tooltip)?;

        if self.data.is_empty() {
            return Err(ChartError::InvalidConfig(
                "data must contain at least one point".to_owned(),
            ));
        }
        let mut seen = std::collections::HashSet::with_capacity(self.data.len());
        for point in &self.data {
            point
                .validate()
                .map_err(|err| ChartError::InvalidConfig(err.to_string()))?;
            if !seen.insert(point.name.as_str()) {
                return Err(ChartError::InvalidConfig(format!(
                    "duplicate category name: `{}`",
                    point.name
                )));
            }
        }
        if !self.data.iter().any(|point| point.value.is_some()) {
            return Err(ChartError::InvalidConfig(
                "data must contain at least one non-gap value".to_owned(),
            ));
        }

        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON, merging absent fields over defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

fn validate_axis_options(axis_name: &str, axis: &AxisOptions) -> ChartResult<()> {
    if !axis.axis_line.width.is_finite() || axis.axis_line.width <= 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "{axis_name}.axis_line.width must be finite and > 0"
        )));
    }
    if !axis.axis_tick.width.is_finite() || axis.axis_tick.width <= 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "{axis_name}.axis_tick.width must be finite and > 0"
        )));
    }
    if !axis.axis_tick.length.is_finite() || axis.axis_tick.length < 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "{axis_name}.axis_tick.length must be finite and >= 0"
        )));
    }
    if !axis.axis_label.font_size_px.is_finite() || axis.axis_label.font_size_px <= 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "{axis_name}.axis_label.font_size_px must be finite and > 0"
        )));
    }
    axis.axis_line
        .color
        .validate()
        .and_then(|()| axis.axis_tick.color.validate())
        .and_then(|()| axis.axis_label.color.validate())
        .map_err(|err| ChartError::InvalidConfig(format!("{axis_name}: {err}")))
}

fn validate_tooltip_options(tooltip: &TooltipOptions) -> ChartResult<()> {
    for (name, value) in [
        ("tooltip.padding_x", tooltip.padding_x),
        ("tooltip.padding_y", tooltip.padding_y),
        ("tooltip.border_width", tooltip.border_width),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "{name} must be finite and >= 0"
            )));
        }
    }
    if !tooltip.font_size_px.is_finite() || tooltip.font_size_px <= 0.0 {
        return Err(ChartError::InvalidConfig(
            "tooltip.font_size_px must be finite and > 0".to_owned(),
        ));
    }
    for (name, value) in [("tooltip.width", tooltip.width), ("tooltip.height", tooltip.height)] {
        if let Some(value) = value
            && (!value.is_finite() || value <= 0.0)
        {
            return Err(ChartError::InvalidConfig(format!(
                "{name} must be finite and > 0 when set"
            )));
        }
    }
    tooltip
        .background
        .validate()
        .and_then(|()| tooltip.border_color.validate())
        .and_then(|()| tooltip.text_color.validate())
        .map_err(|err| ChartError::InvalidConfig(format!("tooltip: {err}")))
}

fn default_true() -> bool {
    true
}

fn default_black() -> Color {
    Color::BLACK
}

fn default_grid_top() -> f64 {
    20.0
}

fn default_grid_left() -> f64 {
    30.0
}

fn default_grid_right() -> f64 {
    20.0
}

fn default_grid_bottom() -> f64 {
    40.0
}

fn default_stroke_width() -> f64 {
    2.0
}

fn default_tick_length() -> f64 {
    5.0
}

fn default_font_size() -> f64 {
    14.0
}

fn default_dot_size() -> f64 {
    3.5
}

fn default_dot_border_width() -> f64 {
    1.0
}

fn default_tooltip_background() -> Color {
    Color::grey(0.933)
}

fn default_tooltip_padding_x() -> f64 {
    10.0
}

fn default_tooltip_padding_y() -> f64 {
    5.0
}
