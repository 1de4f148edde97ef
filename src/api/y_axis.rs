use ordered_float::OrderedFloat;

use crate::api::chart_config::{AxisOptions, GridMargins};
use crate::core::{AxisSpec, LinearScale};
use crate::error::ChartResult;
use crate::render::{
    LinePrimitive, NodeId, Surface, SurfaceAttr, TextHAlign, TextPrimitive, Transform,
};

/// Vertical nudge keeping label baselines visually centered on their tick.
const LABEL_BASELINE_NUDGE_PX: f64 = 1.5;

/// Y-axis geometry output.
///
/// `left_offset_px` is the measured horizontal origin of the plot: the
/// configured left margin plus the widest rendered label. The X axis and
/// the shape group must be placed at this offset, which is why X-axis
/// rendering cannot run before the Y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YAxisLayout {
    pub group: NodeId,
    pub left_offset_px: f64,
    pub label_width_px: f64,
}

/// Formats an axis or tooltip value without trailing `.0` noise.
pub(crate) fn format_value(value: f64) -> String {
    format!("{value}")
}

/// Draws the value axis: axis line, `tick_count + 1` tick marks and labels.
///
/// Labels are measured through the surface; the widest label width shifts
/// every label left and becomes part of the returned `left_offset_px`.
/// `x_tick_width` is the X-axis tick stroke width, which feeds the
/// zero-adjacent tick nudge so both axes meet flush at the origin.
pub fn build_y_axis<S: Surface>(
    surface: &mut S,
    spec: AxisSpec,
    value_scale: LinearScale,
    options: &AxisOptions,
    x_tick_width: f64,
    grid: GridMargins,
    plot_height: f64,
    baseline_y: f64,
) -> ChartResult<YAxisLayout> {
    let group = surface.append_group(None, Transform::IDENTITY);

    let axis_line = surface.draw_line(
        group,
        LinePrimitive::new(
            0.0,
            0.0,
            0.0,
            -plot_height,
            options.axis_line.width,
            options.axis_line.color,
        ),
    )?;
    surface.set_attr(
        axis_line,
        SurfaceAttr::Opacity(f64::from(u8::from(options.axis_line.show))),
    )?;

    let tick_width = options.axis_tick.width;
    let mut label_nodes = Vec::with_capacity(spec.tick_count + 1);
    for (i, value) in spec.tick_values().into_iter().enumerate() {
        // Edge ticks get a half-stroke nudge so they sit flush with the
        // axis line ends; the bottom tick also absorbs the X-axis stroke
        // when the axes meet at zero.
        let nudge = if i == spec.tick_count {
            tick_width / 2.0
        } else if i == 0 && spec.below_zero_ticks > 0 {
            -tick_width / 2.0
        } else if i == 0 {
            -tick_width / 2.0 + x_tick_width / 2.0
        } else {
            0.0
        };
        let y = -value_scale.value_to_pixel(value)? + nudge;

        let tick = surface.draw_line(
            group,
            LinePrimitive::new(
                0.0,
                y,
                -options.axis_tick.length,
                y,
                tick_width,
                options.axis_tick.color,
            ),
        )?;
        surface.set_attr(
            tick,
            SurfaceAttr::Opacity(f64::from(u8::from(options.axis_tick.show))),
        )?;

        let label_y = -value_scale.value_to_pixel(value)? + LABEL_BASELINE_NUDGE_PX;
        let label = surface.draw_text(
            group,
            TextPrimitive::new(
                format!("{}{}", format_value(value), options.axis_label.unit),
                0.0,
                label_y,
                options.axis_label.font_size_px,
                options.axis_label.color,
                TextHAlign::Left,
            ),
        )?;
        label_nodes.push(label);
    }

    let mut label_width_px = 0.0;
    for label in &label_nodes {
        let metrics = surface.measure_text(*label)?;
        label_width_px = OrderedFloat(label_width_px)
            .max(OrderedFloat(metrics.width))
            .into_inner();
    }
    // Shift every label left of the tick marks by the widest label width.
    for label in label_nodes {
        surface.set_attr(
            label,
            SurfaceAttr::Transform(Transform::translate(
                -options.axis_tick.length - label_width_px,
                0.0,
            )),
        )?;
    }

    let left_offset_px = grid.left + label_width_px;
    surface.set_attr(
        group,
        SurfaceAttr::Transform(Transform::translate(left_offset_px, baseline_y)),
    )?;

    Ok(YAxisLayout {
        group,
        left_offset_px,
        label_width_px,
    })
}
