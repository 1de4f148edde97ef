use smallvec::SmallVec;

use crate::api::chart_config::AxisOptions;
use crate::core::BandScale;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    LinePrimitive, NodeId, Surface, SurfaceAttr, TextHAlign, TextPrimitive, Transform,
};

/// Gap between the tick mark end and the label baseline.
const LABEL_GAP_PX: f64 = 5.0;

/// X-axis geometry output.
///
/// `tick_positions` is the ordered pixel X of every category tick inside
/// the plot group; the pointer resolver consumes it. `leader_line` is the
/// hidden vertical crosshair reused during hover.
#[derive(Debug, Clone, PartialEq)]
pub struct XAxisLayout {
    pub group: NodeId,
    pub leader_line: NodeId,
    pub tick_positions: SmallVec<[f64; 16]>,
}

/// Draws the category axis: baseline at the value-zero pixel, one tick and
/// label per category, and the hidden hover leader line.
pub fn build_x_axis<S: Surface>(
    surface: &mut S,
    band: &BandScale,
    options: &AxisOptions,
    zero_offset_px: f64,
    plot_width: f64,
    plot_height: f64,
    left_offset_px: f64,
    baseline_y: f64,
) -> ChartResult<XAxisLayout> {
    let group = surface.append_group(None, Transform::translate(left_offset_px, baseline_y));

    let axis_line = surface.draw_line(
        group,
        LinePrimitive::new(
            0.0,
            -zero_offset_px,
            plot_width,
            -zero_offset_px,
            options.axis_line.width,
            options.axis_line.color,
        ),
    )?;
    surface.set_attr(
        axis_line,
        SurfaceAttr::Opacity(f64::from(u8::from(options.axis_line.show))),
    )?;

    let mut tick_positions: SmallVec<[f64; 16]> = SmallVec::new();
    for (index, label) in band.labels().enumerate() {
        let x = band
            .position_at(index)
            .ok_or_else(|| ChartError::InvalidData(format!("no band for category `{label}`")))?;
        tick_positions.push(x);

        let tick = surface.draw_line(
            group,
            LinePrimitive::new(
                x,
                -zero_offset_px,
                x,
                -zero_offset_px + options.axis_tick.length,
                options.axis_tick.width,
                options.axis_tick.color,
            ),
        )?;
        surface.set_attr(
            tick,
            SurfaceAttr::Opacity(f64::from(u8::from(options.axis_tick.show))),
        )?;

        surface.draw_text(
            group,
            TextPrimitive::new(
                format!("{label}{}", options.axis_label.unit),
                x,
                options.axis_tick.length + options.axis_label.font_size_px + LABEL_GAP_PX,
                options.axis_label.font_size_px,
                options.axis_label.color,
                TextHAlign::Center,
            ),
        )?;
    }

    // Hover crosshair: full plot height, hidden until pointer resolution
    // moves it over a tick.
    let leader_line = surface.draw_line(
        group,
        LinePrimitive::new(
            0.0,
            0.0,
            0.0,
            -plot_height,
            options.axis_tick.width,
            options.axis_tick.color,
        ),
    )?;
    surface.set_attr(leader_line, SurfaceAttr::Opacity(0.0))?;

    Ok(XAxisLayout {
        group,
        leader_line,
        tick_positions,
    })
}
