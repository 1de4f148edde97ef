use crate::api::chart_config::ShapeOptions;
use crate::core::{BandScale, LinearScale, SeriesPoint};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, Easing, NodeId, PathCommand, PathPrimitive, Surface, SurfaceAttr, Transform,
    Transition,
};

/// Duration of the line reveal and the marker entrance.
pub const REVEAL_DURATION_MS: f64 = 1500.0;

/// Retained marker handle with the category index it highlights for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerNode {
    pub node: NodeId,
    pub index: usize,
    pub base_radius: f64,
}

/// Shape geometry output: the polyline node (absent when the series has a
/// single defined point run of length zero) and the per-point markers.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeLayout {
    pub group: NodeId,
    pub line: Option<NodeId>,
    pub markers: Vec<MarkerNode>,
}

/// Draws the series polyline and markers with their reveal animations.
///
/// Gap points break the line into separate subpaths instead of being
/// interpolated across. The reveal is a dash animation over the path's own
/// total length with linear easing, so progress is constant in arc length
/// per unit time; markers scale and fade in concurrently.
pub fn build_shape<S: Surface>(
    surface: &mut S,
    points: &[SeriesPoint],
    band: &BandScale,
    value_scale: LinearScale,
    options: &ShapeOptions,
    left_offset_px: f64,
    baseline_y: f64,
) -> ChartResult<ShapeLayout> {
    let group = surface.append_group(None, Transform::translate(left_offset_px, baseline_y));

    let mut commands = Vec::with_capacity(points.len());
    let mut positions: Vec<(usize, f64, f64)> = Vec::with_capacity(points.len());
    let mut in_run = false;
    for (index, point) in points.iter().enumerate() {
        let Some(value) = point.value else {
            in_run = false;
            continue;
        };
        let x = band.position_at(index).ok_or_else(|| {
            ChartError::InvalidData(format!("no band for series point `{}`", point.name))
        })?;
        let y = -value_scale.value_to_pixel(value)?;
        if in_run {
            commands.push(PathCommand::LineTo { x, y });
        } else {
            commands.push(PathCommand::MoveTo { x, y });
            in_run = true;
        }
        positions.push((index, x, y));
    }

    let line = if commands.is_empty() {
        None
    } else {
        let path = PathPrimitive::new(commands, options.line_style.width, options.line_style.color);
        let total_length = path.total_length();
        let node = surface.draw_path(group, path)?;
        // Dash pattern equal to the full path length, offset fully hidden,
        // then animated to zero for a progressive reveal.
        surface.set_dash(node, total_length, total_length)?;
        surface.transition(
            node,
            Transition::new(
                SurfaceAttr::DashOffset(0.0),
                REVEAL_DURATION_MS,
                Easing::Linear,
            ),
        )?;
        Some(node)
    };

    let dot = options.dot_style;
    let mut markers = Vec::with_capacity(positions.len());
    for (index, x, y) in positions {
        let node = surface.draw_circle(
            group,
            CirclePrimitive::new(x, y, dot.size, dot.fill_color, dot.border_color, dot.border_width),
        )?;
        surface.set_attr(node, SurfaceAttr::Opacity(0.0))?;
        surface.set_attr(node, SurfaceAttr::Transform(Transform::scale_only(0.0)))?;
        surface.transition(
            node,
            Transition::new(
                SurfaceAttr::Transform(Transform::IDENTITY),
                REVEAL_DURATION_MS,
                Easing::CubicInOut,
            ),
        )?;
        surface.transition(
            node,
            Transition::new(
                SurfaceAttr::Opacity(f64::from(u8::from(dot.show))),
                REVEAL_DURATION_MS,
                Easing::CubicInOut,
            ),
        )?;
        markers.push(MarkerNode {
            node,
            index,
            base_radius: dot.size,
        });
    }

    Ok(ShapeLayout {
        group,
        line,
        markers,
    })
}
