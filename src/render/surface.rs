use crate::error::ChartResult;
use crate::render::{CirclePrimitive, LinePrimitive, PathPrimitive, RectPrimitive, TextPrimitive};

/// Opaque handle to a retained node on a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> usize {
        self.0
    }
}

/// 2D translate + uniform scale applied to a retained node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    #[must_use]
    pub const fn translate(x: f64, y: f64) -> Self {
        Self {
            translate_x: x,
            translate_y: y,
            scale: 1.0,
        }
    }

    #[must_use]
    pub const fn scale_only(scale: f64) -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            scale,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Bounding box of a rendered text node, as measured by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
}

/// Easing function applied to a timed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    CubicInOut,
}

impl Easing {
    /// Maps normalized wall-clock progress `t` in `[0, 1]` to attribute progress.
    #[must_use]
    pub fn progress(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Retained node attribute a surface can set or animate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceAttr {
    Opacity(f64),
    Transform(Transform),
    /// Circle radius override, in pixels.
    Radius(f64),
    /// Stroke dash offset, in pixels.
    DashOffset(f64),
}

/// Declarative timed attribute transition, executed by the surface.
///
/// The engine never owns timers or frame callbacks; it hands transition
/// requests to the surface and treats them as fire-and-forget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub attr: SurfaceAttr,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Transition {
    #[must_use]
    pub const fn new(attr: SurfaceAttr, duration_ms: f64, easing: Easing) -> Self {
        Self {
            attr,
            duration_ms,
            easing,
        }
    }
}

/// Contract implemented by any retained-mode drawing backend.
///
/// Draw calls append primitives under a parent group and hand back node
/// handles the engine keeps for later attribute updates (crosshair moves,
/// marker highlights, tooltip placement). `measure_text` must reflect the
/// backend's real font metrics since Y-axis layout depends on it.
pub trait Surface {
    /// Appends a grouping node; `parent = None` appends at the root.
    fn append_group(&mut self, parent: Option<NodeId>, transform: Transform) -> NodeId;

    fn draw_path(&mut self, parent: NodeId, path: PathPrimitive) -> ChartResult<NodeId>;

    fn draw_line(&mut self, parent: NodeId, line: LinePrimitive) -> ChartResult<NodeId>;

    fn draw_circle(&mut self, parent: NodeId, circle: CirclePrimitive) -> ChartResult<NodeId>;

    fn draw_rect(&mut self, parent: NodeId, rect: RectPrimitive) -> ChartResult<NodeId>;

    fn draw_text(&mut self, parent: NodeId, text: TextPrimitive) -> ChartResult<NodeId>;

    /// Bounding box of a previously drawn text node.
    fn measure_text(&self, node: NodeId) -> ChartResult<TextMetrics>;

    /// Sets a retained attribute immediately, without animation.
    fn set_attr(&mut self, node: NodeId, attr: SurfaceAttr) -> ChartResult<()>;

    /// Sets the stroke dash pattern and initial offset of a stroked node.
    fn set_dash(&mut self, node: NodeId, dash_length: f64, dash_offset: f64) -> ChartResult<()>;

    /// Starts a timed transition toward the attribute target.
    fn transition(&mut self, node: NodeId, transition: Transition) -> ChartResult<()>;

    /// Removes all children of a grouping node, keeping the node itself.
    fn remove_children(&mut self, node: NodeId) -> ChartResult<()>;
}
