mod primitives;
mod recording;
mod surface;

pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, PathCommand, PathPrimitive, RectPrimitive, TextHAlign,
    TextPrimitive,
};
pub use recording::{NodeKind, RecordedNode, RecordingSurface};
pub use surface::{Easing, NodeId, Surface, SurfaceAttr, TextMetrics, Transform, Transition};
