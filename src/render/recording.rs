use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, LinePrimitive, NodeId, PathPrimitive, RectPrimitive, Surface, SurfaceAttr,
    TextMetrics, TextPrimitive, Transform, Transition,
};

/// Width of one glyph relative to the font size, used by the synthetic
/// text measurement. Real backends report their own font metrics.
const GLYPH_WIDTH_RATIO: f64 = 0.6;

/// Primitive payload retained for one recorded node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Group,
    Path(PathPrimitive),
    Line(LinePrimitive),
    Circle(CirclePrimitive),
    Rect(RectPrimitive),
    Text(TextPrimitive),
}

/// One retained node with its current attribute state.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedNode {
    pub parent: Option<NodeId>,
    pub kind: NodeKind,
    pub opacity: f64,
    pub transform: Transform,
    pub radius_override: Option<f64>,
    pub dash: Option<(f64, f64)>,
    pub removed: bool,
}

/// In-memory surface used by tests and headless engine usage.
///
/// It validates every primitive, retains the node tree and attribute
/// state, and records transitions while applying their target values
/// immediately, so tests can assert the settled end state of an
/// animation without running a clock.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    nodes: Vec<RecordedNode>,
    transitions: Vec<(NodeId, Transition)>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, parent: Option<NodeId>, kind: NodeKind) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(RecordedNode {
            parent,
            kind,
            opacity: 1.0,
            transform: Transform::IDENTITY,
            radius_override: None,
            dash: None,
            removed: false,
        });
        id
    }

    fn node_mut(&mut self, node: NodeId) -> ChartResult<&mut RecordedNode> {
        self.nodes
            .get_mut(node.raw())
            .ok_or(ChartError::UnknownNode(node.raw()))
    }

    fn apply_attr(&mut self, node: NodeId, attr: SurfaceAttr) -> ChartResult<()> {
        let recorded = self.node_mut(node)?;
        match attr {
            SurfaceAttr::Opacity(opacity) => recorded.opacity = opacity,
            SurfaceAttr::Transform(transform) => recorded.transform = transform,
            SurfaceAttr::Radius(radius) => recorded.radius_override = Some(radius),
            SurfaceAttr::DashOffset(offset) => {
                let length = recorded.dash.map_or(0.0, |(length, _)| length);
                recorded.dash = Some((length, offset));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn node(&self, node: NodeId) -> Option<&RecordedNode> {
        self.nodes.get(node.raw())
    }

    #[must_use]
    pub fn opacity(&self, node: NodeId) -> Option<f64> {
        self.node(node).map(|recorded| recorded.opacity)
    }

    #[must_use]
    pub fn transform(&self, node: NodeId) -> Option<Transform> {
        self.node(node).map(|recorded| recorded.transform)
    }

    /// Effective circle radius: the retained override when set, otherwise
    /// the radius the circle was drawn with.
    #[must_use]
    pub fn radius(&self, node: NodeId) -> Option<f64> {
        let recorded = self.node(node)?;
        if let Some(radius) = recorded.radius_override {
            return Some(radius);
        }
        match &recorded.kind {
            NodeKind::Circle(circle) => Some(circle.radius),
            _ => None,
        }
    }

    #[must_use]
    pub fn dash(&self, node: NodeId) -> Option<(f64, f64)> {
        self.node(node).and_then(|recorded| recorded.dash)
    }

    /// Live (non-removed) children of a group, in draw order.
    pub fn children(&self, parent: NodeId) -> impl Iterator<Item = (NodeId, &RecordedNode)> {
        self.nodes.iter().enumerate().filter_map(move |(i, node)| {
            (!node.removed && node.parent == Some(parent)).then_some((NodeId::new(i), node))
        })
    }

    /// Text content of all live text nodes under a parent, in draw order.
    #[must_use]
    pub fn texts_under(&self, parent: NodeId) -> Vec<&str> {
        self.children(parent)
            .filter_map(|(_, node)| match &node.kind {
                NodeKind::Text(text) => Some(text.text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn transitions(&self) -> &[(NodeId, Transition)] {
        &self.transitions
    }

    #[must_use]
    pub fn transitions_for(&self, node: NodeId) -> Vec<Transition> {
        self.transitions
            .iter()
            .filter(|(id, _)| *id == node)
            .map(|(_, transition)| *transition)
            .collect()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Surface for RecordingSurface {
    fn append_group(&mut self, parent: Option<NodeId>, transform: Transform) -> NodeId {
        let id = self.push(parent, NodeKind::Group);
        self.nodes[id.raw()].transform = transform;
        id
    }

    fn draw_path(&mut self, parent: NodeId, path: PathPrimitive) -> ChartResult<NodeId> {
        path.validate()?;
        Ok(self.push(Some(parent), NodeKind::Path(path)))
    }

    fn draw_line(&mut self, parent: NodeId, line: LinePrimitive) -> ChartResult<NodeId> {
        line.validate()?;
        Ok(self.push(Some(parent), NodeKind::Line(line)))
    }

    fn draw_circle(&mut self, parent: NodeId, circle: CirclePrimitive) -> ChartResult<NodeId> {
        circle.validate()?;
        Ok(self.push(Some(parent), NodeKind::Circle(circle)))
    }

    fn draw_rect(&mut self, parent: NodeId, rect: RectPrimitive) -> ChartResult<NodeId> {
        rect.validate()?;
        Ok(self.push(Some(parent), NodeKind::Rect(rect)))
    }

    fn draw_text(&mut self, parent: NodeId, text: TextPrimitive) -> ChartResult<NodeId> {
        text.validate()?;
        Ok(self.push(Some(parent), NodeKind::Text(text)))
    }

    fn measure_text(&self, node: NodeId) -> ChartResult<TextMetrics> {
        let recorded = self
            .nodes
            .get(node.raw())
            .ok_or(ChartError::UnknownNode(node.raw()))?;
        match &recorded.kind {
            NodeKind::Text(text) => Ok(TextMetrics {
                width: text.text.chars().count() as f64 * text.font_size_px * GLYPH_WIDTH_RATIO,
                height: text.font_size_px,
            }),
            _ => Err(ChartError::InvalidData(
                "measure_text requires a text node".to_owned(),
            )),
        }
    }

    fn set_attr(&mut self, node: NodeId, attr: SurfaceAttr) -> ChartResult<()> {
        self.apply_attr(node, attr)
    }

    fn set_dash(&mut self, node: NodeId, dash_length: f64, dash_offset: f64) -> ChartResult<()> {
        self.node_mut(node)?.dash = Some((dash_length, dash_offset));
        Ok(())
    }

    fn transition(&mut self, node: NodeId, transition: Transition) -> ChartResult<()> {
        // Record the request, then settle the attribute at its target so
        // callers observe the animation's end state.
        self.transitions.push((node, transition));
        self.apply_attr(node, transition.attr)
    }

    fn remove_children(&mut self, node: NodeId) -> ChartResult<()> {
        if node.raw() >= self.nodes.len() {
            return Err(ChartError::UnknownNode(node.raw()));
        }
        // Detach the whole subtree, not only direct children.
        let mut removed = vec![false; self.nodes.len()];
        for index in 0..self.nodes.len() {
            let Some(parent) = self.nodes[index].parent else {
                continue;
            };
            if parent == node || removed[parent.raw()] {
                removed[index] = true;
                self.nodes[index].removed = true;
            }
        }
        Ok(())
    }
}
