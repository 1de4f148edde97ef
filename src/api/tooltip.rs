use ordered_float::OrderedFloat;

use crate::api::chart_config::TooltipOptions;
use crate::api::y_axis::format_value;
use crate::core::SeriesPoint;
use crate::error::ChartResult;
use crate::render::{
    NodeId, RectPrimitive, Surface, SurfaceAttr, TextHAlign, TextMetrics, TextPrimitive, Transform,
};

/// Default offsets of the tooltip's top-left corner from the pointer.
pub const POINTER_OFFSET_X: f64 = 16.0;
pub const POINTER_OFFSET_Y: f64 = 20.0;
/// Safety pad used when testing for edge overflow.
const EDGE_PAD_PX: f64 = 15.0;
/// Vertical gap between the name and value lines.
const LINE_GAP_PX: f64 = 4.0;

/// Resolved tooltip placement for one pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipPlacement {
    pub left: f64,
    pub top: f64,
    pub flipped_horizontal: bool,
    pub flipped_vertical: bool,
}

/// Computes where the tooltip's top-left corner goes for a pointer
/// position.
///
/// The label sits right of and below the pointer by default; it flips to
/// the pointer's left when its right edge would cross the surface's right
/// edge, and above the pointer when its bottom edge would cross the X-axis
/// baseline. Pure, so placement is unit-testable without a surface.
#[must_use]
pub fn place_tooltip(
    pointer_x: f64,
    pointer_y: f64,
    size: TextMetrics,
    surface_width: f64,
    baseline_y: f64,
    zero_offset_px: f64,
) -> TooltipPlacement {
    let flipped_horizontal = pointer_x + size.width + EDGE_PAD_PX >= surface_width;
    let left = if flipped_horizontal {
        pointer_x - size.width - POINTER_OFFSET_X
    } else {
        pointer_x + POINTER_OFFSET_X
    };

    let flipped_vertical = pointer_y + size.height + EDGE_PAD_PX + zero_offset_px >= baseline_y;
    let top = if flipped_vertical {
        pointer_y - size.height - POINTER_OFFSET_Y
    } else {
        pointer_y + POINTER_OFFSET_Y
    };

    TooltipPlacement {
        left,
        top,
        flipped_horizontal,
        flipped_vertical,
    }
}

/// Owns the floating tooltip group: a background rect plus name/value
/// text, re-rendered only when the hovered index changes and repositioned
/// on every pointer move.
#[derive(Debug)]
pub struct TooltipController {
    group: NodeId,
    background: NodeId,
    content: NodeId,
    options: TooltipOptions,
    rendered_index: Option<usize>,
    content_size: TextMetrics,
}

impl TooltipController {
    pub fn new<S: Surface>(surface: &mut S, options: TooltipOptions) -> ChartResult<Self> {
        let group = surface.append_group(None, Transform::IDENTITY);
        // Background subtree first so the rect paints behind the text.
        let background = surface.append_group(Some(group), Transform::IDENTITY);
        let content = surface.append_group(Some(group), Transform::IDENTITY);
        surface.set_attr(group, SurfaceAttr::Opacity(0.0))?;
        Ok(Self {
            group,
            background,
            content,
            options,
            rendered_index: None,
            content_size: TextMetrics::default(),
        })
    }

    /// Repositions the tooltip for a pointer move, re-rendering content
    /// only when `index` differs from the previously rendered one.
    pub fn update<S: Surface>(
        &mut self,
        surface: &mut S,
        index: usize,
        point: &SeriesPoint,
        pointer: (f64, f64),
        surface_width: f64,
        baseline_y: f64,
        zero_offset_px: f64,
    ) -> ChartResult<TooltipPlacement> {
        if self.rendered_index != Some(index) {
            self.render_content(surface, point)?;
            self.rendered_index = Some(index);
        }

        let placement = place_tooltip(
            pointer.0,
            pointer.1,
            self.content_size,
            surface_width,
            baseline_y,
            zero_offset_px,
        );
        surface.set_attr(
            self.group,
            SurfaceAttr::Transform(Transform::translate(placement.left, placement.top)),
        )?;
        surface.set_attr(self.group, SurfaceAttr::Opacity(1.0))?;
        Ok(placement)
    }

    /// Hides the tooltip on pointer-leave; the rendered content is kept so
    /// re-entering the same point's neighborhood skips a re-render.
    pub fn hide<S: Surface>(&mut self, surface: &mut S) -> ChartResult<()> {
        surface.set_attr(self.group, SurfaceAttr::Opacity(0.0))
    }

    #[must_use]
    pub fn rendered_index(&self) -> Option<usize> {
        self.rendered_index
    }

    #[must_use]
    pub fn group(&self) -> NodeId {
        self.group
    }

    #[must_use]
    pub fn content_group(&self) -> NodeId {
        self.content
    }

    #[must_use]
    pub fn content_size(&self) -> TextMetrics {
        self.content_size
    }

    fn render_content<S: Surface>(
        &mut self,
        surface: &mut S,
        point: &SeriesPoint,
    ) -> ChartResult<()> {
        surface.remove_children(self.background)?;
        surface.remove_children(self.content)?;

        let opts = self.options;
        let mut lines = vec![point.name.clone()];
        if let Some(value) = point.value {
            lines.push(format_value(value));
        }

        let mut max_width = 0.0f64;
        for (i, line) in lines.iter().enumerate() {
            let y = opts.padding_y
                + opts.font_size_px
                + (opts.font_size_px + LINE_GAP_PX) * i as f64;
            let node = surface.draw_text(
                self.content,
                TextPrimitive::new(
                    line.clone(),
                    opts.padding_x,
                    y,
                    opts.font_size_px,
                    opts.text_color,
                    TextHAlign::Left,
                ),
            )?;
            let metrics = surface.measure_text(node)?;
            max_width = OrderedFloat(max_width)
                .max(OrderedFloat(metrics.width))
                .into_inner();
        }

        let line_count = lines.len() as f64;
        let measured_height = opts.padding_y * 2.0
            + opts.font_size_px * line_count
            + LINE_GAP_PX * (line_count - 1.0);
        self.content_size = TextMetrics {
            width: opts.width.unwrap_or(max_width + opts.padding_x * 2.0),
            height: opts.height.unwrap_or(measured_height),
        };

        surface.draw_rect(
            self.background,
            RectPrimitive::new(
                0.0,
                0.0,
                self.content_size.width,
                self.content_size.height,
                opts.background,
                opts.border_color,
                opts.border_width,
            ),
        )?;
        Ok(())
    }
}
