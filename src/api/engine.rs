use tracing::debug;

use crate::api::chart_config::ChartConfig;
use crate::api::shape::{ShapeLayout, build_shape};
use crate::api::tooltip::{TooltipController, TooltipPlacement};
use crate::api::x_axis::{XAxisLayout, build_x_axis};
use crate::api::y_axis::{YAxisLayout, build_y_axis};
use crate::core::{AxisSpec, ScaleBundle, build_scales};
use crate::error::ChartResult;
use crate::interaction::{PointerEvent, PointerHit, PointerResolver};
use crate::render::{Easing, Surface, SurfaceAttr, Transform, Transition};

/// Radius multiplier applied to the hovered marker.
pub const HIGHLIGHT_RADIUS_FACTOR: f64 = 1.8;
/// Duration of the crosshair slide between ticks.
const LEADER_TRANSITION_MS: f64 = 200.0;

/// All per-configuration chart state, built once by [`ChartEngine::new`]
/// and passed by reference afterwards. Keeping it one explicit value (and
/// not ambient engine fields) makes the render-pass data flow visible:
/// scales feed both axes, the Y layout feeds the X layout, the X layout
/// feeds pointer resolution.
#[derive(Debug)]
pub struct ChartState {
    pub scales: ScaleBundle,
    pub plot_width: f64,
    pub plot_height: f64,
    /// Surface Y of the X-axis group origin (`viewport height - bottom margin`).
    pub baseline_y: f64,
    pub y_axis: YAxisLayout,
    pub x_axis: XAxisLayout,
    pub shape: ShapeLayout,
}

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` builds the static geometry once from a validated
/// configuration, then serves pointer events: resolving the hovered
/// category, moving the crosshair, highlighting the hovered marker and
/// driving the tooltip. All drawing goes through the owned [`Surface`].
pub struct ChartEngine<S: Surface> {
    surface: S,
    config: ChartConfig,
    state: ChartState,
    resolver: PointerResolver,
    tooltip: TooltipController,
}

impl<S: Surface> ChartEngine<S> {
    pub fn new(mut surface: S, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;

        let plot_width = config.plot_width();
        let plot_height = config.plot_height();
        let baseline_y = f64::from(config.viewport.height) - config.grid.bottom;

        let scales = build_scales(&config.data, plot_width, plot_height)?;

        // Y first: its measured label width positions everything else.
        let y_axis = build_y_axis(
            &mut surface,
            scales.axis,
            scales.value,
            &config.y_axis,
            config.x_axis.axis_tick.width,
            config.grid,
            plot_height,
            baseline_y,
        )?;
        let x_axis = build_x_axis(
            &mut surface,
            &scales.band,
            &config.x_axis,
            scales.zero_offset_px,
            plot_width,
            plot_height,
            y_axis.left_offset_px,
            baseline_y,
        )?;
        let shape = build_shape(
            &mut surface,
            &config.data,
            &scales.band,
            scales.value,
            &config.shape,
            y_axis.left_offset_px,
            baseline_y,
        )?;
        let tooltip = TooltipController::new(&mut surface, config.tooltip)?;
        let resolver = PointerResolver::new(
            x_axis.tick_positions.iter().copied(),
            y_axis.left_offset_px,
        )?;

        debug!(
            points = config.data.len(),
            plot_width,
            plot_height,
            left_offset_px = y_axis.left_offset_px,
            "configured chart engine"
        );

        Ok(Self {
            surface,
            config,
            state: ChartState {
                scales,
                plot_width,
                plot_height,
                baseline_y,
                y_axis,
                x_axis,
                shape,
            },
            resolver,
            tooltip,
        })
    }

    /// Routes one pointer event; returns the resolved hit for moves.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> ChartResult<Option<PointerHit>> {
        match event {
            PointerEvent::Moved { x, y } => self.on_pointer_move(x, y).map(Some),
            PointerEvent::Left => {
                self.on_pointer_leave()?;
                Ok(None)
            }
        }
    }

    /// Resolves the hovered category and updates crosshair, marker
    /// highlight and tooltip. Crosshair and highlight only change when the
    /// resolved index does; the tooltip follows every move.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> ChartResult<PointerHit> {
        let hit = self.resolver.resolve(x);

        if hit.changed {
            surface_show_leader(&mut self.surface, &self.state, hit)?;
            for marker in &self.state.shape.markers {
                let radius = if marker.index == hit.index {
                    marker.base_radius * HIGHLIGHT_RADIUS_FACTOR
                } else {
                    marker.base_radius
                };
                self.surface
                    .set_attr(marker.node, SurfaceAttr::Radius(radius))?;
            }
        }

        self.tooltip.update(
            &mut self.surface,
            hit.index,
            &self.config.data[hit.index],
            (x, y),
            f64::from(self.config.viewport.width),
            self.state.baseline_y,
            self.state.scales.zero_offset_px,
        )?;

        Ok(hit)
    }

    /// Hides tooltip and crosshair, resets marker radii and the resolver lock.
    pub fn on_pointer_leave(&mut self) -> ChartResult<()> {
        self.resolver.reset();
        self.tooltip.hide(&mut self.surface)?;
        self.surface
            .set_attr(self.state.x_axis.leader_line, SurfaceAttr::Opacity(0.0))?;
        for marker in &self.state.shape.markers {
            self.surface
                .set_attr(marker.node, SurfaceAttr::Radius(marker.base_radius))?;
        }
        Ok(())
    }

    #[must_use]
    pub fn axis_spec(&self) -> AxisSpec {
        self.state.scales.axis
    }

    #[must_use]
    pub fn state(&self) -> &ChartState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Index currently reported to the tooltip/highlight, if any.
    #[must_use]
    pub fn hovered_index(&self) -> Option<usize> {
        self.resolver.locked_index()
    }

    #[must_use]
    pub fn tooltip(&self) -> &TooltipController {
        &self.tooltip
    }

    /// Placement the tooltip would take for a pointer position, without
    /// mutating any state.
    #[must_use]
    pub fn peek_tooltip_placement(&self, x: f64, y: f64) -> TooltipPlacement {
        crate::api::tooltip::place_tooltip(
            x,
            y,
            self.tooltip.content_size(),
            f64::from(self.config.viewport.width),
            self.state.baseline_y,
            self.state.scales.zero_offset_px,
        )
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }
}

fn surface_show_leader<S: Surface>(
    surface: &mut S,
    state: &ChartState,
    hit: PointerHit,
) -> ChartResult<()> {
    surface.set_attr(state.x_axis.leader_line, SurfaceAttr::Opacity(1.0))?;
    surface.transition(
        state.x_axis.leader_line,
        Transition::new(
            SurfaceAttr::Transform(Transform::translate(hit.tick_x, 0.0)),
            LEADER_TRANSITION_MS,
            Easing::Linear,
        ),
    )
}
