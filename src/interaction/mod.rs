use smallvec::SmallVec;
use tracing::trace;

use crate::error::{ChartError, ChartResult};

/// Pointer input delivered by the host event substrate, with coordinates
/// relative to the drawing surface's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Moved { x: f64, y: f64 },
    Left,
}

/// Result of resolving a pointer position against the category ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerHit {
    pub index: usize,
    /// Tick pixel X within the plot group (excludes the plot's left offset).
    pub tick_x: f64,
    /// Whether the index differs from the previously resolved one; content
    /// updates are idempotent and skipped when this is false.
    pub changed: bool,
}

/// Maps a pointer's horizontal pixel coordinate to the nearest category
/// tick index.
///
/// Boundaries are the midpoints between adjacent ticks, left-inclusive: a
/// pointer exactly on the midpoint between ticks `i` and `i + 1` resolves
/// to `i`; anything right of the last boundary resolves to the last index.
/// Resolution is a pure function of the pointer position, so the same `x`
/// resolves to the same index regardless of hover history. The retained
/// `locked_index` only tracks the previously reported index to flag
/// repeats.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerResolver {
    tick_positions: SmallVec<[f64; 16]>,
    plot_offset_x: f64,
    locked_index: Option<usize>,
}

impl PointerResolver {
    /// `tick_positions` are the per-category pixel X values recorded during
    /// X-axis rendering; `plot_offset_x` is the plot group's left offset in
    /// surface coordinates.
    pub fn new(
        tick_positions: impl IntoIterator<Item = f64>,
        plot_offset_x: f64,
    ) -> ChartResult<Self> {
        let tick_positions: SmallVec<[f64; 16]> = tick_positions.into_iter().collect();
        if tick_positions.is_empty() {
            return Err(ChartError::InvalidData(
                "pointer resolver requires at least one tick position".to_owned(),
            ));
        }
        for pair in tick_positions.windows(2) {
            if pair[1] <= pair[0] {
                return Err(ChartError::InvalidData(
                    "tick positions must be strictly increasing".to_owned(),
                ));
            }
        }
        if !plot_offset_x.is_finite() {
            return Err(ChartError::InvalidData(
                "plot offset must be finite".to_owned(),
            ));
        }

        Ok(Self {
            tick_positions,
            plot_offset_x,
            locked_index: None,
        })
    }

    /// Resolves a pointer move and updates the lock.
    pub fn resolve(&mut self, pointer_x: f64) -> PointerHit {
        let index = self.resolve_index(pointer_x);
        let changed = self.locked_index != Some(index);
        self.locked_index = Some(index);
        trace!(pointer_x, index, changed, "resolved pointer position");
        PointerHit {
            index,
            tick_x: self.tick_positions[index],
            changed,
        }
    }

    /// Pure index lookup, independent of the lock state.
    #[must_use]
    pub fn resolve_index(&self, pointer_x: f64) -> usize {
        let last = self.tick_positions.len() - 1;
        for (i, pair) in self.tick_positions.windows(2).enumerate() {
            let boundary = (pair[0] + pair[1]) / 2.0 + self.plot_offset_x;
            if pointer_x <= boundary {
                return i;
            }
        }
        last
    }

    #[must_use]
    pub fn locked_index(&self) -> Option<usize> {
        self.locked_index
    }

    #[must_use]
    pub fn tick_positions(&self) -> &[f64] {
        &self.tick_positions
    }

    /// Releases the lock; called on pointer-leave.
    pub fn reset(&mut self) {
        self.locked_index = None;
    }
}
