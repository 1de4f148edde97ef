use tracing::debug;

use crate::core::{AxisSpec, BandScale, LinearScale, SeriesPoint, nice_axis_spec};
use crate::error::{ChartError, ChartResult};

/// All scales derived from one series, built once per configuration pass
/// and shared read-only by the axis, shape and interaction layers.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleBundle {
    pub axis: AxisSpec,
    pub band: BandScale,
    pub value: LinearScale,
    /// Pixel distance of value 0 from the plot bottom; the X axis line and
    /// its ticks sit at this baseline.
    pub zero_offset_px: f64,
}

/// Builds the category band scale, the nice value axis and the value scale
/// for a series inside a `plot_width` x `plot_height` plotting rectangle.
///
/// Gap points still occupy a category band but contribute no value to the
/// axis extrema. Pure: the same series and dimensions always produce the
/// same bundle.
pub fn build_scales(
    points: &[SeriesPoint],
    plot_width: f64,
    plot_height: f64,
) -> ChartResult<ScaleBundle> {
    if points.is_empty() {
        return Err(ChartError::InvalidData(
            "scales require at least one series point".to_owned(),
        ));
    }
    for point in points {
        point.validate()?;
    }

    let band = BandScale::new(points.iter().map(|point| point.name.clone()), plot_width)?;

    let values: Vec<f64> = points.iter().filter_map(|point| point.value).collect();
    if values.is_empty() {
        return Err(ChartError::InvalidData(
            "series has no numeric values to scale".to_owned(),
        ));
    }

    let axis = nice_axis_spec(&values)?;
    let value = LinearScale::new(axis.min, axis.domain_top(), plot_height)?;
    let zero_offset_px = value.value_to_pixel(0.0)?;

    debug!(
        tick_count = axis.tick_count,
        step = axis.step,
        min = axis.min,
        max = axis.max,
        below_zero_ticks = axis.below_zero_ticks,
        zero_offset_px,
        "built chart scales"
    );

    Ok(ScaleBundle {
        axis,
        band,
        value,
        zero_offset_px,
    })
}
