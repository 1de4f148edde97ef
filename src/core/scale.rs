use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Affine value-axis scale mapping a numeric domain onto `[0, range_px]`.
///
/// Larger values map to larger pixel distances from the X-axis baseline;
/// callers negate the result when drawing into a screen-down coordinate
/// system. The mapping extrapolates outside the domain, which is relied on
/// for the zero-baseline offset when the domain does not contain zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_px: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64, range_px: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_px.is_finite() || range_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "scale pixel range must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_px,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range_px(self) -> f64 {
        self.range_px
    }

    pub fn value_to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(normalized * self.range_px)
    }

    pub fn pixel_to_value(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = pixel / self.range_px;
        Ok(self.domain_start + normalized * span)
    }
}
