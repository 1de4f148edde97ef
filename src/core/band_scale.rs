use indexmap::IndexMap;

use crate::error::{ChartError, ChartResult};

/// Smallest band width handed out for degenerate plot widths, so a
/// single-point series never collapses into zero-width geometry.
const MIN_BAND_PX: f64 = 1e-6;

/// Category-axis band scale.
///
/// Maps ordered, unique category labels onto non-overlapping pixel bands
/// across the plot width, with half a band of padding at both ends so the
/// first and last points are not flush against the axis edges:
/// `position(i) = band_width * (i + 0.5)`.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    labels: IndexMap<String, usize>,
    band_width: f64,
    range_px: f64,
}

impl BandScale {
    pub fn new<I, L>(labels: I, range_px: f64) -> ChartResult<Self>
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        if !range_px.is_finite() || range_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "band scale pixel range must be finite and > 0".to_owned(),
            ));
        }

        let mut map: IndexMap<String, usize> = IndexMap::new();
        for label in labels {
            let label = label.into();
            if label.is_empty() {
                return Err(ChartError::InvalidData(
                    "category label must not be empty".to_owned(),
                ));
            }
            let next_index = map.len();
            if map.insert(label.clone(), next_index).is_some() {
                return Err(ChartError::InvalidData(format!(
                    "duplicate category label: `{label}`"
                )));
            }
        }

        if map.is_empty() {
            return Err(ChartError::InvalidData(
                "band scale requires at least one category".to_owned(),
            ));
        }

        let band_width = (range_px / map.len() as f64).max(MIN_BAND_PX);
        Ok(Self {
            labels: map,
            band_width,
            range_px,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn band_width(&self) -> f64 {
        self.band_width
    }

    #[must_use]
    pub fn range_px(&self) -> f64 {
        self.range_px
    }

    /// Pixel X of the band center for a label, in input order.
    #[must_use]
    pub fn position(&self, label: &str) -> Option<f64> {
        self.labels
            .get(label)
            .copied()
            .and_then(|index| self.position_at(index))
    }

    /// Pixel X of the band center at a category index.
    #[must_use]
    pub fn position_at(&self, index: usize) -> Option<f64> {
        if index >= self.labels.len() {
            return None;
        }
        Some(self.band_width * (index as f64 + 0.5))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.keys().map(String::as_str)
    }
}
