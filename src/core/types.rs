use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One category sample of the series.
///
/// `value: None` marks a gap: the category still occupies a band on the
/// X axis, but the line breaks around it and no marker is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub name: String,
    #[serde(default)]
    pub value: Option<f64>,
}

impl SeriesPoint {
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value: Some(value),
        }
    }

    #[must_use]
    pub fn gap(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Parses the numeric-as-string form used by host configuration.
    ///
    /// An empty (or whitespace-only) value string produces a gap point.
    pub fn parse(name: impl Into<String>, value_text: &str) -> ChartResult<Self> {
        let trimmed = value_text.trim();
        if trimmed.is_empty() {
            return Ok(Self::gap(name));
        }

        let value: f64 = trimmed.parse().map_err(|_| {
            ChartError::InvalidData(format!("series value is not numeric: `{trimmed}`"))
        })?;
        if !value.is_finite() {
            return Err(ChartError::InvalidData(
                "series value must be finite".to_owned(),
            ));
        }

        Ok(Self {
            name: name.into(),
            value: Some(value),
        })
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.name.is_empty() {
            return Err(ChartError::InvalidData(
                "series point name must not be empty".to_owned(),
            ));
        }
        if let Some(value) = self.value
            && !value.is_finite()
        {
            return Err(ChartError::InvalidData(format!(
                "series value for `{}` must be finite",
                self.name
            )));
        }
        Ok(())
    }
}
