pub mod band_scale;
pub mod nice_axis;
pub mod scale;
pub mod scale_builder;
pub mod types;

pub use band_scale::BandScale;
pub use nice_axis::{AxisSpec, nice_axis_spec};
pub use scale::LinearScale;
pub use scale_builder::{ScaleBundle, build_scales};
pub use types::{SeriesPoint, Viewport};
