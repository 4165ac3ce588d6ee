pub mod axis;
pub mod frame;
pub mod raster;
pub mod resample;

pub use axis::{x_labels, x_tick_indices, y_labels};
pub use frame::{Compositor, Frame};
pub use raster::{CharCell, ChartRow, Kind, Owner, PixelGrid, Rasterizer, value_to_row};
pub use resample::Resampler;
