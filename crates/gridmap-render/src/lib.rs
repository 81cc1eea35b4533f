#![forbid(unsafe_code)]

//! Rendering pipeline: scene → SVG document → PNG bytes.
//!
//! The drawing model is deliberately stateless. Every drawing operation
//! emits a self-contained SVG element carrying exactly the styling it
//! needs, so no fill, stroke, glow, dash, or blend setting can leak from
//! one operation into the next. The assembled document is rasterized in a
//! single `resvg` pass.

pub mod raster;
pub mod svg;

pub use raster::{RasterError, RasterOptions, svg_to_png};
pub use svg::render_svg;

use gridmap_core::Scene;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Scene(#[from] gridmap_core::Error),
    #[error(transparent)]
    Raster(#[from] raster::RasterError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Renders the scene straight to encoded PNG bytes.
pub fn render_png(scene: &Scene, options: &RasterOptions) -> Result<Vec<u8>> {
    let svg = svg::render_svg(scene)?;
    Ok(raster::svg_to_png(&svg, options)?)
}
