#![forbid(unsafe_code)]

//! Scene model for the architecture-map renderer.
//!
//! Everything in this crate is data: the artwork palette, the descriptor
//! structs, and the one hand-placed scene ([`Scene::architecture_map`]).
//! There is no layout algorithm behind the picture; the literal coordinates
//! *are* the source of the image. Drawing lives in `gridmap-render`.

pub mod color;
pub mod error;
pub mod geom;
pub mod scene;
pub mod theme;

pub use color::Color;
pub use error::{Error, Result};
pub use scene::{Connection, Grid, Node, Particle, Scene, TitleBlock};
