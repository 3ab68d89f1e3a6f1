//! Dashed-line distance-field atlas.
//!
//! Packs antialiased signed-distance stripes for dash patterns into a shared
//! single-channel atlas image, caches each pattern's stripe position, and
//! keeps a lazily created GPU texture in sync with the CPU-side image.
//!
//! Typical per-frame flow:
//! - [`DashAtlas::stripe`] resolves a dash pattern to a [`StripePosition`]
//!   (rasterizing and appending a new stripe on first sight)
//! - [`gpu::Uploader::ensure_uploaded`] pushes pending image changes to the
//!   device and binds the texture before drawing

pub mod atlas;
pub mod gpu;
pub mod image;
pub mod logging;
pub mod pattern;

mod raster;

pub use atlas::{DashAtlas, StripePosition};
pub use gpu::{GraphicsContext, Sampling, TextureUnit, Uploader};
pub use image::AlphaImage;
pub use pattern::LineCap;
