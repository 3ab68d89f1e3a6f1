//! GPU synchronization for the atlas image.
//!
//! The core never talks to a device directly; it drives the small
//! [`GraphicsContext`] trait. A concrete wgpu implementation lives in
//! [`wgpu_backend`]; tests use a recording fake.

mod context;
mod upload;
pub mod wgpu_backend;

pub use context::{ATLAS_SAMPLING, Filter, GraphicsContext, MipMap, Sampling, TextureUnit, Wrap};
pub use upload::Uploader;
pub use wgpu_backend::{AtlasTexture, HeadlessGpu, WgpuContext};
