//! wgpu implementation of the [`GraphicsContext`] boundary.
//!
//! The atlas image maps to an `R8Unorm` texture; uploads rewrite the full
//! image via `Queue::write_texture`. "Binding" in wgpu terms means keeping a
//! sampler matching the requested sampling state alongside the texture —
//! consumers read [`AtlasTexture::view`] and [`AtlasTexture::sampler`] to
//! build their bind groups.

use anyhow::{Context as _, Result};

use super::context::{Filter, GraphicsContext, MipMap, Sampling, TextureUnit, Wrap};
use crate::image::AlphaImage;

/// Atlas texture plus the sampler from its most recent bind.
pub struct AtlasTexture {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    sampler: Option<(Sampling, wgpu::Sampler)>,
}

impl AtlasTexture {
    #[inline]
    pub fn texture(&self) -> &wgpu::Texture {
        &self.texture
    }

    #[inline]
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    /// Sampler configured by the most recent bind, if any.
    pub fn sampler(&self) -> Option<&wgpu::Sampler> {
        self.sampler.as_ref().map(|(_, sampler)| sampler)
    }
}

/// [`GraphicsContext`] over a borrowed device/queue pair.
///
/// Intended to be constructed per frame next to the renderer's other
/// device-facing state.
pub struct WgpuContext<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
}

impl<'a> WgpuContext<'a> {
    #[inline]
    pub fn new(device: &'a wgpu::Device, queue: &'a wgpu::Queue) -> Self {
        Self { device, queue }
    }

    fn write_image(&self, texture: &wgpu::Texture, image: &AlphaImage) {
        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            image.data(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(image.width()),
                rows_per_image: Some(image.height()),
            },
            wgpu::Extent3d {
                width: image.width(),
                height: image.height(),
                depth_or_array_layers: 1,
            },
        );
    }
}

impl GraphicsContext for WgpuContext<'_> {
    type Texture = AtlasTexture;

    fn create_texture(&mut self, image: &AlphaImage, _unit: TextureUnit) -> AtlasTexture {
        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("dash atlas"),
            size: wgpu::Extent3d {
                width: image.width(),
                height: image.height(),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        self.write_image(&texture, image);
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        AtlasTexture {
            texture,
            view,
            sampler: None,
        }
    }

    fn update_texture(&mut self, texture: &mut AtlasTexture, image: &AlphaImage, _unit: TextureUnit) {
        self.write_image(&texture.texture, image);
    }

    fn bind_texture(&mut self, texture: &mut AtlasTexture, _unit: TextureUnit, sampling: Sampling) {
        let stale = texture
            .sampler
            .as_ref()
            .is_none_or(|(current, _)| *current != sampling);

        if stale {
            let sampler = self.device.create_sampler(&sampler_descriptor(sampling));
            texture.sampler = Some((sampling, sampler));
        }
    }
}

fn sampler_descriptor(sampling: Sampling) -> wgpu::SamplerDescriptor<'static> {
    let filter = match sampling.filter {
        Filter::Nearest => wgpu::FilterMode::Nearest,
        Filter::Linear => wgpu::FilterMode::Linear,
    };

    wgpu::SamplerDescriptor {
        label: Some("dash atlas sampler"),
        address_mode_u: address_mode(sampling.wrap_x),
        address_mode_v: address_mode(sampling.wrap_y),
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: filter,
        min_filter: filter,
        mipmap_filter: match sampling.mipmap {
            MipMap::No => wgpu::MipmapFilterMode::Nearest,
            MipMap::Yes => wgpu::MipmapFilterMode::Linear,
        },
        ..Default::default()
    }
}

fn address_mode(wrap: Wrap) -> wgpu::AddressMode {
    match wrap {
        Wrap::Clamp => wgpu::AddressMode::ClampToEdge,
        Wrap::Repeat => wgpu::AddressMode::Repeat,
    }
}

/// Device/queue acquired without a window, for embedders and tools that
/// drive the atlas outside a windowed renderer.
pub struct HeadlessGpu {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

impl HeadlessGpu {
    /// Acquires an adapter and device with default limits.
    ///
    /// Adapter/device acquisition is asynchronous under wgpu.
    pub async fn new() -> Result<Self> {
        // Use all backends to allow wgpu to select the optimal platform backend.
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("dash-atlas device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        Ok(Self { device, queue })
    }

    /// Blocking wrapper over [`HeadlessGpu::new`].
    pub fn block_on() -> Result<Self> {
        pollster::block_on(Self::new())
    }

    /// A context borrowing this device/queue.
    pub fn context(&self) -> WgpuContext<'_> {
        WgpuContext::new(&self.device, &self.queue)
    }
}
