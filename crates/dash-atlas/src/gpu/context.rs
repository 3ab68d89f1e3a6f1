use crate::image::AlphaImage;

/// Texture unit slot the atlas texture is bound to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureUnit(pub u32);

/// Minification/magnification filtering.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Filter {
    Nearest,
    Linear,
}

/// Mip-map usage.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MipMap {
    No,
    Yes,
}

/// Texture coordinate wrapping per axis.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Wrap {
    Clamp,
    Repeat,
}

/// Fixed-function sampling state for a bound texture.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Sampling {
    pub filter: Filter,
    pub mipmap: MipMap,
    pub wrap_x: Wrap,
    pub wrap_y: Wrap,
}

/// Sampling state the atlas is always bound with.
///
/// Repeat along x lets a line's texture coordinate run unbounded along its
/// length; clamp along y avoids bleeding between unrelated stripes.
pub const ATLAS_SAMPLING: Sampling = Sampling {
    filter: Filter::Linear,
    mipmap: MipMap::No,
    wrap_x: Wrap::Repeat,
    wrap_y: Wrap::Clamp,
};

/// Device-side texture primitives the atlas needs.
///
/// This is intentionally small and stable: create once, update in place,
/// bind for sampling.
pub trait GraphicsContext {
    type Texture;

    /// Creates a texture initialized from `image`, associated with `unit`.
    fn create_texture(&mut self, image: &AlphaImage, unit: TextureUnit) -> Self::Texture;

    /// Re-uploads `image` into an existing texture.
    fn update_texture(&mut self, texture: &mut Self::Texture, image: &AlphaImage, unit: TextureUnit);

    /// Binds `texture` to `unit` with the given sampling state.
    fn bind_texture(&mut self, texture: &mut Self::Texture, unit: TextureUnit, sampling: Sampling);
}
