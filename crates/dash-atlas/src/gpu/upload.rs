use super::context::{ATLAS_SAMPLING, GraphicsContext, TextureUnit};
use crate::atlas::DashAtlas;

/// Reconciles the CPU-side atlas image with its GPU texture.
///
/// The texture is created on the first dirty upload and updated in place on
/// later ones; while the atlas is clean, [`ensure_uploaded`] is a flag check.
///
/// [`ensure_uploaded`]: Uploader::ensure_uploaded
pub struct Uploader<C: GraphicsContext> {
    texture: Option<C::Texture>,
}

impl<C: GraphicsContext> Uploader<C> {
    pub fn new() -> Self {
        Self { texture: None }
    }

    /// Pushes pending atlas changes to the device and binds the texture
    /// with the fixed atlas sampling state.
    ///
    /// Must run before any draw that samples the atlas.
    pub fn ensure_uploaded(&mut self, ctx: &mut C, atlas: &mut DashAtlas, unit: TextureUnit) {
        if !atlas.is_dirty() {
            return;
        }

        match &mut self.texture {
            None => self.texture = Some(ctx.create_texture(atlas.image(), unit)),
            Some(texture) => ctx.update_texture(texture, atlas.image(), unit),
        }
        atlas.mark_synced();

        if let Some(texture) = &mut self.texture {
            ctx.bind_texture(texture, unit, ATLAS_SAMPLING);
        }
    }

    /// The device texture, once a dirty upload has created it.
    pub fn texture(&self) -> Option<&C::Texture> {
        self.texture.as_ref()
    }
}

impl<C: GraphicsContext> Default for Uploader<C> {
    fn default() -> Self {
        Self::new()
    }
}
