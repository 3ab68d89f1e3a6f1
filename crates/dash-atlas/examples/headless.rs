//! Headless demo: rasterize a few dash patterns and upload the atlas.
//!
//! Runs against any available wgpu backend without opening a window and
//! prints each pattern's resolved stripe position.

use anyhow::Result;
use dash_atlas::gpu::HeadlessGpu;
use dash_atlas::logging::{LoggingConfig, init_logging};
use dash_atlas::{DashAtlas, LineCap, TextureUnit, Uploader};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let gpu = HeadlessGpu::block_on()?;
    let mut atlas = DashAtlas::new(256, 64);
    let mut uploader = Uploader::new();

    let patterns: [(&[f32], LineCap); 3] = [
        (&[2.0, 2.0], LineCap::Round),
        (&[4.0, 2.0], LineCap::Butt),
        (&[3.0, 1.0, 3.0], LineCap::Butt),
    ];

    for (pattern, cap) in patterns {
        let pos = atlas.stripe(pattern, cap);
        println!(
            "{pattern:?} {cap:?} -> y {:.4}, height {:.4}, width {}",
            pos.y, pos.height, pos.width
        );
    }

    let mut ctx = gpu.context();
    uploader.ensure_uploaded(&mut ctx, &mut atlas, TextureUnit(0));
    println!(
        "atlas uploaded: {} stripes, {} of {} rows used",
        atlas.stripe_count(),
        atlas.next_row(),
        atlas.image().height()
    );

    Ok(())
}
