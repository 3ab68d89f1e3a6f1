//! Pattern cache, row allocation, and dirty tracking.

use std::collections::HashMap;

use crate::image::AlphaImage;
use crate::pattern::{self, LineCap, PatternKey};
use crate::raster;

/// Resolved location of a dash stripe within the atlas.
///
/// `y` and `height` are normalized to the atlas height for texture-coordinate
/// sampling. `width` is the pattern's total length in pattern-space units;
/// the consumer uses it to scale texture coordinates along a line's length.
///
/// The all-zero default marks a failed allocation (see [`is_empty`]).
///
/// [`is_empty`]: StripePosition::is_empty
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct StripePosition {
    pub y: f32,
    pub height: f32,
    pub width: f32,
}

impl StripePosition {
    /// `true` for the default "allocation failed" position.
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Self::default()
    }
}

/// Bump allocator over atlas rows.
///
/// Atlas space is a scarce, non-reclaimable linear resource; stripes are
/// never removed during the atlas's lifetime, so a monotone cursor suffices.
#[derive(Debug)]
struct RowAllocator {
    next_row: u32,
    height: u32,
}

impl RowAllocator {
    fn new(height: u32) -> Self {
        Self {
            next_row: 0,
            height,
        }
    }

    /// Reserves `rows` consecutive rows, or `None` on overflow.
    ///
    /// Overflow leaves the cursor unchanged, so already reserved bands stay
    /// intact and a later, smaller request may still succeed.
    fn allocate(&mut self, rows: u32) -> Option<u32> {
        if self.next_row + rows > self.height {
            return None;
        }
        let start = self.next_row;
        self.next_row += rows;
        Some(start)
    }
}

/// Append-only atlas of antialiased distance-field stripes for dash patterns.
///
/// Each distinct (pattern, cap) pair is rasterized once into a horizontal
/// band and cached; later lookups return the stored [`StripePosition`]
/// without touching the image or the allocation cursor.
///
/// Single-threaded by design: the image and cache are exclusively owned
/// mutable state, and callers are expected to confine use to the render
/// thread.
pub struct DashAtlas {
    image: AlphaImage,
    allocator: RowAllocator,
    positions: HashMap<PatternKey, StripePosition>,
    dirty: bool,
}

impl DashAtlas {
    /// Creates an empty atlas with a fixed size.
    ///
    /// Starts dirty so the first upload creates the GPU texture.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: AlphaImage::new(width, height),
            allocator: RowAllocator::new(height),
            positions: HashMap::new(),
            dirty: true,
        }
    }

    /// Resolves a dash pattern to its stripe position, rasterizing and
    /// appending a new stripe on first sight.
    ///
    /// Returns the empty position when the pattern is unusable or the atlas
    /// has no room left. Failed allocations are not cached; a later call
    /// with the same pattern re-attempts allocation.
    pub fn stripe(&mut self, pattern: &[f32], cap: LineCap) -> StripePosition {
        if !pattern::is_valid(pattern) {
            log::warn!("rejecting dash pattern {pattern:?}: lengths must be finite and positive");
            return StripePosition::default();
        }

        let key = PatternKey::new(pattern, cap);
        if let Some(position) = self.positions.get(&key) {
            return *position;
        }

        let position = self.add_stripe(pattern, cap);
        if !position.is_empty() {
            self.positions.insert(key, position);
        }
        position
    }

    /// The CPU-side atlas image.
    #[inline]
    pub fn image(&self) -> &AlphaImage {
        &self.image
    }

    /// `true` while the image has changes the GPU texture has not seen.
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Next unused atlas row (diagnostic; monotonically increasing).
    #[inline]
    pub fn next_row(&self) -> u32 {
        self.allocator.next_row
    }

    /// Number of cached stripes.
    #[inline]
    pub fn stripe_count(&self) -> usize {
        self.positions.len()
    }

    pub(crate) fn mark_synced(&mut self) {
        self.dirty = false;
    }

    fn add_stripe(&mut self, pattern: &[f32], cap: LineCap) -> StripePosition {
        let rows = raster::band_rows(cap);
        let Some(start_row) = self.allocator.allocate(rows) else {
            log::warn!(
                "dash atlas overflow: no room for a {rows}-row stripe in a {}x{} atlas",
                self.image.width(),
                self.image.height(),
            );
            return StripePosition::default();
        };

        let position = raster::fill_band(&mut self.image, pattern, cap, start_row);
        self.dirty = true;
        position
    }
}
