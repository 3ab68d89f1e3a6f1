//! Owned single-channel atlas image.

/// Fixed-size single-channel (intensity) byte image, zeroed at construction.
///
/// The atlas owns exactly one of these for its full lifetime; the size never
/// changes. Band writes are crate-internal (`rows_mut`), so external callers
/// only ever observe the image through shared references.
pub struct AlphaImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl AlphaImage {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw pixel bytes, row-major, one byte per pixel.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Shared view of a single row.
    pub fn row(&self, row: u32) -> &[u8] {
        let start = row as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Mutable view of `rows` consecutive rows starting at `start_row`.
    ///
    /// The caller (the rasterizer) must have reserved the band through the
    /// row allocator first.
    pub(crate) fn rows_mut(&mut self, start_row: u32, rows: u32) -> &mut [u8] {
        let start = start_row as usize * self.width as usize;
        let len = rows as usize * self.width as usize;
        &mut self.data[start..start + len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_zeroed() {
        let img = AlphaImage::new(8, 4);
        assert_eq!(img.data().len(), 32);
        assert!(img.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn row_views_the_right_bytes() {
        let mut img = AlphaImage::new(4, 3);
        img.rows_mut(1, 1).fill(7);
        assert!(img.row(0).iter().all(|&b| b == 0));
        assert!(img.row(1).iter().all(|&b| b == 7));
        assert!(img.row(2).iter().all(|&b| b == 0));
    }
}
