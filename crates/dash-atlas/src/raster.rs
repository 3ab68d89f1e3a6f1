//! Signed-distance rasterization of dash stripes.
//!
//! A stripe is a horizontal band of the atlas encoding, per pixel, the
//! distance to the nearest dash boundary. The renderer samples it with
//! linear filtering and thresholds around the 128 baseline, which yields
//! antialiased dashes at any zoom.

use crate::atlas::StripePosition;
use crate::image::AlphaImage;
use crate::pattern::LineCap;

/// Across-band radius in rows for round caps.
const ROUND_RADIUS_ROWS: u32 = 7;

/// Zero-distance baseline; lets one unsigned byte carry signed distance.
const DISTANCE_OFFSET: i32 = 128;

/// Across-band radius in rows (`n` in the stripe position formulas).
pub(crate) fn cap_radius_rows(cap: LineCap) -> u32 {
    match cap {
        LineCap::Butt => 0,
        LineCap::Round => ROUND_RADIUS_ROWS,
    }
}

/// Number of atlas rows a stripe occupies.
pub(crate) fn band_rows(cap: LineCap) -> u32 {
    2 * cap_radius_rows(cap) + 1
}

/// Fills the reserved band with distance intensities and returns the
/// stripe's atlas position.
///
/// `pattern` must be validated (non-empty, all lengths finite and positive)
/// and the band `[start_row, start_row + band_rows(cap))` must already be
/// reserved.
pub(crate) fn fill_band(
    image: &mut AlphaImage,
    pattern: &[f32],
    cap: LineCap,
    start_row: u32,
) -> StripePosition {
    let n = cap_radius_rows(cap) as i32;
    let width = image.width();
    let atlas_height = image.height();

    let length: f32 = pattern.iter().sum();
    // Pattern-space to pixel-space scale; one pattern repeat spans the atlas.
    let stretch = width as f32 / length;
    let half_width = stretch * 0.5;
    // An odd entry count means the first and last parts are both dashes and
    // must join seamlessly when the stripe tiles.
    let odd_length = pattern.len() % 2 == 1;

    let band = image.rows_mut(start_row, band_rows(cap));

    for y in -n..=n {
        let row_start = (n + y) as usize * width as usize;
        let row = &mut band[row_start..row_start + width as usize];

        // Current segment boundaries in pattern space. Odd-length patterns
        // start mid-dash: the first segment begins one trailing entry early.
        let mut left = 0.0_f32;
        let mut right = pattern[0];
        let mut part = 1_usize;

        if odd_length {
            left -= pattern[pattern.len() - 1];
        }

        for x in 0..width {
            while right < x as f32 / stretch {
                left = right;
                right += pattern[part];

                // Crossing into the final segment of an odd pattern: extend
                // it by the leading entry so the seam carries no boundary.
                if odd_length && part == pattern.len() - 1 {
                    right += pattern[0];
                }

                part += 1;
            }

            let dist_left = (x as f32 - left * stretch).abs();
            let dist_right = (x as f32 - right * stretch).abs();
            let dist = dist_left.min(dist_right);
            let inside = part % 2 == 1;

            let signed_distance = match cap {
                LineCap::Round => {
                    let dist_middle = if n > 0 {
                        y as f32 / n as f32 * (half_width + 1.0)
                    } else {
                        0.0
                    };
                    if inside {
                        let dist_edge = half_width - dist_middle.abs();
                        (dist * dist + dist_edge * dist_edge).sqrt()
                    } else {
                        half_width - (dist * dist + dist_middle * dist_middle).sqrt()
                    }
                }
                LineCap::Butt => {
                    if inside {
                        dist
                    } else {
                        -dist
                    }
                }
            };

            // Truncate before biasing (matches the renderer's expectations
            // for the encoded field).
            row[x as usize] = (signed_distance as i32 + DISTANCE_OFFSET).clamp(0, 255) as u8;
        }
    }

    StripePosition {
        y: (0.5 + start_row as f32 + n as f32) / atlas_height as f32,
        height: (2 * n) as f32 / atlas_height as f32,
        width: length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(width: u32, height: u32, pattern: &[f32], cap: LineCap) -> (AlphaImage, StripePosition) {
        let mut image = AlphaImage::new(width, height);
        let position = fill_band(&mut image, pattern, cap, 0);
        (image, position)
    }

    // ── butt caps ─────────────────────────────────────────────────────────

    #[test]
    fn butt_writes_a_single_row() {
        let (image, _) = fill(64, 16, &[4.0, 2.0], LineCap::Butt);
        assert!(image.row(0).iter().any(|&b| b != 0));
        for row in 1..16 {
            assert!(image.row(row).iter().all(|&b| b == 0), "row {row} touched");
        }
    }

    #[test]
    fn butt_steps_across_the_dash_boundary() {
        // Pattern [4, 2], width 64 → stretch 64/6. Dash covers pattern space
        // [0, 4), gap [4, 6).
        let (image, _) = fill(64, 1, &[4.0, 2.0], LineCap::Butt);
        let row = image.row(0);
        // x = 16 → t = 1.5, well inside the dash.
        assert!(row[16] > 128, "dash interior should encode positive distance");
        // x = 48 → t = 4.5, inside the gap.
        assert!(row[48] < 128, "gap interior should encode negative distance");
    }

    #[test]
    fn butt_position_formula() {
        let (_, pos) = fill(64, 32, &[4.0, 2.0], LineCap::Butt);
        assert_eq!(pos.y, 0.5 / 32.0);
        assert_eq!(pos.height, 0.0);
        assert_eq!(pos.width, 6.0);
    }

    // ── round caps ────────────────────────────────────────────────────────

    #[test]
    fn round_fills_the_whole_band() {
        let (image, _) = fill(64, 16, &[4.0, 2.0], LineCap::Round);
        for row in 0..15 {
            assert!(image.row(row).iter().any(|&b| b != 0), "row {row} untouched");
        }
        assert!(image.row(15).iter().all(|&b| b == 0));
    }

    #[test]
    fn round_varies_across_the_band() {
        // The rounded profile must differ between the band center and edge;
        // a butt stripe has no across-band variation to compare against.
        let (image, _) = fill(64, 16, &[4.0, 2.0], LineCap::Round);
        assert_ne!(image.row(0), image.row(7));
    }

    #[test]
    fn round_differs_from_butt_for_the_same_pattern() {
        let (round, _) = fill(64, 16, &[4.0, 2.0], LineCap::Round);
        let (butt, _) = fill(64, 16, &[4.0, 2.0], LineCap::Butt);
        // Compare the butt row with the round band's center row.
        assert_ne!(round.row(7), butt.row(0));
    }

    #[test]
    fn round_position_formula() {
        let (_, pos) = fill(256, 64, &[2.0, 2.0], LineCap::Round);
        assert_eq!(pos.y, 7.5 / 64.0);
        assert_eq!(pos.height, 14.0 / 64.0);
        assert_eq!(pos.width, 4.0);
    }

    // ── odd-length wraparound ─────────────────────────────────────────────

    #[test]
    fn odd_pattern_joins_seamlessly() {
        // [3, 1, 3]: first and last entries are both dashes and merge into a
        // single 6-long dash across the tile seam. Width 70 → stretch 10.
        let (image, _) = fill(70, 1, &[3.0, 1.0, 3.0], LineCap::Butt);
        let row = image.row(0);

        // Both sides of the seam classify as inside a dash.
        assert!(row[0] >= 128);
        assert!(row[69] >= 128);

        // And the encoded distance is continuous across it: x = 0 and
        // x = 69 are symmetric about the merged dash's center.
        let delta = (row[0] as i32 - row[69] as i32).abs();
        assert!(delta <= 2, "seam discontinuity: {} vs {}", row[0], row[69]);
    }

    #[test]
    fn even_pattern_has_a_boundary_at_the_seam() {
        // [3, 3]: the tile starts with a dash and ends with a gap.
        let (image, _) = fill(60, 1, &[3.0, 3.0], LineCap::Butt);
        let row = image.row(0);
        assert!(row[5] > 128);
        assert!(row[55] < 128);
    }

    // ── encoding bounds ───────────────────────────────────────────────────

    #[test]
    fn wide_stripes_saturate_instead_of_wrapping() {
        // stretch = 512/2 = 256, so distances reach ±128 at segment centers
        // and exceed the byte range; the clamp must saturate at 0 and 255.
        let (image, _) = fill(512, 1, &[1.0, 1.0], LineCap::Butt);
        let row = image.row(0);
        assert!(row.contains(&255));
        assert!(row.contains(&0));
    }
}
