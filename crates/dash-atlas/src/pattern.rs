//! Dash pattern identity and validation.

/// End-cap geometry for dash segments.
///
/// The cap style changes how the rasterizer shapes distance across the
/// stripe band: `Butt` is a single flat row, `Round` spreads the pattern
/// over a band of rows so dash ends sample as rounded.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

/// Full cache identity of a stripe: cap style plus the exact bit pattern of
/// every dash/gap length, in order.
///
/// Deriving `Hash`/`Eq` over the whole identity means hash collisions are
/// resolved by map equality probing — two distinct patterns can never
/// silently share a stripe.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub(crate) struct PatternKey {
    cap: LineCap,
    lengths: Vec<u32>,
}

impl PatternKey {
    pub(crate) fn new(pattern: &[f32], cap: LineCap) -> Self {
        Self {
            cap,
            lengths: pattern.iter().map(|len| len.to_bits()).collect(),
        }
    }
}

/// Returns `true` if every entry is a usable dash/gap length.
///
/// The rasterizer's boundary walk assumes strictly positive, finite lengths;
/// a zero entry would never advance the segment boundary.
pub(crate) fn is_valid(pattern: &[f32]) -> bool {
    !pattern.is_empty() && pattern.iter().all(|len| len.is_finite() && *len > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── key identity ──────────────────────────────────────────────────────

    #[test]
    fn equal_patterns_equal_keys() {
        let a = PatternKey::new(&[4.0, 2.0], LineCap::Round);
        let b = PatternKey::new(&[4.0, 2.0], LineCap::Round);
        assert_eq!(a, b);
    }

    #[test]
    fn cap_style_is_part_of_the_key() {
        let round = PatternKey::new(&[4.0, 2.0], LineCap::Round);
        let butt = PatternKey::new(&[4.0, 2.0], LineCap::Butt);
        assert_ne!(round, butt);
    }

    #[test]
    fn entry_order_is_part_of_the_key() {
        let a = PatternKey::new(&[1.0, 2.0], LineCap::Butt);
        let b = PatternKey::new(&[2.0, 1.0], LineCap::Butt);
        assert_ne!(a, b);
    }

    // ── validation ────────────────────────────────────────────────────────

    #[test]
    fn accepts_positive_finite_lengths() {
        assert!(is_valid(&[3.0, 1.0, 3.0]));
        assert!(is_valid(&[0.25]));
    }

    #[test]
    fn rejects_empty_pattern() {
        assert!(!is_valid(&[]));
    }

    #[test]
    fn rejects_zero_negative_and_non_finite() {
        assert!(!is_valid(&[4.0, 0.0]));
        assert!(!is_valid(&[-1.0, 2.0]));
        assert!(!is_valid(&[f32::NAN]));
        assert!(!is_valid(&[f32::INFINITY, 1.0]));
    }
}
