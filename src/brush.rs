// Brush state and the disc stamp.
// Visual: every stamp is a hard-edged filled circle in the current color.

use crate::palette::Palette;
use crate::types::FrameBuffer;

/// Current radius and color. Radius only changes through `adjust_radius`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Brush {
    pub radius: i32,
    pub color: u32,
    min_radius: i32,
    max_radius: Option<i32>,
}

impl Brush {
    pub fn new(radius: i32, color: u32, min_radius: i32, max_radius: Option<i32>) -> Self {
        Self { radius, color, min_radius, max_radius }
    }

    /// Grow or shrink by `delta` wheel notches, then clamp.
    /// Visual: the next stamp is bigger/smaller; the HUD number follows.
    pub fn adjust_radius(&mut self, delta: i32) {
        let mut r = self.radius.saturating_add(delta).max(self.min_radius);
        if let Some(max) = self.max_radius {
            r = r.min(max.max(self.min_radius));
        }
        self.radius = r;
    }
}

/// Stamp a filled disc of `radius` centered at (cx,cy), skipping the palette strip.
///
/// The scan box is `[cy-radius, cy+radius) × [cx-radius, cx+radius)` and a pixel is
/// inside when `dx² + dy² ≤ radius²`. A radius of zero or less paints nothing.
pub fn stamp(fb: &mut FrameBuffer, palette: &Palette, cx: i32, cy: i32, radius: i32, color: u32) {
    if radius <= 0 {
        return;
    }
    let r2 = i64::from(radius) * i64::from(radius);
    // Scan box clipped to the surface; pixels outside it could never be written.
    let y0 = cy.saturating_sub(radius).max(0);
    let y1 = cy.saturating_add(radius).min(fb.height as i32);
    let x0 = cx.saturating_sub(radius).max(0);
    let x1 = cx.saturating_add(radius).min(fb.width as i32);
    for y in y0..y1 {
        let dy = i64::from(y) - i64::from(cy);
        for x in x0..x1 {
            let dx = i64::from(x) - i64::from(cx);
            if dx * dx + dy * dy > r2 {
                continue;
            }
            if palette.contains(x, y) {
                continue;
            }
            fb.put_pixel(x, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_RADIUS, MIN_RADIUS, PALETTE_COLORS, SWATCH};
    use proptest::prelude::*;

    fn palette() -> Palette {
        Palette::new(PALETTE_COLORS.to_vec(), SWATCH)
    }

    fn count(fb: &FrameBuffer, color: u32) -> usize {
        fb.pixels.iter().filter(|&&p| p == color).count()
    }

    #[test]
    fn stamp_fills_exact_disc() {
        let mut fb = FrameBuffer::new(200, 200, 0);
        stamp(&mut fb, &palette(), 100, 100, 20, 0xFFFF00);

        assert_eq!(fb.pixel(100, 100), Some(0xFFFF00));
        assert_eq!(fb.pixel(80, 100), Some(0xFFFF00)); // left edge, dx = -20
        assert_eq!(fb.pixel(100, 80), Some(0xFFFF00)); // top edge
        assert_eq!(fb.pixel(120, 100), Some(0)); // scan box is half-open
        assert_eq!(fb.pixel(100, 120), Some(0));
        assert_eq!(fb.pixel(85, 85), Some(0)); // 15² + 15² > 20²
        assert_eq!(fb.pixel(86, 86), Some(0xFFFF00)); // 14² + 14² ≤ 20²

        let expected = (-20..20)
            .flat_map(|dy: i32| (-20..20).map(move |dx: i32| (dx, dy)))
            .filter(|(dx, dy)| dx * dx + dy * dy <= 400)
            .count();
        assert_eq!(count(&fb, 0xFFFF00), expected);
    }

    #[test]
    fn non_positive_radius_is_noop() {
        let mut fb = FrameBuffer::new(50, 50, 0);
        stamp(&mut fb, &palette(), 25, 40, 0, 1);
        stamp(&mut fb, &palette(), 25, 40, -5, 1);
        assert_eq!(count(&fb, 1), 0);
    }

    #[test]
    fn stamp_near_edges_is_clipped() {
        let mut fb = FrameBuffer::new(100, 100, 0);
        stamp(&mut fb, &palette(), 0, 99, 10, 3);
        stamp(&mut fb, &palette(), -500, 5000, 10, 3);
        assert_eq!(fb.pixel(0, 99), Some(3));
        assert_eq!(fb.pixels.len(), 100 * 100);
    }

    #[test]
    fn stamp_straddling_palette_leaves_strip_alone() {
        let p = palette();
        let mut fb = FrameBuffer::new(300, 100, 0);
        p.render(&mut fb);
        stamp(&mut fb, &p, 100, 40, 20, 0xABCDEF);
        // Below the strip got paint, the strip kept its swatches.
        assert_eq!(fb.pixel(100, 40), Some(0xABCDEF));
        assert_eq!(fb.pixel(100, 29), Some(PALETTE_COLORS[3]));
        assert_eq!(fb.pixel(100, 30), Some(0xABCDEF));
    }

    #[test]
    fn huge_radius_near_integer_limits_does_not_overflow() {
        let open = Palette::new(Vec::new(), SWATCH);
        let mut fb = FrameBuffer::new(10, 10, 0);
        stamp(&mut fb, &open, 5, 5, i32::MAX, 4);
        assert_eq!(count(&fb, 4), 100);

        let mut fb = FrameBuffer::new(10, 10, 0);
        stamp(&mut fb, &open, i32::MIN + 1, i32::MAX - 1, i32::MAX, 4);
        assert_eq!(count(&fb, 4), 0);

        let mut b = Brush::new(20, 0, MIN_RADIUS, None);
        b.adjust_radius(i32::MAX);
        assert_eq!(b.radius, i32::MAX);
    }

    #[test]
    fn classic_brush_has_only_lower_bound() {
        let mut b = Brush::new(20, 0, MIN_RADIUS, None);
        b.adjust_radius(100);
        assert_eq!(b.radius, 120);
        b.adjust_radius(-1000);
        assert_eq!(b.radius, MIN_RADIUS);
    }

    proptest! {
        #[test]
        fn radius_stays_within_bounds(deltas in prop::collection::vec(-15i32..15, 0..64)) {
            let mut b = Brush::new(20, 0, MIN_RADIUS, Some(MAX_RADIUS));
            for d in deltas {
                b.adjust_radius(d);
                prop_assert!(b.radius >= MIN_RADIUS && b.radius <= MAX_RADIUS);
            }
        }

        #[test]
        fn classic_radius_never_below_min(deltas in prop::collection::vec(-50i32..50, 0..64)) {
            let mut b = Brush::new(20, 0, MIN_RADIUS, None);
            for d in deltas {
                b.adjust_radius(d);
                prop_assert!(b.radius >= MIN_RADIUS);
            }
        }

        #[test]
        fn stamp_inside_palette_never_touches_strip(
            x in 0..(PALETTE_COLORS.len() as i32 * SWATCH),
            y in 0..SWATCH,
            radius in 1..60i32,
        ) {
            let p = palette();
            let mut fb = FrameBuffer::new(400, 200, 0);
            p.render(&mut fb);
            let before = fb.clone();
            stamp(&mut fb, &p, x, y, radius, 0x010203);
            for py in 0..SWATCH {
                for px in 0..p.strip_width() {
                    prop_assert_eq!(fb.pixel(px, py), before.pixel(px, py));
                }
            }
        }
    }
}
