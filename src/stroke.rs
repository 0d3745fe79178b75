// Fills the gap between two pointer samples.
// Visual: a fast drag still paints one unbroken band, not a row of dots.

use crate::brush::stamp;
use crate::palette::Palette;
use crate::types::FrameBuffer;

/// Integer lattice points from (x0,y0) to (x1,y1), both ends included.
/// Consecutive points differ by at most one unit on each axis.
#[derive(Clone, Debug)]
pub struct LinePoints {
    x: i32,
    y: i32,
    x1: i32,
    y1: i32,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    done: bool,
}

impl LinePoints {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = (y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let err = (if dx > dy { dx } else { -dy }) / 2;
        Self { x: x0, y: y0, x1, y1, dx, dy, sx, sy, err, done: false }
    }
}

impl Iterator for LinePoints {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.done {
            return None;
        }
        let here = (self.x, self.y);
        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
            return Some(here);
        }
        let e2 = self.err;
        if e2 > -self.dx { self.err -= self.dy; self.x += self.sx; }
        if e2 < self.dy { self.err += self.dx; self.y += self.sy; }
        Some(here)
    }
}

/// Stamp the brush at every point of the line from (x0,y0) to (x1,y1).
/// Visual: the disc is dragged pixel by pixel along the segment.
#[allow(clippy::too_many_arguments)]
pub fn interpolate_and_stamp(
    fb: &mut FrameBuffer,
    palette: &Palette,
    x0: i32, y0: i32,
    x1: i32, y1: i32,
    radius: i32,
    color: u32,
) {
    for (x, y) in LinePoints::new(x0, y0, x1, y1) {
        stamp(fb, palette, x, y, radius, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PALETTE_COLORS, SWATCH};
    use proptest::prelude::*;

    #[test]
    fn single_point_line() {
        let pts: Vec<_> = LinePoints::new(5, 7, 5, 7).collect();
        assert_eq!(pts, vec![(5, 7)]);
    }

    #[test]
    fn shallow_line_steps() {
        let pts: Vec<_> = LinePoints::new(0, 0, 3, 1).collect();
        assert_eq!(pts, vec![(0, 0), (1, 0), (2, 1), (3, 1)]);
    }

    #[test]
    fn diagonal_and_reverse() {
        let pts: Vec<_> = LinePoints::new(3, 3, 0, 0).collect();
        assert_eq!(pts, vec![(3, 3), (2, 2), (1, 1), (0, 0)]);
    }

    #[test]
    fn horizontal_drag_paints_solid_band() {
        let palette = Palette::new(PALETTE_COLORS.to_vec(), SWATCH);
        let mut fb = FrameBuffer::new(900, 600, 0);
        interpolate_and_stamp(&mut fb, &palette, 400, 300, 420, 300, 20, 0xFFFF00);
        for x in 380..440 {
            assert_eq!(fb.pixel(x, 300), Some(0xFFFF00), "gap at x={x}");
        }
        assert_eq!(fb.pixel(379, 300), Some(0));
        assert_eq!(fb.pixel(440, 300), Some(0));
    }

    #[test]
    fn long_jump_leaves_no_gap_on_the_centerline() {
        let palette = Palette::new(PALETTE_COLORS.to_vec(), SWATCH);
        let mut fb = FrameBuffer::new(900, 600, 0);
        interpolate_and_stamp(&mut fb, &palette, 50, 590, 880, 60, 1, 0xFF);
        for (x, y) in LinePoints::new(50, 590, 880, 60) {
            assert_eq!(fb.pixel(x, y), Some(0xFF));
        }
    }

    proptest! {
        #[test]
        fn points_are_eight_connected(
            x0 in -2000i32..2000, y0 in -2000i32..2000,
            x1 in -2000i32..2000, y1 in -2000i32..2000,
        ) {
            let pts: Vec<_> = LinePoints::new(x0, y0, x1, y1).collect();
            prop_assert_eq!(pts.first().copied(), Some((x0, y0)));
            prop_assert_eq!(pts.last().copied(), Some((x1, y1)));
            prop_assert_eq!(pts.len() as i32, (x1 - x0).abs().max((y1 - y0).abs()) + 1);
            for w in pts.windows(2) {
                let (ax, ay) = w[0];
                let (bx, by) = w[1];
                prop_assert!((ax - bx).abs() <= 1 && (ay - by).abs() <= 1);
                prop_assert!(w[0] != w[1]);
            }
        }
    }
}
