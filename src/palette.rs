// The color strip in the top-left corner.
// Visual: a row of solid squares; clicking one picks its color.

use crate::types::FrameBuffer;

#[derive(Clone, Debug)]
pub struct Palette {
    colors: Vec<u32>,
    swatch: i32, // side length of each square (pixels)
}

impl Palette {
    pub fn new(colors: Vec<u32>, swatch: i32) -> Self {
        Self { colors, swatch }
    }

    /// Width of the whole strip; the HUD starts right after it.
    pub fn strip_width(&self) -> i32 {
        self.colors.len() as i32 * self.swatch
    }

    pub fn color(&self, index: usize) -> Option<u32> {
        self.colors.get(index).copied()
    }

    /// Draw every swatch over whatever is underneath.
    /// Visual: the strip always looks fresh, even if a stroke ran under it.
    pub fn render(&self, fb: &mut FrameBuffer) {
        for (i, &color) in self.colors.iter().enumerate() {
            fb.fill_rect(i as i32 * self.swatch, 0, self.swatch, self.swatch, color);
        }
    }

    /// Which swatch, if any, sits under (x,y).
    pub fn hit_test(&self, x: i32, y: i32) -> Option<usize> {
        if self.contains(x, y) {
            Some((x / self.swatch) as usize)
        } else {
            None
        }
    }

    /// True inside the strip. Brush stamps never write here.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.strip_width() && y >= 0 && y < self.swatch
    }
}
