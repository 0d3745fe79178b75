// The status strip to the right of the palette.
// Visual: "Brush size: 20" in white on a dark bar; after pressing S it briefly
// shows whether the save worked.

use crate::error::Error;
use crate::types::FrameBuffer;
use fontdue::{Font, FontSettings};
use log::{info, warn};

/// Left padding between the palette and the text.
const TEXT_PAD_X: i32 = 8;
/// Glyph coverage at or above this is drawn as a solid pixel.
const COVERAGE_THRESHOLD: u8 = 128;

pub struct Hud {
    font: Option<Font>,
    font_size: f32,
    strip_x: i32,    // where the strip starts (end of the palette)
    strip_h: i32,    // same height as a swatch
    background: u32,
    text_color: u32,
    status: Option<(String, u32)>, // message + frames left
}

/// Try each path in order and keep the first font that parses.
pub fn load_font(paths: &[&str]) -> Result<Font, Error> {
    for path in paths {
        let Ok(data) = std::fs::read(path) else { continue };
        match Font::from_bytes(data, FontSettings::default()) {
            Ok(font) => {
                info!("loaded HUD font: {path}");
                return Ok(font);
            }
            Err(e) => warn!("skipping font {path}: {e}"),
        }
    }
    Err(Error::FontLoad(format!("none of {} candidate fonts could be loaded", paths.len())))
}

impl Hud {
    pub fn new(font: Option<Font>, font_size: f32, strip_x: i32, strip_h: i32) -> Self {
        Self {
            font,
            font_size,
            strip_x,
            strip_h,
            background: crate::config::HUD_BACKGROUND,
            text_color: crate::config::HUD_TEXT_COLOR,
            status: None,
        }
    }

    /// Build the HUD, falling back to a text-less strip when no font loads.
    /// The failure is logged here, once.
    pub fn load(paths: &[&str], font_size: f32, strip_x: i32, strip_h: i32) -> Self {
        let font = match load_font(paths) {
            Ok(font) => Some(font),
            Err(e) => {
                warn!("{e}; brush size readout disabled");
                None
            }
        };
        Self::new(font, font_size, strip_x, strip_h)
    }

    /// Show `message` instead of the brush readout for `frames` frames.
    pub fn set_status(&mut self, message: impl Into<String>, frames: u32) {
        self.status = Some((message.into(), frames));
    }

    /// The line the HUD would draw this frame.
    pub fn text(&self, radius: i32) -> String {
        match &self.status {
            Some((msg, _)) => msg.clone(),
            None => format!("Brush size: {radius}"),
        }
    }

    /// Clear the strip, then draw the current line on it.
    pub fn render(&mut self, fb: &mut FrameBuffer, radius: i32) {
        let strip_w = fb.width as i32 - self.strip_x;
        fb.fill_rect(self.strip_x, 0, strip_w, self.strip_h, self.background);

        let text = self.text(radius);
        if let Some(font) = &self.font {
            let y = (self.strip_h - self.font_size as i32) / 2;
            draw_text(fb, font, self.font_size, self.strip_x + TEXT_PAD_X, y, &text, self.text_color);
        }

        let expired = match &mut self.status {
            Some((_, frames)) => {
                *frames = frames.saturating_sub(1);
                *frames == 0
            }
            None => false,
        };
        if expired {
            self.status = None;
        }
    }
}

/// Draw `text` with its em box starting at (x,y). No blending: a glyph pixel is
/// either fully `color` or left alone.
fn draw_text(fb: &mut FrameBuffer, font: &Font, size: f32, x: i32, y: i32, text: &str, color: u32) {
    let mut cursor_x = x as f32;
    for ch in text.chars().filter(|c| !c.is_control()) {
        let (metrics, bitmap) = font.rasterize(ch, size);
        let gx0 = cursor_x as i32 + metrics.xmin;
        let gy0 = y + (size as i32 - metrics.ymin - metrics.height as i32);
        for gy in 0..metrics.height {
            for gx in 0..metrics.width {
                if bitmap[gy * metrics.width + gx] >= COVERAGE_THRESHOLD {
                    fb.put_pixel(gx0 + gx as i32, gy0 + gy as i32, color);
                }
            }
        }
        cursor_x += metrics.advance_width;
    }
}
