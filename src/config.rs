// Fixed settings for the paint window. Nothing here is read from disk or the
// command line; change a constant and rebuild.

use std::time::Duration;

pub const WIDTH: usize = 900;
pub const HEIGHT: usize = 600;
pub const TITLE: &str = "ULTRA PAINT";
pub const TARGET_FPS: u32 = 240;

/// Build the plain variant (no radius cap, no HUD) instead of the default one.
pub const CLASSIC: bool = false;

pub const START_RADIUS: i32 = 20;
pub const MIN_RADIUS: i32 = 4;
pub const MAX_RADIUS: i32 = 30;

pub const START_COLOR: u32 = 0x00_FF_FF_00; // yellow
pub const CLEAN_COLOR: u32 = 0x00_00_00_00; // black

/// Side length of one palette swatch (pixels).
pub const SWATCH: i32 = 30;

pub const PALETTE_COLORS: [u32; 8] = [
    0x00_00_00_00, // black
    0x00_FF_FF_FF, // white
    0x00_FF_00_00, // red
    0x00_00_FF_00, // green
    0x00_00_00_FF, // blue
    0x00_00_FF_FF, // cyan
    0x00_FF_00_FF, // magenta
    0x00_FF_FF_00, // yellow
];

pub const SAVE_PATH: &str = "paint.bmp";

/// Candidate fonts for the HUD, tried in order.
pub const FONT_PATHS: &[&str] = &[
    "font.ttf",
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    // macOS
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arial.ttf",
];
pub const FONT_SIZE: f32 = 18.0;

pub const HUD_BACKGROUND: u32 = 0x00_20_20_20;
pub const HUD_TEXT_COLOR: u32 = 0x00_FF_FF_FF;
/// How long a "Saved ..." message stays in the HUD strip.
pub const STATUS_FRAMES: u32 = 480;

/// Everything the session needs to know up front.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub title: &'static str,
    pub target_fps: u32,
    pub start_radius: i32,
    pub start_color: u32,
    pub clean_color: u32,
    pub swatch: i32,
    pub palette: Vec<u32>,
    pub min_radius: i32,
    /// `None` leaves the radius unbounded above (classic behaviour).
    pub max_radius: Option<i32>,
    pub hud: bool,
    pub save_path: &'static str,
    pub font_paths: &'static [&'static str],
    pub font_size: f32,
}

impl Default for Config {
    /// Radius clamped to [MIN_RADIUS, MAX_RADIUS] with the brush-size HUD.
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            title: TITLE,
            target_fps: TARGET_FPS,
            start_radius: START_RADIUS,
            start_color: START_COLOR,
            clean_color: CLEAN_COLOR,
            swatch: SWATCH,
            palette: PALETTE_COLORS.to_vec(),
            min_radius: MIN_RADIUS,
            max_radius: Some(MAX_RADIUS),
            hud: true,
            save_path: SAVE_PATH,
            font_paths: FONT_PATHS,
            font_size: FONT_SIZE,
        }
    }
}

impl Config {
    /// The plain build: no upper radius bound and no HUD.
    pub fn classic() -> Self {
        Self { max_radius: None, hud: false, ..Self::default() }
    }

    /// The variant picked by `CLASSIC`.
    pub fn selected() -> Self {
        if CLASSIC { Self::classic() } else { Self::default() }
    }

    /// Sleep between frames so the loop runs at about `target_fps`.
    pub fn frame_delay(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.target_fps.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_delay_matches_target_rate() {
        let delay = Config::default().frame_delay();
        assert!(delay > Duration::from_micros(4100));
        assert!(delay < Duration::from_micros(4200));
    }

    #[test]
    fn classic_drops_upper_bound_and_hud() {
        let c = Config::classic();
        assert_eq!(c.max_radius, None);
        assert!(!c.hud);
        assert_eq!(c.min_radius, MIN_RADIUS);
        assert_eq!(c.palette, Config::default().palette);
    }

    #[test]
    fn selected_follows_classic_switch() {
        let expected = if CLASSIC { Config::classic() } else { Config::default() };
        assert_eq!(Config::selected(), expected);
    }

    #[test]
    fn palette_strip_fits_inside_window() {
        let c = Config::default();
        assert!(c.palette.len() as i32 * c.swatch <= c.width as i32);
        assert!(c.swatch as usize <= c.height);
    }
}
