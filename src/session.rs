// The interaction state machine: turns input events into paint on the surface.
//
// Side effects that need the window or the disk (present, save, quit) are
// returned as an `Action` so everything here runs without a display.

use crate::brush::{stamp, Brush};
use crate::config::Config;
use crate::palette::Palette;
use crate::stroke::interpolate_and_stamp;
use crate::types::FrameBuffer;
use log::debug;

/// Input the session understands, already in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Quit,
    PointerDown { x: i32, y: i32 },
    PointerUp,
    PointerMove { x: i32, y: i32 },
    /// Signed notches; positive grows the brush.
    Wheel(i32),
    Key(Key),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Tab,
    S,
}

/// What the loop has to do after an event was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    None,
    /// The canvas was wiped; show it right away.
    Present,
    /// Write the surface to disk.
    Save,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerState {
    Idle,
    Painting,
}

/// Brush, palette and pointer tracking for one painting session.
#[derive(Clone, Debug)]
pub struct Session {
    pub brush: Brush,
    pub palette: Palette,
    pub state: PointerState,
    pub last_position: (i32, i32),
    clean_color: u32,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            brush: Brush::new(
                config.start_radius,
                config.start_color,
                config.min_radius,
                config.max_radius,
            ),
            palette: Palette::new(config.palette.clone(), config.swatch),
            state: PointerState::Idle,
            last_position: (0, 0),
            clean_color: config.clean_color,
        }
    }

    /// Apply one event to the surface and to the session state.
    pub fn handle(&mut self, fb: &mut FrameBuffer, event: Event) -> Action {
        match event {
            Event::Quit => return Action::Quit,
            Event::PointerDown { x, y } => {
                // A press on a swatch still arms painting; the stamp below is
                // simply excluded from the strip.
                if let Some(idx) = self.palette.hit_test(x, y) {
                    if let Some(color) = self.palette.color(idx) {
                        debug!("picked swatch {idx}: {color:06x}");
                        self.brush.color = color;
                    }
                } else {
                    stamp(fb, &self.palette, x, y, self.brush.radius, self.brush.color);
                }
                self.last_position = (x, y);
                self.state = PointerState::Painting;
            }
            Event::PointerUp => self.state = PointerState::Idle,
            Event::PointerMove { x, y } => {
                if self.state == PointerState::Painting {
                    // Walk from the new sample back to the previous one; the
                    // visited points depend on direction.
                    let (lx, ly) = self.last_position;
                    interpolate_and_stamp(
                        fb,
                        &self.palette,
                        x, y,
                        lx, ly,
                        self.brush.radius,
                        self.brush.color,
                    );
                }
                self.last_position = (x, y);
            }
            Event::Wheel(delta) => {
                self.brush.adjust_radius(delta);
                debug!("brush radius now {}", self.brush.radius);
            }
            Event::Key(Key::Tab) => {
                self.clear(fb);
                return Action::Present;
            }
            Event::Key(Key::S) => return Action::Save,
        }
        Action::None
    }

    /// Wipe the canvas and put the palette back on top.
    pub fn clear(&self, fb: &mut FrameBuffer) {
        debug!("clearing canvas");
        fb.fill(self.clean_color);
        self.palette.render(fb);
    }
}
