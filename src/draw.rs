// Window + input plumbing.
// Visual effects provided here:
// 1) A fixed-size window that shows the surface.
// 2) Mouse/keyboard state turned into the event stream the session understands.

use crate::error::Error;
use crate::session::{Event, Key as PaintKey};
use crate::types::FrameBuffer;
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

/// What the session loop needs from a display.
pub trait Platform {
    /// Everything that happened since the last call, oldest first.
    fn poll_events(&mut self) -> Vec<Event>;
    /// Push the pixels for this frame to the screen.
    fn present(&mut self, fb: &FrameBuffer) -> Result<(), Error>;
}

/// Raw input state for one frame, as the window reports it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    pub open: bool,
    pub escape: bool,
    pub mouse_pos: Option<(i32, i32)>,
    pub left_down: bool,
    pub scroll_y: f32,
    pub tab: bool,
    pub s: bool,
}

/// Remembers last frame's pointer so state can be diffed into events.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputTracker {
    down: bool,
    pos: Option<(i32, i32)>,
}

impl InputTracker {
    /// Turn this frame's snapshot into events, in the order a user would cause them:
    /// motion, button edge, wheel, keys, quit.
    pub fn translate(&mut self, input: &InputSnapshot) -> Vec<Event> {
        let mut events = Vec::new();

        if let Some((x, y)) = input.mouse_pos {
            if self.pos != Some((x, y)) {
                events.push(Event::PointerMove { x, y });
                self.pos = Some((x, y));
            }
        }

        if input.left_down != self.down {
            match (input.left_down, self.pos) {
                (true, Some((x, y))) => {
                    events.push(Event::PointerDown { x, y });
                    self.down = true;
                }
                // No position yet: hold the press until one arrives.
                (true, None) => {}
                (false, _) => {
                    events.push(Event::PointerUp);
                    self.down = false;
                }
            }
        }

        let notches = wheel_notches(input.scroll_y);
        if notches != 0 {
            events.push(Event::Wheel(notches));
        }

        if input.tab { events.push(Event::Key(PaintKey::Tab)); }
        if input.s { events.push(Event::Key(PaintKey::S)); }

        if !input.open || input.escape {
            events.push(Event::Quit);
        }
        events
    }
}

/// Scroll amount to whole notches; any non-zero scroll moves at least one.
fn wheel_notches(y: f32) -> i32 {
    if y == 0.0 || !y.is_finite() {
        return 0;
    }
    let n = y.round() as i32;
    if n == 0 { y.signum() as i32 } else { n }
}

pub struct Drawer {
    window: Window, // the on-screen window you see
    tracker: InputTracker,
}

impl Drawer {
    /// Create a fixed-size, non-resizable window.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let options = WindowOptions { resize: false, ..WindowOptions::default() };
        let window = Window::new(title, width, height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window, tracker: InputTracker::default() })
    }

    fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            open: self.window.is_open(),
            escape: self.window.is_key_down(Key::Escape),
            // Pass keeps coordinates flowing while a drag leaves the window.
            mouse_pos: self
                .window
                .get_mouse_pos(MouseMode::Pass)
                .map(|(x, y)| (x.floor() as i32, y.floor() as i32)),
            left_down: self.window.get_mouse_down(MouseButton::Left),
            scroll_y: self.window.get_scroll_wheel().map_or(0.0, |(_, y)| y),
            tab: self.window.is_key_pressed(Key::Tab, KeyRepeat::No),
            s: self.window.is_key_pressed(Key::S, KeyRepeat::No),
        }
    }
}

impl Platform for Drawer {
    fn poll_events(&mut self) -> Vec<Event> {
        let input = self.snapshot();
        self.tracker.translate(&input)
    }

    /// Visual: the window immediately displays the new image.
    fn present(&mut self, fb: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&fb.pixels, fb.width, fb.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }
}
