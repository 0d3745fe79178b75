// The session loop: drain input, apply it, redraw the overlays, present, sleep.

use crate::config::{Config, STATUS_FRAMES};
use crate::draw::Platform;
use crate::error::Error;
use crate::hud::Hud;
use crate::session::{Action, Session};
use crate::snapshot::save_bitmap;
use crate::types::FrameBuffer;
use log::{error, info};
use std::path::PathBuf;
use std::time::Duration;

pub struct App {
    pub session: Session,
    pub surface: FrameBuffer,
    hud: Option<Hud>,
    save_path: PathBuf,
    frame_delay: Duration,
}

impl App {
    /// Fresh black canvas with the palette already drawn.
    pub fn new(config: &Config, hud: Option<Hud>) -> Self {
        let session = Session::new(config);
        let mut surface = FrameBuffer::new(config.width, config.height, config.clean_color);
        session.palette.render(&mut surface);
        Self {
            session,
            surface,
            hud,
            save_path: PathBuf::from(config.save_path),
            frame_delay: config.frame_delay(),
        }
    }

    #[cfg(test)]
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    /// Run frames until a quit event arrives.
    pub fn run<P: Platform>(&mut self, platform: &mut P) -> Result<(), Error> {
        platform.present(&self.surface)?;
        while self.frame(platform)? {
            std::thread::sleep(self.frame_delay);
        }
        info!("session finished");
        Ok(())
    }

    /// One loop iteration. Returns false once the user asked to quit.
    pub fn frame<P: Platform>(&mut self, platform: &mut P) -> Result<bool, Error> {
        let mut keep_going = true;
        for event in platform.poll_events() {
            match self.session.handle(&mut self.surface, event) {
                Action::None => {}
                Action::Present => platform.present(&self.surface)?,
                Action::Save => self.save(),
                Action::Quit => keep_going = false,
            }
        }

        self.session.palette.render(&mut self.surface);
        if let Some(hud) = &mut self.hud {
            hud.render(&mut self.surface, self.session.brush.radius);
        }
        platform.present(&self.surface)?;
        Ok(keep_going)
    }

    /// Write the canvas to disk. A failure is reported but never ends the session.
    fn save(&mut self) {
        let name = self.save_path.display().to_string();
        let status = match save_bitmap(&self.surface, &self.save_path) {
            Ok(()) => {
                println!("The painting has been saved as {name}");
                info!("saved canvas to {name}");
                format!("Saved {name}")
            }
            Err(e) => {
                error!("{e}");
                String::from("Save failed")
            }
        };
        if let Some(hud) = &mut self.hud {
            hud.set_status(status, STATUS_FRAMES);
        }
    }
}
