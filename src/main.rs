// What you SEE:
// • A black 900x600 canvas with a row of color swatches in the top-left corner.
// • Hold Left Mouse to paint; click a swatch to switch color.
// • Mouse wheel changes the brush size (shown in the strip next to the palette).
// • TAB wipes the canvas. S saves it as paint.bmp. ESC or closing the window quits.

mod app;
mod brush;
mod config;
mod draw;
mod error;
mod hud;
mod logging;
mod palette;
mod session;
mod snapshot;
mod stroke;
mod types;

use app::App;
use config::Config;
use draw::Drawer;
use error::Error;
use hud::Hud;
use log::info;

fn main() -> Result<(), Error> {
    logging::init_logging();

    let config = Config::selected();

    /* --- Window setup ---
       Visual: the window opens; a failure here is the only fatal one. */
    let mut drawer = Drawer::new(config.title, config.width, config.height)?;
    info!(
        "opened {}x{} window '{}', radius {}..{}",
        config.width,
        config.height,
        config.title,
        config.min_radius,
        config.max_radius.map_or_else(|| String::from("∞"), |m| m.to_string()),
    );

    /* --- HUD ---
       Visual: without a usable font the strip stays blank, painting still works. */
    let hud = config.hud.then(|| {
        let strip_x = config.palette.len() as i32 * config.swatch;
        Hud::load(config.font_paths, config.font_size, strip_x, config.swatch)
    });

    /* ------------------------------ Main loop ------------------------------ */
    let mut app = App::new(&config, hud);
    app.run(&mut drawer)
}
