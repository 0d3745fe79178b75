// One error type for the whole app.
// Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String),   // Creating the window failed (fatal)
    #[error("Window update error: {0}")]
    WindowUpdate(String), // Pushing the buffer to the window failed
    #[error("Font load error: {0}")]
    FontLoad(String),     // No usable HUD font; the HUD runs without text
    #[error("Save error ({path}): {reason}")]
    Save { path: String, reason: String }, // Writing the bitmap failed
}
