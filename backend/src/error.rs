use std::path::PathBuf;

use sdl2::video::WindowBuildError;
use sdl2::IntegerOrSdlError;
use thiserror::Error;

/// Failures raised by the engine itself: subsystem bootstrap, window and
/// renderer creation, and mixer channel control. Bootstrap failures are
/// unrecoverable by design; embeddings are expected to log them and exit.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("failed to build window: {0}")]
    Window(#[from] WindowBuildError),

    #[error("failed to build renderer: {0}")]
    Canvas(#[from] IntegerOrSdlError),

    #[error("failed to initialize SDL_ttf: {0}")]
    TtfInit(#[from] sdl2::ttf::InitError),

    #[error(transparent)]
    Asset(#[from] AssetError),
}

/// Failures raised by the asset loader. A missing file is reported apart
/// from a file the underlying decoder rejected, so callers can tell a bad
/// path from a corrupt asset.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("failed to render text: {0}")]
    TextRender(String),
}
