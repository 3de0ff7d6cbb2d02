//! SDL2 backend: platform bootstrap, asset loading, audio controls, and
//! the game loop driver. Embeddings implement [`Game`] and hand it to
//! [`Engine::run`].

pub mod asset;
pub mod audio;
pub mod engine;
pub mod error;
pub mod game;
pub mod input;
pub mod render;
pub mod timer;

pub use engine::{Engine, EngineConfig};
pub use error::{AssetError, EngineError};
pub use game::Game;
