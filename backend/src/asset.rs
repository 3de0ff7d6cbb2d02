//! Pass-through asset loaders. Each call decodes the file into a
//! library-managed resource and hands back the owning handle; dropping the
//! handle releases it. There is no caching: loading the same path twice
//! decodes twice and yields two independent handles.

use std::path::Path;

use sdl2::image::LoadTexture;
use sdl2::mixer::{Chunk, Music};
use sdl2::pixels::Color;
use sdl2::render::{Texture, TextureCreator};
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::WindowContext;

use crate::error::AssetError;

fn check_exists(path: &str) -> Result<(), AssetError> {
    if Path::new(path).exists() {
        Ok(())
    } else {
        Err(AssetError::NotFound(path.into()))
    }
}

fn decode_err(path: &str, reason: String) -> AssetError {
    AssetError::Decode {
        path: path.into(),
        reason,
    }
}

/// Loads a font at the given point size.
/// ```no_run
/// # fn demo(engine: &backend::Engine) -> Result<(), backend::AssetError> {
/// let font = backend::asset::load_font(engine.ttf(), "./assets/fonts/some_font.ttf", 50)?;
/// # Ok(())
/// # }
/// ```
pub fn load_font<'ttf>(
    ttf: &'ttf Sdl2TtfContext,
    path: &str,
    point_size: u16,
) -> Result<Font<'ttf, 'static>, AssetError> {
    check_exists(path)?;
    ttf.load_font(path, point_size)
        .map_err(|e| decode_err(path, e))
}

/// Loads an image file as a drawable texture. The intermediate decode
/// surface is released before this returns.
/// ```no_run
/// # fn demo(creator: &sdl2::render::TextureCreator<sdl2::video::WindowContext>)
/// # -> Result<(), backend::AssetError> {
/// let texture = backend::asset::load_texture(creator, "./assets/images/some_image.png")?;
/// # Ok(())
/// # }
/// ```
pub fn load_texture<'r>(
    creator: &'r TextureCreator<WindowContext>,
    path: &str,
) -> Result<Texture<'r>, AssetError> {
    check_exists(path)?;
    creator.load_texture(path).map_err(|e| decode_err(path, e))
}

/// Loads a music stream (mp3, ogg, ...).
pub fn load_music(path: &str) -> Result<Music<'static>, AssetError> {
    check_exists(path)?;
    Music::from_file(path).map_err(|e| decode_err(path, e))
}

/// Loads a short sound clip (wav).
pub fn load_sound_effect(path: &str) -> Result<Chunk, AssetError> {
    check_exists(path)?;
    Chunk::from_file(path).map_err(|e| decode_err(path, e))
}

/// Rasterizes `text` in the supplied font and color into a texture.
/// ```no_run
/// # fn demo<'r>(creator: &'r sdl2::render::TextureCreator<sdl2::video::WindowContext>,
/// #             font: &sdl2::ttf::Font) -> Result<(), backend::AssetError> {
/// let color = sdl2::pixels::Color::RGBA(100, 100, 100, 255);
/// let text = backend::asset::create_text(creator, font, "Some text", color)?;
/// # Ok(())
/// # }
/// ```
pub fn create_text<'r>(
    creator: &'r TextureCreator<WindowContext>,
    font: &Font,
    text: &str,
    color: Color,
) -> Result<Texture<'r>, AssetError> {
    let surface = font
        .render(text)
        .solid(color)
        .map_err(|e| AssetError::TextRender(e.to_string()))?;

    creator
        .create_texture_from_surface(&surface)
        .map_err(|e| AssetError::TextRender(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssetError;

    #[test]
    fn missing_music_reports_not_found() {
        let err = load_music("./assets/audio/nope.mp3").unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
    }

    #[test]
    fn missing_sound_effect_reports_not_found() {
        let err = load_sound_effect("./assets/audio/nope.wav").err().unwrap();
        assert!(matches!(err, AssetError::NotFound(_)));
    }
}
