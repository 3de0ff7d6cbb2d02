//! Blit helpers for textures and pre-rendered text.

use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

/// Copies a texture with optional source and destination rectangles;
/// `None` means the full surface on either side.
/// ```no_run
/// # fn demo(canvas: &mut sdl2::render::Canvas<sdl2::video::Window>,
/// #         texture: &sdl2::render::Texture) -> Result<(), String> {
/// backend::render::render_texture(canvas, texture, None, None)?;
/// # Ok(())
/// # }
/// ```
pub fn render_texture(
    canvas: &mut Canvas<Window>,
    texture: &Texture,
    src: Option<Rect>,
    dst: Option<Rect>,
) -> Result<(), String> {
    canvas.copy(texture, src, dst)
}

/// Draws a text texture at its natural size at window coordinates.
/// ```no_run
/// # fn demo(canvas: &mut sdl2::render::Canvas<sdl2::video::Window>,
/// #         text: &sdl2::render::Texture) -> Result<(), String> {
/// backend::render::render_text(canvas, text, 100, 150)?;
/// # Ok(())
/// # }
/// ```
pub fn render_text(
    canvas: &mut Canvas<Window>,
    text: &Texture,
    pos_x: i32,
    pos_y: i32,
) -> Result<(), String> {
    let query = text.query();
    let dst = Rect::new(pos_x, pos_y, query.width, query.height);
    canvas.copy(text, None, dst)
}
