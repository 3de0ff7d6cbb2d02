use sdl2::event::Event;
use sdl2::render::{Canvas, RenderTarget};
use sdl2::video::Window;

use crate::input::KeySnapshot;

/// The seven hooks a game supplies to the loop driver. Implement this once
/// and hand it to [`Engine::run`](crate::engine::Engine::run).
///
/// `T` is the render target the draw hooks receive; it defaults to
/// [`Window`], which is what the engine's loop uses. A game rendering to a
/// software surface (e.g. under test) can implement `Game<Surface>`.
///
/// Per-tick order is fixed: `on_keypressed`, `reset`, `update`, `draw`,
/// `render`. The driver clears the canvas right after `reset` and presents
/// it right after `render`. `on_event` runs every loop iteration, once per
/// pending event, whether or not a tick fires.
///
/// ```no_run
/// use backend::{Engine, EngineConfig, Game};
/// # use backend::input::KeySnapshot;
/// # use sdl2::{event::Event, render::Canvas, video::Window};
///
/// struct MyGame;
///
/// impl Game for MyGame {
///     fn reset(&mut self) {}
///     fn update(&mut self, delta_time: f32) {}
///     fn draw(&mut self, canvas: &mut Canvas<Window>) {}
///     fn render(&mut self, canvas: &mut Canvas<Window>) {}
///     fn on_event(&mut self, event: &Event) {}
///     fn on_keypressed(&mut self, keys: &KeySnapshot) {}
///     fn cleanup(&mut self) {}
/// }
///
/// # fn main() -> Result<(), backend::EngineError> {
/// let engine = Engine::init(EngineConfig::default())?;
/// let mut canvas = engine.create_canvas("My Game")?;
/// engine.run(&mut canvas, &mut MyGame)?;
/// # Ok(())
/// # }
/// ```
pub trait Game<T: RenderTarget = Window> {
    /// Clears per-tick transient state before `update`.
    fn reset(&mut self);

    /// Advances the simulation. `delta_time` is the wall-clock seconds
    /// elapsed since the previous tick.
    fn update(&mut self, delta_time: f32);

    /// Issues draw calls. Later draws occlude earlier ones.
    fn draw(&mut self, canvas: &mut Canvas<T>);

    /// Post-draw bookkeeping; the driver presents the frame afterwards.
    fn render(&mut self, canvas: &mut Canvas<T>);

    /// Handles one pending platform event. Discrete actions (key presses,
    /// window events) belong here.
    fn on_event(&mut self, event: &Event);

    /// Handles the current keyboard snapshot. Continuous held-key input
    /// (movement) belongs here.
    fn on_keypressed(&mut self, keys: &KeySnapshot);

    /// Releases game-owned resources. Called exactly once when the loop
    /// stops; no other hook runs afterwards.
    fn cleanup(&mut self);
}
