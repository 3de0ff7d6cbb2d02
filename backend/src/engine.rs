//! Platform bootstrap and the fixed-timestep loop driver.

use std::time::Instant;

use log::{debug, info};
use sdl2::event::Event;
use sdl2::image::Sdl2ImageContext;
use sdl2::mixer::Sdl2MixerContext;
use sdl2::render::{Canvas, RenderTarget};
use sdl2::ttf::Sdl2TtfContext;
use sdl2::video::Window;
use sdl2::{mixer, AudioSubsystem, EventPump, Sdl, VideoSubsystem};

use crate::error::EngineError;
use crate::game::Game;
use crate::input::KeySnapshot;
use crate::timer::TickTimer;

const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 650;
const DEFAULT_TICK_SECONDS: f32 = 0.25;

pub struct EngineConfig {
    pub width: u32,
    pub height: u32,
    /// Seconds of wall-clock time per simulation tick.
    pub tick_seconds: f32,
}

impl Default for EngineConfig {
    fn default() -> EngineConfig {
        EngineConfig {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
            tick_seconds: DEFAULT_TICK_SECONDS,
        }
    }
}

/// The platform context: SDL core plus the font, image, and audio
/// subsystems, created once at startup and owned for the process lifetime.
/// The subsystem guards are held so their libraries stay initialized until
/// the engine is dropped.
pub struct Engine {
    pub width: u32,
    pub height: u32,
    sdl_context: Sdl,
    video: VideoSubsystem,
    ttf: Sdl2TtfContext,
    _image: Sdl2ImageContext,
    _audio: AudioSubsystem,
    _mixer: Sdl2MixerContext,
    tick_seconds: f32,
}

impl Engine {
    /// Brings up SDL video/audio, SDL_ttf, SDL_image (PNG) and the mixer.
    /// There is no fallback mode: a failure here means the process cannot
    /// usefully continue.
    pub fn init(config: EngineConfig) -> Result<Engine, EngineError> {
        let sdl_context = sdl2::init().map_err(EngineError::Sdl)?;
        let video = sdl_context.video().map_err(EngineError::Sdl)?;
        let audio = sdl_context.audio().map_err(EngineError::Sdl)?;

        let ttf = sdl2::ttf::init()?;
        let image = sdl2::image::init(sdl2::image::InitFlag::PNG).map_err(EngineError::Sdl)?;

        let mixer_context = mixer::init(mixer::InitFlag::MP3).map_err(EngineError::Sdl)?;
        mixer::open_audio(
            44_100,
            mixer::DEFAULT_FORMAT,
            mixer::DEFAULT_CHANNELS,
            2_048,
        )
        .map_err(EngineError::Sdl)?;

        info!(
            "engine initialized, {}x{} window, {}s tick",
            config.width, config.height, config.tick_seconds
        );

        Ok(Engine {
            width: config.width,
            height: config.height,
            sdl_context,
            video,
            ttf,
            _image: image,
            _audio: audio,
            _mixer: mixer_context,
            tick_seconds: config.tick_seconds,
        })
    }

    /// Creates the centered, resizable window and its accelerated renderer.
    pub fn create_canvas(&self, title: &str) -> Result<Canvas<Window>, EngineError> {
        let window = self
            .video
            .window(title, self.width, self.height)
            .position_centered()
            .resizable()
            .opengl()
            .build()?;

        let canvas = window.into_canvas().accelerated().build()?;
        Ok(canvas)
    }

    /// The font context, for [`asset::load_font`](crate::asset::load_font).
    pub fn ttf(&self) -> &Sdl2TtfContext {
        &self.ttf
    }

    /// Drives the game loop until a quit event arrives, then runs the
    /// game's `cleanup` exactly once.
    ///
    /// Pending events are drained every iteration so input stays
    /// responsive; the simulation hooks only fire when the tick timer says
    /// enough wall-clock time has accumulated. A quit event stops the loop
    /// after the current drainage completes, without running another tick.
    pub fn run(&self, canvas: &mut Canvas<Window>, game: &mut dyn Game) -> Result<(), EngineError> {
        let event_pump = self.sdl_context.event_pump().map_err(EngineError::Sdl)?;
        let mut timer = TickTimer::new(self.tick_seconds);
        let mut input = PumpInput {
            pump: event_pump,
            previous: Instant::now(),
        };

        info!("entering game loop");
        run_loop(game, canvas, &mut timer, &mut input);
        info!("game loop stopped");
        Ok(())
    }
}

/// Clock, event queue, and keyboard state feeding the loop. The real
/// implementation wraps the SDL event pump; the loop itself only sees this
/// trait, so scripted input can drive it as well.
trait LoopInput {
    /// Wall-clock seconds since the previous iteration, or `None` when the
    /// input source is exhausted.
    fn next_delta(&mut self) -> Option<f32>;

    fn poll_events(&mut self) -> Vec<Event>;

    fn keyboard(&mut self) -> KeySnapshot;
}

struct PumpInput {
    pump: EventPump,
    previous: Instant,
}

impl LoopInput for PumpInput {
    fn next_delta(&mut self) -> Option<f32> {
        let now = Instant::now();
        let delta = now.duration_since(self.previous).as_secs_f32();
        self.previous = now;
        Some(delta)
    }

    fn poll_events(&mut self) -> Vec<Event> {
        self.pump.poll_iter().collect()
    }

    fn keyboard(&mut self) -> KeySnapshot {
        KeySnapshot::from_keyboard(&self.pump.keyboard_state())
    }
}

/// The loop proper: drain events every iteration, run a tick when the
/// timer fires, and run `cleanup` exactly once on the way out.
fn run_loop<T: RenderTarget>(
    game: &mut dyn Game<T>,
    canvas: &mut Canvas<T>,
    timer: &mut TickTimer,
    input: &mut dyn LoopInput,
) {
    while let Some(delta) = input.next_delta() {
        if !drain_events(game, input.poll_events()) {
            break;
        }

        if let Some(delta_time) = timer.advance(delta) {
            let keys = input.keyboard();
            run_tick(game, canvas, &keys, delta_time);
        }
    }

    debug!("running cleanup");
    game.cleanup();
}

/// One simulation tick. The hook order is part of the contract:
/// keypressed, reset, update, draw, render.
fn run_tick<T: RenderTarget>(
    game: &mut dyn Game<T>,
    canvas: &mut Canvas<T>,
    keys: &KeySnapshot,
    delta_time: f32,
) {
    game.on_keypressed(keys);

    game.reset();
    canvas.clear();

    game.update(delta_time);
    game.draw(canvas);

    game.render(canvas);
    canvas.present();
}

/// Forwards every pending event to the game, quit event included. Returns
/// false once a quit event has been seen.
fn drain_events<T: RenderTarget, I>(game: &mut dyn Game<T>, events: I) -> bool
where
    I: IntoIterator<Item = Event>,
{
    let mut running = true;
    for event in events {
        if let Event::Quit { .. } = event {
            debug!("quit event received");
            running = false;
        }
        game.on_event(&event);
    }
    running
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::{Keycode, Mod, Scancode};
    use sdl2::pixels::PixelFormatEnum;
    use sdl2::surface::Surface;

    #[derive(Default)]
    struct RecordingGame {
        calls: Vec<&'static str>,
        events: Vec<Event>,
        cleanups: u32,
    }

    impl Game<Surface<'static>> for RecordingGame {
        fn reset(&mut self) {
            self.calls.push("reset");
        }
        fn update(&mut self, _delta_time: f32) {
            self.calls.push("update");
        }
        fn draw(&mut self, _canvas: &mut Canvas<Surface<'static>>) {
            self.calls.push("draw");
        }
        fn render(&mut self, _canvas: &mut Canvas<Surface<'static>>) {
            self.calls.push("render");
        }
        fn on_event(&mut self, event: &Event) {
            self.calls.push("on_event");
            self.events.push(event.clone());
        }
        fn on_keypressed(&mut self, _keys: &KeySnapshot) {
            self.calls.push("on_keypressed");
        }
        fn cleanup(&mut self) {
            self.calls.push("cleanup");
            self.cleanups += 1;
        }
    }

    /// Scripted frames of (delta seconds, pending events); the keyboard
    /// snapshot is always empty.
    struct ScriptedInput {
        frames: Vec<(f32, Vec<Event>)>,
        cursor: usize,
        pending: Vec<Event>,
    }

    impl ScriptedInput {
        fn new(frames: Vec<(f32, Vec<Event>)>) -> ScriptedInput {
            ScriptedInput {
                frames,
                cursor: 0,
                pending: Vec::new(),
            }
        }
    }

    impl LoopInput for ScriptedInput {
        fn next_delta(&mut self) -> Option<f32> {
            let (delta, events) = self.frames.get(self.cursor)?.clone();
            self.cursor += 1;
            self.pending = events;
            Some(delta)
        }

        fn poll_events(&mut self) -> Vec<Event> {
            std::mem::take(&mut self.pending)
        }

        fn keyboard(&mut self) -> KeySnapshot {
            KeySnapshot::from_scancodes(&[])
        }
    }

    fn software_canvas() -> Canvas<Surface<'static>> {
        let surface = Surface::new(4, 4, PixelFormatEnum::RGBA8888).unwrap();
        surface.into_canvas().unwrap()
    }

    fn key_down(keycode: Keycode, scancode: Scancode) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(keycode),
            scancode: Some(scancode),
            keymod: Mod::NOMOD,
            repeat: false,
        }
    }

    #[test]
    fn events_are_forwarded_in_order() {
        let mut game = RecordingGame::default();
        let events = vec![
            key_down(Keycode::P, Scancode::P),
            key_down(Keycode::S, Scancode::S),
        ];

        assert!(drain_events(&mut game, events));
        assert_eq!(game.events.len(), 2);
        assert!(matches!(
            game.events[0],
            Event::KeyDown {
                keycode: Some(Keycode::P),
                ..
            }
        ));
        assert!(matches!(
            game.events[1],
            Event::KeyDown {
                keycode: Some(Keycode::S),
                ..
            }
        ));
    }

    #[test]
    fn quit_stops_the_loop_after_finishing_drainage() {
        let mut game = RecordingGame::default();
        let events = vec![
            key_down(Keycode::P, Scancode::P),
            Event::Quit { timestamp: 0 },
            key_down(Keycode::S, Scancode::S),
        ];

        // the quit event itself and everything queued behind it still
        // reach the game
        assert!(!drain_events(&mut game, events));
        assert_eq!(game.events.len(), 3);
        assert!(matches!(game.events[1], Event::Quit { .. }));
    }

    #[test]
    fn empty_queue_keeps_running() {
        let mut game = RecordingGame::default();
        assert!(drain_events(&mut game, Vec::new()));
        assert!(game.events.is_empty());
        assert_eq!(game.cleanups, 0);
    }

    #[test]
    fn tick_hooks_run_in_fixed_order() {
        let mut game = RecordingGame::default();
        let mut canvas = software_canvas();
        let mut timer = TickTimer::new(0.25);
        // the first frame meets the threshold, the second does not
        let mut input = ScriptedInput::new(vec![(0.25, Vec::new()), (0.1, Vec::new())]);

        run_loop(&mut game, &mut canvas, &mut timer, &mut input);

        assert_eq!(
            game.calls,
            ["on_keypressed", "reset", "update", "draw", "render", "cleanup"]
        );
    }

    #[test]
    fn quit_skips_the_pending_tick_and_cleans_up_once() {
        let mut game = RecordingGame::default();
        let mut canvas = software_canvas();
        let mut timer = TickTimer::new(0.25);
        // plenty of accumulated time, but the quit arrives first
        let mut input = ScriptedInput::new(vec![
            (1.0, vec![Event::Quit { timestamp: 0 }]),
            (1.0, Vec::new()),
        ]);

        run_loop(&mut game, &mut canvas, &mut timer, &mut input);

        assert_eq!(game.calls, ["on_event", "cleanup"]);
        assert_eq!(game.cleanups, 1);
    }

    #[test]
    fn update_receives_seconds_since_the_previous_tick() {
        struct DeltaGame {
            deltas: Vec<f32>,
        }

        impl Game<Surface<'static>> for DeltaGame {
            fn reset(&mut self) {}
            fn update(&mut self, delta_time: f32) {
                self.deltas.push(delta_time);
            }
            fn draw(&mut self, _canvas: &mut Canvas<Surface<'static>>) {}
            fn render(&mut self, _canvas: &mut Canvas<Surface<'static>>) {}
            fn on_event(&mut self, _event: &Event) {}
            fn on_keypressed(&mut self, _keys: &KeySnapshot) {}
            fn cleanup(&mut self) {}
        }

        let mut game = DeltaGame { deltas: Vec::new() };
        let mut canvas = software_canvas();
        let mut timer = TickTimer::new(0.25);
        // two quiet frames accumulate into the second tick's delta
        let mut input = ScriptedInput::new(vec![
            (0.3, Vec::new()),
            (0.1, Vec::new()),
            (0.2, Vec::new()),
        ]);

        run_loop(&mut game, &mut canvas, &mut timer, &mut input);

        assert_eq!(game.deltas.len(), 2);
        assert!((game.deltas[0] - 0.3).abs() < 1e-6);
        assert!((game.deltas[1] - 0.3).abs() < 1e-6);
    }
}
