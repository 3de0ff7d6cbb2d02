use std::process;

use log::{debug, error, info};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mixer::{Chunk, Music};
use sdl2::pixels::Color;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::ttf::Font;
use sdl2::video::{Window, WindowContext};

use backend::input::{
    movement_mask, KeySnapshot, MOVE_DOWN, MOVE_LEFT, MOVE_RIGHT, MOVE_UP,
};
use backend::{asset, audio, render, Engine, EngineConfig, EngineError, Game};

// Paths are resolved relative to the working directory at launch. The
// asset files are not part of the repository; supply your own under
// ./assets/ (any PNG, ttf font, mp3 track, and wav clip will do) or the
// demo exits with a load error.
const BACKGROUND_PATH: &str = "./assets/images/background_1/platformer_background_1.png";
const FONT_PATH: &str = "./assets/fonts/Ginger Cat.ttf";
const MUSIC_PATH: &str = "./assets/audio/Sakura-Girl-Daisy.mp3";
const SOUND_PATH: &str = "./assets/audio/swipe-whoosh-1.wav";

/// Sample game state: asset handles plus the movement bitmask recomputed
/// every tick from the keyboard snapshot. Dropping the vectors in `cleanup`
/// releases every handle exactly once.
struct DemoGame<'a> {
    textures: Vec<Texture<'a>>,
    fonts: Vec<Font<'a, 'static>>,
    music: Vec<Music<'static>>,
    sounds: Vec<Chunk>,
    text_textures: Vec<Texture<'a>>,
    move_direction: u8,
}

impl<'a> DemoGame<'a> {
    fn load(
        engine: &'a Engine,
        creator: &'a TextureCreator<WindowContext>,
    ) -> Result<DemoGame<'a>, EngineError> {
        let textures = vec![asset::load_texture(creator, BACKGROUND_PATH)?];
        let fonts = vec![asset::load_font(engine.ttf(), FONT_PATH, 50)?];
        let music = vec![asset::load_music(MUSIC_PATH)?];
        let sounds = vec![asset::load_sound_effect(SOUND_PATH)?];

        let text_color = Color::RGBA(150, 100, 50, 255);
        let text_textures = vec![asset::create_text(
            creator,
            &fonts[0],
            "Cheeky Kitty",
            text_color,
        )?];

        info!("assets loaded");
        Ok(DemoGame {
            textures,
            fonts,
            music,
            sounds,
            text_textures,
            move_direction: 0,
        })
    }
}

impl Game for DemoGame<'_> {
    fn reset(&mut self) {}

    fn update(&mut self, _delta_time: f32) {
        if self.move_direction & MOVE_RIGHT != 0 {
            debug!("RIGHT");
        }
        if self.move_direction & MOVE_LEFT != 0 {
            debug!("LEFT");
        }
        if self.move_direction & MOVE_UP != 0 {
            debug!("UP");
        }
        if self.move_direction & MOVE_DOWN != 0 {
            debug!("DOWN");
        }
    }

    // Note the draw order: the text goes on top of the background.
    fn draw(&mut self, canvas: &mut Canvas<Window>) {
        if let Err(e) = render::render_texture(canvas, &self.textures[0], None, None) {
            error!("failed to draw background: {e}");
        }
        if let Err(e) = render::render_text(canvas, &self.text_textures[0], 10, 10) {
            error!("failed to draw text: {e}");
        }
    }

    fn render(&mut self, _canvas: &mut Canvas<Window>) {}

    fn on_event(&mut self, event: &Event) {
        if let Event::KeyDown {
            keycode: Some(keycode),
            ..
        } = event
        {
            let outcome = match *keycode {
                Keycode::P => audio::toggle_music(&self.music[0]),
                Keycode::S => {
                    audio::stop_music();
                    Ok(())
                }
                Keycode::Space => audio::play_sound_effect(&self.sounds[0]),
                _ => Ok(()),
            };
            if let Err(e) = outcome {
                error!("audio control failed: {e}");
            }
        }
    }

    fn on_keypressed(&mut self, keys: &KeySnapshot) {
        self.move_direction = movement_mask(keys);
    }

    fn cleanup(&mut self) {
        self.text_textures.clear();
        self.textures.clear();
        self.sounds.clear();
        self.music.clear();
        self.fonts.clear();
        info!("game assets released");
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let engine = match Engine::init(EngineConfig::default()) {
        Ok(engine) => engine,
        Err(e) => {
            error!("engine initialization failure: {e}");
            process::exit(1);
        }
    };

    let mut canvas = match engine.create_canvas("SDL Engine Fun") {
        Ok(canvas) => canvas,
        Err(e) => {
            error!("window creation failure: {e}");
            process::exit(1);
        }
    };
    let texture_creator = canvas.texture_creator();

    let mut game = match DemoGame::load(&engine, &texture_creator) {
        Ok(game) => game,
        Err(e) => {
            error!("asset loading failure: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = engine.run(&mut canvas, &mut game) {
        error!("game loop failure: {e}");
        process::exit(1);
    }
}
