use sdl2::keyboard::{KeyboardState, Scancode};

pub const MOVE_LEFT: u8 = 1 << 0;
pub const MOVE_RIGHT: u8 = 1 << 1;
pub const MOVE_UP: u8 = 1 << 2;
pub const MOVE_DOWN: u8 = 1 << 3;

/// An owned snapshot of the keys held down at the moment a tick fired.
/// Taken from the event pump's keyboard state by the loop driver; games
/// receive it through [`Game::on_keypressed`](crate::game::Game).
///
/// [`from_scancodes`](KeySnapshot::from_scancodes) exists so snapshots can
/// be built without a live SDL context.
pub struct KeySnapshot {
    pressed: Vec<Scancode>,
}

impl KeySnapshot {
    pub fn from_keyboard(state: &KeyboardState<'_>) -> KeySnapshot {
        KeySnapshot {
            pressed: state.pressed_scancodes().collect(),
        }
    }

    pub fn from_scancodes(pressed: &[Scancode]) -> KeySnapshot {
        KeySnapshot {
            pressed: pressed.to_vec(),
        }
    }

    pub fn is_pressed(&self, scancode: Scancode) -> bool {
        self.pressed.contains(&scancode)
    }
}

/// OR of the movement flags matching the arrow keys held in `keys`;
/// 0 when no directional key is down.
pub fn movement_mask(keys: &KeySnapshot) -> u8 {
    let mut mask = 0;
    if keys.is_pressed(Scancode::Left) {
        mask |= MOVE_LEFT;
    }
    if keys.is_pressed(Scancode::Right) {
        mask |= MOVE_RIGHT;
    }
    if keys.is_pressed(Scancode::Up) {
        mask |= MOVE_UP;
    }
    if keys.is_pressed(Scancode::Down) {
        mask |= MOVE_DOWN;
    }
    mask
}
