//! Music and sound-effect controls over the mixer's single music channel.

use sdl2::mixer::{Channel, Chunk, Music};

use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicStatus {
    Stopped,
    Playing,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MusicAction {
    Play,
    Pause,
    Resume,
}

/// Current state of the music channel. The mixer reports a paused track as
/// still "playing", so the paused check comes second.
pub fn music_status() -> MusicStatus {
    if !Music::is_playing() {
        MusicStatus::Stopped
    } else if Music::is_paused() {
        MusicStatus::Paused
    } else {
        MusicStatus::Playing
    }
}

fn toggle_action(status: MusicStatus) -> MusicAction {
    match status {
        MusicStatus::Stopped => MusicAction::Play,
        MusicStatus::Playing => MusicAction::Pause,
        MusicStatus::Paused => MusicAction::Resume,
    }
}

/// Cycles the music channel: stopped starts `music` on a loop, playing
/// pauses, paused resumes.
pub fn toggle_music(music: &Music) -> Result<(), EngineError> {
    match toggle_action(music_status()) {
        MusicAction::Play => music.play(-1).map_err(EngineError::Sdl)?,
        MusicAction::Pause => Music::pause(),
        MusicAction::Resume => Music::resume(),
    }
    Ok(())
}

/// Halts whatever the music channel is playing.
pub fn stop_music() {
    Music::halt();
}

/// Plays a one-shot sound clip on the first free channel.
pub fn play_sound_effect(sound: &Chunk) -> Result<(), EngineError> {
    Channel::all()
        .play(sound, 0)
        .map(|_| ())
        .map_err(EngineError::Sdl)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_cycles_play_pause_resume() {
        assert_eq!(toggle_action(MusicStatus::Stopped), MusicAction::Play);
        assert_eq!(toggle_action(MusicStatus::Playing), MusicAction::Pause);
        assert_eq!(toggle_action(MusicStatus::Paused), MusicAction::Resume);
    }
}
