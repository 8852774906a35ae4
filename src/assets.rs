//! Static assets loaded once at startup
//!
//! Paths are resolved inside the ggez resource directory, so they start
//! with `/`.

use ggez::Context;
use ggez::audio::{self, SoundSource};
use ggez::graphics::Image;

use crate::error::StartupError;
use crate::render::Sprite;

const PLAY_BUTTON_PATH: &str = "/play_button.png";
const GAME_OVER_PATH: &str = "/game_over.png";
const MUSIC_PATH: &str = "/background_music.wav";

/// Images and music owned for the lifetime of the app
pub struct Assets {
    pub play_button: Image,
    pub game_over: Image,
    pub music: audio::Source,
}

impl Assets {
    /// Load every asset, failing fast with the offending path
    pub fn load(ctx: &mut Context) -> Result<Self, StartupError> {
        let play_button =
            Image::from_path(ctx, PLAY_BUTTON_PATH).map_err(|e| load_error(PLAY_BUTTON_PATH, e))?;
        let game_over =
            Image::from_path(ctx, GAME_OVER_PATH).map_err(|e| load_error(GAME_OVER_PATH, e))?;
        let mut music =
            audio::Source::new(ctx, MUSIC_PATH).map_err(|e| load_error(MUSIC_PATH, e))?;
        music.set_repeat(true);

        Ok(Self {
            play_button,
            game_over,
            music,
        })
    }

    /// Image backing a sprite handle
    pub fn image(&self, sprite: Sprite) -> &Image {
        match sprite {
            Sprite::PlayButton => &self.play_button,
            Sprite::GameOver => &self.game_over,
        }
    }
}

fn load_error(path: &str, source: ggez::GameError) -> StartupError {
    StartupError::AssetLoad {
        path: path.to_string(),
        source,
    }
}
