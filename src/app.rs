//! Window driver
//!
//! Owns the event loop callbacks: drains platform input into per-tick
//! snapshots, steps the simulation at a fixed rate, and maps draw commands
//! and game events onto the backend.

use ggez::event::EventHandler;
use ggez::glam::Vec2;
use ggez::graphics::{self, Color, DrawMode, DrawParam, Mesh};
use ggez::input::keyboard::{Key, KeyInput};
use ggez::input::mouse::MouseButton;
use ggez::winit::keyboard::NamedKey;
use ggez::{Context, GameError, GameResult};

use crate::assets::Assets;
use crate::consts::*;
use crate::render::{self, DrawCommand};
use crate::settings::Settings;
use crate::sim::{Click, GameEvent, GameSession, InputSnapshot, Rect, tick};

pub struct MainState {
    session: GameSession,
    assets: Assets,
    settings: Settings,
    /// One-shot input gathered since the last simulation step
    pending: InputSnapshot,
}

impl MainState {
    pub fn new(session: GameSession, assets: Assets, settings: Settings) -> Self {
        Self {
            session,
            assets,
            settings,
            pending: InputSnapshot::default(),
        }
    }

    fn handle_event(&mut self, _ctx: &mut Context, event: GameEvent) -> GameResult {
        use ggez::audio::SoundSource;

        match event {
            GameEvent::Started => {
                log::info!("Game started");
                self.assets
                    .music
                    .set_volume(self.settings.effective_music_volume());
                self.assets.music.play();
            }
            GameEvent::Caught => {
                log::info!("Caught it!");
            }
            GameEvent::Missed { mistakes } => {
                log::info!("Missed! Mistakes: {mistakes}/{MAX_MISTAKES}");
            }
            GameEvent::Ended => {
                log::info!("Game over");
                self.assets.music.stop();
            }
        }
        Ok(())
    }
}

fn to_ggez_color(color: render::Color) -> Color {
    Color::from_rgb(color.r, color.g, color.b)
}

impl EventHandler for MainState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        while ctx.time.check_update_time(TICKS_PER_SECOND) {
            // One-shot input applies to the first tick of the frame; held
            // keys are sampled fresh for every tick
            let mut input = std::mem::take(&mut self.pending);
            input.move_left = ctx
                .keyboard
                .is_logical_key_pressed(&Key::Named(NamedKey::ArrowLeft));
            input.move_right = ctx
                .keyboard
                .is_logical_key_pressed(&Key::Named(NamedKey::ArrowRight));

            if input.quit {
                ctx.request_quit();
            }

            for event in tick(&mut self.session, &input) {
                self.handle_event(ctx, event)?;
            }
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas =
            graphics::Canvas::from_frame(ctx, to_ggez_color(render::BACKGROUND));

        for command in render::draw_commands(&self.session) {
            match command {
                DrawCommand::FillRect { rect, color } => {
                    let mesh = Mesh::new_rectangle(
                        ctx,
                        DrawMode::fill(),
                        graphics::Rect::new(rect.x, rect.y, rect.w, rect.h),
                        to_ggez_color(color),
                    )?;
                    canvas.draw(&mesh, DrawParam::default());
                }
                DrawCommand::Image { sprite, dest } => {
                    let image = self.assets.image(sprite);
                    let target =
                        dest.unwrap_or(Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT));
                    let scale = Vec2::new(
                        target.w / image.width() as f32,
                        target.h / image.height() as f32,
                    );
                    canvas.draw(
                        image,
                        DrawParam::default()
                            .dest(Vec2::new(target.x, target.y))
                            .scale(scale),
                    );
                }
            }
        }

        canvas.finish(ctx)
    }

    fn mouse_motion_event(
        &mut self,
        _ctx: &mut Context,
        x: f32,
        _y: f32,
        _dx: f32,
        _dy: f32,
    ) -> Result<(), GameError> {
        self.pending.pointer_x = Some(x);
        Ok(())
    }

    fn mouse_button_down_event(
        &mut self,
        _ctx: &mut Context,
        _button: MouseButton,
        x: f32,
        y: f32,
    ) -> Result<(), GameError> {
        self.pending.clicks.push(Click { x, y });
        Ok(())
    }

    fn key_down_event(
        &mut self,
        _ctx: &mut Context,
        input: KeyInput,
        _repeat: bool,
    ) -> Result<(), GameError> {
        if input.event.logical_key == Key::Named(NamedKey::Escape) {
            self.pending.quit = true;
        }
        Ok(())
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> Result<bool, GameError> {
        log::info!("Quitting after {} ticks", self.session.time_ticks);
        Ok(false)
    }
}
