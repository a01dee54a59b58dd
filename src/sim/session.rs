//! Frame driver and game session
//!
//! The session owns every body and runs one tick per display frame:
//! 1. Materialize bodies whose images finished loading
//! 2. Clear the frame
//! 3. While running: ball vs. bricks (at most one crash per tick), ball vs.
//!    paddle, then advance ball and paddle
//! 4. Render live bodies in registration order
//! 5. Invoke the frame callback
//!
//! Bodies are requested at session creation and join the live set only once
//! their image resolves. Until then they take no part in physics or render;
//! a failed load simply leaves the body out.

use std::fmt;
use std::rc::Rc;
use std::task::Poll;

use glam::{Vec2, Vec3, Vec4};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bodies::{Ball, Brick, Paddle};
use super::collision::check_collision;
use super::level::{Level, layout_bricks};
use super::movement::{Movable, PositionLimits};
use crate::assets::{AssetLoader, AssetTicket, LoadedImage};
use crate::error::{LevelError, SceneError};
use crate::scene::{DeviceDelegate, Renderable, ShaderProgram, Sprite, SpriteOptions};
use crate::settings::{GameConfig, KeyAction};

/// Whether physics advances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    /// Frozen frame; rendering continues
    Idle,
    Running,
}

impl RunState {
    pub fn toggled(self) -> Self {
        match self {
            RunState::Idle => RunState::Running,
            RunState::Running => RunState::Idle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Ball,
    Paddle,
    Brick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKey {
    Ball,
    Paddle,
    Brick(usize),
}

/// Everything needed to build a body once its image is ready
#[derive(Debug, Clone)]
struct Blueprint {
    kind: BodyKind,
    name: String,
    position: Vec3,
    size: Vec2,
    color: Option<Vec3>,
    velocity: Vec2,
    limits: Option<PositionLimits>,
}

#[derive(Debug)]
struct PendingBody {
    ticket: AssetTicket,
    blueprint: Blueprint,
}

/// One play-through: bodies, run state and the collaborators they draw with
pub struct GameSession {
    state: RunState,
    config: GameConfig,
    device: Rc<dyn DeviceDelegate>,
    shader: Rc<dyn ShaderProgram>,
    loader: Box<dyn AssetLoader>,
    pending: Vec<PendingBody>,
    ball: Option<Ball>,
    paddle: Option<Paddle>,
    bricks: Vec<Brick>,
    draw_order: Vec<BodyKey>,
    frame_callback: Option<Box<dyn FnMut(f64)>>,
    frames: u64,
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("state", &self.state)
            .field("pending", &self.pending.len())
            .field("ball", &self.ball.is_some())
            .field("paddle", &self.paddle.is_some())
            .field("bricks", &self.bricks.len())
            .field("frames", &self.frames)
            .finish_non_exhaustive()
    }
}

impl GameSession {
    /// Session with no bodies; add them with the `add_*` methods
    pub fn bare(
        device: Rc<dyn DeviceDelegate>,
        shader: Rc<dyn ShaderProgram>,
        loader: Box<dyn AssetLoader>,
        config: GameConfig,
    ) -> Self {
        Self {
            state: RunState::Idle,
            config,
            device,
            shader,
            loader,
            pending: Vec::new(),
            ball: None,
            paddle: None,
            bricks: Vec::new(),
            draw_order: Vec::new(),
            frame_callback: None,
            frames: 0,
        }
    }

    /// Create a session for `level` and request all of its bodies.
    ///
    /// Fails without requesting anything if the level data is corrupt.
    pub fn new(
        device: Rc<dyn DeviceDelegate>,
        shader: Rc<dyn ShaderProgram>,
        loader: Box<dyn AssetLoader>,
        level: &Level,
        config: GameConfig,
    ) -> Result<Self, LevelError> {
        let placements = layout_bricks(level)?;

        let mut session = Self::bare(device, shader, loader, config);
        let viewport = session.device.viewport();

        let brick_width = viewport.width / level.row_count as f32;
        let brick_size = Vec2::new(brick_width, brick_width * session.config.brick_aspect);
        for placement in &placements {
            session.request(Blueprint {
                kind: BodyKind::Brick,
                name: format!("brick_{}", placement.index),
                position: placement.position(brick_size, viewport.height),
                size: brick_size,
                color: Some(placement.color),
                velocity: Vec2::ZERO,
                limits: None,
            });
        }

        let paddle_width = viewport.width * session.config.paddle_width_ratio;
        let paddle_size = Vec2::new(paddle_width, paddle_width * session.config.paddle_aspect);
        let ball_side = paddle_size.y;

        let mut rng = Pcg32::seed_from_u64(session.config.seed);
        let ball_color = Vec3::new(rng.random(), rng.random(), rng.random());

        session.request(Blueprint {
            kind: BodyKind::Ball,
            name: "ball".into(),
            position: Vec3::new(viewport.width / 2.0 - ball_side / 2.0, paddle_size.y, 0.0),
            size: Vec2::splat(ball_side),
            color: Some(ball_color),
            velocity: Vec2::from_array(session.config.ball_velocity),
            limits: Some(PositionLimits::new(
                0.0,
                viewport.width - ball_side,
                paddle_size.y,
                viewport.height - ball_side,
            )),
        });

        session.request(Blueprint {
            kind: BodyKind::Paddle,
            name: "paddle".into(),
            position: Vec3::new(viewport.width / 2.0 - paddle_size.x / 2.0, 0.0, 0.0),
            size: paddle_size,
            color: None,
            velocity: Vec2::ZERO,
            limits: Some(PositionLimits::new(0.0, viewport.width - paddle_size.x, 0.0, 0.0)),
        });

        log::info!(
            "Session '{}' created: {} bricks requested, viewport {}x{}",
            level.describe,
            placements.len(),
            viewport.width,
            viewport.height
        );
        Ok(session)
    }

    fn request(&mut self, blueprint: Blueprint) {
        let url = match blueprint.kind {
            BodyKind::Ball => &self.config.ball_image,
            BodyKind::Paddle => &self.config.paddle_image,
            BodyKind::Brick => &self.config.brick_image,
        };
        let ticket = self.loader.request(url);
        self.pending.push(PendingBody { ticket, blueprint });
    }

    /// Poll outstanding loads and build every body that became ready
    fn poll_pending(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        for body in pending {
            match self.loader.poll(body.ticket) {
                Poll::Pending => self.pending.push(body),
                Poll::Ready(Ok(image)) => self.materialize(body.blueprint, image),
                Poll::Ready(Err(e)) => {
                    log::warn!("Body '{}' will not appear: {e}", body.blueprint.name);
                }
            }
        }
    }

    fn materialize(&mut self, blueprint: Blueprint, image: LoadedImage) {
        let sprite = Sprite::new(SpriteOptions {
            name: blueprint.name.clone(),
            position: blueprint.position,
            width: Some(blueprint.size.x),
            height: Some(blueprint.size.y),
            color: blueprint.color,
            image: Some(image),
        });
        let sprite = match sprite {
            Ok(sprite) => sprite,
            Err(e) => {
                log::warn!("Body '{}' will not appear: {e}", blueprint.name);
                return;
            }
        };

        log::debug!("Body '{}' ready", blueprint.name);
        match blueprint.kind {
            BodyKind::Ball => {
                let mut ball = Ball::new(sprite);
                ball.fit_collision_radius();
                ball.set_velocity(blueprint.velocity);
                if let Some(limits) = blueprint.limits {
                    ball.set_position_limits(limits);
                }
                self.add_ball(ball);
            }
            BodyKind::Paddle => {
                let mut paddle = Paddle::new(sprite);
                paddle.set_velocity(blueprint.velocity);
                if let Some(limits) = blueprint.limits {
                    paddle.set_position_limits(limits);
                }
                self.add_paddle(paddle);
            }
            BodyKind::Brick => self.add_brick(Brick::new(sprite)),
        }
    }

    fn attach(&self, sprite: &mut Sprite) {
        sprite.set_device(self.device.clone());
        sprite.set_shader(self.shader.clone());
    }

    /// Register the ball, replacing any previous one
    pub fn add_ball(&mut self, mut ball: Ball) {
        self.attach(ball.sprite_mut());
        if self.ball.replace(ball).is_none() {
            self.draw_order.push(BodyKey::Ball);
        }
    }

    /// Register the paddle, replacing any previous one
    pub fn add_paddle(&mut self, mut paddle: Paddle) {
        self.attach(paddle.sprite_mut());
        if self.paddle.replace(paddle).is_none() {
            self.draw_order.push(BodyKey::Paddle);
        }
    }

    /// Register a brick after the existing ones
    pub fn add_brick(&mut self, mut brick: Brick) {
        self.attach(brick.sprite_mut());
        let index = self.bricks.len();
        self.bricks.push(brick);
        self.draw_order.push(BodyKey::Brick(index));
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn set_state(&mut self, state: RunState) {
        if state != self.state {
            log::info!("Session {:?} -> {:?}", self.state, state);
            self.state = state;
        }
    }

    /// Flip between idle and running
    pub fn toggle(&mut self) {
        self.set_state(self.state.toggled());
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn ball(&self) -> Option<&Ball> {
        self.ball.as_ref()
    }

    pub fn ball_mut(&mut self) -> Option<&mut Ball> {
        self.ball.as_mut()
    }

    pub fn paddle(&self) -> Option<&Paddle> {
        self.paddle.as_ref()
    }

    pub fn paddle_mut(&mut self) -> Option<&mut Paddle> {
        self.paddle.as_mut()
    }

    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    /// Bricks not yet crashed
    pub fn live_brick_count(&self) -> usize {
        self.bricks.iter().filter(|b| !b.is_crashed()).count()
    }

    /// Bodies still waiting on their image
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Ticks run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run `callback` with the frame timestamp after every render
    pub fn set_frame_callback(&mut self, callback: impl FnMut(f64) + 'static) {
        self.frame_callback = Some(Box::new(callback));
    }

    /// Handle a key press. Input before the paddle exists is ignored.
    pub fn key_down(&mut self, key: &str) {
        let speed = self.config.paddle_speed;
        match self.config.keys.action(key) {
            Some(KeyAction::Left) => self.set_paddle_velocity(Vec2::new(-speed, 0.0)),
            Some(KeyAction::Right) => self.set_paddle_velocity(Vec2::new(speed, 0.0)),
            Some(KeyAction::Toggle) => self.toggle(),
            None => {}
        }
    }

    /// Handle a key release
    pub fn key_up(&mut self, key: &str) {
        if matches!(
            self.config.keys.action(key),
            Some(KeyAction::Left | KeyAction::Right)
        ) {
            self.set_paddle_velocity(Vec2::ZERO);
        }
    }

    fn set_paddle_velocity(&mut self, velocity: Vec2) {
        if let Some(paddle) = self.paddle.as_mut() {
            paddle.set_velocity(velocity);
        }
    }

    /// Run one frame. `timestamp` is passed through to the frame callback.
    pub fn tick(&mut self, timestamp: f64) -> Result<(), SceneError> {
        self.poll_pending();

        self.device.clear(Vec4::from_array(self.config.clear_color));

        if self.state == RunState::Running {
            self.resolve_collisions();
            self.advance()?;
        }

        self.render()?;

        if let Some(callback) = self.frame_callback.as_mut() {
            callback(timestamp);
        }
        self.frames += 1;
        Ok(())
    }

    fn resolve_collisions(&mut self) {
        let Some(ball) = self.ball.as_mut() else {
            return;
        };

        // First live brick in creation order wins; one crash per tick
        let collider = ball.collider();
        let hit = self
            .bricks
            .iter_mut()
            .filter(|brick| !brick.is_crashed())
            .find_map(|brick| check_collision(&collider, &brick.bounds()).map(|dir| (brick, dir)));
        if let Some((brick, direction)) = hit {
            brick.crash();
            ball.rebound(direction);
            log::debug!("Brick '{}' crashed ({direction:?})", brick.sprite().name);
        }

        let Some(paddle) = self.paddle.as_ref() else {
            return;
        };
        let paddle_top = paddle.sprite().position().y + paddle.sprite().height();
        if ball.sprite().position().y > paddle_top {
            return;
        }
        if let Some(direction) = check_collision(&ball.collider(), &paddle.bounds()) {
            ball.rebound(direction);
            let velocity = ball.velocity();
            ball.set_velocity(Vec2::new(velocity.x, velocity.y.abs()));
        }
    }

    fn advance(&mut self) -> Result<(), SceneError> {
        if let Some(ball) = self.ball.as_mut() {
            ball.step()?;
        }
        if let Some(paddle) = self.paddle.as_mut() {
            paddle.step()?;
        }
        Ok(())
    }

    fn render(&self) -> Result<(), SceneError> {
        for key in &self.draw_order {
            match *key {
                BodyKey::Ball => {
                    if let Some(ball) = &self.ball {
                        ball.render()?;
                    }
                }
                BodyKey::Paddle => {
                    if let Some(paddle) = &self.paddle {
                        paddle.render()?;
                    }
                }
                BodyKey::Brick(index) => {
                    if let Some(brick) = self.bricks.get(index) {
                        brick.render()?;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::MemoryAssets;
    use crate::renderer::FrameRecorder;
    use crate::scene::Viewport;
    use std::cell::Cell;

    fn recorder() -> Rc<FrameRecorder> {
        FrameRecorder::new(Viewport::new(400.0, 300.0))
    }

    fn sprite(name: &str, x: f32, y: f32, width: f32, height: f32) -> Sprite {
        Sprite::new(SpriteOptions {
            name: name.into(),
            position: Vec3::new(x, y, 0.0),
            width: Some(width),
            height: Some(height),
            ..Default::default()
        })
        .unwrap()
    }

    fn bare(recorder: &Rc<FrameRecorder>) -> GameSession {
        GameSession::bare(
            recorder.clone(),
            recorder.clone(),
            Box::new(MemoryAssets::new()),
            GameConfig::default(),
        )
    }

    /// Loader that knows every default image
    fn assets(recorder: &Rc<FrameRecorder>, delay: u32) -> MemoryAssets {
        let config = GameConfig::default();
        let mut assets = MemoryAssets::new().with_delay(delay);
        for (id, url) in [config.brick_image, config.ball_image, config.paddle_image]
            .into_iter()
            .enumerate()
        {
            assets.insert(url, LoadedImage::new(64, 64).with_texture(recorder.texture(id as u32)));
        }
        assets
    }

    fn ball_at_center(x: f32, y: f32, radius: f32, velocity: Vec2) -> Ball {
        let mut ball = Ball::new(sprite("ball", x - radius, y - radius, 2.0 * radius, 2.0 * radius));
        ball.set_collision_radius(radius);
        ball.set_velocity(velocity);
        ball
    }

    #[test]
    fn test_ball_crashes_overlapping_brick() {
        let recorder = recorder();
        let mut session = bare(&recorder);
        session.add_brick(Brick::new(sprite("brick_0", 0.0, 0.0, 40.0, 24.0)));
        session.add_ball(ball_at_center(20.0, 12.0, 5.0, Vec2::new(2.0, 2.0)));
        session.set_state(RunState::Running);

        session.tick(0.0).unwrap();

        assert!(session.bricks()[0].is_crashed());
        assert_eq!(session.live_brick_count(), 0);
        let ball = session.ball().unwrap();
        // Coincident centers count as a top-edge hit
        assert_eq!(ball.velocity(), Vec2::new(2.0, -2.0));
        assert_eq!(ball.sprite().position(), Vec3::new(17.0, 5.0, 0.0));

        // Crashed brick is no longer drawn
        assert_eq!(recorder.take_frame().instances.len(), 1);
    }

    #[test]
    fn test_one_brick_per_tick() {
        let recorder = recorder();
        let mut session = bare(&recorder);
        session.add_brick(Brick::new(sprite("brick_0", 0.0, 0.0, 40.0, 24.0)));
        session.add_brick(Brick::new(sprite("brick_1", 0.0, 0.0, 40.0, 24.0)));
        session.add_ball(ball_at_center(20.0, 12.0, 5.0, Vec2::ZERO));
        session.set_state(RunState::Running);

        session.tick(0.0).unwrap();
        assert!(session.bricks()[0].is_crashed());
        assert!(!session.bricks()[1].is_crashed());

        session.tick(16.0).unwrap();
        assert!(session.bricks()[1].is_crashed());
    }

    #[test]
    fn test_idle_freezes_physics_but_renders() {
        let recorder = recorder();
        let mut session = bare(&recorder);
        session.add_brick(Brick::new(sprite("brick_0", 0.0, 0.0, 40.0, 24.0)));
        session.add_ball(ball_at_center(20.0, 12.0, 5.0, Vec2::new(2.0, 2.0)));
        assert_eq!(session.state(), RunState::Idle);

        for frame in 0..3 {
            session.tick(frame as f64).unwrap();
        }

        assert!(!session.bricks()[0].is_crashed());
        let ball = session.ball().unwrap();
        assert_eq!(ball.sprite().position(), Vec3::new(15.0, 7.0, 0.0));
        assert_eq!(ball.velocity(), Vec2::new(2.0, 2.0));
        assert_eq!(recorder.draw_count(), 6);
        assert_eq!(recorder.take_frame().instances.len(), 2);
    }

    #[test]
    fn test_paddle_hit_sends_ball_up() {
        let recorder = recorder();
        let mut session = bare(&recorder);
        let mut paddle = Paddle::new(sprite("paddle", 0.0, 0.0, 40.0, 12.0));
        paddle.set_position_limits(PositionLimits::new(0.0, 360.0, 0.0, 0.0));
        session.add_paddle(paddle);
        session.add_ball(ball_at_center(20.0, 13.0, 5.0, Vec2::new(0.0, -2.0)));
        session.set_state(RunState::Running);

        session.tick(0.0).unwrap();

        let ball = session.ball().unwrap();
        assert_eq!(ball.velocity(), Vec2::new(0.0, 2.0));
        assert_eq!(ball.sprite().position().y, 10.0);
    }

    #[test]
    fn test_paddle_keeps_first_viewport_limits() {
        let recorder = recorder();
        let mut session = bare(&recorder);
        let mut paddle = Paddle::new(sprite("paddle", 390.0, 0.0, 40.0, 12.0));
        paddle.set_velocity(Vec2::new(50.0, 0.0));
        session.add_paddle(paddle);
        session.set_state(RunState::Running);

        session.tick(0.0).unwrap();
        assert_eq!(session.paddle().unwrap().sprite().position().x, 400.0);

        // Default limits were taken from the 400 wide viewport and stay put
        recorder.set_viewport(Viewport::new(800.0, 600.0));
        session.tick(16.0).unwrap();
        session.tick(32.0).unwrap();
        assert_eq!(session.paddle().unwrap().sprite().position().x, 400.0);
    }

    #[test]
    fn test_bodies_join_as_images_load() {
        let recorder = recorder();
        let level = Level::new("test", vec![1, 0, 2], 3);
        let mut session = GameSession::new(
            recorder.clone(),
            recorder.clone(),
            Box::new(assets(&recorder, 2)),
            &level,
            GameConfig::default(),
        )
        .unwrap();
        assert_eq!(session.pending_count(), 4);

        session.tick(0.0).unwrap();
        session.tick(1.0).unwrap();
        assert_eq!(session.pending_count(), 4);
        assert!(recorder.take_frame().instances.is_empty());
        assert!(session.ball().is_none());

        session.tick(2.0).unwrap();
        assert_eq!(session.pending_count(), 0);

        // Registration order: bricks, ball, paddle
        let frame = recorder.take_frame();
        assert_eq!(frame.instances.len(), 4);
        assert_eq!(frame.instances[0].color, [1.0, 0.0, 0.0]);
        assert_eq!(frame.instances[1].color, [0.0, 1.0, 0.0]);
        assert_eq!(frame.instances[3].color, [1.0, 1.0, 1.0]);
        assert_eq!(frame.clear_color, [0.7, 0.7, 0.7, 1.0]);

        // Layout follows the viewport: 40x12 paddle, 12px ball on top of it
        let paddle = session.paddle().unwrap();
        assert!(paddle.sprite().size().abs_diff_eq(Vec2::new(40.0, 12.0), 1e-4));
        assert!(paddle.sprite().position().abs_diff_eq(Vec3::new(180.0, 0.0, 0.0), 1e-4));
        let ball = session.ball().unwrap();
        assert!(ball.sprite().position().abs_diff_eq(Vec3::new(194.0, 12.0, 0.0), 1e-4));
        assert!((ball.collision_radius() - 6.0).abs() < 1e-4);
        assert_eq!(ball.velocity(), Vec2::new(2.0, 2.0));

        let brick = &session.bricks()[1];
        assert_eq!(brick.sprite().name, "brick_2");
        assert!(brick.position().abs_diff_eq(Vec2::new(800.0 / 3.0, 220.0), 1e-3));
    }

    #[test]
    fn test_failed_image_leaves_body_out() {
        let recorder = recorder();
        let config = GameConfig::default();
        let mut loader = assets(&recorder, 0);
        loader.fail(config.ball_image.clone(), "decode error");

        let mut session = GameSession::new(
            recorder.clone(),
            recorder.clone(),
            Box::new(loader),
            &Level::new("test", vec![1], 1),
            config,
        )
        .unwrap();
        session.set_state(RunState::Running);

        for frame in 0..5 {
            session.tick(frame as f64).unwrap();
        }
        assert!(session.ball().is_none());
        assert!(session.paddle().is_some());
        assert_eq!(session.bricks().len(), 1);
        assert_eq!(session.pending_count(), 0);
    }

    #[test]
    fn test_unknown_brick_code_is_fatal() {
        let recorder = recorder();
        let result = GameSession::new(
            recorder.clone(),
            recorder.clone(),
            Box::new(MemoryAssets::new()),
            &Level::new("bad", vec![1, 9], 2),
            GameConfig::default(),
        );
        assert!(matches!(
            result,
            Err(LevelError::UnknownBrickCode { index: 1, code: 9 })
        ));
    }

    #[test]
    fn test_keys_drive_paddle_and_toggle() {
        let recorder = recorder();
        let mut session = GameSession::new(
            recorder.clone(),
            recorder.clone(),
            Box::new(assets(&recorder, 0)),
            &Level::new("test", vec![0, 1], 2),
            GameConfig::default(),
        )
        .unwrap();

        // No paddle yet: movement keys do nothing
        session.key_down("ArrowLeft");
        session.tick(0.0).unwrap();
        assert_eq!(session.paddle().unwrap().velocity(), Vec2::ZERO);

        session.key_down("ArrowRight");
        assert_eq!(session.paddle().unwrap().velocity(), Vec2::new(2.0, 0.0));

        session.key_down(" ");
        assert_eq!(session.state(), RunState::Running);
        session.tick(1.0).unwrap();
        let x = session.paddle().unwrap().sprite().position().x;
        assert!((x - 182.0).abs() < 1e-4);

        session.key_up("ArrowRight");
        assert_eq!(session.paddle().unwrap().velocity(), Vec2::ZERO);

        session.key_down(" ");
        assert_eq!(session.state(), RunState::Idle);
    }

    #[test]
    fn test_frame_callback_gets_timestamp() {
        let recorder = recorder();
        let mut session = bare(&recorder);
        let seen = Rc::new(Cell::new(0.0));
        {
            let seen = seen.clone();
            session.set_frame_callback(move |timestamp| seen.set(timestamp));
        }

        session.tick(16.5).unwrap();
        assert_eq!(seen.get(), 16.5);
        assert_eq!(session.frames(), 1);
    }

    #[test]
    fn test_ball_colour_is_seeded() {
        let colour_for = |seed: u64| {
            let recorder = recorder();
            let config = GameConfig {
                seed,
                ..GameConfig::default()
            };
            let mut session = GameSession::new(
                recorder.clone(),
                recorder.clone(),
                Box::new(assets(&recorder, 0)),
                &Level::new("test", vec![1], 1),
                config,
            )
            .unwrap();
            session.tick(0.0).unwrap();
            session.ball().unwrap().sprite().color()
        };

        assert_eq!(colour_for(7), colour_for(7));
        assert_ne!(colour_for(7), colour_for(8));
    }
}
