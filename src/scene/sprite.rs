//! Renderable body: a coloured, optionally textured rectangle
//!
//! A `Sprite` embeds a [`Transform`] and adds the geometry the collision code
//! needs (size, center, edge classification). Rendering goes through the
//! attached [`ShaderProgram`] and [`DeviceDelegate`]; both are required.

use std::fmt;
use std::rc::Rc;

use glam::{Vec2, Vec3};

use super::device::{DeviceDelegate, ShaderProgram, Texture, Viewport, uniforms};
use super::transform::Transform;
use crate::assets::LoadedImage;
use crate::error::SceneError;

/// Edge of a rectangle struck by a mover
///
/// Names are in y-up viewport space: `Up` is the top edge, so a mover above
/// the rectangle is classified `Up`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// True for the top and bottom edges
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// Outward edge normal plus the minimum cosine an offset must reach against it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionInfo {
    pub dir: Direction,
    pub vec: Vec2,
    pub min_cos: f32,
}

/// Edge classification table for a `width`×`height` box, in test order.
///
/// Top/bottom need `|h / diagonal|`, left/right need `|w / diagonal|`, so a
/// near-corner hit goes to the edge of the longer side.
pub fn direction_infos(width: f32, height: f32) -> [DirectionInfo; 4] {
    let diagonal = Vec2::new(width, height).length();
    let (vertical_cos, horizontal_cos) = if diagonal > 0.0 {
        ((height / diagonal).abs(), (width / diagonal).abs())
    } else {
        (0.0, 0.0)
    };

    [
        DirectionInfo {
            dir: Direction::Down,
            vec: Vec2::NEG_Y,
            min_cos: vertical_cos,
        },
        DirectionInfo {
            dir: Direction::Up,
            vec: Vec2::Y,
            min_cos: vertical_cos,
        },
        DirectionInfo {
            dir: Direction::Right,
            vec: Vec2::X,
            min_cos: horizontal_cos,
        },
        DirectionInfo {
            dir: Direction::Left,
            vec: Vec2::NEG_X,
            min_cos: horizontal_cos,
        },
    ]
}

/// Construction options for a sprite
#[derive(Default)]
pub struct SpriteOptions {
    pub name: String,
    pub position: Vec3,
    /// Explicit size; falls back to the image's natural size
    pub width: Option<f32>,
    pub height: Option<f32>,
    /// Normalized RGB, white when unset
    pub color: Option<Vec3>,
    pub image: Option<LoadedImage>,
}

/// A rectangular visual entity
pub struct Sprite {
    pub name: String,
    pub transform: Transform,
    width: f32,
    height: f32,
    color: Vec3,
    texture: Option<Rc<dyn Texture>>,
    shader: Option<Rc<dyn ShaderProgram>>,
    device: Option<Rc<dyn DeviceDelegate>>,
}

impl fmt::Debug for Sprite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sprite")
            .field("name", &self.name)
            .field("transform", &self.transform)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("color", &self.color)
            .field("textured", &self.texture.is_some())
            .finish_non_exhaustive()
    }
}

impl Sprite {
    /// Build a sprite, taking any unset dimension from the image.
    ///
    /// Fails when the resolved width or height is not a positive number.
    pub fn new(options: SpriteOptions) -> Result<Self, SceneError> {
        let SpriteOptions {
            name,
            position,
            width,
            height,
            color,
            image,
        } = options;

        let natural = image.as_ref().map(|img| (img.width as f32, img.height as f32));
        let width = width.or(natural.map(|(w, _)| w)).unwrap_or(0.0);
        let height = height.or(natural.map(|(_, h)| h)).unwrap_or(0.0);

        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(SceneError::InvalidSize { width, height });
        }

        let transform = Transform {
            position,
            scale: Vec3::new(width, height, 1.0),
            ..Default::default()
        };

        Ok(Self {
            name,
            transform,
            width,
            height,
            color: color.unwrap_or(Vec3::ONE),
            texture: image.and_then(|img| img.texture),
            shader: None,
            device: None,
        })
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.transform.position()
    }

    #[inline]
    pub fn set_position(&mut self, position: Vec3) {
        self.transform.set_position(position);
    }

    pub fn color(&self) -> Vec3 {
        self.color
    }

    /// Replace the texture shown by this sprite
    pub fn set_frame(&mut self, texture: Rc<dyn Texture>) {
        self.texture = Some(texture);
    }

    pub fn set_shader(&mut self, shader: Rc<dyn ShaderProgram>) {
        self.shader = Some(shader);
    }

    pub fn set_device(&mut self, device: Rc<dyn DeviceDelegate>) {
        self.device = Some(device);
    }

    /// Viewport of the attached device
    pub fn viewport(&self) -> Result<Viewport, SceneError> {
        self.device
            .as_ref()
            .map(|device| device.viewport())
            .ok_or(SceneError::MissingDevice)
    }

    /// Center of the bounding box in viewport space
    pub fn center(&self) -> Vec2 {
        self.position().truncate() + self.size() / 2.0
    }

    pub fn direction_infos(&self) -> [DirectionInfo; 4] {
        direction_infos(self.width, self.height)
    }

    /// Issue one draw call for this sprite.
    pub fn render(&self) -> Result<(), SceneError> {
        let shader = self.shader.as_ref().ok_or(SceneError::MissingShader)?;
        let device = self.device.as_ref().ok_or(SceneError::MissingDevice)?;

        shader.use_program();
        shader.set_matrix4(uniforms::PROJECTION, &device.viewport().projection());
        shader.set_matrix4(uniforms::MODEL, &self.transform.compute_model_mat());
        shader.set_vector3f(uniforms::SPRITE_COLOR, self.color);

        if let Some(texture) = &self.texture {
            shader.set_integer(uniforms::TEXTURE_0, 0);
            texture.bind();
        }

        device.draw_quad();
        Ok(())
    }
}

/// Anything with a sprite that can be drawn
pub trait Renderable {
    fn sprite(&self) -> &Sprite;

    fn render(&self) -> Result<(), SceneError> {
        self.sprite().render()
    }
}

impl Renderable for Sprite {
    fn sprite(&self) -> &Sprite {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::FrameRecorder;

    fn sized(width: f32, height: f32) -> SpriteOptions {
        SpriteOptions {
            name: "test".into(),
            width: Some(width),
            height: Some(height),
            ..Default::default()
        }
    }

    #[test]
    fn test_size_from_image_when_not_given() {
        let sprite = Sprite::new(SpriteOptions {
            image: Some(LoadedImage::new(32, 16)),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(sprite.size(), Vec2::new(32.0, 16.0));
        assert_eq!(sprite.transform.scale, Vec3::new(32.0, 16.0, 1.0));

        // Explicit size wins over the image
        let sprite = Sprite::new(SpriteOptions {
            width: Some(10.0),
            image: Some(LoadedImage::new(32, 16)),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(sprite.size(), Vec2::new(10.0, 16.0));
    }

    #[test]
    fn test_rejects_non_positive_size() {
        assert!(matches!(
            Sprite::new(sized(0.0, 5.0)),
            Err(SceneError::InvalidSize { .. })
        ));
        assert!(matches!(
            Sprite::new(sized(5.0, -1.0)),
            Err(SceneError::InvalidSize { .. })
        ));
        assert!(Sprite::new(SpriteOptions::default()).is_err());
    }

    #[test]
    fn test_center() {
        let mut sprite = Sprite::new(sized(40.0, 24.0)).unwrap();
        sprite.set_position(Vec3::new(100.0, 50.0, 0.0));
        assert_eq!(sprite.center(), Vec2::new(120.0, 62.0));
    }

    #[test]
    fn test_direction_thresholds_favor_longer_side() {
        let infos = direction_infos(40.0, 10.0);
        let diag = (40.0f32 * 40.0 + 10.0 * 10.0).sqrt();
        assert_eq!(infos[0].dir, Direction::Down);
        assert_eq!(infos[1].dir, Direction::Up);
        assert_eq!(infos[2].dir, Direction::Right);
        assert_eq!(infos[3].dir, Direction::Left);
        assert!((infos[1].min_cos - 10.0 / diag).abs() < 1e-6);
        assert!((infos[2].min_cos - 40.0 / diag).abs() < 1e-6);
    }

    #[test]
    fn test_render_requires_shader_and_device() {
        let recorder = FrameRecorder::new(Viewport::new(400.0, 300.0));
        let mut sprite = Sprite::new(sized(10.0, 10.0)).unwrap();

        assert_eq!(sprite.render(), Err(SceneError::MissingShader));
        sprite.set_shader(recorder.clone());
        assert_eq!(sprite.render(), Err(SceneError::MissingDevice));
        assert_eq!(recorder.draw_count(), 0);

        sprite.set_device(recorder.clone());
        assert!(sprite.render().is_ok());
        assert_eq!(recorder.draw_count(), 1);
    }

    #[test]
    fn test_render_uploads_uniforms() {
        let recorder = FrameRecorder::new(Viewport::new(400.0, 300.0));
        let mut sprite = Sprite::new(SpriteOptions {
            name: "brick".into(),
            position: Vec3::new(10.0, 20.0, 0.0),
            width: Some(40.0),
            height: Some(24.0),
            color: Some(Vec3::new(1.0, 0.0, 0.0)),
            image: Some(LoadedImage::new(8, 8).with_texture(recorder.texture(7))),
        })
        .unwrap();
        sprite.set_shader(recorder.clone());
        sprite.set_device(recorder.clone());
        sprite.render().unwrap();

        let frame = recorder.take_frame();
        assert_eq!(frame.instances.len(), 1);
        let quad = frame.instances[0];
        assert_eq!(quad.color, [1.0, 0.0, 0.0]);
        assert_eq!(quad.texture, 7);
        assert_eq!(
            frame.projection,
            Viewport::new(400.0, 300.0).projection().to_cols_array_2d()
        );
        assert_eq!(
            quad.model,
            sprite.transform.compute_model_mat().to_cols_array_2d()
        );
    }

    #[test]
    fn test_set_frame_swaps_texture() {
        let recorder = FrameRecorder::new(Viewport::new(400.0, 300.0));
        let mut sprite = Sprite::new(SpriteOptions {
            image: Some(LoadedImage::new(8, 8).with_texture(recorder.texture(7))),
            ..sized(20.0, 20.0)
        })
        .unwrap();
        sprite.set_shader(recorder.clone());
        sprite.set_device(recorder.clone());

        sprite.render().unwrap();
        sprite.set_frame(recorder.texture(9));
        sprite.render().unwrap();

        let textures: Vec<u32> = recorder
            .take_frame()
            .instances
            .iter()
            .map(|quad| quad.texture)
            .collect();
        assert_eq!(textures, vec![7, 9]);
    }
}
