//! Recording device
//!
//! Implements the scene's device and shader interfaces by capturing every
//! draw call as a [`QuadInstance`]. The wgpu pipeline replays a recorded
//! frame; the headless build and the tests inspect it directly.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glam::{Mat4, Vec3, Vec4};

use super::quad::{NO_TEXTURE, QuadInstance};
use crate::scene::device::uniforms;
use crate::scene::{DeviceDelegate, ShaderProgram, Texture, Viewport};

/// Draw calls issued since the last clear
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedFrame {
    pub clear_color: [f32; 4],
    /// Column-major projection in effect at the last draw
    pub projection: [[f32; 4]; 4],
    pub instances: Vec<QuadInstance>,
}

impl Default for RecordedFrame {
    fn default() -> Self {
        Self {
            clear_color: [0.0, 0.0, 0.0, 1.0],
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            instances: Vec::new(),
        }
    }
}

#[derive(Debug, Default)]
struct Uniforms {
    projection: Mat4,
    model: Mat4,
    color: Vec3,
    texture_unit: Option<i32>,
}

/// A texture known to the recorder by id
#[derive(Debug)]
struct RecordedTexture {
    id: u32,
    slot: Rc<Cell<Option<u32>>>,
}

impl Texture for RecordedTexture {
    fn bind(&self) {
        self.slot.set(Some(self.id));
    }
}

/// Device and shader program that record instead of drawing
#[derive(Debug)]
pub struct FrameRecorder {
    viewport: Cell<Viewport>,
    uniforms: RefCell<Uniforms>,
    frame: RefCell<RecordedFrame>,
    bound: Rc<Cell<Option<u32>>>,
    draws: Cell<usize>,
}

impl FrameRecorder {
    pub fn new(viewport: Viewport) -> Rc<Self> {
        Rc::new(Self {
            viewport: Cell::new(viewport),
            uniforms: RefCell::new(Uniforms::default()),
            frame: RefCell::new(RecordedFrame::default()),
            bound: Rc::new(Cell::new(None)),
            draws: Cell::new(0),
        })
    }

    pub fn set_viewport(&self, viewport: Viewport) {
        self.viewport.set(viewport);
    }

    /// A texture handle that records `id` when bound
    pub fn texture(&self, id: u32) -> Rc<dyn Texture> {
        Rc::new(RecordedTexture {
            id,
            slot: self.bound.clone(),
        })
    }

    /// Total draw calls since creation
    pub fn draw_count(&self) -> usize {
        self.draws.get()
    }

    /// Take the current frame, leaving an empty one with the same clear colour
    pub fn take_frame(&self) -> RecordedFrame {
        let mut frame = self.frame.borrow_mut();
        let next = RecordedFrame {
            clear_color: frame.clear_color,
            projection: frame.projection,
            instances: Vec::new(),
        };
        std::mem::replace(&mut *frame, next)
    }
}

impl DeviceDelegate for FrameRecorder {
    fn viewport(&self) -> Viewport {
        self.viewport.get()
    }

    fn clear(&self, color: Vec4) {
        let mut frame = self.frame.borrow_mut();
        frame.clear_color = color.to_array();
        frame.instances.clear();
    }

    fn draw_quad(&self) {
        let current = self.uniforms.borrow();
        // A bound texture only counts if the program samples unit 0
        let bound = self.bound.take();
        let texture = match (current.texture_unit, bound) {
            (Some(0), Some(id)) => id,
            _ => NO_TEXTURE,
        };

        let mut frame = self.frame.borrow_mut();
        frame.projection = current.projection.to_cols_array_2d();
        frame.instances.push(QuadInstance {
            model: current.model.to_cols_array_2d(),
            color: current.color.to_array(),
            texture,
        });
        self.draws.set(self.draws.get() + 1);
    }
}

impl ShaderProgram for FrameRecorder {
    fn use_program(&self) {
        // Uniforms do not carry over between sprites
        self.uniforms.borrow_mut().texture_unit = None;
    }

    fn set_matrix4(&self, name: &str, value: &Mat4) {
        let mut current = self.uniforms.borrow_mut();
        match name {
            uniforms::PROJECTION => current.projection = *value,
            uniforms::MODEL => current.model = *value,
            _ => log::trace!("Unknown mat4 uniform '{name}'"),
        }
    }

    fn set_vector3f(&self, name: &str, value: Vec3) {
        if name == uniforms::SPRITE_COLOR {
            self.uniforms.borrow_mut().color = value;
        } else {
            log::trace!("Unknown vec3 uniform '{name}'");
        }
    }

    fn set_integer(&self, name: &str, value: i32) {
        if name == uniforms::TEXTURE_0 {
            self.uniforms.borrow_mut().texture_unit = Some(value);
        } else {
            log::trace!("Unknown int uniform '{name}'");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_starts_new_frame() {
        let recorder = FrameRecorder::new(Viewport::new(100.0, 100.0));
        recorder.use_program();
        recorder.draw_quad();
        recorder.draw_quad();
        assert_eq!(recorder.take_frame().instances.len(), 2);

        recorder.draw_quad();
        recorder.clear(Vec4::new(0.7, 0.7, 0.7, 1.0));
        let frame = recorder.take_frame();
        assert!(frame.instances.is_empty());
        assert_eq!(frame.clear_color, [0.7, 0.7, 0.7, 1.0]);
        assert_eq!(recorder.draw_count(), 3);
    }

    #[test]
    fn test_texture_binding_applies_to_one_draw() {
        let recorder = FrameRecorder::new(Viewport::new(100.0, 100.0));
        let texture = recorder.texture(3);

        recorder.use_program();
        recorder.set_integer(uniforms::TEXTURE_0, 0);
        texture.bind();
        recorder.draw_quad();

        recorder.use_program();
        recorder.draw_quad();

        let frame = recorder.take_frame();
        assert_eq!(frame.instances[0].texture, 3);
        assert!(frame.instances[0].is_textured());
        assert_eq!(frame.instances[1].texture, NO_TEXTURE);
    }

    #[test]
    fn test_unknown_uniforms_are_ignored() {
        let recorder = FrameRecorder::new(Viewport::new(100.0, 100.0));
        recorder.set_vector3f(uniforms::SPRITE_COLOR, Vec3::X);
        recorder.set_vector3f("tint", Vec3::Y);
        recorder.set_matrix4("view", &Mat4::from_scale(Vec3::splat(2.0)));
        recorder.draw_quad();

        let quad = recorder.take_frame().instances[0];
        assert_eq!(quad.color, [1.0, 0.0, 0.0]);
        assert_eq!(quad.model, Mat4::IDENTITY.to_cols_array_2d());
    }
}
