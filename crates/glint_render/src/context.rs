//! Render context
//!
//! [`RenderContext`] owns everything the pipeline needs for a frame: the
//! shared GL handle, both shader programs, the transform and scissor
//! stacks, and the CPU-side batches. It is created once when the host's GL
//! context comes up and handed to callers explicitly; there is no global
//! instance. Code that sits above the render layer receives a
//! [`RendererSlot`] instead and asks it for the context.
//!
//! All GL work happens on the thread that owns the host's GL context.
//! Methods that issue GL calls assume that context is current; they are not
//! safe to call from worker threads.

use std::sync::Arc;

use glam::Mat4;
use glow::HasContext;
use tracing::debug;

use glint_core::{Color, CornerRadius, Rect};

use crate::error::RenderError;
use crate::mesh::{Mesh, VertexFormat};
use crate::scissor::ScissorStack;
use crate::shaders;
use crate::state_guard::GlStateGuard;
use crate::tessellator;
use crate::transform::TransformStack;

struct SolidPipeline {
    program: glow::Program,
    u_transform: glow::UniformLocation,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
}

struct TextPipeline {
    program: glow::Program,
    u_transform: glow::UniformLocation,
    u_atlas: glow::UniformLocation,
    u_dist_range: glow::UniformLocation,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
}

/// Per-frame rendering state and draw API
pub struct RenderContext {
    gl: Arc<glow::Context>,
    solid: SolidPipeline,
    text: TextPipeline,
    transforms: TransformStack,
    scissors: ScissorStack,
    solid_mesh: Mesh,
    text_mesh: Mesh,
    projection: Mat4,
    viewport: (u32, u32),
    scale_factor: f64,
}

impl RenderContext {
    /// Compile the shader programs and allocate the streaming buffers.
    ///
    /// Call once, on the render thread, with the host's GL context current.
    pub fn new(gl: Arc<glow::Context>) -> Result<Self, RenderError> {
        unsafe {
            let solid_program =
                shaders::compile_program(&gl, shaders::SOLID_VERTEX, shaders::SOLID_FRAGMENT)?;
            let text_program =
                shaders::compile_program(&gl, shaders::TEXT_VERTEX, shaders::TEXT_FRAGMENT)?;

            let solid = SolidPipeline {
                u_transform: shaders::require_uniform(&gl, solid_program, "u_transform")?,
                vao: create_vertex_array(&gl, solid_program, VertexFormat::PositionColor)?,
                vbo: current_array_buffer(&gl)?,
                program: solid_program,
            };
            let text = TextPipeline {
                u_transform: shaders::require_uniform(&gl, text_program, "u_transform")?,
                u_atlas: shaders::require_uniform(&gl, text_program, "u_atlas")?,
                u_dist_range: shaders::require_uniform(&gl, text_program, "u_dist_range")?,
                vao: create_vertex_array(&gl, text_program, VertexFormat::PositionColorUv)?,
                vbo: current_array_buffer(&gl)?,
                program: text_program,
            };

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);

            debug!("render context initialized");
            Ok(Self {
                gl,
                solid,
                text,
                transforms: TransformStack::new(),
                scissors: ScissorStack::new(),
                solid_mesh: Mesh::new(VertexFormat::PositionColor),
                text_mesh: Mesh::new(VertexFormat::PositionColorUv),
                projection: Mat4::IDENTITY,
                viewport: (0, 0),
                scale_factor: 1.0,
            })
        }
    }

    /// Start a frame: record the physical viewport and logical scale, and
    /// reset both stacks to their root states.
    pub fn begin_frame(&mut self, viewport_width: u32, viewport_height: u32, scale_factor: f64) {
        self.viewport = (viewport_width, viewport_height);
        self.scale_factor = scale_factor;
        let logical_w = viewport_width as f32 / scale_factor as f32;
        let logical_h = viewport_height as f32 / scale_factor as f32;
        self.projection =
            Mat4::orthographic_rh_gl(0.0, logical_w, logical_h, 0.0, -1000.0, 1000.0);
        self.transforms.reset();
        debug_assert_eq!(
            self.scissors.depth(),
            0,
            "clip region leaked across frames: enable_clip without disable_clip"
        );
        self.scissors.reset();
        self.solid_mesh.clear();
        self.text_mesh.clear();
    }

    /// Flush any pending geometry at frame end
    pub fn end_frame(&mut self) {
        self.flush_solid();
    }

    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    // --- transform stack -------------------------------------------------

    /// Save the current transform state. Pending geometry is flushed first
    /// so earlier draws keep the matrix they were issued under.
    pub fn push_transform(&mut self) {
        self.flush_solid();
        self.transforms.push();
    }

    /// Restore the previous transform state, flushing pending geometry.
    ///
    /// # Panics
    ///
    /// Panics on an unbalanced pop (see [`TransformStack::pop`]).
    pub fn pop_transform(&mut self) {
        self.flush_solid();
        self.transforms.pop();
    }

    pub fn translate(&mut self, x: f32, y: f32) {
        self.flush_solid();
        self.transforms.translate(x, y, 0.0);
    }

    pub fn rotate_z(&mut self, degrees: f32) {
        self.flush_solid();
        self.transforms.rotate_z(degrees);
    }

    pub fn scale(&mut self, x: f32, y: f32) {
        self.flush_solid();
        self.transforms.scale(x, y, 1.0);
    }

    pub fn transforms(&self) -> &TransformStack {
        &self.transforms
    }

    // --- scissor stack ---------------------------------------------------

    /// Clip subsequent draws to `rect` (logical coordinates, intersected
    /// with any enclosing clip region).
    ///
    /// The current transform translation is baked into the region, so a
    /// scroll container must translate before calling this.
    pub fn enable_clip(&mut self, rect: Rect) {
        self.flush_solid();
        let t = self.transforms.translation();
        self.scissors.push_logical(rect, (t.x, t.y), self.scale_factor);
    }

    /// Drop the innermost clip region.
    ///
    /// # Panics
    ///
    /// Panics when no region is active (see [`ScissorStack::pop`]).
    pub fn disable_clip(&mut self) {
        self.flush_solid();
        let _ = self.scissors.pop();
    }

    /// Innermost clip region in logical coordinates, for hit-testing
    pub fn current_clip_logical(&self) -> Option<Rect> {
        self.scissors.current_logical(self.scale_factor)
    }

    // --- solid geometry --------------------------------------------------

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        tessellator::fill_rect(&mut self.solid_mesh, rect, color);
    }

    pub fn fill_rounded_rect(&mut self, rect: Rect, color: Color, radii: CornerRadius) {
        tessellator::fill_rounded_rect(&mut self.solid_mesh, rect, color, radii);
    }

    pub fn stroke_rounded_rect(
        &mut self,
        rect: Rect,
        color: Color,
        radii: CornerRadius,
        thickness: f32,
    ) {
        tessellator::stroke_rounded_rect(&mut self.solid_mesh, rect, color, radii, thickness);
    }

    /// Pie slice (`inner_radius` none) or donut segment. Degrees, clockwise
    /// in screen space.
    #[allow(clippy::too_many_arguments)]
    pub fn fill_arc(
        &mut self,
        cx: f32,
        cy: f32,
        outer_radius: f32,
        inner_radius: Option<f32>,
        start_deg: f32,
        end_deg: f32,
        color: Color,
    ) {
        tessellator::fill_arc(
            &mut self.solid_mesh,
            cx,
            cy,
            outer_radius,
            inner_radius,
            start_deg,
            end_deg,
            color,
        );
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32, color: Color) {
        tessellator::line(&mut self.solid_mesh, x1, y1, x2, y2, width, color);
    }

    pub fn fill_triangle(&mut self, a: (f32, f32), b: (f32, f32), c: (f32, f32), color: Color) {
        self.solid_mesh.triangle(a, b, c, color);
    }

    // --- text ------------------------------------------------------------

    /// Batch the text layer writes glyph quads into
    pub fn text_mesh_mut(&mut self) -> &mut Mesh {
        &mut self.text_mesh
    }

    /// Draw the accumulated glyph quads with the given atlas bound.
    ///
    /// `distance_range` is the atlas generator's signed-distance range in
    /// atlas pixels.
    pub fn flush_text(&mut self, atlas: glow::Texture, distance_range: f32) {
        if self.text_mesh.is_empty() {
            return;
        }
        let matrix = self.projection * *self.transforms.top();
        unsafe {
            let gl = &self.gl;
            let _guard = GlStateGuard::capture(gl);
            self.apply_batch_state(gl);

            gl.use_program(Some(self.text.program));
            gl.uniform_matrix_4_f32_slice(
                Some(&self.text.u_transform),
                false,
                &matrix.to_cols_array(),
            );
            gl.active_texture(glow::TEXTURE0);
            gl.bind_texture(glow::TEXTURE_2D, Some(atlas));
            gl.uniform_1_i32(Some(&self.text.u_atlas), 0);
            gl.uniform_1_f32(Some(&self.text.u_dist_range), distance_range);

            gl.bind_vertex_array(Some(self.text.vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.text.vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(self.text_mesh.vertex_data()),
                glow::STREAM_DRAW,
            );
            gl.draw_arrays(glow::TRIANGLES, 0, self.text_mesh.vertex_count() as i32);
        }
        self.text_mesh.clear();
    }

    /// Upload and draw the pending solid batch under the current transform
    pub fn flush_solid(&mut self) {
        if self.solid_mesh.is_empty() {
            return;
        }
        let matrix = self.projection * *self.transforms.top();
        unsafe {
            let gl = &self.gl;
            let _guard = GlStateGuard::capture(gl);
            self.apply_batch_state(gl);

            gl.use_program(Some(self.solid.program));
            gl.uniform_matrix_4_f32_slice(
                Some(&self.solid.u_transform),
                false,
                &matrix.to_cols_array(),
            );
            gl.bind_vertex_array(Some(self.solid.vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.solid.vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(self.solid_mesh.vertex_data()),
                glow::STREAM_DRAW,
            );
            gl.draw_arrays(glow::TRIANGLES, 0, self.solid_mesh.vertex_count() as i32);
        }
        self.solid_mesh.clear();
    }

    /// Shared fixed-function setup for both batch kinds, issued inside a
    /// state guard bracket.
    unsafe fn apply_batch_state(&self, gl: &glow::Context) {
        gl.disable(glow::DEPTH_TEST);
        gl.disable(glow::CULL_FACE);
        gl.enable(glow::BLEND);
        gl.blend_func_separate(
            glow::SRC_ALPHA,
            glow::ONE_MINUS_SRC_ALPHA,
            glow::ONE,
            glow::ONE_MINUS_SRC_ALPHA,
        );
        match self.scissors.current() {
            Some(rect) => {
                gl.enable(glow::SCISSOR_TEST);
                let (x, y, w, h) = ScissorStack::to_gl_box(rect, self.viewport.1);
                gl.scissor(x, y, w, h);
            }
            None => gl.disable(glow::SCISSOR_TEST),
        }
    }
}

impl Drop for RenderContext {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_program(self.solid.program);
            self.gl.delete_program(self.text.program);
            self.gl.delete_vertex_array(self.solid.vao);
            self.gl.delete_vertex_array(self.text.vao);
            self.gl.delete_buffer(self.solid.vbo);
            self.gl.delete_buffer(self.text.vbo);
        }
    }
}

/// Create a VAO + VBO pair with attribute pointers for `format`. Leaves the
/// new buffer bound so the caller can fetch it.
unsafe fn create_vertex_array(
    gl: &glow::Context,
    program: glow::Program,
    format: VertexFormat,
) -> Result<glow::VertexArray, RenderError> {
    let vao = gl
        .create_vertex_array()
        .map_err(RenderError::ResourceCreation)?;
    let vbo = gl.create_buffer().map_err(RenderError::ResourceCreation)?;
    gl.bind_vertex_array(Some(vao));
    gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));

    let stride = (format.stride() * std::mem::size_of::<f32>()) as i32;
    let mut offset = 0;
    let mut attrib = |name: &str, size: i32| {
        if let Some(location) = gl.get_attrib_location(program, name) {
            gl.enable_vertex_attrib_array(location);
            gl.vertex_attrib_pointer_f32(location, size, glow::FLOAT, false, stride, offset);
        }
        offset += size * std::mem::size_of::<f32>() as i32;
    };
    attrib("a_position", 3);
    attrib("a_color", 4);
    if format == VertexFormat::PositionColorUv {
        attrib("a_uv", 2);
    }
    Ok(vao)
}

unsafe fn current_array_buffer(gl: &glow::Context) -> Result<glow::Buffer, RenderError> {
    std::num::NonZeroU32::new(gl.get_parameter_i32(glow::ARRAY_BUFFER_BINDING) as u32)
        .map(glow::NativeBuffer)
        .ok_or_else(|| RenderError::ResourceCreation("no array buffer bound".into()))
}

/// Explicit home for the render context.
///
/// The slot is created empty, filled exactly once during GL init, and
/// passed by reference to everything that draws. Asking for the context
/// before registration, or registering twice, is a setup bug and panics
/// with a message naming the missing step.
#[derive(Default)]
pub struct RendererSlot {
    context: Option<RenderContext>,
}

impl RendererSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the context. Panics if one is already installed.
    pub fn register(&mut self, context: RenderContext) {
        if self.context.is_some() {
            panic!("render context already registered; register() must be called exactly once");
        }
        self.context = Some(context);
    }

    pub fn is_registered(&self) -> bool {
        self.context.is_some()
    }

    /// # Panics
    ///
    /// Panics if no context was registered during GL init.
    pub fn get(&self) -> &RenderContext {
        self.context
            .as_ref()
            .unwrap_or_else(|| panic!("render context not registered: call RendererSlot::register after GL init, before drawing"))
    }

    /// # Panics
    ///
    /// Panics if no context was registered during GL init.
    pub fn get_mut(&mut self) -> &mut RenderContext {
        self.context
            .as_mut()
            .unwrap_or_else(|| panic!("render context not registered: call RendererSlot::register after GL init, before drawing"))
    }
}
