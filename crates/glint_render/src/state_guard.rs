//! GL state capture and restore
//!
//! The toolkit shares one GL context with the host game, which has its own
//! opinions about blending, depth testing, and bound objects. Every batch
//! flush is bracketed by a [`GlStateGuard`]: construction snapshots the
//! pieces of state the pipeline mutates, and drop writes them all back,
//! whether the flush succeeded, bailed early, or panicked.

use std::num::NonZeroU32;

use glow::HasContext;

/// RAII snapshot of the GL state touched by the batch pipeline
pub struct GlStateGuard<'a> {
    gl: &'a glow::Context,
    program: Option<glow::Program>,
    array_buffer: Option<glow::Buffer>,
    vertex_array: Option<glow::VertexArray>,
    texture_2d: Option<glow::Texture>,
    active_texture: u32,
    blend: bool,
    blend_src_rgb: u32,
    blend_dst_rgb: u32,
    blend_src_alpha: u32,
    blend_dst_alpha: u32,
    depth_test: bool,
    cull_face: bool,
    scissor_test: bool,
    scissor_box: [i32; 4],
}

impl<'a> GlStateGuard<'a> {
    /// Snapshot the current state.
    ///
    /// # Safety
    ///
    /// `gl` must be current on this thread and stay current until the guard
    /// drops.
    pub unsafe fn capture(gl: &'a glow::Context) -> Self {
        let mut scissor_box = [0i32; 4];
        gl.get_parameter_i32_slice(glow::SCISSOR_BOX, &mut scissor_box);

        Self {
            gl,
            program: NonZeroU32::new(gl.get_parameter_i32(glow::CURRENT_PROGRAM) as u32)
                .map(glow::NativeProgram),
            array_buffer: NonZeroU32::new(
                gl.get_parameter_i32(glow::ARRAY_BUFFER_BINDING) as u32
            )
            .map(glow::NativeBuffer),
            vertex_array: NonZeroU32::new(
                gl.get_parameter_i32(glow::VERTEX_ARRAY_BINDING) as u32
            )
            .map(glow::NativeVertexArray),
            texture_2d: NonZeroU32::new(gl.get_parameter_i32(glow::TEXTURE_BINDING_2D) as u32)
                .map(glow::NativeTexture),
            active_texture: gl.get_parameter_i32(glow::ACTIVE_TEXTURE) as u32,
            blend: gl.is_enabled(glow::BLEND),
            blend_src_rgb: gl.get_parameter_i32(glow::BLEND_SRC_RGB) as u32,
            blend_dst_rgb: gl.get_parameter_i32(glow::BLEND_DST_RGB) as u32,
            blend_src_alpha: gl.get_parameter_i32(glow::BLEND_SRC_ALPHA) as u32,
            blend_dst_alpha: gl.get_parameter_i32(glow::BLEND_DST_ALPHA) as u32,
            depth_test: gl.is_enabled(glow::DEPTH_TEST),
            cull_face: gl.is_enabled(glow::CULL_FACE),
            scissor_test: gl.is_enabled(glow::SCISSOR_TEST),
            scissor_box,
        }
    }
}

impl Drop for GlStateGuard<'_> {
    fn drop(&mut self) {
        let gl = self.gl;
        unsafe {
            gl.use_program(self.program);
            gl.bind_buffer(glow::ARRAY_BUFFER, self.array_buffer);
            gl.bind_vertex_array(self.vertex_array);
            gl.active_texture(self.active_texture);
            gl.bind_texture(glow::TEXTURE_2D, self.texture_2d);

            set_cap(gl, glow::BLEND, self.blend);
            gl.blend_func_separate(
                self.blend_src_rgb,
                self.blend_dst_rgb,
                self.blend_src_alpha,
                self.blend_dst_alpha,
            );
            set_cap(gl, glow::DEPTH_TEST, self.depth_test);
            set_cap(gl, glow::CULL_FACE, self.cull_face);
            set_cap(gl, glow::SCISSOR_TEST, self.scissor_test);
            gl.scissor(
                self.scissor_box[0],
                self.scissor_box[1],
                self.scissor_box[2],
                self.scissor_box[3],
            );
        }
    }
}

unsafe fn set_cap(gl: &glow::Context, cap: u32, enabled: bool) {
    if enabled {
        gl.enable(cap);
    } else {
        gl.disable(cap);
    }
}
