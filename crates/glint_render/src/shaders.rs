//! Shader sources and compilation
//!
//! Two programs cover the whole pipeline: a solid-color program for
//! tessellated geometry and an MSDF program for text. Both target GLSL 1.40
//! (OpenGL 3.1), the floor the host game guarantees.

use glow::HasContext;

use crate::error::RenderError;

/// Solid geometry, vertex color only
pub const SOLID_VERTEX: &str = r#"#version 140
uniform mat4 u_transform;

in vec3 a_position;
in vec4 a_color;

out vec4 v_color;

void main() {
    v_color = a_color;
    gl_Position = u_transform * vec4(a_position, 1.0);
}
"#;

pub const SOLID_FRAGMENT: &str = r#"#version 140
in vec4 v_color;

out vec4 f_color;

void main() {
    f_color = v_color;
}
"#;

/// MSDF text, sampling the glyph atlas
pub const TEXT_VERTEX: &str = r#"#version 140
uniform mat4 u_transform;

in vec3 a_position;
in vec4 a_color;
in vec2 a_uv;

out vec4 v_color;
out vec2 v_uv;

void main() {
    v_color = a_color;
    v_uv = a_uv;
    gl_Position = u_transform * vec4(a_position, 1.0);
}
"#;

/// Median-of-three MSDF reconstruction with fwidth-based antialiasing.
/// `u_dist_range` is the atlas generator's distance range in atlas pixels.
pub const TEXT_FRAGMENT: &str = r#"#version 140
uniform sampler2D u_atlas;
uniform float u_dist_range;

in vec4 v_color;
in vec2 v_uv;

out vec4 f_color;

float median3(vec3 v) {
    return max(min(v.r, v.g), min(max(v.r, v.g), v.b));
}

void main() {
    vec3 msd = texture(u_atlas, v_uv).rgb;
    float sd = median3(msd) - 0.5;
    vec2 unit_range = vec2(u_dist_range) / vec2(textureSize(u_atlas, 0));
    float px_range = max(0.5 * dot(unit_range, 1.0 / fwidth(v_uv)), 1.0);
    float alpha = clamp(sd * px_range + 0.5, 0.0, 1.0);
    f_color = vec4(v_color.rgb, v_color.a * alpha);
}
"#;

/// Compile one shader stage, returning the GL info log on failure
pub(crate) unsafe fn compile_shader(
    gl: &glow::Context,
    shader_type: u32,
    source: &str,
) -> Result<glow::Shader, RenderError> {
    let shader = gl
        .create_shader(shader_type)
        .map_err(RenderError::ResourceCreation)?;
    gl.shader_source(shader, source);
    gl.compile_shader(shader);
    if !gl.get_shader_compile_status(shader) {
        let log = gl.get_shader_info_log(shader);
        gl.delete_shader(shader);
        return Err(RenderError::ShaderCompile(log));
    }
    Ok(shader)
}

/// Compile and link a vertex + fragment pair.
///
/// Stages are detached and deleted after linking either way, so a link
/// failure leaks nothing.
pub(crate) unsafe fn compile_program(
    gl: &glow::Context,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<glow::Program, RenderError> {
    let program = gl
        .create_program()
        .map_err(RenderError::ResourceCreation)?;

    let vertex = compile_shader(gl, glow::VERTEX_SHADER, vertex_source)?;
    let fragment = match compile_shader(gl, glow::FRAGMENT_SHADER, fragment_source) {
        Ok(fragment) => fragment,
        Err(e) => {
            gl.delete_shader(vertex);
            return Err(e);
        }
    };

    gl.attach_shader(program, vertex);
    gl.attach_shader(program, fragment);
    gl.link_program(program);

    gl.detach_shader(program, vertex);
    gl.detach_shader(program, fragment);
    gl.delete_shader(vertex);
    gl.delete_shader(fragment);

    if !gl.get_program_link_status(program) {
        let log = gl.get_program_info_log(program);
        gl.delete_program(program);
        return Err(RenderError::ProgramLink(log));
    }
    Ok(program)
}

/// Look up a uniform, mapping absence to a typed error
pub(crate) unsafe fn require_uniform(
    gl: &glow::Context,
    program: glow::Program,
    name: &'static str,
) -> Result<glow::UniformLocation, RenderError> {
    gl.get_uniform_location(program, name)
        .ok_or(RenderError::MissingUniform(name))
}
