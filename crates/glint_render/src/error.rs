//! Render pipeline errors

use thiserror::Error;

/// Errors surfaced while building GL resources.
///
/// Invariant violations (popping the root transform state, registering a
/// renderer twice) are not represented here: those are programming errors
/// and panic instead of propagating.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Shader compilation failed: {0}")]
    ShaderCompile(String),

    #[error("Program link failed: {0}")]
    ProgramLink(String),

    #[error("Failed to create GL resource: {0}")]
    ResourceCreation(String),

    #[error("Uniform '{0}' missing from shader program")]
    MissingUniform(&'static str),
}
