//! Glint OpenGL Pipeline
//!
//! Immediate-mode rendering on a host-engine-shared OpenGL context:
//!
//! - **State guard**: captures/restores GL state around every draw so the
//!   host's own rendering is undisturbed
//! - **Transform stack**: nested model matrices (+ normal matrices)
//! - **Scissor stack**: nested physical-pixel clip rectangles
//! - **Mesh**: append-only CPU vertex buffer, flushed as triangle lists
//! - **Tessellator**: rounded rects, outlines, arcs, pie/donut slices, lines
//! - **Render context**: the dependency-injected object tying it together
//!
//! All GL calls are confined to [`context`], [`state_guard`], and
//! [`shaders`]; the stacks and the tessellator are pure CPU code.

pub mod context;
pub mod mesh;
pub mod scissor;
pub mod shaders;
pub mod state_guard;
pub mod tessellator;
pub mod transform;

mod error;

pub use context::{RenderContext, RendererSlot};
pub use error::RenderError;
pub use mesh::{Mesh, VertexFormat};
pub use scissor::ScissorStack;
pub use state_guard::GlStateGuard;
pub use transform::TransformStack;
