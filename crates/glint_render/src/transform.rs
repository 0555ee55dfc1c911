//! Transform stack
//!
//! A stack of model matrices driving every draw. Each entry pairs the 4x4
//! model matrix with a 3x3 normal matrix kept in sync through rotations and
//! scales. The root identity entry is permanent: popping it is an invariant
//! violation and panics rather than leaving a corrupted stack to silently
//! mis-render the rest of the session.

use glam::{Mat3, Mat4, Quat, Vec3};

/// One stack entry: model matrix + companion normal matrix
#[derive(Clone, Copy, Debug)]
pub struct MatrixState {
    pub model: Mat4,
    pub normal: Mat3,
}

impl MatrixState {
    fn identity() -> Self {
        Self {
            model: Mat4::IDENTITY,
            normal: Mat3::IDENTITY,
        }
    }
}

/// Stack of 4x4 model matrices with push/pop/translate/rotate/scale
#[derive(Clone, Debug)]
pub struct TransformStack {
    stack: Vec<MatrixState>,
}

impl TransformStack {
    pub fn new() -> Self {
        Self {
            stack: vec![MatrixState::identity()],
        }
    }

    /// Duplicate the current top state (deep copy of both matrices)
    pub fn push(&mut self) {
        let top = *self.top_state();
        self.stack.push(top);
    }

    /// Remove the top state, restoring the parent.
    ///
    /// # Panics
    ///
    /// Panics if only the root state remains: an unbalanced pop means the
    /// caller's push/pop discipline is broken and everything drawn
    /// afterwards would use a wrong matrix.
    pub fn pop(&mut self) {
        if self.stack.len() <= 1 {
            panic!("transform stack underflow: cannot pop the root identity state");
        }
        self.stack.pop();
    }

    /// Clear back to a single identity state
    pub fn reset(&mut self) {
        self.stack.clear();
        self.stack.push(MatrixState::identity());
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Translate the top matrix in place
    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        let top = self.top_state_mut();
        top.model *= Mat4::from_translation(Vec3::new(x, y, z));
    }

    /// Rotate the top matrix around the Z axis (degrees)
    pub fn rotate_z(&mut self, degrees: f32) {
        let radians = degrees.to_radians();
        let top = self.top_state_mut();
        top.model *= Mat4::from_rotation_z(radians);
        top.normal *= Mat3::from_quat(Quat::from_rotation_z(radians));
    }

    /// Scale the top matrix in place.
    ///
    /// Uniform scale only flips the normal-matrix sign for negative factors;
    /// non-uniform scale applies the inverted factors so normals stay
    /// perpendicular.
    pub fn scale(&mut self, x: f32, y: f32, z: f32) {
        let top = self.top_state_mut();
        top.model *= Mat4::from_scale(Vec3::new(x, y, z));

        if x == y && y == z {
            if x < 0.0 {
                top.normal *= -1.0;
            }
        } else {
            let invert = |v: f32| if v == 0.0 { 0.0 } else { 1.0 / v };
            top.normal *= Mat3::from_diagonal(Vec3::new(invert(x), invert(y), invert(z)));
        }
    }

    /// Current model matrix, by reference (no copy).
    ///
    /// Callers must not retain this reference across push/pop calls.
    pub fn top(&self) -> &Mat4 {
        &self.top_state().model
    }

    /// Current normal matrix, by reference
    pub fn normal(&self) -> &Mat3 {
        &self.top_state().normal
    }

    /// Translation component of the current model matrix.
    ///
    /// The scissor stack reads this so clip regions follow scroll offsets
    /// applied via [`translate`](Self::translate).
    pub fn translation(&self) -> Vec3 {
        self.top_state().model.w_axis.truncate()
    }

    fn top_state(&self) -> &MatrixState {
        self.stack.last().expect("transform stack is never empty")
    }

    fn top_state_mut(&mut self) -> &mut MatrixState {
        self.stack
            .last_mut()
            .expect("transform stack is never empty")
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}
