#![warn(clippy::pedantic)]

use std::fmt::{Display, Formatter};

use log::{debug, trace};
use matstack_math::{
    matrix::{Identity, Matrix4f},
    vector::Vector3f,
};

pub type Result<T> = std::result::Result<T, MatrixStackError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixStackError {
    /// `pop` was called with no saved matrix left.
    Underflow,
}

impl Display for MatrixStackError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MatrixStackError::Underflow => write!(f, "matrix stack underflow"),
        }
    }
}

impl std::error::Error for MatrixStackError {}

/// The current transform plus a LIFO history of saved transforms.
///
/// Every transform operation post-multiplies: `current = current * transform`,
/// so the newest transform applies in the local frame.
#[derive(Debug, Clone)]
pub struct MatrixStack {
    current: Matrix4f,
    history: Vec<Matrix4f>,
}

impl MatrixStack {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            current: Matrix4f::identity(),
            history: Vec::with_capacity(capacity),
        }
    }

    #[must_use]
    pub fn top(&self) -> Matrix4f {
        self.current
    }

    /// Number of saved matrices.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    pub fn push(&mut self) {
        self.history.push(self.current);
        trace!("Pushed matrix, depth {}", self.history.len());
    }

    /// Restores the most recently pushed matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixStackError::Underflow`] if nothing was pushed. The
    /// current matrix is left unchanged in that case.
    pub fn pop(&mut self) -> Result<()> {
        let Some(saved) = self.history.pop() else {
            debug!("Pop on an empty matrix stack");
            return Err(MatrixStackError::Underflow);
        };

        self.current = saved;
        trace!("Popped matrix, depth {}", self.history.len());
        Ok(())
    }

    pub fn perspective(&mut self, fov_y: f32, aspect: f32, near: f32, far: f32) {
        self.current *= Matrix4f::new_perspective(fov_y, aspect, near, far);
    }

    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.current *= Matrix4f::new_translation(&Vector3f::new(x, y, z));
    }

    pub fn scale(&mut self, x: f32, y: f32, z: f32) {
        self.current *= Matrix4f::new_scale(&Vector3f::new(x, y, z));
    }
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::new()
    }
}
