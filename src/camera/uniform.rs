use glam::Mat4;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Per-object transform block, laid out for direct upload to a uniform
/// buffer.
pub struct TransformUniform {
    /// Object-to-world matrix, column-major.
    pub world: [[f32; 4]; 4],
    /// Inverse-transpose of `world` for transforming normals.
    pub normal: [[f32; 4]; 4],
}

impl Default for TransformUniform {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY)
    }
}

impl TransformUniform {
    /// Build the block for the given world matrix.
    #[must_use]
    pub fn new(world: Mat4) -> Self {
        Self {
            world: world.to_cols_array_2d(),
            normal: normal_matrix(world).to_cols_array_2d(),
        }
    }

    /// Replace the world matrix, recomputing the normal matrix.
    pub fn update(&mut self, world: Mat4) {
        *self = Self::new(world);
    }

    /// Raw bytes for a buffer write.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// `transpose(inverse(world))`. A singular matrix yields the identity.
#[must_use]
pub fn normal_matrix(world: Mat4) -> Mat4 {
    if world.determinant().abs() <= f32::EPSILON {
        return Mat4::IDENTITY;
    }
    world.inverse().transpose()
}
